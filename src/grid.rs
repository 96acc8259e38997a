//! Sparse Game of Life grid
//!
//! Only live cells are stored, so the board has no edges: patterns are free
//! to grow in any direction, including into negative coordinates.

use std::collections::HashSet;

/// Offsets of the eight cells surrounding a cell
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A cell position on the unbounded grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The surrounding cells, in no particular order.
    ///
    /// Always eight, except on the outermost rows and columns of the `i64`
    /// range: there is nothing past them, so the grid does not wrap.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
            Some(Coordinate::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
        })
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Smallest rectangle holding every live cell (inclusive on both ends)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Coordinate,
    pub max: Coordinate,
}

/// The set of cells alive in the current generation.
///
/// A coordinate that is not in the set is dead. The set is only ever
/// replaced wholesale by [`GridState::advance`], so a reader never sees a
/// mix of two generations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridState {
    alive: HashSet<Coordinate>,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid whose only live cells are `coords`
    pub fn with_cells<I, C>(coords: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        let mut grid = Self::new();
        grid.seed(coords);
        grid
    }

    pub fn is_alive(&self, coord: Coordinate) -> bool {
        self.alive.contains(&coord)
    }

    /// Mark every coordinate alive. Seeding a cell twice is the same as once.
    pub fn seed<I, C>(&mut self, coords: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        for coord in coords {
            self.set_alive(coord.into());
        }
    }

    pub fn set_alive(&mut self, coord: Coordinate) {
        self.alive.insert(coord);
    }

    pub fn neighbors(&self, coord: Coordinate) -> impl Iterator<Item = Coordinate> {
        coord.neighbors()
    }

    /// Number of live cells among the eight neighbors of `coord` (0..=8)
    pub fn alive_neighbor_count(&self, coord: Coordinate) -> u8 {
        self.neighbors(coord)
            .filter(|n| self.is_alive(*n))
            .count() as u8
    }

    /// Every live cell plus every neighbor of one.
    ///
    /// A cell outside this set has no live neighbors, so it cannot be alive
    /// in the next generation.
    pub fn candidate_cells(&self) -> HashSet<Coordinate> {
        let mut candidates = HashSet::with_capacity(self.alive.len() * 9);
        for &cell in &self.alive {
            candidates.insert(cell);
            candidates.extend(cell.neighbors());
        }
        candidates
    }

    /// Compute the following generation without touching this one
    pub fn next_generation(&self) -> GridState {
        let alive = self
            .candidate_cells()
            .into_iter()
            .filter(|&cell| self.survives(cell))
            .collect();

        GridState { alive }
    }

    /// Replace the live set with the next generation
    pub fn advance(&mut self) {
        *self = self.next_generation();
    }

    /// Birth on exactly 3 neighbors whatever the current state; survival on
    /// exactly 2 only for a cell that is already alive.
    fn survives(&self, cell: Coordinate) -> bool {
        let neighbors = self.alive_neighbor_count(cell);
        (self.is_alive(cell) && neighbors == 2) || neighbors == 3
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    /// Live cells in unspecified order
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.alive.iter().copied()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let mut cells = self.cells();
        let first = cells.next()?;
        let bounds = cells.fold(Bounds { min: first, max: first }, |b, c| Bounds {
            min: Coordinate::new(b.min.x.min(c.x), b.min.y.min(c.y)),
            max: Coordinate::new(b.max.x.max(c.x), b.max.y.max(c.y)),
        });
        Some(bounds)
    }
}
