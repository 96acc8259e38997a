//! Text rendering of a window onto the grid

use crate::grid::{Coordinate, GridState};

/// Rectangular window onto the unbounded grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub origin_x: i64,
    pub origin_y: i64,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(origin_x: i64, origin_y: i64, width: u16, height: u16) -> Self {
        Self { origin_x, origin_y, width, height }
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        let dx = i128::from(coord.x) - i128::from(self.origin_x);
        let dy = i128::from(coord.y) - i128::from(self.origin_y);
        (0..i128::from(self.width)).contains(&dx) && (0..i128::from(self.height)).contains(&dy)
    }

    /// Grid coordinate shown at column `dx`, row `dy` of the window, or
    /// `None` when that spot lies past the end of the `i64` range
    pub fn cell(&self, dx: u16, dy: u16) -> Option<Coordinate> {
        Some(Coordinate::new(
            self.origin_x.checked_add(i64::from(dx))?,
            self.origin_y.checked_add(i64::from(dy))?,
        ))
    }

    /// Every coordinate in the window, row by row
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let view = *self;
        (0..view.height).flat_map(move |dy| (0..view.width).filter_map(move |dx| view.cell(dx, dy)))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0, 0, 80, 30)
    }
}

/// Characters drawn for live and dead cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self { alive: '#', dead: '.' }
    }
}

/// One string per row of `viewport`, top row first
pub fn render_rows(grid: &GridState, viewport: &Viewport, glyphs: &Glyphs) -> Vec<String> {
    (0..viewport.height)
        .map(|dy| {
            (0..viewport.width)
                .map(|dx| {
                    if viewport.cell(dx, dy).is_some_and(|c| grid.is_alive(c)) {
                        glyphs.alive
                    } else {
                        glyphs.dead
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_block_in_reference_window() {
        let grid = GridState::with_cells([(1, 5), (2, 5), (1, 6), (2, 6)]);
        let rows = render_rows(&grid, &Viewport::default(), &Glyphs::default());

        assert_eq!(rows.len(), 30);
        assert!(rows.iter().all(|row| row.chars().count() == 80));
        assert!(rows[5].starts_with(".##."));
        assert!(rows[6].starts_with(".##."));
        assert_eq!(rows.iter().map(|r| r.matches('#').count()).sum::<usize>(), 4);
    }

    #[test]
    fn window_can_look_at_negative_space() {
        let grid = GridState::with_cells([(-10, -10), (0, 0)]);
        let view = Viewport::new(-11, -11, 3, 3);
        let glyphs = Glyphs { alive: 'o', dead: ' ' };
        assert_eq!(render_rows(&grid, &view, &glyphs), vec!["   ", " o ", "   "]);
    }

    #[test]
    fn window_at_the_edge_of_the_coordinate_range() {
        let grid = GridState::with_cells([(i64::MAX - 1, 0), (i64::MAX, 0)]);
        let view = Viewport::new(i64::MAX - 1, 0, 4, 1);
        assert_eq!(render_rows(&grid, &view, &Glyphs::default()), vec!["##.."]);
        assert_eq!(view.coordinates().count(), 2);
        assert_eq!(view.cell(2, 0), None);
        assert!(view.contains(Coordinate::new(i64::MAX, 0)));
        assert!(!view.contains(Coordinate::new(i64::MIN, 0)));

        let low = Viewport::new(i64::MIN, i64::MIN, 2, 2);
        assert!(low.contains(Coordinate::new(i64::MIN, i64::MIN)));
        assert!(!low.contains(Coordinate::new(i64::MAX, i64::MAX)));
    }

    #[test]
    fn viewport_bounds() {
        let view = Viewport::new(-2, 3, 4, 2);
        assert!(view.contains(Coordinate::new(-2, 3)));
        assert!(view.contains(Coordinate::new(1, 4)));
        assert!(!view.contains(Coordinate::new(2, 4)));
        assert!(!view.contains(Coordinate::new(0, 5)));
        assert_eq!(view.coordinates().count(), 8);
        assert_eq!(view.coordinates().next(), Some(Coordinate::new(-2, 3)));
    }
}
