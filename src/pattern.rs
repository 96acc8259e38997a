//! Seed patterns
//!
//! Everything that turns outside input into live cells lives here: the
//! built-in presets, random soups and plain-text coordinate lists.

use crate::error::{LifeError, Result};
use crate::grid::Coordinate;
use crate::render::Viewport;
use rand::prelude::*;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Names accepted by [`preset`]
pub const PRESET_NAMES: &[&str] = &["default", "gun", "pulsar", "block", "blinker", "glider", "random"];

/// Chance of a cell starting alive in a random soup
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Gosper glider gun, anchored by a block at each end
const GLIDER_GUN: &[(i64, i64)] = &[
    // Block
    (1, 5), (2, 5), (1, 6), (2, 6),
    // Left half
    (13, 3), (14, 3), (12, 4), (16, 4), (11, 5), (17, 5), (11, 6), (15, 6),
    (17, 6), (18, 6), (11, 7), (17, 7), (12, 8), (16, 8), (13, 9), (14, 9),
    // Right half
    (25, 1), (23, 2), (25, 2), (21, 3), (22, 3), (21, 4), (22, 4), (21, 5),
    (22, 5), (23, 6), (25, 6), (25, 7),
    // Block
    (35, 3), (36, 3), (35, 4), (36, 4),
];

/// Period 3 oscillator
const PULSAR: &[(i64, i64)] = &[
    (62, 6), (63, 6), (64, 6), (68, 6), (69, 6), (70, 6),
    (60, 8), (65, 8), (67, 8), (72, 8),
    (60, 9), (65, 9), (67, 9), (72, 9),
    (60, 10), (65, 10), (67, 10), (72, 10),
    (62, 11), (63, 11), (64, 11), (68, 11), (69, 11), (70, 11),
    (62, 13), (63, 13), (64, 13), (68, 13), (69, 13), (70, 13),
    (60, 14), (65, 14), (67, 14), (72, 14),
    (60, 15), (65, 15), (67, 15), (72, 15),
    (60, 16), (65, 16), (67, 16), (72, 16),
    (62, 18), (63, 18), (64, 18), (68, 18), (69, 18), (70, 18),
];

const BLOCK: &[(i64, i64)] = &[(1, 5), (2, 5), (1, 6), (2, 6)];
const BLINKER: &[(i64, i64)] = &[(1, 0), (1, 1), (1, 2)];
const GLIDER: &[(i64, i64)] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

fn coords(cells: &[(i64, i64)]) -> Vec<Coordinate> {
    cells.iter().copied().map(Coordinate::from).collect()
}

/// The glider gun and pulsar shown when no pattern is chosen
pub fn default_seed() -> Vec<Coordinate> {
    let mut cells = coords(GLIDER_GUN);
    cells.extend(coords(PULSAR));
    cells
}

/// Look up a preset by name (case-insensitive).
///
/// `random` fills `viewport` with a soup from `rng`.
pub fn preset(name: &str, viewport: &Viewport, rng: &mut StdRng) -> Result<Vec<Coordinate>> {
    let cells = match name.to_lowercase().as_str() {
        "default" => default_seed(),
        "gun" | "gosper" => coords(GLIDER_GUN),
        "pulsar" => coords(PULSAR),
        "block" => coords(BLOCK),
        "blinker" => coords(BLINKER),
        "glider" => coords(GLIDER),
        "random" | "soup" => random_soup(viewport, DEFAULT_DENSITY, rng),
        _ => return Err(LifeError::UnknownPattern(name.to_string())),
    };
    Ok(cells)
}

/// Every cell of `viewport` alive with probability `density`
pub fn random_soup(viewport: &Viewport, density: f64, rng: &mut StdRng) -> Vec<Coordinate> {
    let density = density.clamp(0.0, 1.0);
    viewport
        .coordinates()
        .filter(|_| rng.gen_bool(density))
        .collect()
}

/// Parse one `x,y` pair per line.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_coordinates(text: &str) -> Result<Vec<Coordinate>> {
    let mut cells = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let invalid = || LifeError::InvalidInput {
            line: index + 1,
            content: line.to_string(),
        };

        let (x, y) = line.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse::<i64>().map_err(|_| invalid())?;
        let y = y.trim().parse::<i64>().map_err(|_| invalid())?;
        cells.push(Coordinate::new(x, y));
    }

    Ok(cells)
}

/// Read and parse a coordinate file
pub fn load_coordinates(path: &Path) -> Result<Vec<Coordinate>> {
    let text = fs::read_to_string(path).map_err(|source| LifeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cells = parse_coordinates(&text)?;
    debug!(path = %path.display(), cells = cells.len(), "loaded seed file");
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridState;

    fn viewport() -> Viewport {
        Viewport::new(0, 0, 80, 30)
    }

    #[test]
    fn default_seed_is_gun_and_pulsar() {
        let cells = default_seed();
        assert_eq!(cells.len(), 84);
        let grid = GridState::with_cells(cells);
        assert_eq!(grid.population(), 84);
        assert!(grid.is_alive(Coordinate::new(1, 5)));
        assert!(grid.is_alive(Coordinate::new(70, 18)));
    }

    #[test]
    fn pulsar_has_period_three() {
        let start = GridState::with_cells(coords(PULSAR));
        let mut grid = start.clone();
        grid.advance();
        assert_ne!(grid, start);
        grid.advance();
        grid.advance();
        assert_eq!(grid, start);
    }

    #[test]
    fn glider_gun_emits_gliders() {
        let mut grid = GridState::with_cells(coords(GLIDER_GUN));
        let start = grid.population();
        for _ in 0..120 {
            grid.advance();
        }
        // Four gliders of five cells each have left the gun by now
        assert!(grid.population() >= start + 15);
    }

    #[test]
    fn presets_by_name() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(preset("block", &viewport(), &mut rng).unwrap().len(), 4);
        assert_eq!(preset("Glider", &viewport(), &mut rng).unwrap().len(), 5);
        assert_eq!(preset("default", &viewport(), &mut rng).unwrap(), default_seed());
        assert!(matches!(
            preset("spaceship", &viewport(), &mut rng),
            Err(LifeError::UnknownPattern(name)) if name == "spaceship"
        ));
    }

    #[test]
    fn random_soup_is_reproducible_and_stays_in_view() {
        let view = Viewport::new(-5, -5, 20, 10);
        let a = random_soup(&view, DEFAULT_DENSITY, &mut StdRng::seed_from_u64(42));
        let b = random_soup(&view, DEFAULT_DENSITY, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert!(!a.is_empty() && a.len() < 200);
        assert!(a.iter().all(|c| view.contains(*c)));

        assert!(random_soup(&view, 0.0, &mut StdRng::seed_from_u64(1)).is_empty());
        assert_eq!(random_soup(&view, 1.0, &mut StdRng::seed_from_u64(1)).len(), 200);
    }

    #[test]
    fn parses_coordinate_lines() {
        let text = "# block\n1,5\n 2 , 5 \n\n-1,-6\n";
        let cells = parse_coordinates(text).unwrap();
        assert_eq!(
            cells,
            vec![Coordinate::new(1, 5), Coordinate::new(2, 5), Coordinate::new(-1, -6)]
        );
    }

    #[test]
    fn reports_the_bad_line() {
        let err = parse_coordinates("1,2\n\nthree,4\n").unwrap_err();
        match err {
            LifeError::InvalidInput { line, content } => {
                assert_eq!(line, 3);
                assert_eq!(content, "three,4");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(matches!(
            parse_coordinates("12"),
            Err(LifeError::InvalidInput { line: 1, .. })
        ));
        assert!(matches!(
            parse_coordinates("1,2,3"),
            Err(LifeError::InvalidInput { line: 1, .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_coordinates(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, LifeError::Io { .. }));
    }
}
