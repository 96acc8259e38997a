use crate::render::{Glyphs, Viewport};
use std::path::PathBuf;
use std::time::Duration;

/// Default pause between generations
pub const DEFAULT_INTERVAL_MS: u64 = 100;

/// Generations printed by `print` when no limit is given
pub const DEFAULT_PRINT_GENERATIONS: u64 = 10;

/// How frames reach the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Redraw the terminal in place
    Live,
    /// Write plain frames to stdout
    Print,
}

/// Where the initial live cells come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    Preset(String),
    File(PathBuf),
}

/// Configuration for a simulation run, after settings and flags are merged
#[derive(Debug, Clone)]
pub struct LifeConfig {
    pub mode: OutputMode,
    pub source: SeedSource,
    pub seed: Option<u64>,
    pub viewport: Viewport,
    pub glyphs: Glyphs,
    pub interval: Duration,
    /// Stop after this many advances; `None` runs until killed
    pub generations: Option<u64>,
    pub show_status: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::Live,
            source: SeedSource::Preset("default".to_string()),
            seed: None,
            viewport: Viewport::default(),
            glyphs: Glyphs::default(),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            generations: None,
            show_status: false,
        }
    }
}
