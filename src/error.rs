//! Error types for termlife.
//!
//! The simulation core never fails. Everything here comes from the
//! collaborators around it: seed input, settings files and the terminal.

use std::io;
use std::path::PathBuf;

/// Errors raised while preparing or running a simulation.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    /// A coordinate line could not be read as an `x,y` integer pair.
    #[error("invalid coordinate on line {line}: {content:?}")]
    InvalidInput {
        /// 1-based line number within the input.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },

    /// No preset pattern goes by this name.
    #[error("unknown pattern {0:?} (available: {available})", available = crate::pattern::PRESET_NAMES.join(", "))]
    UnknownPattern(String),

    /// A display glyph must be exactly one character.
    #[error("glyph must be a single character, got {0:?}")]
    InvalidGlyph(String),

    /// Reading a seed file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A settings file given explicitly could not be parsed.
    #[error("invalid settings in {path}: {source}")]
    Settings {
        /// Settings file path.
        path: PathBuf,
        /// TOML decoding error.
        source: toml::de::Error,
    },

    /// Drawing to the terminal failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LifeError>;
