use crate::config::DEFAULT_INTERVAL_MS;
use crate::error::{LifeError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Contents of `config.toml`. Every field is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub timing: TimingSettings,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplaySettings {
    pub width: u16,
    pub height: u16,
    pub origin_x: i64,
    pub origin_y: i64,
    pub alive: char,
    pub dead: char,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            width: 80,
            height: 30,
            origin_x: 0,
            origin_y: 0,
            alive: '#',
            dead: '.',
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimingSettings {
    pub interval_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl Settings {
    /// Load the settings file from the user's config directory.
    ///
    /// A missing file gives defaults. So does a broken one, with a warning,
    /// since the user never asked for it by name.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(error = %err, "ignoring settings file");
                Self::default()
            }
        }
    }

    /// Load a settings file the user named explicitly; any failure is an error
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| LifeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::parse(&content).map_err(|source| LifeError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termlife")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let settings = Settings::parse(
            r#"
            [display]
            alive = "@"
            origin_x = -20

            [timing]
            interval_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(settings.display.alive, '@');
        assert_eq!(settings.display.dead, '.');
        assert_eq!(settings.display.origin_x, -20);
        assert_eq!(settings.display.width, 80);
        assert_eq!(settings.timing.interval_ms, 250);
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(Settings::parse("[display]\nwidth = \"wide\"\n").is_err());
        assert!(Settings::parse("[display]\nalive = \"##\"\n").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = Settings::load_from(Path::new("/no/such/termlife.toml")).unwrap_err();
        assert!(matches!(err, LifeError::Io { .. }));
    }
}
