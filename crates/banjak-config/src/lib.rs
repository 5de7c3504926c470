//! Configuration loading for the banjak particle playground.
//!
//! An optional `config.toml` in the platform config directory tunes how the
//! scene is presented. Every field has a default, so a missing file or a
//! missing field is not an error; a file that is present but malformed is.
//! Scene behavior itself is not configurable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use banjak_core::{MarkerStyle, Rgb};
use directories::ProjectDirs;
use serde::Deserialize;

/// Errors raised while loading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid color {value:?}: expected hex like \"#1a2b3c\"")]
    InvalidColor { value: String },
    #[error("unknown marker {value:?}: expected braille, half-block, block or dot")]
    InvalidMarker { value: String },
}

/// File contents as written by the user; everything optional.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    background: Option<String>,
    marker: Option<String>,
    show_hud: Option<bool>,
}

/// Resolved startup configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Canvas background color.
    pub background: Rgb,
    /// Initial marker style for the canvas.
    pub marker: MarkerStyle,
    /// Whether the help line starts out visible.
    pub show_hud: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
            marker: MarkerStyle::default(),
            show_hud: true,
        }
    }
}

impl Config {
    /// Load the config file from the platform config directory.
    ///
    /// Falls back to defaults when the directory cannot be resolved or the
    /// file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })?;
        Self::resolve(raw)
    }

    fn resolve(raw: RawConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let background = match raw.background {
            Some(value) => {
                Rgb::from_hex(&value).ok_or(ConfigError::InvalidColor { value })?
            }
            None => defaults.background,
        };
        let marker = match raw.marker {
            Some(value) => {
                MarkerStyle::from_name(&value).ok_or(ConfigError::InvalidMarker { value })?
            }
            None => defaults.marker,
        };

        Ok(Self {
            background,
            marker,
            show_hud: raw.show_hud.unwrap_or(defaults.show_hud),
        })
    }
}

/// Platform-specific path of the config file.
fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "banjak").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Config, ConfigError> {
        Config::parse(text, Path::new("config.toml"))
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.background, Rgb::BLACK);
        assert_eq!(config.marker, MarkerStyle::Braille);
        assert!(config.show_hud);
    }

    #[test]
    fn test_full_file_overrides_everything() {
        let config = parse(
            r##"
            background = "#101820"
            marker = "half-block"
            show_hud = false
            "##,
        )
        .unwrap();

        assert_eq!(config.background, Rgb(0x101820));
        assert_eq!(config.marker, MarkerStyle::HalfBlock);
        assert!(!config.show_hud);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = parse("marker = \"dot\"").unwrap();
        assert_eq!(config.marker, MarkerStyle::Dot);
        assert_eq!(config.background, Rgb::BLACK);
        assert!(config.show_hud);
    }

    #[test]
    fn test_invalid_color_is_an_error() {
        let err = parse("background = \"not-a-color\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { .. }));
    }

    #[test]
    fn test_invalid_marker_is_an_error() {
        let err = parse("marker = \"sixel\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMarker { .. }));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = parse("background = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
