//! Configuration structs with defaults and TOML persistence.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use cosmos_core::Rgba;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "cosmos.log";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Frames per second requested from the terminal.
    pub frame_rate: u32,
    /// Seed for the particle generator. Omit for a different sky every run.
    pub seed: Option<u64>,
    /// Backdrop color behind the transparent canvas, as `#rrggbb`.
    pub background: String,
    /// Font family requested for zodiac glyphs.
    pub glyph_font: String,
    pub cell: CellConfig,
    pub intro: IntroConfig,
    pub log: LogConfig,
}

/// Logical pixels covered by one terminal cell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CellConfig {
    pub width: f32,
    pub height: f32,
}

/// Opening mantra and title reveal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IntroConfig {
    pub enabled: bool,
    /// Line shown alone before the sky.
    pub mantra: String,
    /// Line revealed once the mantra is gone.
    pub title: String,
    /// Seconds the mantra stays fully visible.
    pub display_secs: f64,
    /// Seconds the mantra takes to fade out.
    pub fade_secs: f64,
    /// Seconds the title takes to fade in.
    pub reveal_secs: f64,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `cosmos_scene=debug`.
    pub level: String,
    /// Log file path. Defaults to the user's local data directory.
    pub file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            seed: None,
            background: "#05051a".to_string(),
            glyph_font: "Cinzel".to_string(),
            cell: CellConfig::default(),
            intro: IntroConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            width: 8.0,
            height: 16.0,
        }
    }
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mantra: "ॐ Asato mā sad gamaya".to_string(),
            title: "cosmos".to_string(),
            display_secs: 3.0,
            fade_secs: 1.5,
            reveal_secs: 2.0,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "cosmos")
}

fn seconds(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or_default()
}

impl IntroConfig {
    pub fn display(&self) -> Duration {
        seconds(self.display_secs)
    }

    pub fn fade(&self) -> Duration {
        seconds(self.fade_secs)
    }

    pub fn reveal(&self) -> Duration {
        seconds(self.reveal_secs)
    }
}

impl LogConfig {
    /// Where log lines go: the configured file, else `cosmos.log` in the
    /// local data directory.
    pub fn path(&self) -> Option<PathBuf> {
        self.file
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE)))
    }
}

impl Config {
    /// `config.toml` in the platform config directory, if one exists.
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load and validate the config at `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config: Config = toml::from_str(&contents).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as TOML, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_error = |source| ConfigError::WriteError {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        let serialized = toml::to_string_pretty(self).map_err(ConfigError::SerializeError)?;
        std::fs::write(path, serialized).map_err(write_error)
    }

    /// Reject values that parse but cannot drive the renderer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 {
            return Err(ConfigError::InvalidValue {
                field: "frame_rate",
                reason: "must be at least 1".to_string(),
            });
        }
        self.background_color()?;

        for (field, value) in [("cell.width", self.cell.width), ("cell.height", self.cell.height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("{value} is not a positive size"),
                });
            }
        }

        let intro = &self.intro;
        for (field, value) in [
            ("intro.display_secs", intro.display_secs),
            ("intro.fade_secs", intro.fade_secs),
            ("intro.reveal_secs", intro.reveal_secs),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("{value} is not a duration in seconds"),
                });
            }
        }
        Ok(())
    }

    pub fn background_color(&self) -> Result<Rgba, ConfigError> {
        Rgba::from_hex(&self.background).ok_or_else(|| ConfigError::InvalidValue {
            field: "background",
            reason: format!("{:?} is not a #rrggbb color", self.background),
        })
    }

    /// Time between frames at the configured rate.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.seed, None);
        assert_eq!(config.glyph_font, "Cinzel");
        assert_eq!(config.background_color().unwrap(), Rgba::rgb(5, 5, 26));
        assert_eq!(config.cell, CellConfig { width: 8.0, height: 16.0 });
        assert_eq!(config.intro.display(), Duration::from_secs(3));
        assert_eq!(config.intro.fade(), Duration::from_millis(1500));
        assert_eq!(config.intro.reveal(), Duration::from_secs(2));
        assert_eq!(config.log.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_frame_interval() {
        let mut config = Config::default();
        config.frame_rate = 50;
        assert_eq!(config.frame_interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("seed = 7\n[intro]\nenabled = false\n").unwrap();
        assert_eq!(config.seed, Some(7));
        assert!(!config.intro.enabled);
        assert_eq!(config.intro.mantra, IntroConfig::default().mantra);
        assert_eq!(config.cell, CellConfig::default());
        assert_eq!(config.frame_rate, 60);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config: Config = toml::from_str("future_setting = true\n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let mut config = Config::default();
        config.frame_rate = 30;
        config.seed = Some(42);
        config.background = "#000000".to_string();
        config.log.file = Some(dir.path().join("cosmos.log"));

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_invalid_toml_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "frame_rate = [not valid").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_bad_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        std::fs::write(&path, "frame_rate = 0\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue { field: "frame_rate", .. })
        ));

        std::fs::write(&path, "background = \"navy\"\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue { field: "background", .. })
        ));

        std::fs::write(&path, "[cell]\nwidth = 0.0\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue { field: "cell.width", .. })
        ));

        std::fs::write(&path, "[intro]\nfade_secs = -1.0\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue { field: "intro.fade_secs", .. })
        ));
    }

    #[test]
    fn test_log_path_prefers_configured_file() {
        let log = LogConfig {
            level: "debug".to_string(),
            file: Some(PathBuf::from("/tmp/cosmos-test.log")),
        };
        assert_eq!(log.path(), Some(PathBuf::from("/tmp/cosmos-test.log")));
    }
}
