//! Configuration management with layered loading
//!
//! Settings feed option defaults of the `tango` launcher.
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/tango/tango.toml`
//! 3. Environment variables: `TANGO_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::application::ApplicationError;
use crate::domain::OptionValue;

/// Rounds per drill when nothing else is configured.
pub const DEFAULT_ROUNDS: u32 = 20;

/// Launcher settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Default for `-r`
    pub rounds: u32,
    /// Default for `-d`; without it `-d` must be given
    pub dictionary: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            dictionary: None,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub rounds: Option<u32>,
    pub dictionary: Option<PathBuf>,
}

/// Get the XDG config directory for tango.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tango").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("tango.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Expand `~`, `$VAR` and `${VAR}`; leaves the text as is when expansion fails.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Load settings with layered precedence from the standard locations.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using `global_path` as the global config file (skipped when missing).
    pub fn load_from(global_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = global_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();
        Ok(current)
    }

    /// Scalar merge: overlay wins if Some, otherwise keep base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            rounds: overlay.rounds.unwrap_or(self.rounds),
            dictionary: overlay
                .dictionary
                .clone()
                .or_else(|| self.dictionary.clone()),
        }
    }

    /// Apply TANGO_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("TANGO").prefix_separator("_"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("rounds") {
            settings.rounds = u32::parse_value(&val).map_err(|e| ApplicationError::Config {
                message: format!("TANGO_ROUNDS: {e}"),
            })?;
        }
        if let Ok(val) = config.get_string("dictionary") {
            settings.dictionary = Some(PathBuf::from(val));
        }

        Ok(settings)
    }

    fn expand_paths(&mut self) {
        if let Some(dictionary) = &self.dictionary {
            let expanded = expand_env_vars(dictionary.to_string_lossy().as_ref());
            self.dictionary = Some(PathBuf::from(expanded));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_base_when_overlay_is_silent() {
        let base = Settings::default();

        let merged = base.merge_with(&RawSettings::default());

        assert_eq!(merged, base);
    }

    #[test]
    fn test_merge_overlay_wins() {
        let base = Settings::default();
        let overlay = RawSettings {
            rounds: Some(5),
            dictionary: Some(PathBuf::from("words.txt")),
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.rounds, 5);
        assert_eq!(merged.dictionary, Some(PathBuf::from("words.txt")));
    }

    #[test]
    fn test_expand_env_vars_leaves_plain_text() {
        assert_eq!(expand_env_vars("dict.txt"), "dict.txt");
    }
}
