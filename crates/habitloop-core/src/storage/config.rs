//! TOML-based application configuration.
//!
//! Holds preferences that sit outside the tracked state itself: the
//! default team name for a fresh install and how many history days the
//! CLI shows. Stored at `~/.config/habitloop/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/habitloop/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Team a fresh day belongs to before the user picks one.
    #[serde(default = "default_team")]
    pub default_team: String,
    /// Number of history days shown by default.
    #[serde(default = "default_history_days")]
    pub history_days: u32,
}

fn default_team() -> String {
    "Home".to_string()
}

fn default_history_days() -> u32 {
    7
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_team: default_team(),
            history_days: default_history_days(),
        }
    }
}

impl AppConfig {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/habitloop"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default_team" => Some(self.default_team.clone()),
            "history_days" => Some(self.history_days.to_string()),
            _ => None,
        }
    }

    /// Set a config value by key and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be
    /// parsed, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "default_team" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(ConfigError::InvalidKey {
                        key: key.to_string(),
                        message: "team name cannot be blank".to_string(),
                    });
                }
                self.default_team = value.to_string();
            }
            "history_days" => {
                self.history_days = value.parse().map_err(|_| ConfigError::InvalidKey {
                    key: key.to_string(),
                    message: format!("cannot parse '{value}' as a number"),
                })?;
            }
            _ => {
                return Err(ConfigError::InvalidKey {
                    key: key.to_string(),
                    message: "unknown key".to_string(),
                })
            }
        }
        self.save()
    }
}
