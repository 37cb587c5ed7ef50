//! CLI configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Get default config directory
pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".adjgraph")
}

/// Get default config file path
pub fn config_file_path() -> PathBuf {
    default_config_dir().join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format: table or json
    pub format: String,

    /// Weight for script edges that do not give one
    pub default_weight: f64,

    /// Abort a script on the first rejected edge
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: "table".to_string(),
            default_weight: 1.0,
            strict: false,
        }
    }
}

impl Config {
    /// Load config from `path`. A missing file gives the defaults; an
    /// unreadable or invalid one is an error.
    pub fn try_load_from(path: &Path) -> anyhow::Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config file at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Like [`Config::try_load_from`], but falls back to defaults on error
    pub fn load_from(path: &Path) -> Self {
        Self::try_load_from(path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring config file: {:#}", e);
            Self::default()
        })
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// All known config keys
    pub fn keys() -> &'static [&'static str] {
        &["format", "default_weight", "strict"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "format" => Some(self.format.clone()),
            "default_weight" => Some(self.default_weight.to_string()),
            "strict" => Some(self.strict.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "format" => {
                value.parse::<OutputFormat>()?;
                self.format = value.to_lowercase();
            }
            "default_weight" => {
                self.default_weight = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid weight '{}'", value))?;
            }
            "strict" => {
                self.strict = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid boolean '{}'", value))?;
            }
            _ => anyhow::bail!(
                "Unknown config key: {} (available keys: {})",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }
}
