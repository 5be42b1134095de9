//! CLI configuration management.
//!
//! Supports loading configuration from environment variables and a config
//! file with proper precedence (defaults, then file, then environment).
//! Configuration only affects how the blueprint is rendered and where files
//! are written, never what the blueprint contains.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Application-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format when `--format` is not given.
    pub default_format: String,

    /// Spaces per nesting level when `--indent` is not given.
    pub indent: usize,

    /// Directory for file output when `--output` is given without a path.
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: "json".to_string(),
            indent: 2,
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration from the config file and environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        // Config file takes lower precedence than env vars
        if let Some(config_path) = Self::config_file_path() {
            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path).with_context(|| {
                    format!("Failed to read config from {}", config_path.display())
                })?;
                config = serde_json::from_str(&contents)
                    .with_context(|| "Failed to parse config file")?;
            }
        }

        // Override with environment variables
        if let Ok(format) = std::env::var("CPB_FORMAT") {
            config.default_format = format;
        }
        if let Ok(indent) = std::env::var("CPB_INDENT") {
            config.indent = indent.parse().unwrap_or(config.indent);
        }
        if let Ok(output_dir) = std::env::var("CPB_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(output_dir);
        }

        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Save current configuration to the config file.
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::config_file_path() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory: {}", parent.display())
                })?;
            }
            let contents = serde_json::to_string_pretty(self)?;
            std::fs::write(&config_path, contents)
                .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        }
        Ok(())
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "colorpro", "cpb")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }
}
