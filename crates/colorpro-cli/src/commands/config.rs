//! Config command implementation.
//!
//! Manages CLI configuration.

use std::path::PathBuf;

use anyhow::Result;

use colorpro_render::OutputFormat;

use crate::config::Config;

/// Show current configuration.
pub fn show(config: &Config) -> Result<()> {
    println!("ColorPro Blueprint CLI Configuration");
    println!("{:-<40}", "");

    println!("Default Format:   {}", config.default_format);
    println!("Indent Width:     {}", config.indent);
    println!("Output Directory: {}", config.output_dir.display());

    if let Some(config_path) = Config::config_file_path() {
        println!("\nConfig file: {}", config_path.display());
    }

    Ok(())
}

/// Set a configuration value.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "format" | "default-format" => {
            // Validate before persisting
            value.parse::<OutputFormat>()?;
            config.default_format = value.to_lowercase();
            println!("Set default-format to: {}", value);
        }
        "indent" => {
            config.indent = value.parse()?;
            println!("Set indent to: {}", value);
        }
        "output-dir" => {
            config.output_dir = PathBuf::from(value);
            println!("Set output-dir to: {}", value);
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}. Valid keys: default-format, indent, output-dir",
                key
            );
        }
    }

    config.save()?;
    Ok(())
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    let value = match key {
        "format" | "default-format" => config.default_format.clone(),
        "indent" => config.indent.to_string(),
        "output-dir" => config.output_dir.display().to_string(),
        _ => {
            anyhow::bail!("Unknown config key: {}", key);
        }
    };

    println!("{}", value);
    Ok(())
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults");
    Ok(())
}
