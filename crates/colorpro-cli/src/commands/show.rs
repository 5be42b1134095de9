//! Show command implementation.
//!
//! Builds the blueprint descriptor, renders it, and prints it to stdout or
//! writes it to a file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use colorpro_core::blueprint;
use colorpro_render::{render, OutputFormat, RenderOptions, OVERVIEW_HEADER};

use crate::config::Config;

/// Render the blueprint and emit it.
///
/// `output` is `None` for stdout, `Some(None)` for a default file name in
/// the configured output directory, `Some(Some(path))` for an explicit file.
pub fn execute(
    config: &Config,
    format: Option<&str>,
    indent: Option<usize>,
    output: Option<Option<PathBuf>>,
) -> Result<()> {
    let format: OutputFormat = format.unwrap_or(&config.default_format).parse()?;
    let options = RenderOptions::with_indent(indent.unwrap_or(config.indent));

    let descriptor = blueprint();
    info!(
        ?format,
        indent = options.indent,
        sections = descriptor.len(),
        "Rendering blueprint"
    );
    let content = render(&descriptor, format, &options)?;

    match output {
        Some(output) => {
            let output_path = output.unwrap_or_else(|| {
                config
                    .output_dir
                    .join(format!("blueprint.{}", format.extension()))
            });

            // Ensure parent directory exists
            if let Some(parent) = output_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }

            std::fs::write(&output_path, &content)
                .with_context(|| format!("Failed to write output to: {}", output_path.display()))?;

            println!("Output written to: {}", output_path.display());
        }
        None => {
            println!("{OVERVIEW_HEADER}");
            // The tree form already ends with a newline; JSON does not.
            if content.ends_with('\n') {
                print!("{content}");
            } else {
                println!("{content}");
            }
        }
    }

    Ok(())
}
