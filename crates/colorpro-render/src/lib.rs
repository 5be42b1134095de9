//! Rendering layer for the ColorPro backend blueprint.
//!
//! Takes a [`Descriptor`] and produces indented text in one of two formats:
//! `json` (the canonical quoted, braced form) or `tree` (a human-oriented
//! terminal view). Both preserve the descriptor's insertion order and indent
//! nested levels proportionally to depth.

use colorpro_core::Descriptor;
use tracing::debug;

mod error;
mod json;
mod tree;

pub use error::{RenderError, RenderResult};
pub use json::render_json;
pub use tree::render_tree;

/// Header line printed above the default rendering.
pub const OVERVIEW_HEADER: &str = "ColorPro Backend Architecture Overview:";

/// Output format for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Tree,
}

impl OutputFormat {
    /// File extension conventionally used for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Tree => "txt",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "tree" | "text" => Ok(Self::Tree),
            _ => Err(RenderError::unknown_format(s)),
        }
    }
}

/// Options controlling how a descriptor is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl RenderOptions {
    /// Options with a specific indent width.
    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }
}

/// Render a descriptor in the requested format.
pub fn render(
    descriptor: &Descriptor,
    format: OutputFormat,
    options: &RenderOptions,
) -> RenderResult<String> {
    debug!(?format, indent = options.indent, "Rendering descriptor");

    match format {
        OutputFormat::Json => render_json(descriptor, options),
        OutputFormat::Tree => render_tree(descriptor, options),
    }
}
