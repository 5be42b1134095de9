//! Error types for the rendering layer.

use thiserror::Error;

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering a descriptor.
#[derive(Debug, Error)]
pub enum RenderError {
    /// An output format name that the renderer does not know.
    #[error("Unknown format: {name}. Use 'json' or 'tree'")]
    UnknownFormat { name: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The serializer produced bytes that are not valid UTF-8.
    #[error("Rendered output was not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// Formatting error while writing the tree view.
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

impl RenderError {
    /// Create an unknown-format error.
    pub fn unknown_format(name: impl Into<String>) -> Self {
        Self::UnknownFormat { name: name.into() }
    }
}
