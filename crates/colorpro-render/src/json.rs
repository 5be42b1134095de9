//! Pretty JSON rendering.
//!
//! Produces the canonical textual form of a descriptor: quoted keys and
//! string values, bracketed sequences with one element per line, and nesting
//! indented proportionally to depth. Key order is the descriptor's insertion
//! order.

use colorpro_core::Descriptor;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::RenderResult;
use crate::RenderOptions;

/// Render a descriptor as indented JSON.
///
/// The indent string is `options.indent` spaces per nesting level. An indent
/// of zero keeps the line structure but drops the leading whitespace.
pub fn render_json(descriptor: &Descriptor, options: &RenderOptions) -> RenderResult<String> {
    let indent = " ".repeat(options.indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    descriptor.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf)?)
}
