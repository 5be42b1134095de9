//! Terminal tree rendering.
//!
//! A human-oriented alternative to the JSON form: unquoted `key: value`
//! lines, sequence items as `- item` bullets, nested descriptors indented
//! one level deeper. Meant for reading in a terminal, not for parsing.

use std::fmt::Write;

use colorpro_core::{Descriptor, Value};

use crate::error::RenderResult;
use crate::RenderOptions;

/// Render a descriptor as an indented tree.
pub fn render_tree(descriptor: &Descriptor, options: &RenderOptions) -> RenderResult<String> {
    let mut out = String::new();
    write_level(&mut out, descriptor, options.indent, 0)?;
    Ok(out)
}

fn write_level(
    out: &mut String,
    descriptor: &Descriptor,
    width: usize,
    depth: usize,
) -> RenderResult<()> {
    let pad = " ".repeat(width * depth);
    let item_pad = " ".repeat(width * (depth + 1));

    for (key, value) in descriptor.iter() {
        match value {
            Value::Text(text) => writeln!(out, "{pad}{key}: {text}")?,
            Value::List(items) => {
                writeln!(out, "{pad}{key}")?;
                for item in items {
                    writeln!(out, "{item_pad}- {item}")?;
                }
            }
            Value::Nested(nested) => {
                writeln!(out, "{pad}{key}")?;
                write_level(out, nested, width, depth + 1)?;
            }
        }
    }

    Ok(())
}
