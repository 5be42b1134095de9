//! Core domain types for the ColorPro backend blueprint.
//!
//! A [`Descriptor`] is an ordered mapping from string keys to values, where
//! each value is free-form text, a sequence of text entries, or a nested
//! descriptor. Insertion order is part of the contract: a descriptor
//! serializes and renders in exactly the order it was assembled, which is
//! why the serde implementations are written by hand instead of derived over
//! a hash map.

use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

mod blueprint;

pub use blueprint::blueprint;

/// A single value held under a descriptor key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Free-form text, e.g. a framework or service name.
    Text(String),
    /// An ordered sequence of text entries, e.g. file names.
    List(Vec<String>),
    /// A nested descriptor, e.g. a sub-folder layout.
    Nested(Descriptor),
}

impl Value {
    /// Get the text content, if this is a [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get the sequence items, if this is a [`Value::List`].
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the nested descriptor, if this is a [`Value::Nested`].
    pub fn as_nested(&self) -> Option<&Descriptor> {
        match self {
            Value::Nested(descriptor) => Some(descriptor),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl From<Descriptor> for Value {
    fn from(descriptor: Descriptor) -> Self {
        Value::Nested(descriptor)
    }
}

/// An ordered mapping from string keys to [`Value`]s.
///
/// Entries are kept as a flat list rather than a hash map so that iteration,
/// serialization, and rendering all see the insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
    entries: Vec<(String, Value)>,
}

impl Descriptor {
    /// Creates an empty descriptor with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a descriptor entry by entry.
    pub fn builder() -> DescriptorBuilder {
        DescriptorBuilder::new()
    }

    /// Returns the number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the descriptor holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the value for a key at this level (first match wins).
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

impl Serialize for Descriptor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Text(text) => serializer.serialize_str(text),
            Value::List(items) => serializer.collect_seq(items),
            Value::Nested(descriptor) => descriptor.serialize(serializer),
        }
    }
}

struct DescriptorVisitor;

impl<'de> Visitor<'de> for DescriptorVisitor {
    type Value = Descriptor;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a mapping from strings to descriptor values")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            entries.push((key, value));
        }
        Ok(Descriptor { entries })
    }
}

impl<'de> Deserialize<'de> for Descriptor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DescriptorVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a string, a sequence of strings, or a nested mapping")
    }

    fn visit_str<E>(self, text: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Value::Text(text.to_string()))
    }

    fn visit_string<E>(self, text: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Value::Text(text))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<String>()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        DescriptorVisitor.visit_map(map).map(Value::Nested)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Builder for assembling a [`Descriptor`] in insertion order.
#[derive(Debug, Default)]
pub struct DescriptorBuilder {
    entries: Vec<(String, Value)>,
}

impl DescriptorBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text entry.
    pub fn text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), Value::Text(value.into())));
        self
    }

    /// Append a sequence entry.
    pub fn list<I, S>(mut self, key: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.entries.push((key.into(), Value::List(items)));
        self
    }

    /// Append a nested descriptor entry.
    pub fn nested(mut self, key: impl Into<String>, nested: Descriptor) -> Self {
        self.entries.push((key.into(), Value::Nested(nested)));
        self
    }

    /// Build the final [`Descriptor`].
    pub fn build(self) -> Descriptor {
        Descriptor {
            entries: self.entries,
        }
    }
}
