//! Nested style descriptions.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::property::StyleValue;

/// The value stored under a key of a [`StyleNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum StyleEntry {
    /// A property assignment.
    Value(StyleValue),
    /// A nested node, meaningful under a condition key.
    Nested(StyleNode),
}

impl fmt::Display for StyleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleEntry::Value(StyleValue::Text(s)) => write!(f, "{:?}", s),
            StyleEntry::Value(v) => write!(f, "{}", v),
            StyleEntry::Nested(node) => write!(f, "{}", node),
        }
    }
}

macro_rules! entry_from_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StyleEntry {
                fn from(value: $ty) -> Self {
                    StyleEntry::Value(value.into())
                }
            }
        )*
    };
}

entry_from_value!(StyleValue, &str, String, f64, i32);

impl From<StyleNode> for StyleEntry {
    fn from(node: StyleNode) -> Self {
        StyleEntry::Nested(node)
    }
}

/// An ordered style description whose keys are properties or conditions.
///
/// Key order is significant: when several conditions at one level set the
/// same property, the one listed last wins while they are all active.
///
/// # Example
///
/// ```rust
/// use varstyle::StyleNode;
///
/// let node = StyleNode::new()
///     .set("color", "black")
///     .set("hover", StyleNode::new().set("color", "blue"));
/// assert_eq!(node.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleNode {
    entries: Vec<(String, StyleEntry)>,
}

impl StyleNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a key, returning the updated node for chaining.
    pub fn set(mut self, key: impl Into<String>, entry: impl Into<StyleEntry>) -> Self {
        self.insert(key, entry);
        self
    }

    /// Sets a key. Setting an existing key replaces its value in place.
    pub fn insert(&mut self, key: impl Into<String>, entry: impl Into<StyleEntry>) {
        let key = key.into();
        let entry = entry.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = entry,
            None => self.entries.push((key, entry)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&StyleEntry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses a node from a JSON object, keeping key order.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}

impl fmt::Display for StyleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, entry)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, " {}: {}", key, entry)?;
        }
        if !self.entries.is_empty() {
            f.write_str(" ")?;
        }
        f.write_str("}")
    }
}

impl<'de> Deserialize<'de> for StyleEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = StyleEntry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, a number or a nested style object")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(StyleEntry::Value(StyleValue::Text(v.to_string())))
            }

            fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(StyleEntry::Value(StyleValue::Text(v)))
            }

            fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(StyleEntry::Value(StyleValue::Text(v.to_string())))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(StyleEntry::Value(StyleValue::Number(v as f64)))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(StyleEntry::Value(StyleValue::Number(v as f64)))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(StyleEntry::Value(StyleValue::Number(v)))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                NodeVisitor.visit_map(map).map(StyleEntry::Nested)
            }
        }

        deserializer.deserialize_any(EntryVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = StyleNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a style object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut node = StyleNode::new();
        // Null values mean "not set", as they do for inline styles.
        while let Some((key, entry)) = map.next_entry::<String, Option<StyleEntry>>()? {
            if let Some(entry) = entry {
                node.insert(key, entry);
            }
        }
        Ok(node)
    }
}

impl<'de> Deserialize<'de> for StyleNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(NodeVisitor)
    }
}
