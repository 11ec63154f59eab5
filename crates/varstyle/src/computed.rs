//! Flat property maps produced by resolution.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Insertion-ordered map of CSS property names to values.
///
/// This is what resolution returns: every value is ready to be assigned as
/// an inline style. Overwriting a property keeps its original position.
///
/// # Example
///
/// ```rust
/// use varstyle::ComputedStyle;
///
/// let mut style = ComputedStyle::new();
/// style.insert("color", "red");
/// style.insert("padding", "4px");
/// assert_eq!(style.to_inline_css(), "color: red; padding: 4px");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    entries: Vec<(String, String)>,
}

impl ComputedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, replacing any previous value in place.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Adds a property, returning the updated map for chaining.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Copies every entry of `other` into this map, later values winning.
    pub fn merge(&mut self, other: ComputedStyle) {
        for (property, value) in other.entries {
            self.insert(property, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the map as the text of a `style` attribute.
    pub fn to_inline_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ComputedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", property, value)?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ComputedStyle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = ComputedStyle::new();
        for (property, value) in iter {
            style.insert(property, value);
        }
        style
    }
}

impl IntoIterator for ComputedStyle {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for ComputedStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (property, value) in &self.entries {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut style = ComputedStyle::new();
        style.insert("a", "1");
        style.insert("b", "2");
        style.insert("a", "3");

        let entries: Vec<_> = style.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_merge_later_wins() {
        let mut base = ComputedStyle::new().with("color", "red");
        base.merge(ComputedStyle::new().with("color", "blue").with("margin", "0"));
        assert_eq!(base.get("color"), Some("blue"));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_inline_css_empty() {
        assert_eq!(ComputedStyle::new().to_inline_css(), "");
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let style = ComputedStyle::new().with("z", "1").with("a", "2");
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"z":"1","a":"2"}"#);
    }
}
