//! Ordered condition definitions loaded from code, YAML or JSON.

use std::fmt;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::error::ConfigError;

/// Condition names and their raw selector or query text, in definition order.
///
/// Definition order decides the ids the conditions receive, so documents are
/// read in the order their keys appear rather than through a sorted map.
///
/// # Example
///
/// ```rust
/// use varstyle::ConditionSet;
///
/// let set = ConditionSet::from_yaml(
///     "hover: \"&:hover\"\nwide: \"@media (min-width: 60em)\"\n",
/// ).unwrap();
/// let names: Vec<_> = set.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, vec!["hover", "wide"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionSet {
    entries: Vec<(String, String)>,
}

impl ConditionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a condition, returning the updated set for chaining.
    pub fn add(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.push(name, raw);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, raw: impl Into<String>) {
        self.entries.push((name.into(), raw.into()));
    }

    /// Parses a YAML mapping of condition names to raw text.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a JSON object of condition names to raw text.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Reads and parses a YAML condition file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, raw)| (name.as_str(), raw.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, R: Into<String>> FromIterator<(N, R)> for ConditionSet {
    fn from_iter<I: IntoIterator<Item = (N, R)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, raw)| (name.into(), raw.into()))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for ConditionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SetVisitor;

        impl<'de> Visitor<'de> for SetVisitor {
            type Value = ConditionSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of condition names to selectors or at-rules")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut set = ConditionSet::new();
                // Null values count as absent and are skipped at build time.
                while let Some((name, raw)) = map.next_entry::<String, Option<String>>()? {
                    set.push(name, raw.unwrap_or_default());
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(SetVisitor)
    }
}
