//! Shorthand property expansion.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::value::StyleValue;
use crate::computed::ComputedStyle;

/// A shorthand mapping from one value to literal CSS declarations.
///
/// Expanders must be pure: they can run any number of times, once per
/// occurrence of their key at any nesting depth.
pub type ExpanderFn = dyn Fn(&StyleValue) -> ComputedStyle + Send + Sync;

/// Shorthand property names and their expanders.
///
/// # Example
///
/// ```rust
/// use varstyle::{ComputedStyle, PropertyExpanders, StyleValue};
///
/// let expanders = PropertyExpanders::new().add("p", |v: &StyleValue| {
///     let n = v.as_number().unwrap_or(0.0);
///     ComputedStyle::new().with("padding", format!("{}px", n * 4.0))
/// });
///
/// assert_eq!(expanders.expand("p", &2.into()).get("padding"), Some("8px"));
/// assert_eq!(expanders.expand("color", &"red".into()).get("color"), Some("red"));
/// ```
#[derive(Clone, Default)]
pub struct PropertyExpanders {
    expanders: HashMap<String, Arc<ExpanderFn>>,
}

impl PropertyExpanders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shorthand, returning the updated set for chaining.
    pub fn add<F>(mut self, name: &str, expander: F) -> Self
    where
        F: Fn(&StyleValue) -> ComputedStyle + Send + Sync + 'static,
    {
        self.insert(name, expander);
        self
    }

    /// Adds or replaces a shorthand.
    pub fn insert<F>(&mut self, name: &str, expander: F)
    where
        F: Fn(&StyleValue) -> ComputedStyle + Send + Sync + 'static,
    {
        self.expanders.insert(name.to_string(), Arc::new(expander));
    }

    /// Copies every shorthand of `other` into this set, replacing duplicates.
    pub fn extend(&mut self, other: PropertyExpanders) {
        self.expanders.extend(other.expanders);
    }

    pub fn has(&self, name: &str) -> bool {
        self.expanders.contains_key(name)
    }

    /// Expands `key`, or passes it through as a literal property when no
    /// shorthand is registered under that name.
    pub fn expand(&self, key: &str, value: &StyleValue) -> ComputedStyle {
        match self.expanders.get(key) {
            Some(expander) => expander(value),
            None => ComputedStyle::new().with(key, value.to_css()),
        }
    }

    pub fn len(&self) -> usize {
        self.expanders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanders.is_empty()
    }
}

impl fmt::Debug for PropertyExpanders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.expanders.keys().collect();
        names.sort();
        f.debug_struct("PropertyExpanders")
            .field("shorthands", &names)
            .finish()
    }
}
