//! Registry mapping condition names to their generated variable ids.

use std::collections::HashMap;

use tracing::debug;

use super::condition::{Condition, VariableId};
use crate::error::ConfigError;

/// Table of registered conditions.
///
/// Ids are handed out in registration order starting at 1 and are never
/// reused: entries cannot be removed, and a name keeps the id it was first
/// registered with. Looking up an unknown name is not an error, it is how
/// the resolver tells property keys apart from condition keys.
#[derive(Debug, Clone, Default)]
pub struct ConditionRegistry {
    conditions: HashMap<String, Condition>,
    order: Vec<String>,
    issued: u32,
}

impl ConditionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a condition and returns its entry.
    ///
    /// Registering a name again with the same raw text returns the existing
    /// entry unchanged. Registering it with different text fails, since
    /// stylesheets generated earlier would no longer match new style maps.
    pub fn register(
        &mut self,
        name: &str,
        raw: &str,
        prefix: &str,
    ) -> Result<&Condition, ConfigError> {
        if let Some(existing) = self.conditions.get(name) {
            if existing.raw() != raw {
                return Err(ConfigError::ConflictingCondition {
                    name: name.to_string(),
                    existing: existing.raw().to_string(),
                    requested: raw.to_string(),
                });
            }
            debug!(condition = name, id = %existing.id(), "condition already registered");
            return Ok(&self.conditions[name]);
        }

        self.issued += 1;
        let condition = Condition::new(name, raw, VariableId::new(prefix, self.issued));
        debug!(condition = name, id = %condition.id(), kind = ?condition.kind(), "registered condition");
        self.order.push(name.to_string());
        Ok(&*self
            .conditions
            .entry(name.to_string())
            .or_insert(condition))
    }

    /// Returns the condition registered under `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<&Condition> {
        self.conditions.get(name)
    }

    /// Returns `true` if `name` is a registered condition.
    pub fn contains(&self, name: &str) -> bool {
        self.conditions.contains_key(name)
    }

    /// Iterates over conditions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.order.iter().map(move |name| &self.conditions[name])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
