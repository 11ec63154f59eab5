//! Non-fatal problems found while resolving a style node.

use std::fmt;

use tracing::warn;

/// A problem that caused part of a style node to be skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A registered condition key was given a plain value instead of a nested node.
    MalformedCondition { key: String, value: String },
    /// A nested node was given under a key that is not a registered condition.
    UnknownCondition { key: String },
}

impl Diagnostic {
    /// The key the diagnostic refers to.
    pub fn key(&self) -> &str {
        match self {
            Diagnostic::MalformedCondition { key, .. } => key,
            Diagnostic::UnknownCondition { key } => key,
        }
    }

    /// Sends the diagnostic to the `tracing` subscriber.
    pub(crate) fn emit(&self) {
        match self {
            Diagnostic::MalformedCondition { key, value } => {
                warn!(key = %key, value = %value, "condition value must be a style object, skipping it")
            }
            Diagnostic::UnknownCondition { key } => {
                warn!(key = %key, "nested style under a key that is not a registered condition, skipping it")
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedCondition { key, value } => write!(
                f,
                "condition '{}' expects a style object, received {}",
                key, value
            ),
            Diagnostic::UnknownCondition { key } => {
                write!(f, "'{}' is not a registered condition", key)
            }
        }
    }
}
