//! Configuration errors.
//!
//! Resolution itself never fails: problems found while resolving a style
//! node are reported as [`Diagnostic`](crate::Diagnostic)s instead.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a styling configuration cannot be built.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The custom-property prefix was empty.
    #[error("css variable prefix must not be empty")]
    EmptyPrefix,

    /// A condition name was registered twice with different selector or query text.
    #[error("condition '{name}' is already registered as '{existing}', cannot redefine it as '{requested}'")]
    ConflictingCondition {
        name: String,
        existing: String,
        requested: String,
    },

    /// A YAML condition document could not be parsed.
    #[error("invalid YAML condition set: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON condition document could not be parsed.
    #[error("invalid JSON condition set: {0}")]
    Json(#[from] serde_json::Error),

    /// A condition file could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
