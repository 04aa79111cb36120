//! Unified error type for the appsync-cdk workspace.
//!
//! Construction, validation and synthesis all report through [`CdkError`].
//! The binary wraps it with `anyhow` at the process boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CdkError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A name or identifier does not satisfy its format rules.
    #[error("invalid {kind} \"{value}\": {reason}")]
    Validation {
        /// What was being validated (stack name, logical id, ...).
        kind: &'static str,
        /// The offending value.
        value: String,
        /// Which rule was broken.
        reason: String,
    },

    /// A referenced item does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Type of the missing item.
        kind: &'static str,
        /// Identifier of the missing item.
        id: String,
    },

    /// An identifier is already taken within its scope.
    #[error("duplicate {kind} \"{id}\" in {scope}")]
    DuplicateId {
        /// Type of the duplicated item.
        kind: &'static str,
        /// The duplicated identifier.
        id: String,
        /// Scope in which identifiers must be unique.
        scope: String,
    },

    /// Resource dependencies form a cycle.
    #[error("cyclic dependency detected in stack {stack} at {id}")]
    CyclicDependency {
        /// Stack containing the cycle.
        stack: String,
        /// A logical id participating in the cycle.
        id: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },

    /// YAML rendering failed.
    #[error("yaml error: {source}")]
    Yaml {
        /// Underlying YAML error.
        #[from]
        source: serde_yaml::Error,
    },
}

impl CdkError {
    /// Builds an [`CdkError::Io`] bound to `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, CdkError>;
