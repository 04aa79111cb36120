//! Domain primitive types used across the workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_LOGICAL_ID_LENGTH, MAX_STACK_NAME_LENGTH, SHA256_HEX_LENGTH};
use crate::error::{CdkError, Result};

/// Name of a deployable stack, unique within its app.
///
/// Must start with an ASCII letter, continue with ASCII letters, digits or
/// hyphens, and be at most [`MAX_STACK_NAME_LENGTH`] characters long.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StackName(String);

impl StackName {
    /// Validates and wraps a stack name.
    ///
    /// # Errors
    ///
    /// Returns [`CdkError::Validation`] if the name breaks the format rules.
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let invalid = |reason: &str| CdkError::Validation {
            kind: "stack name",
            value: name.clone(),
            reason: reason.to_string(),
        };

        let Some(first) = name.chars().next() else {
            return Err(invalid("must not be empty"));
        };
        if !first.is_ascii_alphabetic() {
            return Err(invalid("must start with a letter"));
        }
        if name.len() > MAX_STACK_NAME_LENGTH {
            return Err(invalid(&format!(
                "must be at most {MAX_STACK_NAME_LENGTH} characters"
            )));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(invalid("may only contain letters, digits and hyphens"));
        }
        Ok(Self(name))
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StackName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for StackName {
    type Error = CdkError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<StackName> for String {
    fn from(name: StackName) -> Self {
        name.0
    }
}

/// Logical id of a resource or output inside a template.
///
/// Non-empty, ASCII alphanumeric, at most [`MAX_LOGICAL_ID_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogicalId(String);

impl LogicalId {
    /// Validates and wraps a logical id.
    ///
    /// # Errors
    ///
    /// Returns [`CdkError::Validation`] if the id breaks the format rules.
    pub fn parse(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let reason = if id.is_empty() {
            Some("must not be empty".to_string())
        } else if id.len() > MAX_LOGICAL_ID_LENGTH {
            Some(format!("must be at most {MAX_LOGICAL_ID_LENGTH} characters"))
        } else if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            Some("may only contain letters and digits".to_string())
        } else {
            None
        };

        match reason {
            Some(reason) => Err(CdkError::Validation {
                kind: "logical id",
                value: id,
                reason,
            }),
            None => Ok(Self(id)),
        }
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LogicalId {
    type Error = CdkError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<LogicalId> for String {
    fn from(id: LogicalId) -> Self {
        id.0
    }
}

/// SHA-256 digest of a synthesized artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sha256Hash(String);

impl Sha256Hash {
    /// Creates a hash from a hex-encoded string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid 64-character hex string.
    pub fn from_hex(hex: impl Into<String>) -> Result<Self> {
        let hex = hex.into();
        if hex.len() != SHA256_HEX_LENGTH || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CdkError::Validation {
                kind: "sha256 digest",
                value: hex,
                reason: format!("must be {SHA256_HEX_LENGTH} hex characters"),
            });
        }
        Ok(Self(hex.to_ascii_lowercase()))
    }

    /// Returns the hex-encoded hash string.
    #[must_use]
    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sha256Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sha256:{}", self.0)
    }
}

impl TryFrom<String> for Sha256Hash {
    type Error = CdkError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(value)
    }
}

impl From<Sha256Hash> for String {
    fn from(hash: Sha256Hash) -> Self {
        hash.0
    }
}
