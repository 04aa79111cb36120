//! Synthesized template under test.

use appsync_cdk_common::constants::RESOURCES_KEY;
use appsync_cdk_common::error::Result;
use appsync_cdk_core::stack::Stack;
use serde_json::Value;

use crate::diff::{self, MatchStyle, Mismatch};

/// A stack's synthesized template, held as JSON for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    json: Value,
}

impl Template {
    /// Synthesizes `stack` and captures its template.
    ///
    /// # Errors
    ///
    /// Returns an error if the stack fails to synthesize.
    pub fn from_stack(stack: &Stack) -> Result<Self> {
        let json = stack.synthesize()?.to_json_value()?;
        Ok(Self { json })
    }

    /// Wraps an already rendered template document.
    #[must_use]
    pub const fn from_json(json: Value) -> Self {
        Self { json }
    }

    /// Returns the template document.
    #[must_use]
    pub const fn to_json(&self) -> &Value {
        &self.json
    }

    /// Compares the template against `expected`.
    ///
    /// # Errors
    ///
    /// Returns a [`Mismatch`] listing every difference if the template
    /// does not match under `style`.
    pub fn match_template(&self, expected: &Value, style: MatchStyle) -> std::result::Result<(), Mismatch> {
        let differences = diff::compare(expected, &self.json, style);
        if differences.is_empty() {
            return Ok(());
        }
        tracing::debug!(%style, count = differences.len(), "template mismatch");
        Err(Mismatch { style, differences })
    }

    /// Asserts the template matches `expected`, panicking with the
    /// structural diff otherwise.
    ///
    /// # Panics
    ///
    /// Panics if the template does not match under `style`.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn assert_matches(&self, expected: &Value, style: MatchStyle) {
        if let Err(mismatch) = self.match_template(expected, style) {
            panic!("{mismatch}");
        }
    }

    /// Counts resources of the given type.
    #[must_use]
    pub fn resource_count_of_type(&self, resource_type: &str) -> usize {
        self.json
            .get(RESOURCES_KEY)
            .and_then(Value::as_object)
            .map_or(0, |resources| {
                resources
                    .values()
                    .filter(|r| r.get("Type").and_then(Value::as_str) == Some(resource_type))
                    .count()
            })
    }
}
