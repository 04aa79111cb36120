//! The synthesized template document.
//!
//! `Resources` is always present, even when empty. `Description` and
//! `Outputs` only appear when a stack sets them, so a bare stack renders
//! as exactly `{ "Resources": {} }`.

use appsync_cdk_common::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A synthesized, read-only template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Stack description.
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Resource declarations keyed by logical id, in declaration order.
    #[serde(rename = "Resources", default)]
    pub resources: Map<String, Value>,
    /// Stack outputs keyed by logical id.
    #[serde(rename = "Outputs", default, skip_serializing_if = "Map::is_empty")]
    pub outputs: Map<String, Value>,
}

impl Template {
    /// Returns the template as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if a property value cannot be serialized.
    pub fn to_json_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Renders the template as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders the template as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Returns the number of declared resources.
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}
