//! Resource declarations and the fluent builder that produces them.
//!
//! A [`Resource`] is immutable once built. Stacks hold them in declaration
//! order and synthesis folds over that sequence.

use appsync_cdk_common::error::{CdkError, Result};
use appsync_cdk_common::types::LogicalId;
use serde::Serialize;
use serde_json::{Map, Value};

/// A single resource declaration inside a stack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    /// Logical id, used as the key under `Resources`.
    #[serde(skip)]
    logical_id: LogicalId,
    /// Resource type, e.g. `AWS::AppSync::GraphQLApi`.
    #[serde(rename = "Type")]
    resource_type: String,
    /// Resource properties.
    #[serde(rename = "Properties", skip_serializing_if = "Map::is_empty")]
    properties: Map<String, Value>,
    /// Logical ids this resource must be created after.
    #[serde(rename = "DependsOn", skip_serializing_if = "Vec::is_empty")]
    depends_on: Vec<LogicalId>,
}

impl Resource {
    /// Starts building a resource with the given logical id and type.
    #[must_use]
    pub fn builder(logical_id: impl Into<String>, resource_type: impl Into<String>) -> ResourceBuilder {
        ResourceBuilder::new(logical_id, resource_type)
    }

    /// Returns the logical id.
    #[must_use]
    pub const fn logical_id(&self) -> &LogicalId {
        &self.logical_id
    }

    /// Returns the resource type.
    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Returns the declared properties.
    #[must_use]
    pub const fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Returns the logical ids this resource depends on.
    #[must_use]
    pub fn depends_on(&self) -> &[LogicalId] {
        &self.depends_on
    }
}

/// Builder for configuring a resource before adding it to a stack.
#[derive(Debug)]
pub struct ResourceBuilder {
    logical_id: String,
    resource_type: String,
    properties: Map<String, Value>,
    depends_on: Vec<String>,
}

impl ResourceBuilder {
    /// Creates a new builder with the given logical id and type.
    #[must_use]
    pub fn new(logical_id: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            logical_id: logical_id.into(),
            resource_type: resource_type.into(),
            properties: Map::new(),
            depends_on: Vec::new(),
        }
    }

    /// Sets a property. Setting the same key twice keeps the last value.
    #[must_use]
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let _ = self.properties.insert(key.into(), value.into());
        self
    }

    /// Adds an explicit dependency on another resource in the same stack.
    #[must_use]
    pub fn depends_on(mut self, logical_id: impl Into<String>) -> Self {
        let id = logical_id.into();
        if !self.depends_on.contains(&id) {
            self.depends_on.push(id);
        }
        self
    }

    /// Validates the declaration and returns the immutable resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the logical id or any dependency id is malformed,
    /// if the type is not of the form `Vendor::Service::Type`, or if the
    /// resource depends on itself.
    pub fn build(self) -> Result<Resource> {
        let logical_id = LogicalId::parse(self.logical_id)?;
        validate_resource_type(&self.resource_type)?;

        let depends_on = self
            .depends_on
            .into_iter()
            .map(LogicalId::parse)
            .collect::<Result<Vec<_>>>()?;
        if depends_on.contains(&logical_id) {
            return Err(CdkError::Validation {
                kind: "dependency",
                value: logical_id.to_string(),
                reason: "a resource cannot depend on itself".into(),
            });
        }

        Ok(Resource {
            logical_id,
            resource_type: self.resource_type,
            properties: self.properties,
            depends_on,
        })
    }
}

fn validate_resource_type(resource_type: &str) -> Result<()> {
    let segments: Vec<&str> = resource_type.split("::").collect();
    let well_formed = segments.len() == 3
        && segments
            .iter()
            .all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric()));
    if well_formed {
        Ok(())
    } else {
        Err(CdkError::Validation {
            kind: "resource type",
            value: resource_type.to_string(),
            reason: "expected the form Vendor::Service::Type".into(),
        })
    }
}
