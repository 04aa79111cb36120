//! Stacks: named deployable units holding ordered resource declarations.
//!
//! A stack is only mutated through its builder methods. Synthesis is a pure
//! fold over the declared resources and outputs and never changes the stack.

use appsync_cdk_common::error::{CdkError, Result};
use appsync_cdk_common::types::{LogicalId, StackName};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::graph::DependencyGraph;
use crate::resource::Resource;
use crate::template::Template;

/// A value exported from a stack once deployed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Output {
    /// Output value, usually a reference into the stack's resources.
    #[serde(rename = "Value")]
    pub value: Value,
    /// Human-readable description.
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Cross-stack export name.
    #[serde(rename = "Export", skip_serializing_if = "Option::is_none")]
    pub export: Option<Export>,
}

/// Cross-stack export declaration of an [`Output`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Export {
    /// Export name, unique per account and region.
    #[serde(rename = "Name")]
    pub name: String,
}

impl Output {
    /// Creates an output with the given value.
    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            description: None,
            export: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Exports the output under `name`.
    #[must_use]
    pub fn export_name(mut self, name: impl Into<String>) -> Self {
        self.export = Some(Export { name: name.into() });
        self
    }
}

/// A named deployable unit.
#[derive(Debug, Clone)]
pub struct Stack {
    name: StackName,
    description: Option<String>,
    resources: Vec<Resource>,
    outputs: Vec<(LogicalId, Output)>,
}

impl Stack {
    /// Creates an empty stack. Stacks are normally created through
    /// [`App::add_stack`](crate::app::App::add_stack).
    #[must_use]
    pub const fn new(name: StackName) -> Self {
        Self {
            name,
            description: None,
            resources: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Returns the stack name.
    #[must_use]
    pub const fn name(&self) -> &StackName {
        &self.name
    }

    /// Returns the stack description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Sets the stack description.
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a resource declaration.
    ///
    /// # Errors
    ///
    /// Returns [`CdkError::DuplicateId`] if a resource with the same
    /// logical id is already declared.
    pub fn add_resource(&mut self, resource: Resource) -> Result<&mut Self> {
        if self.resource(resource.logical_id().as_str()).is_some() {
            return Err(CdkError::DuplicateId {
                kind: "resource",
                id: resource.logical_id().to_string(),
                scope: format!("stack {}", self.name),
            });
        }
        tracing::debug!(
            stack = %self.name,
            id = %resource.logical_id(),
            kind = resource.resource_type(),
            "declared resource"
        );
        self.resources.push(resource);
        Ok(self)
    }

    /// Appends an output.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not a valid logical id or is already
    /// used by another output.
    pub fn add_output(&mut self, id: &str, output: Output) -> Result<&mut Self> {
        let id = LogicalId::parse(id)?;
        if self.outputs.iter().any(|(existing, _)| *existing == id) {
            return Err(CdkError::DuplicateId {
                kind: "output",
                id: id.to_string(),
                scope: format!("stack {}", self.name),
            });
        }
        self.outputs.push((id, output));
        Ok(self)
    }

    /// Looks up a resource by logical id.
    #[must_use]
    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.logical_id().as_str() == id)
    }

    /// Returns the declared resources in declaration order.
    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Returns the declared outputs in declaration order.
    #[must_use]
    pub fn outputs(&self) -> &[(LogicalId, Output)] {
        &self.outputs
    }

    /// Returns `true` if the stack declares no resources and no outputs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty() && self.outputs.is_empty()
    }

    /// Returns the resource creation order, dependencies first.
    ///
    /// # Errors
    ///
    /// Returns an error on unknown `DependsOn` targets or cycles.
    pub fn dependency_order(&self) -> Result<Vec<LogicalId>> {
        let graph = DependencyGraph::from_resources(self.name.as_str(), &self.resources)?;
        graph.resolve_order(self.name.as_str())
    }

    /// Synthesizes the stack into a template.
    ///
    /// Resources keep their declaration order in the output.
    ///
    /// # Errors
    ///
    /// Returns an error if dependencies do not resolve or a value fails
    /// to serialize.
    pub fn synthesize(&self) -> Result<Template> {
        let _ = self.dependency_order()?;

        let resources = self
            .resources
            .iter()
            .try_fold(Map::new(), |mut acc, resource| -> Result<_> {
                let _ = acc.insert(
                    resource.logical_id().to_string(),
                    serde_json::to_value(resource)?,
                );
                Ok(acc)
            })?;
        let outputs = self
            .outputs
            .iter()
            .try_fold(Map::new(), |mut acc, (id, output)| -> Result<_> {
                let _ = acc.insert(id.to_string(), serde_json::to_value(output)?);
                Ok(acc)
            })?;

        tracing::info!(
            stack = %self.name,
            resources = resources.len(),
            outputs = outputs.len(),
            "synthesized stack"
        );

        Ok(Template {
            description: self.description.clone(),
            resources,
            outputs,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn stack(name: &str) -> Stack {
        Stack::new(StackName::parse(name).expect("valid name"))
    }

    fn resource(id: &str, ty: &str) -> Resource {
        Resource::builder(id, ty).build().expect("valid resource")
    }

    #[test]
    fn empty_stack_synthesizes_to_empty_resources() {
        let template = stack("MyTestStack").synthesize().expect("synth");
        let value = template.to_json_value().expect("json");
        assert_eq!(value, json!({ "Resources": {} }));
    }

    #[test]
    fn synthesis_keeps_declaration_order() {
        let mut s = stack("Ordered");
        let _ = s
            .add_resource(resource("Zeta", "AWS::SNS::Topic"))
            .expect("add")
            .add_resource(resource("Alpha", "AWS::SQS::Queue"))
            .expect("add")
            .add_resource(resource("Mid", "AWS::S3::Bucket"))
            .expect("add");

        let template = s.synthesize().expect("synth");
        let keys: Vec<&str> = template.resources.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn duplicate_resource_id_is_rejected() {
        let mut s = stack("Dup");
        let _ = s.add_resource(resource("Api", "AWS::AppSync::GraphQLApi")).expect("add");
        let err = s
            .add_resource(resource("Api", "AWS::AppSync::ApiKey"))
            .expect_err("duplicate must fail");
        assert!(matches!(err, CdkError::DuplicateId { kind: "resource", .. }));
        assert_eq!(s.resources().len(), 1);
    }

    #[test]
    fn outputs_and_description_are_rendered() {
        let mut s = stack("WithOutputs");
        let _ = s.set_description("GraphQL API");
        let _ = s
            .add_resource(resource("Api", "AWS::AppSync::GraphQLApi"))
            .expect("add");
        let _ = s
            .add_output(
                "ApiUrl",
                Output::new(json!({ "Fn::GetAtt": ["Api", "GraphQLUrl"] }))
                    .description("endpoint")
                    .export_name("api-url"),
            )
            .expect("output");

        let value = s.synthesize().expect("synth").to_json_value().expect("json");
        assert_eq!(
            value,
            json!({
                "Description": "GraphQL API",
                "Resources": { "Api": { "Type": "AWS::AppSync::GraphQLApi" } },
                "Outputs": {
                    "ApiUrl": {
                        "Value": { "Fn::GetAtt": ["Api", "GraphQLUrl"] },
                        "Description": "endpoint",
                        "Export": { "Name": "api-url" }
                    }
                }
            })
        );
    }

    #[test]
    fn duplicate_output_is_rejected() {
        let mut s = stack("Outs");
        let _ = s.add_output("Url", Output::new("a")).expect("first");
        assert!(s.add_output("Url", Output::new("b")).is_err());
        assert!(s.add_output("bad-id", Output::new("c")).is_err());
    }

    #[test]
    fn synthesis_fails_on_dangling_dependency() {
        let mut s = stack("Dangling");
        let _ = s
            .add_resource(
                Resource::builder("Key", "AWS::AppSync::ApiKey")
                    .depends_on("Api")
                    .build()
                    .expect("valid resource"),
            )
            .expect("add");
        assert!(matches!(s.synthesize(), Err(CdkError::NotFound { .. })));
    }

    #[test]
    fn dependency_order_puts_dependencies_first() {
        let mut s = stack("Deps");
        let _ = s
            .add_resource(
                Resource::builder("Resolver", "AWS::AppSync::Resolver")
                    .depends_on("Schema")
                    .build()
                    .expect("valid"),
            )
            .expect("add")
            .add_resource(resource("Schema", "AWS::AppSync::GraphQLSchema"))
            .expect("add");

        let order = s.dependency_order().expect("order");
        let names: Vec<&str> = order.iter().map(LogicalId::as_str).collect();
        assert_eq!(names, vec!["Schema", "Resolver"]);
        assert!(!s.is_empty());
    }
}
