//! Resource dependency graph using `petgraph`.
//!
//! Builds a directed acyclic graph from `DependsOn` declarations and
//! resolves the order in which resources would be created.

use std::collections::HashMap;

use appsync_cdk_common::error::{CdkError, Result};
use appsync_cdk_common::types::LogicalId;
use petgraph::graph::NodeIndex;

use crate::resource::Resource;

/// A dependency graph of resources within one stack.
#[derive(Debug)]
pub struct DependencyGraph {
    /// Internal petgraph representation.
    graph: petgraph::Graph<LogicalId, ()>,
}

impl DependencyGraph {
    /// Creates an empty dependency graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: petgraph::Graph::new(),
        }
    }

    /// Builds the graph for a stack's resources.
    ///
    /// # Errors
    ///
    /// Returns [`CdkError::NotFound`] if a `DependsOn` entry names a
    /// logical id that is not declared in `resources`.
    pub fn from_resources(stack: &str, resources: &[Resource]) -> Result<Self> {
        let mut graph = Self::new();
        let mut node_map = HashMap::new();
        for resource in resources {
            let idx = graph.add_resource(resource.logical_id().clone());
            let _ = node_map.insert(resource.logical_id(), idx);
        }
        for resource in resources {
            let dependent = node_map[resource.logical_id()];
            for dep in resource.depends_on() {
                let Some(&dependency) = node_map.get(dep) else {
                    return Err(CdkError::NotFound {
                        kind: "resource",
                        id: format!(
                            "{dep} (DependsOn of {} in stack {stack})",
                            resource.logical_id()
                        ),
                    });
                };
                graph.add_dependency(dependent, dependency);
            }
        }
        Ok(graph)
    }

    /// Adds a resource node to the graph.
    pub fn add_resource(&mut self, id: LogicalId) -> NodeIndex {
        self.graph.add_node(id)
    }

    /// Adds a dependency edge: `dependent` depends on `dependency`.
    ///
    /// The graph edge points from `dependency` to `dependent`
    /// so that topological sort yields dependencies first.
    pub fn add_dependency(&mut self, dependent: NodeIndex, dependency: NodeIndex) {
        let _ = self.graph.add_edge(dependency, dependent, ());
    }

    /// Returns the number of resources in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns `true` if the graph holds no resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Returns a creation order in which every resource appears after the
    /// resources it depends on.
    ///
    /// # Errors
    ///
    /// Returns [`CdkError::CyclicDependency`] if the graph contains a cycle.
    pub fn resolve_order(&self, stack: &str) -> Result<Vec<LogicalId>> {
        match petgraph::algo::toposort(&self.graph, None) {
            Ok(indices) => Ok(indices
                .iter()
                .filter_map(|&idx| self.graph.node_weight(idx).cloned())
                .collect()),
            Err(cycle) => Err(CdkError::CyclicDependency {
                stack: stack.to_string(),
                id: self
                    .graph
                    .node_weight(cycle.node_id())
                    .map_or_else(String::new, ToString::to_string),
            }),
        }
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> LogicalId {
        LogicalId::parse(name).expect("valid id")
    }

    fn topic(name: &str, deps: &[&str]) -> Resource {
        deps.iter()
            .fold(Resource::builder(name, "AWS::SNS::Topic"), |b, d| b.depends_on(*d))
            .build()
            .expect("valid resource")
    }

    #[test]
    fn empty_graph_resolves_to_empty() {
        let graph = DependencyGraph::new();
        assert!(graph.is_empty());
        let order = graph.resolve_order("S").expect("should resolve");
        assert!(order.is_empty());
    }

    #[test]
    fn linear_dependency_chain() {
        let mut graph = DependencyGraph::new();
        let api = graph.add_resource(id("Api"));
        let table = graph.add_resource(id("Table"));
        graph.add_dependency(api, table);

        let order = graph.resolve_order("S").expect("should resolve");
        let pos = |name: &str| order.iter().position(|n| n.as_str() == name).expect(name);
        assert!(pos("Table") < pos("Api"), "Table should come before Api: {order:?}");
    }

    #[test]
    fn diamond_dependency_from_resources() {
        let resources = vec![
            topic("A", &["B", "C"]),
            topic("B", &["D"]),
            topic("C", &["D"]),
            topic("D", &[]),
        ];
        let graph = DependencyGraph::from_resources("S", &resources).expect("graph");
        assert_eq!(graph.len(), 4);

        let order = graph.resolve_order("S").expect("should resolve");
        let pos = |name: &str| order.iter().position(|n| n.as_str() == name).expect(name);
        assert!(pos("D") < pos("B"));
        assert!(pos("D") < pos("C"));
        assert!(pos("B") < pos("A"));
        assert!(pos("C") < pos("A"));
    }

    #[test]
    fn unknown_dependency_is_not_found() {
        let resources = vec![topic("A", &["Missing"])];
        let err = DependencyGraph::from_resources("S", &resources).expect_err("must fail");
        assert!(matches!(err, CdkError::NotFound { .. }));
        assert!(err.to_string().contains("Missing"), "got: {err}");
    }

    #[test]
    fn cycle_detection() {
        let resources = vec![topic("A", &["B"]), topic("B", &["C"]), topic("C", &["A"])];
        let graph = DependencyGraph::from_resources("Cyclic", &resources).expect("graph");
        let err = graph.resolve_order("Cyclic").expect_err("cycle must fail");
        assert!(matches!(err, CdkError::CyclicDependency { .. }));
        assert!(err.to_string().contains("cyclic"), "got: {err}");
    }
}
