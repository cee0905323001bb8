//! Read-only graph snapshots handed to an execution engine
//!
//! A snapshot resolves every node against the registry so the consumer sees
//! type metadata next to each instance without needing the registry itself.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::NodeTypeRegistry;
use crate::types::{GraphInstance, NodeCategory, NodeId, SocketInstance};

/// A resolved node in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub node_type: String,
    pub category: NodeCategory,
    pub version: u32,
    pub inputs: Vec<SocketInstance>,
    pub outputs: Vec<SocketInstance>,
}

/// A resolved, immutable view of a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSnapshot {
    pub graph_id: String,
    pub name: String,
    pub nodes: Vec<NodeSnapshot>,
}

impl GraphSnapshot {
    /// Capture a graph, failing if any node has an unregistered type
    pub fn capture(graph: &GraphInstance, registry: &NodeTypeRegistry) -> Result<Self> {
        let nodes = graph
            .nodes()
            .iter()
            .map(|node| {
                let descriptor = registry.lookup(node.node_type())?;
                Ok(NodeSnapshot {
                    id: node.id(),
                    node_type: descriptor.id.clone(),
                    category: descriptor.category,
                    version: descriptor.version,
                    inputs: node.inputs().to_vec(),
                    outputs: node.outputs().to_vec(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            graph_id: graph.id.clone(),
            name: graph.name.clone(),
            nodes,
        })
    }

    /// Output sockets flagged as variable bindings, as (node, output index)
    pub fn variable_outputs(&self) -> Vec<(NodeId, usize)> {
        self.nodes
            .iter()
            .flat_map(|node| {
                node.outputs
                    .iter()
                    .enumerate()
                    .filter(|(_, socket)| socket.is_variable)
                    .map(move |(index, _)| (node.id, index))
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{NodeTypeDescriptor, SocketTemplate};
    use crate::diagnostics::NullDiagnosticSink;
    use crate::editor::GraphEditor;
    use crate::error::LogicGraphError;
    use crate::types::SocketType;

    fn registry() -> NodeTypeRegistry {
        let mut registry = NodeTypeRegistry::new();
        registry
            .register(
                NodeTypeDescriptor::new("object", "Object", NodeCategory::Object)
                    .with_version(2)
                    .with_input(SocketTemplate::new("Object", SocketType::object()))
                    .with_output(SocketTemplate::new("Object", SocketType::object()).variable()),
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_capture_resolves_types() {
        let registry = registry();
        let editor = GraphEditor::new(&registry, &NullDiagnosticSink);
        let mut graph = GraphInstance::new("tree", "Tree");
        let id = editor.insert(&mut graph, "object").unwrap().node_id().unwrap();

        let snapshot = GraphSnapshot::capture(&graph, &registry).unwrap();
        assert_eq!(snapshot.nodes.len(), 1);
        assert_eq!(snapshot.nodes[0].version, 2);
        assert_eq!(snapshot.nodes[0].category, NodeCategory::Object);
        assert_eq!(snapshot.variable_outputs(), vec![(id, 0)]);

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"isVariable\":true"));
    }

    #[test]
    fn test_capture_unknown_type_fails() {
        let registry = registry();
        let editor = GraphEditor::new(&registry, &NullDiagnosticSink);
        let mut graph = GraphInstance::new("tree", "Tree");
        editor.insert(&mut graph, "object").unwrap();

        let empty = NodeTypeRegistry::new();
        assert!(matches!(
            GraphSnapshot::capture(&graph, &empty),
            Err(LogicGraphError::UnknownType(_))
        ));
    }
}
