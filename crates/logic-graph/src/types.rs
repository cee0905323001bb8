//! Core types for logic node graphs
//!
//! These types define the structure of an editable graph: sockets,
//! node instances, and the graph that owns them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::descriptor::{NodeTypeDescriptor, SocketTemplate};

/// Semantic kind of a socket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocketKind {
    /// Accepts any value
    Any,
    /// Reference to a scene object
    Object,
    /// Text string
    String,
    /// Shader value (untyped property value)
    Shader,
}

/// A socket type: identifier plus semantic kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocketType {
    /// Type identifier (e.g., "ArmAnySocket")
    pub id: String,
    /// Semantic kind of values carried by the socket
    pub kind: SocketKind,
}

impl SocketType {
    pub const ANY_ID: &'static str = "ArmAnySocket";
    pub const OBJECT_ID: &'static str = "ArmNodeSocketObject";
    pub const STRING_ID: &'static str = "NodeSocketString";
    pub const SHADER_ID: &'static str = "NodeSocketShader";

    /// Create a socket type
    pub fn new(id: impl Into<String>, kind: SocketKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    pub fn any() -> Self {
        Self::new(Self::ANY_ID, SocketKind::Any)
    }

    pub fn object() -> Self {
        Self::new(Self::OBJECT_ID, SocketKind::Object)
    }

    pub fn string() -> Self {
        Self::new(Self::STRING_ID, SocketKind::String)
    }

    pub fn shader() -> Self {
        Self::new(Self::SHADER_ID, SocketKind::Shader)
    }
}

/// Direction of a socket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocketDirection {
    Input,
    Output,
}

/// A socket on a node instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocketInstance {
    /// Display name (may be empty)
    pub name: String,
    /// Type of the socket
    pub socket_type: SocketType,
    /// Input or output
    pub direction: SocketDirection,
    /// Output represents a mutable binding rather than a computed value
    #[serde(default)]
    pub is_variable: bool,
}

impl SocketInstance {
    /// Instantiate a socket from a descriptor template
    pub fn from_template(template: &SocketTemplate, direction: SocketDirection) -> Self {
        Self {
            name: template.name.clone(),
            socket_type: template.socket_type.clone(),
            direction,
            is_variable: template.is_variable,
        }
    }
}

/// Category of a node type, used for grouping in a node palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    /// Event entry points
    Event,
    /// Control flow (branches, loops, gates)
    Logic,
    /// Variables and constants
    Variable,
    /// Scene object access
    Object,
    /// Math operations
    Math,
    /// Everything else (group plumbing, debugging)
    Miscellaneous,
}

/// Stable identity of a node instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Generate a fresh identity
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node instance in a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInstance {
    id: NodeId,
    node_type: String,
    inputs: Vec<SocketInstance>,
    outputs: Vec<SocketInstance>,
}

impl NodeInstance {
    /// Build a node with a fresh identity from a type's socket template
    pub fn from_descriptor(descriptor: &NodeTypeDescriptor) -> Self {
        Self {
            id: NodeId::new(),
            node_type: descriptor.id.clone(),
            inputs: descriptor
                .inputs
                .iter()
                .map(|t| SocketInstance::from_template(t, SocketDirection::Input))
                .collect(),
            outputs: descriptor
                .outputs
                .iter()
                .map(|t| SocketInstance::from_template(t, SocketDirection::Output))
                .collect(),
        }
    }

    /// Copy this node's type and current sockets under a fresh identity
    pub fn duplicate(&self) -> Self {
        Self {
            id: NodeId::new(),
            ..self.clone()
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Id of the node's type descriptor
    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    pub fn inputs(&self) -> &[SocketInstance] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[SocketInstance] {
        &self.outputs
    }

    /// Append an input socket
    pub fn push_input(&mut self, name: impl Into<String>, socket_type: SocketType) {
        self.inputs.push(SocketInstance {
            name: name.into(),
            socket_type,
            direction: SocketDirection::Input,
            is_variable: false,
        });
    }

    /// Append an output socket
    pub fn push_output(&mut self, name: impl Into<String>, socket_type: SocketType) {
        self.outputs.push(SocketInstance {
            name: name.into(),
            socket_type,
            direction: SocketDirection::Output,
            is_variable: false,
        });
    }

    pub(crate) fn outputs_mut(&mut self) -> &mut Vec<SocketInstance> {
        &mut self.outputs
    }
}

/// A complete editable graph
///
/// Nodes are kept in insertion order. Mutations that must honor type
/// constraints go through [`GraphEditor`](crate::editor::GraphEditor);
/// removal needs no type information and lives here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphInstance {
    /// Unique identifier for this graph
    pub id: String,
    /// Human-readable name
    pub name: String,
    nodes: Vec<NodeInstance>,
}

impl GraphInstance {
    /// Create a new empty graph
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> &[NodeInstance] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Find a node by ID
    pub fn find_node(&self, id: NodeId) -> Option<&NodeInstance> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub(crate) fn find_node_mut(&mut self, id: NodeId) -> Option<&mut NodeInstance> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Number of instances of the given node type
    pub fn count_of_type(&self, node_type: &str) -> usize {
        self.nodes.iter().filter(|n| n.node_type == node_type).count()
    }

    /// Iterate over instances of the given node type
    pub fn nodes_of_type<'a>(
        &'a self,
        node_type: &'a str,
    ) -> impl Iterator<Item = &'a NodeInstance> + 'a {
        self.nodes.iter().filter(move |n| n.node_type == node_type)
    }

    /// Remove a node and all of its sockets
    ///
    /// Removing a node that is not in the graph is a no-op and returns `None`.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeInstance> {
        let pos = self.nodes.iter().position(|n| n.id == id)?;
        log::debug!("Removed node {} from graph '{}'", id, self.id);
        Some(self.nodes.remove(pos))
    }

    pub(crate) fn push(&mut self, node: NodeInstance) {
        self.nodes.push(node);
    }
}
