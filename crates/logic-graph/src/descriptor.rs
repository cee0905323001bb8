//! Node type descriptors
//!
//! A [`NodeTypeDescriptor`] is the static description of a node type: its
//! palette metadata, the socket template every new instance starts with,
//! and the structural constraints the editor enforces. Node types describe
//! themselves through the [`NodeDescriptor`] trait and can be collected at
//! link time:
//!
//! ```ignore
//! inventory::submit!(logic_graph::DescriptorFn(MyNode::descriptor));
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::behavior::NodeBehavior;
use crate::constants::defaults;
use crate::types::{NodeCategory, SocketType};

/// Trait for node types that can describe themselves
pub trait NodeDescriptor {
    /// Get the static descriptor for this node type
    fn descriptor() -> NodeTypeDescriptor
    where
        Self: Sized;
}

/// Link-time registration of a node type descriptor
pub struct DescriptorFn(pub fn() -> NodeTypeDescriptor);

inventory::collect!(DescriptorFn);

/// Link-time registration of a behavior for a node type
///
/// ```ignore
/// fn my_behavior() -> Arc<dyn NodeBehavior> {
///     Arc::new(MyBehavior)
/// }
///
/// inventory::submit!(logic_graph::BehaviorFn {
///     node_type: "my-node",
///     behavior: my_behavior,
/// });
/// ```
pub struct BehaviorFn {
    pub node_type: &'static str,
    pub behavior: fn() -> Arc<dyn NodeBehavior>,
}

inventory::collect!(BehaviorFn);

/// Template for a socket created with every new instance of a node type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocketTemplate {
    /// Display name (may be empty)
    pub name: String,
    /// Type of the socket
    pub socket_type: SocketType,
    /// Marks an output as a mutable binding
    #[serde(default)]
    pub is_variable: bool,
}

impl SocketTemplate {
    pub fn new(name: impl Into<String>, socket_type: SocketType) -> Self {
        Self {
            name: name.into(),
            socket_type,
            is_variable: false,
        }
    }

    /// Mark this socket as a variable binding
    pub fn variable(mut self) -> Self {
        self.is_variable = true;
        self
    }
}

/// Complete static description of a node type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeTypeDescriptor {
    /// Unique type identifier (e.g., "group-input")
    pub id: String,
    /// Human-readable label
    pub label: String,
    /// Description of what the node does
    #[serde(default)]
    pub description: String,
    /// Category for palette grouping
    pub category: NodeCategory,
    /// Optional section within the category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Version of the node's socket layout
    pub version: u32,
    /// Input sockets every new instance starts with
    pub inputs: Vec<SocketTemplate>,
    /// Output sockets every new instance starts with
    pub outputs: Vec<SocketTemplate>,
    /// At most one instance per graph
    #[serde(default)]
    pub singleton_per_graph: bool,
    /// Socket type for user-added outputs; `None` means outputs are fixed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_outputs: Option<SocketType>,
}

impl NodeTypeDescriptor {
    /// Create a descriptor with no sockets and default version
    pub fn new(id: impl Into<String>, label: impl Into<String>, category: NodeCategory) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: String::new(),
            category,
            section: None,
            version: defaults::NODE_VERSION,
            inputs: Vec::new(),
            outputs: Vec::new(),
            singleton_per_graph: false,
            dynamic_outputs: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn with_input(mut self, socket: SocketTemplate) -> Self {
        self.inputs.push(socket);
        self
    }

    pub fn with_output(mut self, socket: SocketTemplate) -> Self {
        self.outputs.push(socket);
        self
    }

    /// Restrict the type to one instance per graph
    pub fn singleton(mut self) -> Self {
        self.singleton_per_graph = true;
        self
    }

    /// Allow users to add and remove outputs of the given type
    pub fn with_dynamic_outputs(mut self, socket_type: SocketType) -> Self {
        self.dynamic_outputs = Some(socket_type);
        self
    }

    /// Whether outputs may be added or removed after creation
    pub fn is_extensible(&self) -> bool {
        self.dynamic_outputs.is_some()
    }
}
