//! Error types for the logic graph kernel

use thiserror::Error;

use crate::types::NodeId;
use crate::validation::ValidationError;

/// Result type alias using LogicGraphError
pub type Result<T> = std::result::Result<T, LogicGraphError>;

/// Errors that can occur while registering node types or editing graphs
#[derive(Debug, Error)]
pub enum LogicGraphError {
    /// A node type with this id is already registered
    #[error("Node type already registered: {0}")]
    DuplicateType(String),

    /// No node type with this id is registered
    #[error("Unknown node type: {0}")]
    UnknownType(String),

    /// The node is not part of the graph
    #[error("Node not found in graph: {0}")]
    NodeNotFound(NodeId),

    /// The node's type does not allow adding or removing output sockets
    #[error("Node type '{0}' does not permit dynamic output sockets")]
    DynamicOutputsNotPermitted(String),

    /// Socket index outside the node's socket list
    #[error("Socket index {index} out of range (node has {len} sockets)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Removing the socket would leave the node with fewer outputs than allowed
    #[error("Node '{node_id}' must keep at least {minimum} output socket(s)")]
    MinimumCardinality { node_id: NodeId, minimum: usize },

    /// A descriptor's socket template breaks a structural constraint
    #[error("Invalid descriptor for node type '{node_type}': {reason}")]
    InvalidDescriptor { node_type: String, reason: String },

    /// A graph that bypassed the editor failed validation
    #[error("Invalid graph: {} validation error(s)", .0.len())]
    InvalidGraph(Vec<ValidationError>),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Compression error
    #[error("Compression error: {0}")]
    Compression(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl LogicGraphError {
    /// Create a configuration error with a message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
