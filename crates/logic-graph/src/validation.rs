//! Structural validation for graphs that did not come through the editor
//!
//! The editor keeps graphs valid as they are edited. Graphs restored from
//! storage or undo snapshots are checked here before use.

use std::collections::{HashMap, HashSet};

use crate::constants::limits;
use crate::registry::NodeTypeRegistry;
use crate::types::{GraphInstance, NodeId};

/// Validation error with location context
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two nodes share an identity
    DuplicateNodeId { node_id: NodeId },
    /// A node has an unknown type (not in registry)
    UnknownNodeType { node_id: NodeId, node_type: String },
    /// More than one instance of a singleton type
    SingletonViolated { node_type: String, count: usize },
    /// An extensible node has fewer outputs than allowed
    TooFewOutputs { node_id: NodeId, count: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateNodeId { node_id } => {
                write!(f, "Node id '{}' appears more than once", node_id)
            }
            Self::UnknownNodeType { node_id, node_type } => {
                write!(f, "Unknown node type '{}' for node '{}'", node_type, node_id)
            }
            Self::SingletonViolated { node_type, count } => {
                write!(
                    f,
                    "Node type '{}' allows one instance per graph, found {}",
                    node_type, count
                )
            }
            Self::TooFewOutputs { node_id, count } => {
                write!(f, "Node '{}' has {} output(s)", node_id, count)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a graph against a registry
///
/// Returns all validation errors found (not just the first).
pub fn validate_graph(graph: &GraphInstance, registry: &NodeTypeRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    validate_identities(graph, &mut errors);
    validate_node_types(graph, registry, &mut errors);
    validate_singletons(graph, registry, &mut errors);
    validate_dynamic_outputs(graph, registry, &mut errors);

    errors
}

fn validate_identities(graph: &GraphInstance, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for node in graph.nodes() {
        if !seen.insert(node.id()) {
            errors.push(ValidationError::DuplicateNodeId { node_id: node.id() });
        }
    }
}

fn validate_node_types(
    graph: &GraphInstance,
    registry: &NodeTypeRegistry,
    errors: &mut Vec<ValidationError>,
) {
    for node in graph.nodes() {
        if !registry.has_node_type(node.node_type()) {
            errors.push(ValidationError::UnknownNodeType {
                node_id: node.id(),
                node_type: node.node_type().to_string(),
            });
        }
    }
}

fn validate_singletons(
    graph: &GraphInstance,
    registry: &NodeTypeRegistry,
    errors: &mut Vec<ValidationError>,
) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for node in graph.nodes() {
        *counts.entry(node.node_type()).or_insert(0) += 1;
    }

    let mut violations: Vec<(&str, usize)> = counts
        .into_iter()
        .filter(|(node_type, count)| {
            *count > 1
                && registry
                    .lookup(node_type)
                    .map(|d| d.singleton_per_graph)
                    .unwrap_or(false)
        })
        .collect();
    violations.sort_unstable();

    for (node_type, count) in violations {
        errors.push(ValidationError::SingletonViolated {
            node_type: node_type.to_string(),
            count,
        });
    }
}

fn validate_dynamic_outputs(
    graph: &GraphInstance,
    registry: &NodeTypeRegistry,
    errors: &mut Vec<ValidationError>,
) {
    for node in graph.nodes() {
        let extensible = registry
            .lookup(node.node_type())
            .map(|d| d.is_extensible())
            .unwrap_or(false);
        if extensible && node.outputs().len() < limits::MIN_DYNAMIC_OUTPUTS {
            errors.push(ValidationError::TooFewOutputs {
                node_id: node.id(),
                count: node.outputs().len(),
            });
        }
    }
}
