//! Node type registry
//!
//! Maps node type ids to their descriptors and behaviors. A registry is
//! built once at startup and then passed by reference to every editing
//! operation; there is no process-global registry.
//!
//! # Usage
//!
//! ```ignore
//! use logic_graph::{NodeTypeRegistry, GraphEditor};
//!
//! let registry = NodeTypeRegistry::with_builtins()?;
//! let editor = GraphEditor::new(&registry, &sink);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::behavior::{DefaultBehavior, NodeBehavior};
use crate::constants::limits;
use crate::descriptor::{BehaviorFn, DescriptorFn, NodeTypeDescriptor};
use crate::error::{LogicGraphError, Result};
use crate::types::NodeCategory;

/// A registration entry combining a descriptor with its behavior
struct RegistryEntry {
    descriptor: NodeTypeDescriptor,
    behavior: Arc<dyn NodeBehavior>,
}

/// Registry of node types
pub struct NodeTypeRegistry {
    entries: HashMap<String, RegistryEntry>,
}

impl NodeTypeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a registry holding every descriptor collected via `inventory`
    ///
    /// Behaviors submitted with [`BehaviorFn`] are attached to their node
    /// types. A behavior for a type that was never described is ignored.
    pub fn with_builtins() -> Result<Self> {
        let registry = Self::from_submissions(
            inventory::iter::<DescriptorFn>.into_iter().map(|f| (f.0)()),
            inventory::iter::<BehaviorFn>
                .into_iter()
                .map(|f| (f.node_type, (f.behavior)())),
        )?;
        log::info!("Registered {} built-in node types", registry.len());
        Ok(registry)
    }

    fn from_submissions<'a>(
        descriptors: impl IntoIterator<Item = NodeTypeDescriptor>,
        behaviors: impl IntoIterator<Item = (&'a str, Arc<dyn NodeBehavior>)>,
    ) -> Result<Self> {
        let mut registry = Self::new();
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }
        for (node_type, behavior) in behaviors {
            match registry.entries.get_mut(node_type) {
                Some(entry) => entry.behavior = behavior,
                None => log::warn!(
                    "Behavior submitted for unregistered node type '{}'",
                    node_type
                ),
            }
        }
        Ok(registry)
    }

    /// Register a node type with the default (inert) behavior
    pub fn register(&mut self, descriptor: NodeTypeDescriptor) -> Result<()> {
        self.register_with_behavior(descriptor, Arc::new(DefaultBehavior))
    }

    /// Register a node type with a behavior
    ///
    /// Fails if a type with the same id is already registered; the existing
    /// registration is left untouched. An extensible type must start its
    /// instances with at least the minimum number of outputs.
    pub fn register_with_behavior(
        &mut self,
        descriptor: NodeTypeDescriptor,
        behavior: Arc<dyn NodeBehavior>,
    ) -> Result<()> {
        if self.entries.contains_key(&descriptor.id) {
            return Err(LogicGraphError::DuplicateType(descriptor.id));
        }
        if descriptor.is_extensible() && descriptor.outputs.len() < limits::MIN_DYNAMIC_OUTPUTS {
            return Err(LogicGraphError::InvalidDescriptor {
                node_type: descriptor.id,
                reason: format!(
                    "extensible types need at least {} output template(s)",
                    limits::MIN_DYNAMIC_OUTPUTS
                ),
            });
        }
        log::debug!(
            "Registered node type '{}' (v{})",
            descriptor.id,
            descriptor.version
        );
        self.entries.insert(
            descriptor.id.clone(),
            RegistryEntry {
                descriptor,
                behavior,
            },
        );
        Ok(())
    }

    /// Get the descriptor for a node type
    pub fn lookup(&self, node_type: &str) -> Result<&NodeTypeDescriptor> {
        self.entries
            .get(node_type)
            .map(|e| &e.descriptor)
            .ok_or_else(|| LogicGraphError::UnknownType(node_type.to_string()))
    }

    /// Get the behavior for a node type
    pub fn behavior(&self, node_type: &str) -> Result<Arc<dyn NodeBehavior>> {
        self.entries
            .get(node_type)
            .map(|e| e.behavior.clone())
            .ok_or_else(|| LogicGraphError::UnknownType(node_type.to_string()))
    }

    /// Check if a node type is registered
    pub fn has_node_type(&self, node_type: &str) -> bool {
        self.entries.contains_key(node_type)
    }

    /// List all registered node type ids, sorted
    pub fn node_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.entries.keys().map(|s| s.as_str()).collect();
        types.sort_unstable();
        types
    }

    /// Get all registered descriptors, sorted by id
    pub fn all_descriptors(&self) -> Vec<&NodeTypeDescriptor> {
        let mut descriptors: Vec<&NodeTypeDescriptor> =
            self.entries.values().map(|e| &e.descriptor).collect();
        descriptors.sort_unstable_by(|a, b| a.id.cmp(&b.id));
        descriptors
    }

    /// Get descriptors grouped by category, each group sorted by section then label
    pub fn descriptors_by_category(&self) -> BTreeMap<NodeCategory, Vec<&NodeTypeDescriptor>> {
        let mut grouped: BTreeMap<NodeCategory, Vec<&NodeTypeDescriptor>> = BTreeMap::new();
        for entry in self.entries.values() {
            grouped
                .entry(entry.descriptor.category)
                .or_default()
                .push(&entry.descriptor);
        }
        for descriptors in grouped.values_mut() {
            descriptors.sort_by(|a, b| (&a.section, &a.label).cmp(&(&b.section, &b.label)));
        }
        grouped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NodeTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
