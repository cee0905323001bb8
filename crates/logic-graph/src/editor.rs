//! Graph editing operations
//!
//! [`GraphEditor`] is the single entry point for mutations that depend on
//! node type information. It checks structural invariants at the moment of
//! mutation: a rejected edit leaves the graph exactly as it was.
//!
//! # Example
//!
//! ```ignore
//! let editor = GraphEditor::new(&registry, &sink);
//! let mut graph = GraphInstance::new("tree", "Tree");
//!
//! if let Insertion::Added(id) = editor.insert(&mut graph, "group-input")? {
//!     editor.add_output_socket(&mut graph, id, SocketType::any())?;
//! }
//! ```

use crate::behavior::{EditAction, UiRow};
use crate::config::EditorConfig;
use crate::constants::limits;
use crate::descriptor::NodeTypeDescriptor;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{LogicGraphError, Result};
use crate::registry::NodeTypeRegistry;
use crate::types::{GraphInstance, NodeId, NodeInstance, SocketInstance, SocketType};

/// Outcome of an edit that may be refused by a graph invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
    /// The node was added under this identity
    Added(NodeId),
    /// The node was not added; the diagnostic says why
    Rejected(Diagnostic),
}

impl Insertion {
    /// Identity of the added node, if any
    pub fn node_id(&self) -> Option<NodeId> {
        match self {
            Self::Added(id) => Some(*id),
            Self::Rejected(_) => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Applies editing operations to graphs using a node type registry
pub struct GraphEditor<'a> {
    registry: &'a NodeTypeRegistry,
    sink: &'a dyn DiagnosticSink,
    log_diagnostics: bool,
}

impl<'a> GraphEditor<'a> {
    /// Create an editor with default configuration
    pub fn new(registry: &'a NodeTypeRegistry, sink: &'a dyn DiagnosticSink) -> Self {
        Self::with_config(registry, sink, &EditorConfig::default())
    }

    /// Create an editor using the given configuration
    pub fn with_config(
        registry: &'a NodeTypeRegistry,
        sink: &'a dyn DiagnosticSink,
        config: &EditorConfig,
    ) -> Self {
        Self {
            registry,
            sink,
            log_diagnostics: config.log_diagnostics,
        }
    }

    pub fn registry(&self) -> &'a NodeTypeRegistry {
        self.registry
    }

    /// Insert a new node of the given type
    ///
    /// A second instance of a singleton type is rejected with a warning
    /// diagnostic; an unregistered type is an error. So is a creation hook
    /// that leaves an extensible node without outputs.
    pub fn insert(&self, graph: &mut GraphInstance, node_type: &str) -> Result<Insertion> {
        let descriptor = self.registry.lookup(node_type)?;
        if let Some(diagnostic) = self.check_singleton(graph, descriptor) {
            return Ok(Insertion::Rejected(diagnostic));
        }

        let mut node = NodeInstance::from_descriptor(descriptor);
        self.registry.behavior(node_type)?.on_create(&mut node);
        self.check_outputs(graph, descriptor, &node)?;

        let id = node.id();
        graph.push(node);
        log::debug!("Inserted {} node {} into graph '{}'", node_type, id, graph.id);
        Ok(Insertion::Added(id))
    }

    /// Duplicate an existing node, including its current sockets
    ///
    /// The source is never modified. If the copy would violate the singleton
    /// constraint it is discarded and a warning diagnostic is emitted.
    pub fn duplicate(&self, graph: &mut GraphInstance, source: NodeId) -> Result<Insertion> {
        let source_node = graph
            .find_node(source)
            .ok_or(LogicGraphError::NodeNotFound(source))?;
        let node_type = source_node.node_type().to_string();
        let descriptor = self.registry.lookup(&node_type)?;

        let mut copy = source_node.duplicate();
        self.registry
            .behavior(&node_type)?
            .on_duplicate(source_node, &mut copy);
        self.check_outputs(graph, descriptor, &copy)?;

        if let Some(diagnostic) = self.check_singleton(graph, descriptor) {
            log::debug!("Discarded copy of {} node {}", node_type, source);
            return Ok(Insertion::Rejected(diagnostic));
        }

        let id = copy.id();
        graph.push(copy);
        log::debug!("Duplicated {} node {} as {}", node_type, source, id);
        Ok(Insertion::Added(id))
    }

    /// Remove a node; a node that is already gone is a no-op
    pub fn remove(&self, graph: &mut GraphInstance, node_id: NodeId) -> Option<NodeInstance> {
        graph.remove(node_id)
    }

    /// Append an output socket to a node whose type permits dynamic outputs
    ///
    /// Returns the index of the new socket.
    pub fn add_output_socket(
        &self,
        graph: &mut GraphInstance,
        node_id: NodeId,
        socket_type: SocketType,
    ) -> Result<usize> {
        let node = graph
            .find_node_mut(node_id)
            .ok_or(LogicGraphError::NodeNotFound(node_id))?;
        let descriptor = self.registry.lookup(node.node_type())?;
        if !descriptor.is_extensible() {
            return Err(LogicGraphError::DynamicOutputsNotPermitted(descriptor.id.clone()));
        }

        node.push_output(String::new(), socket_type);
        let index = node.outputs().len() - 1;
        log::debug!("Added output {} to node {}", index, node_id);
        Ok(index)
    }

    /// Remove the output socket at `index` from a node with dynamic outputs
    ///
    /// Fails without mutating the node if the index is out of range or if
    /// the node would be left with fewer than one output.
    pub fn remove_output_socket(
        &self,
        graph: &mut GraphInstance,
        node_id: NodeId,
        index: usize,
    ) -> Result<SocketInstance> {
        let graph_id = graph.id.clone();
        let node = graph
            .find_node_mut(node_id)
            .ok_or(LogicGraphError::NodeNotFound(node_id))?;
        let descriptor = self.registry.lookup(node.node_type())?;
        if !descriptor.is_extensible() {
            return Err(LogicGraphError::DynamicOutputsNotPermitted(descriptor.id.clone()));
        }

        let len = node.outputs().len();
        if index >= len {
            return Err(LogicGraphError::IndexOutOfRange { index, len });
        }
        if len <= limits::MIN_DYNAMIC_OUTPUTS {
            self.emit(Diagnostic::minimum_cardinality(
                &graph_id,
                &descriptor.id,
                node_id,
                limits::MIN_DYNAMIC_OUTPUTS,
            ));
            return Err(LogicGraphError::MinimumCardinality {
                node_id,
                minimum: limits::MIN_DYNAMIC_OUTPUTS,
            });
        }

        let removed = node.outputs_mut().remove(index);
        log::debug!("Removed output {} from node {}", index, node_id);
        Ok(removed)
    }

    /// Describe the buttons a host should draw for a node
    pub fn describe_ui(&self, graph: &GraphInstance, node_id: NodeId) -> Result<Vec<UiRow>> {
        let node = graph
            .find_node(node_id)
            .ok_or(LogicGraphError::NodeNotFound(node_id))?;
        let descriptor = self.registry.lookup(node.node_type())?;
        Ok(self
            .registry
            .behavior(node.node_type())?
            .describe_ui(node, descriptor))
    }

    /// Execute an action bound to a button from [`describe_ui`](Self::describe_ui)
    pub fn apply(&self, graph: &mut GraphInstance, action: &EditAction) -> Result<()> {
        match action {
            EditAction::AddOutput {
                node_id,
                socket_type,
            } => {
                self.add_output_socket(graph, *node_id, socket_type.clone())?;
            }
            EditAction::RemoveOutput { node_id, index } => {
                self.remove_output_socket(graph, *node_id, *index)?;
            }
        }
        Ok(())
    }

    /// Reject an instance of a singleton type that is already present
    fn check_singleton(
        &self,
        graph: &GraphInstance,
        descriptor: &NodeTypeDescriptor,
    ) -> Option<Diagnostic> {
        if !descriptor.singleton_per_graph || graph.count_of_type(&descriptor.id) == 0 {
            return None;
        }
        let diagnostic = Diagnostic::singleton_violation(&graph.id, &descriptor.id, &descriptor.label);
        self.emit(diagnostic.clone());
        Some(diagnostic)
    }

    /// Refuse a node that a hook left below the extensible output minimum
    fn check_outputs(
        &self,
        graph: &GraphInstance,
        descriptor: &NodeTypeDescriptor,
        node: &NodeInstance,
    ) -> Result<()> {
        if !descriptor.is_extensible() || node.outputs().len() >= limits::MIN_DYNAMIC_OUTPUTS {
            return Ok(());
        }
        self.emit(Diagnostic::minimum_cardinality(
            &graph.id,
            &descriptor.id,
            node.id(),
            limits::MIN_DYNAMIC_OUTPUTS,
        ));
        Err(LogicGraphError::MinimumCardinality {
            node_id: node.id(),
            minimum: limits::MIN_DYNAMIC_OUTPUTS,
        })
    }

    fn emit(&self, diagnostic: Diagnostic) {
        if self.log_diagnostics {
            log::warn!("[{}] {}", diagnostic.code, diagnostic.message);
        }
        if let Err(e) = self.sink.send(diagnostic) {
            log::warn!("Failed to deliver diagnostic: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::behavior::NodeBehavior;
    use crate::descriptor::SocketTemplate;
    use crate::diagnostics::{DiagnosticCode, VecDiagnosticSink};
    use crate::types::NodeCategory;

    fn registry() -> NodeTypeRegistry {
        let mut registry = NodeTypeRegistry::new();
        registry
            .register(
                NodeTypeDescriptor::new("group", "Group Input Node", NodeCategory::Miscellaneous)
                    .singleton()
                    .with_dynamic_outputs(SocketType::any())
                    .with_output(SocketTemplate::new("", SocketType::any())),
            )
            .unwrap();
        registry
            .register(
                NodeTypeDescriptor::new("object", "Object", NodeCategory::Object)
                    .with_input(SocketTemplate::new("Object", SocketType::object()))
                    .with_output(SocketTemplate::new("Object", SocketType::object()).variable()),
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_insert_unknown_type_is_error() {
        let registry = registry();
        let sink = VecDiagnosticSink::new();
        let editor = GraphEditor::new(&registry, &sink);
        let mut graph = GraphInstance::new("tree", "Tree");

        let result = editor.insert(&mut graph, "missing");
        assert!(matches!(result, Err(LogicGraphError::UnknownType(_))));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_singleton_insert_rejected() {
        let registry = registry();
        let sink = VecDiagnosticSink::new();
        let editor = GraphEditor::new(&registry, &sink);
        let mut graph = GraphInstance::new("tree", "Tree");

        assert!(!editor.insert(&mut graph, "group").unwrap().is_rejected());
        let second = editor.insert(&mut graph, "group").unwrap();

        assert!(second.is_rejected());
        assert_eq!(second.node_id(), None);
        assert_eq!(graph.count_of_type("group"), 1);
        assert_eq!(sink.count(DiagnosticCode::SingletonViolation), 1);
    }

    #[test]
    fn test_duplicate_copies_sockets() {
        let registry = registry();
        let sink = VecDiagnosticSink::new();
        let editor = GraphEditor::new(&registry, &sink);
        let mut graph = GraphInstance::new("tree", "Tree");

        let id = editor.insert(&mut graph, "object").unwrap().node_id().unwrap();
        let copy = editor.duplicate(&mut graph, id).unwrap().node_id().unwrap();

        assert_ne!(id, copy);
        assert_eq!(graph.len(), 2);
        let copied = graph.find_node(copy).unwrap();
        assert!(copied.outputs()[0].is_variable);
    }

    #[test]
    fn test_duplicate_missing_source() {
        let registry = registry();
        let editor = GraphEditor::new(&registry, &crate::diagnostics::NullDiagnosticSink);
        let mut graph = GraphInstance::new("tree", "Tree");

        let missing = NodeId::new();
        assert!(matches!(
            editor.duplicate(&mut graph, missing),
            Err(LogicGraphError::NodeNotFound(id)) if id == missing
        ));
    }

    #[test]
    fn test_static_node_rejects_dynamic_outputs() {
        let registry = registry();
        let editor = GraphEditor::new(&registry, &crate::diagnostics::NullDiagnosticSink);
        let mut graph = GraphInstance::new("tree", "Tree");
        let id = editor.insert(&mut graph, "object").unwrap().node_id().unwrap();

        assert!(matches!(
            editor.add_output_socket(&mut graph, id, SocketType::any()),
            Err(LogicGraphError::DynamicOutputsNotPermitted(_))
        ));
        assert!(matches!(
            editor.remove_output_socket(&mut graph, id, 0),
            Err(LogicGraphError::DynamicOutputsNotPermitted(_))
        ));
        assert_eq!(graph.find_node(id).unwrap().outputs().len(), 1);
    }

    #[test]
    fn test_remove_output_index_out_of_range() {
        let registry = registry();
        let sink = VecDiagnosticSink::new();
        let editor = GraphEditor::new(&registry, &sink);
        let mut graph = GraphInstance::new("tree", "Tree");
        let id = editor.insert(&mut graph, "group").unwrap().node_id().unwrap();
        editor.add_output_socket(&mut graph, id, SocketType::any()).unwrap();

        assert!(matches!(
            editor.remove_output_socket(&mut graph, id, 2),
            Err(LogicGraphError::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert_eq!(graph.find_node(id).unwrap().outputs().len(), 2);
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn test_minimum_cardinality_emits_diagnostic() {
        let registry = registry();
        let sink = VecDiagnosticSink::new();
        let editor = GraphEditor::new(&registry, &sink);
        let mut graph = GraphInstance::new("tree", "Tree");
        let id = editor.insert(&mut graph, "group").unwrap().node_id().unwrap();

        assert!(matches!(
            editor.remove_output_socket(&mut graph, id, 0),
            Err(LogicGraphError::MinimumCardinality { minimum: 1, .. })
        ));
        assert_eq!(graph.find_node(id).unwrap().outputs().len(), 1);
        assert_eq!(sink.count(DiagnosticCode::MinimumCardinalityViolation), 1);
    }

    #[test]
    fn test_apply_actions() {
        let registry = registry();
        let editor = GraphEditor::new(&registry, &crate::diagnostics::NullDiagnosticSink);
        let mut graph = GraphInstance::new("tree", "Tree");
        let id = editor.insert(&mut graph, "group").unwrap().node_id().unwrap();

        editor
            .apply(
                &mut graph,
                &EditAction::AddOutput {
                    node_id: id,
                    socket_type: SocketType::string(),
                },
            )
            .unwrap();
        assert_eq!(graph.find_node(id).unwrap().outputs()[1].socket_type, SocketType::string());

        editor
            .apply(&mut graph, &EditAction::RemoveOutput { node_id: id, index: 0 })
            .unwrap();
        let outputs = graph.find_node(id).unwrap().outputs();
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].socket_type, SocketType::string());
    }

    struct CountingBehavior {
        created: std::sync::atomic::AtomicUsize,
    }

    impl NodeBehavior for CountingBehavior {
        fn on_create(&self, node: &mut NodeInstance) {
            self.created.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            node.push_input("Extra", SocketType::string());
        }

        fn on_duplicate(&self, _source: &NodeInstance, copy: &mut NodeInstance) {
            copy.push_output("Copied", SocketType::any());
        }
    }

    #[test]
    fn test_hooks_are_invoked() {
        let behavior = Arc::new(CountingBehavior {
            created: std::sync::atomic::AtomicUsize::new(0),
        });
        let mut registry = NodeTypeRegistry::new();
        registry
            .register_with_behavior(
                NodeTypeDescriptor::new("hooked", "Hooked", NodeCategory::Logic),
                behavior.clone(),
            )
            .unwrap();
        let editor = GraphEditor::new(&registry, &crate::diagnostics::NullDiagnosticSink);
        let mut graph = GraphInstance::new("tree", "Tree");

        let id = editor.insert(&mut graph, "hooked").unwrap().node_id().unwrap();
        assert_eq!(behavior.created.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert_eq!(graph.find_node(id).unwrap().inputs()[0].name, "Extra");

        let copy = editor.duplicate(&mut graph, id).unwrap().node_id().unwrap();
        assert_eq!(graph.find_node(copy).unwrap().outputs()[0].name, "Copied");
        assert!(graph.find_node(id).unwrap().outputs().is_empty());
    }

    struct StrippingBehavior;

    impl NodeBehavior for StrippingBehavior {
        fn on_create(&self, node: &mut NodeInstance) {
            node.outputs_mut().clear();
        }

        fn on_duplicate(&self, _source: &NodeInstance, copy: &mut NodeInstance) {
            copy.outputs_mut().clear();
        }
    }

    #[test]
    fn test_hook_cannot_strip_extensible_outputs() {
        let mut registry = NodeTypeRegistry::new();
        registry
            .register_with_behavior(
                NodeTypeDescriptor::new("strip", "Strip", NodeCategory::Logic)
                    .with_dynamic_outputs(SocketType::any())
                    .with_output(SocketTemplate::new("", SocketType::any())),
                Arc::new(StrippingBehavior),
            )
            .unwrap();
        let sink = VecDiagnosticSink::new();
        let editor = GraphEditor::new(&registry, &sink);
        let mut graph = GraphInstance::new("tree", "Tree");

        assert!(matches!(
            editor.insert(&mut graph, "strip"),
            Err(LogicGraphError::MinimumCardinality { minimum: 1, .. })
        ));
        assert!(graph.is_empty());
        assert_eq!(sink.count(DiagnosticCode::MinimumCardinalityViolation), 1);
        assert!(crate::validation::validate_graph(&graph, &registry).is_empty());
    }

    #[test]
    fn test_duplicate_hook_cannot_strip_extensible_outputs() {
        let mut registry = NodeTypeRegistry::new();
        registry
            .register_with_behavior(
                NodeTypeDescriptor::new("strip", "Strip", NodeCategory::Logic)
                    .with_dynamic_outputs(SocketType::any())
                    .with_output(SocketTemplate::new("", SocketType::any())),
                Arc::new(StrippingBehavior),
            )
            .unwrap();
        let editor = GraphEditor::new(&registry, &crate::diagnostics::NullDiagnosticSink);
        let mut graph = GraphInstance::new("tree", "Tree");
        let source = NodeInstance::from_descriptor(registry.lookup("strip").unwrap());
        let source_id = source.id();
        graph.push(source);

        assert!(matches!(
            editor.duplicate(&mut graph, source_id),
            Err(LogicGraphError::MinimumCardinality { .. })
        ));
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.find_node(source_id).unwrap().outputs().len(), 1);
    }
}
