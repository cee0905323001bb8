//! Logic Graph - node graph data model and editing kernel for logic nodes
//!
//! This crate provides the typed model behind a visual-scripting node
//! editor. It supports:
//!
//! - A node type registry with per-type socket templates and behaviors
//! - Editable graphs of node instances with stable identities
//! - Singleton node types (at most one instance per graph)
//! - Extensible node types whose outputs users add and remove
//! - Diagnostics for refused edits, routed to a host-provided sink
//! - Read-only snapshots for an external execution engine
//! - Compressed snapshot-based undo/redo
//!
//! # Architecture
//!
//! - `NodeTypeRegistry`: descriptors and behaviors, built once at startup
//! - `GraphEditor`: invariant-checked mutations over a `GraphInstance`
//! - `DiagnosticSink`: where rejected edits are reported
//! - `EditSession`: a graph, its editor, and its undo history
//!
//! # Example
//!
//! ```ignore
//! use logic_graph::{GraphEditor, GraphInstance, LogDiagnosticSink, NodeTypeRegistry};
//!
//! let registry = NodeTypeRegistry::with_builtins()?;
//! let editor = GraphEditor::new(&registry, &LogDiagnosticSink);
//! let mut graph = GraphInstance::new("tree", "My Tree");
//! editor.insert(&mut graph, "group-input")?;
//! ```

pub mod behavior;
pub mod config;
pub mod constants;
pub mod descriptor;
pub mod diagnostics;
pub mod editor;
pub mod error;
pub mod registry;
pub mod session;
pub mod snapshot;
pub mod types;
pub mod undo;
pub mod validation;

// Re-export key types
pub use behavior::{DefaultBehavior, EditAction, NodeBehavior, UiButton, UiIcon, UiRow};
pub use config::EditorConfig;
pub use descriptor::{BehaviorFn, DescriptorFn, NodeDescriptor, NodeTypeDescriptor, SocketTemplate};
pub use diagnostics::{
    Diagnostic, DiagnosticCode, DiagnosticLevel, DiagnosticSink, LogDiagnosticSink,
    NullDiagnosticSink, SinkError, VecDiagnosticSink,
};
pub use editor::{GraphEditor, Insertion};
pub use error::{LogicGraphError, Result};
pub use registry::NodeTypeRegistry;
pub use session::EditSession;
pub use snapshot::{GraphSnapshot, NodeSnapshot};
pub use types::{
    GraphInstance, NodeCategory, NodeId, NodeInstance, SocketDirection, SocketInstance,
    SocketKind, SocketType,
};
pub use undo::UndoStack;
pub use validation::{validate_graph, ValidationError};
