//! Editing session with undo history
//!
//! An [`EditSession`] owns one graph and its [`UndoStack`], and routes every
//! edit through a [`GraphEditor`]. The state before an edit is recorded only
//! when the edit changed the graph: rejected insertions, errors, and removal
//! of a node that is already gone leave the history as it was.

use crate::behavior::{EditAction, UiRow};
use crate::editor::{GraphEditor, Insertion};
use crate::error::Result;
use crate::types::{GraphInstance, NodeId, NodeInstance, SocketInstance, SocketType};
use crate::undo::UndoStack;

/// A graph being edited, with its undo history
pub struct EditSession<'a> {
    editor: GraphEditor<'a>,
    graph: GraphInstance,
    history: UndoStack,
}

impl<'a> EditSession<'a> {
    pub fn new(editor: GraphEditor<'a>, graph: GraphInstance, history: UndoStack) -> Self {
        Self {
            editor,
            graph,
            history,
        }
    }

    /// The live graph
    pub fn graph(&self) -> &GraphInstance {
        &self.graph
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    /// End the session, keeping the graph
    pub fn into_graph(self) -> GraphInstance {
        self.graph
    }

    pub fn insert(&mut self, node_type: &str) -> Result<Insertion> {
        let before = self.history.capture(&self.graph)?;
        let outcome = self.editor.insert(&mut self.graph, node_type)?;
        if !outcome.is_rejected() {
            self.history.commit(before);
        }
        Ok(outcome)
    }

    pub fn duplicate(&mut self, source: NodeId) -> Result<Insertion> {
        let before = self.history.capture(&self.graph)?;
        let outcome = self.editor.duplicate(&mut self.graph, source)?;
        if !outcome.is_rejected() {
            self.history.commit(before);
        }
        Ok(outcome)
    }

    pub fn remove(&mut self, node_id: NodeId) -> Result<Option<NodeInstance>> {
        if !self.graph.contains(node_id) {
            return Ok(None);
        }
        self.history.record(&self.graph)?;
        Ok(self.editor.remove(&mut self.graph, node_id))
    }

    pub fn add_output_socket(&mut self, node_id: NodeId, socket_type: SocketType) -> Result<usize> {
        let before = self.history.capture(&self.graph)?;
        let index = self
            .editor
            .add_output_socket(&mut self.graph, node_id, socket_type)?;
        self.history.commit(before);
        Ok(index)
    }

    pub fn remove_output_socket(&mut self, node_id: NodeId, index: usize) -> Result<SocketInstance> {
        let before = self.history.capture(&self.graph)?;
        let removed = self
            .editor
            .remove_output_socket(&mut self.graph, node_id, index)?;
        self.history.commit(before);
        Ok(removed)
    }

    pub fn describe_ui(&self, node_id: NodeId) -> Result<Vec<UiRow>> {
        self.editor.describe_ui(&self.graph, node_id)
    }

    /// Execute a button action as one undoable edit
    pub fn apply(&mut self, action: &EditAction) -> Result<()> {
        let before = self.history.capture(&self.graph)?;
        self.editor.apply(&mut self.graph, action)?;
        self.history.commit(before);
        Ok(())
    }

    /// Step back one edit; `Ok(false)` when there is nothing to undo
    pub fn undo(&mut self) -> Result<bool> {
        self.history.undo(&mut self.graph, self.editor.registry())
    }

    /// Step forward one undone edit; `Ok(false)` when there is nothing to redo
    pub fn redo(&mut self) -> Result<bool> {
        self.history.redo(&mut self.graph, self.editor.registry())
    }
}
