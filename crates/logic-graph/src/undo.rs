//! Edit history for a graph
//!
//! The history keeps the graph states on either side of the live graph:
//! `past` holds the state before each recorded edit, `future` the states
//! that were undone. States are stored as zstd-compressed JSON. A restored
//! state bypasses the editor, so it is validated against the registry
//! before it replaces the live graph.

use std::collections::VecDeque;

use crate::config::EditorConfig;
use crate::constants::defaults;
use crate::error::{LogicGraphError, Result};
use crate::registry::NodeTypeRegistry;
use crate::types::GraphInstance;
use crate::validation::validate_graph;

/// A compressed graph state
#[derive(Clone)]
pub(crate) struct Snapshot(Vec<u8>);

impl Snapshot {
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Bounded undo/redo history of graph states
pub struct UndoStack {
    past: VecDeque<Snapshot>,
    future: Vec<Snapshot>,
    depth: usize,
    level: i32,
}

impl UndoStack {
    /// Create a history holding at most `depth` undoable edits
    pub fn new(depth: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: Vec::new(),
            depth: depth.max(1),
            level: defaults::UNDO_COMPRESSION_LEVEL,
        }
    }

    /// Create a history sized and tuned from configuration
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            level: config.undo_compression_level,
            ..Self::new(config.max_undo_snapshots)
        }
    }

    /// Record `before` as the state preceding an edit
    ///
    /// Any undone states are discarded.
    pub fn record(&mut self, before: &GraphInstance) -> Result<()> {
        let snapshot = self.capture(before)?;
        self.commit(snapshot);
        Ok(())
    }

    pub(crate) fn capture(&self, graph: &GraphInstance) -> Result<Snapshot> {
        let json = serde_json::to_vec(graph)?;
        zstd::encode_all(json.as_slice(), self.level)
            .map(Snapshot)
            .map_err(|e| LogicGraphError::Compression(e.to_string()))
    }

    pub(crate) fn commit(&mut self, before: Snapshot) {
        self.future.clear();
        self.past.push_back(before);
        if self.past.len() > self.depth {
            self.past.pop_front();
        }
    }

    /// Replace `graph` with the state before the last recorded edit
    ///
    /// Returns `Ok(false)` when there is nothing to undo. If the stored
    /// state fails to decode or validate, the error is returned and both
    /// the graph and the history are left unchanged.
    pub fn undo(&mut self, graph: &mut GraphInstance, registry: &NodeTypeRegistry) -> Result<bool> {
        let Some(previous) = self.past.back() else {
            return Ok(false);
        };
        let restored = self.restore(previous, registry)?;
        let current = self.capture(graph)?;

        self.past.pop_back();
        self.future.push(current);
        *graph = restored;
        log::debug!("Undo on graph '{}' ({} left)", graph.id, self.past.len());
        Ok(true)
    }

    /// Re-apply the last undone edit
    ///
    /// Returns `Ok(false)` when there is nothing to redo. Failure leaves the
    /// graph and the history unchanged.
    pub fn redo(&mut self, graph: &mut GraphInstance, registry: &NodeTypeRegistry) -> Result<bool> {
        let Some(next) = self.future.last() else {
            return Ok(false);
        };
        let restored = self.restore(next, registry)?;
        let current = self.capture(graph)?;

        self.future.pop();
        self.past.push_back(current);
        *graph = restored;
        log::debug!("Redo on graph '{}' ({} left)", graph.id, self.future.len());
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of edits that can be undone
    pub fn len(&self) -> usize {
        self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.past.is_empty() && self.future.is_empty()
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Total compressed size of every stored state
    pub fn compressed_size(&self) -> usize {
        self.past.iter().chain(&self.future).map(Snapshot::len).sum()
    }

    fn restore(&self, snapshot: &Snapshot, registry: &NodeTypeRegistry) -> Result<GraphInstance> {
        let json = zstd::decode_all(snapshot.0.as_slice())
            .map_err(|e| LogicGraphError::Compression(e.to_string()))?;
        let graph: GraphInstance = serde_json::from_slice(&json)?;

        let errors = validate_graph(&graph, registry);
        if !errors.is_empty() {
            log::warn!(
                "Refusing to restore graph '{}': {} validation error(s)",
                graph.id,
                errors.len()
            );
            return Err(LogicGraphError::InvalidGraph(errors));
        }
        Ok(graph)
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new(defaults::MAX_UNDO_SNAPSHOTS)
    }
}
