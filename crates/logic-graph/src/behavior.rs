//! Per-type node behaviors
//!
//! A [`NodeBehavior`] lets a node type hook into creation and duplication
//! and describe the editing affordances a host should draw for an instance.
//! The editor invokes these hooks explicitly; every method has a no-op
//! default so most node types need no behavior at all.

use serde::{Deserialize, Serialize};

use crate::descriptor::NodeTypeDescriptor;
use crate::types::{NodeId, NodeInstance, SocketType};

/// Hooks invoked by the editor for a node type
pub trait NodeBehavior: Send + Sync {
    /// Called on a freshly built node before it is added to the graph
    fn on_create(&self, _node: &mut NodeInstance) {}

    /// Called on a copy before the singleton check decides whether it is kept
    fn on_duplicate(&self, _source: &NodeInstance, _copy: &mut NodeInstance) {}

    /// Describe the buttons a host should draw for this node
    fn describe_ui(&self, _node: &NodeInstance, _descriptor: &NodeTypeDescriptor) -> Vec<UiRow> {
        Vec::new()
    }
}

/// Behavior used for node types registered without one
pub struct DefaultBehavior;

impl NodeBehavior for DefaultBehavior {}

/// An editing action a host can trigger from a button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EditAction {
    /// Append an output socket of the given type
    #[serde(rename_all = "camelCase")]
    AddOutput {
        node_id: NodeId,
        socket_type: SocketType,
    },
    /// Remove the output socket at `index`
    #[serde(rename_all = "camelCase")]
    RemoveOutput { node_id: NodeId, index: usize },
}

/// Icon hint for a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiIcon {
    Plus,
    X,
}

/// A button bound to an editing action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiButton {
    pub text: String,
    pub icon: Option<UiIcon>,
    pub emboss: bool,
    pub action: EditAction,
}

impl UiButton {
    pub fn new(text: impl Into<String>, action: EditAction) -> Self {
        Self {
            text: text.into(),
            icon: None,
            emboss: true,
            action,
        }
    }

    pub fn with_icon(mut self, icon: UiIcon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// A row of buttons
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiRow {
    /// Buttons are packed without spacing
    pub align: bool,
    pub buttons: Vec<UiButton>,
}

impl UiRow {
    pub fn aligned() -> Self {
        Self {
            align: true,
            buttons: Vec::new(),
        }
    }

    pub fn with_button(mut self, button: UiButton) -> Self {
        self.buttons.push(button);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeCategory;

    #[test]
    fn test_default_behavior_is_inert() {
        let descriptor = NodeTypeDescriptor::new("object", "Object", NodeCategory::Object);
        let mut node = NodeInstance::from_descriptor(&descriptor);
        let before = node.clone();

        DefaultBehavior.on_create(&mut node);
        assert_eq!(node, before);
        assert!(DefaultBehavior.describe_ui(&node, &descriptor).is_empty());
    }

    #[test]
    fn test_edit_action_serialization() {
        let action = EditAction::RemoveOutput {
            node_id: NodeId::new(),
            index: 2,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "removeOutput");
        assert_eq!(json["index"], 2);
        assert!(json.get("nodeId").is_some());
    }
}
