//! Group Input Node
//!
//! Entry point of a node group: its outputs are the values passed into the
//! group. Only one may exist per tree, and users grow or shrink its output
//! list from the node itself.

use std::sync::Arc;

use logic_graph::{
    EditAction, NodeBehavior, NodeCategory, NodeDescriptor, NodeInstance, NodeTypeDescriptor,
    SocketTemplate, SocketType, UiButton, UiIcon, UiRow,
};

/// Group Input Node
///
/// # Outputs
/// - one unnamed `any` socket on creation; more can be added with "New"
pub struct GroupInputNode;

impl GroupInputNode {
    pub const NODE_TYPE: &'static str = "group-input";
}

impl NodeDescriptor for GroupInputNode {
    fn descriptor() -> NodeTypeDescriptor {
        NodeTypeDescriptor::new(Self::NODE_TYPE, "Group Input Node", NodeCategory::Miscellaneous)
            .with_description("Input for a given node tree")
            .with_section("group")
            .with_version(1)
            .singleton()
            .with_dynamic_outputs(SocketType::any())
            .with_output(SocketTemplate::new("", SocketType::any()))
    }
}

/// Offers "New" always and a remove button once more than one output exists
pub struct GroupInputBehavior;

impl NodeBehavior for GroupInputBehavior {
    fn describe_ui(&self, node: &NodeInstance, descriptor: &NodeTypeDescriptor) -> Vec<UiRow> {
        let socket_type = descriptor
            .dynamic_outputs
            .clone()
            .unwrap_or_else(SocketType::any);

        let mut row = UiRow::aligned().with_button(
            UiButton::new(
                "New",
                EditAction::AddOutput {
                    node_id: node.id(),
                    socket_type,
                },
            )
            .with_icon(UiIcon::Plus),
        );

        let outputs = node.outputs().len();
        if outputs > 1 {
            row = row.with_button(
                UiButton::new(
                    "",
                    EditAction::RemoveOutput {
                        node_id: node.id(),
                        index: outputs - 1,
                    },
                )
                .with_icon(UiIcon::X),
            );
        }

        vec![row]
    }
}

fn group_input_behavior() -> Arc<dyn NodeBehavior> {
    Arc::new(GroupInputBehavior)
}

inventory::submit!(logic_graph::DescriptorFn(GroupInputNode::descriptor));
inventory::submit!(logic_graph::BehaviorFn {
    node_type: GroupInputNode::NODE_TYPE,
    behavior: group_input_behavior,
});
