//! Object Node
//!
//! References a scene object. Its output is a variable binding, so the
//! execution engine may assign to it rather than only read it.

use logic_graph::{NodeCategory, NodeDescriptor, NodeTypeDescriptor, SocketTemplate, SocketType};

/// Object Node
///
/// # Inputs
/// - `Object` - the referenced object
///
/// # Outputs
/// - `Object` - the same object, as a variable binding
pub struct ObjectNode;

impl ObjectNode {
    pub const NODE_TYPE: &'static str = "object";
    pub const PORT_OBJECT: &'static str = "Object";
}

impl NodeDescriptor for ObjectNode {
    fn descriptor() -> NodeTypeDescriptor {
        NodeTypeDescriptor::new(Self::NODE_TYPE, "Object", NodeCategory::Object)
            .with_description("Object node")
            .with_input(SocketTemplate::new(Self::PORT_OBJECT, SocketType::object()))
            .with_output(SocketTemplate::new(Self::PORT_OBJECT, SocketType::object()).variable())
    }
}

inventory::submit!(logic_graph::DescriptorFn(ObjectNode::descriptor));
