//! Get Property Node
//!
//! Reads a named property from a scene object.

use logic_graph::{NodeCategory, NodeDescriptor, NodeTypeDescriptor, SocketTemplate, SocketType};

/// Get Property Node
///
/// # Inputs
/// - `Object` - the object to read from
/// - `Property` - property name
///
/// # Outputs
/// - `Value` - the property value
/// - `Property` - the property name, passed through
pub struct GetPropertyNode;

impl GetPropertyNode {
    pub const NODE_TYPE: &'static str = "get-property";
    pub const PORT_OBJECT: &'static str = "Object";
    pub const PORT_PROPERTY: &'static str = "Property";
    pub const PORT_VALUE: &'static str = "Value";
}

impl NodeDescriptor for GetPropertyNode {
    fn descriptor() -> NodeTypeDescriptor {
        NodeTypeDescriptor::new(Self::NODE_TYPE, "Get Property", NodeCategory::Object)
            .with_description("Get property node")
            .with_section("props")
            .with_input(SocketTemplate::new(Self::PORT_OBJECT, SocketType::object()))
            .with_input(SocketTemplate::new(Self::PORT_PROPERTY, SocketType::string()))
            .with_output(SocketTemplate::new(Self::PORT_VALUE, SocketType::shader()))
            .with_output(SocketTemplate::new(Self::PORT_PROPERTY, SocketType::string()))
    }
}

inventory::submit!(logic_graph::DescriptorFn(GetPropertyNode::descriptor));
