//! Object nodes
//!
//! Nodes that reference scene objects or read their properties.

mod get_property;
mod object_node;

pub use get_property::GetPropertyNode;
pub use object_node::ObjectNode;
