//! Logic Nodes
//!
//! Built-in node types for the logic-graph kernel. Each node type
//! describes itself and is collected at link time, so
//! `NodeTypeRegistry::with_builtins()` sees every type in this crate.
//!
//! # Categories
//!
//! - **Miscellaneous**: Group plumbing (group input)
//! - **Object**: Scene object access (object reference, property lookup)

pub mod miscellaneous;
pub mod object;

// Re-export all nodes for convenience
pub use miscellaneous::*;
pub use object::*;

#[cfg(test)]
mod tests {
    use logic_graph::{NodeCategory, NodeTypeRegistry};

    #[test]
    fn test_inventory_collects_all_builtins() {
        let registry = NodeTypeRegistry::with_builtins().unwrap();

        assert_eq!(registry.len(), 3, "Expected 3 built-in nodes");
        assert!(registry.has_node_type("group-input"));
        assert!(registry.has_node_type("get-property"));
        assert!(registry.has_node_type("object"));

        let grouped = registry.descriptors_by_category();
        assert_eq!(grouped[&NodeCategory::Object].len(), 2);
        assert_eq!(grouped[&NodeCategory::Miscellaneous].len(), 1);
    }
}
