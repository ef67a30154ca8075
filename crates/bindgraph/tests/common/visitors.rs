#![allow(dead_code)]

//! Small reusable visitors for workflow tests.

use bindgraph::{Property, PropertyVisitor, Visitable};

/// Records every callback as a token: `node:<type>` for objects,
/// `<shape>:<declaring>.<name>` for properties.
#[derive(Default)]
pub struct TraceVisitor {
    pub calls: Vec<String>,
}

impl TraceVisitor {
    fn property(&mut self, shape: &str, property: &Property<'_>) -> bool {
        self.calls.push(format!(
            "{shape}:{}.{}",
            property.meta.declaring_type, property.meta.property_name
        ));
        true
    }

    /// The recorded tokens that start with `node:`.
    pub fn nodes(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter(|call| call.starts_with("node:"))
            .map(String::as_str)
            .collect()
    }
}

impl PropertyVisitor for TraceVisitor {
    fn visit_node(&mut self, node: &dyn Visitable) -> bool {
        self.calls.push(format!("node:{}", node.type_name()));
        true
    }

    fn visit_single(&mut self, property: &Property<'_>) -> bool {
        self.property("single", property)
    }

    fn visit_collection(&mut self, property: &Property<'_>) -> bool {
        self.property("collection", property)
    }

    fn visit_indirect_collection(&mut self, property: &Property<'_>) -> bool {
        self.property("indirect", property)
    }

    fn visit_indirect_scalar_collection(&mut self, property: &Property<'_>) -> bool {
        self.property("indirect_scalar", property)
    }
}
