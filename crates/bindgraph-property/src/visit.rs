//! Object-graph traversal.
//!
//! Generated classes implement [`Visitable`] to expose their state as
//! read-only, shape-tagged property views. The walk engine drives a
//! depth-first pass over a graph of visitables, invoking one
//! [`PropertyVisitor`] callback per object and one per property, and
//! recursing into child objects. A selection tree, applied through a
//! [`TreeCursor`], gates the recursion only: a pruned property is still
//! presented to the visitor, its children are just not entered.

use std::fmt;

use bindgraph_path::{PathTree, PathTreeUse, TreeCursor};

use crate::element::TaggedElement;
use crate::meta::PropertyMeta;
use crate::scalar::Scalar;

// ── Visitable ─────────────────────────────────────────────────────────────

/// Implemented by every class that takes part in graph traversal.
///
/// Generated code emits one impl per schema-bound class. `properties`
/// builds transient views over the current field values; the walk engine
/// discards them after each node.
pub trait Visitable {
    /// Class name, for diagnostics and visitor output.
    fn type_name(&self) -> &'static str;

    /// Shape-tagged views of the declared properties, in declaration
    /// order.
    fn properties(&self) -> Vec<Property<'_>>;
}

// ── Item ──────────────────────────────────────────────────────────────────

/// One value position inside a property view.
pub enum Item<'a> {
    /// A schema-primitive leaf, copied out of the field.
    Scalar(Scalar),
    /// A child object with properties of its own.
    Node(&'a dyn Visitable),
}

impl<'a> Item<'a> {
    pub fn scalar(value: impl Into<Scalar>) -> Item<'a> {
        Item::Scalar(value.into())
    }

    pub fn node(node: &'a dyn Visitable) -> Item<'a> {
        Item::Node(node)
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Item::Scalar(value) => Some(value),
            Item::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&'a dyn Visitable> {
        match self {
            Item::Node(node) => Some(*node),
            Item::Scalar(_) => None,
        }
    }
}

impl fmt::Debug for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Scalar(value) => write!(f, "Scalar({value:?})"),
            Item::Node(node) => write!(f, "Node({})", node.type_name()),
        }
    }
}

// ── Property views ────────────────────────────────────────────────────────

/// The four property shapes, as the walk engine and visitors see them.
#[derive(Debug)]
pub enum PropertyValue<'a> {
    /// Single-valued; `None` when an optional field is absent.
    Single(Option<Item<'a>>),
    /// Repeated.
    Collection(Vec<Item<'a>>),
    /// Repeated, every item carrying its element name.
    IndirectCollection(Vec<TaggedElement<Item<'a>>>),
    /// Repeated tagged primitives; never descended into.
    IndirectScalarCollection(Vec<TaggedElement<Scalar>>),
}

/// One property of one instance, read-only, built for a single traversal
/// step.
#[derive(Debug)]
pub struct Property<'a> {
    pub meta: &'static PropertyMeta,
    pub value: PropertyValue<'a>,
}

impl<'a> Property<'a> {
    pub fn single(meta: &'static PropertyMeta, item: Option<Item<'a>>) -> Self {
        Self {
            meta,
            value: PropertyValue::Single(item),
        }
    }

    pub fn collection(meta: &'static PropertyMeta, items: Vec<Item<'a>>) -> Self {
        Self {
            meta,
            value: PropertyValue::Collection(items),
        }
    }

    pub fn indirect_collection(
        meta: &'static PropertyMeta,
        elements: Vec<TaggedElement<Item<'a>>>,
    ) -> Self {
        Self {
            meta,
            value: PropertyValue::IndirectCollection(elements),
        }
    }

    pub fn indirect_scalar_collection(
        meta: &'static PropertyMeta,
        elements: Vec<TaggedElement<Scalar>>,
    ) -> Self {
        Self {
            meta,
            value: PropertyValue::IndirectScalarCollection(elements),
        }
    }

    pub fn name(&self) -> &'static str {
        self.meta.property_name
    }

    /// Child objects reachable through this property, in order. Scalars
    /// and absent values contribute nothing.
    pub fn child_nodes(&self) -> Vec<&'a dyn Visitable> {
        match &self.value {
            PropertyValue::Single(item) => item.iter().filter_map(|i| i.as_node()).collect(),
            PropertyValue::Collection(items) => {
                items.iter().filter_map(|i| i.as_node()).collect()
            }
            PropertyValue::IndirectCollection(elements) => elements
                .iter()
                .filter_map(|element| element.value.as_node())
                .collect(),
            PropertyValue::IndirectScalarCollection(_) => Vec::new(),
        }
    }
}

// ── PropertyVisitor ───────────────────────────────────────────────────────

/// Receives traversal callbacks.
///
/// Each callback returns a continue signal: `false` stops the pass over
/// the current object, skipping its remaining properties and their
/// descendants. The walk resumes with the object's siblings; a stop never
/// unwinds past the object it was raised on.
///
/// Every method defaults to "continue", so a visitor implements only the
/// shapes it cares about.
pub trait PropertyVisitor {
    /// Called once per object, before its properties.  Returning `false`
    /// skips the object's whole property pass.
    fn visit_node(&mut self, _node: &dyn Visitable) -> bool {
        true
    }

    /// Called for every single-valued property.
    fn visit_single(&mut self, _property: &Property<'_>) -> bool {
        true
    }

    /// Called for every repeated property.
    fn visit_collection(&mut self, _property: &Property<'_>) -> bool {
        true
    }

    /// Called for every tagged-object property.
    fn visit_indirect_collection(&mut self, _property: &Property<'_>) -> bool {
        true
    }

    /// Called for every tagged-primitive property.
    fn visit_indirect_scalar_collection(&mut self, _property: &Property<'_>) -> bool {
        true
    }
}

// ── Walk ──────────────────────────────────────────────────────────────────

/// Walks `node` depth-first with no selection tree; every branch is
/// entered.
///
/// Returns `false` when a property callback stopped the pass over `node`
/// itself; stops raised deeper in the graph do not propagate up.
pub fn visit(node: &dyn Visitable, visitor: &mut dyn PropertyVisitor) -> bool {
    walk(node, visitor, TreeCursor::new(None, PathTreeUse::Include))
}

/// Walks `node` depth-first, gating descent with a selection tree.
///
/// Every property of a visited object is presented to the visitor
/// regardless of the tree; the tree only decides which child objects are
/// entered. See [`TreeCursor::descend`] for the gating rules.
pub fn visit_selected(
    node: &dyn Visitable,
    visitor: &mut dyn PropertyVisitor,
    tree: &PathTree,
    mode: PathTreeUse,
) -> bool {
    walk(node, visitor, TreeCursor::new(Some(tree), mode))
}

fn walk(node: &dyn Visitable, visitor: &mut dyn PropertyVisitor, cursor: TreeCursor<'_>) -> bool {
    if !visitor.visit_node(node) {
        return true;
    }
    for property in node.properties() {
        let proceed = match &property.value {
            PropertyValue::Single(_) => visitor.visit_single(&property),
            PropertyValue::Collection(_) => visitor.visit_collection(&property),
            PropertyValue::IndirectCollection(_) => visitor.visit_indirect_collection(&property),
            PropertyValue::IndirectScalarCollection(_) => {
                visitor.visit_indirect_scalar_collection(&property)
            }
        };
        if !proceed {
            return false;
        }
        if let Some(child_cursor) = cursor.descend(property.name()) {
            for child in property.child_nodes() {
                walk(child, visitor, child_cursor);
            }
        }
    }
    true
}
