//! Runtime support for schema-generated classes.
//!
//! Code generators bind schema types to plain Rust structs and emit, per
//! class, the glue that plugs into this library:
//!
//! * [`PropertyInfo`] statics giving typed, shape-safe access to each
//!   declared property;
//! * a [`Visitable`] impl exposing the properties as erased views for the
//!   depth-first [`visit`] engine;
//! * a selector wrapper over [`SelectorBase`] building [`PathTree`]
//!   selections with compile-checked property names;
//! * [`BoundList`] fields for repeated properties that need observable,
//!   vetoable mutation.
//!
//! The pieces live in three component crates, re-exported here both as
//! modules ([`path`], [`property`], [`list`]) and flat, so generated code
//! imports from one place.

pub use bindgraph_list as list;
pub use bindgraph_path as path;
pub use bindgraph_property as property;

pub use bindgraph_list::{
    BoundList, ChangeListener, CollectionChangeEvent, CollectionChangeKind, ListError, ListId,
    Veto, VetoableListener,
};
pub use bindgraph_path::{
    escape_segment, format_path, parse_path, unescape_segment, NodeBuilder, NodeId, PathParseError,
    PathTree, PathTreeBuilder, PathTreeUse, Selector, SelectorBase, TreeCursor,
};
pub use bindgraph_property::{
    visit, visit_selected, Accessor, BoundProperty, BoundPropertyMut, CollectionAccessor,
    IndirectCollectionAccessor, IndirectScalarCollectionAccessor, Item, Property, PropertyInfo,
    PropertyMeta, PropertyValue, PropertyVisitor, QName, Scalar, SingleAccessor, TaggedElement,
    Visitable,
};
