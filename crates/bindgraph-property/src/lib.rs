//! Typed property access and graph traversal for generated classes.
//!
//! Schema-bound classes compile to ordinary Rust structs plus, per class,
//! a set of [`PropertyInfo`] statics and a [`Visitable`] impl. The statics
//! give typed, shape-safe read and write access to each declared property;
//! the impl exposes the same properties as erased, read-only views that
//! the [`visit`] engine walks depth-first, optionally gated by a selection
//! tree from `bindgraph-path`.
//!
//! The two layers serve different callers. Code that knows the concrete
//! class matches on [`Accessor`] and gets the field's exact types; code
//! that works across classes, like a reporting or diffing visitor,
//! implements [`PropertyVisitor`] and receives [`Property`] views with
//! [`Scalar`] leaves.

pub mod element;
pub mod info;
pub mod meta;
pub mod scalar;
pub mod visit;

pub use element::TaggedElement;
pub use info::{
    Accessor, BoundProperty, BoundPropertyMut, CollectionAccessor, IndirectCollectionAccessor,
    IndirectScalarCollectionAccessor, PropertyInfo, SingleAccessor,
};
pub use meta::{PropertyMeta, QName};
pub use scalar::Scalar;
pub use visit::{visit, visit_selected, Item, Property, PropertyValue, PropertyVisitor, Visitable};
