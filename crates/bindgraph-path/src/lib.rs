//! Property-selection trees for selective object-graph work.
//!
//! A selection tree names the branches of an object graph an operation
//! should touch. This crate provides the immutable [`PathTree`], the
//! arena-backed [`PathTreeBuilder`] it grows in, `/`-separated path-string
//! parsing, the [`TreeCursor`] traversals use to decide descent, and the
//! [`Selector`] layer generated per-class selector APIs are built on.
//!
//! # Example
//!
//! ```
//! use bindgraph_path::{PathTree, PathTreeUse, TreeCursor};
//!
//! let tree = PathTree::from_paths(&["contact/address", "name"])?;
//! let cursor = TreeCursor::new(Some(&tree), PathTreeUse::Include);
//! assert!(cursor.includes("name"));
//! assert!(!cursor.includes("age"));
//! let contact = cursor.descend("contact").unwrap();
//! assert!(contact.includes("address"));
//! assert!(!contact.includes("phone"));
//! # Ok::<(), bindgraph_path::PathParseError>(())
//! ```

pub mod builder;
pub mod parse;
pub mod selector;
pub mod tree;

pub use builder::{NodeBuilder, NodeId, PathTreeBuilder};
pub use parse::{escape_segment, format_path, parse_path, unescape_segment, PathParseError};
pub use selector::{Selector, SelectorBase};
pub use tree::{PathTree, PathTreeUse, TreeCursor};
