//! Typed construction of selection trees.
//!
//! Generated code derives one selector wrapper per schema class, with one
//! method per property. The wrappers delegate to [`Selector`], which walks
//! a shared [`PathTreeBuilder`] arena; because the arena merges repeated
//! names, any number of fluent chains over one root produce a single tree.
//!
//! A hand-written equivalent of a generated wrapper:
//!
//! ```
//! use bindgraph_path::{PathTreeUse, Selector, SelectorBase};
//!
//! struct PersonSelect {
//!     base: SelectorBase,
//! }
//!
//! impl PersonSelect {
//!     fn new(mode: PathTreeUse) -> Self {
//!         Self { base: SelectorBase::new(mode) }
//!     }
//!     fn name(&mut self) -> Selector<'_> {
//!         self.base.root_selector().child("name")
//!     }
//!     fn address(&mut self) -> Selector<'_> {
//!         self.base.root_selector().child("address")
//!     }
//! }
//!
//! let mut select = PersonSelect::new(PathTreeUse::Include);
//! select.name();
//! select.address().child("city");
//! let tree = select.base.build();
//! assert_eq!(tree.paths(), ["name", "address/city"]);
//! ```

use indexmap::IndexMap;

use crate::builder::{NodeBuilder, PathTreeBuilder};
use crate::tree::{PathTree, PathTreeUse};

// ── SelectorBase ──────────────────────────────────────────────────────────

/// Arena and mode shared by one family of selector chains.
///
/// Generated root wrappers embed a `SelectorBase`; child wrappers borrow
/// from it through [`Selector`] cursors.
#[derive(Debug)]
pub struct SelectorBase {
    builder: PathTreeBuilder,
    mode: PathTreeUse,
}

impl SelectorBase {
    pub fn new(mode: PathTreeUse) -> Self {
        Self {
            builder: PathTreeBuilder::new(),
            mode,
        }
    }

    /// The [`PathTreeUse`] every selector of this family carries.
    pub fn mode(&self) -> PathTreeUse {
        self.mode
    }

    /// A selector cursor on the unnamed root.
    pub fn root_selector(&mut self) -> Selector<'_> {
        Selector {
            node: self.builder.root(),
            mode: self.mode,
        }
    }

    /// Materializes the tree accumulated so far.
    pub fn build(&self) -> PathTree {
        self.builder.build()
    }
}

// ── Selector ──────────────────────────────────────────────────────────────

/// A typed cursor into a growing selection tree.
///
/// Thin wrapper over [`NodeBuilder`] that additionally carries the
/// selection mode. Navigation consumes the cursor, like the builder it
/// wraps; merely reaching a node through [`Selector::child`] records it in
/// the tree, so a leaf selection is complete as soon as the chain ends.
#[derive(Debug)]
pub struct Selector<'a> {
    node: NodeBuilder<'a>,
    mode: PathTreeUse,
}

impl<'a> Selector<'a> {
    /// Wraps a builder cursor. Generated wrappers normally go through
    /// [`SelectorBase::root_selector`] instead.
    pub fn new(node: NodeBuilder<'a>, mode: PathTreeUse) -> Self {
        Self { node, mode }
    }

    /// Descends into the property named `name`, recording it.
    pub fn child(self, name: &str) -> Selector<'a> {
        Selector {
            node: self.node.with(name),
            mode: self.mode,
        }
    }

    /// Moves to the parent selector, or `None` at the root.
    pub fn parent(self) -> Option<Selector<'a>> {
        let mode = self.mode;
        Some(Selector {
            node: self.node.parent()?,
            mode,
        })
    }

    /// Moves back to the root selector.
    pub fn root(self) -> Selector<'a> {
        Selector {
            node: self.node.root(),
            mode: self.mode,
        }
    }

    /// The property name this selector sits on. The root is named `""`.
    pub fn property_name(&self) -> &str {
        self.node.name()
    }

    pub fn mode(&self) -> PathTreeUse {
        self.mode
    }

    pub fn is_root(&self) -> bool {
        self.node.is_root()
    }

    /// The subtrees selected below this node, keyed by property name.
    ///
    /// Empty unless descendants were recorded through this or any other
    /// chain over the same arena.
    pub fn build_children(&self) -> IndexMap<String, PathTree> {
        self.node.child_trees()
    }

    /// Materializes the subtree rooted at this selector's node.
    pub fn init(&self) -> PathTree {
        PathTree::new(self.property_name(), self.build_children())
    }

    /// Materializes the whole tree from the root, equivalent to
    /// `self.root().init()` with the root's empty name.
    pub fn build(&self) -> PathTree {
        self.node.build()
    }
}
