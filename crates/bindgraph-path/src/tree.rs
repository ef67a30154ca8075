//! Immutable property-selection trees.
//!
//! A [`PathTree`] names the branches of an object graph that a traversal,
//! copy, or comparison should include or exclude. Interior nodes restrict
//! matching to the children they name; a node without children is a leaf
//! and stands for the entire branch below it.

use std::fmt;

use indexmap::IndexMap;

use crate::builder::PathTreeBuilder;
use crate::parse::{format_path, parse_path, PathParseError};

// ── PathTree ──────────────────────────────────────────────────────────────

/// An immutable, named selection tree.
///
/// Trees are built once, through a [`PathTreeBuilder`], a typed
/// [`Selector`](crate::Selector) wrapper, or [`PathTree::from_paths`], and
/// are read-only from then on. The root of a built tree carries the empty
/// name.
///
/// Children preserve insertion order for iteration and display; equality
/// ignores it, so two trees naming the same branches compare equal no
/// matter the order the branches were added in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTree {
    name: String,
    children: IndexMap<String, PathTree>,
}

impl PathTree {
    /// Creates a node from its name and children.
    pub fn new(name: impl Into<String>, children: IndexMap<String, PathTree>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Creates a childless node.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: IndexMap::new(),
        }
    }

    /// Parses `/`-separated path strings into a tree.
    ///
    /// Every path is grafted onto a shared unnamed root, so overlapping
    /// prefixes merge into one branch.
    ///
    /// # Example
    ///
    /// ```
    /// use bindgraph_path::PathTree;
    ///
    /// let tree = PathTree::from_paths(&["address/city", "address/street", "name"])?;
    /// assert_eq!(tree.get("address").unwrap().get("city").unwrap().name(), "city");
    /// # Ok::<(), bindgraph_path::PathParseError>(())
    /// ```
    pub fn from_paths<S: AsRef<str>>(paths: &[S]) -> Result<PathTree, PathParseError> {
        let mut builder = PathTreeBuilder::new();
        for path in paths {
            let segments = parse_path(path.as_ref())?;
            let mut node = builder.root();
            for segment in &segments {
                node = node.with(segment);
            }
        }
        Ok(builder.build())
    }

    /// Formats the tree back into one path string per leaf, in insertion
    /// order. Inverse of [`PathTree::from_paths`] up to prefix merging.
    pub fn paths(&self) -> Vec<String> {
        fn collect(node: &PathTree, stack: &mut Vec<String>, out: &mut Vec<String>) {
            if node.is_leaf() {
                if !stack.is_empty() {
                    out.push(format_path(stack));
                }
                return;
            }
            for child in node.children.values() {
                stack.push(child.name.clone());
                collect(child, stack, out);
                stack.pop();
            }
        }
        let mut out = Vec::new();
        collect(self, &mut Vec::new(), &mut out);
        out
    }

    /// The property name this node selects. The root of a built tree is
    /// named `""`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up the child selecting `name`.
    ///
    /// A leaf absorbs lookups: `get` on a leaf returns `None` for every
    /// name. Traversals interpret that as "no further restriction", so the
    /// branch below a leaf is included or excluded as a whole depending on
    /// the [`PathTreeUse`] in effect.
    pub fn get(&self, name: &str) -> Option<&PathTree> {
        self.children.get(name)
    }

    /// `true` when the node selects no children of its own.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Direct children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &PathTree> {
        self.children.values()
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl fmt::Display for PathTree {
    /// Renders the tree as an indented outline, one node per line. An
    /// unnamed root prints as `/`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_node(f: &mut fmt::Formatter<'_>, node: &PathTree, depth: usize) -> fmt::Result {
            let name = if node.name.is_empty() { "/" } else { &node.name };
            writeln!(f, "{:indent$}{}", "", name, indent = depth * 2)?;
            for child in node.children.values() {
                write_node(f, child, depth + 1)?;
            }
            Ok(())
        }
        write_node(f, self, 0)
    }
}

// ── PathTreeUse ───────────────────────────────────────────────────────────

/// How a traversal interprets branches the selection tree does not name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathTreeUse {
    /// Only named branches are taken; everything else is pruned. Below a
    /// leaf the whole branch is taken.
    Include,
    /// Named leaves are pruned; everything else is taken. An interior node
    /// keeps the branch open so that deeper exclusions can apply.
    Exclude,
}

impl PathTreeUse {
    pub fn as_str(self) -> &'static str {
        match self {
            PathTreeUse::Include => "include",
            PathTreeUse::Exclude => "exclude",
        }
    }
}

// ── TreeCursor ────────────────────────────────────────────────────────────

/// A position inside a selection tree during a traversal.
///
/// The cursor pairs the current tree node (or `None`, once the walk has
/// passed a leaf and the selection no longer names anything) with the
/// [`PathTreeUse`] in effect. Walks and generated copy routines descend one
/// property at a time and ask the cursor whether the branch stays open.
#[derive(Debug, Clone, Copy)]
pub struct TreeCursor<'t> {
    node: Option<&'t PathTree>,
    mode: PathTreeUse,
}

impl<'t> TreeCursor<'t> {
    /// Cursor at the root of `tree`. Pass `None` for an unrestricted
    /// traversal, which includes every branch regardless of mode.
    pub fn new(tree: Option<&'t PathTree>, mode: PathTreeUse) -> Self {
        Self { node: tree, mode }
    }

    pub fn mode(self) -> PathTreeUse {
        self.mode
    }

    /// The tree node the cursor currently sits on, when the selection still
    /// names one.
    pub fn node(self) -> Option<&'t PathTree> {
        self.node
    }

    /// Cursor for the named child branch, or `None` when the branch is
    /// pruned.
    ///
    /// The decision table, per mode:
    ///
    /// * unrestricted (no node): open, still unrestricted.
    /// * below a leaf: include keeps the branch open unrestricted, exclude
    ///   prunes it.
    /// * named interior child: open, restricted to that child.
    /// * named leaf child: include opens it (the leaf then absorbs
    ///   everything below), exclude prunes it.
    /// * unnamed child: include prunes it, exclude keeps it open
    ///   unrestricted.
    pub fn descend(self, name: &str) -> Option<TreeCursor<'t>> {
        let Some(node) = self.node else {
            return Some(self);
        };
        if node.is_leaf() {
            return match self.mode {
                PathTreeUse::Include => Some(TreeCursor {
                    node: None,
                    mode: self.mode,
                }),
                PathTreeUse::Exclude => None,
            };
        }
        match (node.get(name), self.mode) {
            (Some(child), PathTreeUse::Include) => Some(TreeCursor {
                node: Some(child),
                mode: self.mode,
            }),
            (Some(child), PathTreeUse::Exclude) => {
                if child.is_leaf() {
                    None
                } else {
                    Some(TreeCursor {
                        node: Some(child),
                        mode: self.mode,
                    })
                }
            }
            (None, PathTreeUse::Include) => None,
            (None, PathTreeUse::Exclude) => Some(TreeCursor {
                node: None,
                mode: self.mode,
            }),
        }
    }

    /// `true` when the named branch survives the selection. Shorthand for
    /// `descend(name).is_some()`.
    pub fn includes(self, name: &str) -> bool {
        self.descend(name).is_some()
    }
}
