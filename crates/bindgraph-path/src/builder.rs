//! Arena-backed construction of [`PathTree`]s.
//!
//! The builder keeps every node in one flat `Vec` and hands out light
//! cursor handles into it. Adding a name twice under the same parent
//! returns the node created the first time, so independent selection
//! chains over one builder merge instead of duplicating branches.

use indexmap::IndexMap;

use crate::tree::PathTree;

// ── Arena ─────────────────────────────────────────────────────────────────

/// Index of a node inside its [`PathTreeBuilder`] arena.
///
/// Ids are stable for the lifetime of the builder and only meaningful for
/// the builder that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    const ROOT: NodeId = NodeId(0);
}

#[derive(Debug)]
struct BuilderNode {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Mutable arena a selection tree grows in.
///
/// The arena starts with a single unnamed root. Nodes are added through
/// [`NodeBuilder`] cursors obtained from [`PathTreeBuilder::root`] and are
/// never removed; [`PathTreeBuilder::build`] materializes the current state
/// into an immutable [`PathTree`] without consuming the builder.
#[derive(Debug)]
pub struct PathTreeBuilder {
    nodes: Vec<BuilderNode>,
}

impl PathTreeBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![BuilderNode {
                name: String::new(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Cursor on the unnamed root node.
    pub fn root(&mut self) -> NodeBuilder<'_> {
        NodeBuilder {
            arena: self,
            node: NodeId::ROOT,
        }
    }

    /// Re-enters the arena at a previously saved id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different builder and is out of
    /// bounds for this one.
    pub fn at(&mut self, id: NodeId) -> NodeBuilder<'_> {
        assert!(id.0 < self.nodes.len(), "node id out of bounds");
        NodeBuilder { arena: self, node: id }
    }

    /// Materializes the whole tree from the root, regardless of which
    /// cursors are live.
    pub fn build(&self) -> PathTree {
        self.subtree(NodeId::ROOT)
    }

    fn subtree(&self, id: NodeId) -> PathTree {
        let node = &self.nodes[id.0];
        PathTree::new(node.name.clone(), self.child_trees(id))
    }

    pub(crate) fn child_trees(&self, id: NodeId) -> IndexMap<String, PathTree> {
        let node = &self.nodes[id.0];
        let mut children = IndexMap::with_capacity(node.children.len());
        for &child in &node.children {
            children.insert(self.nodes[child.0].name.clone(), self.subtree(child));
        }
        children
    }

    pub(crate) fn name_of(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    pub(crate) fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    fn child_named(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|child| self.nodes[child.0].name == name)
    }

    pub(crate) fn with_child(&mut self, parent: NodeId, name: &str) -> NodeId {
        if let Some(existing) = self.child_named(parent, name) {
            return existing;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(BuilderNode {
            name: name.to_string(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }
}

impl Default for PathTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── NodeBuilder ───────────────────────────────────────────────────────────

/// Cursor over one arena node.
///
/// Navigation methods consume the cursor and return a new one borrowing
/// the same arena, so chains read top-down:
///
/// ```
/// use bindgraph_path::PathTreeBuilder;
///
/// let mut builder = PathTreeBuilder::new();
/// builder.root().with("contact").with("address").with("city");
/// builder.root().with("name");
/// let tree = builder.build();
/// assert_eq!(tree.paths(), ["contact/address/city", "name"]);
/// ```
#[derive(Debug)]
pub struct NodeBuilder<'a> {
    arena: &'a mut PathTreeBuilder,
    node: NodeId,
}

impl<'a> NodeBuilder<'a> {
    /// Moves to the child named `name`, creating it on first use.
    ///
    /// Calling `with` twice with the same name from the same parent lands
    /// on the same node; [`NodeBuilder::id`] makes that observable.
    pub fn with(self, name: &str) -> NodeBuilder<'a> {
        let child = self.arena.with_child(self.node, name);
        NodeBuilder {
            arena: self.arena,
            node: child,
        }
    }

    /// Moves to the parent node, or `None` at the root.
    pub fn parent(self) -> Option<NodeBuilder<'a>> {
        let parent = self.arena.parent_of(self.node)?;
        Some(NodeBuilder {
            arena: self.arena,
            node: parent,
        })
    }

    /// Moves back to the root node.
    pub fn root(self) -> NodeBuilder<'a> {
        NodeBuilder {
            arena: self.arena,
            node: NodeId::ROOT,
        }
    }

    /// Materializes the whole tree from the root, not from this node.
    pub fn build(&self) -> PathTree {
        self.arena.build()
    }

    /// This node's name. The root is named `""`.
    pub fn name(&self) -> &str {
        self.arena.name_of(self.node)
    }

    /// Arena id of this node, usable with [`PathTreeBuilder::at`].
    pub fn id(&self) -> NodeId {
        self.node
    }

    pub(crate) fn child_trees(&self) -> IndexMap<String, PathTree> {
        self.arena.child_trees(self.node)
    }

    pub fn is_root(&self) -> bool {
        self.node == NodeId::ROOT
    }
}
