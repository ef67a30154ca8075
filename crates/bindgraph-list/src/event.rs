//! Structural-change events.

use std::sync::atomic::{AtomicU64, Ordering};

// ── ListId ────────────────────────────────────────────────────────────────

/// Identifies one observed list for the lifetime of the process.
///
/// Events carry the id of the list that produced them, so a listener
/// shared between several lists can tell the sources apart. Ids are never
/// reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(u64);

impl ListId {
    pub(crate) fn next() -> ListId {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        ListId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

// ── Change kinds ──────────────────────────────────────────────────────────

/// The structural operation an event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionChangeKind {
    /// Append one item at the end.
    Add,
    /// Insert one item at an index.
    AddAt,
    /// Append a batch at the end.
    AddAll,
    /// Insert a batch at an index.
    AddAllAt,
    /// Remove one item by value.
    Remove,
    /// Remove the item at an index.
    RemoveAt,
    /// Remove every item present in a batch.
    RemoveAll,
    /// Keep only the items present in a batch. Clearing reports this kind
    /// with an empty batch.
    RetainAll,
    /// Replace the item at an index.
    SetAt,
}

impl CollectionChangeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CollectionChangeKind::Add => "add",
            CollectionChangeKind::AddAt => "add_at",
            CollectionChangeKind::AddAll => "add_all",
            CollectionChangeKind::AddAllAt => "add_all_at",
            CollectionChangeKind::Remove => "remove",
            CollectionChangeKind::RemoveAt => "remove_at",
            CollectionChangeKind::RemoveAll => "remove_all",
            CollectionChangeKind::RetainAll => "retain_all",
            CollectionChangeKind::SetAt => "set_at",
        }
    }
}

// ── Event ─────────────────────────────────────────────────────────────────

/// Describes one structural change, pending or committed.
///
/// A mutating call builds exactly one event and hands the same event first
/// to the veto phase and then, if the list actually changed, to the commit
/// phase. Listeners therefore see identical data in both phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionChangeEvent<E> {
    /// Id of the list the change applies to.
    pub source: ListId,
    /// Name of the mutating method, such as `"push"` or `"clear"`.
    pub method_name: &'static str,
    /// The operation kind.
    pub kind: CollectionChangeKind,
    /// Snapshot of the list contents immediately before the mutation.
    pub old_items: Vec<E>,
    /// The items the call was given: the added, removed, retained, or
    /// replacement items depending on the kind.
    pub new_items: Vec<E>,
    /// Affected position, `None` for non-positional operations.
    pub index: Option<usize>,
}
