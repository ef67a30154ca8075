//! Observable list decorator.
//!
//! [`BoundList`] wraps a `Vec` and runs every structural mutation through
//! a two-phase notification protocol: vetoable listeners see the pending
//! change first and may reject it, then the change is applied, then change
//! listeners see the same event. Read access is plain pass-through.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use thiserror::Error;

use crate::event::{CollectionChangeEvent, CollectionChangeKind, ListId};
use crate::veto::{ChangeListener, Veto, VetoableListener};

// ── Error ─────────────────────────────────────────────────────────────────

/// Error returned by mutating list operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    /// A vetoable listener rejected the change during the check phase.
    /// The list is unchanged and no change listener ran.
    #[error("{method} vetoed: {reason}")]
    Vetoed {
        method: &'static str,
        reason: String,
    },
    /// A positional argument was out of range. Raised before any listener
    /// runs.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },
}

// ── BoundList ─────────────────────────────────────────────────────────────

/// A `Vec` decorator whose structural mutations are observable and
/// vetoable.
///
/// Every mutating method builds one [`CollectionChangeEvent`] describing
/// the pending change, including a snapshot of the contents before it.
/// The event goes to the vetoable listeners in registration order; the
/// first rejection aborts the call with [`ListError::Vetoed`] and the list
/// untouched. Otherwise the mutation is applied and, when it actually
/// changed the list, the same event goes to the change listeners.
///
/// Listeners are plain boxed closures owned by the list; the list is a
/// single-threaded structure like the generated classes that embed it.
pub struct BoundList<E> {
    id: ListId,
    items: Vec<E>,
    next_change_id: u64,
    change_listeners: BTreeMap<u64, ChangeListener<E>>,
    next_veto_id: u64,
    veto_listeners: BTreeMap<u64, VetoableListener<E>>,
}

impl<E> BoundList<E> {
    /// Decorates an existing vector.
    pub fn new(items: Vec<E>) -> Self {
        Self {
            id: ListId::next(),
            items,
            next_change_id: 1,
            change_listeners: BTreeMap::new(),
            next_veto_id: 1,
            veto_listeners: BTreeMap::new(),
        }
    }

    /// The process-unique id events from this list carry as their source.
    pub fn id(&self) -> ListId {
        self.id
    }

    /// Unwraps the decorator, dropping all listeners.
    pub fn into_inner(self) -> Vec<E> {
        self.items
    }

    // ── Read access ──────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    pub fn contains(&self, item: &E) -> bool
    where
        E: PartialEq,
    {
        self.items.contains(item)
    }

    // ── Listener registry ────────────────────────────────────────────────

    /// Registers a post-commit listener; the returned id unsubscribes it.
    pub fn on_change(
        &mut self,
        listener: impl FnMut(&CollectionChangeEvent<E>) + 'static,
    ) -> u64 {
        let id = self.next_change_id;
        self.next_change_id = self.next_change_id.saturating_add(1);
        self.change_listeners.insert(id, Box::new(listener));
        id
    }

    /// Removes a post-commit listener. Returns `false` for unknown ids.
    pub fn off_change(&mut self, listener_id: u64) -> bool {
        self.change_listeners.remove(&listener_id).is_some()
    }

    /// Registers a pre-commit listener; the returned id unsubscribes it.
    pub fn on_veto(
        &mut self,
        listener: impl FnMut(&CollectionChangeEvent<E>) -> Result<(), Veto> + 'static,
    ) -> u64 {
        let id = self.next_veto_id;
        self.next_veto_id = self.next_veto_id.saturating_add(1);
        self.veto_listeners.insert(id, Box::new(listener));
        id
    }

    /// Removes a pre-commit listener. Returns `false` for unknown ids.
    pub fn off_veto(&mut self, listener_id: u64) -> bool {
        self.veto_listeners.remove(&listener_id).is_some()
    }

    // ── Protocol plumbing ────────────────────────────────────────────────

    fn check(&mut self, event: &CollectionChangeEvent<E>) -> Result<(), ListError> {
        for listener in self.veto_listeners.values_mut() {
            if let Err(veto) = listener(event) {
                return Err(ListError::Vetoed {
                    method: event.method_name,
                    reason: veto.reason().to_string(),
                });
            }
        }
        Ok(())
    }

    fn commit(&mut self, event: &CollectionChangeEvent<E>) {
        for listener in self.change_listeners.values_mut() {
            listener(event);
        }
    }

    fn guard_insert(&self, index: usize) -> Result<(), ListError> {
        if index > self.items.len() {
            return Err(ListError::OutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }

    fn guard_element(&self, index: usize) -> Result<(), ListError> {
        if index >= self.items.len() {
            return Err(ListError::OutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }
}

impl<E: Clone> BoundList<E> {
    fn event(
        &self,
        method_name: &'static str,
        kind: CollectionChangeKind,
        new_items: Vec<E>,
        index: Option<usize>,
    ) -> CollectionChangeEvent<E> {
        CollectionChangeEvent {
            source: self.id,
            method_name,
            kind,
            old_items: self.items.clone(),
            new_items,
            index,
        }
    }

    // ── Additions ────────────────────────────────────────────────────────

    /// Appends one item. The event carries the would-be index of the new
    /// item.
    pub fn push(&mut self, item: E) -> Result<(), ListError> {
        let event = self.event(
            "push",
            CollectionChangeKind::Add,
            vec![item.clone()],
            Some(self.items.len()),
        );
        self.check(&event)?;
        self.items.push(item);
        self.commit(&event);
        Ok(())
    }

    /// Inserts one item at `index`, shifting the rest right.
    pub fn insert(&mut self, index: usize, item: E) -> Result<(), ListError> {
        self.guard_insert(index)?;
        let event = self.event(
            "insert",
            CollectionChangeKind::AddAt,
            vec![item.clone()],
            Some(index),
        );
        self.check(&event)?;
        self.items.insert(index, item);
        self.commit(&event);
        Ok(())
    }

    /// Appends a batch. Returns whether the list changed; an empty batch
    /// changes nothing and notifies no change listener.
    pub fn push_all(&mut self, items: Vec<E>) -> Result<bool, ListError> {
        let event = self.event("push_all", CollectionChangeKind::AddAll, items.clone(), None);
        self.check(&event)?;
        let changed = !items.is_empty();
        self.items.extend(items);
        if changed {
            self.commit(&event);
        }
        Ok(changed)
    }

    /// Inserts a batch at `index`, preserving its order.
    pub fn insert_all(&mut self, index: usize, items: Vec<E>) -> Result<bool, ListError> {
        self.guard_insert(index)?;
        let event = self.event(
            "insert_all",
            CollectionChangeKind::AddAllAt,
            items.clone(),
            Some(index),
        );
        self.check(&event)?;
        let changed = !items.is_empty();
        self.items.splice(index..index, items);
        if changed {
            self.commit(&event);
        }
        Ok(changed)
    }

    // ── Replacement ──────────────────────────────────────────────────────

    /// Replaces the item at `index` and returns the previous one.
    pub fn set(&mut self, index: usize, item: E) -> Result<E, ListError> {
        self.guard_element(index)?;
        let event = self.event(
            "set",
            CollectionChangeKind::SetAt,
            vec![item.clone()],
            Some(index),
        );
        self.check(&event)?;
        let previous = std::mem::replace(&mut self.items[index], item);
        self.commit(&event);
        Ok(previous)
    }

    // ── Removals ─────────────────────────────────────────────────────────

    /// Removes the item at `index` and returns it.
    pub fn remove_at(&mut self, index: usize) -> Result<E, ListError> {
        self.guard_element(index)?;
        let event = self.event(
            "remove_at",
            CollectionChangeKind::RemoveAt,
            vec![self.items[index].clone()],
            Some(index),
        );
        self.check(&event)?;
        let removed = self.items.remove(index);
        self.commit(&event);
        Ok(removed)
    }
}

impl<E: Clone + PartialEq> BoundList<E> {
    /// Removes the first occurrence of `item`. Returns whether anything
    /// was removed; a miss notifies no change listener.
    pub fn remove(&mut self, item: &E) -> Result<bool, ListError> {
        let event = self.event(
            "remove",
            CollectionChangeKind::Remove,
            vec![item.clone()],
            None,
        );
        self.check(&event)?;
        let removed = match self.items.iter().position(|x| x == item) {
            Some(position) => {
                self.items.remove(position);
                true
            }
            None => false,
        };
        if removed {
            self.commit(&event);
        }
        Ok(removed)
    }

    /// Removes every item that occurs in `items`.
    pub fn remove_all(&mut self, items: &[E]) -> Result<bool, ListError> {
        let event = self.event(
            "remove_all",
            CollectionChangeKind::RemoveAll,
            items.to_vec(),
            None,
        );
        self.check(&event)?;
        let before = self.items.len();
        self.items.retain(|x| !items.contains(x));
        let changed = self.items.len() != before;
        if changed {
            self.commit(&event);
        }
        Ok(changed)
    }

    /// Keeps only the items that occur in `items`.
    pub fn retain_all(&mut self, items: &[E]) -> Result<bool, ListError> {
        let event = self.event(
            "retain_all",
            CollectionChangeKind::RetainAll,
            items.to_vec(),
            None,
        );
        self.check(&event)?;
        let before = self.items.len();
        self.items.retain(|x| items.contains(x));
        let changed = self.items.len() != before;
        if changed {
            self.commit(&event);
        }
        Ok(changed)
    }

    /// Empties the list. Reports [`CollectionChangeKind::RetainAll`] with
    /// an empty retained set, the event shape long-standing consumers
    /// expect from clear.
    pub fn clear(&mut self) -> Result<(), ListError> {
        let event = self.event("clear", CollectionChangeKind::RetainAll, Vec::new(), None);
        self.check(&event)?;
        let changed = !self.items.is_empty();
        self.items.clear();
        if changed {
            self.commit(&event);
        }
        Ok(())
    }
}

// ── Std trait plumbing ────────────────────────────────────────────────────

impl<E> Default for BoundList<E> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<E> From<Vec<E>> for BoundList<E> {
    fn from(items: Vec<E>) -> Self {
        Self::new(items)
    }
}

impl<E> Index<usize> for BoundList<E> {
    type Output = E;

    fn index(&self, index: usize) -> &E {
        &self.items[index]
    }
}

impl<'a, E> IntoIterator for &'a BoundList<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<E: fmt::Debug> fmt::Debug for BoundList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundList")
            .field("id", &self.id)
            .field("items", &self.items)
            .field("change_listeners", &self.change_listeners.len())
            .field("veto_listeners", &self.veto_listeners.len())
            .finish()
    }
}
