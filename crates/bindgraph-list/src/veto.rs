//! Listener contracts for the two notification phases.

use std::fmt;

use crate::event::CollectionChangeEvent;

/// A rejection raised by a vetoable listener during the check phase.
///
/// Returning a veto aborts the pending mutation before the list is
/// touched; the caller receives it as
/// [`ListError::Vetoed`](crate::ListError::Vetoed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Veto {
    reason: String,
}

impl Veto {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for Veto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

/// Post-commit observer. Runs after a mutation has been applied.
pub type ChangeListener<E> = Box<dyn FnMut(&CollectionChangeEvent<E>)>;

/// Pre-commit observer. Returning `Err` vetoes the mutation.
pub type VetoableListener<E> = Box<dyn FnMut(&CollectionChangeEvent<E>) -> Result<(), Veto>>;
