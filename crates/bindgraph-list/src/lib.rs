//! Observable, vetoable lists for schema-generated classes.
//!
//! Generated classes expose their repeated properties through
//! [`BoundList`], a `Vec` decorator that announces every structural change
//! twice: once before it happens, to listeners that may veto it, and once
//! after it has been applied. Both phases see the same
//! [`CollectionChangeEvent`], which carries the operation kind, a snapshot
//! of the previous contents, the items involved, and the affected index.
//!
//! # Example
//!
//! ```
//! use bindgraph_list::{BoundList, CollectionChangeKind, Veto};
//!
//! let mut tags = BoundList::new(vec!["draft".to_string()]);
//! tags.on_veto(|event| {
//!     if event.kind == CollectionChangeKind::RetainAll && event.new_items.is_empty() {
//!         Err(Veto::new("tag list must not be emptied"))
//!     } else {
//!         Ok(())
//!     }
//! });
//!
//! tags.push("reviewed".to_string())?;
//! assert!(tags.clear().is_err());
//! assert_eq!(tags.len(), 2);
//! # Ok::<(), bindgraph_list::ListError>(())
//! ```

pub mod bound;
pub mod event;
pub mod veto;

pub use bound::{BoundList, ListError};
pub use event::{CollectionChangeEvent, CollectionChangeKind, ListId};
pub use veto::{ChangeListener, Veto, VetoableListener};
