//! Tagged containers for indirect properties.

use crate::meta::QName;

/// A value carried together with its element name.
///
/// Substitution groups and element unions bind one property to several
/// possible element names, so the name is per-value rather than implied by
/// the property. Indirect properties store and present their items in this
/// wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaggedElement<V> {
    pub name: QName,
    pub value: V,
}

impl<V> TaggedElement<V> {
    pub const fn new(name: QName, value: V) -> Self {
        Self { name, value }
    }

    /// Maps the value, keeping the tag.
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> TaggedElement<U> {
        TaggedElement {
            name: self.name,
            value: f(self.value),
        }
    }

    /// Borrows the value, keeping the tag.
    pub fn as_ref(&self) -> TaggedElement<&V> {
        TaggedElement {
            name: self.name,
            value: &self.value,
        }
    }
}
