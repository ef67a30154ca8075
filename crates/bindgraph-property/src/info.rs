//! Typed property access for generated classes.
//!
//! Each declared property compiles to one static [`PropertyInfo`] holding
//! its metadata and an [`Accessor`]. The accessor is a closed sum over the
//! four property shapes, each variant carrying plain function pointers
//! with the exact types of that shape. Code that wants to read or write a
//! property matches on the variant, so using a collection accessor on a
//! single-valued property is not expressible, there is nothing to check at
//! run time.

use std::fmt;

use crate::element::TaggedElement;
use crate::meta::PropertyMeta;

// ── Shape accessors ───────────────────────────────────────────────────────

/// Accessor pair for a single-valued property.
///
/// Optional fields use `V = Option<T>`; the accessor itself is shape-typed,
/// not presence-typed.
pub struct SingleAccessor<O, V> {
    read: fn(&O) -> &V,
    write: fn(&mut O, V),
    default: Option<fn() -> V>,
}

impl<O, V> SingleAccessor<O, V> {
    pub const fn new(read: fn(&O) -> &V, write: fn(&mut O, V), default: Option<fn() -> V>) -> Self {
        Self {
            read,
            write,
            default,
        }
    }

    pub fn get<'o>(&self, owner: &'o O) -> &'o V {
        (self.read)(owner)
    }

    pub fn set(&self, owner: &mut O, value: V) {
        (self.write)(owner, value)
    }

    /// The schema default, freshly constructed, when one is declared.
    pub fn default_value(&self) -> Option<V> {
        self.default.map(|make| make())
    }
}

/// Accessor pair for a repeated property.
pub struct CollectionAccessor<O, V> {
    read: fn(&O) -> &[V],
    write: fn(&mut O, Vec<V>),
    default: Option<fn() -> Vec<V>>,
}

impl<O, V> CollectionAccessor<O, V> {
    pub const fn new(
        read: fn(&O) -> &[V],
        write: fn(&mut O, Vec<V>),
        default: Option<fn() -> Vec<V>>,
    ) -> Self {
        Self {
            read,
            write,
            default,
        }
    }

    pub fn get<'o>(&self, owner: &'o O) -> &'o [V] {
        (self.read)(owner)
    }

    pub fn set(&self, owner: &mut O, values: Vec<V>) {
        (self.write)(owner, values)
    }

    pub fn default_value(&self) -> Option<Vec<V>> {
        self.default.map(|make| make())
    }
}

/// Accessor pair for a repeated property of tagged child objects.
pub struct IndirectCollectionAccessor<O, V> {
    read: fn(&O) -> &[TaggedElement<V>],
    write: fn(&mut O, Vec<TaggedElement<V>>),
    default: Option<fn() -> Vec<TaggedElement<V>>>,
}

impl<O, V> IndirectCollectionAccessor<O, V> {
    pub const fn new(
        read: fn(&O) -> &[TaggedElement<V>],
        write: fn(&mut O, Vec<TaggedElement<V>>),
        default: Option<fn() -> Vec<TaggedElement<V>>>,
    ) -> Self {
        Self {
            read,
            write,
            default,
        }
    }

    pub fn get<'o>(&self, owner: &'o O) -> &'o [TaggedElement<V>] {
        (self.read)(owner)
    }

    pub fn set(&self, owner: &mut O, values: Vec<TaggedElement<V>>) {
        (self.write)(owner, values)
    }

    pub fn default_value(&self) -> Option<Vec<TaggedElement<V>>> {
        self.default.map(|make| make())
    }
}

/// Accessor pair for a repeated property of tagged primitives.
///
/// Same layout as [`IndirectCollectionAccessor`]; the distinct variant
/// records that the values are leaves, so traversals never descend into
/// them.
pub struct IndirectScalarCollectionAccessor<O, V> {
    read: fn(&O) -> &[TaggedElement<V>],
    write: fn(&mut O, Vec<TaggedElement<V>>),
    default: Option<fn() -> Vec<TaggedElement<V>>>,
}

impl<O, V> IndirectScalarCollectionAccessor<O, V> {
    pub const fn new(
        read: fn(&O) -> &[TaggedElement<V>],
        write: fn(&mut O, Vec<TaggedElement<V>>),
        default: Option<fn() -> Vec<TaggedElement<V>>>,
    ) -> Self {
        Self {
            read,
            write,
            default,
        }
    }

    pub fn get<'o>(&self, owner: &'o O) -> &'o [TaggedElement<V>] {
        (self.read)(owner)
    }

    pub fn set(&self, owner: &mut O, values: Vec<TaggedElement<V>>) {
        (self.write)(owner, values)
    }

    pub fn default_value(&self) -> Option<Vec<TaggedElement<V>>> {
        self.default.map(|make| make())
    }
}

// ── Accessor sum ──────────────────────────────────────────────────────────

/// The four property shapes, closed.
pub enum Accessor<O, V> {
    Single(SingleAccessor<O, V>),
    Collection(CollectionAccessor<O, V>),
    IndirectCollection(IndirectCollectionAccessor<O, V>),
    IndirectScalarCollection(IndirectScalarCollectionAccessor<O, V>),
}

impl<O, V> Accessor<O, V> {
    pub fn shape_name(&self) -> &'static str {
        match self {
            Accessor::Single(_) => "single",
            Accessor::Collection(_) => "collection",
            Accessor::IndirectCollection(_) => "indirect_collection",
            Accessor::IndirectScalarCollection(_) => "indirect_scalar_collection",
        }
    }
}

impl<O, V> fmt::Debug for Accessor<O, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.shape_name())
    }
}

// ── PropertyInfo ──────────────────────────────────────────────────────────

/// Metadata and accessor of one declared property.
///
/// Generated code emits these as statics, one per property:
///
/// ```
/// use bindgraph_property::{Accessor, PropertyInfo, PropertyMeta, QName};
///
/// struct Address {
///     city: String,
/// }
///
/// fn read_city(a: &Address) -> &String {
///     &a.city
/// }
/// fn write_city(a: &mut Address, value: String) {
///     a.city = value;
/// }
///
/// static CITY: PropertyInfo<Address, String> = PropertyInfo::single(
///     PropertyMeta {
///         property_name: "city",
///         declaring_type: "Address",
///         value_type: "String",
///         collection: false,
///         schema_name: QName::local("city"),
///         schema_type: QName::new("http://www.w3.org/2001/XMLSchema", "string"),
///         attribute: false,
///     },
///     read_city,
///     write_city,
///     None,
/// );
///
/// let mut address = Address { city: "Oslo".into() };
/// match &CITY.accessor {
///     Accessor::Single(access) => {
///         assert_eq!(access.get(&address), "Oslo");
///         access.set(&mut address, "Bergen".into());
///     }
///     _ => unreachable!("city is single-valued"),
/// }
/// assert_eq!(address.city, "Bergen");
/// ```
pub struct PropertyInfo<O, V> {
    pub meta: PropertyMeta,
    pub accessor: Accessor<O, V>,
}

impl<O, V> PropertyInfo<O, V> {
    pub const fn single(
        meta: PropertyMeta,
        read: fn(&O) -> &V,
        write: fn(&mut O, V),
        default: Option<fn() -> V>,
    ) -> Self {
        Self {
            meta,
            accessor: Accessor::Single(SingleAccessor::new(read, write, default)),
        }
    }

    pub const fn collection(
        meta: PropertyMeta,
        read: fn(&O) -> &[V],
        write: fn(&mut O, Vec<V>),
        default: Option<fn() -> Vec<V>>,
    ) -> Self {
        Self {
            meta,
            accessor: Accessor::Collection(CollectionAccessor::new(read, write, default)),
        }
    }

    pub const fn indirect_collection(
        meta: PropertyMeta,
        read: fn(&O) -> &[TaggedElement<V>],
        write: fn(&mut O, Vec<TaggedElement<V>>),
        default: Option<fn() -> Vec<TaggedElement<V>>>,
    ) -> Self {
        Self {
            meta,
            accessor: Accessor::IndirectCollection(IndirectCollectionAccessor::new(
                read, write, default,
            )),
        }
    }

    pub const fn indirect_scalar_collection(
        meta: PropertyMeta,
        read: fn(&O) -> &[TaggedElement<V>],
        write: fn(&mut O, Vec<TaggedElement<V>>),
        default: Option<fn() -> Vec<TaggedElement<V>>>,
    ) -> Self {
        Self {
            meta,
            accessor: Accessor::IndirectScalarCollection(IndirectScalarCollectionAccessor::new(
                read, write, default,
            )),
        }
    }

    pub fn name(&self) -> &'static str {
        self.meta.property_name
    }

    /// Pairs this info with a borrowed instance.
    pub fn bind<'o>(&'o self, owner: &'o O) -> BoundProperty<'o, O, V> {
        BoundProperty { info: self, owner }
    }

    /// Pairs this info with a mutably borrowed instance.
    pub fn bind_mut<'o>(&'o self, owner: &'o mut O) -> BoundPropertyMut<'o, O, V> {
        BoundPropertyMut { info: self, owner }
    }
}

impl<O, V> fmt::Debug for PropertyInfo<O, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyInfo")
            .field("meta", &self.meta)
            .field("accessor", &self.accessor)
            .finish()
    }
}

// ── Bound pairings ────────────────────────────────────────────────────────

/// One property of one instance, read-only.
///
/// Code holding a `BoundProperty` matches on `info.accessor` to read with
/// the shape's exact types; the owner travels along so no caller threads
/// it separately.
#[derive(Debug)]
pub struct BoundProperty<'o, O, V> {
    pub info: &'o PropertyInfo<O, V>,
    pub owner: &'o O,
}

impl<O, V> BoundProperty<'_, O, V> {
    pub fn meta(&self) -> &PropertyMeta {
        &self.info.meta
    }
}

/// One property of one instance, writable.
pub struct BoundPropertyMut<'o, O, V> {
    pub info: &'o PropertyInfo<O, V>,
    pub owner: &'o mut O,
}

impl<O, V> BoundPropertyMut<'_, O, V> {
    pub fn meta(&self) -> &PropertyMeta {
        &self.info.meta
    }

    /// Writes the declared schema default through the accessor. Returns
    /// `false` when the property declares none.
    pub fn apply_default(&mut self) -> bool {
        match &self.info.accessor {
            Accessor::Single(access) => match access.default_value() {
                Some(value) => {
                    access.set(self.owner, value);
                    true
                }
                None => false,
            },
            Accessor::Collection(access) => match access.default_value() {
                Some(values) => {
                    access.set(self.owner, values);
                    true
                }
                None => false,
            },
            Accessor::IndirectCollection(access) => match access.default_value() {
                Some(values) => {
                    access.set(self.owner, values);
                    true
                }
                None => false,
            },
            Accessor::IndirectScalarCollection(access) => match access.default_value() {
                Some(values) => {
                    access.set(self.owner, values);
                    true
                }
                None => false,
            },
        }
    }
}
