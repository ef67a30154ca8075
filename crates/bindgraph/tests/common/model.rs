#![allow(dead_code)]

//! Hand-expanded example of the code a generator emits for a small
//! purchase-order schema: plain structs, one `PropertyInfo` static per
//! property, `Visitable` wiring, typed selector wrappers, and
//! selection-aware copy.

use bindgraph::{
    Item, PathTree, PathTreeUse, Property, PropertyInfo, PropertyMeta, QName, Scalar, Selector,
    SelectorBase, TaggedElement, TreeCursor, Visitable,
};

pub const NS: &str = "urn:example:orders";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema";

// ── Classes ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineItem {
    pub sku: String,
    pub quantity: i64,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PurchaseOrder {
    pub order_id: String,
    pub comment: Option<String>,
    pub ship_to: Option<Address>,
    pub items: Vec<LineItem>,
    /// Tagged document references, element name per value.
    pub references: Vec<TaggedElement<String>>,
    /// Tagged parties (supplier, customer, ...), element name per value.
    pub parties: Vec<TaggedElement<Address>>,
}

// ── Property statics: Address ─────────────────────────────────────────────

fn addr_street(a: &Address) -> &String {
    &a.street
}
fn set_addr_street(a: &mut Address, value: String) {
    a.street = value;
}
fn addr_city(a: &Address) -> &String {
    &a.city
}
fn set_addr_city(a: &mut Address, value: String) {
    a.city = value;
}
fn addr_postal_code(a: &Address) -> &String {
    &a.postal_code
}
fn set_addr_postal_code(a: &mut Address, value: String) {
    a.postal_code = value;
}

pub mod address_props {
    use super::*;

    pub static STREET: PropertyInfo<Address, String> = PropertyInfo::single(
        PropertyMeta {
            property_name: "street",
            declaring_type: "Address",
            value_type: "String",
            collection: false,
            schema_name: QName::new(NS, "street"),
            schema_type: QName::new(XSD, "string"),
            attribute: false,
        },
        addr_street,
        set_addr_street,
        None,
    );

    pub static CITY: PropertyInfo<Address, String> = PropertyInfo::single(
        PropertyMeta {
            property_name: "city",
            declaring_type: "Address",
            value_type: "String",
            collection: false,
            schema_name: QName::new(NS, "city"),
            schema_type: QName::new(XSD, "string"),
            attribute: false,
        },
        addr_city,
        set_addr_city,
        None,
    );

    pub static POSTAL_CODE: PropertyInfo<Address, String> = PropertyInfo::single(
        PropertyMeta {
            property_name: "postal_code",
            declaring_type: "Address",
            value_type: "String",
            collection: false,
            schema_name: QName::new(NS, "postalCode"),
            schema_type: QName::new(XSD, "string"),
            attribute: false,
        },
        addr_postal_code,
        set_addr_postal_code,
        None,
    );
}

// ── Property statics: LineItem ────────────────────────────────────────────

fn item_sku(i: &LineItem) -> &String {
    &i.sku
}
fn set_item_sku(i: &mut LineItem, value: String) {
    i.sku = value;
}
fn item_quantity(i: &LineItem) -> &i64 {
    &i.quantity
}
fn set_item_quantity(i: &mut LineItem, value: i64) {
    i.quantity = value;
}
fn default_item_quantity() -> i64 {
    1
}
fn item_note(i: &LineItem) -> &Option<String> {
    &i.note
}
fn set_item_note(i: &mut LineItem, value: Option<String>) {
    i.note = value;
}

pub mod item_props {
    use super::*;

    pub static SKU: PropertyInfo<LineItem, String> = PropertyInfo::single(
        PropertyMeta {
            property_name: "sku",
            declaring_type: "LineItem",
            value_type: "String",
            collection: false,
            schema_name: QName::local("sku"),
            schema_type: QName::new(XSD, "string"),
            attribute: true,
        },
        item_sku,
        set_item_sku,
        None,
    );

    pub static QUANTITY: PropertyInfo<LineItem, i64> = PropertyInfo::single(
        PropertyMeta {
            property_name: "quantity",
            declaring_type: "LineItem",
            value_type: "i64",
            collection: false,
            schema_name: QName::new(NS, "quantity"),
            schema_type: QName::new(XSD, "integer"),
            attribute: false,
        },
        item_quantity,
        set_item_quantity,
        Some(default_item_quantity),
    );

    pub static NOTE: PropertyInfo<LineItem, Option<String>> = PropertyInfo::single(
        PropertyMeta {
            property_name: "note",
            declaring_type: "LineItem",
            value_type: "Option<String>",
            collection: false,
            schema_name: QName::new(NS, "note"),
            schema_type: QName::new(XSD, "string"),
            attribute: false,
        },
        item_note,
        set_item_note,
        None,
    );
}

// ── Property statics: PurchaseOrder ───────────────────────────────────────

fn po_order_id(o: &PurchaseOrder) -> &String {
    &o.order_id
}
fn set_po_order_id(o: &mut PurchaseOrder, value: String) {
    o.order_id = value;
}
fn po_comment(o: &PurchaseOrder) -> &Option<String> {
    &o.comment
}
fn set_po_comment(o: &mut PurchaseOrder, value: Option<String>) {
    o.comment = value;
}
fn po_ship_to(o: &PurchaseOrder) -> &Option<Address> {
    &o.ship_to
}
fn set_po_ship_to(o: &mut PurchaseOrder, value: Option<Address>) {
    o.ship_to = value;
}
fn po_items(o: &PurchaseOrder) -> &[LineItem] {
    &o.items
}
fn set_po_items(o: &mut PurchaseOrder, values: Vec<LineItem>) {
    o.items = values;
}
fn po_references(o: &PurchaseOrder) -> &[TaggedElement<String>] {
    &o.references
}
fn set_po_references(o: &mut PurchaseOrder, values: Vec<TaggedElement<String>>) {
    o.references = values;
}
fn po_parties(o: &PurchaseOrder) -> &[TaggedElement<Address>] {
    &o.parties
}
fn set_po_parties(o: &mut PurchaseOrder, values: Vec<TaggedElement<Address>>) {
    o.parties = values;
}

pub mod po_props {
    use super::*;

    pub static ORDER_ID: PropertyInfo<PurchaseOrder, String> = PropertyInfo::single(
        PropertyMeta {
            property_name: "order_id",
            declaring_type: "PurchaseOrder",
            value_type: "String",
            collection: false,
            schema_name: QName::local("orderId"),
            schema_type: QName::new(XSD, "ID"),
            attribute: true,
        },
        po_order_id,
        set_po_order_id,
        None,
    );

    pub static COMMENT: PropertyInfo<PurchaseOrder, Option<String>> = PropertyInfo::single(
        PropertyMeta {
            property_name: "comment",
            declaring_type: "PurchaseOrder",
            value_type: "Option<String>",
            collection: false,
            schema_name: QName::new(NS, "comment"),
            schema_type: QName::new(XSD, "string"),
            attribute: false,
        },
        po_comment,
        set_po_comment,
        None,
    );

    pub static SHIP_TO: PropertyInfo<PurchaseOrder, Option<Address>> = PropertyInfo::single(
        PropertyMeta {
            property_name: "ship_to",
            declaring_type: "PurchaseOrder",
            value_type: "Option<Address>",
            collection: false,
            schema_name: QName::new(NS, "shipTo"),
            schema_type: QName::new(NS, "Address"),
            attribute: false,
        },
        po_ship_to,
        set_po_ship_to,
        None,
    );

    pub static ITEMS: PropertyInfo<PurchaseOrder, LineItem> = PropertyInfo::collection(
        PropertyMeta {
            property_name: "items",
            declaring_type: "PurchaseOrder",
            value_type: "LineItem",
            collection: true,
            schema_name: QName::new(NS, "item"),
            schema_type: QName::new(NS, "LineItem"),
            attribute: false,
        },
        po_items,
        set_po_items,
        None,
    );

    pub static REFERENCES: PropertyInfo<PurchaseOrder, String> =
        PropertyInfo::indirect_scalar_collection(
            PropertyMeta {
                property_name: "references",
                declaring_type: "PurchaseOrder",
                value_type: "String",
                collection: true,
                schema_name: QName::new(NS, "reference"),
                schema_type: QName::new(XSD, "string"),
                attribute: false,
            },
            po_references,
            set_po_references,
            None,
        );

    pub static PARTIES: PropertyInfo<PurchaseOrder, Address> = PropertyInfo::indirect_collection(
        PropertyMeta {
            property_name: "parties",
            declaring_type: "PurchaseOrder",
            value_type: "Address",
            collection: true,
            schema_name: QName::new(NS, "party"),
            schema_type: QName::new(NS, "Address"),
            attribute: false,
        },
        po_parties,
        set_po_parties,
        None,
    );
}

// ── Visitable wiring ──────────────────────────────────────────────────────

impl Visitable for Address {
    fn type_name(&self) -> &'static str {
        "Address"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::single(
                &address_props::STREET.meta,
                Some(Item::scalar(self.street.as_str())),
            ),
            Property::single(
                &address_props::CITY.meta,
                Some(Item::scalar(self.city.as_str())),
            ),
            Property::single(
                &address_props::POSTAL_CODE.meta,
                Some(Item::scalar(self.postal_code.as_str())),
            ),
        ]
    }
}

impl Visitable for LineItem {
    fn type_name(&self) -> &'static str {
        "LineItem"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::single(&item_props::SKU.meta, Some(Item::scalar(self.sku.as_str()))),
            Property::single(&item_props::QUANTITY.meta, Some(Item::scalar(self.quantity))),
            Property::single(
                &item_props::NOTE.meta,
                self.note.as_ref().map(|note| Item::scalar(note.as_str())),
            ),
        ]
    }
}

impl Visitable for PurchaseOrder {
    fn type_name(&self) -> &'static str {
        "PurchaseOrder"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::single(
                &po_props::ORDER_ID.meta,
                Some(Item::scalar(self.order_id.as_str())),
            ),
            Property::single(
                &po_props::COMMENT.meta,
                self.comment.as_ref().map(|c| Item::scalar(c.as_str())),
            ),
            Property::single(
                &po_props::SHIP_TO.meta,
                self.ship_to.as_ref().map(|a| Item::node(a)),
            ),
            Property::collection(
                &po_props::ITEMS.meta,
                self.items.iter().map(|i| Item::node(i)).collect(),
            ),
            Property::indirect_scalar_collection(
                &po_props::REFERENCES.meta,
                self.references
                    .iter()
                    .map(|e| TaggedElement::new(e.name, Scalar::Text(e.value.clone())))
                    .collect(),
            ),
            Property::indirect_collection(
                &po_props::PARTIES.meta,
                self.parties
                    .iter()
                    .map(|e| TaggedElement::new(e.name, Item::node(&e.value)))
                    .collect(),
            ),
        ]
    }
}

// ── Selector wrappers ─────────────────────────────────────────────────────

pub struct PurchaseOrderSelect {
    base: SelectorBase,
}

impl PurchaseOrderSelect {
    pub fn with_mode(mode: PathTreeUse) -> Self {
        Self {
            base: SelectorBase::new(mode),
        }
    }

    pub fn including() -> Self {
        Self::with_mode(PathTreeUse::Include)
    }

    pub fn excluding() -> Self {
        Self::with_mode(PathTreeUse::Exclude)
    }

    pub fn order_id(&mut self) -> Selector<'_> {
        self.base.root_selector().child("order_id")
    }

    pub fn comment(&mut self) -> Selector<'_> {
        self.base.root_selector().child("comment")
    }

    pub fn ship_to(&mut self) -> AddressSelect<'_> {
        AddressSelect {
            sel: self.base.root_selector().child("ship_to"),
        }
    }

    pub fn items(&mut self) -> LineItemSelect<'_> {
        LineItemSelect {
            sel: self.base.root_selector().child("items"),
        }
    }

    pub fn references(&mut self) -> Selector<'_> {
        self.base.root_selector().child("references")
    }

    pub fn parties(&mut self) -> AddressSelect<'_> {
        AddressSelect {
            sel: self.base.root_selector().child("parties"),
        }
    }

    pub fn mode(&self) -> PathTreeUse {
        self.base.mode()
    }

    pub fn build(&self) -> PathTree {
        self.base.build()
    }
}

pub struct AddressSelect<'a> {
    sel: Selector<'a>,
}

impl<'a> AddressSelect<'a> {
    pub fn street(self) -> Selector<'a> {
        self.sel.child("street")
    }

    pub fn city(self) -> Selector<'a> {
        self.sel.child("city")
    }

    pub fn postal_code(self) -> Selector<'a> {
        self.sel.child("postal_code")
    }

    pub fn into_selector(self) -> Selector<'a> {
        self.sel
    }
}

pub struct LineItemSelect<'a> {
    sel: Selector<'a>,
}

impl<'a> LineItemSelect<'a> {
    pub fn sku(self) -> Selector<'a> {
        self.sel.child("sku")
    }

    pub fn quantity(self) -> Selector<'a> {
        self.sel.child("quantity")
    }

    pub fn note(self) -> Selector<'a> {
        self.sel.child("note")
    }

    pub fn into_selector(self) -> Selector<'a> {
        self.sel
    }
}

// ── Selection-aware copy ──────────────────────────────────────────────────

impl Address {
    pub fn copy_selected(&self, cursor: TreeCursor<'_>) -> Address {
        Address {
            street: if cursor.includes("street") {
                self.street.clone()
            } else {
                String::new()
            },
            city: if cursor.includes("city") {
                self.city.clone()
            } else {
                String::new()
            },
            postal_code: if cursor.includes("postal_code") {
                self.postal_code.clone()
            } else {
                String::new()
            },
        }
    }
}

impl LineItem {
    pub fn copy_selected(&self, cursor: TreeCursor<'_>) -> LineItem {
        LineItem {
            sku: if cursor.includes("sku") {
                self.sku.clone()
            } else {
                String::new()
            },
            quantity: if cursor.includes("quantity") {
                self.quantity
            } else {
                0
            },
            note: if cursor.includes("note") {
                self.note.clone()
            } else {
                None
            },
        }
    }
}

impl PurchaseOrder {
    pub fn copy_selected(&self, cursor: TreeCursor<'_>) -> PurchaseOrder {
        PurchaseOrder {
            order_id: if cursor.includes("order_id") {
                self.order_id.clone()
            } else {
                String::new()
            },
            comment: if cursor.includes("comment") {
                self.comment.clone()
            } else {
                None
            },
            ship_to: match cursor.descend("ship_to") {
                Some(child) => self.ship_to.as_ref().map(|a| a.copy_selected(child)),
                None => None,
            },
            items: match cursor.descend("items") {
                Some(child) => self.items.iter().map(|i| i.copy_selected(child)).collect(),
                None => Vec::new(),
            },
            references: if cursor.includes("references") {
                self.references.clone()
            } else {
                Vec::new()
            },
            parties: match cursor.descend("parties") {
                Some(child) => self
                    .parties
                    .iter()
                    .map(|e| TaggedElement::new(e.name, e.value.copy_selected(child)))
                    .collect(),
                None => Vec::new(),
            },
        }
    }
}

// ── Sample data ───────────────────────────────────────────────────────────

pub fn sample_order() -> PurchaseOrder {
    PurchaseOrder {
        order_id: "PO-1047".into(),
        comment: Some("rush delivery".into()),
        ship_to: Some(Address {
            street: "1 Harbour Way".into(),
            city: "Aberdeen".into(),
            postal_code: "AB11".into(),
        }),
        items: vec![
            LineItem {
                sku: "BOLT-M8".into(),
                quantity: 250,
                note: None,
            },
            LineItem {
                sku: "PLATE-A2".into(),
                quantity: 4,
                note: Some("anodized".into()),
            },
        ],
        references: vec![
            TaggedElement::new(QName::new(NS, "quoteRef"), "Q-88".into()),
            TaggedElement::new(QName::new(NS, "invoiceRef"), "I-19".into()),
        ],
        parties: vec![
            TaggedElement::new(
                QName::new(NS, "supplier"),
                Address {
                    street: "7 Dock Rd".into(),
                    city: "Leith".into(),
                    postal_code: "EH6".into(),
                },
            ),
            TaggedElement::new(
                QName::new(NS, "customer"),
                Address {
                    street: "1 Harbour Way".into(),
                    city: "Aberdeen".into(),
                    postal_code: "AB11".into(),
                },
            ),
        ],
    }
}
