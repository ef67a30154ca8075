//! Static property metadata.

use std::fmt;

// ── QName ─────────────────────────────────────────────────────────────────

/// A schema-qualified name: namespace URI plus local part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QName {
    pub namespace_uri: &'static str,
    pub local_part: &'static str,
}

impl QName {
    pub const fn new(namespace_uri: &'static str, local_part: &'static str) -> Self {
        Self {
            namespace_uri,
            local_part,
        }
    }

    /// A name with no namespace.
    pub const fn local(local_part: &'static str) -> Self {
        Self {
            namespace_uri: "",
            local_part,
        }
    }

    pub fn has_namespace(&self) -> bool {
        !self.namespace_uri.is_empty()
    }
}

impl fmt::Display for QName {
    /// Renders `{namespace}local`, or just `local` without a namespace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_namespace() {
            write!(f, "{{{}}}{}", self.namespace_uri, self.local_part)
        } else {
            f.write_str(self.local_part)
        }
    }
}

// ── PropertyMeta ──────────────────────────────────────────────────────────

/// Static description of one declared property.
///
/// Generated code emits one constant per declared property; every instance
/// of the owning class shares it. The in-memory name, the schema-facing
/// names, and the shape flags live here so that visitors and diagnostics
/// can describe a property without touching a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyMeta {
    /// Name of the property as generated code and selection trees spell
    /// it.
    pub property_name: &'static str,
    /// Name of the class declaring the property.
    pub declaring_type: &'static str,
    /// Name of the value type, for diagnostics.
    pub value_type: &'static str,
    /// `true` for repeated properties.
    pub collection: bool,
    /// Element or attribute name in the schema.
    pub schema_name: QName,
    /// Schema type name.
    pub schema_type: QName,
    /// `true` when the schema binds this property to an attribute rather
    /// than an element.
    pub attribute: bool,
}
