//! Field and type descriptors.
//!
//! A [`TypeDescriptor`] is the normalized view of one record declaration:
//! its name and its fields in declaration order. Declaration order is the
//! constructor parameter order, the deconstruction order and the
//! composition order of equality and hashing.

use crate::types::{Comparison, FieldType};
use serde::Serialize;
use std::fmt;

/// Which record form the declaration used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// `record` or `record class`.
    #[default]
    Class,
    /// `record struct`.
    Struct,
}

/// Token identifying the declared type an instance belongs to.
///
/// The synthesized `EqualityContract` returns `typeof(Name)`; two instances
/// are only comparable when their tokens match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EqualityContract(String);

impl EqualityContract {
    /// Creates the token for a declared type name.
    #[must_use]
    pub fn of(type_name: impl Into<String>) -> Self {
        Self(type_name.into())
    }

    /// Returns the declared type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EqualityContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "typeof({})", self.0)
    }
}

/// One declared field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FieldDescriptor {
    /// Field name, as declared.
    pub name: String,
    /// Canonical field type.
    #[serde(rename = "type")]
    pub ty: FieldType,
}

impl FieldDescriptor {
    /// Creates a field descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Returns the canonical type name.
    #[must_use]
    pub fn type_name(&self) -> String {
        self.ty.to_string()
    }

    /// Returns how `Equals` compares this field.
    #[must_use]
    pub fn comparison(&self) -> Comparison {
        self.ty.comparison()
    }
}

/// One record declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    /// Type name.
    pub name: String,
    /// Record form.
    pub kind: RecordKind,
    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
    /// Equality contract token.
    pub contract: EqualityContract,
}

impl TypeDescriptor {
    /// Creates a descriptor with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            contract: EqualityContract::of(name.clone()),
            name,
            kind: RecordKind::Class,
            fields: Vec::new(),
        }
    }

    /// Sets the record kind.
    #[must_use]
    pub fn with_kind(mut self, kind: RecordKind) -> Self {
        self.kind = kind;
        self
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.add_field(FieldDescriptor::new(name, ty));
        self
    }

    /// Appends a field.
    pub fn add_field(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }

    /// Looks up a field by name. The first match wins.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns the position of a field by name.
    #[must_use]
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Returns true if the record declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> TypeDescriptor {
        TypeDescriptor::new("Point")
            .with_field("X", FieldType::resolve("Int32"))
            .with_field("Y", FieldType::resolve("Int32"))
    }

    #[test]
    fn test_descriptor_preserves_order() {
        let desc = point();
        let names: Vec<_> = desc.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["X", "Y"]);
        assert_eq!(desc.field_index("Y"), Some(1));
        assert_eq!(desc.field("X").map(FieldDescriptor::type_name).as_deref(), Some("int"));
    }

    #[test]
    fn test_contract_defaults_to_own_type() {
        let desc = point();
        assert_eq!(desc.contract, EqualityContract::of("Point"));
        assert_eq!(desc.contract.to_string(), "typeof(Point)");
    }

    #[test]
    fn test_empty_descriptor() {
        let desc = TypeDescriptor::new("Unit").with_kind(RecordKind::Struct);
        assert!(desc.is_empty());
        assert_eq!(desc.kind, RecordKind::Struct);
        assert!(desc.field("X").is_none());
    }

    #[test]
    fn test_descriptor_serializes_canonical_types() {
        let desc = TypeDescriptor::new("Pair")
            .with_field("Ids", FieldType::array_of(FieldType::resolve("Int32")));
        let json = serde_json::to_value(&desc).expect("Failed to serialize");
        assert_eq!(json["name"], "Pair");
        assert_eq!(json["kind"], "class");
        assert_eq!(json["contract"], "Pair");
        assert_eq!(json["fields"][0]["type"], "int[]");
    }
}
