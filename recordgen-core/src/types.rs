//! Canonical type names for record fields.
//!
//! A front-end reports field types by their metadata name (`Int32`,
//! `String`, ...). This module maps the closed set of primitive metadata
//! names to their C# keyword spelling and spells arrays as
//! `<element>[]`, recursively. Anything else passes through unchanged.

use serde::{Serialize, Serializer};
use std::fmt;

/// Built-in types with a dedicated C# keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// Signed 8-bit integer.
    SByte,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 8-bit integer.
    Byte,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Unsigned 64-bit integer.
    UInt64,
    /// Boolean.
    Boolean,
    /// UTF-16 code unit.
    Char,
    /// 32-bit floating point.
    Single,
    /// 64-bit floating point.
    Double,
    /// Root object type.
    Object,
    /// Text string.
    String,
}

impl PrimitiveType {
    /// All primitive types, in table order.
    pub const ALL: [Self; 14] = [
        Self::SByte,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Byte,
        Self::UInt16,
        Self::UInt32,
        Self::UInt64,
        Self::Boolean,
        Self::Char,
        Self::Single,
        Self::Double,
        Self::Object,
        Self::String,
    ];

    /// Returns the C# keyword for this type.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::SByte => "sbyte",
            Self::Int16 => "short",
            Self::Int32 => "int",
            Self::Int64 => "long",
            Self::Byte => "byte",
            Self::UInt16 => "ushort",
            Self::UInt32 => "uint",
            Self::UInt64 => "ulong",
            Self::Boolean => "bool",
            Self::Char => "char",
            Self::Single => "float",
            Self::Double => "double",
            Self::Object => "object",
            Self::String => "string",
        }
    }

    /// Returns the metadata (`System.*`) name for this type.
    #[must_use]
    pub const fn metadata_name(&self) -> &'static str {
        match self {
            Self::SByte => "SByte",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Byte => "Byte",
            Self::UInt16 => "UInt16",
            Self::UInt32 => "UInt32",
            Self::UInt64 => "UInt64",
            Self::Boolean => "Boolean",
            Self::Char => "Char",
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Object => "Object",
            Self::String => "String",
        }
    }

    /// Parses a primitive type from its metadata name.
    ///
    /// `Int8` and `UInt8` are accepted as spellings of the 8-bit family.
    #[must_use]
    pub fn from_metadata_name(name: &str) -> Option<Self> {
        match name {
            "Int8" => Some(Self::SByte),
            "UInt8" => Some(Self::Byte),
            _ => Self::ALL
                .into_iter()
                .find(|prim| prim.metadata_name() == name),
        }
    }

    /// Parses a primitive type from its C# keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|prim| prim.keyword() == keyword)
    }

    /// Returns true for the reference types of the table (`object`, `string`).
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Object | Self::String)
    }
}

/// How the synthesized `Equals` compares two values of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Value equality (primitives and strings).
    Value,
    /// Element-wise equality (arrays).
    Structural,
    /// The type's default equality comparer.
    Default,
}

/// Canonical field type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// A type from the primitive alias table.
    Primitive(PrimitiveType),
    /// Single-rank array of the element type.
    Array(Box<FieldType>),
    /// Nullable annotation (`T?`).
    Nullable(Box<FieldType>),
    /// Any other type, kept verbatim.
    Named(String),
}

impl FieldType {
    /// Resolves a metadata name; unknown names pass through as [`FieldType::Named`].
    #[must_use]
    pub fn resolve(raw: &str) -> Self {
        PrimitiveType::from_metadata_name(raw)
            .map(Self::Primitive)
            .unwrap_or_else(|| Self::Named(raw.to_string()))
    }

    /// Wraps an element type into an array type.
    #[must_use]
    pub fn array_of(element: FieldType) -> Self {
        Self::Array(Box::new(element))
    }

    /// Marks a type nullable. Already nullable types are returned unchanged.
    #[must_use]
    pub fn nullable(inner: FieldType) -> Self {
        match inner {
            Self::Nullable(_) => inner,
            other => Self::Nullable(Box::new(other)),
        }
    }

    /// Returns true for array types, looking through a nullable annotation.
    #[must_use]
    pub fn is_array(&self) -> bool {
        match self {
            Self::Array(_) => true,
            Self::Nullable(inner) => inner.is_array(),
            _ => false,
        }
    }

    /// Returns the comparison the synthesized `Equals` uses for this type.
    #[must_use]
    pub fn comparison(&self) -> Comparison {
        match self {
            Self::Primitive(_) => Comparison::Value,
            Self::Array(_) => Comparison::Structural,
            Self::Nullable(inner) => inner.comparison(),
            Self::Named(_) => Comparison::Default,
        }
    }

    /// Returns the runtime type name `StringBuilder.Append(object)` prints
    /// for a value of this type (`System.Int32[]` for an `int[]`).
    #[must_use]
    pub fn runtime_name(&self) -> String {
        match self {
            Self::Primitive(prim) => format!("System.{}", prim.metadata_name()),
            Self::Array(element) => format!("{}[]", element.runtime_name()),
            Self::Nullable(inner) => match inner.as_ref() {
                Self::Primitive(prim) if !prim.is_reference() => {
                    format!("System.Nullable`1[{}]", inner.runtime_name())
                }
                other => other.runtime_name(),
            },
            Self::Named(name) => name.clone(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(prim) => f.write_str(prim.keyword()),
            Self::Array(element) => write!(f, "{element}[]"),
            Self::Nullable(inner) => write!(f, "{inner}?"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Maps a raw metadata type name to its canonical spelling.
///
/// Total: names outside the primitive table are returned unchanged.
#[must_use]
pub fn resolve(raw: &str) -> String {
    FieldType::resolve(raw).to_string()
}

/// Spells an array of an already canonical element type.
#[must_use]
pub fn resolve_array(element: &str) -> String {
    format!("{element}[]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_primitive_table() {
        assert_eq!(resolve("Int32"), "int");
        assert_eq!(resolve("Int64"), "long");
        assert_eq!(resolve("UInt16"), "ushort");
        assert_eq!(resolve("Boolean"), "bool");
        assert_eq!(resolve("Single"), "float");
        assert_eq!(resolve("Double"), "double");
        assert_eq!(resolve("String"), "string");
        assert_eq!(resolve("Object"), "object");
        assert_eq!(resolve("Char"), "char");
    }

    #[test]
    fn test_resolve_eight_bit_spellings() {
        assert_eq!(resolve("SByte"), "sbyte");
        assert_eq!(resolve("Int8"), "sbyte");
        assert_eq!(resolve("Byte"), "byte");
        assert_eq!(resolve("UInt8"), "byte");
    }

    #[test]
    fn test_resolve_unknown_passes_through() {
        assert_eq!(resolve("Guid"), "Guid");
        assert_eq!(resolve("List<int>"), "List<int>");
        assert_eq!(resolve("int"), "int");
        assert_eq!(resolve(""), "");
    }

    #[test]
    fn test_resolve_array_nests() {
        let inner = resolve_array(&resolve("Int32"));
        assert_eq!(inner, "int[]");
        assert_eq!(resolve_array(&inner), "int[][]");
    }

    #[test]
    fn test_field_type_display() {
        let ty = FieldType::array_of(FieldType::array_of(FieldType::resolve("String")));
        assert_eq!(ty.to_string(), "string[][]");

        let ty = FieldType::nullable(FieldType::resolve("Int32"));
        assert_eq!(ty.to_string(), "int?");
        assert_eq!(FieldType::nullable(ty.clone()), ty);
    }

    #[test]
    fn test_field_type_comparison() {
        assert_eq!(FieldType::resolve("String").comparison(), Comparison::Value);
        assert_eq!(
            FieldType::array_of(FieldType::resolve("Int32")).comparison(),
            Comparison::Structural
        );
        assert_eq!(
            FieldType::nullable(FieldType::array_of(FieldType::resolve("Byte"))).comparison(),
            Comparison::Structural
        );
        assert_eq!(FieldType::resolve("Guid").comparison(), Comparison::Default);
    }

    #[test]
    fn test_runtime_name() {
        let ty = FieldType::array_of(FieldType::resolve("Int32"));
        assert_eq!(ty.runtime_name(), "System.Int32[]");

        let ty = FieldType::nullable(FieldType::resolve("Double"));
        assert_eq!(ty.runtime_name(), "System.Nullable`1[System.Double]");
    }

    #[test]
    fn test_keyword_round_trip() {
        for prim in PrimitiveType::ALL {
            assert_eq!(PrimitiveType::from_keyword(prim.keyword()), Some(prim));
            assert_eq!(PrimitiveType::from_metadata_name(prim.metadata_name()), Some(prim));
        }
    }

    #[test]
    fn test_primitive_classification() {
        assert!(PrimitiveType::String.is_reference());
        assert!(!PrimitiveType::Char.is_reference());
    }
}
