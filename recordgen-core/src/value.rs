//! Runtime field values.
//!
//! Equality and hashing follow `EqualityComparer<T>.Default` for scalars and
//! strings, element-wise comparison for arrays, and the nested record's own
//! `Equals` for record values. Arrays are only accepted by array-typed
//! fields, since `object` and named fields compare them by reference. Floating point values treat `NaN` as equal to
//! itself and `0.0` as equal to `-0.0`, with hashes normalized to match.

use crate::instance::RecordInstance;
use crate::types::{FieldType, PrimitiveType};
use std::hash::{Hash, Hasher};

/// A field value held by a [`RecordInstance`].
#[derive(Debug, Clone)]
pub enum Value {
    /// Null reference (or empty nullable).
    Null,
    /// Boolean.
    Bool(bool),
    /// Character.
    Char(char),
    /// Any signed integer width.
    Int(i64),
    /// Any unsigned integer width.
    UInt(u64),
    /// 32-bit float.
    Single(f32),
    /// 64-bit float.
    Double(f64),
    /// String.
    Str(String),
    /// Array elements.
    Array(Vec<Value>),
    /// Nested record.
    Record(Box<RecordInstance>),
    /// Opaque value of some other named type, identified by its text.
    Object(String),
}

impl Value {
    /// Returns a short name for the value's kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
            Self::Int(_) => "signed integer",
            Self::UInt(_) => "unsigned integer",
            Self::Single(_) => "float",
            Self::Double(_) => "double",
            Self::Str(_) => "string",
            Self::Array(_) => "array",
            Self::Record(_) => "record",
            Self::Object(_) => "object",
        }
    }

    /// Returns true if the value may be stored in a field of type `ty`.
    #[must_use]
    pub fn conforms_to(&self, ty: &FieldType) -> bool {
        if matches!(self, Self::Array(_)) && !ty.is_array() {
            return false;
        }
        match (ty, self) {
            (FieldType::Nullable(_), Self::Null) => true,
            (FieldType::Nullable(inner), value) => value.conforms_to(inner),
            (FieldType::Array(_), Self::Null) => true,
            (FieldType::Array(element), Self::Array(items)) => {
                items.iter().all(|item| item.conforms_to(element))
            }
            (FieldType::Array(_), _) => false,
            (FieldType::Named(_), Self::Null | Self::Object(_)) => true,
            (FieldType::Named(name), Self::Record(record)) => {
                record.type_name() == generic_base(name)
            }
            (FieldType::Named(_), _) => false,
            (FieldType::Primitive(prim), value) => conforms_to_primitive(*prim, value),
        }
    }
}

fn generic_base(name: &str) -> &str {
    name.split('<').next().unwrap_or(name)
}

fn conforms_to_primitive(prim: PrimitiveType, value: &Value) -> bool {
    match (prim, value) {
        (PrimitiveType::Object, _) => true,
        (PrimitiveType::String, Value::Null | Value::Str(_)) => true,
        (PrimitiveType::Boolean, Value::Bool(_)) => true,
        (PrimitiveType::Char, Value::Char(c)) => u32::from(*c) <= 0xFFFF,
        (PrimitiveType::Single, Value::Single(_)) => true,
        (PrimitiveType::Double, Value::Double(_)) => true,
        (PrimitiveType::SByte, Value::Int(v)) => i8::try_from(*v).is_ok(),
        (PrimitiveType::Int16, Value::Int(v)) => i16::try_from(*v).is_ok(),
        (PrimitiveType::Int32, Value::Int(v)) => i32::try_from(*v).is_ok(),
        (PrimitiveType::Int64, Value::Int(_)) => true,
        (PrimitiveType::Byte, Value::UInt(v)) => u8::try_from(*v).is_ok(),
        (PrimitiveType::UInt16, Value::UInt(v)) => u16::try_from(*v).is_ok(),
        (PrimitiveType::UInt32, Value::UInt(v)) => u32::try_from(*v).is_ok(),
        (PrimitiveType::UInt64, Value::UInt(_)) => true,
        _ => false,
    }
}

fn single_eq(a: f32, b: f32) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

fn double_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

fn single_bits(v: f32) -> u32 {
    if v.is_nan() {
        f32::NAN.to_bits()
    } else if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

fn double_bits(v: f64) -> u64 {
    if v.is_nan() {
        f64::NAN.to_bits()
    } else if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Single(a), Self::Single(b)) => single_eq(*a, *b),
            (Self::Double(a), Self::Double(b)) => double_eq(*a, *b),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Record(a), Self::Record(b)) => a.equals(Some(b.as_ref())),
            (Self::Object(a), Self::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(v) => v.hash(state),
            Self::Char(v) => v.hash(state),
            Self::Int(v) => v.hash(state),
            Self::UInt(v) => v.hash(state),
            Self::Single(v) => single_bits(*v).hash(state),
            Self::Double(v) => double_bits(*v).hash(state),
            Self::Str(v) => v.hash(state),
            Self::Array(items) => items.hash(state),
            Self::Record(record) => record.hash_code().hash(state),
            Self::Object(v) => v.hash(state),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::UInt(u64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Single(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<RecordInstance> for Value {
    fn from(value: RecordInstance) -> Self {
        Self::Record(Box::new(value))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
