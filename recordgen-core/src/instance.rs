//! Executable model of a synthesized record class.
//!
//! [`RecordInstance`] behaves the way an instance of the generated class
//! behaves at runtime: constructor, `EqualityContract`, `PrintMembers`,
//! `ToString`, both `Equals` overloads, `GetHashCode`, the copy
//! constructor, `Deconstruct` and the `==` / `!=` operators. It is used to
//! check the generated members' laws without a C# toolchain.

use crate::descriptor::{EqualityContract, TypeDescriptor};
use crate::error::{Error, Result};
use crate::hash::HashCombiner;
use crate::types::FieldType;
use crate::value::Value;
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// One instance of a record type.
#[derive(Debug, Clone)]
pub struct RecordInstance {
    descriptor: Arc<TypeDescriptor>,
    values: Vec<Value>,
}

impl RecordInstance {
    /// Primary constructor: one value per field, in declaration order.
    ///
    /// # Errors
    /// Returns [`Error::ArityMismatch`] if the number of values differs from
    /// the field count, or [`Error::TypeMismatch`] if a value does not fit
    /// its field's type.
    pub fn new(descriptor: Arc<TypeDescriptor>, values: Vec<Value>) -> Result<Self> {
        if values.len() != descriptor.fields.len() {
            return Err(Error::ArityMismatch {
                type_name: descriptor.name.clone(),
                expected: descriptor.fields.len(),
                actual: values.len(),
            });
        }

        for (field, value) in descriptor.fields.iter().zip(&values) {
            check_value(&descriptor, &field.name, &field.ty, value)?;
        }

        Ok(Self { descriptor, values })
    }

    /// Returns the descriptor this instance was built from.
    #[must_use]
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// Returns the declared type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.descriptor.name
    }

    /// Returns the equality contract token.
    #[must_use]
    pub fn equality_contract(&self) -> &EqualityContract {
        &self.descriptor.contract
    }

    /// Returns a field value by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.descriptor
            .field_index(field)
            .map(|index| &self.values[index])
    }

    /// Appends `Name = value` pairs separated by `, `.
    ///
    /// Returns true iff anything was appended.
    pub fn print_members(&self, builder: &mut String) -> bool {
        for (index, (field, value)) in self.descriptor.fields.iter().zip(&self.values).enumerate() {
            if index > 0 {
                builder.push_str(", ");
            }
            builder.push_str(field.name.strip_prefix('@').unwrap_or(&field.name));
            builder.push_str(" = ");
            append_value(builder, value, &field.ty);
        }
        !self.values.is_empty()
    }

    /// Typed `Equals`.
    ///
    /// True when `other` is this very instance, or is non-null with the same
    /// equality contract and pairwise equal fields.
    #[must_use]
    pub fn equals(&self, other: Option<&RecordInstance>) -> bool {
        let Some(other) = other else {
            return false;
        };
        std::ptr::eq(self, other)
            || (self.equality_contract() == other.equality_contract()
                && self.values.len() == other.values.len()
                && self.values.iter().zip(&other.values).all(|(a, b)| a == b))
    }

    /// Untyped `Equals(object?)`. Arguments of any other type are unequal.
    #[must_use]
    pub fn equals_any(&self, other: Option<&dyn Any>) -> bool {
        self.equals(other.and_then(|other| other.downcast_ref::<RecordInstance>()))
    }

    /// `GetHashCode`: all field values folded in declaration order.
    #[must_use]
    pub fn hash_code(&self) -> u64 {
        let mut combiner = HashCombiner::new();
        for value in &self.values {
            combiner.add(value);
        }
        combiner.finish()
    }

    /// Copy constructor. The copy owns its values.
    #[must_use]
    pub fn copy(&self) -> Self {
        Self {
            descriptor: Arc::clone(&self.descriptor),
            values: self.values.clone(),
        }
    }

    /// Non-destructive update: a copy with one field replaced.
    ///
    /// # Errors
    /// Returns [`Error::UnknownField`] if the field is not declared, or
    /// [`Error::TypeMismatch`] if the value does not fit.
    pub fn with(&self, field: &str, value: impl Into<Value>) -> Result<Self> {
        let index = self
            .descriptor
            .field_index(field)
            .ok_or_else(|| Error::UnknownField {
                type_name: self.descriptor.name.clone(),
                field: field.to_string(),
            })?;
        let value = value.into();
        check_value(
            &self.descriptor,
            field,
            &self.descriptor.fields[index].ty,
            &value,
        )?;

        let mut copy = self.copy();
        copy.values[index] = value;
        Ok(copy)
    }

    /// `Deconstruct`: the field values, in constructor order.
    #[must_use]
    pub fn deconstruct(&self) -> Vec<Value> {
        self.values.clone()
    }

    /// `operator ==`: both null, or both non-null and [`equals`](Self::equals).
    #[must_use]
    pub fn op_eq(left: Option<&Self>, right: Option<&Self>) -> bool {
        match (left, right) {
            (None, None) => true,
            (Some(left), Some(right)) => left.equals(Some(right)),
            _ => false,
        }
    }

    /// `operator !=`.
    #[must_use]
    pub fn op_ne(left: Option<&Self>, right: Option<&Self>) -> bool {
        !Self::op_eq(left, right)
    }
}

fn check_value(descriptor: &TypeDescriptor, field: &str, ty: &FieldType, value: &Value) -> Result<()> {
    if value.conforms_to(ty) {
        Ok(())
    } else {
        Err(Error::TypeMismatch {
            type_name: descriptor.name.clone(),
            field: field.to_string(),
            expected: ty.to_string(),
            actual: value.kind(),
        })
    }
}

/// Appends a value the way `StringBuilder.Append(object)` renders it.
fn append_value(builder: &mut String, value: &Value, ty: &FieldType) {
    match value {
        Value::Null => {}
        Value::Bool(true) => builder.push_str("True"),
        Value::Bool(false) => builder.push_str("False"),
        Value::Char(c) => builder.push(*c),
        Value::Int(v) => builder.push_str(&v.to_string()),
        Value::UInt(v) => builder.push_str(&v.to_string()),
        Value::Single(v) => builder.push_str(&format_float(f64::from(*v), v.to_string())),
        Value::Double(v) => builder.push_str(&format_float(*v, v.to_string())),
        Value::Str(s) | Value::Object(s) => builder.push_str(s),
        Value::Array(_) => builder.push_str(&ty.runtime_name()),
        Value::Record(record) => builder.push_str(&record.to_string()),
    }
}

fn format_float(v: f64, shortest: String) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "∞".to_string()
    } else if v == f64::NEG_INFINITY {
        "-∞".to_string()
    } else {
        shortest
    }
}

impl fmt::Display for RecordInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = String::new();
        builder.push_str(&self.descriptor.name);
        builder.push_str(" { ");
        if self.print_members(&mut builder) {
            builder.push(' ');
        }
        builder.push('}');
        f.write_str(&builder)
    }
}

impl PartialEq for RecordInstance {
    fn eq(&self, other: &Self) -> bool {
        self.equals(Some(other))
    }
}

impl Eq for RecordInstance {}

impl Hash for RecordInstance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_type() -> Arc<TypeDescriptor> {
        Arc::new(
            TypeDescriptor::new("Point")
                .with_field("X", FieldType::resolve("Int32"))
                .with_field("Y", FieldType::resolve("Int32")),
        )
    }

    fn point(x: i32, y: i32) -> RecordInstance {
        RecordInstance::new(point_type(), vec![x.into(), y.into()]).expect("Failed to build point")
    }

    fn pair(ids: Vec<i32>) -> RecordInstance {
        let desc = Arc::new(
            TypeDescriptor::new("Pair")
                .with_field("Ids", FieldType::array_of(FieldType::resolve("Int32"))),
        );
        RecordInstance::new(desc, vec![ids.into()]).expect("Failed to build pair")
    }

    #[test]
    fn test_to_string_point() {
        assert_eq!(point(1, 2).to_string(), "Point { X = 1, Y = 2 }");
    }

    #[test]
    fn test_zero_fields() {
        let unit = Arc::new(TypeDescriptor::new("Unit"));
        let a = RecordInstance::new(Arc::clone(&unit), vec![]).expect("Failed to build");
        let b = RecordInstance::new(unit, vec![]).expect("Failed to build");

        assert_eq!(a.to_string(), "Unit { }");
        let mut builder = String::new();
        assert!(!a.print_members(&mut builder));
        assert!(builder.is_empty());
        assert!(a.equals(Some(&b)));
        assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn test_equal_values_equal_hash() {
        let a = point(3, 4);
        let b = point(3, 4);
        assert!(a.equals(Some(&b)));
        assert_eq!(a.hash_code(), b.hash_code());
        assert!(!a.equals(Some(&point(4, 3))));
    }

    #[test]
    fn test_reflexive() {
        let a = point(1, 1);
        assert!(a.equals(Some(&a)));
        assert!(RecordInstance::op_eq(Some(&a), Some(&a)));
    }

    #[test]
    fn test_equals_null_is_false() {
        assert!(!point(0, 0).equals(None));
        assert!(!point(0, 0).equals_any(None));
    }

    #[test]
    fn test_equals_any_type_mismatch() {
        let a = point(1, 2);
        let text = String::from("Point { X = 1, Y = 2 }");
        assert!(!a.equals_any(Some(&text as &dyn Any)));
        let b = point(1, 2);
        assert!(a.equals_any(Some(&b as &dyn Any)));
    }

    #[test]
    fn test_contract_separates_same_shape_types() {
        let other = Arc::new(
            TypeDescriptor::new("Vector")
                .with_field("X", FieldType::resolve("Int32"))
                .with_field("Y", FieldType::resolve("Int32")),
        );
        let v = RecordInstance::new(other, vec![1.into(), 2.into()]).expect("Failed to build");
        assert!(!point(1, 2).equals(Some(&v)));
    }

    #[test]
    fn test_deconstruct_then_construct() {
        let original = point(5, -7);
        let rebuilt = RecordInstance::new(point_type(), original.deconstruct())
            .expect("Failed to rebuild");
        assert!(original.equals(Some(&rebuilt)));
    }

    #[test]
    fn test_copy_is_equal_and_independent() {
        let original = pair(vec![1, 2]);
        let copy = original.copy();
        assert!(original.equals(Some(&copy)));

        let changed = copy.with("Ids", vec![9]).expect("Failed to update");
        assert!(!changed.equals(Some(&original)));
        assert_eq!(original.get("Ids"), Some(&Value::from(vec![1, 2])));
    }

    #[test]
    fn test_operator_negation_law() {
        let a = point(1, 2);
        let b = point(1, 2);
        let c = point(2, 1);
        let cases = [
            (None, None),
            (Some(&a), None),
            (None, Some(&a)),
            (Some(&a), Some(&a)),
            (Some(&a), Some(&b)),
            (Some(&a), Some(&c)),
        ];
        for (left, right) in cases {
            assert_eq!(
                RecordInstance::op_ne(left, right),
                !RecordInstance::op_eq(left, right)
            );
        }
        assert!(RecordInstance::op_eq(None, None));
        assert!(RecordInstance::op_eq(Some(&a), Some(&b)));
        assert!(!RecordInstance::op_eq(Some(&a), None));
    }

    #[test]
    fn test_array_fields_compare_structurally() {
        let a = pair(vec![1, 2]);
        let b = pair(vec![1, 2]);
        assert!(a.equals(Some(&b)));
        assert_eq!(a.hash_code(), b.hash_code());
        assert_eq!(a.to_string(), "Pair { Ids = System.Int32[] }");
    }

    #[test]
    fn test_string_and_float_fields() {
        let tag = Arc::new(
            TypeDescriptor::new("Tag")
                .with_field("Label", FieldType::resolve("String"))
                .with_field("Weight", FieldType::resolve("Single")),
        );
        let a = RecordInstance::new(Arc::clone(&tag), vec!["hot".into(), 0.5f32.into()])
            .expect("Failed to build");
        let b = RecordInstance::new(Arc::clone(&tag), vec![String::from("hot").into(), 0.5f32.into()])
            .expect("Failed to build");
        let c = RecordInstance::new(tag, vec![Value::Null, 1.5f32.into()]).expect("Failed to build");

        assert!(a.equals(Some(&b)));
        assert_eq!(a.hash_code(), b.hash_code());
        assert_eq!(a.to_string(), "Tag { Label = hot, Weight = 0.5 }");
        assert_eq!(c.to_string(), "Tag { Label = , Weight = 1.5 }");
    }

    #[test]
    fn test_constructor_checks() {
        let err = RecordInstance::new(point_type(), vec![1.into()]).unwrap_err();
        assert!(matches!(err, Error::ArityMismatch { expected: 2, actual: 1, .. }));

        let err = RecordInstance::new(point_type(), vec![1.into(), "y".into()]).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { ref field, .. } if field == "Y"));

        let err = point(1, 2).with("Z", 3).unwrap_err();
        assert!(matches!(err, Error::UnknownField { .. }));
    }

    #[test]
    fn test_object_field_rejects_arrays() {
        let boxed = Arc::new(TypeDescriptor::new("Box").with_field("Item", FieldType::resolve("Object")));

        let err = RecordInstance::new(Arc::clone(&boxed), vec![vec![1, 2].into()]).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch { ref field, actual: "array", .. } if field == "Item"
        ));

        let a = RecordInstance::new(Arc::clone(&boxed), vec![7.into()]).expect("Failed to build");
        let b = RecordInstance::new(boxed, vec![7.into()]).expect("Failed to build");
        assert!(a.equals(Some(&b)));
        assert!(matches!(a.with("Item", vec![1, 2]), Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn test_nested_record_field() {
        let line = Arc::new(
            TypeDescriptor::new("Line")
                .with_field("From", FieldType::Named("Point".to_string()))
                .with_field("To", FieldType::Named("Point".to_string())),
        );
        let a = RecordInstance::new(Arc::clone(&line), vec![point(0, 0).into(), point(1, 1).into()])
            .expect("Failed to build");
        let b = RecordInstance::new(line, vec![point(0, 0).into(), point(1, 1).into()])
            .expect("Failed to build");
        assert_eq!(a, b);
        assert_eq!(
            a.to_string(),
            "Line { From = Point { X = 0, Y = 0 }, To = Point { X = 1, Y = 1 } }"
        );
    }

    #[test]
    fn test_bool_and_special_floats_print() {
        let desc = Arc::new(
            TypeDescriptor::new("Flags")
                .with_field("On", FieldType::resolve("Boolean"))
                .with_field("Ratio", FieldType::resolve("Double")),
        );
        let flags = RecordInstance::new(desc, vec![true.into(), f64::NAN.into()])
            .expect("Failed to build");
        assert_eq!(flags.to_string(), "Flags { On = True, Ratio = NaN }");
        assert!(flags.equals(Some(&flags.copy())));
    }
}
