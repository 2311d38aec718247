//! Equality members: `EqualityContract`, both `Equals` overloads,
//! `GetHashCode` and the `==` / `!=` operators.

use super::SynthesisOptions;
use recordgen_core::{Comparison, FieldDescriptor, TypeDescriptor};

const STRUCTURAL_COMPARER: &str = "StructuralComparisons.StructuralEqualityComparer";

/// Generator for the equality members.
pub struct EqualityGenerator<'a> {
    descriptor: &'a TypeDescriptor,
    options: &'a SynthesisOptions,
}

impl<'a> EqualityGenerator<'a> {
    /// Creates a new equality generator.
    #[must_use]
    pub fn new(descriptor: &'a TypeDescriptor, options: &'a SynthesisOptions) -> Self {
        Self {
            descriptor,
            options,
        }
    }

    /// Generates the `EqualityContract` accessor.
    #[must_use]
    pub fn generate_equality_contract(&self) -> String {
        let pad1 = self.options.pad(1);
        let pad2 = self.options.pad(2);
        let pad3 = self.options.pad(3);
        let mut output = String::new();

        output.push_str(&format!("{pad1}protected virtual Type EqualityContract {{\n"));
        output.push_str(&format!("{pad2}get {{\n"));
        output.push_str(&format!("{pad3}return {};\n", self.descriptor.contract));
        output.push_str(&format!("{pad2}}}\n"));
        output.push_str(&format!("{pad1}}}\n"));

        output
    }

    /// Generates the typed `Equals`.
    ///
    /// Equal when reference-identical, or when `other` is non-null, has the
    /// same contract and every field pair compares equal.
    #[must_use]
    pub fn generate_typed_equals(&self) -> String {
        let pad1 = self.options.pad(1);
        let pad2 = self.options.pad(2);
        let pad3 = self.options.pad(3);
        let name = &self.descriptor.name;
        let mut output = String::new();

        output.push_str(&format!(
            "{pad1}public virtual bool Equals({} other) {{\n",
            self.options.nullable(name)
        ));
        output.push_str(&format!(
            "{pad2}return (object)this == other || (other is not null && this.EqualityContract == other.EqualityContract"
        ));
        for field in &self.descriptor.fields {
            output.push_str(&format!(" &&\n{pad3}{}", field_equals(field)));
        }
        output.push_str(");\n");
        output.push_str(&format!("{pad1}}}\n"));

        output
    }

    /// Generates `Equals(object)`.
    ///
    /// Narrows with `as`; anything that is not this type becomes `null` and
    /// compares unequal.
    #[must_use]
    pub fn generate_object_equals(&self) -> String {
        let pad1 = self.options.pad(1);
        let pad2 = self.options.pad(2);
        let mut output = String::new();

        output.push_str(&format!(
            "{pad1}public override bool Equals({} other) {{\n",
            self.options.nullable("object")
        ));
        output.push_str(&format!(
            "{pad2}return this.Equals(other as {});\n",
            self.descriptor.name
        ));
        output.push_str(&format!("{pad1}}}\n"));

        output
    }

    /// Generates `GetHashCode`, folding every field in declaration order.
    #[must_use]
    pub fn generate_get_hash_code(&self) -> String {
        let pad1 = self.options.pad(1);
        let pad2 = self.options.pad(2);
        let mut output = String::new();

        output.push_str(&format!("{pad1}public override int GetHashCode() {{\n"));
        output.push_str(&format!("{pad2}var hashCode = new HashCode();\n"));
        for field in &self.descriptor.fields {
            let value = match field.comparison() {
                Comparison::Structural => {
                    format!("{STRUCTURAL_COMPARER}.GetHashCode(this.{})", field.name)
                }
                Comparison::Value | Comparison::Default => format!("this.{}", field.name),
            };
            output.push_str(&format!("{pad2}hashCode.Add({value});\n"));
        }
        output.push_str(&format!("{pad2}return hashCode.ToHashCode();\n"));
        output.push_str(&format!("{pad1}}}\n"));

        output
    }

    /// Generates `==` and `!=`.
    ///
    /// `==` holds when both operands are null, or both are non-null and
    /// equal. `!=` is its negation.
    #[must_use]
    pub fn generate_operators(&self) -> String {
        let pad1 = self.options.pad(1);
        let pad2 = self.options.pad(2);
        let operand = self.options.nullable(&self.descriptor.name);
        let object = self.options.nullable("object");
        let mut output = String::new();

        output.push_str(&format!(
            "{pad1}public static bool operator ==({operand} left, {operand} right) {{\n"
        ));
        output.push_str(&format!(
            "{pad2}return ({object})left == right || (left is not null && left.Equals(right));\n"
        ));
        output.push_str(&format!("{pad1}}}\n"));
        output.push('\n');
        output.push_str(&format!(
            "{pad1}public static bool operator !=({operand} left, {operand} right) {{\n"
        ));
        output.push_str(&format!("{pad2}return !(left == right);\n"));
        output.push_str(&format!("{pad1}}}\n"));

        output
    }
}

/// Comparison expression for one field pair.
fn field_equals(field: &FieldDescriptor) -> String {
    match field.comparison() {
        Comparison::Structural => format!(
            "{STRUCTURAL_COMPARER}.Equals(this.{name}, other.{name})",
            name = field.name
        ),
        Comparison::Value | Comparison::Default => format!(
            "EqualityComparer<{}>.Default.Equals(this.{name}, other.{name})",
            field.ty,
            name = field.name
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordgen_core::FieldType;

    fn tag() -> TypeDescriptor {
        TypeDescriptor::new("Tag")
            .with_field("Label", FieldType::resolve("String"))
            .with_field("Weight", FieldType::resolve("Single"))
    }

    fn pair() -> TypeDescriptor {
        TypeDescriptor::new("Pair").with_field("Ids", FieldType::array_of(FieldType::resolve("Int32")))
    }

    #[test]
    fn test_generate_equality_contract() {
        let descriptor = tag();
        let options = SynthesisOptions::default();
        let output = EqualityGenerator::new(&descriptor, &options).generate_equality_contract();

        assert_eq!(
            output,
            "    protected virtual Type EqualityContract {\n        get {\n            return typeof(Tag);\n        }\n    }\n"
        );
    }

    #[test]
    fn test_generate_typed_equals_tag() {
        let descriptor = tag();
        let options = SynthesisOptions::default();
        let output = EqualityGenerator::new(&descriptor, &options).generate_typed_equals();

        let expected = "    public virtual bool Equals(Tag? other) {
        return (object)this == other || (other is not null && this.EqualityContract == other.EqualityContract &&
            EqualityComparer<string>.Default.Equals(this.Label, other.Label) &&
            EqualityComparer<float>.Default.Equals(this.Weight, other.Weight));
    }
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_generate_typed_equals_array_is_structural() {
        let descriptor = pair();
        let options = SynthesisOptions::default();
        let output = EqualityGenerator::new(&descriptor, &options).generate_typed_equals();

        assert!(output.contains(
            "StructuralComparisons.StructuralEqualityComparer.Equals(this.Ids, other.Ids)"
        ));
        assert!(!output.contains("EqualityComparer<int[]>"));
    }

    #[test]
    fn test_generate_typed_equals_zero_fields() {
        let descriptor = TypeDescriptor::new("Unit");
        let options = SynthesisOptions::default();
        let output = EqualityGenerator::new(&descriptor, &options).generate_typed_equals();

        assert!(output.contains(
            "return (object)this == other || (other is not null && this.EqualityContract == other.EqualityContract);\n"
        ));
    }

    #[test]
    fn test_generate_object_equals() {
        let descriptor = tag();
        let options = SynthesisOptions::default();
        let output = EqualityGenerator::new(&descriptor, &options).generate_object_equals();

        assert_eq!(
            output,
            "    public override bool Equals(object? other) {\n        return this.Equals(other as Tag);\n    }\n"
        );
        assert!(!output.contains('!'));
    }

    #[test]
    fn test_generate_get_hash_code() {
        let descriptor = tag();
        let options = SynthesisOptions::default();
        let output = EqualityGenerator::new(&descriptor, &options).generate_get_hash_code();

        let label = output.find("hashCode.Add(this.Label);").expect("Missing Label");
        let weight = output.find("hashCode.Add(this.Weight);").expect("Missing Weight");
        assert!(label < weight);
        assert!(output.ends_with("        return hashCode.ToHashCode();\n    }\n"));

        let descriptor = pair();
        let output = EqualityGenerator::new(&descriptor, &options).generate_get_hash_code();
        assert!(output.contains(
            "hashCode.Add(StructuralComparisons.StructuralEqualityComparer.GetHashCode(this.Ids));"
        ));
    }

    #[test]
    fn test_generate_operators() {
        let descriptor = tag();
        let options = SynthesisOptions::default();
        let output = EqualityGenerator::new(&descriptor, &options).generate_operators();

        assert!(output.contains("public static bool operator ==(Tag? left, Tag? right) {"));
        assert!(output.contains(
            "return (object?)left == right || (left is not null && left.Equals(right));"
        ));
        assert!(output.contains("public static bool operator !=(Tag? left, Tag? right) {"));
        assert!(output.contains("return !(left == right);"));
    }

    #[test]
    fn test_generate_without_nullable_annotations() {
        let descriptor = tag();
        let options = SynthesisOptions {
            nullable_annotations: false,
            ..SynthesisOptions::default()
        };
        let generator = EqualityGenerator::new(&descriptor, &options);

        assert!(generator.generate_typed_equals().contains("Equals(Tag other)"));
        assert!(generator.generate_object_equals().contains("Equals(object other)"));
        assert!(generator.generate_operators().contains("operator ==(Tag left, Tag right)"));
    }
}
