//! C# member synthesis.
//!
//! Each derived member is produced by a pure method returning its text;
//! [`MemberSynthesizer`] composes them in declaration order into one class.

pub mod equality;
pub mod printing;
pub mod state;

pub use equality::EqualityGenerator;
pub use printing::PrintingGenerator;
pub use state::StateGenerator;

use recordgen_core::{FieldDescriptor, TypeDescriptor};

/// Layout options for synthesized members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisOptions {
    /// One indentation level.
    pub indent: String,
    /// Emit `?` on parameters that may receive `null`.
    pub nullable_annotations: bool,
    /// Warning id suppressed around each type.
    pub suppressed_warning: String,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            nullable_annotations: true,
            suppressed_warning: "IDE0003".to_string(),
        }
    }
}

impl SynthesisOptions {
    /// Returns the padding for the given nesting level.
    #[must_use]
    pub fn pad(&self, level: usize) -> String {
        self.indent.repeat(level)
    }

    /// Spells a parameter type that may receive `null`.
    #[must_use]
    pub fn nullable(&self, type_name: &str) -> String {
        if self.nullable_annotations && !type_name.ends_with('?') {
            format!("{type_name}?")
        } else {
            type_name.to_string()
        }
    }
}

/// The derived members, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Properties,
    Constructor,
    EqualityContract,
    PrintMembers,
    ToString,
    TypedEquals,
    ObjectEquals,
    GetHashCode,
    CopyConstructor,
    Deconstruct,
    Operators,
}

impl MemberKind {
    /// All members in emission order.
    pub const ALL: [Self; 11] = [
        Self::Properties,
        Self::Constructor,
        Self::EqualityContract,
        Self::PrintMembers,
        Self::ToString,
        Self::TypedEquals,
        Self::ObjectEquals,
        Self::GetHashCode,
        Self::CopyConstructor,
        Self::Deconstruct,
        Self::Operators,
    ];
}

/// Text of one derived member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedMember {
    /// Which member this is.
    pub kind: MemberKind,
    /// Member text, one line per source line, each ending in `\n`.
    pub text: String,
}

/// Synthesizes the class equivalent of one record.
pub struct MemberSynthesizer<'a> {
    descriptor: &'a TypeDescriptor,
    options: &'a SynthesisOptions,
}

impl<'a> MemberSynthesizer<'a> {
    /// Creates a synthesizer for one descriptor.
    #[must_use]
    pub fn new(descriptor: &'a TypeDescriptor, options: &'a SynthesisOptions) -> Self {
        Self {
            descriptor,
            options,
        }
    }

    /// Generates the text of one member.
    #[must_use]
    pub fn member(&self, kind: MemberKind) -> String {
        let state = StateGenerator::new(self.descriptor, self.options);
        let printing = PrintingGenerator::new(self.descriptor, self.options);
        let equality = EqualityGenerator::new(self.descriptor, self.options);

        match kind {
            MemberKind::Properties => state.generate_properties(),
            MemberKind::Constructor => state.generate_constructor(),
            MemberKind::EqualityContract => equality.generate_equality_contract(),
            MemberKind::PrintMembers => printing.generate_print_members(),
            MemberKind::ToString => printing.generate_to_string(),
            MemberKind::TypedEquals => equality.generate_typed_equals(),
            MemberKind::ObjectEquals => equality.generate_object_equals(),
            MemberKind::GetHashCode => equality.generate_get_hash_code(),
            MemberKind::CopyConstructor => state.generate_copy_constructor(),
            MemberKind::Deconstruct => state.generate_deconstruct(),
            MemberKind::Operators => equality.generate_operators(),
        }
    }

    /// Generates every derived member in emission order.
    #[must_use]
    pub fn synthesize(&self) -> Vec<SynthesizedMember> {
        MemberKind::ALL
            .into_iter()
            .map(|kind| SynthesizedMember {
                kind,
                text: self.member(kind),
            })
            .collect()
    }

    /// Generates the complete class, wrapped in the warning pragmas.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        let name = &self.descriptor.name;
        let warning = &self.options.suppressed_warning;

        output.push_str(&format!("#pragma warning disable {warning}\n"));
        output.push_str(&format!("public class {name} : IEquatable<{name}>\n"));
        output.push_str("{\n");

        let members: Vec<String> = self
            .synthesize()
            .into_iter()
            .map(|member| member.text)
            .filter(|text| !text.is_empty())
            .collect();
        output.push_str(&members.join("\n"));

        output.push_str("}\n");
        output.push_str(&format!("#pragma warning restore {warning}\n"));

        tracing::debug!(
            "Synthesized class '{}' ({} fields, {} bytes)",
            name,
            self.descriptor.fields.len(),
            output.len()
        );
        output
    }
}

/// Name of a field as printed by `PrintMembers` (without a verbatim `@`).
pub(crate) fn display_name(field: &FieldDescriptor) -> &str {
    field.name.strip_prefix('@').unwrap_or(&field.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordgen_core::FieldType;

    fn point() -> TypeDescriptor {
        TypeDescriptor::new("Point")
            .with_field("X", FieldType::resolve("Int32"))
            .with_field("Y", FieldType::resolve("Int32"))
    }

    #[test]
    fn test_options_default() {
        let options = SynthesisOptions::default();
        assert_eq!(options.pad(2), "        ");
        assert_eq!(options.nullable("Point"), "Point?");
        assert_eq!(options.nullable("int?"), "int?");
        assert_eq!(options.suppressed_warning, "IDE0003");
    }

    #[test]
    fn test_options_without_annotations() {
        let options = SynthesisOptions {
            nullable_annotations: false,
            ..SynthesisOptions::default()
        };
        assert_eq!(options.nullable("Point"), "Point");
    }

    #[test]
    fn test_synthesize_order() {
        let descriptor = point();
        let options = SynthesisOptions::default();
        let members = MemberSynthesizer::new(&descriptor, &options).synthesize();

        let kinds: Vec<_> = members.iter().map(|m| m.kind).collect();
        assert_eq!(kinds, MemberKind::ALL);
        assert!(members.iter().all(|m| m.text.ends_with('\n')));
    }

    #[test]
    fn test_generate_point_layout() {
        let descriptor = point();
        let options = SynthesisOptions::default();
        let output = MemberSynthesizer::new(&descriptor, &options).generate();

        assert!(output.starts_with(
            "#pragma warning disable IDE0003\npublic class Point : IEquatable<Point>\n{\n    public int X { get; init; }\n"
        ));
        assert!(output.ends_with("}\n#pragma warning restore IDE0003\n"));

        let positions: Vec<usize> = [
            "public int X",
            "public Point(int X, int Y)",
            "protected virtual Type EqualityContract",
            "protected virtual bool PrintMembers",
            "public override string ToString()",
            "public virtual bool Equals(Point? other)",
            "public override bool Equals(object? other)",
            "public override int GetHashCode()",
            "protected Point(Point original)",
            "public void Deconstruct(out int X, out int Y)",
            "public static bool operator ==",
            "public static bool operator !=",
        ]
        .iter()
        .map(|needle| output.find(needle).expect("Missing member"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_generate_custom_pragma_and_indent() {
        let descriptor = point();
        let options = SynthesisOptions {
            indent: "\t".to_string(),
            suppressed_warning: "CS0660".to_string(),
            ..SynthesisOptions::default()
        };
        let output = MemberSynthesizer::new(&descriptor, &options).generate();

        assert!(output.contains("#pragma warning disable CS0660\n"));
        assert!(output.contains("#pragma warning restore CS0660\n"));
        assert!(output.contains("\tpublic int X { get; init; }\n"));
        assert!(output.contains("\t\tthis.X = X;\n"));
    }

    #[test]
    fn test_display_name_strips_verbatim_prefix() {
        let field = FieldDescriptor::new("@class", FieldType::resolve("String"));
        assert_eq!(display_name(&field), "class");
    }
}
