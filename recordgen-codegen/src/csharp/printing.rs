//! `PrintMembers` and `ToString`.

use super::{SynthesisOptions, display_name};
use recordgen_core::TypeDescriptor;

/// Generator for the string conversion members.
pub struct PrintingGenerator<'a> {
    descriptor: &'a TypeDescriptor,
    options: &'a SynthesisOptions,
}

impl<'a> PrintingGenerator<'a> {
    /// Creates a new printing generator.
    #[must_use]
    pub fn new(descriptor: &'a TypeDescriptor, options: &'a SynthesisOptions) -> Self {
        Self {
            descriptor,
            options,
        }
    }

    /// Generates `PrintMembers`.
    ///
    /// Appends `Name = value` pairs separated by `, ` and returns whether
    /// anything was appended. Values go through `Append(object)` so arrays
    /// print their runtime type name rather than their elements.
    #[must_use]
    pub fn generate_print_members(&self) -> String {
        let pad1 = self.options.pad(1);
        let pad2 = self.options.pad(2);
        let object = self.options.nullable("object");
        let mut output = String::new();

        output.push_str(&format!(
            "{pad1}protected virtual bool PrintMembers(StringBuilder builder) {{\n"
        ));
        output.push_str(&format!(
            "{pad2}RuntimeHelpers.EnsureSufficientExecutionStack();\n"
        ));
        for (index, field) in self.descriptor.fields.iter().enumerate() {
            let separator = if index == 0 { "" } else { ", " };
            output.push_str(&format!(
                "{pad2}builder.Append(\"{separator}{} = \");\n",
                display_name(field)
            ));
            output.push_str(&format!(
                "{pad2}builder.Append(({object})this.{});\n",
                field.name
            ));
        }
        output.push_str(&format!(
            "{pad2}return {};\n",
            !self.descriptor.is_empty()
        ));
        output.push_str(&format!("{pad1}}}\n"));

        output
    }

    /// Generates `ToString`: `Name { members }`, or `Name { }` without fields.
    #[must_use]
    pub fn generate_to_string(&self) -> String {
        let pad1 = self.options.pad(1);
        let pad2 = self.options.pad(2);
        let pad3 = self.options.pad(3);
        let mut output = String::new();

        output.push_str(&format!("{pad1}public override string ToString() {{\n"));
        output.push_str(&format!("{pad2}var builder = new StringBuilder();\n"));
        output.push_str(&format!(
            "{pad2}builder.Append(\"{}\");\n",
            self.descriptor.name
        ));
        output.push_str(&format!("{pad2}builder.Append(\" {{ \");\n"));
        output.push_str(&format!("{pad2}if (this.PrintMembers(builder)) {{\n"));
        output.push_str(&format!("{pad3}builder.Append(' ');\n"));
        output.push_str(&format!("{pad2}}}\n"));
        output.push_str(&format!("{pad2}builder.Append('}}');\n"));
        output.push_str(&format!("{pad2}return builder.ToString();\n"));
        output.push_str(&format!("{pad1}}}\n"));

        output
    }
}
