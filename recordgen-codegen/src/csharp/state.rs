//! Members that hold, build and take apart record state.

use super::SynthesisOptions;
use recordgen_core::TypeDescriptor;

/// Generator for properties, constructors and `Deconstruct`.
pub struct StateGenerator<'a> {
    descriptor: &'a TypeDescriptor,
    options: &'a SynthesisOptions,
}

impl<'a> StateGenerator<'a> {
    /// Creates a new state generator.
    #[must_use]
    pub fn new(descriptor: &'a TypeDescriptor, options: &'a SynthesisOptions) -> Self {
        Self {
            descriptor,
            options,
        }
    }

    /// Generates one init-only property per field.
    ///
    /// Empty for a record without fields.
    #[must_use]
    pub fn generate_properties(&self) -> String {
        let mut output = String::new();
        let pad = self.options.pad(1);

        for field in &self.descriptor.fields {
            output.push_str(&format!(
                "{pad}public {} {} {{ get; init; }}\n",
                field.ty, field.name
            ));
        }

        output
    }

    /// Generates the primary constructor.
    #[must_use]
    pub fn generate_constructor(&self) -> String {
        let parameters: Vec<String> = self
            .descriptor
            .fields
            .iter()
            .map(|field| format!("{} {}", field.ty, field.name))
            .collect();

        let mut output = String::new();
        output.push_str(&format!(
            "{}public {}({}) {{\n",
            self.options.pad(1),
            self.descriptor.name,
            parameters.join(", ")
        ));
        for field in &self.descriptor.fields {
            output.push_str(&format!(
                "{}this.{name} = {name};\n",
                self.options.pad(2),
                name = field.name
            ));
        }
        output.push_str(&format!("{}}}\n", self.options.pad(1)));

        output
    }

    /// Generates the protected copy constructor used by `with` expressions.
    ///
    /// Array fields are copied by reference, as the compiler does.
    #[must_use]
    pub fn generate_copy_constructor(&self) -> String {
        let name = &self.descriptor.name;
        let mut output = String::new();

        output.push_str(&format!(
            "{}protected {name}({name} original) {{\n",
            self.options.pad(1)
        ));
        for field in &self.descriptor.fields {
            output.push_str(&format!(
                "{}this.{name} = original.{name};\n",
                self.options.pad(2),
                name = field.name
            ));
        }
        output.push_str(&format!("{}}}\n", self.options.pad(1)));

        output
    }

    /// Generates `Deconstruct`, matching the constructor's arity and order.
    #[must_use]
    pub fn generate_deconstruct(&self) -> String {
        let parameters: Vec<String> = self
            .descriptor
            .fields
            .iter()
            .map(|field| format!("out {} {}", field.ty, field.name))
            .collect();

        let mut output = String::new();
        output.push_str(&format!(
            "{}public void Deconstruct({}) {{\n",
            self.options.pad(1),
            parameters.join(", ")
        ));
        for field in &self.descriptor.fields {
            output.push_str(&format!(
                "{}{name} = this.{name};\n",
                self.options.pad(2),
                name = field.name
            ));
        }
        output.push_str(&format!("{}}}\n", self.options.pad(1)));

        output
    }
}
