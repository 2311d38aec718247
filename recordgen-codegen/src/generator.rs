//! Multi-declaration generator.
//!
//! Synthesizes one class per descriptor and concatenates them in encounter
//! order behind an optional `using` header.

use crate::csharp::{MemberSynthesizer, SynthesisOptions};
use crate::error::CodegenError;
use recordgen_core::TypeDescriptor;
use recordgen_schema::{Diagnostic, Lowered};

/// Namespaces the synthesized members reference.
pub const USINGS: [&str; 5] = [
    "System",
    "System.Collections",
    "System.Collections.Generic",
    "System.Runtime.CompilerServices",
    "System.Text",
];

/// Result of one generation run.
#[derive(Debug, Clone, Default)]
pub struct Generated {
    /// Generated C# text; empty when no record was found.
    pub code: String,
    /// Descriptors the code was generated from, in encounter order.
    pub descriptors: Vec<TypeDescriptor>,
    /// Diagnostics for skipped declarations and fields.
    pub diagnostics: Vec<Diagnostic>,
}

impl Generated {
    /// Returns true if any error-level diagnostic was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Builder for configuring a [`Generator`].
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    emit_usings: bool,
    suppressed_warning: String,
    indent: String,
    nullable_annotations: bool,
}

impl GeneratorBuilder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        let defaults = SynthesisOptions::default();
        Self {
            emit_usings: true,
            suppressed_warning: defaults.suppressed_warning,
            indent: defaults.indent,
            nullable_annotations: defaults.nullable_annotations,
        }
    }

    /// Sets whether the `using` header is emitted.
    #[must_use]
    pub fn emit_usings(mut self, emit: bool) -> Self {
        self.emit_usings = emit;
        self
    }

    /// Sets the warning id wrapped around each type.
    #[must_use]
    pub fn suppressed_warning(mut self, id: impl Into<String>) -> Self {
        self.suppressed_warning = id.into();
        self
    }

    /// Sets one indentation level.
    #[must_use]
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Sets whether nullable parameters carry a `?` annotation.
    #[must_use]
    pub fn nullable_annotations(mut self, enabled: bool) -> Self {
        self.nullable_annotations = enabled;
        self
    }

    /// Builds the generator.
    ///
    /// # Errors
    /// Returns [`CodegenError::Generation`] if the warning id is empty or
    /// contains whitespace, or if the indent contains anything other than
    /// spaces and tabs.
    pub fn build(self) -> Result<Generator, CodegenError> {
        if self.suppressed_warning.is_empty()
            || self.suppressed_warning.chars().any(char::is_whitespace)
        {
            return Err(CodegenError::generation(format!(
                "invalid warning id '{}'",
                self.suppressed_warning
            )));
        }
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(CodegenError::generation(format!(
                "indent must contain only spaces and tabs, got {:?}",
                self.indent
            )));
        }

        Ok(Generator {
            options: SynthesisOptions {
                indent: self.indent,
                nullable_annotations: self.nullable_annotations,
                suppressed_warning: self.suppressed_warning,
            },
            emit_usings: self.emit_usings,
        })
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// C# class generator.
#[derive(Debug, Clone)]
pub struct Generator {
    options: SynthesisOptions,
    emit_usings: bool,
}

impl Generator {
    /// Returns a builder for a custom generator.
    #[must_use]
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// Returns the synthesis options.
    #[must_use]
    pub fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    /// Returns whether the `using` header is emitted.
    #[must_use]
    pub fn emits_usings(&self) -> bool {
        self.emit_usings
    }

    /// Generates one class per descriptor, in order.
    #[must_use]
    pub fn generate(&self, descriptors: &[TypeDescriptor]) -> String {
        let mut output = String::new();
        if descriptors.is_empty() {
            return output;
        }

        if self.emit_usings {
            for namespace in USINGS {
                output.push_str(&format!("using {namespace};\n"));
            }
            output.push('\n');
        }

        let classes: Vec<String> = descriptors
            .iter()
            .map(|descriptor| MemberSynthesizer::new(descriptor, &self.options).generate())
            .collect();
        output.push_str(&classes.join("\n"));

        output
    }

    /// Generates code for lowered declarations, keeping their diagnostics.
    #[must_use]
    pub fn generate_lowered(&self, lowered: Lowered) -> Generated {
        tracing::debug!(
            "Generating {} classes ({} diagnostics)",
            lowered.descriptors.len(),
            lowered.diagnostics.len()
        );

        Generated {
            code: self.generate(&lowered.descriptors),
            descriptors: lowered.descriptors,
            diagnostics: lowered.diagnostics,
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            options: SynthesisOptions::default(),
            emit_usings: true,
        }
    }
}
