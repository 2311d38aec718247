//! Lowering of declared types into type descriptors.
//!
//! Declarations the synthesizer cannot use are dropped here and reported as
//! diagnostics, so the codegen layer only ever sees well-formed descriptors.

use crate::error::SchemaError;
use crate::types::{DeclaredType, SourceFile, TypeSymbol};
use crate::validation::{Diagnostic, validate_descriptor};
use recordgen_core::{FieldType, TypeDescriptor};

/// Descriptors lowered from one source file.
#[derive(Debug, Clone, Default)]
pub struct Lowered {
    /// Descriptors in encounter order.
    pub descriptors: Vec<TypeDescriptor>,
    /// Diagnostics for skipped declarations and fields.
    pub diagnostics: Vec<Diagnostic>,
}

impl Lowered {
    /// Lowers every declaration of a source file.
    #[must_use]
    pub fn from_source(file: &SourceFile) -> Self {
        let mut lowered = Self::default();
        for decl in &file.declarations {
            lowered.lower_declaration(decl);
        }
        lowered
    }

    /// Returns true if any error-level diagnostic was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    fn lower_declaration(&mut self, decl: &DeclaredType) {
        let Some(parameters) = &decl.parameters else {
            let err = SchemaError::MissingParameterList {
                name: decl.name.clone(),
                line: decl.line,
            };
            self.diagnostics.push(Diagnostic::error(&decl.name, err.to_string()));
            return;
        };

        if !decl.type_parameters.is_empty() {
            self.diagnostics.push(Diagnostic::warning(
                &decl.name,
                format!(
                    "type parameters <{}> of record '{}' are ignored",
                    decl.type_parameters.join(", "),
                    decl.name
                ),
            ));
        }

        let mut descriptor = TypeDescriptor::new(&decl.name).with_kind(decl.kind);
        for param in parameters {
            match &param.type_symbol {
                Some(symbol) => {
                    descriptor = descriptor.with_field(&param.name, normalize(symbol));
                }
                None => {
                    let err = SchemaError::UnresolvedType {
                        record: decl.name.clone(),
                        parameter: param.name.clone(),
                        raw_type: param.raw_type.clone(),
                    };
                    self.diagnostics
                        .push(Diagnostic::warning(&decl.name, err.to_string()));
                }
            }
        }

        tracing::debug!(
            "Lowered record '{}' with {} fields ({} diagnostics so far)",
            descriptor.name,
            descriptor.fields.len(),
            self.diagnostics.len()
        );
        self.diagnostics.extend(validate_descriptor(&descriptor));
        self.descriptors.push(descriptor);
    }
}

/// Lowers every declaration of a source file.
#[must_use]
pub fn lower(file: &SourceFile) -> Lowered {
    Lowered::from_source(file)
}

/// Converts a type symbol into its canonical field type.
///
/// Generic types become named types whose arguments are spelled
/// canonically (`List<int>`).
#[must_use]
pub fn normalize(symbol: &TypeSymbol) -> FieldType {
    let ty = match &symbol.element_type {
        Some(element) => FieldType::array_of(normalize(element)),
        None if symbol.type_arguments.is_empty() => FieldType::resolve(&symbol.name),
        None => {
            let arguments: Vec<String> = symbol
                .type_arguments
                .iter()
                .map(|argument| normalize(argument).to_string())
                .collect();
            FieldType::Named(format!("{}<{}>", symbol.name, arguments.join(", ")))
        }
    };

    if symbol.nullable {
        FieldType::nullable(ty)
    } else {
        ty
    }
}
