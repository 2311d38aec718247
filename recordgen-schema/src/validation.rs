//! Descriptor validation.
//!
//! Validation never blocks generation. It reports declarations that will
//! produce suspicious output so the caller can surface them.

use recordgen_core::TypeDescriptor;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("info"),
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// A message about one declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity.
    pub severity: Severity,
    /// Name of the record the message is about.
    pub record: String,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic.
    pub fn new(severity: Severity, record: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            record: record.into(),
            message: message.into(),
        }
    }

    /// Creates an info diagnostic.
    pub fn info(record: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, record, message)
    }

    /// Creates a warning diagnostic.
    pub fn warning(record: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, record, message)
    }

    /// Creates an error diagnostic.
    pub fn error(record: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, record, message)
    }

    /// Returns true for error-level diagnostics.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Checks a descriptor for declarations that generate questionable code.
///
/// Reports duplicate field names, fields named like the enclosing type,
/// and records without fields.
#[must_use]
pub fn validate_descriptor(descriptor: &TypeDescriptor) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let name = descriptor.name.as_str();

    if descriptor.is_empty() {
        diagnostics.push(Diagnostic::info(
            name,
            format!("record '{name}' has no fields"),
        ));
    }

    let mut seen = HashSet::new();
    for field in &descriptor.fields {
        if !seen.insert(field.name.as_str()) {
            diagnostics.push(Diagnostic::warning(
                name,
                format!("record '{name}' declares field '{}' more than once", field.name),
            ));
        }
        if field.name == name {
            diagnostics.push(Diagnostic::warning(
                name,
                format!("field '{}' has the same name as its enclosing type", field.name),
            ));
        }
    }

    diagnostics
}
