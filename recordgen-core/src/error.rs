//! Error types for recordgen core operations.

use thiserror::Error;

/// Core error type for record instance operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number of constructor arguments.
    #[error("'{type_name}' expects {expected} constructor arguments, got {actual}")]
    ArityMismatch {
        /// Record type name.
        type_name: String,
        /// Declared field count.
        expected: usize,
        /// Supplied argument count.
        actual: usize,
    },

    /// Value does not fit the declared field type.
    #[error("field '{type_name}.{field}' expects {expected}, got {actual}")]
    TypeMismatch {
        /// Record type name.
        type_name: String,
        /// Field name.
        field: String,
        /// Canonical declared type.
        expected: String,
        /// Kind of the supplied value.
        actual: &'static str,
    },

    /// Field name not declared on the record.
    #[error("'{type_name}' has no field named '{field}'")]
    UnknownField {
        /// Record type name.
        type_name: String,
        /// Requested field name.
        field: String,
    },
}

/// Result type alias for recordgen core operations.
pub type Result<T> = std::result::Result<T, Error>;
