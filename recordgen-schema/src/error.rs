//! Error types for source parsing and declaration lowering.

use thiserror::Error;

/// Error type for source parsing operations.
///
/// A parse error ends the whole run: no declaration is generated.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Lexical error.
    #[error("{message} at line {line}, column {column}")]
    Lex {
        /// 1-based line.
        line: usize,
        /// 1-based column.
        column: usize,
        /// Error message.
        message: String,
    },

    /// Token that cannot appear at this point.
    #[error("expected {expected}, found '{found}' at line {line}, column {column}")]
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// Token text found instead.
        found: String,
        /// 1-based line.
        line: usize,
        /// 1-based column.
        column: usize,
    },

    /// Input ended inside a construct.
    #[error("unexpected end of input, expected {expected} (construct opened at line {line})")]
    UnexpectedEof {
        /// What the parser was looking for.
        expected: String,
        /// Line where the unfinished construct started.
        line: usize,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for lowering one declaration into a descriptor.
///
/// These never end the run; the affected declaration or field is skipped and
/// the error is reported as a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Declaration without a parameter list.
    #[error("record '{name}' (line {line}) has no parameter list")]
    MissingParameterList {
        /// Record name.
        name: String,
        /// 1-based line of the declaration.
        line: usize,
    },

    /// Parameter whose type could not be resolved.
    #[error("cannot resolve type '{raw_type}' of parameter '{parameter}' in record '{record}'")]
    UnresolvedType {
        /// Record name.
        record: String,
        /// Parameter name.
        parameter: String,
        /// Declared type text.
        raw_type: String,
    },
}

impl ParseError {
    /// Creates a lexical error.
    pub fn lex(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Lex {
            line,
            column,
            message: message.into(),
        }
    }

    /// Creates an unexpected token error.
    pub fn unexpected(
        expected: impl Into<String>,
        found: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
            line,
            column,
        }
    }

    /// Creates an unexpected end of input error.
    pub fn eof(expected: impl Into<String>, line: usize) -> Self {
        Self::UnexpectedEof {
            expected: expected.into(),
            line,
        }
    }
}
