//! # recordgen Schema
//!
//! Front-end for C# positional record declarations.
//!
//! This crate provides:
//! - A lexer for the subset of C# needed to find record declarations
//! - A declaration scanner producing declared types with type symbols
//! - Lowering of declared types into [`recordgen_core::TypeDescriptor`]s
//! - Per-declaration validation diagnostics

pub mod error;
pub mod ir;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use ir::{Lowered, lower};
pub use parser::{parse_file, parse_source};
pub use types::{DeclaredType, Parameter, SourceFile, TypeSymbol};
pub use validation::{Diagnostic, Severity, validate_descriptor};
