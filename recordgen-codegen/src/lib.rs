//! # recordgen Codegen
//!
//! Synthesis of C# classes equivalent to positional records.
//!
//! This crate provides:
//! - One pure generator per derived member (properties, constructors,
//!   `EqualityContract`, `PrintMembers`, `ToString`, `Equals`,
//!   `GetHashCode`, `Deconstruct`, operators)
//! - A configurable multi-declaration [`Generator`]
//! - Source-to-code entry points

pub mod csharp;
pub mod error;
pub mod generator;

pub use csharp::{MemberKind, MemberSynthesizer, SynthesisOptions, SynthesizedMember};
pub use error::CodegenError;
pub use generator::{Generated, Generator, GeneratorBuilder};

/// Generates C# classes from C# source containing record declarations.
///
/// # Arguments
/// * `source` - C# source text
///
/// # Returns
/// Generated code with the diagnostics of skipped declarations.
///
/// # Errors
/// Returns `CodegenError` if parsing fails.
pub fn generate_from_source(source: &str) -> Result<Generated, CodegenError> {
    generate_with(source, &Generator::default())
}

/// Generates C# classes with a configured generator.
///
/// # Errors
/// Returns `CodegenError` if parsing fails.
pub fn generate_with(source: &str, generator: &Generator) -> Result<Generated, CodegenError> {
    let file = recordgen_schema::parse_source(source)?;
    let lowered = recordgen_schema::lower(&file);
    Ok(generator.generate_lowered(lowered))
}

/// Generates C# classes from a source file.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<Generated, CodegenError> {
    let source = std::fs::read_to_string(path)?;
    generate_from_source(&source)
}
