//! Prelude module for convenient imports.
//!
//! ```ignore
//! use recordgen::prelude::*;
//! ```

// Descriptor model
pub use recordgen_core::error::{Error as CoreError, Result as CoreResult};
pub use recordgen_core::{
    EqualityContract, FieldDescriptor, FieldType, PrimitiveType, RecordInstance, RecordKind,
    TypeDescriptor, Value,
};

// Front-end
pub use recordgen_schema::{
    Diagnostic, Lowered, ParseError, Severity, SourceFile, lower, parse_file, parse_source,
};

// Generation
pub use recordgen_codegen::{
    CodegenError, Generated, Generator, GeneratorBuilder, MemberKind, MemberSynthesizer,
    SynthesisOptions, generate_from_file, generate_from_source, generate_with,
};
