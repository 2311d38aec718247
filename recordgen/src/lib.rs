//! # recordgen
//!
//! Synthesizes the complete C# class equivalent of positional `record`
//! declarations: init-only properties, constructors, `EqualityContract`,
//! `PrintMembers`, `ToString`, both `Equals` overloads, `GetHashCode`,
//! `Deconstruct` and the equality operators.
//!
//! ## Quick Start
//!
//! ```ignore
//! use recordgen::prelude::*;
//!
//! let generated = generate_from_source("record Point(int X, int Y);")?;
//! println!("{}", generated.code);
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Type descriptors, alias resolution, reference value semantics
//! - [`schema`] - C# record declaration parsing and lowering
//! - [`codegen`] - Member synthesis and the class generator

pub mod prelude;

/// Type descriptors and reference value semantics.
pub mod core {
    pub use recordgen_core::*;
}

/// Record declaration parsing and lowering.
pub mod schema {
    pub use recordgen_schema::*;
}

/// Member synthesis and class generation.
pub mod codegen {
    pub use recordgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use recordgen_codegen::{
    CodegenError, Generated, Generator, GeneratorBuilder, generate_from_file,
    generate_from_source, generate_with,
};
pub use recordgen_core::{FieldDescriptor, FieldType, TypeDescriptor};
pub use recordgen_schema::{Diagnostic, Severity};

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_end_to_end() {
        let generated = generate_from_source("record Point(int X, int Y);").expect("Failed to generate");
        assert_eq!(generated.descriptors.len(), 1);

        let descriptor = std::sync::Arc::new(generated.descriptors[0].clone());
        let point = RecordInstance::new(descriptor, vec![Value::from(1), Value::from(2)])
            .expect("Failed to construct");
        assert_eq!(point.to_string(), "Point { X = 1, Y = 2 }");
    }

    #[test]
    fn test_module_reexports() {
        let file = crate::schema::parse_source("record A(bool B);").expect("Failed to parse");
        let lowered = crate::schema::lower(&file);
        let code = crate::codegen::Generator::default().generate(&lowered.descriptors);
        assert!(code.contains("public bool B { get; init; }"));
        assert_eq!(crate::core::resolve("Boolean"), "bool");
    }
}
