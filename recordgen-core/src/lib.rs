//! # recordgen Core
//!
//! Type descriptor model for positional record declarations.
//!
//! This crate provides:
//! - Canonical type names (primitive alias resolution, array spelling)
//! - Field and type descriptors consumed by the member synthesizer
//! - An executable model of the synthesized members' runtime behavior
//!   (equality, hashing, string conversion, copy and deconstruction)
//! - Error types for instance construction

pub mod descriptor;
pub mod error;
pub mod hash;
pub mod instance;
pub mod types;
pub mod value;

pub use descriptor::{EqualityContract, FieldDescriptor, RecordKind, TypeDescriptor};
pub use error::{Error, Result};
pub use hash::HashCombiner;
pub use instance::RecordInstance;
pub use types::{Comparison, FieldType, PrimitiveType, resolve, resolve_array};
pub use value::Value;
