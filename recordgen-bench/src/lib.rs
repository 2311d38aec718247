//! # recordgen Bench
//!
//! Input builders for recordgen benchmarks.

use recordgen_core::{FieldType, TypeDescriptor};

const FIELD_TYPES: [&str; 6] = ["int", "string", "double", "long[]", "bool", "List<int>"];

/// Builds C# source declaring `records` records of `fields` fields each,
/// inside a namespace.
#[must_use]
pub fn sample_source(records: usize, fields: usize) -> String {
    let mut source = String::from("namespace Bench\n{\n");
    for record in 0..records {
        let parameters: Vec<String> = (0..fields)
            .map(|field| format!("{} F{field}", FIELD_TYPES[field % FIELD_TYPES.len()]))
            .collect();
        source.push_str(&format!(
            "    public record R{record}({});\n",
            parameters.join(", ")
        ));
    }
    source.push_str("}\n");
    source
}

/// Builds a descriptor with `fields` fields cycling through common types.
#[must_use]
pub fn sample_descriptor(fields: usize) -> TypeDescriptor {
    let types = [
        FieldType::resolve("Int32"),
        FieldType::resolve("String"),
        FieldType::resolve("Double"),
        FieldType::array_of(FieldType::resolve("Int64")),
    ];

    (0..fields).fold(TypeDescriptor::new("Sample"), |descriptor, field| {
        descriptor.with_field(format!("F{field}"), types[field % types.len()].clone())
    })
}
