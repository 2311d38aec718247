//! Declarations reported by the front-end.
//!
//! These mirror what a compiler's symbol table would expose for a record:
//! its name and, for each positional parameter, a name and a type symbol.

use recordgen_core::RecordKind;
use std::fmt;

/// A parsed source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFile {
    /// Record declarations in encounter order.
    pub declarations: Vec<DeclaredType>,
}

impl SourceFile {
    /// Returns true if no record declaration was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// One `record` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredType {
    /// Record name.
    pub name: String,
    /// Record form.
    pub kind: RecordKind,
    /// Type parameter names of a generic record (not supported downstream).
    pub type_parameters: Vec<String>,
    /// Positional parameters; `None` when the declaration has no list.
    pub parameters: Option<Vec<Parameter>>,
    /// 1-based line of the `record` keyword.
    pub line: usize,
}

impl DeclaredType {
    /// Creates a declaration without a parameter list.
    #[must_use]
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            kind: RecordKind::Class,
            type_parameters: Vec::new(),
            parameters: None,
            line,
        }
    }
}

/// One positional parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Resolved type symbol; `None` if the type could not be resolved.
    pub type_symbol: Option<TypeSymbol>,
    /// Declared type text, as written.
    pub raw_type: String,
}

/// A resolved type.
///
/// Named types carry their metadata name (`Int32` for `int`). Array types
/// have an empty name and an element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSymbol {
    /// Metadata name; empty for arrays.
    pub name: String,
    /// Generic arguments, in order.
    pub type_arguments: Vec<TypeSymbol>,
    /// Element type, for arrays.
    pub element_type: Option<Box<TypeSymbol>>,
    /// Whether the type carries a `?` annotation.
    pub nullable: bool,
}

impl TypeSymbol {
    /// Creates a named type symbol.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_arguments: Vec::new(),
            element_type: None,
            nullable: false,
        }
    }

    /// Creates an array type symbol.
    #[must_use]
    pub fn array(element: TypeSymbol) -> Self {
        Self {
            name: String::new(),
            type_arguments: Vec::new(),
            element_type: Some(Box::new(element)),
            nullable: false,
        }
    }

    /// Sets the generic arguments.
    #[must_use]
    pub fn with_arguments(mut self, arguments: Vec<TypeSymbol>) -> Self {
        self.type_arguments = arguments;
        self
    }

    /// Marks the symbol nullable.
    #[must_use]
    pub fn into_nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Returns true for array types.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.element_type.is_some()
    }
}

impl fmt::Display for TypeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.element_type {
            Some(element) => write!(f, "{element}[]")?,
            None => {
                f.write_str(&self.name)?;
                if !self.type_arguments.is_empty() {
                    f.write_str("<")?;
                    for (index, argument) in self.type_arguments.iter().enumerate() {
                        if index > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{argument}")?;
                    }
                    f.write_str(">")?;
                }
            }
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}
