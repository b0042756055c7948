use std::fmt;

use crate::interpreter::semantic::types::Type;

/// Represents a runtime value in the interpreter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64-bit integer value.
    Int(i64),
    /// A double precision floating-point value.
    Float(f64),
}

impl Value {
    /// The static type this value belongs to.
    #[must_use]
    pub const fn ty(&self) -> Type {
        match self {
            Self::Int(_) => Type::Int,
            Self::Float(_) => Type::Float,
        }
    }
}

/// Floats always show a fractional part, so `2.0` never prints as `2`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
        }
    }
}
