use thiserror::Error;

use crate::ast::{BinaryOperator, Position};

/// Represents all errors that can occur while evaluating a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to read a variable that holds no value.
    #[error("Error on line {}, column {}: Unknown variable '{name}'.", .position.line, .position.column)]
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// Where the variable was referenced.
        position: Position,
    },
    /// The operands of an operation have incompatible types.
    #[error("Error on line {}, column {}: Type error: {details}.", .position.line, .position.column)]
    TypeError {
        /// Details about the type mismatch.
        details:  String,
        /// Position of the operator.
        position: Position,
    },
    /// Attempted division by zero.
    #[error("Error on line {}, column {}: Division by zero.", .position.line, .position.column)]
    DivisionByZero {
        /// Position of the `/` operator.
        position: Position,
    },
    /// Integer arithmetic overflowed.
    #[error("Error on line {}, column {}: Integer overflow while computing '{op}'.",
            .position.line,
            .position.column)]
    Overflow {
        /// The operator that overflowed, `-` for negation.
        op:       String,
        /// Position of the operator.
        position: Position,
    },
}

impl RuntimeError {
    pub(crate) fn overflow(op: BinaryOperator, position: Position) -> Self {
        Self::Overflow { op: op.to_string(),
                         position }
    }
}
