use thiserror::Error;

use crate::{ast::Position, interpreter::semantic::types::Type};

/// The category of a [`Diagnostic`], with the data that identifies the fault.
///
/// The `Display` output of a kind is the diagnostic's human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    /// The lexer met a character that starts no token.
    #[error("unrecognized character {character:?}")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
    },
    /// The parser met a token that cannot begin or continue the current
    /// production.
    #[error("unexpected {found}, expected {}", .expected.join(" or "))]
    SyntaxError {
        /// Description of the token that was found.
        found:    String,
        /// The productions that would have been accepted here.
        expected: Vec<String>,
    },
    /// The input ended while a production was still open, e.g. an unmatched
    /// `(`.
    #[error("unexpected end of input, expected {}", .expected.join(" or "))]
    UnexpectedEndOfInput {
        /// The productions that would have been accepted here.
        expected: Vec<String>,
    },
    /// An identifier was used without any assignment declaring it.
    #[error("undefined variable `{name}`")]
    UndefinedVariable {
        /// Name of the variable.
        name: String,
    },
    /// The operands of a binary operation have different types.
    #[error("type mismatch: cannot combine {left} with {right}")]
    TypeMismatch {
        /// Type of the left operand.
        left:  Type,
        /// Type of the right operand.
        right: Type,
    },
}

/// A structured error record surfaced by one stage of the pipeline.
///
/// Diagnostics are returned to the caller of the stage that produced them and
/// never abort the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{message}", location_prefix(.position.as_ref()))]
pub struct Diagnostic {
    /// What went wrong.
    pub kind:     DiagnosticKind,
    /// Human-readable description, derived from `kind`.
    pub message:  String,
    /// Where it went wrong, when known.
    pub position: Option<Position>,
}

impl Diagnostic {
    /// Creates a diagnostic whose message is rendered from `kind`.
    #[must_use]
    pub fn new(kind: DiagnosticKind, position: Option<Position>) -> Self {
        let message = kind.to_string();
        Self { kind,
               message,
               position }
    }

    /// Creates a diagnostic anchored at `position`.
    #[must_use]
    pub fn at(kind: DiagnosticKind, position: Position) -> Self {
        Self::new(kind, Some(position))
    }

    /// Whether this diagnostic came from the lexer.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self.kind, DiagnosticKind::UnrecognizedCharacter { .. })
    }

    /// Whether this diagnostic came from the parser.
    #[must_use]
    pub const fn is_syntactic(&self) -> bool {
        matches!(self.kind,
                 DiagnosticKind::SyntaxError { .. } | DiagnosticKind::UnexpectedEndOfInput { .. })
    }

    /// Whether this diagnostic came from the semantic analyzer.
    #[must_use]
    pub const fn is_semantic(&self) -> bool {
        matches!(self.kind,
                 DiagnosticKind::UndefinedVariable { .. } | DiagnosticKind::TypeMismatch { .. })
    }
}

fn location_prefix(position: Option<&Position>) -> String {
    position.map_or_else(String::new, |p| {
                format!("Error on line {}, column {}: ", p.line, p.column)
            })
}
