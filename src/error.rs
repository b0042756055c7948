use thiserror::Error;

/// Structured diagnostics.
///
/// Defines the record every pipeline stage uses to report malformed input:
/// unrecognized characters, syntax errors, premature end of input, undefined
/// variables, and type mismatches. Each carries a message and an optional
/// source position.
pub mod diagnostic;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero or integer overflow.
pub mod runtime_error;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use runtime_error::RuntimeError;

/// Any failure of the end-to-end pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The lexer, parser, or analyzer rejected the source.
    #[error("{}", render_diagnostics(.0))]
    Diagnostics(Vec<Diagnostic>),
    /// The source was valid but failed while being evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// The diagnostics carried by this error, empty for runtime failures.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Diagnostics(diagnostics) => diagnostics,
            Self::Runtime(_) => &[],
        }
    }
}

impl From<Vec<Diagnostic>> for Error {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self::Diagnostics(diagnostics)
    }
}

fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics.iter()
               .map(ToString::to_string)
               .collect::<Vec<_>>()
               .join("\n")
}
