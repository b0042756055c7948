//! # foxl
//!
//! foxl is the front end of a minimal expression language written in Rust.
//! It tokenizes source text, parses it with standard arithmetic precedence,
//! type-checks variable declarations, and can evaluate the result.
//!
//! Every entry point builds its own lexer, parser, analyzer, and evaluator, so
//! independent sources can be processed on independent threads.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    config::Config,
    error::{Diagnostic, Error},
    interpreter::{
        evaluator::core::Context,
        lexer::{TokenKind, tokenize_all},
        parser::{parse, parse_program},
        semantic::{SymbolTable, analyze},
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of source code as a tree, together with source
/// positions. The tree is built by the parser and read by the semantic
/// analyzer and the evaluator.
pub mod ast;
/// Pipeline options.
///
/// Holds the switches that change how a stage behaves, such as whether the
/// lexer stops at its first error.
pub mod config;
/// Provides unified error types for every stage.
///
/// This module defines the `Diagnostic` record returned by the lexer, parser,
/// and analyzer, the `RuntimeError` raised by the evaluator, and the `Error`
/// enum that wraps both for the end-to-end entry points.
///
/// # Responsibilities
/// - Names every failure mode with the data needed to report it.
/// - Attaches line and column numbers for context.
/// - Integrates with `std::error::Error`.
pub mod error;
/// Orchestrates the stages of the pipeline.
///
/// This module ties together lexing, parsing, semantic analysis, evaluation,
/// and value representation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, analyzer, evaluator.
/// - Manages the flow of data and diagnostics between phases.
pub mod interpreter;

/// A program that passed every static check.
#[derive(Debug, Clone, PartialEq)]
pub struct Checked {
    /// The parsed statements.
    pub program: Program,
    /// The type of every declared variable.
    pub symbols: SymbolTable,
}

/// Lexes, parses, and type-checks `source`.
///
/// In recovery mode lexical and syntax diagnostics are reported together. A
/// lexer halted by [`Config::stop_on_lex_error`] ends the pipeline with its
/// one diagnostic. Semantic analysis only runs on a program that lexed and
/// parsed cleanly.
///
/// # Errors
/// Returns every diagnostic reported by the first stage that failed (lexing
/// and parsing count as one stage in recovery mode).
///
/// # Examples
/// ```
/// use foxl::{check, config::Config, interpreter::semantic::Type};
///
/// let checked = check("x = 1; y = x + 1", &Config::default()).unwrap();
/// assert_eq!(checked.symbols.lookup("y"), Some(Type::Int));
///
/// // 'x' is never declared.
/// assert!(check("y = x + 1", &Config::default()).is_err());
/// ```
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn check(source: &str, config: &Config) -> Result<Checked, Vec<Diagnostic>> {
    let (tokens, mut diagnostics) = tokenize_all(source, config);
    if tokens.last().is_none_or(|t| t.kind != TokenKind::EndOfInput) {
        return Err(diagnostics);
    }

    match parse_program(&tokens) {
        Ok(program) if diagnostics.is_empty() => {
            let symbols = analyze(&program).map_err(|failure| failure.diagnostics)?;
            Ok(Checked { program, symbols })
        },
        Ok(_) => Err(diagnostics),
        Err(syntax) => {
            diagnostics.extend(syntax);
            Err(diagnostics)
        },
    }
}

/// Checks and then runs `source`.
///
/// # Returns
/// The value of the last statement, or `None` for a program without
/// statements.
///
/// # Errors
/// Returns [`Error::Diagnostics`] if any static check fails and
/// [`Error::Runtime`] if evaluation fails.
///
/// # Examples
/// ```
/// use foxl::{config::Config, evaluate, interpreter::value::Value};
///
/// let value = evaluate("width = 3\nheight = 4\nwidth * height", &Config::default());
/// assert_eq!(value.unwrap(), Some(Value::Int(12)));
///
/// // Type-correct, but fails once evaluated.
/// assert!(evaluate("x = 1 / 0", &Config::default()).is_err());
/// ```
pub fn evaluate(source: &str, config: &Config) -> Result<Option<Value>, Error> {
    let checked = check(source, config)?;
    Ok(Context::new().run(&checked.program)?)
}

/// Evaluates a single arithmetic expression.
///
/// This path skips the symbol table: the source must be one expression, and
/// any identifier in it fails at evaluation as an unknown variable.
///
/// # Errors
/// Returns [`Error::Diagnostics`] for lexical or syntax errors and
/// [`Error::Runtime`] for evaluation failures.
///
/// # Examples
/// ```
/// use foxl::{config::Config, evaluate_expression, interpreter::value::Value};
///
/// let config = Config::default();
/// assert_eq!(evaluate_expression("2 + 3 * 4", &config).unwrap(), Value::Int(14));
/// assert_eq!(evaluate_expression("(2 + 3) * 4", &config).unwrap(), Value::Int(20));
/// assert_eq!(evaluate_expression("-(2 + 3)", &config).unwrap(), Value::Int(-5));
/// ```
pub fn evaluate_expression(source: &str, config: &Config) -> Result<Value, Error> {
    let (tokens, mut diagnostics) = tokenize_all(source, config);
    if !diagnostics.is_empty() {
        if let Err(syntax) = parse(&tokens)
           && tokens.last().is_some_and(|t| t.kind == TokenKind::EndOfInput)
        {
            diagnostics.extend(syntax);
        }
        return Err(Error::Diagnostics(diagnostics));
    }

    let expr = parse(&tokens)?;
    Ok(Context::new().eval(&expr)?)
}
