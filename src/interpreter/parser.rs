use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::Diagnostic,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::utils::{AFTER_EXPRESSION, peek_kind, skip_separators, unexpected},
    },
};

/// Additive (lowest precedence) binary operators.
///
/// Left-folds `+` and `-` over terms and `*` and `/` over factors, which
/// encodes both precedence levels in the call structure.
pub mod binary;
/// Shared parser result type and the expression entry point.
pub mod core;
/// Statement and program parsing.
///
/// Distinguishes assignments from expression statements and recovers from a
/// broken statement at the next separator.
pub mod statement;
/// Prefix negation and primary expressions.
///
/// Handles literals, identifiers, parenthesized groups, and unary minus.
pub mod unary;
/// Lookahead, expectation, and error-recovery helpers.
pub mod utils;

/// Parses a token sequence holding exactly one expression.
///
/// This is the arithmetic entry point: the whole input must be a single
/// expression, optionally followed by separators, then end of input.
///
/// # Errors
/// Returns the diagnostic of the first token that breaks the grammar. No node
/// is returned in that case.
///
/// # Example
/// ```
/// use foxl::{
///     config::Config,
///     interpreter::{lexer::tokenize_all, parser::parse},
/// };
///
/// let (tokens, _) = tokenize_all("10 - 2 - 3", &Config::default());
/// let expr = parse(&tokens).unwrap();
/// assert_eq!(expr.to_string(), "((10 - 2) - 3)");
/// ```
pub fn parse(tokens: &[Token]) -> Result<Expr, Vec<Diagnostic>> {
    let mut iter = tokens.iter().peekable();

    let expr = self::core::parse_expression(&mut iter).map_err(|d| vec![d])?;
    skip_separators(&mut iter);
    if peek_kind(&mut iter) != TokenKind::EndOfInput {
        return Err(vec![unexpected(iter.peek().copied(), AFTER_EXPRESSION)]);
    }

    debug!(%expr, "parsed expression");
    Ok(expr)
}

/// Parses a token sequence into a [`Program`].
///
/// # Errors
/// Returns one diagnostic per statement that failed to parse.
///
/// # Example
/// ```
/// use foxl::{
///     ast::Statement,
///     config::Config,
///     interpreter::{lexer::tokenize_all, parser::parse_program},
/// };
///
/// let (tokens, _) = tokenize_all("x = 1; y = x * 2\nx + y", &Config::default());
/// let program = parse_program(&tokens).unwrap();
/// assert_eq!(program.statements.len(), 3);
/// assert!(matches!(program.statements[2], Statement::Expression(_)));
/// ```
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_program(tokens: &[Token]) -> Result<Program, Vec<Diagnostic>> {
    let program = statement::parse_statements(&mut tokens.iter().peekable())?;
    debug!(statements = program.statements.len(), "parsed program");
    Ok(program)
}
