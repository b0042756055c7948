use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Program, Statement},
    error::Diagnostic,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{AFTER_STATEMENT, expect, peek_kind, skip_separators, synchronize, unexpected},
        },
    },
};

/// Parses a single statement.
///
/// A statement is either an assignment (`name = expression`) or an expression
/// used as a statement. Telling them apart needs two tokens of lookahead: an
/// identifier followed by `=` starts an assignment, any other identifier starts
/// an expression.
///
/// Grammar:
/// ```text
///     statement := IDENTIFIER "=" expression
///                | expression
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    Ok(Statement::Expression(parse_expression(tokens)?))
}

/// Parses an assignment if one starts at the current position.
///
/// # Returns
/// - `Ok(Some(statement))` if an assignment was parsed,
/// - `Ok(None)` if the tokens do not start an assignment; nothing is consumed
///   in that case.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();
    let target = match lookahead.next() {
        Some(token) if token.kind == TokenKind::Identifier => token,
        _ => return Ok(None),
    };
    if !matches!(lookahead.next(), Some(token) if token.kind == TokenKind::Assign) {
        return Ok(None);
    }

    tokens.next();
    expect(tokens, TokenKind::Assign, &["'='"])?;
    let value = parse_expression(tokens)?;

    Ok(Some(Statement::Assignment { target: target.lexeme.clone(),
                                    value,
                                    position: target.position }))
}

/// Parses one statement and the separator (or end of input) that closes it.
fn parse_terminated_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let statement = parse_statement(tokens)?;

    match peek_kind(tokens) {
        TokenKind::EndOfInput => Ok(statement),
        kind if kind.is_separator() => {
            tokens.next();
            Ok(statement)
        },
        _ => Err(unexpected(tokens.peek().copied(), AFTER_STATEMENT)),
    }
}

/// Parses a whole program: statements separated by `;` or line breaks.
///
/// A statement that fails to parse contributes one diagnostic; the parser then
/// skips to the next separator and carries on, so every broken statement is
/// reported in one run. No program is returned unless every statement parsed.
///
/// Grammar:
/// ```text
///     program := sep* (statement (sep+ statement)*)? sep* EOI
///     sep     := ";" | NEWLINE
/// ```
/// # Errors
/// Returns every diagnostic collected, in source order.
pub fn parse_statements<'a, I>(tokens: &mut Peekable<I>) -> Result<Program, Vec<Diagnostic>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut statements = Vec::new();
    let mut diagnostics = Vec::new();

    loop {
        skip_separators(tokens);
        if peek_kind(tokens) == TokenKind::EndOfInput {
            break;
        }

        match parse_terminated_statement(tokens) {
            Ok(statement) => statements.push(statement),
            Err(diagnostic) => {
                debug!(%diagnostic, "skipping to the next statement");
                diagnostics.push(diagnostic);
                synchronize(tokens);
            },
        }
    }

    if diagnostics.is_empty() {
        Ok(Program { statements })
    } else {
        Err(diagnostics)
    }
}
