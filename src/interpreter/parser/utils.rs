use std::iter::Peekable;

use crate::{
    error::{Diagnostic, DiagnosticKind},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_HEIGHT, ParseResult},
    },
};

/// Everything that may start a factor.
pub(in crate::interpreter::parser) const FACTOR_START: &[&str] =
    &["integer literal", "float literal", "identifier", "'('", "'-'"];

/// Everything that may follow a complete expression inside parentheses.
pub(in crate::interpreter::parser) const AFTER_GROUPED: &[&str] =
    &["'+'", "'-'", "'*'", "'/'", "')'"];

/// Everything that may follow a complete statement.
pub(in crate::interpreter::parser) const AFTER_STATEMENT: &[&str] =
    &["'+'", "'-'", "'*'", "'/'", "';'", "newline", "end of input"];

/// Everything that may follow a complete standalone expression.
pub(in crate::interpreter::parser) const AFTER_EXPRESSION: &[&str] =
    &["'+'", "'-'", "'*'", "'/'", "end of input"];

/// Returns the kind of the next token without consuming it.
///
/// A token stream that stops without an `EndOfInput` token (a lexer halted on
/// an error) reads as `EndOfInput` from here on.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>) -> TokenKind
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map_or(TokenKind::EndOfInput, |t| t.kind)
}

/// Builds the diagnostic for a token that does not fit the current production.
///
/// End of input gets its own kind so an unmatched `(` reads as
/// `UnexpectedEndOfInput` rather than a generic syntax error.
///
/// # Parameters
/// - `found`: The offending token, or `None` when the stream ran out.
/// - `expected`: Descriptions of the tokens that would have been accepted.
///
/// # Returns
/// A `SyntaxError` or `UnexpectedEndOfInput` diagnostic.
pub(in crate::interpreter::parser) fn unexpected(found: Option<&Token>,
                                                 expected: &[&str])
                                                 -> Diagnostic {
    let expected = expected.iter().map(ToString::to_string).collect();

    match found {
        Some(token) if token.kind != TokenKind::EndOfInput => {
            Diagnostic::at(DiagnosticKind::SyntaxError { found: token.describe(),
                                                         expected },
                           token.position)
        },
        Some(token) => {
            Diagnostic::at(DiagnosticKind::UnexpectedEndOfInput { expected }, token.position)
        },
        None => Diagnostic::new(DiagnosticKind::UnexpectedEndOfInput { expected }, None),
    }
}

/// Builds the diagnostic for an expression that nests past `limit` at
/// `token`.
pub(in crate::interpreter::parser) fn too_deep(token: &Token, limit: usize) -> Diagnostic {
    Diagnostic::at(DiagnosticKind::SyntaxError { found:    format!("{} past the nesting limit",
                                                                   token.describe()),
                                                 expected: vec![format!("at most {limit} levels of nesting")], },
                   token.position)
}

/// Accepts `height` for a node built at `token` unless it exceeds
/// [`MAX_HEIGHT`].
pub(in crate::interpreter::parser) fn checked_height(height: usize,
                                                     token: &Token)
                                                     -> ParseResult<usize> {
    if height > MAX_HEIGHT {
        Err(too_deep(token, MAX_HEIGHT))
    } else {
        Ok(height)
    }
}

/// Consumes the next token if it has the given kind.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `kind`: The required token kind.
/// - `expected`: Descriptions used in the diagnostic when the token is missing.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns a `SyntaxError` for any other token, or `UnexpectedEndOfInput` when
/// the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    expected: &[&str])
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) if token.kind == kind => {
            let token = *token;
            tokens.next();
            Ok(token)
        },
        found => Err(unexpected(found.copied(), expected)),
    }
}

/// Skips any run of statement separators.
pub(in crate::interpreter::parser) fn skip_separators<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while peek_kind(tokens).is_separator() {
        tokens.next();
    }
}

/// Skips the remainder of a broken statement, up to and including the next
/// separator.
///
/// Stops in front of `EndOfInput` so the caller can still see it.
pub(in crate::interpreter::parser) fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    loop {
        match peek_kind(tokens) {
            TokenKind::EndOfInput => break,
            kind if kind.is_separator() => {
                tokens.next();
                break;
            },
            _ => {
                tokens.next();
            },
        }
    }
}
