use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::{Diagnostic, DiagnosticKind},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{MAX_NESTING, ParseResult, Subtree, parse_nested},
            utils::{AFTER_GROUPED, FACTOR_START, checked_height, expect, too_deep, unexpected},
        },
    },
};

/// Parses a factor, including any prefix negation.
///
/// Negation is right-associative and binds tighter than every binary
/// operator, so `-2 + 3` is `(-2) + 3` and `- -x` is `-(-x)`.
///
/// Grammar:
/// ```text
///     factor := "-" factor
///             | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Open parentheses and prefix minuses around this factor.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(token) = tokens.peek()
       && token.kind == TokenKind::Minus
    {
        let operator = *token;
        if depth >= MAX_NESTING {
            return Err(too_deep(operator, MAX_NESTING));
        }
        tokens.next();
        let operand = parse_unary(tokens, depth + 1)?;
        let height = checked_height(operand.height + 1, operator)?;
        Ok(Subtree { expr: Expr::UnaryOp { op: UnaryOperator::Negate,
                                           operand: Box::new(operand.expr),
                                           position: operator.position },
                     height })
    } else {
        parse_primary(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are numeric literals, identifiers, and parenthesized
/// expressions. Reserved keywords are rejected here like any other token that
/// cannot start a factor.
///
/// Grammar:
/// ```text
///     primary := INT | FLOAT | IDENTIFIER | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Open parentheses and prefix minuses around this expression.
///
/// # Returns
/// The parsed primary [`Expr`].
///
/// # Errors
/// - `SyntaxError` if the token cannot start a factor.
/// - `UnexpectedEndOfInput` if the tokens run out.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = match tokens.peek() {
        Some(token) => *token,
        None => return Err(unexpected(None, FACTOR_START)),
    };

    match token.kind {
        TokenKind::Int | TokenKind::Float => {
            tokens.next();
            parse_literal(token).map(Subtree::leaf)
        },
        TokenKind::Identifier => {
            tokens.next();
            Ok(Subtree::leaf(Expr::Identifier { name:     token.lexeme.clone(),
                                                position: token.position, }))
        },
        TokenKind::LParen => parse_grouping(tokens, depth),
        _ => Err(unexpected(Some(token), FACTOR_START)),
    }
}

/// Converts a literal token into a literal node.
///
/// The lexer leaves `value` empty for literals that do not fit an `i64` (or a
/// finite `f64`); those are rejected here.
fn parse_literal(token: &Token) -> ParseResult<Expr> {
    match token.value {
        Some(LiteralValue::Int(value)) => Ok(Expr::IntLiteral { value,
                                                                position: token.position }),
        Some(LiteralValue::Float(value)) => Ok(Expr::FloatLiteral { value,
                                                                    position: token.position }),
        None => {
            let kind = DiagnosticKind::SyntaxError { found:    format!("{} that does not fit in 64 bits",
                                                                      token.describe()),
                                                     expected: vec![format!("{} within range",
                                                                            token.kind)], };
            Err(Diagnostic::at(kind, token.position))
        },
    }
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// The grouping leaves no node of its own; it only overrides precedence.
///
/// # Errors
/// Returns `UnexpectedEndOfInput` for an unmatched `(` at the end of the input,
/// and `SyntaxError` for any other token where `)` belongs or for a `(` past
/// [`MAX_NESTING`].
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a Token> + Clone
{
    let open = expect(tokens, TokenKind::LParen, &["'('"])?;
    if depth >= MAX_NESTING {
        return Err(too_deep(open, MAX_NESTING));
    }
    let inner = parse_nested(tokens, depth + 1)?;
    expect(tokens, TokenKind::RParen, AFTER_GROUPED)?;
    Ok(inner)
}
