use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, Subtree},
            unary::parse_unary,
            utils::checked_height,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `a - b - c`
/// becomes `(a - b) - c`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Open parentheses and prefix minuses around this expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub(crate) fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let operator = *token;
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            left = combine(left, op, right, operator)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`. Division by a literal zero
/// is accepted here; it only fails once evaluated.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Open parentheses and prefix minuses around this expression.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub(crate) fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                          depth: usize)
                                          -> ParseResult<Subtree>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_unary(tokens, depth)?;
    while let Some(token) = tokens.peek() {
        if let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let operator = *token;
            tokens.next();
            let right = parse_unary(tokens, depth)?;
            left = combine(left, op, right, operator)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Joins two operands under `operator`, positioned at the operator token.
fn combine(left: Subtree,
           op: BinaryOperator,
           right: Subtree,
           operator: &Token)
           -> ParseResult<Subtree> {
    let height = checked_height(left.height.max(right.height) + 1, operator)?;
    Ok(Subtree { expr: Expr::BinaryOp { left: Box::new(left.expr),
                                        op,
                                        right: Box::new(right.expr),
                                        position: operator.position },
                 height })
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators.
///
/// # Example
/// ```
/// use foxl::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Times => Some(BinaryOperator::Mul),
        TokenKind::Divide => Some(BinaryOperator::Div),
        _ => None,
    }
}
