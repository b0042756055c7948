use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::Diagnostic,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, Diagnostic>;

/// Deepest run of open parentheses and prefix minuses the parser descends
/// into.
pub const MAX_NESTING: usize = 256;

/// Tallest expression tree the parser builds.
///
/// Later stages walk trees recursively, so this bounds their recursion too.
pub const MAX_HEIGHT: usize = 1024;

/// An expression together with the height of its tree.
pub(crate) struct Subtree {
    pub(crate) expr:   Expr,
    pub(crate) height: usize,
}

impl Subtree {
    pub(crate) const fn leaf(expr: Expr) -> Self {
        Self { expr, height: 1 }
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the
///   expression.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Besides grammar errors, a `SyntaxError` for expressions nested past
/// [`MAX_NESTING`] or taller than [`MAX_HEIGHT`].
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_nested(tokens, 0).map(|subtree| subtree.expr)
}

/// Parses an expression that sits inside `depth` open parentheses and
/// prefix minuses.
pub(crate) fn parse_nested<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_additive(tokens, depth)
}
