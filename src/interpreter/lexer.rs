use std::{fmt, ops::Range};

use logos::Logos;
use tracing::trace;

use crate::{
    ast::{LiteralValue, Position},
    config::Config,
    error::{Diagnostic, DiagnosticKind},
};

/// The category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer literal such as `42`.
    Int,
    /// Floating-point literal such as `3.14`.
    Float,
    /// Variable name such as `x` or `total_2`.
    Identifier,
    /// `for`
    For,
    /// `else`
    Else,
    /// `if`
    If,
    /// `while`
    While,
    /// `print`
    Print,
    /// `in`
    In,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `=`
    Assign,
    /// `;`
    Semicolon,
    /// A line break; separates statements like `;` does.
    NewLine,
    /// Always the last token of a completed scan.
    EndOfInput,
}

impl TokenKind {
    /// Whether this kind is one of the reserved keywords.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self, Self::For | Self::Else | Self::If | Self::While | Self::Print | Self::In)
    }

    /// Whether this kind ends a statement.
    #[must_use]
    pub const fn is_separator(self) -> bool {
        matches!(self, Self::Semicolon | Self::NewLine)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "integer literal",
            Self::Float => "float literal",
            Self::Identifier => "identifier",
            Self::For => "`for`",
            Self::Else => "`else`",
            Self::If => "`if`",
            Self::While => "`while`",
            Self::Print => "`print`",
            Self::In => "`in`",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Times => "'*'",
            Self::Divide => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Assign => "'='",
            Self::Semicolon => "';'",
            Self::NewLine => "newline",
            Self::EndOfInput => "end of input",
        };
        write!(f, "{name}")
    }
}

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer. It
/// remembers the exact text it was cut from, so joining the lexemes of a scan
/// with whitespace and scanning again reproduces the same kinds and lexemes.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// The raw source text of the token; empty for [`TokenKind::EndOfInput`].
    pub lexeme:   String,
    /// The numeric value of an `Int` or `Float` token.
    ///
    /// `None` for every other kind, and for literals that do not fit an `i64`
    /// or a finite `f64`.
    pub value:    Option<LiteralValue>,
    /// Where the token starts.
    pub position: Position,
    /// Byte range of the lexeme in the source.
    pub span:     Range<usize>,
}

impl Token {
    /// Describes the token for diagnostics, e.g. ``identifier `x` ``.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Int | TokenKind::Float | TokenKind::Identifier => {
                format!("{} `{}`", self.kind, self.lexeme)
            },
            kind => kind.to_string(),
        }
    }
}

/// Patterns recognized by the scanner.
///
/// Keywords are declared with `token` so they win over the identifier regex
/// when both match the same text.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LexerExtras)]
enum RawToken {
    #[regex(r"[0-9]+\.[0-9]+")]
    Float,
    #[regex(r"[0-9]+")]
    Int,
    #[token("for")]
    For,
    #[token("else")]
    Else,
    #[token("if")]
    If,
    #[token("while")]
    While,
    #[token("print")]
    Print,
    #[token("in")]
    In,
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Identifier,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Times,
    #[token("/")]
    Divide,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("=")]
    Assign,
    #[token(";")]
    Semicolon,
    #[token("\n")]
    NewLine,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Float => Self::Float,
            RawToken::Int => Self::Int,
            RawToken::For => Self::For,
            RawToken::Else => Self::Else,
            RawToken::If => Self::If,
            RawToken::While => Self::While,
            RawToken::Print => Self::Print,
            RawToken::In => Self::In,
            RawToken::Identifier => Self::Identifier,
            RawToken::Plus => Self::Plus,
            RawToken::Minus => Self::Minus,
            RawToken::Times => Self::Times,
            RawToken::Divide => Self::Divide,
            RawToken::LParen => Self::LParen,
            RawToken::RParen => Self::RParen,
            RawToken::Assign => Self::Assign,
            RawToken::Semicolon => Self::Semicolon,
            RawToken::NewLine => Self::NewLine,
            RawToken::Comment | RawToken::Ignored => unreachable!("skipped by the scanner"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts, so every token
/// can be given a line and column.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// A lazy scan over one source text.
///
/// Yields `Ok(token)` for every recognized token and `Err(diagnostic)` for
/// every unrecognized character. A completed scan ends with an
/// [`TokenKind::EndOfInput`] token; a scan configured with
/// [`Config::stop_on_lex_error`] ends right after its first diagnostic
/// instead.
pub struct Tokens<'src> {
    lexer:         logos::Lexer<'src, RawToken>,
    stop_on_error: bool,
    finished:      bool,
}

impl<'src> Tokens<'src> {
    fn new(source: &'src str, config: &Config) -> Self {
        Self { lexer:         RawToken::lexer_with_extras(source, LexerExtras::default()),
               stop_on_error: config.stop_on_lex_error,
               finished:      false, }
    }

    /// Position of the byte offset `offset`, which must lie on the current
    /// line.
    fn position_of(&self, offset: usize) -> Position {
        let extras = &self.lexer.extras;
        let column = self.lexer
                         .source()
                         .get(extras.line_start..offset)
                         .map_or(0, |line| line.chars().count())
                     + 1;
        Position::new(extras.line, column)
    }

    fn make_token(&mut self, raw: RawToken) -> Token {
        let span = self.lexer.span();
        let lexeme = self.lexer.slice();
        let position = self.position_of(span.start);
        let value = match raw {
            RawToken::Int => lexeme.parse::<i64>().ok().map(LiteralValue::Int),
            RawToken::Float => {
                lexeme.parse::<f64>()
                      .ok()
                      .filter(|v| v.is_finite())
                      .map(LiteralValue::Float)
            },
            _ => None,
        };
        let token = Token { kind: raw.into(),
                            lexeme: lexeme.to_string(),
                            value,
                            position,
                            span: span.clone() };

        if raw == RawToken::NewLine {
            self.lexer.extras.line += 1;
            self.lexer.extras.line_start = span.end;
        }
        token
    }

    fn end_of_input(&self) -> Token {
        let end = self.lexer.source().len();
        Token { kind:     TokenKind::EndOfInput,
                lexeme:   String::new(),
                value:    None,
                position: self.position_of(end),
                span:     end..end, }
    }

    fn unrecognized(&self) -> Diagnostic {
        let span = self.lexer.span();
        let character = self.lexer.slice().chars().next().unwrap_or('\u{FFFD}');
        Diagnostic::at(DiagnosticKind::UnrecognizedCharacter { character },
                       self.position_of(span.start))
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, Diagnostic>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.lexer.next() {
            Some(Ok(raw)) => {
                let token = self.make_token(raw);
                trace!(kind = ?token.kind, lexeme = %token.lexeme, at = %token.position, "token");
                Some(Ok(token))
            },
            Some(Err(())) => {
                let diagnostic = self.unrecognized();
                trace!(%diagnostic, "lexical error");
                if self.stop_on_error {
                    self.finished = true;
                }
                Some(Err(diagnostic))
            },
            None => {
                self.finished = true;
                Some(Ok(self.end_of_input()))
            },
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Starts a lazy scan of `source`.
///
/// Nothing is read until the returned iterator is advanced. Each call starts
/// from a fresh lexer, so scans of different texts never share state.
///
/// # Example
/// ```
/// use foxl::{
///     config::Config,
///     interpreter::lexer::{TokenKind, tokenize},
/// };
///
/// let kinds: Vec<TokenKind> = tokenize("x = 2.5", &Config::default()).filter_map(Result::ok)
///                                                                     .map(|t| t.kind)
///                                                                     .collect();
/// assert_eq!(kinds,
///            [TokenKind::Identifier, TokenKind::Assign, TokenKind::Float, TokenKind::EndOfInput]);
/// ```
#[must_use]
pub fn tokenize<'src>(source: &'src str, config: &Config) -> Tokens<'src> {
    Tokens::new(source, config)
}

/// Scans all of `source`, separating tokens from diagnostics.
///
/// In recovery mode the token list always ends with
/// [`TokenKind::EndOfInput`]; when the scan was stopped by an error it does
/// not.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize_all(source: &str, config: &Config) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();

    for item in tokenize(source, config) {
        match item {
            Ok(token) => tokens.push(token),
            Err(diagnostic) => diagnostics.push(diagnostic),
        }
    }

    tracing::debug!(tokens = tokens.len(), errors = diagnostics.len(), "tokenized source");
    (tokens, diagnostics)
}
