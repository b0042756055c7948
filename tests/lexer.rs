use foxl::{
    ast::{LiteralValue, Position},
    config::Config,
    error::DiagnosticKind,
    interpreter::lexer::{Token, TokenKind, tokenize, tokenize_all},
};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn kinds_and_lexemes(tokens: &[Token]) -> Vec<(TokenKind, String)> {
    tokens.iter().map(|t| (t.kind, t.lexeme.clone())).collect()
}

#[test]
fn numbers_operators_and_parentheses() {
    let (tokens, diagnostics) = tokenize_all("(2.75 + 42) * 7 / 2 - 1", &Config::default());

    assert!(diagnostics.is_empty());
    assert_eq!(kinds(&tokens),
               [TokenKind::LParen,
                TokenKind::Float,
                TokenKind::Plus,
                TokenKind::Int,
                TokenKind::RParen,
                TokenKind::Times,
                TokenKind::Int,
                TokenKind::Divide,
                TokenKind::Int,
                TokenKind::Minus,
                TokenKind::Int,
                TokenKind::EndOfInput]);
    assert_eq!(tokens[1].value, Some(LiteralValue::Float(2.75)));
    assert_eq!(tokens[3].value, Some(LiteralValue::Int(42)));
    assert_eq!(tokens[2].value, None);
}

#[test]
fn keywords_are_reserved_but_prefixes_are_identifiers() {
    let (tokens, diagnostics) =
        tokenize_all("for else if while print in format iffy total_2", &Config::default());

    assert!(diagnostics.is_empty());
    assert_eq!(kinds(&tokens),
               [TokenKind::For,
                TokenKind::Else,
                TokenKind::If,
                TokenKind::While,
                TokenKind::Print,
                TokenKind::In,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::EndOfInput]);
    assert!(tokens[..6].iter().all(|t| t.kind.is_keyword()));
    assert_eq!(tokens[8].lexeme, "total_2");
}

#[test]
fn unrecognized_character_is_reported_and_skipped() {
    let (tokens, diagnostics) = tokenize_all("1 @ 2", &Config::default());

    assert_eq!(kinds(&tokens), [TokenKind::Int, TokenKind::Int, TokenKind::EndOfInput]);
    assert_eq!(tokens[0].lexeme, "1");
    assert_eq!(tokens[1].lexeme, "2");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind,
               DiagnosticKind::UnrecognizedCharacter { character: '@' });
    assert_eq!(diagnostics[0].position, Some(Position::new(1, 3)));
    assert!(diagnostics[0].is_lexical());
}

#[test]
fn stop_on_lex_error_ends_the_scan() {
    let config = Config::default().with_stop_on_lex_error(true);
    let items: Vec<_> = tokenize("1 @ 2 $ 3", &config).collect();

    assert_eq!(items.len(), 2);
    assert!(matches!(&items[0], Ok(t) if t.kind == TokenKind::Int));
    assert!(matches!(&items[1],
                     Err(d) if d.kind == DiagnosticKind::UnrecognizedCharacter { character: '@' }));

    let (tokens, diagnostics) = tokenize_all("1 @ 2 $ 3", &config);
    assert_eq!(kinds(&tokens), [TokenKind::Int]);
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn recovery_mode_reports_every_bad_character() {
    let (tokens, diagnostics) = tokenize_all("1 @ 2 $ 3", &Config::default());

    assert_eq!(kinds(&tokens),
               [TokenKind::Int, TokenKind::Int, TokenKind::Int, TokenKind::EndOfInput]);
    let characters: Vec<_> = diagnostics.iter()
                                        .map(|d| match d.kind {
                                            DiagnosticKind::UnrecognizedCharacter { character } => {
                                                character
                                            },
                                            _ => panic!("unexpected diagnostic {d}"),
                                        })
                                        .collect();
    assert_eq!(characters, ['@', '$']);
}

#[test]
fn identifiers_must_start_with_a_letter() {
    let (tokens, diagnostics) = tokenize_all("_x", &Config::default());

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind,
               DiagnosticKind::UnrecognizedCharacter { character: '_' });
    assert_eq!(kinds(&tokens), [TokenKind::Identifier, TokenKind::EndOfInput]);
    assert_eq!(tokens[0].lexeme, "x");
}

#[test]
fn positions_track_lines_and_columns() {
    let (tokens, _) = tokenize_all("x = 1\n  y", &Config::default());

    let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();
    assert_eq!(positions,
               [Position::new(1, 1),
                Position::new(1, 3),
                Position::new(1, 5),
                Position::new(1, 6),
                Position::new(2, 3),
                Position::new(2, 4)]);
    assert_eq!(tokens[3].kind, TokenKind::NewLine);
    assert_eq!(tokens[4].span, 8..9);
}

#[test]
fn columns_count_characters_not_bytes() {
    let (_, diagnostics) = tokenize_all("é + ü", &Config::default());

    let columns: Vec<_> = diagnostics.iter()
                                     .filter_map(|d| d.position.map(|p| p.column))
                                     .collect();
    assert_eq!(columns, [1, 5]);
}

#[test]
fn comments_and_whitespace_produce_no_tokens() {
    let (tokens, diagnostics) =
        tokenize_all("1 // the first\n\t3 // trailing", &Config::default());

    assert!(diagnostics.is_empty());
    assert_eq!(kinds(&tokens),
               [TokenKind::Int, TokenKind::NewLine, TokenKind::Int, TokenKind::EndOfInput]);
}

#[test]
fn empty_input_is_just_end_of_input() {
    let (tokens, diagnostics) = tokenize_all("   ", &Config::default());

    assert!(diagnostics.is_empty());
    assert_eq!(kinds(&tokens), [TokenKind::EndOfInput]);
    assert_eq!(tokens[0].position, Position::new(1, 4));
    assert_eq!(tokens[0].lexeme, "");
}

#[test]
fn oversized_integer_keeps_its_lexeme_but_has_no_value() {
    let (tokens, diagnostics) = tokenize_all("99999999999999999999", &Config::default());

    assert!(diagnostics.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].lexeme, "99999999999999999999");
    assert_eq!(tokens[0].value, None);
}

#[test]
fn tokenization_is_lazy_and_restartable() {
    let config = Config::default();

    let first: Vec<_> = tokenize("a + b + c + d", &config).take(2)
                                                          .filter_map(Result::ok)
                                                          .map(|t| t.lexeme)
                                                          .collect();
    assert_eq!(first, ["a", "+"]);

    let again: Vec<_> = tokenize("a + b + c + d", &config).filter_map(Result::ok)
                                                          .map(|t| t.lexeme)
                                                          .collect();
    assert_eq!(again.len(), 8);
    assert_eq!(again[0], "a");
}

#[test]
fn rejoined_lexemes_tokenize_the_same() {
    let config = Config::default();
    let sources = ["2 + 3 * 4",
                   "(2+3)*4",
                   "x = 1; y = 2.0; z = x + y",
                   "total_2=-(a - 1.25)/b\nprint while",
                   "  10   -2-   3  // comment\n"];

    for source in sources {
        let (tokens, _) = tokenize_all(source, &config);
        let joined = tokens.iter()
                           .map(|t| t.lexeme.as_str())
                           .collect::<Vec<_>>()
                           .join(" ");
        let (again, diagnostics) = tokenize_all(&joined, &config);

        assert!(diagnostics.is_empty(), "{source:?} rejoined as {joined:?}");
        assert_eq!(kinds_and_lexemes(&tokens), kinds_and_lexemes(&again), "{source:?}");
    }
}

#[test]
fn describe_names_the_token() {
    let (tokens, _) = tokenize_all("x 12 ( while", &Config::default());

    let described: Vec<_> = tokens.iter().map(Token::describe).collect();
    assert_eq!(described,
               ["identifier `x`",
                "integer literal `12`",
                "'('",
                "`while`",
                "end of input"]);
}
