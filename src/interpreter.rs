/// The evaluator module reduces trees to values.
///
/// The evaluator walks an expression or a program, performs integer and float
/// arithmetic, keeps variable values, and reports runtime errors such as
/// division by zero. It is independent of the semantic pass: a tree that was
/// never type-checked still evaluates or fails with a `RuntimeError`.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and lazily produces tokens for numbers,
/// identifiers, reserved keywords, operators, parentheses and statement
/// separators. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input characters into tokens with kind, lexeme, value and
///   source position.
/// - Skips whitespace and `//` comments.
/// - Reports unrecognized characters, continuing or halting as configured.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive descent over one function per precedence level,
/// so precedence and left-associativity follow from the call structure.
///
/// # Responsibilities
/// - Converts tokens into expressions and statements.
/// - Reports syntax errors and premature end of input with position info.
/// - Recovers at statement boundaries to report every broken statement.
pub mod parser;
/// The semantic module checks types over a parsed program.
///
/// # Responsibilities
/// - Builds the symbol table of declared variables.
/// - Rejects undefined variables and mismatched binary operands.
pub mod semantic;
/// The value module defines the runtime data types for evaluation.
pub mod value;
