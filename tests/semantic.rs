use foxl::{
    ast::{Expr, Position, Statement},
    config::Config,
    error::{Diagnostic, DiagnosticKind},
    interpreter::{
        lexer::tokenize_all,
        parser::parse_program,
        semantic::{AnalysisFailure, SymbolTable, Type, analyze, analyzer::infer_shape},
    },
};

fn analyze_source(src: &str) -> Result<SymbolTable, AnalysisFailure> {
    let (tokens, diagnostics) = tokenize_all(src, &Config::default());
    assert!(diagnostics.is_empty(), "lexing {src:?} failed: {diagnostics:?}");
    let program = parse_program(&tokens).unwrap_or_else(|e| panic!("{src:?} failed to parse: {e:?}"));
    analyze(&program)
}

fn assert_symbols(src: &str, expected: &[(&str, Type)]) {
    match analyze_source(src) {
        Ok(symbols) => {
            let expected: SymbolTable = expected.iter().copied().collect();
            assert_eq!(symbols, expected, "analyzing {src:?}");
        },
        Err(failure) => panic!("{src:?} was rejected: {:?}", failure.diagnostics),
    }
}

fn diagnostics_of(src: &str) -> Vec<Diagnostic> {
    match analyze_source(src) {
        Ok(symbols) => panic!("{src:?} was accepted with {symbols:?}"),
        Err(failure) => failure.diagnostics,
    }
}

#[test]
fn literal_assignments_are_typed_by_shape() {
    assert_symbols("x = 1; y = 2.5; z = -(3 * 4)",
                   &[("x", Type::Int), ("y", Type::Float), ("z", Type::Int)]);
}

#[test]
fn identifiers_resolve_through_the_table() {
    assert_symbols("x = 1; y = x + 1", &[("x", Type::Int), ("y", Type::Int)]);
    assert_symbols("r = 2.0\narea = r * r * 3.5", &[("r", Type::Float), ("area", Type::Float)]);
}

#[test]
fn mixed_operands_are_a_type_mismatch() {
    let failure = analyze_source("x = 1; y = 2.0; z = x + y").unwrap_err();

    assert_eq!(failure.diagnostics.len(), 1);
    let diagnostic = &failure.diagnostics[0];
    assert_eq!(diagnostic.kind,
               DiagnosticKind::TypeMismatch { left:  Type::Int,
                                              right: Type::Float, });
    assert_eq!(diagnostic.position, Some(Position::new(1, 23)));
    assert!(diagnostic.is_semantic());

    assert_eq!(failure.incomplete.lookup("x"), Some(Type::Int));
    assert_eq!(failure.incomplete.lookup("y"), Some(Type::Float));
    assert!(!failure.incomplete.contains("z"));
}

#[test]
fn undeclared_identifier_is_reported_where_it_is_used() {
    let diagnostics = diagnostics_of("y = x + 1");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind,
               DiagnosticKind::UndefinedVariable { name: "x".to_string() });
    assert_eq!(diagnostics[0].position, Some(Position::new(1, 5)));
    assert_eq!(diagnostics[0].to_string(),
               "Error on line 1, column 5: undefined variable `x`");
}

#[test]
fn bare_identifier_reference_is_checked_too() {
    let diagnostics = diagnostics_of("a = b");

    assert_eq!(diagnostics[0].kind,
               DiagnosticKind::UndefinedVariable { name: "b".to_string() });
}

#[test]
fn literal_declarations_later_in_the_program_are_visible() {
    assert_symbols("y = x + 1\nx = 2", &[("x", Type::Int), ("y", Type::Int)]);
}

#[test]
fn redeclaration_keeps_the_last_type() {
    assert_symbols("x = 1; x = 2.5; y = x + 1.0", &[("x", Type::Float), ("y", Type::Float)]);
}

#[test]
fn collected_types_are_fixed_before_any_operation_is_checked() {
    let diagnostics = diagnostics_of("x = 1; y = x + 1; x = 2.0");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind,
               DiagnosticKind::TypeMismatch { left:  Type::Float,
                                              right: Type::Int, });
    assert_eq!(diagnostics[0].position, Some(Position::new(1, 14)));

    assert_symbols("x = 2.0; y = x + 1; x = 1", &[("x", Type::Int), ("y", Type::Int)]);
}

#[test]
fn validated_assignment_never_overwrites_a_collected_type() {
    assert_symbols("x = 1; y = 2.5; x = y * 2.0\nz = x + 1",
                   &[("x", Type::Int), ("y", Type::Float), ("z", Type::Int)]);

    let failure = analyze_source("x = 1; x = x + 2.0").unwrap_err();
    assert_eq!(failure.diagnostics.len(), 1);
    assert_eq!(failure.incomplete.lookup("x"), Some(Type::Int));
}

#[test]
fn nested_mismatch_is_reported_at_the_inner_operator() {
    let diagnostics = diagnostics_of("a = 1 + 2 * 3.0");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind,
               DiagnosticKind::TypeMismatch { left:  Type::Int,
                                              right: Type::Float, });
    assert_eq!(diagnostics[0].position, Some(Position::new(1, 11)));
}

#[test]
fn negation_keeps_the_operand_type() {
    assert_symbols("n = -2.5; m = -n * 2.0", &[("n", Type::Float), ("m", Type::Float)]);
}

#[test]
fn expression_statements_are_validated() {
    let diagnostics = diagnostics_of("x = 1\nx + 1.5");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].position, Some(Position::new(2, 3)));
}

#[test]
fn first_error_in_a_statement_wins() {
    let diagnostics = diagnostics_of("z = q + 1.5 * 2");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind,
               DiagnosticKind::UndefinedVariable { name: "q".to_string() });
}

#[test]
fn every_failing_statement_is_reported() {
    let failure = analyze_source("a = b\nc = 1 + 2.0\nd = e\nf = 4").unwrap_err();

    let lines: Vec<_> = failure.diagnostics
                               .iter()
                               .filter_map(|d| d.position.map(|p| p.line))
                               .collect();
    assert_eq!(lines, [1, 2, 3]);
    assert_eq!(failure.incomplete.iter().collect::<Vec<_>>(), [("f", Type::Int)]);
}

#[test]
fn shape_inference_defers_identifiers() {
    let (tokens, _) = tokenize_all("1 + 2\n1.5 * -2.0\nx + 1\n1 + 2.0", &Config::default());
    let program = parse_program(&tokens).unwrap();

    let shapes: Vec<Option<Type>> = program.statements
                                           .iter()
                                           .map(Statement::expr)
                                           .map(infer_shape)
                                           .collect();
    assert_eq!(shapes, [Some(Type::Int), Some(Type::Float), None, None]);
}

#[test]
fn analysis_does_not_need_a_parsed_source() {
    let expr = Expr::Identifier { name:     "ghost".to_string(),
                                  position: Position::new(3, 9), };
    let program = foxl::ast::Program { statements: vec![Statement::Expression(expr)] };

    let failure = analyze(&program).unwrap_err();
    assert_eq!(failure.diagnostics[0].position, Some(Position::new(3, 9)));
    assert!(failure.incomplete.is_empty());
}
