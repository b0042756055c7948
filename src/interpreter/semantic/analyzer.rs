use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    ast::{Expr, Program, Statement},
    error::{Diagnostic, DiagnosticKind},
    interpreter::semantic::{symbol_table::SymbolTable, types::Type},
};

/// Result type used while checking a single statement.
pub type CheckResult<T> = Result<T, Diagnostic>;

/// A rejected program.
///
/// Carries every diagnostic found plus the symbol table as far as it could be
/// built. The table holds every type collected from literal shape, plus the
/// deferred targets whose assignments validated. A deferred target whose every
/// assignment failed is missing from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("semantic analysis reported {} error(s)", .diagnostics.len())]
pub struct AnalysisFailure {
    /// Diagnostics in the order the statements appear.
    pub diagnostics: Vec<Diagnostic>,
    /// The bindings that were successfully inferred.
    pub incomplete:  SymbolTable,
}

/// Walks a program twice to type its variables.
///
/// The collection pass binds every assignment whose type is evident from
/// literals alone, the last such assignment of a name winning. Those bindings
/// are frozen: the validation pass checks every binary operation against
/// them, and only binds the targets the first pass had to defer.
#[derive(Debug, Default)]
pub struct Analyzer {
    symbols:     SymbolTable,
    collected:   SymbolTable,
    diagnostics: Vec<Diagnostic>,
}

impl Analyzer {
    /// Creates an analyzer with an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs both passes over `program` and hands back the outcome.
    ///
    /// # Errors
    /// Returns an [`AnalysisFailure`] if any statement failed validation.
    pub fn run(mut self, program: &Program) -> Result<SymbolTable, AnalysisFailure> {
        self.collect(program);
        self.validate(program);

        if self.diagnostics.is_empty() {
            Ok(self.symbols)
        } else {
            Err(AnalysisFailure { diagnostics: self.diagnostics,
                                  incomplete:  self.symbols, })
        }
    }

    /// Pass one: binds assignments typed by literal shape alone.
    ///
    /// Identifier references are left for the validation pass, which sees the
    /// complete table.
    fn collect(&mut self, program: &Program) {
        for statement in &program.statements {
            if let Statement::Assignment { target, value, .. } = statement {
                match infer_shape(value) {
                    Some(ty) => {
                        trace!(%target, %ty, "collected");
                        self.collected.bind(target.as_str(), ty);
                    },
                    None => trace!(%target, "deferred"),
                }
            }
        }
        self.symbols = self.collected.clone();
    }

    /// Pass two: checks every statement in order.
    ///
    /// A validated assignment binds its target only when the collection pass
    /// left that target unbound; collected types are never overwritten. The
    /// first error inside a statement ends the check of that statement; the
    /// following statements are still checked.
    fn validate(&mut self, program: &Program) {
        for statement in &program.statements {
            match self.type_of(statement.expr()) {
                Ok(ty) => {
                    if let Statement::Assignment { target, .. } = statement
                       && !self.collected.contains(target)
                       && let Some(previous) = self.symbols.bind(target.as_str(), ty)
                       && previous != ty
                    {
                        debug!(%target, %previous, %ty, "deferred target re-declared with a new type");
                    }
                },
                Err(diagnostic) => {
                    debug!(%diagnostic, "statement rejected");
                    self.diagnostics.push(diagnostic);
                },
            }
        }
    }

    /// Resolves the type of `expr`, validating every binary operation in it.
    ///
    /// # Errors
    /// - `UndefinedVariable` when an identifier has no binding.
    /// - `TypeMismatch` when the operands of a binary operation differ.
    ///   Operands are checked left before right, so the leftmost error wins.
    pub fn type_of(&self, expr: &Expr) -> CheckResult<Type> {
        match expr {
            Expr::IntLiteral { .. } => Ok(Type::Int),
            Expr::FloatLiteral { .. } => Ok(Type::Float),
            Expr::Identifier { name, position } => self.symbols.lookup(name).ok_or_else(|| {
                Diagnostic::at(DiagnosticKind::UndefinedVariable { name: name.clone() },
                               *position)
            }),
            Expr::UnaryOp { operand, .. } => self.type_of(operand),
            Expr::BinaryOp { left,
                             right,
                             position,
                             .. } => {
                let left = self.type_of(left)?;
                let right = self.type_of(right)?;
                if left == right {
                    Ok(left)
                } else {
                    Err(Diagnostic::at(DiagnosticKind::TypeMismatch { left, right }, *position))
                }
            },
        }
    }
}

/// Infers a type from literal shape alone, without consulting any table.
///
/// Returns `None` when the expression mentions an identifier or mixes types;
/// the validation pass decides those.
#[must_use]
pub fn infer_shape(expr: &Expr) -> Option<Type> {
    match expr {
        Expr::IntLiteral { .. } => Some(Type::Int),
        Expr::FloatLiteral { .. } => Some(Type::Float),
        Expr::Identifier { .. } => None,
        Expr::UnaryOp { operand, .. } => infer_shape(operand),
        Expr::BinaryOp { left, right, .. } => {
            let left = infer_shape(left)?;
            let right = infer_shape(right)?;
            (left == right).then_some(left)
        },
    }
}

/// Type-checks a parsed program.
///
/// # Errors
/// Returns every `UndefinedVariable` and `TypeMismatch` diagnostic found,
/// together with the incomplete symbol table.
///
/// # Example
/// ```
/// use foxl::{
///     config::Config,
///     error::DiagnosticKind,
///     interpreter::{
///         lexer::tokenize_all,
///         parser::parse_program,
///         semantic::{analyzer::analyze, types::Type},
///     },
/// };
///
/// let (tokens, _) = tokenize_all("x = 1; y = 2.0; z = x + y", &Config::default());
/// let program = parse_program(&tokens).unwrap();
/// let failure = analyze(&program).unwrap_err();
///
/// assert_eq!(failure.diagnostics[0].kind,
///            DiagnosticKind::TypeMismatch { left:  Type::Int,
///                                           right: Type::Float, });
/// assert!(!failure.incomplete.contains("z"));
/// ```
#[tracing::instrument(skip_all, fields(statement_count = program.statements.len()))]
pub fn analyze(program: &Program) -> Result<SymbolTable, AnalysisFailure> {
    Analyzer::new().run(program)
}
