use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// Holds the values of all variables assigned so far. A context belongs to a
/// single run; nothing is shared between contexts.
///
/// # Example
/// ```
/// use foxl::{
///     config::Config,
///     interpreter::{
///         evaluator::core::Context, lexer::tokenize_all, parser::parse_program, value::Value,
///     },
/// };
///
/// let (tokens, _) = tokenize_all("x = 6\nx * 7", &Config::default());
/// let program = parse_program(&tokens).unwrap();
///
/// let mut context = Context::new();
/// assert_eq!(context.run(&program).unwrap(), Some(Value::Int(42)));
/// assert_eq!(context.get_variable("x"), Some(Value::Int(6)));
/// ```
#[derive(Debug, Default)]
pub struct Context {
    /// Variable values by name.
    pub variables: HashMap<String, Value>,
}

impl Context {
    /// Creates a new evaluation context with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of `name`.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<Value> {
        self.variables.get(name).copied()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// # Errors
    /// - `UnknownVariable` for an identifier with no value.
    /// - `DivisionByZero`, `Overflow` and `TypeError` from the operators.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::IntLiteral { value, .. } => Ok(Value::Int(*value)),
            Expr::FloatLiteral { value, .. } => Ok(Value::Float(*value)),
            Expr::Identifier { name, position } => {
                self.get_variable(name)
                    .ok_or_else(|| RuntimeError::UnknownVariable { name:     name.clone(),
                                                                   position: *position, })
            },
            Expr::UnaryOp { op,
                            operand,
                            position, } => {
                let value = self.eval(operand)?;
                Self::eval_unary(*op, value, *position)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *position)
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// Assignments store their value and also return it.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Assignment { target, value, .. } => {
                let value = self.eval(value)?;
                debug!(%target, %value, "assigned");
                self.variables.insert(target.clone(), value);
                Ok(value)
            },
            Statement::Expression(expr) => self.eval(expr),
        }
    }

    /// Executes all statements in order.
    ///
    /// # Returns
    /// The value of the last statement, or `None` for an empty program.
    ///
    /// # Errors
    /// Stops at the first statement that fails.
    #[tracing::instrument(skip_all, fields(statement_count = program.statements.len()))]
    pub fn run(&mut self, program: &Program) -> EvalResult<Option<Value>> {
        let mut result = None;
        for statement in &program.statements {
            result = Some(self.eval_statement(statement)?);
        }
        Ok(result)
    }
}
