use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Both operands must have the same type; there is no promotion between
    /// integers and floats. Integer arithmetic is checked for overflow and
    /// integer division truncates toward zero. Division by zero is an error for
    /// both types.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operator, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use foxl::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let at = Position::new(1, 3);
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add, Value::Int(3), Value::Int(4), at);
    /// assert_eq!(sum.unwrap(), Value::Int(7));
    ///
    /// let mixed = Context::eval_binary(BinaryOperator::Mul, Value::Int(3), Value::Float(4.0), at);
    /// assert!(mixed.is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       position: Position)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        match (left, right) {
            (Value::Int(a), Value::Int(b)) => {
                let result = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    Div => {
                        if b == 0 {
                            return Err(RuntimeError::DivisionByZero { position });
                        }
                        a.checked_div(b)
                    },
                };
                result.map(Value::Int)
                      .ok_or_else(|| RuntimeError::overflow(op, position))
            },
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(match op {
                                                                      Add => a + b,
                                                                      Sub => a - b,
                                                                      Mul => a * b,
                                                                      Div => {
                                                                          if b == 0.0 {
                                                                              return Err(RuntimeError::DivisionByZero { position });
                                                                          }
                                                                          a / b
                                                                      },
                                                                  })),
            (left, right) => {
                Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                                               left.ty(),
                                                               right.ty()),
                                              position })
            },
        }
    }
}
