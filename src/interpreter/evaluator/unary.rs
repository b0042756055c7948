use crate::{
    ast::{Position, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Negating `i64::MIN` overflows and is reported as such.
    ///
    /// # Example
    /// ```
    /// use foxl::{
    ///     ast::{Position, UnaryOperator},
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, Value::Int(5), Position::new(1, 1));
    /// assert_eq!(v.unwrap(), Value::Int(-5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value, position: Position) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Int(n) => n.checked_neg()
                                  .map(Value::Int)
                                  .ok_or_else(|| RuntimeError::Overflow { op: op.to_string(),
                                                                          position }),
                Value::Float(r) => Ok(Value::Float(-r)),
            },
        }
    }
}
