use crate::{
    ast::BoolOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a comparison or logical operation.
    ///
    /// Equality compares the operands' canonical text, which is why
    /// `1 == 1.0` is false: the integer renders as `1`, the float as
    /// `1.000000`. The ordering comparisons read both operands as
    /// integers. The logical connectives require boolean operands.
    ///
    /// # Parameters
    /// - `op`: The boolean operator.
    /// - `left`: Evaluated left operand.
    /// - `right`: Evaluated right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedNumber` when an ordering comparison
    /// meets a non-numeric operand, `ExpectedBoolean` when a connective
    /// meets a non-boolean one.
    pub fn eval_boolean(op: BoolOperator,
                        left: &Value,
                        right: &Value,
                        line: usize)
                        -> EvalResult<Value> {
        use BoolOperator::{And, Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual, Or};

        let truth = match op {
            Equal => left.to_string() == right.to_string(),
            NotEqual => left.to_string() != right.to_string(),
            Greater => left.to_int(line)? > right.to_int(line)?,
            GreaterEqual => left.to_int(line)? >= right.to_int(line)?,
            Less => left.to_int(line)? < right.to_int(line)?,
            LessEqual => left.to_int(line)? <= right.to_int(line)?,
            And => left.as_bool(line)? && right.as_bool(line)?,
            Or => left.as_bool(line)? || right.as_bool(line)?,
        };

        Ok(Value::Bool(truth))
    }
}
