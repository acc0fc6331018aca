use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary arithmetic expression.
    ///
    /// A `null` operand resolves to the other side before any operation is
    /// attempted. Numeric operands follow the widening rule: two integers
    /// stay integral, any float makes the result a float. String operands
    /// support `+` as concatenation. Every other combination is a type
    /// error citing both operand types.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Evaluated left operand.
    /// - `right`: Evaluated right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidOperands` for uncombinable types,
    /// `DivisionByZero` / `ModuloByZero` for zero divisors.
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       line: usize)
                       -> EvalResult<Value> {
        if matches!(left, Value::Null) {
            return Ok(right);
        }
        if matches!(right, Value::Null) {
            return Ok(left);
        }

        if left.is_numeric() && right.is_numeric() {
            return Self::eval_numeric(op, &left, &right, line);
        }

        if let (Value::Str(a), Value::Str(b)) = (&left, &right)
           && op == BinaryOperator::Add
        {
            return Ok(Value::Str(format!("{a}{b}")));
        }

        Err(RuntimeError::InvalidOperands { lhs: left.type_name(),
                                            op,
                                            rhs: right.type_name(),
                                            line })
    }

    /// Evaluates an arithmetic operation over two numeric operands.
    ///
    /// Modulo truncates both operands to integers and always yields an
    /// integer. The remaining operators compute on `i64` when both sides
    /// are integers and on `f64` otherwise.
    fn eval_numeric(op: BinaryOperator,
                    left: &Value,
                    right: &Value,
                    line: usize)
                    -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        if op == Mod {
            let a = left.to_int(line)?;
            let b = right.to_int(line)?;

            if b == 0 {
                return Err(RuntimeError::ModuloByZero { line });
            }

            return Ok(Value::Int(a % b));
        }

        match (left, right) {
            (Value::Int(a), Value::Int(b)) => match op {
                Add => Ok(Value::Int(a + b)),
                Sub => Ok(Value::Int(a - b)),
                Mul => Ok(Value::Int(a * b)),
                Div => {
                    if *b == 0 {
                        Err(RuntimeError::DivisionByZero { line })
                    } else {
                        Ok(Value::Int(a / b))
                    }
                },
                Mod => unreachable!(),
            },

            _ => {
                let a = left.as_float(line)?;
                let b = right.as_float(line)?;

                match op {
                    Add => Ok(Value::Float(a + b)),
                    Sub => Ok(Value::Float(a - b)),
                    Mul => Ok(Value::Float(a * b)),
                    Div => {
                        if b == 0.0 {
                            Err(RuntimeError::DivisionByZero { line })
                        } else {
                            Ok(Value::Float(a / b))
                        }
                    },
                    Mod => unreachable!(),
                }
            },
        }
    }
}
