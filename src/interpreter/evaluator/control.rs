use crate::{
    ast::{ConditionalClause, Expr, Stmt},
    interpreter::{
        environment::Binding,
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a statement body under a restored scope.
    ///
    /// The environment depth is remembered before the first statement and
    /// restored afterwards, so every binding the body declares vanishes
    /// when it ends. A `return` from inside the body restores the scope
    /// and then keeps unwinding.
    pub(crate) fn eval_body(&mut self, body: &[Stmt]) -> EvalResult<Flow> {
        let depth = self.env.borrow().size();

        for stmt in body {
            if let Flow::Return(value) = self.eval_statement(stmt)? {
                self.env.borrow_mut().restore_scope(depth);
                return Ok(Flow::Return(value));
            }
        }

        self.env.borrow_mut().restore_scope(depth);
        Ok(Flow::Value(Value::Null))
    }

    /// Evaluates a conditional block.
    ///
    /// The arms are scanned in order; the first whose condition is absent
    /// (the `else` arm) or evaluates to `true` runs, and scanning stops.
    /// The block itself evaluates to `null`.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedBoolean` when a condition does not
    /// evaluate to a boolean.
    pub(crate) fn eval_conditional(&mut self, clauses: &[ConditionalClause]) -> EvalResult<Flow> {
        for clause in clauses {
            let taken = match &clause.condition {
                Some(condition) => {
                    self.eval_operand(condition)?.as_bool(condition.line_number())?
                },
                None => true,
            };

            if taken {
                if let Flow::Return(value) = self.eval_body(&clause.body)? {
                    return Ok(Flow::Return(value));
                }
                break;
            }
        }

        Ok(Flow::Value(Value::Null))
    }

    /// Evaluates a while loop.
    ///
    /// The condition is re-evaluated before each iteration; the body runs
    /// under a restored scope. The loop evaluates to `null`.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedBoolean` when the condition does not
    /// evaluate to a boolean.
    pub(crate) fn eval_while(&mut self, condition: &Expr, body: &[Stmt]) -> EvalResult<Flow> {
        while self.eval_operand(condition)?.as_bool(condition.line_number())? {
            if let Flow::Return(value) = self.eval_body(body)? {
                return Ok(Flow::Return(value));
            }
        }

        Ok(Flow::Value(Value::Null))
    }

    /// Evaluates a for loop.
    ///
    /// The iteration variable is declared if it does not exist yet, then
    /// assigned its initial value. While the condition holds, the body
    /// runs under a restored scope and the counter expression is evaluated
    /// once per iteration. On exit, a loop-introduced variable is removed
    /// with the scope; a pre-existing one survives and is re-assigned the
    /// initial expression's value.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedBoolean` for a non-boolean
    /// condition, plus any error from the initializer, body or counter.
    pub(crate) fn eval_for(&mut self,
                           name: &str,
                           init: &Expr,
                           condition: &Expr,
                           counter: &Expr,
                           body: &[Stmt],
                           line: usize)
                           -> EvalResult<Flow> {
        let pre_existing = self.env.borrow().lookup(name).is_some();
        let depth = self.env.borrow().size();

        let initial = self.eval_operand(init)?;
        let bound = Expr::Value { value: initial,
                                  line };

        if pre_existing {
            self.env.borrow_mut().assign(name, bound, line)?;
        } else {
            self.env.borrow_mut().declare(Binding { name: name.to_string(),
                                                    expr: Some(bound),
                                                    constant: false,
                                                    line })?;
        }

        let mut result = Flow::Value(Value::Null);

        while self.eval_operand(condition)?.as_bool(condition.line_number())? {
            if let Flow::Return(value) = self.eval_body(body)? {
                result = Flow::Return(value);
                break;
            }

            self.eval_operand(counter)?;
        }

        if pre_existing {
            let value = self.eval_operand(init)?;
            self.env.borrow_mut().assign(name, Expr::Value { value, line }, line)?;
        } else {
            self.env.borrow_mut().restore_scope(depth);
        }

        Ok(result)
    }
}
