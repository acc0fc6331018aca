use std::rc::Rc;

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{
        environment::Binding,
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::{FunctionValue, Value},
    },
};

impl Interpreter {
    /// Evaluates a call expression.
    ///
    /// Arguments are evaluated in order with the statement machinery, then
    /// the callee expression is resolved. Native functions are invoked
    /// directly with the argument vector; user functions go through
    /// [`Self::call_function`].
    ///
    /// # Parameters
    /// - `caller`: The callee expression, usually an identifier.
    /// - `args`: The argument statements.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The call's result value.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` for an unbound callee name
    /// and `RuntimeError::NotCallable` when the callee is not a function.
    pub(crate) fn eval_call(&mut self,
                            caller: &Expr,
                            args: &[Stmt],
                            line: usize)
                            -> EvalResult<Flow> {
        let mut values = Vec::with_capacity(args.len());

        for arg in args {
            match self.eval_statement(arg)? {
                Flow::Return(value) => return Ok(Flow::Return(value)),
                Flow::Value(value) => values.push(value),
            }
        }

        match self.eval_operand(caller)? {
            Value::NativeFunction(call) => Ok(Flow::Value(call(&values))),
            Value::Function(function) => self.call_function(&function, values, line),
            other => Err(RuntimeError::NotCallable { found: other.type_name(),
                                                     line }),
        }
    }

    /// Calls a user-defined function.
    ///
    /// The arity must match the declaration exactly. Each parameter is
    /// bound in the closure's captured environment: assigned over an
    /// existing binding of that name, declared otherwise. The body then
    /// runs as a program against the captured environment, and the
    /// environment is truncated back to its pre-call depth afterwards, so
    /// parameters and body-level locals do not leak into later calls.
    ///
    /// Recursive calls overwrite the parameter bindings of their caller;
    /// operands already evaluated before the recursion keep their values.
    ///
    /// # Errors
    /// Returns `RuntimeError::ArityMismatch` when the argument count does
    /// not equal the parameter count.
    fn call_function(&mut self,
                     function: &FunctionValue,
                     args: Vec<Value>,
                     line: usize)
                     -> EvalResult<Flow> {
        let declaration = &function.declaration;

        if args.len() != declaration.params.len() {
            return Err(RuntimeError::ArityMismatch { name:     declaration.name.clone(),
                                                     expected: declaration.params.len(),
                                                     found:    args.len(),
                                                     line });
        }

        let depth = function.env.borrow().size();

        for (param, value) in declaration.params.iter().zip(args) {
            let bound = Expr::Value { value, line };
            let mut env = function.env.borrow_mut();

            if env.lookup(param).is_some() {
                env.assign(param, bound, line)?;
            } else {
                env.declare(Binding { name:     param.clone(),
                                      expr:     Some(bound),
                                      constant: false,
                                      line })?;
            }
        }

        let mut interpreter = Self::with_env(Rc::clone(&function.env));
        let result = interpreter.eval_program(&declaration.body)?;

        function.env.borrow_mut().restore_scope(depth);

        Ok(Flow::Value(result))
    }
}
