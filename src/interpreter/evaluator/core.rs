use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, Stmt},
    error::RuntimeError,
    interpreter::{
        environment::{Binding, Environment},
        value::{FunctionValue, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The control-flow outcome of evaluating a statement or expression.
///
/// `Return` unwinds the enclosing function body (or the whole program at
/// top level); `Value` is ordinary sequential flow. Modelling returns as a
/// distinct signal keeps them from ever being confused with runtime
/// values.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Ordinary evaluation result.
    Value(Value),
    /// A `return` is unwinding; the payload is the returned value.
    Return(Value),
}

impl Flow {
    /// Unwraps the carried value, whether flowing normally or returning.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Value(value) | Self::Return(value) => value,
        }
    }
}

/// Executes programs against a runtime environment.
///
/// The interpreter holds a shared handle to the environment representing
/// the current lexical scope stack. Function values clone this handle at
/// declaration time, which is what makes closures observe and mutate their
/// declaring scope.
///
/// ## Usage
///
/// An `Interpreter` is created once per program run and walks the parsed
/// statements depth-first; each statement yields a value and the program's
/// result is the last statement's value.
pub struct Interpreter {
    pub(crate) env: Rc<RefCell<Environment>>,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates an interpreter with a fresh root environment.
    #[must_use]
    pub fn new() -> Self {
        Self { env: Rc::new(RefCell::new(Environment::new())) }
    }

    /// Creates an interpreter over an existing environment handle.
    ///
    /// Function calls use this to run the body against the closure's
    /// captured environment.
    #[must_use]
    pub const fn with_env(env: Rc<RefCell<Environment>>) -> Self {
        Self { env }
    }

    /// Gets a handle to the interpreter's environment.
    #[must_use]
    pub fn env(&self) -> Rc<RefCell<Environment>> {
        Rc::clone(&self.env)
    }

    /// Evaluates a sequence of statements as a program.
    ///
    /// Statements run in order; if one yields a `return`, the program
    /// short-circuits with the returned value. Otherwise the result is the
    /// last statement's value, or `null` for an empty program.
    ///
    /// # Errors
    /// Propagates the first `RuntimeError` raised by any statement.
    pub fn eval_program(&mut self, stmts: &[Stmt]) -> EvalResult<Value> {
        let mut last = Value::Null;

        for stmt in stmts {
            match self.eval_statement(stmt)? {
                Flow::Return(value) => return Ok(value),
                Flow::Value(value) => last = value,
            }
        }

        Ok(last)
    }

    /// Evaluates a single statement.
    ///
    /// Declarations and assignments mutate the environment and yield
    /// `null`; control-flow statements dispatch to their evaluators;
    /// expression statements yield the expression's value.
    ///
    /// # Errors
    /// Returns a `RuntimeError` for name clashes, constant reassignment,
    /// or any failure inside the evaluated expressions.
    pub fn eval_statement(&mut self, stmt: &Stmt) -> EvalResult<Flow> {
        match stmt {
            Stmt::Expression { expr, .. } => self.eval_expr(expr),

            Stmt::VarDeclaration { name,
                                   expr,
                                   constant,
                                   line, } => {
                let bound = match expr {
                    Some(initializer) => Some(self.bind_expr(initializer)?),
                    None => None,
                };

                self.env.borrow_mut().declare(Binding { name: name.clone(),
                                                        expr: bound,
                                                        constant: *constant,
                                                        line: *line, })?;
                Ok(Flow::Value(Value::Null))
            },

            Stmt::VarAssignment { name, expr, line } => {
                let bound = self.bind_expr(expr)?;
                self.env.borrow_mut().assign(name, bound, *line)?;
                Ok(Flow::Value(Value::Null))
            },

            Stmt::FunctionDeclaration(declaration) => {
                let function =
                    Value::Function(Rc::new(FunctionValue { declaration: declaration.clone(),
                                                            env:         Rc::clone(&self.env), }));

                self.env
                    .borrow_mut()
                    .declare(Binding { name:     declaration.name.clone(),
                                       expr:     Some(Expr::Value { value: function,
                                                                    line:  declaration.line, }),
                                       constant: false,
                                       line:     declaration.line, })?;
                Ok(Flow::Value(Value::Null))
            },

            Stmt::Conditional { clauses, .. } => self.eval_conditional(clauses),

            Stmt::WhileLoop { condition, body, .. } => self.eval_while(condition, body),

            Stmt::ForLoop { name,
                            init,
                            condition,
                            counter,
                            body,
                            line, } => self.eval_for(name, init, condition, counter, body, *line),
        }
    }

    /// Evaluates an expression to a control-flow outcome.
    ///
    /// Only `return` expressions produce `Flow::Return`; everything else
    /// flows normally. Operand positions use [`Self::eval_operand`] to
    /// collapse the distinction.
    ///
    /// # Errors
    /// Returns a `RuntimeError` describing the first failure.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Flow> {
        match expr {
            Expr::Literal { value, .. } => Ok(Flow::Value(Value::from(value))),

            Expr::Value { value, .. } => Ok(Flow::Value(value.clone())),

            Expr::Identifier { name, line } => {
                let bound = {
                    let env = self.env.borrow();
                    env.search(name, *line)?.expr.clone()
                };

                match bound {
                    Some(expr) => self.eval_expr(&expr),
                    None => Ok(Flow::Value(Value::Null)),
                }
            },

            Expr::Binary { lhs, op, rhs, line } => {
                let left = self.eval_operand(lhs)?;
                let right = self.eval_operand(rhs)?;

                Ok(Flow::Value(Self::eval_binary(*op, left, right, *line)?))
            },

            Expr::Bool { lhs, op, rhs, line } => {
                let left = self.eval_operand(lhs)?;
                let right = self.eval_operand(rhs)?;

                Ok(Flow::Value(Self::eval_boolean(*op, &left, &right, *line)?))
            },

            Expr::Object { properties, .. } => self.eval_object(properties),

            Expr::Call { caller, args, line } => self.eval_call(caller, args, *line),

            Expr::Member { object, member, line } => self.eval_member(object, member, *line),

            Expr::Increment { name, op, line } => self.eval_increment(name, *op, *line),

            Expr::Return { expr, .. } => {
                let value = self.eval_operand(expr)?;
                Ok(Flow::Return(value))
            },
        }
    }

    /// Evaluates an expression in operand position, collapsing any return
    /// signal into its carried value.
    ///
    /// # Errors
    /// Propagates errors from [`Self::eval_expr`].
    pub fn eval_operand(&mut self, expr: &Expr) -> EvalResult<Value> {
        Ok(self.eval_expr(expr)?.into_value())
    }

    /// Produces the expression actually stored in a binding.
    ///
    /// Object literals are stored structurally so member chains can walk
    /// their properties later; every other expression is evaluated now and
    /// stored as an embedded value.
    ///
    /// # Errors
    /// Propagates evaluation errors from non-object initializers.
    pub(crate) fn bind_expr(&mut self, expr: &Expr) -> EvalResult<Expr> {
        if matches!(expr, Expr::Object { .. }) {
            return Ok(expr.clone());
        }

        let line = expr.line_number();
        let value = self.eval_operand(expr)?;

        Ok(Expr::Value { value, line })
    }

    /// Evaluates `name++` / `name--` by synthesizing `name op 1`,
    /// evaluating it and assigning the result back.
    fn eval_increment(&mut self, name: &str, op: BinaryOperator, line: usize) -> EvalResult<Flow> {
        let step = Expr::Binary { lhs: Box::new(Expr::Identifier { name: name.to_string(),
                                                                   line }),
                                  op,
                                  rhs: Box::new(Expr::Literal { value: LiteralValue::Int(1),
                                                                line }),
                                  line };

        let value = self.eval_operand(&step)?;
        self.env.borrow_mut().assign(name, Expr::Value { value: value.clone(),
                                                         line }, line)?;

        Ok(Flow::Value(value))
    }
}
