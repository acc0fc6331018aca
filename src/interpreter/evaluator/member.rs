use crate::{
    ast::{Expr, LiteralValue, Property},
    error::RuntimeError,
    interpreter::{
        environment::Binding,
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates an object literal.
    ///
    /// Each full property is declared in the current environment under its
    /// key; shorthand properties only require that a binding of that name
    /// already exists. The literal itself evaluates to `null`.
    ///
    /// # Errors
    /// Returns `RuntimeError::RedeclaredVariable` for a key that clashes
    /// with an existing binding and `UnknownVariable` for a shorthand
    /// without one.
    pub(crate) fn eval_object(&mut self, properties: &[Property]) -> EvalResult<Flow> {
        for property in properties {
            if let Some(value) = &property.value {
                let bound = self.bind_expr(value)?;

                self.env.borrow_mut().declare(Binding { name:     property.key.clone(),
                                                        expr:     Some(bound),
                                                        constant: false,
                                                        line:     property.line, })?;
            } else {
                self.env.borrow().search(&property.key, property.line)?;
            }
        }

        Ok(Flow::Value(Value::Null))
    }

    /// Evaluates a member chain such as `o.a.b`.
    ///
    /// The outer identifier is resolved to its bound expression; while
    /// that expression is an object literal, the chain descends one key at
    /// a time through the literal's properties. A shorthand terminal
    /// re-looks its key up in the environment. Whatever non-object
    /// expression the walk ends on is evaluated as the result.
    ///
    /// # Parameters
    /// - `object`: Name of the outermost object binding.
    /// - `member`: The remaining dot chain.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// Returns `RuntimeError::MemberNotFound` when a key is missing from
    /// the object and `InvalidMember` when the chain steps with something
    /// other than an identifier.
    pub(crate) fn eval_member(&mut self,
                              object: &str,
                              member: &Expr,
                              line: usize)
                              -> EvalResult<Flow> {
        let mut bound = {
            let env = self.env.borrow();
            env.search(object, line)?
               .expr
               .clone()
               .unwrap_or(Expr::Literal { value: LiteralValue::Null,
                                          line })
        };
        let mut member = member.clone();

        loop {
            let Expr::Object { properties, .. } = &bound else {
                break;
            };

            // Advance the cursor one step along the dot chain.
            let key = match member.clone() {
                Expr::Member { object: next,
                               member: rest,
                               .. } => {
                    member = *rest;
                    next
                },
                Expr::Identifier { name, .. } => name,
                _ => return Err(RuntimeError::InvalidMember { line }),
            };

            let Some(property) = properties.iter().find(|property| property.key == key) else {
                return Err(RuntimeError::MemberNotFound { name: key, line });
            };

            let next = match &property.value {
                Some(value) => value.clone(),
                // Shorthand property: the key re-uses an existing binding.
                None => {
                    let property_line = property.line;
                    let env = self.env.borrow();
                    env.search(&key, property_line)?
                       .expr
                       .clone()
                       .unwrap_or(Expr::Literal { value: LiteralValue::Null,
                                                  line:  property_line, })
                },
            };

            bound = next;
        }

        self.eval_expr(&bound)
    }
}
