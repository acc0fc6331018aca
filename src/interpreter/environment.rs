use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, native},
        value::{NativeFn, Value},
    },
};

/// A single variable binding on the scope stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The bound name.
    pub name:     String,
    /// The bound expression: an object literal stored structurally, an
    /// embedded runtime value, or `None` for a bare `let x;`.
    pub expr:     Option<Expr>,
    /// Whether the binding was declared with `const`.
    pub constant: bool,
    /// Line of the declaration, cited on redeclaration.
    pub line:     usize,
}

/// Stores the runtime variable state as one ordered scope stack.
///
/// Bindings are appended on declaration and removed only by truncating the
/// stack back to a remembered depth when a block ends. There is no
/// per-block map and therefore no shadowing: redeclaring a name that is
/// visible anywhere on the stack is an error.
///
/// ## Usage
///
/// A root `Environment` is created once per program run with the `print`
/// native pre-registered. Function values hold a shared handle to the
/// environment that was current at their declaration.
#[derive(Debug)]
pub struct Environment {
    bindings: Vec<Binding>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates the root environment with the `print` native registered.
    ///
    /// # Example
    /// ```
    /// use paint::interpreter::environment::{Binding, Environment};
    ///
    /// let mut env = Environment::new();
    /// assert_eq!(env.size(), 1); // `print` is pre-registered
    ///
    /// env.declare(Binding { name:     "x".to_string(),
    ///                       expr:     None,
    ///                       constant: false,
    ///                       line:     1, })
    ///    .unwrap();
    ///
    /// assert!(env.lookup("x").is_some());
    /// assert!(env.lookup("y").is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut environment = Self { bindings: Vec::new() };
        environment.declare_native("print", native::print);
        environment
    }

    /// Appends a new binding to the stack.
    ///
    /// # Errors
    /// Returns `RuntimeError::RedeclaredVariable` if the name is already
    /// bound anywhere on the stack.
    pub fn declare(&mut self, binding: Binding) -> EvalResult<()> {
        if self.lookup(&binding.name).is_some() {
            return Err(RuntimeError::RedeclaredVariable { name: binding.name,
                                                          line: binding.line, });
        }

        self.bindings.push(binding);
        Ok(())
    }

    /// Overwrites the expression of the last binding with the given name.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if the name is not bound and
    /// `RuntimeError::ConstReassignment` if the binding is a constant.
    pub fn assign(&mut self, name: &str, expr: Expr, line: usize) -> EvalResult<()> {
        let Some(binding) = self.bindings.iter_mut().rev().find(|binding| binding.name == name)
        else {
            return Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                       line });
        };

        if binding.constant {
            return Err(RuntimeError::ConstReassignment { name: name.to_string(),
                                                         line });
        }

        binding.expr = Some(expr);
        Ok(())
    }

    /// Finds the last binding with the given name, if any.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        self.bindings.iter().rev().find(|binding| binding.name == name)
    }

    /// Finds the last binding with the given name.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` when the name is not bound.
    pub fn search(&self, name: &str, line: usize) -> EvalResult<&Binding> {
        self.lookup(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Returns the current stack depth.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bindings.len()
    }

    /// Truncates the stack back to `depth` entries, ending the lexical
    /// scope of every binding declared since that depth was recorded.
    pub fn restore_scope(&mut self, depth: usize) {
        self.bindings.truncate(depth);
    }

    /// Registers a built-in function under the given name.
    fn declare_native(&mut self, name: &str, call: NativeFn) {
        self.bindings.push(Binding { name:     name.to_string(),
                                     expr:     Some(Expr::Value { value: Value::NativeFunction(call),
                                                                  line:  0, }),
                                     constant: false,
                                     line:     0, });
    }
}
