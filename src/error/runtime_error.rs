use crate::ast::BinaryOperator;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to use a variable that was never declared.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to declare a variable whose name is already bound.
    RedeclaredVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to reassign a `const` binding.
    ConstReassignment {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary expression received operands it cannot combine.
    InvalidOperands {
        /// The type name of the left operand.
        lhs:  &'static str,
        /// The operator.
        op:   BinaryOperator,
        /// The type name of the right operand.
        rhs:  &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A boolean value was expected, but not found.
    ExpectedBoolean {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted modulo by zero.
    ModuloByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric value was too large to be converted safely.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Tried to call a value that is not a function.
    NotCallable {
        /// The type name of the value.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A member chain named a key the object does not have.
    MemberNotFound {
        /// The missing member's name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A member chain stepped with something other than an identifier.
    InvalidMember {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Gets the source line the error cites.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::RedeclaredVariable { line, .. }
            | Self::ConstReassignment { line, .. }
            | Self::InvalidOperands { line, .. }
            | Self::ExpectedBoolean { line }
            | Self::ExpectedNumber { line }
            | Self::DivisionByZero { line }
            | Self::ModuloByZero { line }
            | Self::LiteralTooLarge { line }
            | Self::ArityMismatch { line, .. }
            | Self::NotCallable { line, .. }
            | Self::MemberNotFound { line, .. }
            | Self::InvalidMember { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, .. } => {
                write!(f, "Variable `{name}` was never declared in scope.")
            },
            Self::RedeclaredVariable { name, .. } => {
                write!(f, "Variable `{name}` is already declared.")
            },
            Self::ConstReassignment { name, .. } => {
                write!(f, "Cannot reassign constant variable `{name}`.")
            },
            Self::InvalidOperands { lhs, op, rhs, .. } => {
                write!(f, "Expression `{lhs}` {op} `{rhs}` is invalid.")
            },
            Self::ExpectedBoolean { .. } => write!(f, "Expected boolean."),
            Self::ExpectedNumber { .. } => write!(f, "Expected number."),
            Self::DivisionByZero { .. } => write!(f, "Division by zero."),
            Self::ModuloByZero { .. } => write!(f, "Modulo by zero."),
            Self::LiteralTooLarge { .. } => write!(f, "Literal is too large."),
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  .. } => {
                write!(f, "Function `{name}` expects {expected} arguments, found {found}.")
            },
            Self::NotCallable { found, .. } => {
                write!(f, "Value of type `{found}` is not callable.")
            },
            Self::MemberNotFound { name, .. } => {
                write!(f, "Member `{name}` was not found in object.")
            },
            Self::InvalidMember { .. } => {
                write!(f, "Object member must be an identifier.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
