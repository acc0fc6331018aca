use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{FunctionDecl, LiteralValue},
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult},
    util::num::{f64_to_i64_truncated, i64_to_f64_checked},
};

/// Signature of a built-in function.
///
/// A native receives the evaluated argument values and produces a result
/// value directly in host code.
pub type NativeFn = fn(&[Value]) -> Value;

/// A user-defined function value: its declaration bundled with the
/// environment captured when the declaration was evaluated.
///
/// The environment handle is shared, not snapshotted, so calls observe and
/// mutate the declaring scope in place.
pub struct FunctionValue {
    /// The parsed declaration (name, parameters, body).
    pub declaration: FunctionDecl,
    /// The captured environment.
    pub env:         Rc<RefCell<Environment>>,
}

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditional evaluations.
#[derive(Clone)]
pub enum Value {
    /// The absent value; also what declarations and loops evaluate to.
    Null,
    /// An integer value (64 bit integer).
    Int(i64),
    /// A numeric value (double precision floating-point).
    Float(f64),
    /// A string value.
    Str(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and the
    /// logical connectives. Conditions in `if`, `while` and `for` must
    /// evaluate to `Bool`.
    Bool(bool),
    /// A built-in function implemented in host code.
    NativeFunction(NativeFn),
    /// A user-defined function with its captured environment.
    Function(Rc<FunctionValue>),
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Int(value) => f.debug_tuple("Int").field(value).finish(),
            Self::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Self::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Self::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Self::NativeFunction(_) => write!(f, "NativeFunction"),
            // The captured environment can point back at this value; print
            // the name only.
            Self::Function(function) => {
                f.debug_tuple("Function").field(&function.declaration.name).finish()
            },
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::NativeFunction(a), Self::NativeFunction(b)) => std::ptr::fn_addr_eq(*a, *b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Int(i) => (*i).into(),
            LiteralValue::Float(n) => (*n).into(),
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Null => Self::Null,
        }
    }
}

impl Value {
    /// Returns the name of the value's type as cited by diagnostics.
    ///
    /// # Example
    /// ```
    /// use paint::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Int(1).type_name(), "number");
    /// assert_eq!(Value::Float(1.0).type_name(), "number");
    /// assert_eq!(Value::Str("a".to_string()).type_name(), "string");
    /// assert_eq!(Value::Bool(true).type_name(), "boolean");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int(_) | Self::Float(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::NativeFunction(_) | Self::Function(_) => "function",
        }
    }

    /// Returns `true` if the value is numeric (`Int` or `Float`).
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for conditions and the logical connectives.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedBoolean` for non-boolean values.
    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { line }),
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Integers are widened; conversion fails if the integer is too large to
    /// be represented exactly.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedNumber` for non-numeric values and
    /// `RuntimeError::LiteralTooLarge` when widening would lose precision.
    pub fn as_float(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Float(r) => Ok(*r),
            Self::Int(n) => i64_to_f64_checked(*n, RuntimeError::LiteralTooLarge { line }),
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }

    /// Converts the value to an `i64` the way ordering comparisons and the
    /// modulo operator read their operands: integers pass through, floats
    /// truncate toward zero, and numeric strings are parsed.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedNumber` when the value has no integer
    /// reading, and `RuntimeError::LiteralTooLarge` for floats outside the
    /// exactly-representable range.
    ///
    /// # Example
    /// ```
    /// use paint::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Int(7).to_int(1).unwrap(), 7);
    /// assert_eq!(Value::Float(3.9).to_int(1).unwrap(), 3);
    /// assert_eq!(Value::Str("12".to_string()).to_int(1).unwrap(), 12);
    /// assert!(Value::Bool(true).to_int(1).is_err());
    /// ```
    pub fn to_int(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Int(n) => Ok(*n),
            Self::Float(r) => f64_to_i64_truncated(*r, line),
            Self::Str(s) => {
                s.trim().parse().map_err(|_| RuntimeError::ExpectedNumber { line })
            },
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }
}

impl std::fmt::Display for Value {
    /// Writes the canonical text of the value: what `print` emits and what
    /// `==` compares. Floats always carry six fractional digits.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r:.6}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::NativeFunction(_) => write!(f, "<native fn>"),
            Self::Function(function) => write!(f, "<fn {}>", function.declaration.name),
        }
    }
}
