/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, invalid
/// literals, and any other issues detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include things like division by zero, type mismatches,
/// unknown or redeclared variables, and constant reassignment.
pub mod runtime_error;
/// Diagnostic rendering.
///
/// Holds the post-lex token stream so fatal errors can cite the offending
/// source line, and defines the `Diagnostic` type every error is rendered
/// into before reaching the user.
pub mod reporter;

pub use parse_error::ParseError;
pub use reporter::{Diagnostic, Reporter};
pub use runtime_error::RuntimeError;
