/// Core evaluation logic and interpreter state.
///
/// Contains the main evaluation engine, the statement and expression
/// dispatch, the `Flow` return signal and binding storage rules.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles arithmetic on numbers, null resolution and string
/// concatenation.
pub mod binary;

/// Boolean operator evaluation logic.
///
/// Implements equality, the ordering comparisons and the logical
/// connectives; every result is a boolean value.
pub mod boolean;

/// Function call evaluation.
///
/// Handles native and user-defined function calls, arity checking,
/// parameter binding and closure environments.
pub mod call;

/// Object literal and member chain evaluation.
///
/// Declares object properties into the environment and walks dot chains
/// through structurally stored object literals.
pub mod member;

/// Control flow evaluation.
///
/// Evaluates conditional blocks, while loops, for loops and the
/// scope-restoring statement bodies they share.
pub mod control;

/// Built-in functions.
///
/// Host implementations of the native functions pre-registered in the root
/// environment.
pub mod native;
