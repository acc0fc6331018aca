/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss. Use these helpers
/// whenever a value crosses between `i64` and `f64` during evaluation.
///
/// All functions return a `Result`, which is `Ok` if the conversion is valid
/// or an error if the value is out of range.
pub mod num;
