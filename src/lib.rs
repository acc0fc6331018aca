//! # paint
//!
//! paint is a tree-walking interpreter for the Paint scripting language,
//! written in Rust. It lexes, parses, and evaluates dynamically-typed
//! scripts with variables, constants, functions with closures, objects,
//! conditionals, and loops.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{Diagnostic, Reporter},
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{Token, tokenize},
        parser::statement::parse_statement,
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums and related types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Enables exhaustive, self-documenting evaluator dispatch.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code, and the reporter that renders them into diagnostics
/// citing a reconstruction of the offending source line.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Renders every fatal error into one diagnostic format.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and the runtime environment to provide a complete
/// runtime for Paint scripts.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment.
/// - Provides the entry point for interpreting programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable helpers used throughout the evaluator,
/// including safe conversions between integer and floating-point types.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
pub mod util;

/// Runs a Paint program and returns its final value.
///
/// The source is tokenized, parsed statement by statement, and evaluated
/// against a fresh root environment. The program's result is the last
/// statement's value; a top-level `return` short-circuits with the
/// returned value.
///
/// # Errors
/// Returns a fully rendered [`Diagnostic`] if lexing, parsing, or
/// evaluation fails. The diagnostic cites the offending line:
///
/// ```text
/// Error on line: <n>
/// <n> | <reconstructed-line>
///
/// <message>
/// ```
///
/// # Examples
/// ```
/// use paint::run;
///
/// // The final statement's value is the program result.
/// let value = run("let x = 2 + 3; x;").unwrap();
/// assert_eq!(value.to_string(), "5");
///
/// // Constants cannot be reassigned.
/// let result = run("const c = 1; c = 2;");
/// assert!(result.is_err());
/// ```
pub fn run(source: &str) -> Result<Value, Diagnostic> {
    let tokens = match tokenize(source) {
        Ok(tokens) => tokens,
        Err(error) => {
            // No usable token stream exists yet, so the cited line has no
            // reconstruction.
            return Err(Reporter::new(Vec::new()).diagnose(error.line(), &error.to_string()));
        },
    };

    let reporter = Reporter::new(tokens.clone());

    let mut iter = tokens.iter().peekable();
    let mut program = Vec::new();

    while let Some((token, _)) = iter.peek() {
        if matches!(token, Token::EndOfFile) {
            break;
        }

        match parse_statement(&mut iter) {
            Ok(statement) => program.push(statement),
            Err(error) => return Err(reporter.diagnose(error.line(), &error.to_string())),
        }
    }

    let mut interpreter = Interpreter::new();

    interpreter.eval_program(&program)
               .map_err(|error| reporter.diagnose(error.line(), &error.to_string()))
}
