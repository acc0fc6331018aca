/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, closures and control flow.
/// - Reports runtime errors such as division by zero or invalid operations.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. This enables later phases to analyze and execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Supports declarations, control flow, function calls, objects and more.
pub mod parser;
/// The environment module stores the runtime variable state.
///
/// Variables live on one ordered scope stack: declarations push, block
/// exits truncate back to a remembered depth, and function values share a
/// handle to the environment that was current at their declaration.
///
/// # Responsibilities
/// - Declares, assigns and resolves variable bindings.
/// - Enforces identifier uniqueness and constant immutability.
/// - Pre-registers the built-in `print` function.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation,
/// such as integers, floating-point numbers, booleans, strings, and
/// functions. It also provides methods for type conversion and the
/// canonical text rendering used by `print` and equality.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements conversion, type naming and error checking helpers.
/// - Renders values into their canonical text.
pub mod value;
