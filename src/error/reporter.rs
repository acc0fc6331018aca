use crate::interpreter::lexer::Token;

/// Renders fatal errors into user-facing diagnostics.
///
/// The reporter holds the post-lex token stream so that any error carrying
/// a line number can cite a reconstruction of the offending source line.
pub struct Reporter {
    tokens: Vec<(Token, usize)>,
}

impl Reporter {
    /// Creates a reporter over a lexed token stream.
    #[must_use]
    pub const fn new(tokens: Vec<(Token, usize)>) -> Self {
        Self { tokens }
    }

    /// Rebuilds a source line from its tokens.
    ///
    /// Tokens on the target line are joined by single spaces, using the raw
    /// value where one exists and the canonical symbol otherwise. The
    /// end-of-file sentinel is skipped. Re-tokenizing the result yields the
    /// same token sequence the lexer produced for that line.
    ///
    /// # Example
    /// ```
    /// use paint::{
    ///     error::Reporter,
    ///     interpreter::lexer::tokenize,
    /// };
    ///
    /// let tokens = tokenize("let x = 1 + 2.5;").unwrap();
    /// let reporter = Reporter::new(tokens);
    ///
    /// assert_eq!(reporter.reconstruct_line(1), "let x = 1 + 2.5 ;");
    /// ```
    #[must_use]
    pub fn reconstruct_line(&self, line: usize) -> String {
        let mut parts = Vec::new();

        for (token, token_line) in &self.tokens {
            if *token_line > line {
                break;
            }

            if *token_line == line && !matches!(token, Token::EndOfFile) {
                parts.push(token.to_string());
            }
        }

        parts.join(" ")
    }

    /// Renders an error message into a [`Diagnostic`] citing the given line.
    #[must_use]
    pub fn diagnose(&self, line: usize, message: &str) -> Diagnostic {
        Diagnostic { line,
                     source: self.reconstruct_line(line),
                     message: message.to_string() }
    }
}

/// A fully rendered fatal diagnostic.
///
/// Displayed as:
///
/// ```text
/// Error on line: <n>
/// <n> | <reconstructed-line>
///
/// <message>
/// ```
#[derive(Debug)]
pub struct Diagnostic {
    /// The cited source line number.
    pub line:    usize,
    /// The reconstructed source line.
    pub source:  String,
    /// The error message.
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Error on line: {}", self.line)?;
        writeln!(f, "{} | {}", self.line, self.source)?;
        writeln!(f)?;
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
