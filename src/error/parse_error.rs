#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer found a character no rule matches.
    InvalidCharacter {
        /// The offending input slice.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// Description of what was found and what was expected.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `const` declaration has no initializer.
    ConstWithoutValue {
        /// The constant's name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function parameter was not a plain identifier.
    InvalidFunctionParameter {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left-hand side of a `.` was not an identifier.
    InvalidMemberTarget {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Gets the source line the error cites.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidCharacter { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::ExpectedClosingParen { line }
            | Self::ConstWithoutValue { line, .. }
            | Self::InvalidFunctionParameter { line }
            | Self::InvalidMemberTarget { line } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { found, .. } => {
                write!(f, "Invalid character: `{found}`.")
            },

            Self::UnexpectedToken { token, .. } => {
                write!(f, "Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { .. } => {
                write!(f, "Unexpected end of input.")
            },

            Self::ExpectedClosingParen { .. } => {
                write!(f, "Expected closing parenthesis ')' but none found.")
            },

            Self::ConstWithoutValue { name, .. } => {
                write!(f, "Must assign value to constant variable `{name}`.")
            },

            Self::InvalidFunctionParameter { .. } => {
                write!(f, "Function parameters must be of type Identifier.")
            },

            Self::InvalidMemberTarget { .. } => {
                write!(f, "Dot operator must be used on an identifier.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
