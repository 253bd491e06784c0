#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during parsing.
///
/// Positions are 0-based indices into the token sequence handed to the
/// parser, not character offsets into the original text.
pub enum ParseError {
    /// Found a token where a number or an opening parenthesis was required.
    #[error("Invalid token: {token} at position {position}. Expected a number or parenthesis")]
    UnexpectedToken {
        /// The text of the token encountered.
        token:    String,
        /// Index of the token.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected closing parenthesis at position {position}")]
    MissingClosingParen {
        /// Index where the `)` should have been.
        position: usize,
    },
    /// The input ended where an operand was still required.
    #[error("Invalid expression: expected an expression on the right side of {operator} at position {position}")]
    IncompleteExpression {
        /// The text of the last token before the end of input.
        operator: String,
        /// Index of that token.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Unexpected token {token} at position {position}")]
    TrailingTokens {
        /// The first leftover token.
        token:    String,
        /// Index of that token.
        position: usize,
    },
    /// The token sequence was empty.
    #[error("Empty expression")]
    EmptyExpression,
    /// A number token whose text is not a decimal number.
    #[error("Invalid number: {text} at position {position}")]
    InvalidNumber {
        /// The text of the token.
        text:     String,
        /// Index of the token.
        position: usize,
    },
    /// A number literal too large to be represented as a finite `f64`.
    #[error("Literal {text} at position {position} is too large")]
    LiteralTooLarge {
        /// The text of the token.
        text:     String,
        /// Index of the token.
        position: usize,
    },
    /// Parentheses and prefix operators were nested too deeply, or an
    /// operator chain made the tree too deep.
    #[error("Expression nested too deeply at position {position}")]
    NestingTooDeep {
        /// Index of the `(` or operator that exceeded the limit.
        position: usize,
    },
}
