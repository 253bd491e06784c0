/// Tokenizer errors.
///
/// Raised while scanning the input text into tokens: characters outside the
/// grammar and letter runs that do not name a known function.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the expression tree
/// from a token sequence. Parse errors include unexpected tokens, unbalanced
/// parentheses, incomplete expressions and leftover input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised during evaluation. The parser never
/// produces a tree that fails here; these only guard hand-built trees.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the full text-to-number pipeline.
///
/// Each stage keeps its own error type; this enum wraps them so that
/// [`crate::evaluate_text`] can use `?` across stage boundaries. The message of
/// the wrapped error is shown unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The tokenizer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The parser rejected the token sequence.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The evaluator rejected the expression tree.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
