#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while tokenizing.
///
/// Positions are 0-based character offsets into the input text.
pub enum LexError {
    /// Found a character that does not start any token.
    #[error("Invalid character: {character} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Offset of the character.
        position:  usize,
    },
    /// A run of letters did not match any known function name.
    #[error("Invalid function: {name} at position {position}")]
    InvalidFunctionName {
        /// The complete run of letters.
        name:     String,
        /// Offset just past the end of the run.
        position: usize,
    },
}

impl LexError {
    /// Returns the position carried by the error.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. } | Self::InvalidFunctionName { position, .. } => {
                *position
            },
        }
    }
}
