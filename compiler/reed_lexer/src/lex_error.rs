//! Lexical error type.

use reed_token::Position;
use thiserror::Error;

/// Failure while scanning source text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character outside the language's alphabet.
    #[error("unexpected character {ch:?} at {position}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// 1-based line/column where the character starts.
        position: Position,
    },
}

// Error construction stays out of the inlined happy paths.
impl LexError {
    #[cold]
    #[inline(never)]
    pub(crate) fn unexpected_char(ch: char, position: Position) -> Self {
        LexError::UnexpectedChar { ch, position }
    }
}
