//! Token value type for the Reed front end.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::kind::TokenKind;
use crate::position::Position;

/// One lexical unit: kind, source text, and position.
///
/// Immutable after construction; cloned freely. The `text` is the literal
/// substring that produced the token and is empty for fixed-lexeme kinds
/// (keywords, punctuation, end of file).
#[derive(Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

// Manual Eq/Hash: value comparison over (kind, text) only.
//
// Position is excluded so that value-based search and replace match tokens
// wherever they came from. Two streams lexed from the same text on different
// lines therefore compare token-for-token equal.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}
impl Eq for Token {}
impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.text.hash(state);
    }
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Create a position-free token for tests and rewrite passes.
    pub fn synthetic(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
            position: Position::DUMMY,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.text, self.position)
    }
}

/// Size assertion: Token should be <= 48 bytes on 64-bit platforms.
/// String = 24, Position = 8, TokenKind = 1, + padding.
const _: () = assert!(std::mem::size_of::<Token>() <= 48);
