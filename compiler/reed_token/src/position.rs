//! Line/column source positions.

use std::fmt;

/// A line/column pair locating a token in its source file.
///
/// Lexed tokens carry 1-based positions. [`Position::DUMMY`] (0:0) marks
/// synthesized tokens with no source location (tests, rewrite passes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Position for synthesized tokens with no source location.
    pub const DUMMY: Position = Position { line: 0, column: 0 };

    #[inline]
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Whether this is the synthesized no-location position.
    #[inline]
    pub fn is_dummy(self) -> bool {
        self == Position::DUMMY
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
