//! Token kinds for Reed.

use std::fmt;

/// The closed set of lexical categories in Reed source.
///
/// Fixed-lexeme kinds (keywords and punctuation) are fully described by the
/// variant; only [`Ident`](TokenKind::Ident) and
/// [`Number`](TokenKind::Number) need a textual payload on the token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier: `add`, `result_2`
    Ident,
    /// Numeric literal: `42`, `3.14`
    Number,

    // Keywords
    Function,
    Return,

    // Operators
    Plus,  // +
    Minus, // -
    Star,  // *
    Slash, // /
    Eq,    // =

    // Delimiters
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Comma,     // ,

    /// End-of-input marker, appended by the lexer.
    Eof,
}

impl TokenKind {
    /// Human name for diagnostics and token dumps.
    #[inline]
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::Function => "function",
            TokenKind::Return => "return",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Eq => "=",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
