//! Lexer for Reed.
//!
//! Scans source text into a [`TokenStream`], tracking 1-based line/column
//! positions for diagnostics. The returned stream always ends with one
//! `Eof` token at the end-of-input position.

use logos::Logos;
use reed_token::{Token, TokenKind, TokenStream};
use tracing::debug;

mod lex_error;
mod line_map;

pub use lex_error::LexError;

use line_map::LineMap;

/// Raw token from logos (before position mapping).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")] // Skip whitespace
#[logos(skip r"//[^\n]*")] // Skip line comments
enum RawToken {
    #[token("function")]
    Function,
    #[token("return")]
    Return,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Eq,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
}

/// Scan `source` into a token stream.
///
/// Positions are 1-based line/column, counting bytes within the line. The
/// first character outside the language's alphabet aborts the scan.
pub fn lex(source: &str) -> Result<TokenStream, LexError> {
    let line_map = LineMap::new(source);
    let mut stream = TokenStream::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = logos.span();
        let position = line_map.position(span.start);

        match token_result {
            Ok(raw) => {
                // Only variable-text kinds carry a payload; fixed lexemes
                // are fully described by their kind.
                let text = match raw {
                    RawToken::Ident | RawToken::Number => logos.slice(),
                    _ => "",
                };
                stream.push(Token::new(convert_token(raw), text, position));
            }
            Err(()) => {
                let ch = source[span.start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::unexpected_char(ch, position));
            }
        }
    }

    // Add EOF token
    let eof_position = line_map.position(source.len());
    stream.push(Token::new(TokenKind::Eof, "", eof_position));

    debug!(
        tokens = stream.len(),
        lines = line_map.line_count(),
        "lex complete"
    );
    Ok(stream)
}

/// Convert a raw token to its `TokenKind`.
fn convert_token(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Function => TokenKind::Function,
        RawToken::Return => TokenKind::Return,
        RawToken::Ident => TokenKind::Ident,
        RawToken::Number => TokenKind::Number,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
    }
}
