//! Token types and the token stream for the Reed compiler front end.
//!
//! This crate is the buffer layer between the lexer and the parser: the
//! lexer fills a [`TokenStream`] with [`Token`] values, and a parser (or a
//! token rewrite pass) drives the stream through its cursor protocol —
//! lookahead reads, saturating and exact cursor moves, and index-, range-,
//! and value-based edits. [`TokenCursor`] is a second, independent position
//! over the same storage for traversal that must not disturb the parse
//! cursor.
//!
//! # Design
//!
//! - Tokens are immutable values; equality is `(kind, text)` only, so
//!   value-based search and replace ignore source positions.
//! - The stream's cursor always stays inside `[0, len]`; failed reads never
//!   move it, and failed mutations leave the storage untouched.
//! - Everything is synchronous and single-threaded; share a stream across
//!   threads only behind external synchronization.

mod cursor;
mod error;
mod kind;
mod position;
mod stream;
mod token;

pub use cursor::TokenCursor;
pub use error::StreamError;
pub use kind::TokenKind;
pub use position::Position;
pub use stream::TokenStream;
pub use token::Token;
