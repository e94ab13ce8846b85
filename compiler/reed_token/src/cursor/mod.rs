//! Independent traversal view over a token stream.

use crate::error::StreamError;
use crate::stream::TokenStream;
use crate::token::Token;

/// A positioned view into a [`TokenStream`], independent of the stream's own
/// read cursor.
///
/// Created by `TokenStream::cursor` (first token) or
/// `TokenStream::cursor_at` (any position up to and including the end).
/// The view holds a shared borrow of the stream, so structural mutation is
/// statically impossible while any view is alive. All movement saturates
/// into `[0, len]`; dereferencing the end position fails exactly the way
/// `at(len)` does.
#[derive(Clone, Copy, Debug)]
pub struct TokenCursor<'a> {
    stream: &'a TokenStream,
    index: usize,
}

// Position-only equality: two views are equal when they sit on the same
// index, regardless of which stream they borrow.
impl PartialEq for TokenCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}
impl Eq for TokenCursor<'_> {}

/// Size assertion: `TokenCursor` should be <= 16 bytes on 64-bit platforms.
/// &TokenStream = 8, usize = 8.
const _: () = assert!(std::mem::size_of::<TokenCursor<'static>>() <= 16);

impl<'a> TokenCursor<'a> {
    #[inline]
    pub(crate) fn new(stream: &'a TokenStream, index: usize) -> Self {
        TokenCursor { stream, index }
    }

    /// Current position in the stream.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the view sits on the end position.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.index >= self.stream.len()
    }

    /// Borrow the token under the view.
    ///
    /// The returned reference outlives the view itself; it is tied only to
    /// the underlying stream borrow.
    #[inline]
    pub fn token(&self) -> Result<&'a Token, StreamError> {
        self.stream.at(self.index)
    }

    /// Step forward one token, stopping at the end position.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Step back one token, stopping at the start.
    #[inline]
    pub fn retreat(&mut self) {
        self.retreat_by(1);
    }

    /// Move forward `n` tokens, saturating at the end position.
    #[inline]
    pub fn advance_by(&mut self, n: usize) {
        self.index = self.index.saturating_add(n).min(self.stream.len());
    }

    /// Move back `n` tokens, saturating at the start.
    #[inline]
    pub fn retreat_by(&mut self, n: usize) {
        self.index = self.index.saturating_sub(n);
    }
}
