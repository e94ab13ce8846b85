//! Mutable token stream with a cursor-based access protocol.
//!
//! [`TokenStream`] owns the ordered token sequence produced by the lexer and
//! tracks a single read cursor. A parser (or a token rewrite pass) drives it
//! through lookahead reads, saturating and exact cursor moves, and index-,
//! range-, and value-based edits. Structural edits never track the cursor;
//! callers must not assume index stability across them.

use std::fmt;
use std::ops::{Bound, Index, IndexMut, RangeBounds};

use tracing::trace;

use crate::cursor::TokenCursor;
use crate::error::StreamError;
use crate::token::Token;

/// Ordered, mutable sequence of [`Token`] values plus a single read cursor.
///
/// The cursor always lies in `[0, len]`; `cursor == len` is end-of-stream.
/// Reads hand out borrowed references into the stream, so the borrow checker
/// rules out structural mutation while any of them is alive.
///
/// Range-taking operations (`erase_range`, `replace_range`) resolve their
/// argument to half-open `[start, end)` bounds, the `Vec::drain` convention;
/// inclusive ranges like `0..=1` are spelled by the caller.
#[derive(Clone, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    /// Read position, `0..=tokens.len()`.
    cursor: usize,
}

impl TokenStream {
    /// Create an empty stream.
    #[inline]
    pub fn new() -> Self {
        TokenStream {
            tokens: Vec::new(),
            cursor: 0,
        }
    }

    /// Create an empty stream with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenStream {
            tokens: Vec::with_capacity(capacity),
            cursor: 0,
        }
    }

    /// Create from a Vec of tokens, cursor at the start.
    #[inline]
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenStream { tokens, cursor: 0 }
    }

    // ───────── State queries ─────────

    /// Get the number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the stream holds no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether the cursor sits at end-of-stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Current cursor value.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    // ───────── Cursor-relative reads ─────────

    /// Token at the cursor, without moving it.
    ///
    /// Equivalent to `peek_ahead(0)`.
    #[inline]
    pub fn peek(&self) -> Result<&Token, StreamError> {
        self.peek_ahead(0)
    }

    /// Token `lookahead` positions past the cursor, without moving it.
    pub fn peek_ahead(&self, lookahead: usize) -> Result<&Token, StreamError> {
        let index = self.cursor.saturating_add(lookahead);
        self.tokens
            .get(index)
            .ok_or_else(|| StreamError::out_of_range("peek", index, self.tokens.len()))
    }

    /// Token at the cursor, advancing the cursor past it.
    ///
    /// The cursor is unchanged when the stream is already at the end.
    pub fn consume(&mut self) -> Result<&Token, StreamError> {
        let index = self.cursor;
        let Some(token) = self.tokens.get(index) else {
            return Err(StreamError::out_of_range(
                "consume",
                index,
                self.tokens.len(),
            ));
        };
        self.cursor += 1;
        trace!(
            pos = index,
            kind = %token.kind,
            line = token.position.line,
            column = token.position.column,
            "consume"
        );
        Ok(token)
    }

    // ───────── Cursor movement ─────────

    /// Move the cursor back by `steps`, stopping at the start.
    #[inline]
    pub fn rewind(&mut self, steps: usize) {
        self.cursor = self.cursor.saturating_sub(steps);
    }

    /// Move the cursor forward by `steps`, stopping at end-of-stream.
    #[inline]
    pub fn advance(&mut self, steps: usize) {
        self.cursor = self.cursor.saturating_add(steps).min(self.tokens.len());
    }

    /// Place the cursor exactly on the token at `index`.
    ///
    /// An absolute seek in either direction, despite the name. `index` must
    /// name an existing token: the end position is rejected here and is
    /// reachable only through `advance` saturation or `consume`.
    #[inline]
    pub fn rewind_to(&mut self, index: usize) -> Result<(), StreamError> {
        self.seek("rewind_to", index)
    }

    /// Place the cursor exactly on the token at `index`.
    ///
    /// Same contract as `rewind_to`: an absolute seek that rejects the end
    /// position.
    #[inline]
    pub fn advance_to(&mut self, index: usize) -> Result<(), StreamError> {
        self.seek("advance_to", index)
    }

    fn seek(&mut self, op: &'static str, index: usize) -> Result<(), StreamError> {
        if index >= self.tokens.len() {
            return Err(StreamError::out_of_range(op, index, self.tokens.len()));
        }
        self.cursor = index;
        Ok(())
    }

    // ───────── Structural mutation ─────────
    //
    // None of these track the cursor. Shrinking edits clamp it back into
    // `[0, len]` when the stream shrinks past it; nothing else is adjusted.

    /// Append a token at the end. Batch append goes through `Extend`.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Insert `token` before `index`, shifting the suffix right.
    ///
    /// `index` must name an existing token; appending goes through `push`.
    pub fn insert(&mut self, index: usize, token: Token) -> Result<(), StreamError> {
        if index >= self.tokens.len() {
            return Err(StreamError::out_of_range(
                "insert",
                index,
                self.tokens.len(),
            ));
        }
        self.tokens.insert(index, token);
        Ok(())
    }

    /// Insert every token of `tokens` before `index`, preserving their order.
    ///
    /// Same contract as `insert`: `index` must name an existing token. The
    /// stream is unchanged on failure.
    pub fn insert_many<I>(&mut self, index: usize, tokens: I) -> Result<(), StreamError>
    where
        I: IntoIterator<Item = Token>,
    {
        if index >= self.tokens.len() {
            return Err(StreamError::out_of_range(
                "insert_many",
                index,
                self.tokens.len(),
            ));
        }
        let mut tail = self.tokens.split_off(index);
        self.tokens.extend(tokens);
        self.tokens.append(&mut tail);
        Ok(())
    }

    /// Remove and return the token at `index`.
    pub fn erase(&mut self, index: usize) -> Result<Token, StreamError> {
        if index >= self.tokens.len() {
            return Err(StreamError::out_of_range("erase", index, self.tokens.len()));
        }
        let token = self.tokens.remove(index);
        self.clamp_cursor();
        Ok(token)
    }

    /// Remove the tokens in `range`.
    ///
    /// The range resolves to half-open `[start, end)` bounds; `end == len`
    /// is valid, so `erase_range(..)` empties the storage.
    ///
    /// # Panics
    ///
    /// Panics if the resolved start exceeds the resolved end, like
    /// `Vec::drain`.
    pub fn erase_range<R>(&mut self, range: R) -> Result<(), StreamError>
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = self.resolve_range("erase_range", &range)?;
        self.tokens.drain(start..end);
        self.clamp_cursor();
        Ok(())
    }

    /// Remove and return the first token value-equal to `value`.
    ///
    /// Matching is a linear scan using [`Token`] equality: kind and text,
    /// never position.
    pub fn erase_first(&mut self, value: &Token) -> Result<Token, StreamError> {
        match self.tokens.iter().position(|t| t == value) {
            Some(index) => {
                let token = self.tokens.remove(index);
                self.clamp_cursor();
                Ok(token)
            }
            None => Err(StreamError::no_match("erase_first")),
        }
    }

    /// Overwrite the token at `index`, returning the previous token.
    pub fn replace(&mut self, index: usize, token: Token) -> Result<Token, StreamError> {
        let len = self.tokens.len();
        match self.tokens.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, token)),
            None => Err(StreamError::out_of_range("replace", index, len)),
        }
    }

    /// Overwrite the first token value-equal to `old` with `new`, returning
    /// the previous token.
    ///
    /// Same matching rule as `erase_first`.
    pub fn replace_first(&mut self, old: &Token, new: Token) -> Result<Token, StreamError> {
        match self.tokens.iter_mut().find(|t| **t == *old) {
            Some(slot) => Ok(std::mem::replace(slot, new)),
            None => Err(StreamError::no_match("replace_first")),
        }
    }

    /// Remove the tokens in `range` and insert `token` where they started.
    ///
    /// Same bounds policy as `erase_range`; an empty range degenerates to a
    /// plain insertion, and `replace_range(len..len, token)` appends.
    ///
    /// # Panics
    ///
    /// Panics if the resolved start exceeds the resolved end.
    pub fn replace_range<R>(&mut self, range: R, token: Token) -> Result<(), StreamError>
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = self.resolve_range("replace_range", &range)?;
        self.tokens.drain(start..end);
        self.tokens.insert(start, token);
        self.clamp_cursor();
        Ok(())
    }

    /// Remove every token and reset the cursor to the start.
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.cursor = 0;
    }

    // ───────── Indexed access ─────────

    /// Token at `index`, failing with `OutOfRange` where indexing would
    /// panic.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&Token, StreamError> {
        self.tokens
            .get(index)
            .ok_or_else(|| StreamError::out_of_range("at", index, self.tokens.len()))
    }

    /// Mutable token at `index`, failing with `OutOfRange` where indexing
    /// would panic.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Token, StreamError> {
        let len = self.tokens.len();
        self.tokens
            .get_mut(index)
            .ok_or_else(|| StreamError::out_of_range("at_mut", index, len))
    }

    /// Token at `index`, or `None` out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Mutable token at `index`, or `None` out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Token> {
        self.tokens.get_mut(index)
    }

    /// Get a slice of all tokens.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over tokens without touching the cursor.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Consume into the underlying Vec.
    #[inline]
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }

    // ───────── Traversal views ─────────

    /// Traversal view positioned on the first token.
    #[inline]
    pub fn cursor(&self) -> TokenCursor<'_> {
        TokenCursor::new(self, 0)
    }

    /// Traversal view at `index`, which may be `len` for the end position.
    #[inline]
    pub fn cursor_at(&self, index: usize) -> TokenCursor<'_> {
        debug_assert!(
            index <= self.tokens.len(),
            "cursor index {index} out of bounds"
        );
        TokenCursor::new(self, index)
    }

    // ───────── Internals ─────────

    /// Keep the cursor inside `[0, len]` after a shrinking edit.
    #[inline]
    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.tokens.len());
    }

    /// Resolve `range` to half-open `[start, end)` bounds against the
    /// current length.
    fn resolve_range<R>(&self, op: &'static str, range: &R) -> Result<(usize, usize), StreamError>
    where
        R: RangeBounds<usize>,
    {
        let len = self.tokens.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => match e.checked_add(1) {
                Some(end) => end,
                None => return Err(StreamError::out_of_range(op, e, len)),
            },
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };
        assert!(start <= end, "{op}: range start {start} exceeds end {end}");
        if end > len {
            return Err(StreamError::out_of_range(op, end, len));
        }
        Ok((start, end))
    }
}

impl fmt::Debug for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TokenStream({} tokens, cursor {})",
            self.tokens.len(),
            self.cursor
        )
    }
}

impl Extend<Token> for TokenStream {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        self.tokens.extend(iter);
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    /// Unchecked access for hot paths with pre-validated indices.
    ///
    /// # Panics
    ///
    /// Panics on an out-of-range index; `at` is the checked equivalent.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl IndexMut<usize> for TokenStream {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.tokens[index]
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
