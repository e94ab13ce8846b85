//! Error type for token stream operations.

use thiserror::Error;

/// Failure of a [`TokenStream`](crate::TokenStream) operation.
///
/// Every failing operation reports which bound was violated (or that a value
/// search came up empty) and leaves the stream untouched: mutations are
/// all-or-nothing and failed reads never move the cursor.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StreamError {
    /// A position, index, or lookahead argument fell outside the valid
    /// bounds for the operation, including reads at end-of-stream.
    #[error("{op}: position {index} out of range for stream of {len} tokens")]
    OutOfRange {
        /// Operation that rejected the position.
        op: &'static str,
        /// The offending position.
        index: usize,
        /// Stream length at the time of the call.
        len: usize,
    },

    /// A value-based search (`erase_first`, `replace_first`) found no
    /// value-equal token.
    #[error("{op}: no token matches the given value")]
    NoMatch {
        /// Operation whose search came up empty.
        op: &'static str,
    },
}

// Error construction stays out of the inlined happy paths.
impl StreamError {
    #[cold]
    #[inline(never)]
    pub(crate) fn out_of_range(op: &'static str, index: usize, len: usize) -> Self {
        StreamError::OutOfRange { op, index, len }
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn no_match(op: &'static str) -> Self {
        StreamError::NoMatch { op }
    }
}
