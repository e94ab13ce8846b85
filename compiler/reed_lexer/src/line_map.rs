//! Byte offset to line/column translation.

use reed_token::Position;

/// Precomputed table of line-start byte offsets for one source buffer.
pub(crate) struct LineMap {
    /// Offset of the first byte of each line; always starts with 0.
    line_starts: Vec<usize>,
}

impl LineMap {
    pub(crate) fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter_map(|(offset, byte)| (byte == b'\n').then_some(offset + 1)),
        );
        LineMap { line_starts }
    }

    /// 1-based line/column for a byte offset, counting bytes within the line.
    pub(crate) fn position(&self, offset: usize) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(index) => index,
            Err(index) => index - 1,
        };
        let column = offset - self.line_starts[line];
        Position::new(to_u32(line + 1), to_u32(column + 1))
    }

    /// Number of lines in the source, counting the last unterminated one.
    pub(crate) fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[inline]
fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
