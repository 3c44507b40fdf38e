use std::fmt::{Display, Formatter};

use super::types::*;

/// A cursor or target position within a document. Both fields are 0-based; `column` is a byte 
/// index within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// A resolved jump target, paired with the identity of the document it lies in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub document: String,
    pub position: Position,
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.document, self.position.line, self.position.column)
    }
}


/// Line-start offsets of a document, for translating between byte offsets and positions.
///
/// Any of `\r\n`, `\r` and `\n` ends a line.
#[derive(Debug, Clone, Default)]
pub struct LineMap {
    /// `starts[0]` is always 0, `starts[n]` is the offset just past the n-th line terminator.
    starts: Vec<usize>,
    len: usize,
}

impl LineMap {
    pub fn new(data: &[u8]) -> Self {
        let mut starts = vec![0];
        for (ix, &c) in data.iter().enumerate() {
            match c {
                b'\n' => starts.push(ix + 1),
                b'\r' if data.get(ix + 1) != Some(&b'\n') => starts.push(ix + 1),
                _ => ()
            }
        }
        Self { starts, len: data.len() }
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Returns the byte range of a line, excluding its terminator.
    pub fn line_range(&self, data: &[u8], line: usize) -> Option<std::ops::Range<usize>> {
        let start = *self.starts.get(line)?;
        let mut end = self.starts.get(line + 1).copied().unwrap_or(self.len);
        if end > start && data.get(end - 1) == Some(&b'\n') {
            end -= 1;
        }
        if end > start && data.get(end - 1) == Some(&b'\r') {
            end -= 1;
        }
        Some(start..end)
    }

    /// Converts an absolute offset into a position. The offset just past the end of data is 
    /// still valid; anything beyond is not.
    pub fn offset_to_position(&self, offset: Offset) -> Option<Position> {
        let offset = usize::try_from(offset).ok().filter(|&o| o <= self.len)?;
        let line = match self.starts.binary_search(&offset) {
            Ok(ix) => ix,
            Err(ix) => ix - 1
        };
        Some(Position { line, column: offset - self.starts[line] })
    }

    pub fn position_to_offset(&self, data: &[u8], pos: Position) -> Option<Offset> {
        let range = self.line_range(data, pos.line)?;
        if pos.column > range.len() {
            return None;
        }
        (range.start + pos.column).try_into().ok()
    }
}
