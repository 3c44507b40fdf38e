use super::*;
use super::types::*;

/// The capabilities the resolver needs from whatever holds the document text.
///
/// Offsets are absolute byte positions within [`DocumentSource::text()`].
pub trait DocumentSource {
    /// Identity of the document, used as the key for its xref table.
    fn name(&self) -> &str;

    fn text(&self) -> &[u8];

    /// Text of a line, excluding the line terminator.
    fn line_text(&self, line: usize) -> Option<&[u8]>;

    fn offset_to_position(&self, offset: Offset) -> Option<Position>;

    fn position_to_offset(&self, pos: Position) -> Option<Offset>;
}

/// An in-memory document.
#[derive(Debug, Clone)]
pub struct TextDocument {
    name: String,
    data: Vec<u8>,
    lines: LineMap,
}

impl TextDocument {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        let lines = LineMap::new(&data);
        Self { name: name.into(), data, lines }
    }

    /// Replaces the contents, e.g. after an edit or reload. The line map is rebuilt; any xref 
    /// table parsed from the old contents is not touched.
    pub fn set_text(&mut self, data: impl Into<Vec<u8>>) {
        self.data = data.into();
        self.lines = LineMap::new(&self.data);
    }
}

impl DocumentSource for TextDocument {
    fn name(&self) -> &str {
        &self.name
    }

    fn text(&self) -> &[u8] {
        &self.data
    }

    fn line_text(&self, line: usize) -> Option<&[u8]> {
        let range = self.lines.line_range(&self.data, line)?;
        Some(&self.data[range])
    }

    fn offset_to_position(&self, offset: Offset) -> Option<Position> {
        self.lines.offset_to_position(offset)
    }

    fn position_to_offset(&self, pos: Position) -> Option<Offset> {
        self.lines.position_to_offset(&self.data, pos)
    }
}
