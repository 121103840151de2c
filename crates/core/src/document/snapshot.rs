use super::line_table::LineTable;
use lsp_types::{Position, Range, Url};
use std::ops::Range as ByteRange;
use std::sync::Arc;

/// An immutable view of a document at one version.
///
/// Edits never touch an existing snapshot; they produce a new one. All
/// position math goes through the snapshot's line table.
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
    uri: Url,
    version: i32,
    text: Arc<str>,
    line_table: LineTable,
}

impl DocumentSnapshot {
    pub fn new(uri: Url, version: i32, text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let line_table = LineTable::new(&text);
        Self {
            uri,
            version,
            text,
            line_table,
        }
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text buffer itself, shared with every clone of this snapshot
    pub fn shared_text(&self) -> &Arc<str> {
        &self.text
    }

    pub fn line_table(&self) -> &LineTable {
        &self.line_table
    }

    pub fn offset_to_position(&self, offset: usize) -> Position {
        self.line_table.offset_to_position(&self.text, offset)
    }

    pub fn position_to_offset(&self, position: Position) -> usize {
        self.line_table.position_to_offset(&self.text, position)
    }

    /// Protocol range of a byte range
    pub fn position_range_of(&self, range: ByteRange<usize>) -> Range {
        Range::new(
            self.offset_to_position(range.start),
            self.offset_to_position(range.end),
        )
    }

    /// Byte range of a protocol range
    pub fn offset_range_of(&self, range: Range) -> ByteRange<usize> {
        self.position_to_offset(range.start)..self.position_to_offset(range.end)
    }
}
