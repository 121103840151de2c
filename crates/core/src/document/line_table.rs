use lsp_types::Position;

/// Byte offsets of every line start in a text, used to translate between
/// byte offsets and protocol positions (0-based line, UTF-16 column).
///
/// `\n`, `\r\n` and a lone `\r` all terminate a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTable {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineTable {
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = vec![0];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => line_starts.push(i + 1),
                b'\r' if bytes.get(i + 1) != Some(&b'\n') => line_starts.push(i + 1),
                _ => {}
            }
            i += 1;
        }
        Self {
            line_starts,
            len: text.len(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where `line` starts, if the line exists
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Byte offset one past the last content byte of `line`, excluding its terminator
    fn line_content_end(&self, text: &str, line: usize) -> usize {
        let next = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.len);
        let bytes = text.as_bytes();
        let mut end = next;
        if end > self.line_starts[line] && bytes.get(end - 1) == Some(&b'\n') {
            end -= 1;
        }
        if end > self.line_starts[line] && bytes.get(end - 1) == Some(&b'\r') {
            end -= 1;
        }
        end
    }

    /// Convert a byte offset to a position. Offsets past the end clamp to the
    /// end of the text and offsets inside a character clamp to its start.
    pub fn offset_to_position(&self, text: &str, offset: usize) -> Position {
        let mut offset = offset.min(self.len);
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }

        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line];
        let character: usize = text[line_start..offset]
            .chars()
            .map(char::len_utf16)
            .sum();

        Position::new(line as u32, character as u32)
    }

    /// Convert a position back to a byte offset. Columns past the end of the
    /// line clamp to the line end; lines past the end clamp to the text length.
    pub fn position_to_offset(&self, text: &str, position: Position) -> usize {
        let line = position.line as usize;
        let Some(line_start) = self.line_start(line) else {
            return self.len;
        };
        let line_end = self.line_content_end(text, line);

        let mut utf16_count = 0u32;
        for (byte_idx, ch) in text[line_start..line_end].char_indices() {
            if utf16_count >= position.character {
                return line_start + byte_idx;
            }
            utf16_count += ch.len_utf16() as u32;
        }
        line_end
    }
}
