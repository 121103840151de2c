use lsp_types::{Position, Range};

/// Inclusive span of 0-based lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: u32,
    pub end: u32,
}

impl LineSpan {
    /// The editor range covering every character of the spanned lines
    pub fn to_range(self) -> Range {
        Range::new(
            Position::new(self.start, 0),
            Position::new(self.end.saturating_add(1), 0),
        )
    }
}

/// Split `path`, `path:line` or `path:first-last` (1-based lines).
///
/// Anything after the last colon that is not a valid line span is treated
/// as part of the path.
pub fn parse_filepath_with_lines(filepath_arg: &str) -> (String, Option<LineSpan>) {
    let Some((path_part, line_part)) = filepath_arg.rsplit_once(':') else {
        return (filepath_arg.to_string(), None);
    };

    match parse_line_span(line_part) {
        Some(span) => (path_part.to_string(), Some(span)),
        None => (filepath_arg.to_string(), None),
    }
}

fn parse_line_span(text: &str) -> Option<LineSpan> {
    let (first, last) = match text.split_once('-') {
        Some((first, last)) => (first.parse::<u32>().ok()?, last.parse::<u32>().ok()?),
        None => {
            let line = text.parse::<u32>().ok()?;
            (line, line)
        }
    };
    if first == 0 || last < first {
        return None;
    }
    // Convert 1-based to 0-based
    Some(LineSpan {
        start: first - 1,
        end: last - 1,
    })
}
