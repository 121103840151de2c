use lsp_types::Range;
use serde::{Deserialize, Serialize};
use std::ops::Range as ByteRange;

/// A `playground!` invocation accepted by the scanner, before it has an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatch {
    /// Byte extent of the invocation, excluding surrounding trivia
    pub range: ByteRange<usize>,
    pub label: Option<String>,
}

impl MarkerMatch {
    pub fn new(range: ByteRange<usize>, label: Option<String>) -> Self {
        Self { range, label }
    }

    /// Half-open overlap. Ranges that only share an endpoint do not overlap,
    /// and an empty query overlaps nothing.
    pub fn overlaps(&self, query: &ByteRange<usize>) -> bool {
        !query.is_empty() && self.range.start < query.end && query.start < self.range.end
    }
}

/// A marker with a protocol range and a stable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerRecord {
    pub id: String,
    pub label: Option<String>,
    pub range: Range,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_half_open() {
        let marker = MarkerMatch::new(10..20, None);

        assert!(marker.overlaps(&(15..30)));
        assert!(marker.overlaps(&(0..11)));
        assert!(marker.overlaps(&(12..13)));
        assert!(marker.overlaps(&(0..100)));

        // Touching endpoints
        assert!(!marker.overlaps(&(20..30)));
        assert!(!marker.overlaps(&(0..10)));

        // Strictly outside
        assert!(!marker.overlaps(&(25..30)));

        // Empty query
        assert!(!marker.overlaps(&(15..15)));
    }
}
