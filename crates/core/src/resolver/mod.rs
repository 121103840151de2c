//! Turns scanner matches into located, identified marker records
//!
//! Identifiers have the form `<module>/<file>:<line>`, with 1-based lines.
//! When two retained markers start on the same line, every identifier of the
//! result gets a `:<column>` suffix (1-based UTF-16 column), never just some.

use crate::{
    document::DocumentSnapshot,
    types::{MarkerMatch, MarkerRecord},
};
use lsp_types::{Position, Url};
use std::collections::HashSet;
use std::ops::Range;
use tracing::debug;

/// Resolve `matches` against `snapshot`.
///
/// Returns an empty list when the module or file name is unknown: records
/// are never emitted without a complete identifier. With a `query`, only
/// markers overlapping it (half-open) are kept, in their original order.
pub fn resolve(
    matches: Vec<MarkerMatch>,
    snapshot: &DocumentSnapshot,
    module_name: Option<&str>,
    file_base_name: Option<&str>,
    query: Option<&Range<usize>>,
) -> Vec<MarkerRecord> {
    let (Some(module_name), Some(file_base_name)) = (module_name, file_base_name) else {
        debug!(
            "Cannot identify playgrounds in {} (module: {:?}, file: {:?})",
            snapshot.uri(),
            module_name,
            file_base_name
        );
        return Vec::new();
    };

    let located: Vec<(MarkerMatch, lsp_types::Range)> = matches
        .into_iter()
        .filter(|marker| query.is_none_or(|query| marker.overlaps(query)))
        .map(|marker| {
            let range = snapshot.position_range_of(marker.range.clone());
            (marker, range)
        })
        .collect();

    let with_column = has_line_collision(located.iter().map(|(_, range)| range.start));
    let base_id = format!("{module_name}/{file_base_name}");

    located
        .into_iter()
        .map(|(marker, range)| MarkerRecord {
            id: playground_id(&base_id, range.start, with_column),
            label: marker.label,
            range,
        })
        .collect()
}

/// `"{base_id}:{line}"` or `"{base_id}:{line}:{column}"`, both 1-based
pub fn playground_id(base_id: &str, start: Position, with_column: bool) -> String {
    if with_column {
        format!("{base_id}:{}:{}", start.line + 1, start.character + 1)
    } else {
        format!("{base_id}:{}", start.line + 1)
    }
}

/// Last path segment of a `file://` URI
pub fn file_base_name(uri: &Url) -> Option<String> {
    let path = uri.to_file_path().ok()?;
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}

fn has_line_collision(starts: impl Iterator<Item = Position>) -> bool {
    let mut seen = HashSet::new();
    starts.into_iter().any(|start| !seen.insert(start.line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(text: &str) -> DocumentSnapshot {
        let uri = Url::parse("file:///work/Mod/src/File.rs").unwrap();
        DocumentSnapshot::new(uri, 1, text)
    }

    /// Markers for every occurrence of `needle`, each spanning the needle itself
    fn markers(text: &str, needle: &str) -> Vec<MarkerMatch> {
        text.match_indices(needle)
            .map(|(start, _)| MarkerMatch::new(start..start + needle.len(), None))
            .collect()
    }

    fn ids(records: &[MarkerRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_line_only_ids() {
        let text = "a\nMARK\n\nMARK\n";
        let snap = snapshot(text);
        let records = resolve(markers(text, "MARK"), &snap, Some("Mod"), Some("File.rs"), None);

        assert_eq!(ids(&records), vec!["Mod/File.rs:2", "Mod/File.rs:4"]);
        assert_eq!(records[0].range.start, Position::new(1, 0));
        assert_eq!(records[0].range.end, Position::new(1, 4));
    }

    #[test]
    fn test_collision_adds_column_to_every_id() {
        let text = "MARK\nMARK;  MARK\n";
        let snap = snapshot(text);
        let records = resolve(markers(text, "MARK"), &snap, Some("Mod"), Some("File.rs"), None);

        assert_eq!(
            ids(&records),
            vec!["Mod/File.rs:1:1", "Mod/File.rs:2:1", "Mod/File.rs:2:8"]
        );
    }

    #[test]
    fn test_columns_count_utf16_units() {
        let text = "/*😀*/MARK MARK";
        let snap = snapshot(text);
        let records = resolve(markers(text, "MARK"), &snap, Some("Mod"), Some("File.rs"), None);

        // The emoji is four bytes but two UTF-16 units
        assert_eq!(ids(&records), vec!["Mod/File.rs:1:7", "Mod/File.rs:1:12"]);
    }

    #[test]
    fn test_unknown_identity_yields_nothing() {
        let text = "MARK";
        let snap = snapshot(text);

        assert!(resolve(markers(text, "MARK"), &snap, None, Some("File.rs"), None).is_empty());
        assert!(resolve(markers(text, "MARK"), &snap, Some("Mod"), None, None).is_empty());
    }

    #[test]
    fn test_query_range_is_exact_overlap() {
        // Markers at bytes 0..4, 10..14 and 20..24
        let text = "MARK......MARK......MARK";
        let snap = snapshot(text);
        let resolve_in = |query: Range<usize>| {
            resolve(markers(text, "MARK"), &snap, Some("Mod"), Some("File.rs"), Some(&query))
        };

        // Partially inside
        assert_eq!(resolve_in(12..16).len(), 1);
        // Touching at either endpoint
        assert!(resolve_in(4..10).is_empty());
        assert!(resolve_in(14..20).is_empty());
        // Strictly outside
        assert!(resolve_in(5..9).is_empty());
        // Spanning two markers keeps their order
        let records = resolve_in(3..11);
        assert_eq!(records.len(), 2);
        assert!(records[0].range.start < records[1].range.start);
    }

    #[test]
    fn test_collision_is_checked_on_filtered_set() {
        let text = "MARK MARK\nMARK\n";
        let snap = snapshot(text);
        let line_two = 10..14;

        let records = resolve(
            markers(text, "MARK"),
            &snap,
            Some("Mod"),
            Some("File.rs"),
            Some(&line_two),
        );
        assert_eq!(ids(&records), vec!["Mod/File.rs:2"]);
    }

    #[test]
    fn test_ids_stable_under_trailing_edits() {
        let before = "x\nMARK\n";
        let after = "x\nMARK\nfn more() {}\nMARK\n";

        let first = resolve(
            markers(before, "MARK"),
            &snapshot(before),
            Some("Mod"),
            Some("File.rs"),
            None,
        );
        let second = resolve(
            markers(after, "MARK"),
            &snapshot(after),
            Some("Mod"),
            Some("File.rs"),
            None,
        );
        assert_eq!(first[0].id, second[0].id);

        let shifted = "x\n\nMARK\n";
        let third = resolve(
            markers(shifted, "MARK"),
            &snapshot(shifted),
            Some("Mod"),
            Some("File.rs"),
            None,
        );
        assert_ne!(first[0].id, third[0].id);
    }

    #[test]
    fn test_file_base_name() {
        let uri = Url::parse("file:///work/demo/src/bin/tool.rs").unwrap();
        assert_eq!(file_base_name(&uri).as_deref(), Some("tool.rs"));

        let untitled = Url::parse("untitled:Untitled-1").unwrap();
        assert_eq!(file_base_name(&untitled), None);
    }
}
