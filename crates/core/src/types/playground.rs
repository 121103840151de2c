use lsp_types::{Location, Range};
use serde::{Deserialize, Serialize};

use super::marker::MarkerRecord;

/// Whole-document discovery result: one playground and where it lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundItem {
    /// Identifies the playground, e.g. `my_crate/lib.rs:7`
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub location: Location,
}

impl PlaygroundItem {
    pub fn from_record(record: MarkerRecord, uri: &lsp_types::Url) -> Self {
        Self {
            id: record.id,
            label: record.label,
            location: Location {
                uri: uri.clone(),
                range: record.range,
            },
        }
    }
}

/// A playground as carried in a code lens command. The document is implied
/// by the lens, so only the range is included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentPlayground {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub range: Range,
}

impl From<&MarkerRecord> for TextDocumentPlayground {
    fn from(record: &MarkerRecord) -> Self {
        Self {
            id: record.id.clone(),
            label: record.label.clone(),
            range: record.range,
        }
    }
}
