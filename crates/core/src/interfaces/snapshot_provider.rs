//! Document snapshot interface

use crate::{document::DocumentSnapshot, error::Result};
use lsp_types::Url;
use std::sync::Arc;

/// Trait for looking up the current immutable snapshot of a document
pub trait SnapshotProvider: Send + Sync {
    /// Fails with [`crate::Error::DocumentNotOpen`] if the document is not open
    fn latest_snapshot(&self, uri: &Url) -> Result<Arc<DocumentSnapshot>>;
}
