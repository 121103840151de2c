use super::snapshot::DocumentSnapshot;
use crate::{
    error::{Error, Result},
    interfaces::SnapshotProvider,
};
use lsp_types::Url;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, trace};

/// In-memory registry of open documents.
///
/// Every open or change installs a fresh [`DocumentSnapshot`]; snapshots
/// already handed out stay valid and unchanged.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: RwLock<HashMap<Url, Arc<DocumentSnapshot>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, uri: Url, version: i32, text: impl Into<Arc<str>>) -> Arc<DocumentSnapshot> {
        debug!("Opening document {} at version {}", uri, version);
        let snapshot = Arc::new(DocumentSnapshot::new(uri.clone(), version, text));
        self.write().insert(uri, snapshot.clone());
        snapshot
    }

    /// Replace the full text of an open document
    pub fn change(
        &self,
        uri: &Url,
        version: i32,
        text: impl Into<Arc<str>>,
    ) -> Result<Arc<DocumentSnapshot>> {
        let mut documents = self.write();
        let Some(current) = documents.get_mut(uri) else {
            return Err(Error::DocumentNotOpen(uri.clone()));
        };
        trace!(
            "Updating document {} from version {} to {}",
            uri,
            current.version(),
            version
        );
        let snapshot = Arc::new(DocumentSnapshot::new(uri.clone(), version, text));
        *current = snapshot.clone();
        Ok(snapshot)
    }

    pub fn close(&self, uri: &Url) -> Result<()> {
        debug!("Closing document {}", uri);
        self.write()
            .remove(uri)
            .map(|_| ())
            .ok_or_else(|| Error::DocumentNotOpen(uri.clone()))
    }

    pub fn is_open(&self, uri: &Url) -> bool {
        self.read().contains_key(uri)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Url, Arc<DocumentSnapshot>>> {
        self.documents
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Url, Arc<DocumentSnapshot>>> {
        self.documents
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SnapshotProvider for DocumentStore {
    fn latest_snapshot(&self, uri: &Url) -> Result<Arc<DocumentSnapshot>> {
        self.read()
            .get(uri)
            .cloned()
            .ok_or_else(|| Error::DocumentNotOpen(uri.clone()))
    }
}
