use anyhow::{Context, Result, anyhow};
use lsp_types::Url;
use playground_lens_core::{DocumentStore, PlaygroundConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// A file loaded into a fresh document store, with the config that applies to it
pub struct OpenDocument {
    pub path: PathBuf,
    pub uri: Url,
    pub store: Arc<DocumentStore>,
    pub config: PlaygroundConfig,
}

pub fn open_document(filepath: &str) -> Result<OpenDocument> {
    let filepath_path = Path::new(filepath);
    let absolute_path = if filepath_path.is_absolute() {
        filepath_path.to_path_buf()
    } else {
        std::env::current_dir()?.join(filepath_path)
    };

    if !absolute_path.is_file() {
        return Err(anyhow!("File not found: {}", absolute_path.display()));
    }
    let path = absolute_path
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", absolute_path.display()))?;

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let uri = Url::from_file_path(&path)
        .map_err(|_| anyhow!("Cannot build a file URI for {}", path.display()))?;

    let config_dir = path.parent().unwrap_or(&path);
    let config = PlaygroundConfig::discover(config_dir)
        .with_context(|| format!("Failed to load configuration for {}", path.display()))?;
    debug!("Using config {:?} for {}", config, path.display());

    let store = Arc::new(DocumentStore::new());
    store.open(uri.clone(), 0, text);

    Ok(OpenDocument {
        path,
        uri,
        store,
        config,
    })
}
