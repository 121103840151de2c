use super::rust_parser::RustParser;
use crate::{
    document::DocumentSnapshot,
    error::{Error, Result},
};
use lru::LruCache;
use lsp_types::Url;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use tracing::{debug, trace};

pub const DEFAULT_TREE_CACHE_CAPACITY: usize = 32;

type TreeCache = LruCache<(Url, i32), CachedTree>;

/// A parsed tree together with the exact text it was parsed from
struct CachedTree {
    text: Arc<str>,
    tree: tree_sitter::Tree,
}

impl CachedTree {
    /// A reopened document or a repeated version may reuse a key with new text
    fn parsed_from(&self, text: &Arc<str>) -> bool {
        Arc::ptr_eq(&self.text, text) || *self.text == **text
    }
}

/// Parses snapshots on demand and keeps the most recent trees around,
/// keyed by document and version.
pub struct SyntaxTreeManager {
    parser: Mutex<RustParser>,
    trees: Mutex<TreeCache>,
}

impl SyntaxTreeManager {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity)
            .ok_or_else(|| Error::ConfigError("tree cache capacity must be > 0".to_string()))?;
        Ok(Self {
            parser: Mutex::new(RustParser::new()?),
            trees: Mutex::new(LruCache::new(capacity)),
        })
    }

    /// The syntax tree of `snapshot`, parsing it if it is not cached
    pub fn syntax_tree(&self, snapshot: &DocumentSnapshot) -> Result<tree_sitter::Tree> {
        let key = (snapshot.uri().clone(), snapshot.version());
        let text = snapshot.shared_text();

        if let Some(cached) = self.lock_trees()?.get(&key) {
            if cached.parsed_from(text) {
                trace!("Syntax tree cache hit for {} v{}", key.0, key.1);
                return Ok(cached.tree.clone());
            }
            debug!("Text of {} v{} changed; reparsing", key.0, key.1);
        }

        trace!("Parsing {} v{}", key.0, key.1);
        let tree = self
            .parser
            .lock()
            .map_err(|_| Error::Other("parser lock poisoned".to_string()))?
            .parse(snapshot.text())?;

        self.lock_trees()?.put(
            key,
            CachedTree {
                text: text.clone(),
                tree: tree.clone(),
            },
        );
        Ok(tree)
    }

    fn lock_trees(&self) -> Result<std::sync::MutexGuard<'_, TreeCache>> {
        self.trees
            .lock()
            .map_err(|_| Error::Other("syntax tree cache lock poisoned".to_string()))
    }
}
