//! Module resolution interface
//!
//! Maps a document to the compilation target it belongs to.

use crate::types::CrateTarget;
use lsp_types::Url;

/// Trait for resolving the target (and therefore module name) of a document
pub trait ModuleResolver: Send + Sync {
    /// The target `uri` is compiled into, or `None` when it is not part of
    /// any resolvable target
    fn resolve_target(&self, uri: &Url) -> Option<CrateTarget>;

    /// The module name used in playground identifiers
    fn module_name(&self, uri: &Url) -> Option<String> {
        self.resolve_target(uri).map(|target| target.name)
    }
}
