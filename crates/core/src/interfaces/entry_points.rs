//! Entry point lens interface

use crate::{
    document::DocumentSnapshot,
    types::{CrateTarget, SupportedCommands},
};
use lsp_types::CodeLens;
use tree_sitter::Tree;

/// Trait for computing run/debug lenses of a document.
///
/// Lenses are returned in the order they should be shown when they share a
/// start position (run before debug).
pub trait EntryPointLensProvider: Send + Sync {
    fn entry_point_lenses(
        &self,
        tree: &Tree,
        snapshot: &DocumentSnapshot,
        target: &CrateTarget,
        commands: &SupportedCommands,
    ) -> Vec<CodeLens>;
}
