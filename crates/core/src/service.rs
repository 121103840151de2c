//! Playground discovery facade
//!
//! Ties the scanner, resolver and lens assembler to the collaborators that
//! supply documents, module names, toolchain capabilities and entry points.

use crate::{
    cancellation::CancellationToken,
    config::PlaygroundConfig,
    document::{DocumentSnapshot, DocumentStore},
    error::Result,
    interfaces::{EntryPointLensProvider, ModuleResolver, SnapshotProvider, ToolchainCapability},
    lens,
    parser::SyntaxTreeManager,
    resolver,
    scanner::MarkerScanner,
    services::{CargoModuleResolver, MainFunctionLenses, Toolchain},
    types::{MarkerRecord, PlaygroundItem, SupportedCommands},
};
use lsp_types::{CodeLens, Range, Url};
use std::sync::Arc;
use tracing::debug;
use tree_sitter::Tree;

pub struct PlaygroundService {
    documents: Arc<dyn SnapshotProvider>,
    modules: Arc<dyn ModuleResolver>,
    toolchain: Arc<dyn ToolchainCapability>,
    entry_points: Arc<dyn EntryPointLensProvider>,
    scanner: MarkerScanner,
    trees: SyntaxTreeManager,
}

impl PlaygroundService {
    pub fn new(
        config: &PlaygroundConfig,
        documents: Arc<dyn SnapshotProvider>,
        modules: Arc<dyn ModuleResolver>,
        toolchain: Arc<dyn ToolchainCapability>,
        entry_points: Arc<dyn EntryPointLensProvider>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            documents,
            modules,
            toolchain,
            entry_points,
            scanner: MarkerScanner::new(config.scan_options()),
            trees: SyntaxTreeManager::with_capacity(config.tree_cache_capacity())?,
        })
    }

    /// A service over `documents` with the Cargo resolver, the discovered
    /// toolchain and `fn main` entry points
    pub fn with_defaults(config: &PlaygroundConfig, documents: Arc<DocumentStore>) -> Result<Self> {
        Self::new(
            config,
            documents,
            Arc::new(CargoModuleResolver::new()),
            Arc::new(Toolchain::discover()),
            Arc::new(MainFunctionLenses::new()),
        )
    }

    /// Every playground in the document, in source order
    pub fn document_playgrounds(
        &self,
        uri: &Url,
        cancel: &CancellationToken,
    ) -> Result<Vec<PlaygroundItem>> {
        let snapshot = self.documents.latest_snapshot(uri)?;
        let tree = self.trees.syntax_tree(&snapshot)?;
        let module_name = self.modules.module_name(uri);
        let records = self.records(&tree, &snapshot, module_name.as_deref(), None, cancel)?;

        debug!("{} playground(s) in {}", records.len(), uri);
        Ok(records
            .into_iter()
            .map(|record| PlaygroundItem::from_record(record, uri))
            .collect())
    }

    /// Entry point lenses plus a play lens for every playground overlapping
    /// `range` (the whole document when there is no range).
    ///
    /// The range only narrows the playgrounds; entry point lenses are passed
    /// through as their provider returns them.
    pub fn code_lenses(
        &self,
        uri: &Url,
        range: Option<Range>,
        commands: &SupportedCommands,
        cancel: &CancellationToken,
    ) -> Result<Vec<CodeLens>> {
        let snapshot = self.documents.latest_snapshot(uri)?;
        let tree = self.trees.syntax_tree(&snapshot)?;
        let query = range.map(|range| snapshot.offset_range_of(range));
        let target = self.modules.resolve_target(uri);
        let module_name = target.as_ref().map(|target| target.name.as_str());
        let records = self.records(&tree, &snapshot, module_name, query, cancel)?;

        let entry_point_lenses = match &target {
            Some(target) => self
                .entry_points
                .entry_point_lenses(&tree, &snapshot, target, commands),
            None => Vec::new(),
        };

        let lenses = lens::assemble(
            &records,
            entry_point_lenses,
            commands,
            self.toolchain.play_supported(),
        );
        debug!("{} code lens(es) for {}", lenses.len(), uri);
        Ok(lenses)
    }

    fn records(
        &self,
        tree: &Tree,
        snapshot: &DocumentSnapshot,
        module_name: Option<&str>,
        query: Option<std::ops::Range<usize>>,
        cancel: &CancellationToken,
    ) -> Result<Vec<MarkerRecord>> {
        let matches = self.scanner.scan(tree, snapshot.text(), cancel)?;
        if matches.is_empty() {
            return Ok(Vec::new());
        }

        let file_base_name = resolver::file_base_name(snapshot.uri());
        let records = resolver::resolve(
            matches,
            snapshot,
            module_name,
            file_base_name.as_deref(),
            query.as_ref(),
        );
        cancel.check()?;
        Ok(records)
    }
}
