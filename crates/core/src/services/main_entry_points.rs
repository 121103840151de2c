//! Run/debug lenses on `fn main`

use crate::{
    document::DocumentSnapshot,
    interfaces::EntryPointLensProvider,
    parser::utils::node_text,
    types::{CrateTarget, SupportedCodeLensCommand, SupportedCommands},
};
use lsp_types::{CodeLens, Command};
use serde_json::Value;
use tracing::trace;
use tree_sitter::{Node, Tree};

/// Offers "Run" and "Debug" lenses on the top-level `main` of executable targets
#[derive(Debug, Default, Clone, Copy)]
pub struct MainFunctionLenses;

impl MainFunctionLenses {
    pub fn new() -> Self {
        Self
    }

    fn find_main<'tree>(tree: &'tree Tree, source: &str) -> Option<Node<'tree>> {
        let root = tree.root_node();
        let mut cursor = root.walk();
        root.named_children(&mut cursor).find(|item| {
            item.kind() == "function_item"
                && item
                    .child_by_field_name("name")
                    .is_some_and(|name| node_text(&name, source) == "main")
        })
    }
}

impl EntryPointLensProvider for MainFunctionLenses {
    fn entry_point_lenses(
        &self,
        tree: &Tree,
        snapshot: &DocumentSnapshot,
        target: &CrateTarget,
        commands: &SupportedCommands,
    ) -> Vec<CodeLens> {
        if !target.kind.is_executable() {
            return Vec::new();
        }
        let Some(main) = Self::find_main(tree, snapshot.text()) else {
            return Vec::new();
        };
        let Some(name) = main.child_by_field_name("name") else {
            return Vec::new();
        };

        // `fn main` (including any visibility), not the whole body
        let range = snapshot.position_range_of(main.start_byte()..name.end_byte());
        trace!("Entry point `{}` at {:?}", target.name, range.start);

        [
            (SupportedCodeLensCommand::Run, "Run"),
            (SupportedCodeLensCommand::Debug, "Debug"),
        ]
        .into_iter()
        .filter_map(|(kind, verb)| {
            let command = commands.command_for(kind)?;
            Some(CodeLens {
                range,
                command: Some(Command {
                    title: format!("{verb} {}", target.name),
                    command: command.to_string(),
                    arguments: Some(vec![Value::String(target.name.clone())]),
                }),
                data: None,
            })
        })
        .collect()
    }
}
