use crate::impl_case_insensitive_deserialize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Code lens commands a client may declare support for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedCodeLensCommand {
    Run,
    Debug,
    Play,
}

impl_case_insensitive_deserialize!(
    SupportedCodeLensCommand,
    Run => "run",
    Debug => "debug",
    Play => "play"
);

/// The client's mapping from lens kind to the command string it will invoke.
///
/// Deserializes from `{"run": "rust.run", "play": "rust.play"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportedCommands {
    commands: BTreeMap<SupportedCodeLensCommand, String>,
}

impl SupportedCommands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: SupportedCodeLensCommand, command: impl Into<String>) -> Self {
        self.insert(kind, command);
        self
    }

    pub fn insert(&mut self, kind: SupportedCodeLensCommand, command: impl Into<String>) {
        self.commands.insert(kind, command.into());
    }

    /// The client command for `kind`, if the client declared one
    pub fn command_for(&self, kind: SupportedCodeLensCommand) -> Option<&str> {
        self.commands.get(&kind).map(String::as_str)
    }

    pub fn supports(&self, kind: SupportedCodeLensCommand) -> bool {
        self.commands.contains_key(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
