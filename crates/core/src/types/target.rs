use serde::{Deserialize, Serialize};

/// The kind of Cargo target a source file is compiled into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// Library crate (src/lib.rs or `[lib] path`)
    Lib,
    /// Binary target (src/main.rs, src/bin/*.rs or `[[bin]] path`)
    Bin,
    /// Example (examples/*.rs or `[[example]] path`)
    Example,
    /// Integration test (tests/*.rs or `[[test]] path`)
    Test,
    /// Benchmark (benches/*.rs or `[[bench]] path`)
    Bench,
    /// Build script
    Build,
    /// Rust file outside of any Cargo project
    Standalone,
}

impl TargetKind {
    /// Whether the target produces something with a `main` to launch
    pub fn is_executable(self) -> bool {
        matches!(self, TargetKind::Bin | TargetKind::Example | TargetKind::Standalone)
    }
}

/// The compilation unit a document belongs to. Its name is the module name
/// used in playground identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrateTarget {
    pub name: String,
    pub kind: TargetKind,
}

impl CrateTarget {
    pub fn new(name: impl Into<String>, kind: TargetKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
