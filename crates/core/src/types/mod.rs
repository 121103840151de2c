pub mod command;
pub mod marker;
pub mod playground;
pub mod target;

// Re-export commonly used types
pub use command::{SupportedCodeLensCommand, SupportedCommands};
pub use marker::{MarkerMatch, MarkerRecord};
pub use playground::{PlaygroundItem, TextDocumentPlayground};
pub use target::{CrateTarget, TargetKind};
