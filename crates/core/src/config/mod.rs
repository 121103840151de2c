//! Configuration management for playground-lens

mod settings;

// Re-export main types
pub use settings::{CONFIG_FILE_NAMES, GatePolicy, PlaygroundConfig, ScanOptions};
