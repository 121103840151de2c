use crate::{
    error::{Error, Result},
    impl_case_insensitive_deserialize,
    parser::syntax_tree::DEFAULT_TREE_CACHE_CAPACITY,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAMES: [&str; 2] = [".playground-lens.json", "playground-lens.json"];

/// When the import gate is evaluated relative to the markers it admits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GatePolicy {
    /// The import may appear anywhere in the file, including after markers
    #[default]
    WholeFile,
    /// Only markers after the import (in source order) count
    BeforeUse,
}

impl_case_insensitive_deserialize!(
    GatePolicy,
    WholeFile => "whole_file",
    BeforeUse => "before_use"
);

/// What the scanner looks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Crate whose import opts a file in
    pub import_name: String,
    /// Macro that declares a playground
    pub macro_name: String,
    pub gate_policy: GatePolicy,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            import_name: "playgrounds".to_string(),
            macro_name: "playground".to_string(),
            gate_policy: GatePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PlaygroundConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macro_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_policy: Option<GatePolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_cache_capacity: Option<usize>,
}

impl PlaygroundConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load the nearest config above `start_path`, or the defaults if there is none
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                debug!("Loading config from {:?}", path);
                Self::load_from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// A config with every field spelled out, as written by `init`
    pub fn with_defaults() -> Self {
        let scan = ScanOptions::default();
        Self {
            import_name: Some(scan.import_name),
            macro_name: Some(scan.macro_name),
            gate_policy: Some(scan.gate_policy),
            tree_cache_capacity: Some(DEFAULT_TREE_CACHE_CAPACITY),
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("import_name", &self.import_name),
            ("macro_name", &self.macro_name),
        ] {
            if let Some(value) = value {
                if !is_identifier(value) {
                    return Err(Error::ConfigError(format!(
                        "{field} must be a Rust identifier, got '{value}'"
                    )));
                }
            }
        }
        if self.tree_cache_capacity == Some(0) {
            return Err(Error::ConfigError(
                "tree_cache_capacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn scan_options(&self) -> ScanOptions {
        let defaults = ScanOptions::default();
        ScanOptions {
            import_name: self.import_name.clone().unwrap_or(defaults.import_name),
            macro_name: self.macro_name.clone().unwrap_or(defaults.macro_name),
            gate_policy: self.gate_policy.unwrap_or(defaults.gate_policy),
        }
    }

    pub fn tree_cache_capacity(&self) -> usize {
        self.tree_cache_capacity
            .unwrap_or(DEFAULT_TREE_CACHE_CAPACITY)
    }
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}
