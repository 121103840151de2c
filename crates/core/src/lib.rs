//! playground-lens - Discovery of `playground!` markers in Rust sources
//!
//! This crate provides functionality to:
//! - Find `playground!` invocations in files that import the `playgrounds` crate
//! - Give each one a stable `<module>/<file>:<line>` identifier and an editor range
//! - Turn them into "Play" code lenses next to the usual run/debug lenses
pub mod cancellation;
pub mod config;
pub mod document;
pub mod error;
pub mod interfaces;
pub mod lens;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod service;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use cancellation::CancellationToken;
pub use config::{GatePolicy, PlaygroundConfig, ScanOptions};
pub use document::{DocumentSnapshot, DocumentStore};
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use scanner::MarkerScanner;
pub use service::PlaygroundService;
