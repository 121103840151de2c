//! Collaborator interfaces
//!
//! The discovery core only depends on these traits. Default implementations
//! live in [`crate::services`]; an editor integration can swap any of them
//! for its own build graph, document manager or toolchain registry.

pub mod entry_points;
pub mod module_resolver;
pub mod snapshot_provider;
pub mod toolchain;

pub use entry_points::EntryPointLensProvider;
pub use module_resolver::ModuleResolver;
pub use snapshot_provider::SnapshotProvider;
pub use toolchain::ToolchainCapability;
