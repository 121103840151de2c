//! Toolchain capability interface

/// Trait exposing what the active toolchain can do
pub trait ToolchainCapability: Send + Sync {
    /// Whether an executable able to run a single playground is available
    fn play_supported(&self) -> bool;
}

impl ToolchainCapability for bool {
    fn play_supported(&self) -> bool {
        *self
    }
}
