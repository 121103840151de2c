//! Default implementations of the collaborator interfaces

pub mod cargo_module_resolver;
pub mod main_entry_points;
pub mod toolchain;

pub use cargo_module_resolver::CargoModuleResolver;
pub use main_entry_points::MainFunctionLenses;
pub use toolchain::{PLAY_EXECUTABLE, PLAY_EXECUTABLE_ENV, Toolchain};
