//! Toolchain capability discovery

use crate::interfaces::ToolchainCapability;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Executable that runs a single playground
pub const PLAY_EXECUTABLE: &str = "cargo-play";

/// Overrides the `PATH` lookup of [`PLAY_EXECUTABLE`]
pub const PLAY_EXECUTABLE_ENV: &str = "PLAYGROUND_LENS_PLAY";

/// The active toolchain, as far as playgrounds are concerned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toolchain {
    play_executable: Option<PathBuf>,
}

impl Toolchain {
    /// Look for a play executable in `PLAYGROUND_LENS_PLAY`, then on `PATH`
    pub fn discover() -> Self {
        let play_executable = match std::env::var_os(PLAY_EXECUTABLE_ENV) {
            Some(value) if !value.is_empty() => {
                let path = PathBuf::from(value);
                path.is_file().then_some(path)
            }
            _ => find_on_path(PLAY_EXECUTABLE),
        };
        debug!("Play executable: {:?}", play_executable);
        Self { play_executable }
    }

    pub fn with_play(executable: impl Into<PathBuf>) -> Self {
        Self {
            play_executable: Some(executable.into()),
        }
    }

    pub fn without_play() -> Self {
        Self::default()
    }

    pub fn play_executable(&self) -> Option<&Path> {
        self.play_executable.as_deref()
    }
}

impl ToolchainCapability for Toolchain {
    fn play_supported(&self) -> bool {
        self.play_executable.is_some()
    }
}

fn find_on_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var).find_map(|dir| {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        let windows = candidate.with_extension("exe");
        windows.is_file().then_some(windows)
    })
}
