use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{init_command, lenses_command, list_command};

#[derive(Parser)]
#[command(bin_name = "cargo")]
#[command(version, propagate_version = true)]
pub struct Cargo {
    #[command(subcommand)]
    pub command: CargoCommand,
}

#[derive(Subcommand, Debug)]
pub enum CargoCommand {
    #[command(name = "playground")]
    #[command(about = "Find playground! markers in Rust files")]
    Playground(Playground),
}

#[derive(Parser, Debug)]
#[command(name = "cargo-playground")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Playground {
    #[command(subcommand)]
    pub command: Commands,
}

/// Whether the toolchain can play a single playground
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaySupport {
    /// Look for cargo-play (or $PLAYGROUND_LENS_PLAY)
    #[default]
    Auto,
    Yes,
    No,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every playground in a Rust file
    #[command(visible_alias = "l")]
    List {
        /// Path to the Rust file
        filepath: String,

        /// Print the playgrounds as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the code lenses an editor would display
    Lenses {
        /// Path to the Rust file with an optional line or line span (e.g., src/main.rs:10-20)
        filepath: String,

        /// Client command for "Run" lenses
        #[arg(long, value_name = "CMD")]
        run: Option<String>,

        /// Client command for "Debug" lenses
        #[arg(long, value_name = "CMD")]
        debug: Option<String>,

        /// Client command for "Play" lenses
        #[arg(long, value_name = "CMD")]
        play: Option<String>,

        /// Whether play lenses may be offered
        #[arg(long, value_enum, default_value_t = PlaySupport::Auto)]
        play_supported: PlaySupport,

        /// Print the lenses as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a playground-lens configuration file
    Init {
        /// Specify the current working directory
        #[arg(short, long)]
        cwd: Option<String>,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::List { filepath, json } => list_command(&filepath, json),
            Commands::Lenses {
                filepath,
                run,
                debug,
                play,
                play_supported,
                json,
            } => lenses_command(&filepath, run, debug, play, play_supported, json),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
