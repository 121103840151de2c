use anyhow::Result;
use clap::Parser;
use playground_lens::{Cargo, CargoCommand, Playground};

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // `cargo playground ...` invokes us as `cargo-playground playground ...`
    let args: Vec<String> = std::env::args().collect();
    let command = if args.get(1).map(String::as_str) == Some("playground") {
        let CargoCommand::Playground(playground) = Cargo::parse().command;
        playground.command
    } else {
        Playground::parse().command
    };

    command.execute()
}
