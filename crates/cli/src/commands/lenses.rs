use anyhow::{Context, Result};
use playground_lens_core::{
    CancellationToken, PlaygroundService, SupportedCodeLensCommand, SupportedCommands,
    interfaces::ToolchainCapability,
    services::{CargoModuleResolver, MainFunctionLenses, PLAY_EXECUTABLE, Toolchain},
};
use std::sync::Arc;
use tracing::debug;

use crate::cli::PlaySupport;
use crate::display::formatter::{LensSummary, print_lenses};
use crate::utils::document::open_document;
use crate::utils::parser::parse_filepath_with_lines;

const DEFAULT_RUN_COMMAND: &str = "playground.run";
const DEFAULT_DEBUG_COMMAND: &str = "playground.debug";
const DEFAULT_PLAY_COMMAND: &str = "playground.play";

pub fn lenses_command(
    filepath_arg: &str,
    run: Option<String>,
    debug: Option<String>,
    play: Option<String>,
    play_supported: PlaySupport,
    json: bool,
) -> Result<()> {
    debug!("Computing code lenses for: {}", filepath_arg);

    let (filepath, span) = parse_filepath_with_lines(filepath_arg);
    let document = open_document(&filepath)?;

    let toolchain: Arc<dyn ToolchainCapability> = Arc::new(match play_supported {
        PlaySupport::Auto => Toolchain::discover(),
        PlaySupport::Yes => Toolchain::with_play(PLAY_EXECUTABLE),
        PlaySupport::No => Toolchain::without_play(),
    });
    let service = PlaygroundService::new(
        &document.config,
        document.store.clone(),
        Arc::new(CargoModuleResolver::new()),
        toolchain,
        Arc::new(MainFunctionLenses::new()),
    )
    .context("Failed to set up playground discovery")?;

    let commands = client_commands(run, debug, play);
    let lenses = service
        .code_lenses(
            &document.uri,
            span.map(|span| span.to_range()),
            &commands,
            &CancellationToken::new(),
        )
        .with_context(|| format!("Failed to compute code lenses for {}", document.path.display()))?;

    let summaries: Vec<LensSummary> = lenses.iter().filter_map(LensSummary::from_lens).collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        print_lenses(filepath_arg, &summaries);
    }

    Ok(())
}

/// The commands a client declared. Declaring none means every kind is
/// supported under its default command name.
fn client_commands(
    run: Option<String>,
    debug: Option<String>,
    play: Option<String>,
) -> SupportedCommands {
    let mut commands = SupportedCommands::new();
    for (kind, command) in [
        (SupportedCodeLensCommand::Run, run),
        (SupportedCodeLensCommand::Debug, debug),
        (SupportedCodeLensCommand::Play, play),
    ] {
        if let Some(command) = command {
            commands.insert(kind, command);
        }
    }

    if commands.is_empty() {
        return SupportedCommands::new()
            .with(SupportedCodeLensCommand::Run, DEFAULT_RUN_COMMAND)
            .with(SupportedCodeLensCommand::Debug, DEFAULT_DEBUG_COMMAND)
            .with(SupportedCodeLensCommand::Play, DEFAULT_PLAY_COMMAND);
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_declared_commands_means_defaults() {
        let commands = client_commands(None, None, None);
        assert_eq!(
            commands.command_for(SupportedCodeLensCommand::Play),
            Some(DEFAULT_PLAY_COMMAND)
        );
        assert!(commands.supports(SupportedCodeLensCommand::Run));
        assert!(commands.supports(SupportedCodeLensCommand::Debug));
    }

    #[test]
    fn test_only_declared_commands_are_supported() {
        let commands = client_commands(Some("editor.run".to_string()), None, None);
        assert_eq!(
            commands.command_for(SupportedCodeLensCommand::Run),
            Some("editor.run")
        );
        assert!(!commands.supports(SupportedCodeLensCommand::Play));
    }
}
