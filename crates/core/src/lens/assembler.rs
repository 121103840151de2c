use crate::types::{MarkerRecord, SupportedCodeLensCommand, SupportedCommands, TextDocumentPlayground};
use lsp_types::{CodeLens, Command};
use tracing::{debug, warn};

/// Merge entry point lenses with one "play" lens per marker.
///
/// Play lenses need both a client command for [`SupportedCodeLensCommand::Play`]
/// and a toolchain that can play; without either they are left out. The
/// result is ordered by range start, entry point lenses first on ties.
pub fn assemble(
    records: &[MarkerRecord],
    entry_point_lenses: Vec<CodeLens>,
    commands: &SupportedCommands,
    play_supported: bool,
) -> Vec<CodeLens> {
    let mut lenses = entry_point_lenses;

    match commands.command_for(SupportedCodeLensCommand::Play) {
        Some(_) if !play_supported => {
            debug!(
                "Toolchain cannot play; omitting {} playground lens(es)",
                records.len()
            );
        }
        Some(command) => {
            lenses.extend(records.iter().filter_map(|record| play_lens(record, command)));
        }
        None => {}
    }

    // Stable, so ties keep entry point lenses ahead in their supplied order
    lenses.sort_by_key(|lens| (lens.range.start.line, lens.range.start.character));
    lenses
}

fn play_lens(record: &MarkerRecord, command: &str) -> Option<CodeLens> {
    let title = format!("Play \"{}\"", record.label.as_deref().unwrap_or(&record.id));
    let argument = match serde_json::to_value(TextDocumentPlayground::from(record)) {
        Ok(argument) => argument,
        Err(e) => {
            warn!("Failed to encode playground {}: {}", record.id, e);
            return None;
        }
    };

    Some(CodeLens {
        range: record.range,
        command: Some(Command {
            title,
            command: command.to_string(),
            arguments: Some(vec![argument]),
        }),
        data: None,
    })
}
