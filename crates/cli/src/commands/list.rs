use anyhow::{Context, Result};
use playground_lens_core::{CancellationToken, PlaygroundService};
use tracing::debug;

use crate::display::formatter::print_playgrounds;
use crate::utils::document::open_document;

pub fn list_command(filepath: &str, json: bool) -> Result<()> {
    debug!("Listing playgrounds in: {}", filepath);

    let document = open_document(filepath)?;
    let service = PlaygroundService::with_defaults(&document.config, document.store.clone())
        .context("Failed to set up playground discovery")?;

    let items = service
        .document_playgrounds(&document.uri, &CancellationToken::new())
        .with_context(|| format!("Failed to discover playgrounds in {}", document.path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print_playgrounds(filepath, &items);
    }

    Ok(())
}
