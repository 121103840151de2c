use anyhow::{Context, Result};
use playground_lens_core::{PlaygroundConfig, config::CONFIG_FILE_NAMES};
use std::{env, path::PathBuf};
use tracing::info;

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    // Determine the project root
    let project_root = if let Some(cwd) = cwd {
        PathBuf::from(cwd)
    } else {
        env::current_dir().context("Failed to get current directory")?
    };

    let project_root = project_root
        .canonicalize()
        .context("Failed to canonicalize project root")?;

    let config_path = project_root.join(CONFIG_FILE_NAMES[0]);
    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    info!("Writing default configuration to {}", config_path.display());
    PlaygroundConfig::with_defaults()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!("✅ Created config: {}", config_path.display());
    println!("\n📌 Settings:");
    println!("   import_name          crate whose import enables playgrounds");
    println!("   macro_name           macro that declares a playground");
    println!("   gate_policy          \"whole_file\" or \"before_use\"");
    println!("   tree_cache_capacity  number of parsed files kept in memory");

    Ok(())
}
