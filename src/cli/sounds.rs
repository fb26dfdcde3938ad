use anyhow::{Context, Result};
use std::path::Path;

use claude_code_cue::storage::ConfigStore;

/// `sounds list` — every sound in the configured directory.
pub fn list(store: &ConfigStore) -> Result<()> {
    let library = super::library(store);
    let sounds = library
        .list_sounds()
        .with_context(|| format!("Failed to read {}", library.dir().display()))?;

    if sounds.is_empty() {
        println!("No sounds in {}", library.dir().display());
        return Ok(());
    }

    println!("{:<28} {:<14} DESCRIPTION", "ID", "CATEGORY");
    println!("{}", "-".repeat(64));
    for s in &sounds {
        println!("{:<28} {:<14} {}", s.id, s.category.as_str(), s.description);
    }
    println!("\n{} sound(s) in {}", sounds.len(), library.dir().display());
    Ok(())
}

/// `sounds preview <id>` — play one sound at the configured volume.
pub fn preview(store: &ConfigStore, id: &str) -> Result<()> {
    let volume = store.load().global_settings.volume;
    super::library(store)
        .play(id, volume)
        .with_context(|| format!("Failed to play '{}'", id))?;
    Ok(())
}

/// `sounds install <dir>` — copy a sound pack into the library.
pub fn install(store: &ConfigStore, source: &Path) -> Result<()> {
    let library = super::library(store);
    let count = library
        .install_sound_pack(source)
        .with_context(|| format!("Failed to install sounds from {}", source.display()))?;
    println!("Installed {} sound(s) into {}", count, library.dir().display());
    Ok(())
}
