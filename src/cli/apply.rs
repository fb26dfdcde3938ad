use anyhow::Result;
use std::path::PathBuf;

use claude_code_cue::hook_setup;
use claude_code_cue::storage::path_utils;

/// `apply [--settings <path>]` — install cue hooks into Claude Code settings.
pub fn run(settings: Option<PathBuf>) -> Result<()> {
    let path = settings.unwrap_or_else(path_utils::claude_settings_path);
    let bin = hook_setup::resolve_bin_path();
    let events = hook_setup::install_cue_hooks(&path, &bin)?;
    println!("Installed {} hook(s) into {}:", events.len(), path.display());
    for event in events {
        println!("  {}", event);
    }
    Ok(())
}
