use anyhow::{Context, Result};
use std::io::Read;

use claude_code_cue::classifier::ExecutionRecord;
use claude_code_cue::resolver;
use claude_code_cue::storage::ConfigStore;

/// `classify` — read an execution record (JSON) on stdin, print its outcome
/// and the sound it maps to.
pub fn run(store: &ConfigStore) -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    let record: ExecutionRecord =
        serde_json::from_str(&input).context("Expected an execution record JSON on stdin")?;

    let config = store.load();
    let (outcome, sound) = resolver::resolve_for_record(&config, &record);
    println!("outcome: {}", outcome);
    println!("sound:   {}", sound.unwrap_or("(none)"));
    Ok(())
}
