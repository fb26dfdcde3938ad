use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::path::Path;

use claude_code_cue::config::normalize;
use claude_code_cue::storage::ConfigStore;

/// `config show` — display the full (normalized) config.
pub fn run_show(store: &ConfigStore) -> Result<()> {
    let config = store.load();
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// `config get <key>` — display a single config value.
///
/// Key uses dot notation: `globalSettings.volume`, `toolSoundConfig.Bash.error`
pub fn run_get(store: &ConfigStore, key: &str) -> Result<()> {
    let config = store.load().to_value();
    match resolve_path(&config, key) {
        Some(v) => println!("{}", serde_json::to_string_pretty(v)?),
        None => bail!("Key not found: {}", key),
    }
    Ok(())
}

/// `config set <key> <value>` — set a value, re-normalize, save.
///
/// Value is parsed as JSON (bool, number, null, string), falling back to a
/// plain string. A value the normalizer rejects is reported, not saved.
pub fn run_set(store: &ConfigStore, key: &str, value: &str) -> Result<()> {
    let mut raw = store.load().to_value();
    let parsed: Value =
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));

    set_path(&mut raw, key, parsed.clone())?;
    let config = normalize(&raw);
    let stored = config.to_value();

    match resolve_path(&stored, key) {
        Some(v) if *v == parsed => {}
        Some(v) => eprintln!(
            "Warning: {} normalized to {}",
            key,
            serde_json::to_string(v)?
        ),
        None => eprintln!("Warning: {} is not a recognized setting and was dropped", key),
    }

    store.save(&config).context("Failed to save config")?;
    println!("{} = {}", key, serde_json::to_string(&parsed)?);
    Ok(())
}

/// `config reset`
pub fn run_reset(store: &ConfigStore) -> Result<()> {
    store.reset().context("Failed to reset config")?;
    println!("Config reset to defaults: {}", store.path().display());
    Ok(())
}

/// `config backup`
pub fn run_backup(store: &ConfigStore) -> Result<()> {
    let dest = store.backup().context("Failed to back up config")?;
    println!("Backup written to {}", dest.display());
    Ok(())
}

/// `config import <file>`
pub fn run_import(store: &ConfigStore, source: &Path) -> Result<()> {
    store
        .import(source)
        .with_context(|| format!("Failed to import {}", source.display()))?;
    println!("Imported {} into {}", source.display(), store.path().display());
    Ok(())
}

/// `config path`
pub fn run_path(store: &ConfigStore) -> Result<()> {
    println!("{}", store.path().display());
    Ok(())
}

/// Resolve a dot-separated path in a JSON value.
fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Set a value at a dot-separated path, creating intermediate objects as needed.
fn set_path(root: &mut Value, path: &str, value: Value) -> Result<()> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        bail!("Invalid key path: '{}'", path);
    }
    insert_at(root, &segments, value);
    Ok(())
}

fn insert_at(node: &mut Value, segments: &[&str], value: Value) {
    let Some((first, rest)) = segments.split_first() else {
        *node = value;
        return;
    };
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    if let Value::Object(map) = node {
        let child = map.entry(first.to_string()).or_insert(Value::Null);
        insert_at(child, rest, value);
    }
}
