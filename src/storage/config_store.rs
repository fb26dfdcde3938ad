//! Config persistence — reads, writes and backs up `config.json`.
//!
//! The store never hands out an unnormalized config: whatever is on disk
//! goes through [`normalize`] on the way in.

use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{normalize, CueConfig};
use crate::storage::path_utils;
use crate::{CueError, CueResult};

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `{data_dir}/config.json`.
    pub fn open_default() -> Self {
        Self::new(path_utils::config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw JSON on disk. Missing or unparsable file → `Value::Null`.
    pub fn load_raw(&self) -> Value {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "Config file not readable");
                return Value::Null;
            }
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Invalid config JSON, using defaults");
            Value::Null
        })
    }

    /// Normalized config.
    ///
    /// Only a missing file is treated as first run and gets the defaults
    /// written back. An unreadable or unparsable file is left untouched and
    /// the defaults are returned for this call only.
    pub fn load(&self) -> CueConfig {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = CueConfig::default();
                if let Err(e) = self.save(&config) {
                    tracing::warn!(path = %self.path.display(), error = %e, "Failed to write default config");
                }
                return config;
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Config file not readable, using defaults");
                return CueConfig::default();
            }
        };
        match serde_json::from_str::<Value>(&content) {
            Ok(raw) => normalize(&raw),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Invalid config JSON, using defaults");
                CueConfig::default()
            }
        }
    }

    /// Write the config atomically: temp file in the same directory, then
    /// rename over the live file. Readers see the old or the new file, never
    /// a partial one.
    pub fn save(&self, config: &CueConfig) -> CueResult<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;
        let json = serde_json::to_string_pretty(config)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!(path = %self.path.display(), "Config saved");
        Ok(())
    }

    /// Overwrite with the defaults.
    pub fn reset(&self) -> CueResult<CueConfig> {
        let config = CueConfig::default();
        self.save(&config)?;
        tracing::info!(path = %self.path.display(), "Config reset to defaults");
        Ok(config)
    }

    /// Copy the current (normalized) config next to the live file as
    /// `config_backup_<timestamp>.json`.
    pub fn backup(&self) -> CueResult<PathBuf> {
        let config = self.load();
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let dest = dir.join(format!("config_backup_{}.json", timestamp));
        std::fs::write(&dest, serde_json::to_string_pretty(&config)?)?;
        tracing::info!(dest = %dest.display(), "Config backup created");
        Ok(dest)
    }

    /// Read `source`, normalize it, and make it the live config.
    pub fn import(&self, source: &Path) -> CueResult<CueConfig> {
        let content = std::fs::read_to_string(source)?;
        let raw: Value = serde_json::from_str(&content)?;
        if !raw.is_object() {
            return Err(CueError::InvalidInput(format!(
                "{} does not contain a JSON object",
                source.display()
            )));
        }
        let config = normalize(&raw);
        self.save(&config)?;
        tracing::info!(source = %source.display(), "Config imported");
        Ok(config)
    }
}
