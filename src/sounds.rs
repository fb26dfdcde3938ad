//! Sound library: lists the sound files in a directory, looks them up by
//! id or filename, and plays them through the platform's command-line
//! player.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::constants::SUPPORTED_SOUND_EXTENSIONS;
use crate::{CueError, CueResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundCategory {
    Error,
    Success,
    Notification,
    Interaction,
    General,
}

impl SoundCategory {
    /// Guess from keywords in the filename.
    pub fn from_filename(filename: &str) -> Self {
        let name = filename.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| name.contains(w));
        if has(&["error", "fail"]) {
            Self::Error
        } else if has(&["success", "complete"]) {
            Self::Success
        } else if has(&["notification", "alert"]) {
            Self::Notification
        } else if has(&["click", "button"]) {
            Self::Interaction
        } else {
            Self::General
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
            Self::Notification => "notification",
            Self::Interaction => "interaction",
            Self::General => "general",
        }
    }
}

/// One playable file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundEffect {
    /// File stem; what configs refer to.
    pub id: String,
    pub name: String,
    pub filename: String,
    pub filepath: PathBuf,
    pub category: SoundCategory,
    pub description: String,
}

pub struct SoundLibrary {
    dir: PathBuf,
}

impl SoundLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// All supported files in the directory, sorted by name.
    /// A missing directory lists as empty.
    pub fn list_sounds(&self) -> CueResult<Vec<SoundEffect>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(e) => e,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(dir = %self.dir.display(), "Sounds directory missing");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut sounds = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() || !is_supported(&path) {
                continue;
            }
            let filename = entry.file_name().to_string_lossy().to_string();
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| filename.clone());
            let description = match entry.metadata() {
                Ok(meta) => format!("Sound file ({})", format_file_size(meta.len())),
                Err(_) => "Sound file".to_string(),
            };
            sounds.push(SoundEffect {
                id: stem.clone(),
                name: stem,
                category: SoundCategory::from_filename(&filename),
                filename,
                filepath: path,
                description,
            });
        }
        sounds.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(sounds)
    }

    /// Look up by id (`file_open`) or full filename (`file_open.wav`).
    pub fn find(&self, reference: &str) -> CueResult<Option<SoundEffect>> {
        if reference.is_empty() {
            return Ok(None);
        }
        Ok(self
            .list_sounds()?
            .into_iter()
            .find(|s| s.id == reference || s.filename == reference))
    }

    /// Play a sound and wait for the player to exit.
    pub fn play(&self, reference: &str, volume: f64) -> CueResult<()> {
        play_file(&self.locate(reference)?.filepath, volume)
    }

    /// Start the player and return without waiting for it.
    pub fn spawn(&self, reference: &str, volume: f64) -> CueResult<()> {
        spawn_file(&self.locate(reference)?.filepath, volume)
    }

    fn locate(&self, reference: &str) -> CueResult<SoundEffect> {
        self.find(reference)?
            .ok_or_else(|| CueError::SoundNotFound(reference.to_string()))
    }

    /// Copy every supported file from `source` into the library.
    /// Returns how many were copied; individual copy failures are skipped.
    pub fn install_sound_pack(&self, source: &Path) -> CueResult<usize> {
        std::fs::create_dir_all(&self.dir)?;
        let mut installed = 0;
        for entry in std::fs::read_dir(source)?.flatten() {
            let path = entry.path();
            if !path.is_file() || !is_supported(&path) {
                continue;
            }
            let target = self.dir.join(entry.file_name());
            match std::fs::copy(&path, &target) {
                Ok(_) => installed += 1,
                Err(e) => {
                    tracing::warn!(file = %path.display(), error = %e, "Failed to copy sound file");
                }
            }
        }
        tracing::info!(source = %source.display(), installed, "Sound pack installed");
        Ok(installed)
    }
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| SUPPORTED_SOUND_EXTENSIONS.contains(&ext.as_str()))
}

/// Run the platform player for `path` and wait for it.
pub fn play_file(path: &Path, volume: f64) -> CueResult<()> {
    let mut cmd = player_command(path, volume.clamp(0.0, 1.0))?;
    let status = cmd
        .status()
        .map_err(|e| CueError::Playback(format!("Failed to start player: {}", e)))?;
    if status.success() {
        tracing::debug!(file = %path.display(), "Sound played");
        Ok(())
    } else {
        Err(CueError::Playback(format!(
            "Player exited with {} for {}",
            status,
            path.display()
        )))
    }
}

/// Start the platform player for `path` detached from our stdio and return
/// immediately. The player outlives a hook process that exits right after.
pub fn spawn_file(path: &Path, volume: f64) -> CueResult<()> {
    let mut cmd = player_command(path, volume.clamp(0.0, 1.0))?;
    spawn_detached(&mut cmd)?;
    tracing::debug!(file = %path.display(), "Player started");
    Ok(())
}

fn spawn_detached(cmd: &mut Command) -> CueResult<()> {
    cmd.stderr(Stdio::null())
        .spawn()
        .map_err(|e| CueError::Playback(format!("Failed to start player: {}", e)))?;
    Ok(())
}

/// Player command for `path`. stdin and stdout are always closed: hook
/// stdout is read by Claude Code.
///
/// - macOS: `afplay -v <volume>`
/// - Linux: `aplay` for WAV (no volume control), `ffplay` for the other
///   formats (volume 0-100)
/// - Windows: PowerShell `Media.SoundPlayer` (WAV only, no volume control)
fn player_command(path: &Path, volume: f64) -> CueResult<Command> {
    let mut cmd = if cfg!(target_os = "macos") {
        let mut cmd = Command::new("afplay");
        cmd.arg("-v").arg(format!("{:.2}", volume)).arg(path);
        cmd
    } else if cfg!(target_os = "linux") {
        linux_player(path, volume)
    } else if cfg!(windows) {
        let script = format!(
            "(New-Object Media.SoundPlayer '{}').PlaySync()",
            path.display().to_string().replace('\'', "''")
        );
        let mut cmd = Command::new("powershell");
        cmd.arg("-c").arg(script);
        cmd
    } else {
        return Err(CueError::UnsupportedPlatform(std::env::consts::OS.to_string()));
    };
    cmd.stdin(Stdio::null()).stdout(Stdio::null());
    Ok(cmd)
}

fn linux_player(path: &Path, volume: f64) -> Command {
    let is_wav = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("wav"));
    if is_wav {
        let mut cmd = Command::new("aplay");
        cmd.arg("-q").arg(path);
        cmd
    } else {
        let mut cmd = Command::new("ffplay");
        cmd.args(["-nodisp", "-autoexit", "-loglevel", "quiet", "-volume"])
            .arg(format!("{}", (volume * 100.0).round() as u32))
            .arg(path);
        cmd
    }
}

/// Human-readable size: `0 B`, `512 B`, `1.5 KB`, `2.25 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    let rounded = (size * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}
