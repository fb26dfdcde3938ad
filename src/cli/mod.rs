pub mod apply;
pub mod classify;
pub mod config;
pub mod sounds;

use claude_code_cue::sounds::SoundLibrary;
use claude_code_cue::storage::{path_utils, ConfigStore};

/// Sound library for the directory the stored config points at.
pub fn library(store: &ConfigStore) -> SoundLibrary {
    let config = store.load();
    SoundLibrary::new(path_utils::sounds_dir(&config.global_settings.sounds_directory))
}
