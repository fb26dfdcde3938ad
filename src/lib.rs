//! Claude Code Cue — audio cues for Claude Code hook events and tool outcomes.
//!
//! Library half: configuration normalization, outcome classification, sound
//! resolution, plus the storage/sound/hook-setup collaborators the binary
//! drives.

pub mod constants;
pub mod error;
pub mod registry;
pub mod schema;

// Core
pub mod classifier;
pub mod config;
pub mod resolver;

// Collaborators
pub mod hook_setup;
pub mod sounds;
pub mod storage;
pub mod tracing_init;

#[cfg(test)]
pub mod test_helpers;

// Re-exports for convenience
pub use classifier::{classify, ExecutionRecord};
pub use config::{normalize, CueConfig};
pub use error::{CueError, CueResult};
pub use registry::{Outcome, SimpleHook, ToolName};
pub use resolver::{resolve, resolve_for_record, SoundTarget};
