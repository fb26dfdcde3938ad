use thiserror::Error;

#[derive(Error, Debug)]
pub enum CueError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Sound not found: {0}")]
    SoundNotFound(String),

    /// The platform player exited non-zero or could not be spawned.
    #[error("Playback error: {0}")]
    Playback(String),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CueResult<T> = Result<T, CueError>;
