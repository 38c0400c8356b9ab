use std::fmt;

/// Player specific error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// The audio output device or manager could not be created
    Output { reason: String },
    /// The bundled asset could not be decoded
    Decode { reason: String },
    /// A transport operation failed on the engine
    Playback { reason: String },
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::Output { reason } => {
                write!(f, "Audio output unavailable: {}", reason)
            }
            PlayerError::Decode { reason } => {
                write!(f, "Failed to decode audio asset: {}", reason)
            }
            PlayerError::Playback { reason } => {
                write!(f, "Playback failed: {}", reason)
            }
        }
    }
}

impl std::error::Error for PlayerError {}
