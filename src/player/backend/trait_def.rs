use crate::player::error::PlayerError;

/// Event reported by the audio engine. Events are drained once per frame on
/// the UI thread and dispatched to the controller's listener methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The engine hit a decode fault while producing audio
    DecodeError { description: Option<String> },
    /// The sound reached its natural end
    FinishedPlaying { successfully: bool },
}

/// Audio playback backend trait
/// Defines the interface for the engine that decodes and plays the bundled asset
pub trait AudioBackend: std::fmt::Debug {
    /// Start or resume playback
    fn play(&mut self) -> Result<(), PlayerError>;

    /// Pause playback, keeping the current position
    fn pause(&mut self);

    /// Move the playback position, in seconds
    fn seek(&mut self, position_secs: f64);

    /// Get the current playback position in seconds
    fn position(&self) -> f64;

    /// Get the duration of the decoded asset in seconds
    fn duration(&self) -> f64;

    /// Check if audio is currently playing
    fn is_playing(&self) -> bool;

    /// Drain the next pending engine event, if any
    fn poll_event(&mut self) -> Option<EngineEvent>;
}
