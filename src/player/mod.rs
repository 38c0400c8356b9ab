// Playback controller module components
mod backend;
mod controller;
mod controls;
mod error;
mod error_modal;
mod format;
mod timer;

// Re-export the main components
pub use backend::{AudioBackend, EngineEvent, KiraBackend};
pub use controller::{Engine, PlaybackController, PlaybackListener, WidgetState};
pub use controls::PlayerControls;
pub use error::PlayerError;
pub use error_modal::ErrorModal;
pub use format::format_time;
pub use timer::{REFRESH_INTERVAL, RefreshTimer};

/// The audio asset bundled into the binary; decoded once at startup.
pub const BUNDLED_SOUND: &[u8] = include_bytes!("../../assets/sound.wav");
