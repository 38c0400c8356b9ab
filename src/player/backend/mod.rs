// Re-export the AudioBackend trait and engine events
mod trait_def;
pub use trait_def::{AudioBackend, EngineEvent};

// Platform implementation backed by kira
mod native;
pub use native::KiraBackend;
