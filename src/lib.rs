#![warn(clippy::all, rust_2018_idioms)]

//! A single-screen player for one bundled audio asset: a play/pause toggle,
//! an elapsed-time label, and a scrubber slider synced to playback position.

mod app;
pub mod player;

pub use app::PlayerApp;
