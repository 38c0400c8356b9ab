use std::io::Cursor;
use std::time::Instant;

use kira::{
    AudioManager,
    AudioManagerSettings,
    DefaultBackend,
    Tween,
    sound::PlaybackState,
    sound::static_sound::{StaticSoundData, StaticSoundHandle},
};

use super::trait_def::{AudioBackend, EngineEvent};
use crate::player::error::PlayerError;

/// Audio engine backed by kira.
///
/// The bundled asset is decoded once at construction; a fresh sound handle
/// is started on demand and dropped after the sound finishes. Position is
/// tracked from `Instant` deltas while playing, clamped to the duration.
pub struct KiraBackend {
    /// Audio manager for playback
    manager: AudioManager<DefaultBackend>,
    /// The decoded asset, replayed from here after every finish
    sound: StaticSoundData,
    /// Handle to the currently started sound, if any
    handle: Option<StaticSoundHandle>,
    /// Asset duration in seconds
    duration: f64,
    /// Position while not playing, in seconds
    current_position: f64,
    /// Wall-clock instant playback last (re)started
    playback_start_time: Option<Instant>,
    /// Position when playback last (re)started
    playback_start_position: f64,
    /// Is currently playing
    is_playing: bool,
}

impl KiraBackend {
    /// Decode `data` and prepare an idle engine.
    pub fn from_bytes(data: &'static [u8]) -> Result<Self, PlayerError> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| PlayerError::Output {
                reason: e.to_string(),
            })?;

        let sound =
            StaticSoundData::from_cursor(Cursor::new(data)).map_err(|e| PlayerError::Decode {
                reason: e.to_string(),
            })?;
        let duration = sound.duration().as_secs_f64();

        Ok(Self {
            manager,
            sound,
            handle: None,
            duration,
            current_position: 0.0,
            playback_start_time: None,
            playback_start_position: 0.0,
            is_playing: false,
        })
    }

    fn stop_handle(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.stop(Tween::default());
        }
    }
}

impl AudioBackend for KiraBackend {
    fn play(&mut self) -> Result<(), PlayerError> {
        if let Some(handle) = &mut self.handle {
            handle.resume(Tween::default());
        } else {
            let start = self.current_position.clamp(0.0, self.duration);
            let sound = self.sound.clone().start_position(start);
            let handle = self
                .manager
                .play(sound)
                .map_err(|e| PlayerError::Playback {
                    reason: e.to_string(),
                })?;
            self.handle = Some(handle);
        }

        self.playback_start_time = Some(Instant::now());
        self.playback_start_position = self.current_position;
        self.is_playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.current_position = self.position();
        self.playback_start_time = None;
        self.is_playing = false;

        if let Some(handle) = &mut self.handle {
            handle.pause(Tween::default());
        }
    }

    fn seek(&mut self, position_secs: f64) {
        let clamped = position_secs.clamp(0.0, self.duration);
        self.current_position = clamped;
        self.playback_start_position = clamped;

        if let Some(handle) = &mut self.handle {
            handle.seek_to(clamped);
        }
        if self.is_playing {
            self.playback_start_time = Some(Instant::now());
        }
    }

    fn position(&self) -> f64 {
        if !self.is_playing {
            return self.current_position;
        }

        match self.playback_start_time {
            Some(start_time) => {
                let elapsed = start_time.elapsed().as_secs_f64();
                (self.playback_start_position + elapsed).min(self.duration)
            }
            None => self.current_position,
        }
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn is_playing(&self) -> bool {
        self.is_playing && self.position() < self.duration
    }

    fn poll_event(&mut self) -> Option<EngineEvent> {
        if !self.is_playing {
            return None;
        }

        let ended_by_clock = self.duration > 0.0 && self.position() >= self.duration;
        let ended_by_engine = self
            .handle
            .as_ref()
            .is_some_and(|h| h.state() == PlaybackState::Stopped);

        if ended_by_clock || ended_by_engine {
            self.stop_handle();
            self.is_playing = false;
            self.playback_start_time = None;
            // Rewind so a later play() starts from the top.
            self.current_position = 0.0;
            self.playback_start_position = 0.0;
            return Some(EngineEvent::FinishedPlaying { successfully: true });
        }

        None
    }
}

impl std::fmt::Debug for KiraBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KiraBackend")
            .field("duration", &self.duration)
            .field("current_position", &self.current_position)
            .field("is_playing", &self.is_playing)
            .field("manager", &"<audio manager>")
            .field("handle", &self.handle.as_ref().map(|_| "<sound handle>"))
            .finish()
    }
}
