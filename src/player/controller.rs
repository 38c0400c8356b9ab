use std::time::Instant;

use super::backend::{AudioBackend, EngineEvent, KiraBackend};
use super::error::PlayerError;
use super::format::format_time;
use super::timer::RefreshTimer;

/// Listener interface for the two engine callbacks. The controller
/// implements it and dispatches drained engine events to itself.
pub trait PlaybackListener {
    fn on_decode_error(&mut self, description: Option<String>);
    fn on_finished_playing(&mut self, successfully: bool);
}

/// Engine readiness, checked before every transport operation.
#[derive(Debug)]
pub enum Engine {
    Uninitialized,
    Ready(Box<dyn AudioBackend>),
    Failed(PlayerError),
}

/// Display state the controller writes and the widgets read.
///
/// These fields are derived from the engine and never authoritative, except
/// for the slider value while the user is dragging it.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetState {
    /// Play/pause toggle state; true means playing
    pub selected: bool,
    /// Slider position in seconds
    pub slider_value: f64,
    /// Slider upper bound; the asset duration in seconds
    pub slider_max: f64,
    /// Elapsed-time text, `MM:SS:CC`
    pub time_label: String,
}

impl WidgetState {
    fn reset() -> Self {
        Self {
            selected: false,
            slider_value: 0.0,
            slider_max: 0.0,
            time_label: format_time(0.0),
        }
    }
}

/// The coordinating component of the player: owns the engine handle and the
/// refresh timer, mediates between the three widgets and the engine, and
/// reacts to the engine's two events.
pub struct PlaybackController {
    engine: Engine,
    timer: RefreshTimer,
    widgets: WidgetState,
    /// True while the user is dragging the slider; suppresses refresh ticks
    dragging: bool,
    /// Pending decode-fault message for the modal, taken by the app each frame
    alert: Option<String>,
}

impl PlaybackController {
    /// Create an inert controller; call [`Self::initialize`] to attach the
    /// engine.
    pub fn new() -> Self {
        Self {
            engine: Engine::Uninitialized,
            timer: RefreshTimer::new(),
            widgets: WidgetState::reset(),
            dragging: false,
            alert: None,
        }
    }

    /// Decode the bundled asset and attach the native engine. On failure the
    /// controller stays inert for the session: the error is logged, no modal
    /// is shown, and every transport operation becomes a no-op.
    pub fn initialize(&mut self, asset: &'static [u8]) {
        match KiraBackend::from_bytes(asset) {
            Ok(backend) => self.attach_engine(Box::new(backend)),
            Err(e) => {
                log::error!("Failed to initialize audio engine: {}", e);
                self.engine = Engine::Failed(e);
            }
        }
    }

    /// Attach a ready engine and initialize the slider bounds from it.
    pub fn attach_engine(&mut self, backend: Box<dyn AudioBackend>) {
        self.widgets.slider_max = backend.duration();
        self.widgets.slider_value = backend.position();
        self.widgets.time_label = format_time(backend.position());
        self.engine = Engine::Ready(backend);
    }

    pub fn widgets(&self) -> &WidgetState {
        &self.widgets
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn engine_ready(&self) -> bool {
        matches!(self.engine, Engine::Ready(_))
    }

    /// Take the pending alert message, if a decode fault was reported since
    /// the last call.
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    /// The play/pause toggle was tapped. Flips the selected flag, drives the
    /// engine transport, and starts or stops the refresh timer.
    pub fn toggle(&mut self) {
        self.widgets.selected = !self.widgets.selected;

        if self.widgets.selected {
            if let Engine::Ready(engine) = &mut self.engine {
                if let Err(e) = engine.play() {
                    log::error!("Failed to start playback: {}", e);
                    self.on_decode_error(Some(e.to_string()));
                }
            }
            self.timer.start(Instant::now());
        } else {
            if let Engine::Ready(engine) = &mut self.engine {
                engine.pause();
            }
            self.timer.stop();
        }
    }

    /// The slider moved, either during a drag (`is_dragging == true`) or on
    /// the final settling call after release. The label always follows the
    /// proposed value; the engine is only seeked on release, so continuous
    /// seeks never fight the drag gesture. Values arrive within the widget
    /// bounds `[0, duration]`; the controller does not re-clamp.
    pub fn slider_changed(&mut self, value: f64, is_dragging: bool) {
        self.widgets.time_label = format_time(value);
        self.widgets.slider_value = value;
        self.dragging = is_dragging;

        if is_dragging {
            return;
        }
        if let Engine::Ready(engine) = &mut self.engine {
            engine.seek(value);
        }
    }

    /// Drive the controller once per UI frame: dispatch drained engine
    /// events, then fire the refresh tick if one is due at `now`.
    pub fn poll(&mut self, now: Instant) {
        loop {
            let event = match &mut self.engine {
                Engine::Ready(engine) => engine.poll_event(),
                Engine::Uninitialized | Engine::Failed(_) => None,
            };
            let Some(event) = event else { break };
            match event {
                EngineEvent::DecodeError { description } => self.on_decode_error(description),
                EngineEvent::FinishedPlaying { successfully } => {
                    self.on_finished_playing(successfully);
                }
            }
        }

        if self.timer.fire_if_due(now) {
            self.tick();
        }
    }

    /// One refresh-timer tick: sample the engine position into the label and
    /// slider. Skipped entirely while the user is dragging the slider.
    fn tick(&mut self) {
        if self.dragging {
            return;
        }
        let Engine::Ready(engine) = &mut self.engine else {
            return;
        };

        let position = engine.position();
        self.widgets.time_label = format_time(position);
        self.widgets.slider_value = position;
    }
}

impl PlaybackListener for PlaybackController {
    fn on_decode_error(&mut self, description: Option<String>) {
        match description {
            Some(message) => {
                self.alert = Some(format!("Audio player error: {}", message));
            }
            None => log::warn!("Audio player decode error with no description"),
        }
    }

    fn on_finished_playing(&mut self, _successfully: bool) {
        // The success flag is deliberately not distinguished; both outcomes
        // reset the UI the same way.
        self.widgets.selected = false;
        self.widgets.slider_value = 0.0;
        self.widgets.time_label = format_time(0.0);
        self.timer.stop();
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}
