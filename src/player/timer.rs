use std::time::{Duration, Instant};

/// Fixed period of the UI refresh poll.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(10);

/// Repeating UI-refresh timer owned by the playback controller.
///
/// The timer has exactly two states. It is started on the selected
/// transition of the play/pause toggle and stopped on the opposite
/// transition (or when playback finishes), so a second running timer is
/// unreachable through the controller.
#[derive(Debug)]
pub enum RefreshTimer {
    Stopped,
    Running { next_due: Instant },
}

impl RefreshTimer {
    pub fn new() -> Self {
        RefreshTimer::Stopped
    }

    pub fn is_running(&self) -> bool {
        matches!(self, RefreshTimer::Running { .. })
    }

    /// Start the timer. The first tick is due immediately.
    pub fn start(&mut self, now: Instant) {
        if let RefreshTimer::Stopped = self {
            *self = RefreshTimer::Running { next_due: now };
        }
    }

    /// Cancel the timer; it never fires again until restarted.
    pub fn stop(&mut self) {
        *self = RefreshTimer::Stopped;
    }

    /// Report whether a tick is due at `now` and schedule the next one.
    /// Ticks that pile up while the UI thread is busy collapse into one.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self {
            RefreshTimer::Stopped => false,
            RefreshTimer::Running { next_due } => {
                if now >= *next_due {
                    *next_due = now + REFRESH_INTERVAL;
                    true
                } else {
                    false
                }
            }
        }
    }
}

impl Default for RefreshTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped_and_never_fires() {
        let mut timer = RefreshTimer::new();
        assert!(!timer.is_running());
        assert!(!timer.fire_if_due(Instant::now()));
    }

    #[test]
    fn first_tick_fires_immediately_then_respects_period() {
        let mut timer = RefreshTimer::new();
        let t0 = Instant::now();
        timer.start(t0);
        assert!(timer.is_running());

        assert!(timer.fire_if_due(t0));
        assert!(!timer.fire_if_due(t0 + Duration::from_millis(5)));
        assert!(timer.fire_if_due(t0 + REFRESH_INTERVAL));
    }

    #[test]
    fn stop_cancels_pending_ticks() {
        let mut timer = RefreshTimer::new();
        let t0 = Instant::now();
        timer.start(t0);
        timer.stop();
        assert!(!timer.is_running());
        assert!(!timer.fire_if_due(t0 + REFRESH_INTERVAL));
    }

    #[test]
    fn restart_after_stop_reschedules_from_new_instant() {
        let mut timer = RefreshTimer::new();
        let t0 = Instant::now();
        timer.start(t0);
        assert!(timer.fire_if_due(t0));
        timer.stop();

        let t1 = t0 + Duration::from_secs(1);
        timer.start(t1);
        assert!(!timer.fire_if_due(t0));
        assert!(timer.fire_if_due(t1));
    }

    #[test]
    fn busy_loop_collapses_missed_ticks_into_one() {
        let mut timer = RefreshTimer::new();
        let t0 = Instant::now();
        timer.start(t0);
        assert!(timer.fire_if_due(t0));

        // The UI loop stalls for ten periods; only one tick fires when it
        // resumes, and the next is one period out from the late instant.
        let late = t0 + REFRESH_INTERVAL * 10;
        assert!(timer.fire_if_due(late));
        assert!(!timer.fire_if_due(late + Duration::from_millis(1)));
        assert!(timer.fire_if_due(late + REFRESH_INTERVAL));
    }
}
