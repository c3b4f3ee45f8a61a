use std::time::Duration;

use super::timer::OneShot;
use crate::settings::FlowSettings;

/// Repeating page advance built from re-armed one-shots.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    enabled: bool,
    timer: OneShot<()>,
    start_delay: Duration,
    interval: Duration,
    wrap_pause: Duration,
}

impl AutoAdvance {
    pub fn new(settings: &FlowSettings) -> Self {
        Self {
            enabled: false,
            timer: OneShot::new(),
            start_delay: settings.auto_start_delay(),
            interval: settings.auto_interval(),
            wrap_pause: settings.auto_wrap_pause(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn start(&mut self, now: Duration) {
        self.enabled = true;
        self.timer.arm((), now, self.start_delay);
    }

    pub fn stop(&mut self) {
        self.enabled = false;
        self.timer.cancel();
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
    }

    /// Arm the next step from `current`; the last position waits for the wrap pause.
    pub fn schedule(&mut self, current: i32, page_count: usize, now: Duration) {
        if !self.enabled {
            return;
        }
        let delay = if current >= page_count as i32 {
            self.wrap_pause
        } else {
            self.interval
        };
        self.timer.arm((), now, delay);
    }

    pub fn poll(&mut self, now: Duration) -> bool {
        self.enabled && self.timer.poll(now).is_some()
    }

    pub fn due(&self) -> Option<Duration> {
        self.timer.due()
    }

    /// Index after `current`, wrapping past the back cover to 0.
    pub fn next_index(current: i32, page_count: usize) -> i32 {
        (current + 1).rem_euclid(page_count as i32 + 1)
    }
}
