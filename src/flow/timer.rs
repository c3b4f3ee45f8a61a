use std::time::Duration;

/// Lifecycle of a single deferred value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState<T> {
    #[default]
    Idle,
    Pending { value: T, due: Duration },
    Applied(T),
}

/// Single-owner one-shot timer. Arming always replaces whatever was pending,
/// so a stale value can never fire after a newer one was requested.
#[derive(Debug, Clone, Default)]
pub struct OneShot<T> {
    state: TimerState<T>,
}

impl<T: Copy> OneShot<T> {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
        }
    }

    /// Schedule `value` for `now + delay`, returning the value it displaced.
    pub fn arm(&mut self, value: T, now: Duration, delay: Duration) -> Option<T> {
        let cancelled = self.cancel();
        self.state = TimerState::Pending {
            value,
            due: now + delay,
        };
        cancelled
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) -> Option<T> {
        match self.state {
            TimerState::Pending { value, .. } => {
                self.state = TimerState::Idle;
                Some(value)
            }
            _ => None,
        }
    }

    /// Fire once `now` reaches the due time.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match self.state {
            TimerState::Pending { value, due } if now >= due => {
                self.state = TimerState::Applied(value);
                Some(value)
            }
            _ => None,
        }
    }

    pub fn state(&self) -> TimerState<T> {
        self.state
    }

    pub fn due(&self) -> Option<Duration> {
        match self.state {
            TimerState::Pending { due, .. } => Some(due),
            _ => None,
        }
    }
}
