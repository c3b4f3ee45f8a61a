use std::time::Duration;

use log::{debug, info};

use super::auto_advance::AutoAdvance;
use super::timer::OneShot;
use crate::settings::FlowSettings;

/// Who asked for a page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestSource {
    Manual,
    Auto,
}

/// Owns the authoritative page index and the delayed index the pages follow.
///
/// `delayed_page` is only ever written when the settle timer fires, and every
/// new request re-arms that timer, so only the latest target gets applied.
#[derive(Debug, Clone)]
pub struct PageFlowController {
    page_count: usize,
    lower: i32,
    current: i32,
    delayed: i32,
    settle: OneShot<i32>,
    auto: AutoAdvance,
    settings: FlowSettings,
}

impl PageFlowController {
    pub fn new(page_count: usize, settings: &FlowSettings) -> Self {
        let lower = settings.lower_bound.lower();
        Self {
            page_count,
            lower,
            current: lower,
            delayed: lower,
            settle: OneShot::new(),
            auto: AutoAdvance::new(settings),
            settings: settings.clone(),
        }
    }

    pub fn current_page(&self) -> i32 {
        self.current
    }

    pub fn delayed_page(&self) -> i32 {
        self.delayed
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn lower_bound(&self) -> i32 {
        self.lower
    }

    pub fn upper_bound(&self) -> i32 {
        self.page_count as i32
    }

    /// Closed at the front: the cover position, or anything before it.
    pub fn book_closed(&self) -> bool {
        self.current <= 0
    }

    pub fn is_opened(&self, page_number: usize) -> bool {
        self.delayed > page_number as i32
    }

    pub fn auto_advance(&self) -> &AutoAdvance {
        &self.auto
    }

    pub fn clamp(&self, index: i64) -> i32 {
        index.clamp(self.lower as i64, self.upper_bound() as i64) as i32
    }

    pub fn next(&mut self, now: Duration) -> i32 {
        self.go_to(self.current as i64 + 1, now)
    }

    pub fn prev(&mut self, now: Duration) -> i32 {
        self.go_to(self.current as i64 - 1, now)
    }

    /// Jump to `index`, clamped into range.
    pub fn go_to(&mut self, index: i64, now: Duration) -> i32 {
        let target = self.clamp(index);
        self.request(target, now, RequestSource::Manual)
    }

    fn request(&mut self, target: i32, now: Duration, source: RequestSource) -> i32 {
        if source == RequestSource::Manual {
            if self.settings.resume_after_manual {
                self.auto.cancel();
            } else if self.auto.is_enabled() {
                info!("auto-advance off after manual turn");
                self.auto.stop();
            }
        }

        let previous = self.current;
        if target != previous {
            self.current = target;
            let delay = if previous == self.lower && target != self.lower {
                self.settings.closed_settle_delay()
            } else {
                self.settings.settle_delay()
            };
            if let Some(stale) = self.settle.arm(target, now, delay) {
                debug!("settle for page {stale} cancelled by page {target}");
            }
            info!("page {previous} -> {target} ({source:?}), settles in {}ms", delay.as_millis());
        }

        if source == RequestSource::Manual && self.settings.resume_after_manual {
            self.auto.schedule(self.current, self.page_count, now);
        }

        self.current
    }

    pub fn set_auto_advance(&mut self, enabled: bool, now: Duration) {
        if enabled == self.auto.is_enabled() {
            return;
        }
        if enabled {
            info!("auto-advance on");
            self.auto.start(now);
        } else {
            info!("auto-advance off");
            self.auto.stop();
        }
    }

    /// Run due timers. Returns the newly applied delayed page, if any.
    pub fn tick(&mut self, now: Duration) -> Option<i32> {
        if self.auto.poll(now) {
            let next = AutoAdvance::next_index(self.current, self.page_count);
            debug!("auto-advance tick to page {next}");
            self.request(next, now, RequestSource::Auto);
            self.auto.schedule(self.current, self.page_count, now);
        }

        let applied = self.settle.poll(now)?;
        if applied == self.delayed {
            return None;
        }
        debug!("delayed page {} -> {applied}", self.delayed);
        self.delayed = applied;
        Some(applied)
    }
}
