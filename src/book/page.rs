use std::time::Duration;

/// Runtime flags for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub number: usize,
    pub opened: bool,
    pub book_closed: bool,
    /// Clock time of the last `opened` edge.
    pub turn_start: Duration,
    pub hovered: bool,
    pub highlight: f32,
}

impl PageState {
    pub fn new(number: usize, opened: bool, book_closed: bool) -> Self {
        Self {
            number,
            opened,
            book_closed,
            turn_start: Duration::ZERO,
            hovered: false,
            highlight: 0.0,
        }
    }

    /// Apply freshly derived flags. Returns true when `opened` flipped.
    pub fn apply(&mut self, opened: bool, book_closed: bool, now: Duration) -> bool {
        self.book_closed = book_closed;
        if self.opened == opened {
            return false;
        }
        self.opened = opened;
        self.turn_start = now;
        true
    }

    pub fn since_turn(&self, now: Duration) -> Duration {
        now.saturating_sub(self.turn_start)
    }

    /// Ease the hover glow toward its goal.
    pub fn update_highlight(&mut self, peak: f32) {
        let goal = if self.hovered { peak } else { 0.0 };
        self.highlight += (goal - self.highlight) * 0.1;
    }
}
