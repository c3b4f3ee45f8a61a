use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const CONFY_APP_NAME: &str = "page-flip";

/// Where the page index bottoms out.
///
/// `Cover` treats index 0 as the closed book. `BeforeCover` adds a distinct
/// -1 position in front of the cover; both -1 and 0 present a closed book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageBound {
    #[default]
    Cover,
    BeforeCover,
}

impl PageBound {
    pub fn lower(self) -> i32 {
        match self {
            PageBound::Cover => 0,
            PageBound::BeforeCover => -1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowSettings {
    pub settle_delay_ms: u64,
    pub closed_settle_delay_ms: u64,
    pub auto_advance: bool,
    pub auto_start_delay_ms: u64,
    pub auto_interval_ms: u64,
    pub auto_wrap_pause_ms: u64,
    pub resume_after_manual: bool,
    pub lower_bound: PageBound,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            settle_delay_ms: 300,
            closed_settle_delay_ms: 800,
            auto_advance: true,
            auto_start_delay_ms: 2000,
            auto_interval_ms: 2500,
            auto_wrap_pause_ms: 3000,
            resume_after_manual: true,
            lower_bound: PageBound::Cover,
        }
    }
}

impl FlowSettings {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn closed_settle_delay(&self) -> Duration {
        Duration::from_millis(self.closed_settle_delay_ms)
    }

    pub fn auto_start_delay(&self) -> Duration {
        Duration::from_millis(self.auto_start_delay_ms)
    }

    pub fn auto_interval(&self) -> Duration {
        Duration::from_millis(self.auto_interval_ms)
    }

    pub fn auto_wrap_pause(&self) -> Duration {
        Duration::from_millis(self.auto_wrap_pause_ms)
    }

    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "flow").unwrap_or_default()
    }

    pub fn save(&self) {
        if let Err(e) = confy::store(CONFY_APP_NAME, "flow", self) {
            log::warn!("failed to store flow settings: {e}");
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationSettings {
    pub turn_duration_ms: u64,
    /// Seconds for a bone's turn to catch its target. Smaller settles faster.
    pub yaw_smooth_time: f32,
    /// Seconds for a bone's fold to catch its target. Kept below the turn's so the
    /// fold tracks the curl slightly ahead of it.
    pub fold_smooth_time: f32,
    pub inside_curve_strength: f32,
    pub outside_curve_strength: f32,
    pub turning_curve_strength: f32,
    pub page_stagger_deg: f32,
    pub fold_amplitude_deg: f32,
    pub highlight_intensity: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            turn_duration_ms: 600,
            yaw_smooth_time: 0.5,
            fold_smooth_time: 0.3,
            inside_curve_strength: 0.18,
            outside_curve_strength: 0.05,
            turning_curve_strength: 0.09,
            page_stagger_deg: 0.8,
            fold_amplitude_deg: 2.0,
            highlight_intensity: 0.22,
        }
    }
}

impl AnimationSettings {
    pub fn turn_duration(&self) -> Duration {
        Duration::from_millis(self.turn_duration_ms)
    }

    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "animation").unwrap_or_default()
    }

    pub fn save(&self) {
        if let Err(e) = confy::store(CONFY_APP_NAME, "animation", self) {
            log::warn!("failed to store animation settings: {e}");
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub segments: usize,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width: 1.28,
            height: 1.71,
            depth: 0.003,
            segments: 30,
        }
    }
}

impl PageGeometry {
    pub fn segment_width(&self) -> f32 {
        self.width / self.segments as f32
    }

    /// Bones in the page chain: one per segment plus the root.
    pub fn bone_count(&self) -> usize {
        self.segments + 1
    }

    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "geometry").unwrap_or_default()
    }

    pub fn save(&self) {
        if let Err(e) = confy::store(CONFY_APP_NAME, "geometry", self) {
            log::warn!("failed to store page geometry: {e}");
        }
    }
}

// Aggregate struct for convenience
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub flow: FlowSettings,
    pub animation: AnimationSettings,
    pub geometry: PageGeometry,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            flow: FlowSettings::load(),
            animation: AnimationSettings::load(),
            geometry: PageGeometry::load(),
        }
    }

    pub fn save(&self) {
        self.flow.save();
        self.animation.save();
        self.geometry.save();
    }
}
