// Critically damped smoothing for bone angles.
// Velocity lives next to the value so every axis damps independently.

use std::f32::consts::{PI, TAU};

/// Distance below which the value snaps onto its target.
pub const SNAP_EPSILON: f32 = 0.001;

/// Smoothed scalar with its own velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SmoothDamp {
    pub value: f32,
    pub velocity: f32,
}

impl SmoothDamp {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
        }
    }

    /// Move toward `target`. Returns false once the value has settled.
    pub fn damp(&mut self, target: f32, smooth_time: f32, dt: f32) -> bool {
        if (self.value - target).abs() <= SNAP_EPSILON {
            self.value = target;
            return false;
        }

        let smooth_time = smooth_time.max(0.0001);
        let omega = 2.0 / smooth_time;
        let t = exp_approx(omega * dt);

        let change = self.value - target;
        let temp = (self.velocity + omega * change) * dt;
        self.velocity = (self.velocity - omega * temp) * t;

        let mut output = target + (change + temp) * t;

        // never overshoot
        if (target - self.value > 0.0) == (output > target) {
            output = target;
            self.velocity = 0.0;
        }

        self.value = output;
        true
    }

    /// Same as [`damp`](Self::damp) but travels the shortest way around the circle.
    /// Settles exactly on `target` as given, not on a wrapped equivalent.
    pub fn damp_angle(&mut self, target: f32, smooth_time: f32, dt: f32) -> bool {
        let delta = delta_angle(self.value, target);
        if delta.abs() <= SNAP_EPSILON {
            self.value = target;
            return false;
        }
        self.damp(self.value + delta, smooth_time, dt)
    }
}

/// Rational approximation of `e^-x` used by the smoothing step.
fn exp_approx(x: f32) -> f32 {
    1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x)
}

fn repeat(t: f32, length: f32) -> f32 {
    (t - (t / length).floor() * length).clamp(0.0, length)
}

/// Signed shortest angular difference in (-PI, PI].
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = repeat(target - current, TAU);
    if delta > PI {
        delta -= TAU;
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn settles_on_target_without_overshoot() {
        let mut s = SmoothDamp::new(0.0);
        let mut prev = s.value;
        for _ in 0..600 {
            s.damp(1.0, 0.5, DT);
            assert!(s.value >= prev - 1e-6, "went backwards: {} -> {}", prev, s.value);
            assert!(s.value <= 1.0 + 1e-6, "overshot: {}", s.value);
            prev = s.value;
        }
        assert_eq!(s.value, 1.0);
    }

    #[test]
    fn zero_dt_keeps_value() {
        let mut s = SmoothDamp::new(0.25);
        s.damp(1.0, 0.5, 0.0);
        assert_eq!(s.value, 0.25);
    }

    #[test]
    fn shorter_smooth_time_converges_faster() {
        let mut fast = SmoothDamp::new(0.0);
        let mut slow = SmoothDamp::new(0.0);
        for _ in 0..10 {
            fast.damp(1.0, 0.3, DT);
            slow.damp(1.0, 0.5, DT);
        }
        assert!(fast.value > slow.value);
    }

    #[test]
    fn snaps_inside_epsilon() {
        let mut s = SmoothDamp::new(0.9995);
        assert!(!s.damp(1.0, 0.5, DT));
        assert_eq!(s.value, 1.0);
    }

    #[test]
    fn delta_angle_takes_short_way() {
        assert!((delta_angle(0.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((delta_angle(0.0, -0.5) + 0.5).abs() < 1e-6);
        assert!((delta_angle(PI - 0.1, -PI + 0.1) - 0.2).abs() < 1e-5);
    }

    #[test]
    fn damp_angle_wraps() {
        let mut s = SmoothDamp::new(PI - 0.05);
        s.damp_angle(-PI + 0.05, 0.3, DT);
        // moved forward past PI rather than back through zero
        assert!(s.value > PI - 0.05);
    }
}
