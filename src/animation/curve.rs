// Page-turn curvature model.
// Pure functions: given flip state and turn progress, where should each bone point.

use std::f32::consts::{FRAC_PI_2, PI};
use std::time::Duration;

use crate::settings::AnimationSettings;

/// Bones before this index bend with the inside curve, the rest with the outside curve.
pub const INSIDE_CURVE_BONES: usize = 8;
/// Bones up to and including this index never fold.
pub const FOLD_START_BONE: usize = 8;

const INSIDE_FREQ: f32 = 0.2;
const INSIDE_PHASE: f32 = 0.25;
const OUTSIDE_FREQ: f32 = 0.3;
const OUTSIDE_PHASE: f32 = 0.09;
const FOLD_PHASE: f32 = 0.5;

/// Rotation a bone is damped toward, in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoneTarget {
    /// Around the page's local y axis.
    pub turn: f32,
    /// Around the page's local x axis.
    pub fold: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    pub inside_strength: f32,
    pub outside_strength: f32,
    pub turning_strength: f32,
    pub page_stagger: f32,
    pub fold_amplitude: f32,
}

impl From<&AnimationSettings> for CurveParams {
    fn from(s: &AnimationSettings) -> Self {
        Self {
            inside_strength: s.inside_curve_strength,
            outside_strength: s.outside_curve_strength,
            turning_strength: s.turning_curve_strength,
            page_stagger: s.page_stagger_deg.to_radians(),
            fold_amplitude: s.fold_amplitude_deg.to_radians(),
        }
    }
}

impl Default for CurveParams {
    fn default() -> Self {
        Self::from(&AnimationSettings::default())
    }
}

/// Linear progress through a turn, saturating at 1 once `turn_duration` has passed.
pub fn turning_progress(since_toggle: Duration, turn_duration: Duration) -> f32 {
    if turn_duration.is_zero() {
        return 1.0;
    }
    since_toggle.min(turn_duration).as_secs_f32() / turn_duration.as_secs_f32()
}

/// Half-sine envelope: zero at both ends of the turn, peak halfway.
pub fn shaped_turn(progress: f32) -> f32 {
    (progress.clamp(0.0, 1.0) * PI).sin()
}

/// Hinge angle for a page, fanned out by its index while the book is open.
pub fn target_rotation(
    opened: bool,
    book_closed: bool,
    page_number: usize,
    params: &CurveParams,
) -> f32 {
    let mut rotation = if opened { -FRAC_PI_2 } else { FRAC_PI_2 };
    if !book_closed {
        rotation += page_number as f32 * params.page_stagger;
    }
    rotation
}

/// Target for bone `index` out of `bone_count`, with `turning` the shaped turn envelope.
pub fn bone_target(
    index: usize,
    bone_count: usize,
    target_rotation: f32,
    turning: f32,
    book_closed: bool,
    params: &CurveParams,
) -> BoneTarget {
    if book_closed {
        return BoneTarget {
            turn: if index == 0 { target_rotation } else { 0.0 },
            fold: 0.0,
        };
    }

    let i = index as f32;
    let along = i * PI / bone_count as f32;

    let inside = if index < INSIDE_CURVE_BONES {
        (i * INSIDE_FREQ + INSIDE_PHASE).sin()
    } else {
        0.0
    };
    let outside = if index >= INSIDE_CURVE_BONES {
        (i * OUTSIDE_FREQ + OUTSIDE_PHASE).cos()
    } else {
        0.0
    };
    let turning_curve = along.sin() * turning;

    let turn = params.inside_strength * inside * target_rotation
        - params.outside_strength * outside * target_rotation
        + params.turning_strength * turning_curve * target_rotation;

    let fold_intensity = if index > FOLD_START_BONE {
        (along - FOLD_PHASE).sin() * turning
    } else {
        0.0
    };
    let fold = params.fold_amplitude * target_rotation.sin() * fold_intensity;

    BoneTarget { turn, fold }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BONES: usize = 31;

    #[test]
    fn progress_is_monotonic_and_saturates() {
        let window = Duration::from_millis(600);
        let mut prev = 0.0;
        for ms in (0..=700).step_by(25) {
            let p = turning_progress(Duration::from_millis(ms), window);
            assert!(p >= prev);
            prev = p;
            if ms >= 600 {
                assert_eq!(p, 1.0);
            } else {
                assert!(p < 1.0);
            }
        }
    }

    #[test]
    fn zero_turn_duration_is_complete() {
        assert_eq!(turning_progress(Duration::ZERO, Duration::ZERO), 1.0);
    }

    #[test]
    fn shaped_turn_vanishes_at_ends_and_peaks_midway() {
        assert!(shaped_turn(0.0).abs() < 1e-6);
        assert!(shaped_turn(1.0).abs() < 1e-6);
        assert!((shaped_turn(0.5) - 1.0).abs() < 1e-6);
        for k in 0..=20 {
            let p = k as f32 / 20.0;
            assert!(shaped_turn(p) <= shaped_turn(0.5) + 1e-6);
        }
    }

    #[test]
    fn stagger_only_applies_to_open_book() {
        let params = CurveParams::default();
        let open = target_rotation(false, false, 3, &params);
        let closed = target_rotation(false, true, 3, &params);
        assert!((closed - FRAC_PI_2).abs() < 1e-6);
        assert!((open - (FRAC_PI_2 + 2.4f32.to_radians())).abs() < 1e-6);
        assert!((target_rotation(true, true, 0, &params) + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn closed_book_is_flat() {
        let params = CurveParams::default();
        for opened in [true, false] {
            let rotation = target_rotation(opened, true, 2, &params);
            for i in 0..BONES {
                let t = bone_target(i, BONES, rotation, 0.7, true, &params);
                assert_eq!(t.fold, 0.0);
                if i == 0 {
                    assert_eq!(t.turn, rotation);
                } else {
                    assert_eq!(t.turn, 0.0);
                }
            }
        }
    }

    #[test]
    fn inside_bones_curl_toward_the_hinge() {
        let params = CurveParams::default();
        let t = bone_target(3, BONES, FRAC_PI_2, 0.0, false, &params);
        assert!((t.turn - 0.18 * 0.85f32.sin() * FRAC_PI_2).abs() < 1e-6);
        assert!(t.turn > 0.0);

        // Last inside bone carries no outside term.
        let t = bone_target(7, BONES, FRAC_PI_2, 0.0, false, &params);
        assert!((t.turn - 0.18 * 1.65f32.sin() * FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn outside_bones_curl_away_from_the_hinge() {
        let params = CurveParams::default();
        let t = bone_target(10, BONES, FRAC_PI_2, 0.0, false, &params);
        assert!((t.turn + 0.05 * 3.09f32.cos() * FRAC_PI_2).abs() < 1e-6);
        assert!(t.turn > 0.0);

        // First outside bone carries no inside term.
        let t = bone_target(8, BONES, FRAC_PI_2, 0.0, false, &params);
        assert!((t.turn + 0.05 * 2.49f32.cos() * FRAC_PI_2).abs() < 1e-6);
        assert!(t.turn > 0.0);
    }

    #[test]
    fn leading_bones_never_fold() {
        let params = CurveParams::default();
        for i in 0..=FOLD_START_BONE {
            let t = bone_target(i, BONES, FRAC_PI_2, 1.0, false, &params);
            assert_eq!(t.fold, 0.0);
        }
        let tail = bone_target(20, BONES, FRAC_PI_2, 1.0, false, &params);
        assert!(tail.fold.abs() > 0.0);
    }

    #[test]
    fn turning_term_only_while_turning() {
        let params = CurveParams::default();
        let rest = bone_target(15, BONES, FRAC_PI_2, 0.0, false, &params);
        let mid = bone_target(15, BONES, FRAC_PI_2, 1.0, false, &params);
        let expected = params.turning_strength * (15.0 * PI / BONES as f32).sin() * FRAC_PI_2;
        assert!((mid.turn - rest.turn - expected).abs() < 1e-5);
        assert_eq!(rest.fold, 0.0);
    }

    #[test]
    fn opened_mirrors_closed_curve() {
        let params = CurveParams::default();
        for i in 0..BONES {
            let a = bone_target(i, BONES, FRAC_PI_2, 0.5, false, &params);
            let b = bone_target(i, BONES, -FRAC_PI_2, 0.5, false, &params);
            assert!((a.turn + b.turn).abs() < 1e-6);
        }
    }
}
