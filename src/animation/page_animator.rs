use std::time::Duration;

use super::curve::{self, BoneTarget, CurveParams};
use super::damp::SmoothDamp;
use crate::book::PageState;
use crate::model::PageSkeleton;
use crate::settings::AnimationSettings;

/// Drives one page skeleton toward its curl every frame.
#[derive(Debug, Clone)]
pub struct PageAnimator {
    params: CurveParams,
    turn_duration: Duration,
    yaw_smooth_time: f32,
    fold_smooth_time: f32,
    turn_velocity: Vec<f32>,
    fold_velocity: Vec<f32>,
}

impl PageAnimator {
    pub fn new(bone_count: usize, settings: &AnimationSettings) -> Self {
        Self {
            params: CurveParams::from(settings),
            turn_duration: settings.turn_duration(),
            yaw_smooth_time: settings.yaw_smooth_time,
            fold_smooth_time: settings.fold_smooth_time,
            turn_velocity: vec![0.0; bone_count],
            fold_velocity: vec![0.0; bone_count],
        }
    }

    /// Shaped turn envelope for `page` at clock time `now`.
    pub fn turning(&self, page: &PageState, now: Duration) -> f32 {
        let progress = curve::turning_progress(page.since_turn(now), self.turn_duration);
        curve::shaped_turn(progress)
    }

    /// Target of every bone this frame.
    pub fn targets(&self, page: &PageState, bone_count: usize, now: Duration) -> Vec<BoneTarget> {
        let closed = page.book_closed;
        let rotation = curve::target_rotation(page.opened, closed, page.number, &self.params);
        let turning = self.turning(page, now);
        (0..bone_count)
            .map(|i| curve::bone_target(i, bone_count, rotation, turning, closed, &self.params))
            .collect()
    }

    /// Damp each bone of `skeleton` toward its target. World matrices are left to the caller.
    pub fn update(
        &mut self,
        skeleton: &mut PageSkeleton,
        page: &PageState,
        now: Duration,
        delta: f32,
    ) {
        let targets = self.targets(page, skeleton.bone_count(), now);
        let delta = delta.max(0.0);

        for (i, (bone, target)) in skeleton.bones_mut().iter_mut().zip(targets).enumerate() {
            let mut turn = SmoothDamp {
                value: bone.turn,
                velocity: self.turn_velocity[i],
            };
            turn.damp_angle(target.turn, self.yaw_smooth_time, delta);
            bone.turn = turn.value;
            self.turn_velocity[i] = turn.velocity;

            let mut fold = SmoothDamp {
                value: bone.fold,
                velocity: self.fold_velocity[i],
            };
            fold.damp_angle(target.fold, self.fold_smooth_time, delta);
            bone.fold = fold.value;
            self.fold_velocity[i] = fold.velocity;
        }
    }

    /// Jump straight to the targets, dropping any velocity.
    pub fn snap(&mut self, skeleton: &mut PageSkeleton, page: &PageState, now: Duration) {
        let targets = self.targets(page, skeleton.bone_count(), now);
        for (bone, target) in skeleton.bones_mut().iter_mut().zip(targets) {
            bone.turn = target.turn;
            bone.fold = target.fold;
        }
        self.turn_velocity.fill(0.0);
        self.fold_velocity.fill(0.0);
    }
}
