// Page animation: curvature targets, damping and the per-page animator.

pub mod curve;
pub mod damp;
pub mod page_animator;

pub use curve::{BoneTarget, CurveParams, shaped_turn, turning_progress};
pub use damp::SmoothDamp;
pub use page_animator::PageAnimator;
