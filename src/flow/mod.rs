// Page index state: authoritative target, delayed index, timers.

pub mod auto_advance;
pub mod controller;
pub mod timer;

pub use auto_advance::AutoAdvance;
pub use controller::{PageFlowController, RequestSource};
pub use timer::{OneShot, TimerState};
