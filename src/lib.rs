//! Page-flip book core.
//!
//! - bone-chain page skeleton and skinned page mesh
//! - per-frame page curl animation with critically damped bones
//! - page flow controller with settle delay and auto-advance
//! - texture loading and a JSON page manifest

pub mod animation;
pub mod book;
pub mod error;
pub mod flow;
pub mod model;
pub mod settings;
pub mod texture;

pub use book::{Book, FlipListener, InputEvent, Manifest};
pub use error::{BookError, Result};
pub use flow::PageFlowController;
pub use settings::Settings;
