// Book: pages, their flow state and the inputs that move them.

mod book;
pub mod input;
pub mod manifest;
pub mod page;

pub use book::{Book, FlipListener, Page};
pub use input::InputEvent;
pub use manifest::{Manifest, PageSpec};
pub use page::PageState;
