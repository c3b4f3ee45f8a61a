pub mod loader;
pub mod manager;

use std::sync::Arc;

use crate::error::Result;

pub use loader::{decode_image, load_from_file};
pub use manager::{DirectoryTextureProvider, TextureStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Srgb,
    Linear,
}

/// Decoded page image, RGBA8.
#[derive(Debug, Clone)]
pub struct PageTexture {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    pub color_space: ColorSpace,
}

impl PageTexture {
    pub fn is_linear(&self) -> bool {
        self.color_space == ColorSpace::Linear
    }
}

/// Source of page images, keyed by manifest id.
pub trait TextureProvider {
    fn load(&mut self, id: &str) -> Result<Arc<PageTexture>>;
}
