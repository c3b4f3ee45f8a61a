use std::path::Path;

use super::{ColorSpace, PageTexture};
use crate::error::Result;

/// Load raw bytes from a local file
pub fn load_from_file(path: &Path) -> Result<Vec<u8>> {
    let data = std::fs::read(path)?;
    Ok(data)
}

/// Decode any format the `image` crate recognises into RGBA8.
pub fn decode_image(id: &str, data: &[u8], color_space: ColorSpace) -> Result<PageTexture> {
    let img = image::load_from_memory(data)?;
    let rgba = img.to_rgba8();
    Ok(PageTexture {
        id: id.to_string(),
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
        color_space,
    })
}
