use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use log::{info, warn};

use super::loader::{decode_image, load_from_file};
use super::{ColorSpace, PageTexture, TextureProvider};
use crate::book::manifest::COVER_ROUGHNESS;
use crate::error::{BookError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum TextureStatus {
    NotLoaded,
    Loaded,
    Error(String),
}

/// Loads `<root>/<id>.<extension>` and keeps every decoded image.
#[derive(Debug)]
pub struct DirectoryTextureProvider {
    root: PathBuf,
    extension: String,
    cache: HashMap<String, Arc<PageTexture>>,
    status: HashMap<String, TextureStatus>,
}

impl DirectoryTextureProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: "jpg".to_string(),
            cache: HashMap::new(),
            status: HashMap::new(),
        }
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.{}", id, self.extension))
    }

    pub fn status(&self, id: &str) -> TextureStatus {
        self.status.get(id).cloned().unwrap_or(TextureStatus::NotLoaded)
    }

    pub fn loaded_count(&self) -> usize {
        self.cache.len()
    }

    pub fn error_count(&self) -> usize {
        self.status
            .values()
            .filter(|s| matches!(s, TextureStatus::Error(_)))
            .count()
    }

    fn read(&self, id: &str) -> Result<PageTexture> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(BookError::TextureNotFound {
                id: id.to_string(),
                path,
            });
        }
        let data = load_from_file(&path)?;
        // roughness is data, not colour
        let color_space = if id == COVER_ROUGHNESS {
            ColorSpace::Linear
        } else {
            ColorSpace::Srgb
        };
        decode_image(id, &data, color_space)
    }
}

impl TextureProvider for DirectoryTextureProvider {
    fn load(&mut self, id: &str) -> Result<Arc<PageTexture>> {
        if let Some(texture) = self.cache.get(id) {
            return Ok(Arc::clone(texture));
        }

        match self.read(id) {
            Ok(texture) => {
                info!("loaded texture '{}' ({}x{})", id, texture.width, texture.height);
                let texture = Arc::new(texture);
                self.cache.insert(id.to_string(), Arc::clone(&texture));
                self.status.insert(id.to_string(), TextureStatus::Loaded);
                Ok(texture)
            }
            Err(e) => {
                warn!("failed to load texture '{id}': {e}");
                self.status.insert(id.to_string(), TextureStatus::Error(e.to_string()));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_png(dir: &Path, id: &str) {
        let img = image::RgbaImage::from_pixel(2, 3, image::Rgba([255, 0, 0, 255]));
        img.save(dir.join(format!("{id}.png"))).unwrap();
    }

    #[test]
    fn loads_and_caches() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "page-a");
        let mut provider = DirectoryTextureProvider::new(dir.path()).with_extension("png");

        let first = provider.load("page-a").unwrap();
        assert_eq!((first.width, first.height), (2, 3));
        assert_eq!(first.rgba.len(), 2 * 3 * 4);
        assert!(!first.is_linear());
        assert_eq!(provider.status("page-a"), TextureStatus::Loaded);

        let second = provider.load("page-a").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(provider.loaded_count(), 1);
    }

    #[test]
    fn roughness_is_linear() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), COVER_ROUGHNESS);
        let mut provider = DirectoryTextureProvider::new(dir.path()).with_extension(".png");
        assert!(provider.load(COVER_ROUGHNESS).unwrap().is_linear());
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut provider = DirectoryTextureProvider::new(dir.path());
        let err = provider.load("nope").unwrap_err();
        assert!(matches!(err, BookError::TextureNotFound { .. }));
        assert!(matches!(provider.status("nope"), TextureStatus::Error(_)));
        assert_eq!(provider.error_count(), 1);
    }
}
