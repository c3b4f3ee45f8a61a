use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("manifest parse error: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("manifest has no pages")]
    EmptyManifest,

    #[error("texture '{id}' not found at {path}")]
    TextureNotFound { id: String, path: PathBuf },
}

pub type Result<T> = std::result::Result<T, BookError>;
