use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BookError, Result};

pub const FRONT_COVER: &str = "book-cover";
pub const BACK_COVER: &str = "book-back";
pub const COVER_ROUGHNESS: &str = "book-cover-roughness";

pub const DEFAULT_PICTURES: [&str; 7] = [
    "DSC00680", "DSC00933", "DSC00966", "DSC00983", "DSC01011", "DSC01040", "DSC01064",
];

/// Image ids printed on either side of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    pub front: String,
    pub back: String,
}

impl PageSpec {
    pub fn new(front: &str, back: &str) -> Self {
        Self {
            front: front.to_string(),
            back: back.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub pages: Vec<PageSpec>,
}

impl Manifest {
    /// Cover backed by the first picture, the rest paired up, and the last picture
    /// backed by the back cover.
    pub fn from_pictures(pictures: &[&str]) -> Result<Self> {
        let (Some(first), Some(last)) = (pictures.first(), pictures.last()) else {
            return Err(BookError::EmptyManifest);
        };

        let n = pictures.len();
        let mut pages = vec![PageSpec::new(FRONT_COVER, first)];
        let mut i = 1;
        while i + 1 < n {
            pages.push(PageSpec::new(pictures[i % n], pictures[(i + 1) % n]));
            i += 2;
        }
        pages.push(PageSpec::new(last, BACK_COVER));

        Ok(Self { pages })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let manifest: Manifest = serde_json::from_str(&text)?;
        if manifest.pages.is_empty() {
            return Err(BookError::EmptyManifest);
        }
        Ok(manifest)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every image id this book needs, in page order, without duplicates.
    pub fn texture_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        let last = self.pages.len().saturating_sub(1);
        for (n, page) in self.pages.iter().enumerate() {
            let mut wanted = vec![page.front.as_str(), page.back.as_str()];
            if n == 0 || n == last {
                wanted.push(COVER_ROUGHNESS);
            }
            for id in wanted {
                if !ids.iter().any(|existing| existing == id) {
                    ids.push(id.to_string());
                }
            }
        }
        ids
    }
}

impl Default for Manifest {
    fn default() -> Self {
        let mut pages = vec![PageSpec::new(FRONT_COVER, DEFAULT_PICTURES[0])];
        for pair in DEFAULT_PICTURES[1..].chunks(2) {
            if let [front, back] = pair {
                pages.push(PageSpec::new(front, back));
            }
        }
        pages.push(PageSpec::new(DEFAULT_PICTURES[DEFAULT_PICTURES.len() - 1], BACK_COVER));
        Self { pages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_pictures_make_five_pages() {
        let manifest = Manifest::from_pictures(&DEFAULT_PICTURES).unwrap();
        assert_eq!(manifest.page_count(), 5);
        assert_eq!(manifest.pages[0], PageSpec::new(FRONT_COVER, "DSC00680"));
        assert_eq!(manifest.pages[1], PageSpec::new("DSC00933", "DSC00966"));
        assert_eq!(manifest.pages[3], PageSpec::new("DSC01040", "DSC01064"));
        assert_eq!(manifest.pages[4], PageSpec::new("DSC01064", BACK_COVER));
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn single_picture_book() {
        let manifest = Manifest::from_pictures(&["only"]).unwrap();
        assert_eq!(
            manifest.pages,
            vec![PageSpec::new(FRONT_COVER, "only"), PageSpec::new("only", BACK_COVER)]
        );
    }

    #[test]
    fn empty_pictures_rejected() {
        assert!(matches!(Manifest::from_pictures(&[]), Err(BookError::EmptyManifest)));
    }

    #[test]
    fn texture_ids_include_roughness_once() {
        let ids = Manifest::default().texture_ids();
        assert_eq!(ids.iter().filter(|id| *id == COVER_ROUGHNESS).count(), 1);
        assert_eq!(ids[0], FRONT_COVER);
        assert!(ids.contains(&BACK_COVER.to_string()));
    }

    #[test]
    fn loads_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"pages":[{{"front":"a","back":"b"}}]}}"#).unwrap();
        let manifest = Manifest::load(file.path()).unwrap();
        assert_eq!(manifest.pages, vec![PageSpec::new("a", "b")]);

        let mut empty = tempfile::NamedTempFile::new().unwrap();
        write!(empty, r#"{{"pages":[]}}"#).unwrap();
        assert!(matches!(Manifest::load(empty.path()), Err(BookError::EmptyManifest)));
    }
}
