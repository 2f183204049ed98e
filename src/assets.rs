use image::ImageError;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::state::data::PhotoRef;

/// File extension of the bundled puppy photos
const PHOTO_EXTENSION: &str = "png";

/// Problems with a bundled photo
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Photo not found: {0}")]
    Missing(PathBuf),

    #[error("Photo {path} is not a readable image: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

/// Resolves photo references to files on disk
#[derive(Debug, Clone)]
pub struct Assets {
    root: PathBuf,
}

impl Assets {
    /// Use `dir` if given, otherwise the photos bundled with the crate
    pub fn new(dir: Option<PathBuf>) -> Self {
        let root = dir.unwrap_or_else(Self::bundled_dir);
        Self { root }
    }

    /// Returns <crate>/assets/puppies
    pub fn bundled_dir() -> PathBuf {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("assets");
        path.push("puppies");
        path
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the photo path for a reference (doesn't check it exists)
    pub fn path_of(&self, photo: PhotoRef) -> PathBuf {
        self.root.join(format!("{}.{}", photo.stem(), PHOTO_EXTENSION))
    }

    /// Handle the image widget can draw
    pub fn handle(&self, photo: PhotoRef) -> iced::widget::image::Handle {
        iced::widget::image::Handle::from_path(self.path_of(photo))
    }

    /// Check a photo exists and decodes as an image.
    /// Returns its dimensions.
    pub fn check(&self, photo: PhotoRef) -> Result<(u32, u32), AssetError> {
        let path = self.path_of(photo);
        if !path.exists() {
            return Err(AssetError::Missing(path));
        }

        image::image_dimensions(&path).map_err(|source| AssetError::Unreadable { path, source })
    }

    /// Check every photo, logging the broken ones.
    /// Returns the number of photos that failed.
    pub fn check_all(&self, photos: impl IntoIterator<Item = PhotoRef>) -> usize {
        let mut failed = 0;
        let mut total = 0;

        for photo in photos {
            total += 1;
            if let Err(e) = self.check(photo) {
                warn!(%photo, error = %e, "puppy photo will not render");
                failed += 1;
            }
        }

        info!(root = %self.root().display(), total, failed, "checked puppy photos");
        failed
    }
}
