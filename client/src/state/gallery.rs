//! Photo listing state and the wish pool derived from it.
//!
//! DESIGN
//! ======
//! The photo set is replaced wholesale on every successful refresh. A failed
//! refresh leaves the previous set exactly as it was and only records the
//! error, so a flaky network never blanks the wall.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use danmaku::WishPool;

use crate::net::error::GalleryError;
use crate::net::types::Photo;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryState {
    pub photos: Vec<Photo>,
    pub loading: bool,
    /// Set after the first successful listing.
    pub loaded: bool,
    pub error: Option<GalleryError>,
}

impl GalleryState {
    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Apply the outcome of a listing fetch.
    ///
    /// # Errors
    ///
    /// Hands the fetch error back after recording it; the photo set is left
    /// untouched.
    pub fn apply_listing(&mut self, result: Result<Vec<Photo>, GalleryError>) -> Result<&[Photo], GalleryError> {
        self.loading = false;
        match result {
            Ok(photos) => {
                self.photos = photos;
                self.loaded = true;
                self.error = None;
                Ok(&self.photos)
            }
            Err(err) => {
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Captions of the current photo set, blanks removed.
    #[must_use]
    pub fn wish_pool(&self) -> WishPool {
        WishPool::from_captions(self.photos.iter().map(|photo| photo.description.as_str()))
    }

    /// A listing arrived, it was empty, and nothing went wrong since.
    #[must_use]
    pub fn is_empty_gallery(&self) -> bool {
        self.loaded && !self.loading && self.photos.is_empty() && self.error.is_none()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
