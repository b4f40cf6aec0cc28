//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! backends sit behind trait objects so route tests swap in mocks.

use std::sync::Arc;

use client::net::types::SiteInfo;

use crate::caption::Captioner;
use crate::script::PhotoStore;

/// Clone is required by Axum; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PhotoStore>,
    /// `None` when no caption key is configured.
    pub captioner: Option<Arc<dyn Captioner>>,
    pub site: Arc<SiteInfo>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn PhotoStore>, captioner: Option<Arc<dyn Captioner>>, site: SiteInfo) -> Self {
        Self { store, captioner, site: Arc::new(site) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use client::net::types::{Photo, UploadRequest};

    use super::*;
    use crate::caption::CaptionError;
    use crate::script::ScriptError;

    /// In-memory photo store that records uploads.
    #[derive(Default)]
    pub struct MockStore {
        pub photos: Vec<Photo>,
        pub fail_with: Option<ScriptError>,
        pub uploads: Mutex<Vec<UploadRequest>>,
    }

    impl MockStore {
        #[must_use]
        pub fn with_photos(photos: Vec<Photo>) -> Self {
            Self { photos, ..Self::default() }
        }

        #[must_use]
        pub fn failing(err: ScriptError) -> Self {
            Self { fail_with: Some(err), ..Self::default() }
        }

        pub fn upload_count(&self) -> usize {
            self.uploads.lock().expect("mock mutex should lock").len()
        }
    }

    #[async_trait::async_trait]
    impl PhotoStore for MockStore {
        async fn list(&self) -> Result<Vec<Photo>, ScriptError> {
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(self.photos.clone()),
            }
        }

        async fn upload(&self, req: &UploadRequest) -> Result<(), ScriptError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            self.uploads.lock().expect("mock mutex should lock").push(req.clone());
            Ok(())
        }
    }

    /// Captioner returning a fixed reply.
    pub struct MockCaptioner {
        pub reply: Result<String, CaptionError>,
    }

    #[async_trait::async_trait]
    impl Captioner for MockCaptioner {
        async fn caption(&self, _mime_type: &str, _image: &str) -> Result<String, CaptionError> {
            self.reply.clone()
        }

        fn model(&self) -> &str {
            "mock"
        }
    }

    #[must_use]
    pub fn photo(id: &str, description: &str) -> Photo {
        Photo {
            id: id.into(),
            url: format!("https://drive.example/{id}"),
            thumbnail: format!("https://drive.example/{id}/thumb"),
            description: description.into(),
        }
    }

    /// `AppState` over `store` with captioning disabled.
    #[must_use]
    pub fn test_app_state(store: Arc<MockStore>) -> AppState {
        AppState::new(store, None, SiteInfo::default())
    }

    #[must_use]
    pub fn test_app_state_with_captioner(captioner: MockCaptioner) -> AppState {
        AppState::new(Arc::new(MockStore::default()), Some(Arc::new(captioner)), SiteInfo::default())
    }
}
