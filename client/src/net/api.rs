//! REST API helpers for the gallery routes on the host server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! The server answers with an envelope even on failure, so the body is
//! decoded first: an `"error"` envelope becomes [`GalleryError::Remote`]
//! with its message untouched, unless it arrived with 503/504, which the
//! server uses when the photo store could not be reached. Those, and
//! anything that never produced a readable envelope, are
//! [`GalleryError::Network`]. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::GalleryError;
use super::types::{CaptionRequest, Envelope, Photo, SiteInfo, UploadRequest};
#[cfg(feature = "hydrate")]
use super::types::CaptionResponse;

pub const PHOTOS_ENDPOINT: &str = "/api/photos";
pub const CAPTION_ENDPOINT: &str = "/api/caption";
pub const SITE_ENDPOINT: &str = "/api/site";

const LIST_FAILED: &str = "Connection failed. Please check your network and try again.";
const UPLOAD_FAILED: &str = "Upload failed.";

/// Statuses the server answers with when the upstream store was unreachable.
const UNREACHABLE_STATUSES: [u16; 2] = [503, 504];

/// Decode a response body into its envelope payload.
///
/// `status` is only used to word the error when the body is unreadable.
fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str, fallback: &str) -> Result<Option<T>, GalleryError> {
    match serde_json::from_str::<Envelope<T>>(body) {
        Ok(envelope) => envelope.into_result().map_err(|err| match err {
            GalleryError::Remote(message) if UNREACHABLE_STATUSES.contains(&status) => GalleryError::Network(message),
            other => other,
        }),
        Err(_) if (200..300).contains(&status) => Err(GalleryError::Network(fallback.to_owned())),
        Err(_) => Err(GalleryError::Network(format!("{fallback} (status {status})"))),
    }
}

#[cfg(feature = "hydrate")]
async fn read_body(resp: gloo_net::http::Response, fallback: &str) -> Result<(u16, String), GalleryError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| {
        log::warn!("reading response body failed: {e}");
        GalleryError::Network(fallback.to_owned())
    })?;
    Ok((status, body))
}

/// Fetch the full photo listing.
///
/// # Errors
///
/// `Network` on transport or decode failure, `Remote` when the script
/// reports an error.
pub async fn fetch_photos() -> Result<Vec<Photo>, GalleryError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PHOTOS_ENDPOINT).send().await.map_err(|e| {
            log::warn!("photo listing request failed: {e}");
            GalleryError::Network(LIST_FAILED.to_owned())
        })?;
        let (status, body) = read_body(resp, LIST_FAILED).await?;
        Ok(decode_envelope::<Vec<Photo>>(status, &body, LIST_FAILED)?.unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(GalleryError::Network(LIST_FAILED.to_owned()))
    }
}

/// Submit a photo with its caption.
///
/// # Errors
///
/// `Network` on transport failure, `Remote` with the script's message.
pub async fn upload_photo(req: &UploadRequest) -> Result<(), GalleryError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(PHOTOS_ENDPOINT)
            .json(req)
            .map_err(|e| GalleryError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                log::warn!("upload request failed: {e}");
                GalleryError::Network(UPLOAD_FAILED.to_owned())
            })?;
        let (status, body) = read_body(resp, UPLOAD_FAILED).await?;
        decode_envelope::<serde_json::Value>(status, &body, UPLOAD_FAILED)?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(GalleryError::Network(UPLOAD_FAILED.to_owned()))
    }
}

/// Ask the caption model for a short wish describing the picked photo.
///
/// # Errors
///
/// Any failure is reported as [`GalleryError::Caption`]; callers log it and
/// keep whatever caption the guest already typed.
pub async fn generate_caption(req: &CaptionRequest) -> Result<String, GalleryError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CAPTION_ENDPOINT)
            .json(req)
            .map_err(|e| GalleryError::Caption(e.to_string()))?
            .send()
            .await
            .map_err(|e| GalleryError::Caption(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| GalleryError::Caption(e.to_string()))?;
        let payload = decode_envelope::<CaptionResponse>(status, &body, "caption request failed")
            .map_err(|e| GalleryError::Caption(e.to_string()))?;
        payload
            .map(|p| p.caption)
            .ok_or_else(|| GalleryError::Caption("empty caption response".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(GalleryError::Caption("not available on server".to_owned()))
    }
}

/// Fetch couple branding. `None` keeps the built-in defaults.
pub async fn fetch_site() -> Option<SiteInfo> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SITE_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        let body = resp.text().await.ok()?;
        decode_envelope::<SiteInfo>(resp.status(), &body, "site request failed")
            .ok()
            .flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
