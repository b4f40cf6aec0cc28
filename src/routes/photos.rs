//! `GET /api/photos` and `POST /api/photos`.
//!
//! The listing is shuffled on every request so each visit opens on a
//! different arrangement. Uploads are size-checked here before anything is
//! forwarded; the browser checks too, but a script call is the expensive
//! part and this is the last place to stop it.

#[cfg(test)]
#[path = "photos_test.rs"]
mod photos_test;

use axum::Json;
use axum::extract::State;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use client::net::types::{Envelope, Photo, UploadRequest};
use client::state::upload::MAX_UPLOAD_BYTES;
use rand::seq::SliceRandom;

use crate::caption::strip_data_url;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/photos`: every photo, shuffled.
pub async fn list_photos(State(state): State<AppState>) -> Result<Json<Envelope<Vec<Photo>>>, ApiError> {
    let mut photos = state.store.list().await?;
    photos.shuffle(&mut rand::rng());
    tracing::info!(count = photos.len(), "listed photos");
    Ok(Json(Envelope::success(photos)))
}

/// `POST /api/photos`: validate and forward one upload.
pub async fn upload_photo(
    State(state): State<AppState>,
    Json(req): Json<UploadRequest>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let size = validate_upload(&req)?;
    state.store.upload(&req).await?;
    tracing::info!(filename = %req.filename, size, captioned = !req.description.trim().is_empty(), "photo uploaded");
    Ok(Json(Envelope::ok()))
}

/// Check an upload and return its decoded size in bytes.
fn validate_upload(req: &UploadRequest) -> Result<u64, ApiError> {
    if req.filename.trim().is_empty() {
        return Err(ApiError::BadRequest("Missing file name".into()));
    }
    if !req.mime_type.is_empty() && !req.mime_type.starts_with("image/") {
        return Err(ApiError::BadRequest(format!("Only image files can be shared (got {})", req.mime_type)));
    }

    let data = strip_data_url(&req.base64);
    // Cheap bound first so an oversized payload is never decoded.
    let estimate = decoded_len(data);
    if estimate > MAX_UPLOAD_BYTES {
        return Err(ApiError::TooLarge { size: estimate, limit: MAX_UPLOAD_BYTES });
    }
    let bytes = STANDARD
        .decode(data)
        .map_err(|_| ApiError::BadRequest("Invalid image data".into()))?;
    if bytes.is_empty() {
        return Err(ApiError::BadRequest("Invalid image data".into()));
    }
    Ok(bytes.len() as u64)
}

/// Decoded length of padded base64 text.
fn decoded_len(data: &str) -> u64 {
    let data = data.trim_end();
    let padding = data.bytes().rev().take_while(|&b| b == b'=').count() as u64;
    (data.len() as u64 / 4 * 3).saturating_sub(padding)
}
