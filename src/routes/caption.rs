//! `POST /api/caption`: ask the caption model for a wish.

#[cfg(test)]
#[path = "caption_test.rs"]
mod caption_test;

use axum::Json;
use axum::extract::State;
use client::net::types::{CaptionRequest, CaptionResponse, Envelope};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn generate_caption(
    State(state): State<AppState>,
    Json(req): Json<CaptionRequest>,
) -> Result<Json<Envelope<CaptionResponse>>, ApiError> {
    let Some(captioner) = state.captioner.as_ref() else {
        return Err(ApiError::CaptionDisabled);
    };
    let caption = captioner.caption(&req.mime_type, &req.base64).await?;
    tracing::info!(model = captioner.model(), "caption generated");
    Ok(Json(Envelope::success(CaptionResponse { caption })))
}
