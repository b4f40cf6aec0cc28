//! HTTP error type for the gallery API.
//!
//! Every failure is answered with the same envelope the script uses, so the
//! browser decodes one shape whether the error came from here or upstream.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use client::net::types::Envelope;

use crate::caption::CaptionError;
use crate::script::ScriptError;

const STORE_UNREACHABLE: &str = "Could not reach the photo store.";
const CAPTION_FAILED: &str = "Caption generation failed.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Decoded upload exceeds the size limit.
    #[error("File too large (max {}MB)", .limit / (1024 * 1024))]
    TooLarge { size: u64, limit: u64 },

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error("Caption generation is not configured")]
    CaptionDisabled,

    #[error(transparent)]
    Caption(#[from] CaptionError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Script(ScriptError::Remote(_)) | Self::Caption(_) => StatusCode::BAD_GATEWAY,
            // Store unreachable; the browser maps 503 to a connection error.
            Self::Script(_) | Self::CaptionDisabled => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Message shown to guests. Script errors pass through verbatim;
    /// transport details stay in the log.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Script(ScriptError::Remote(message)) => message.clone(),
            Self::Script(_) => STORE_UNREACHABLE.to_owned(),
            Self::Caption(_) => CAPTION_FAILED.to_owned(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, %status, "api request failed");
        }
        (status, Json(Envelope::<()>::error(self.public_message()))).into_response()
    }
}
