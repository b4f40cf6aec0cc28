//! Shared wire-protocol DTOs for the gallery API.
//!
//! DESIGN
//! ======
//! The host server forwards the spreadsheet script's envelope shape
//! unchanged, so the browser and the server decode the same types. Field
//! names follow the script's camelCase payloads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::GalleryError;

/// Message used when the remote reports an error without one.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// A photo as listed by the spreadsheet script. Immutable once fetched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Drive file id. The script may emit it as a number.
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub id: String,
    /// Full-size view URL.
    pub url: String,
    /// Grid thumbnail URL.
    pub thumbnail: String,
    /// Guest caption; empty when none was given. Sheet cells holding only
    /// digits arrive as numbers.
    #[serde(default, deserialize_with = "deserialize_caption")]
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// `{ status: "success", data? }` or `{ status: "error", message? }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    #[must_use]
    pub fn success(data: T) -> Self {
        Self { status: EnvelopeStatus::Success, data: Some(data), message: None }
    }

    /// Success without a payload (the script's upload acknowledgement).
    #[must_use]
    pub fn ok() -> Self {
        Self { status: EnvelopeStatus::Success, data: None, message: None }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { status: EnvelopeStatus::Error, data: None, message: Some(message.into()) }
    }

    /// Split into payload or [`GalleryError::Remote`] carrying the remote's
    /// message verbatim.
    ///
    /// # Errors
    ///
    /// Returns `Remote` when the status is `"error"`.
    pub fn into_result(self) -> Result<Option<T>, GalleryError> {
        match self.status {
            EnvelopeStatus::Success => Ok(self.data),
            EnvelopeStatus::Error => Err(GalleryError::Remote(
                self.message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| UNKNOWN_ERROR.to_owned()),
            )),
        }
    }
}

/// Body of an upload request, forwarded to the script as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub filename: String,
    pub mime_type: String,
    /// The picked file as a `data:` URL.
    pub base64: String,
    pub description: String,
}

/// Body of a caption request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionRequest {
    pub mime_type: String,
    /// The picked file as a `data:` URL.
    pub base64: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaptionResponse {
    pub caption: String,
}

/// Couple-specific branding shown in the banner and story modal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub title: String,
    pub date: String,
    pub banner_url: String,
    pub story: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Christy & Ming".to_owned(),
            date: "2026.02.14".to_owned(),
            banner_url: "https://drive.google.com/thumbnail?id=1-cdGJtdJxBxoeCq7_JWXPXWNZHrErcL4&sz=w1920".to_owned(),
            story: "Welcome to our gallery. Every photo here captures a special moment we've shared together. \
                    We are so grateful to have you as part of our journey and these memories will be cherished \
                    forever. Thank you for celebrating with us."
                .to_owned(),
        }
    }
}

fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

fn deserialize_caption<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected caption text, got {other}"))),
    }
}
