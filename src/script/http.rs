//! `reqwest` client for the spreadsheet script.
//!
//! Thin HTTP wrapper; envelope decoding lives in `parse_envelope` so it can
//! be tested without a server.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use client::net::error::GalleryError;
use client::net::types::{Envelope, Photo, UploadRequest};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use super::{PhotoStore, ScriptError};
use crate::config::HttpTimeouts;

pub struct ScriptClient {
    http: reqwest::Client,
    url: String,
}

impl ScriptClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(url: String, timeouts: HttpTimeouts) -> Result<Self, ScriptError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| ScriptError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url })
    }

    async fn read(response: reqwest::Response) -> Result<(u16, String), ScriptError> {
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ScriptError::Request(e.to_string()))?;
        Ok((status, text))
    }
}

#[async_trait::async_trait]
impl PhotoStore for ScriptClient {
    async fn list(&self) -> Result<Vec<Photo>, ScriptError> {
        let response = self
            .http
            .get(&self.url)
            .query(&[("action", "list")])
            .send()
            .await
            .map_err(|e| ScriptError::Request(e.to_string()))?;
        let (status, text) = Self::read(response).await?;
        Ok(parse_envelope::<Vec<Photo>>(status, &text)?.unwrap_or_default())
    }

    async fn upload(&self, req: &UploadRequest) -> Result<(), ScriptError> {
        // The script reads the raw post body; text/plain matches what its
        // own web page sends.
        let body = serde_json::to_string(req).map_err(|e| ScriptError::Parse(e.to_string()))?;
        let response = self
            .http
            .post(&self.url)
            .query(&[("action", "upload")])
            .header(CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(body)
            .send()
            .await
            .map_err(|e| ScriptError::Request(e.to_string()))?;
        let (status, text) = Self::read(response).await?;
        parse_envelope::<serde_json::Value>(status, &text)?;
        Ok(())
    }
}

/// Decode a script envelope. An error envelope wins over the HTTP status.
fn parse_envelope<T: DeserializeOwned>(status: u16, text: &str) -> Result<Option<T>, ScriptError> {
    match serde_json::from_str::<Envelope<T>>(text) {
        Ok(envelope) => envelope.into_result().map_err(|e| match e {
            GalleryError::Remote(message) => ScriptError::Remote(message),
            other => ScriptError::Parse(other.to_string()),
        }),
        Err(_) if !(200..300).contains(&status) => Err(ScriptError::Status { status, body: text.to_owned() }),
        Err(e) => Err(ScriptError::Parse(e.to_string())),
    }
}
