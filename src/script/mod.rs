//! Spreadsheet script backend: the photo listing and the upload sink.
//!
//! DESIGN
//! ======
//! The script is a web app that answers every call with the same envelope,
//! `{status: "success", data}` or `{status: "error", message}`. Routes talk
//! to it only through [`PhotoStore`], so handlers are tested with a mock and
//! never reach the network.

pub mod http;

use client::net::types::{Photo, UploadRequest};

pub use http::ScriptClient;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    /// The HTTP request never produced a response.
    #[error("script request failed: {0}")]
    Request(String),

    /// Non-success HTTP status with an unreadable body.
    #[error("script responded with status {status}")]
    Status { status: u16, body: String },

    /// The body was not a script envelope.
    #[error("script response parse failed: {0}")]
    Parse(String),

    /// The script reported an error; the message is passed on verbatim.
    #[error("{0}")]
    Remote(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Photo storage backend. Enables mocking in tests.
#[async_trait::async_trait]
pub trait PhotoStore: Send + Sync {
    /// Fetch every photo, in the script's order.
    ///
    /// # Errors
    ///
    /// Returns a [`ScriptError`] on transport failure or an error envelope.
    async fn list(&self) -> Result<Vec<Photo>, ScriptError>;

    /// Store one photo with its caption.
    ///
    /// # Errors
    ///
    /// Returns a [`ScriptError`] on transport failure or an error envelope.
    async fn upload(&self, req: &UploadRequest) -> Result<(), ScriptError>;
}
