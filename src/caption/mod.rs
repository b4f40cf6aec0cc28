//! Caption model adapter for the "Auto Wishes" button.
//!
//! DESIGN
//! ======
//! Captioning is best-effort. The server only has a [`Captioner`] when a
//! key is configured, and every failure here ends up as a 502 that the
//! browser logs and ignores.

pub mod gemini;

pub use gemini::GeminiClient;

/// Instruction sent with every image.
pub const CAPTION_PROMPT: &str =
    "Write a very short, warm wish or aesthetic caption for a wedding/memory wall (max 10 words). Lowercase, minimalist.";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CaptionError {
    /// The image payload was empty after stripping the `data:` prefix.
    #[error("no image data")]
    NoImage,

    /// The HTTP request to the model failed.
    #[error("caption request failed: {0}")]
    Request(String),

    /// The model returned a non-success HTTP status.
    #[error("caption model responded with status {status}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("caption response parse failed: {0}")]
    Parse(String),

    /// The model answered without any text.
    #[error("caption model returned no text")]
    Empty,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Image-to-caption model. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Captioner: Send + Sync {
    /// Generate a short wish for an image given as a `data:` URL or bare
    /// base64.
    ///
    /// # Errors
    ///
    /// Returns a [`CaptionError`] if the request fails or yields no text.
    async fn caption(&self, mime_type: &str, image: &str) -> Result<String, CaptionError>;

    /// Model name for logging.
    fn model(&self) -> &str;
}

/// The base64 payload of a `data:` URL; bare base64 is returned as-is.
#[must_use]
pub fn strip_data_url(image: &str) -> &str {
    match image.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map_or("", |(_, data)| data),
        None => image,
    }
}
