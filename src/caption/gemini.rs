//! Gemini `generateContent` client.
//!
//! One request per caption: the fixed prompt plus the image as an
//! `inlineData` part. The reply text is read from the first part of the
//! first candidate.

#[cfg(test)]
#[path = "gemini_test.rs"]
mod gemini_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{CAPTION_PROMPT, CaptionError, Captioner, strip_data_url};
use crate::config::CaptionConfig;

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: CaptionConfig) -> Result<Self, CaptionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| CaptionError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key: config.api_key, model: config.model, base_url: config.base_url })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait::async_trait]
impl Captioner for GeminiClient {
    async fn caption(&self, mime_type: &str, image: &str) -> Result<String, CaptionError> {
        let body = build_request(mime_type, image)?;

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| CaptionError::Request(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CaptionError::Request(e.to_string()))?;

        if status != 200 {
            return Err(CaptionError::Status { status, body: text });
        }

        parse_response(&text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 2],
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    Text {
        text: &'a str,
    },
    Image {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

// =============================================================================
// BUILD / PARSE
// =============================================================================

fn build_request<'a>(mime_type: &'a str, image: &'a str) -> Result<ApiRequest<'a>, CaptionError> {
    let data = strip_data_url(image);
    if data.is_empty() {
        return Err(CaptionError::NoImage);
    }
    Ok(ApiRequest {
        contents: [RequestContent {
            parts: [
                RequestPart::Text { text: CAPTION_PROMPT },
                RequestPart::Image { inline_data: InlineData { mime_type, data } },
            ],
        }],
    })
}

fn parse_response(json: &str) -> Result<String, CaptionError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| CaptionError::Parse(e.to_string()))?;
    let text = api
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .map(|text| text.trim().to_owned())
        .unwrap_or_default();
    if text.is_empty() {
        return Err(CaptionError::Empty);
    }
    Ok(text)
}
