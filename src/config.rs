//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before anything here runs. The script URL is
//! the only required value; captioning is optional and configured
//! separately so a missing key only disables that feature.

use client::net::types::SiteInfo;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CAPTION_MODEL: &str = "gemini-2.5-flash-preview-09-2025";
pub const DEFAULT_CAPTION_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(String),

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Spreadsheet script web-app URL.
    pub script_url: String,
    pub port: u16,
    pub timeouts: HttpTimeouts,
    pub site: SiteInfo,
}

impl GalleryConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `GALLERY_SCRIPT_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `GALLERY_REQUEST_TIMEOUT_SECS`: default 60
    /// - `GALLERY_CONNECT_TIMEOUT_SECS`: default 10
    /// - `SITE_TITLE`, `SITE_DATE`, `SITE_BANNER_URL`, `SITE_STORY`
    ///
    /// # Errors
    ///
    /// Returns an error if the script URL is unset or `PORT` is not a port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let script_url = env_non_empty("GALLERY_SCRIPT_URL").ok_or_else(|| ConfigError::Missing("GALLERY_SCRIPT_URL".into()))?;
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT".into(), value: raw })?,
            Err(_) => DEFAULT_PORT,
        };
        let timeouts = HttpTimeouts {
            request_secs: env_parse_u64("GALLERY_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("GALLERY_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        let defaults = SiteInfo::default();
        let site = SiteInfo {
            title: env_non_empty("SITE_TITLE").unwrap_or(defaults.title),
            date: env_non_empty("SITE_DATE").unwrap_or(defaults.date),
            banner_url: env_non_empty("SITE_BANNER_URL").unwrap_or(defaults.banner_url),
            story: env_non_empty("SITE_STORY").unwrap_or(defaults.story),
        };

        Ok(Self { script_url, port, timeouts, site })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeouts: HttpTimeouts,
}

impl CaptionConfig {
    /// Build caption model config from environment variables.
    ///
    /// Required:
    /// - `CAPTION_API_KEY_ENV` (names the env var containing the key)
    ///
    /// Optional:
    /// - `CAPTION_MODEL`: default `gemini-2.5-flash-preview-09-2025`
    /// - `CAPTION_BASE_URL`: default Gemini v1beta endpoint
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming whichever variable is unset.
    pub fn from_env(timeouts: HttpTimeouts) -> Result<Self, ConfigError> {
        let key_var = env_non_empty("CAPTION_API_KEY_ENV").ok_or_else(|| ConfigError::Missing("CAPTION_API_KEY_ENV".into()))?;
        let api_key = env_non_empty(&key_var).ok_or(ConfigError::Missing(key_var))?;
        let model = env_non_empty("CAPTION_MODEL").unwrap_or_else(|| DEFAULT_CAPTION_MODEL.to_string());
        let base_url = env_non_empty("CAPTION_BASE_URL")
            .unwrap_or_else(|| DEFAULT_CAPTION_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Ok(Self { api_key, model, base_url, timeouts })
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
