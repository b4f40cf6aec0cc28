//! Upload flow state machine.
//!
//! LIFECYCLE
//! =========
//! `Idle -> Previewing -> [CaptionPending -> Previewing] -> Submitting`
//! then `Idle` on success or back to `Previewing` with the error on failure.
//!
//! Size is checked before the file is read, so an oversized pick never
//! leaves `Idle` and nothing is sent anywhere.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use std::time::Duration;

use crate::net::error::GalleryError;
use crate::net::types::{CaptionRequest, UploadRequest};

/// Largest accepted file, in bytes.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Pause between a saved upload and the gallery refresh, so the
/// spreadsheet has settled.
pub const REFRESH_DELAY: Duration = Duration::from_secs(2);

pub const SAVED_NOTICE: &str = "Wishes sent & Photo saved.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Previewing,
    CaptionPending,
    Submitting,
}

/// A picked file, already read into memory.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    /// Contents as a `data:` URL, used both for the preview and the upload.
    pub data_url: String,
}

/// What the caller should do after a submission finished.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Refresh the gallery after `refresh_after`.
    Saved { refresh_after: Duration },
    Failed(GalleryError),
    /// No submission was in flight.
    Ignored,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    pub phase: UploadPhase,
    pub file: Option<PendingFile>,
    pub caption: String,
    pub error: Option<GalleryError>,
    /// Transient success message.
    pub notice: Option<String>,
}

impl UploadState {
    /// # Errors
    ///
    /// `FileTooLarge` above [`MAX_UPLOAD_BYTES`]; the limit itself is allowed.
    pub fn check_size(size: u64) -> Result<(), GalleryError> {
        if size > MAX_UPLOAD_BYTES {
            return Err(GalleryError::FileTooLarge { size, limit: MAX_UPLOAD_BYTES });
        }
        Ok(())
    }

    /// Validate a file before reading it.
    ///
    /// # Errors
    ///
    /// Size errors from [`Self::check_size`], then `NotAnImage` for a
    /// non-image MIME type. An empty type is let through; some browsers
    /// report none for HEIC photos.
    pub fn check_file(size: u64, mime_type: &str) -> Result<(), GalleryError> {
        Self::check_size(size)?;
        if !mime_type.is_empty() && !mime_type.starts_with("image/") {
            return Err(GalleryError::NotAnImage(mime_type.to_owned()));
        }
        Ok(())
    }

    /// Open the preview for `file`, starting with an empty caption.
    /// Ignored while a submission is in flight.
    ///
    /// # Errors
    ///
    /// Re-runs [`Self::check_file`]; on failure the state stays where it was
    /// and the error is recorded.
    pub fn select(&mut self, file: PendingFile) -> Result<(), GalleryError> {
        if self.phase == UploadPhase::Submitting {
            return Ok(());
        }
        if let Err(err) = Self::check_file(file.size, &file.mime_type) {
            self.reject(err.clone());
            return Err(err);
        }
        self.phase = UploadPhase::Previewing;
        self.file = Some(file);
        self.caption.clear();
        self.error = None;
        Ok(())
    }

    /// Record a validation failure without leaving the current phase.
    pub fn reject(&mut self, err: GalleryError) {
        self.error = Some(err);
    }

    /// Close the preview. A submission in flight cannot be cancelled.
    pub fn cancel(&mut self) {
        if self.phase == UploadPhase::Submitting {
            return;
        }
        self.phase = UploadPhase::Idle;
        self.file = None;
        self.caption.clear();
        self.error = None;
    }

    pub fn set_caption(&mut self, caption: String) {
        if matches!(self.phase, UploadPhase::Previewing | UploadPhase::CaptionPending) {
            self.caption = caption;
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != UploadPhase::Idle
    }

    #[must_use]
    pub fn can_caption(&self) -> bool {
        self.phase == UploadPhase::Previewing
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == UploadPhase::Previewing
    }

    /// Enter `CaptionPending` and build the request for the caption model.
    pub fn begin_caption(&mut self) -> Option<CaptionRequest> {
        if !self.can_caption() {
            return None;
        }
        let file = self.file.as_ref()?;
        let request = CaptionRequest { mime_type: file.mime_type.clone(), base64: file.data_url.clone() };
        self.phase = UploadPhase::CaptionPending;
        Some(request)
    }

    /// Return to `Previewing` with the generated caption.
    ///
    /// A failure leaves the caption as it was and is handed back for
    /// logging. Results arriving after the preview was closed are dropped.
    pub fn finish_caption(&mut self, result: Result<String, GalleryError>) -> Option<GalleryError> {
        if self.phase != UploadPhase::CaptionPending {
            return result.err();
        }
        self.phase = UploadPhase::Previewing;
        match result {
            Ok(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    self.caption = text.to_owned();
                }
                None
            }
            Err(err) => Some(err),
        }
    }

    /// Enter `Submitting` and build the upload body.
    pub fn begin_submit(&mut self) -> Option<UploadRequest> {
        if !self.can_submit() {
            return None;
        }
        let file = self.file.as_ref()?;
        let request = UploadRequest {
            filename: file.name.clone(),
            mime_type: file.mime_type.clone(),
            base64: file.data_url.clone(),
            description: self.caption.clone(),
        };
        self.phase = UploadPhase::Submitting;
        self.error = None;
        Some(request)
    }

    pub fn finish_submit(&mut self, result: Result<(), GalleryError>) -> SubmitOutcome {
        if self.phase != UploadPhase::Submitting {
            return SubmitOutcome::Ignored;
        }
        match result {
            Ok(()) => {
                self.phase = UploadPhase::Idle;
                self.file = None;
                self.caption.clear();
                self.error = None;
                self.notice = Some(SAVED_NOTICE.to_owned());
                SubmitOutcome::Saved { refresh_after: REFRESH_DELAY }
            }
            Err(err) => {
                self.phase = UploadPhase::Previewing;
                self.error = Some(err.clone());
                SubmitOutcome::Failed(err)
            }
        }
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
