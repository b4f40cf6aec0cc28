//! Gallery error taxonomy.
//!
//! DESIGN
//! ======
//! Every error is local to the action that triggered it and none is fatal.
//! `Network` and `Remote` surface as a dismissable banner, validation errors
//! block the preview before anything is sent, and `Caption` is only ever
//! logged because captioning is best-effort.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

const MIB: u64 = 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    /// Transport failure or an unreadable response.
    #[error("{0}")]
    Network(String),

    /// The endpoint answered with an error status; the message is verbatim.
    #[error("{0}")]
    Remote(String),

    /// The picked file exceeds the upload limit.
    #[error("File too large (max {}MB)", .limit / MIB)]
    FileTooLarge { size: u64, limit: u64 },

    /// The picked file is not an image.
    #[error("Only image files can be shared (got {0})")]
    NotAnImage(String),

    /// The browser could not read the picked file.
    #[error("Could not read the selected file")]
    UnreadableFile,

    /// Caption generation failed. Logged, never shown.
    #[error("caption generation failed: {0}")]
    Caption(String),
}

impl GalleryError {
    /// Local validation failures that never reach the network.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::FileTooLarge { .. } | Self::NotAnImage(_) | Self::UnreadableFile)
    }
}
