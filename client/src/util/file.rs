//! Reading a picked file into an upload-ready [`PendingFile`].

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::state::upload::PendingFile;
#[cfg(feature = "hydrate")]
use crate::net::error::GalleryError;

/// Encode `bytes` as a `data:` URL.
pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    let mime_type = if mime_type.is_empty() { "application/octet-stream" } else { mime_type };
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

pub fn pending_file(name: &str, mime_type: &str, bytes: &[u8]) -> PendingFile {
    PendingFile {
        name: name.to_owned(),
        mime_type: mime_type.to_owned(),
        size: bytes.len() as u64,
        data_url: data_url(mime_type, bytes),
    }
}

/// Read a browser `File` fully.
///
/// # Errors
///
/// [`GalleryError::UnreadableFile`] when the browser refuses the read.
#[cfg(feature = "hydrate")]
pub async fn read_file(file: &web_sys::File) -> Result<PendingFile, GalleryError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| {
            log::warn!("file read failed: {e:?}");
            GalleryError::UnreadableFile
        })?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(pending_file(&file.name(), &file.type_(), &bytes))
}
