//! Async glue between `net::api` and the gallery state signals.
//!
//! Each action updates its signal before the request (so the UI shows
//! progress), awaits the transport call, then feeds the result into the
//! matching state transition. On the server every action is a no-op.

use leptos::prelude::*;

use crate::net::types::SiteInfo;
use crate::state::gallery::GalleryState;
use crate::state::upload::UploadState;
#[cfg(feature = "hydrate")]
use crate::state::upload::SubmitOutcome;

/// Reload the photo listing.
pub fn refresh_gallery(gallery: RwSignal<GalleryState>) {
    #[cfg(feature = "hydrate")]
    {
        gallery.update(GalleryState::begin_refresh);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_photos().await;
            gallery.update(|g| match g.apply_listing(result) {
                Ok(photos) => log::info!("gallery refreshed: {} photos", photos.len()),
                Err(e) => log::warn!("gallery refresh failed: {e}"),
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = gallery;
    }
}

/// Replace the built-in branding with the server's, when it answers.
pub fn load_site(site: RwSignal<SiteInfo>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Some(info) = crate::net::api::fetch_site().await {
                site.set(info);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = site;
    }
}

/// Validate and read the file picked in `input`, then open the preview.
///
/// The input is cleared afterwards so picking the same file again still
/// fires `change`.
#[cfg(feature = "hydrate")]
pub fn pick_file(input: &web_sys::HtmlInputElement, upload: RwSignal<UploadState>) {
    let Some(file) = input.files().and_then(|list| list.get(0)) else {
        return;
    };
    input.set_value("");

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size = file.size() as u64;
    if let Err(e) = UploadState::check_file(size, &file.type_()) {
        log::info!("rejected pick: {e}");
        upload.update(|u| u.reject(e));
        return;
    }

    leptos::task::spawn_local(async move {
        match crate::util::file::read_file(&file).await {
            Ok(pending) => upload.update(|u| {
                let _ = u.select(pending);
            }),
            Err(e) => upload.update(|u| u.reject(e)),
        }
    });
}

/// Ask the caption model for a wish. Failures are logged and otherwise
/// ignored; the guest's own text stays.
pub fn request_caption(upload: RwSignal<UploadState>) {
    #[cfg(feature = "hydrate")]
    {
        let mut request = None;
        upload.update(|u| request = u.begin_caption());
        let Some(request) = request else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::generate_caption(&request).await;
            upload.update(|u| {
                if let Some(e) = u.finish_caption(result) {
                    log::warn!("{e}");
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = upload;
    }
}

/// Submit the previewed photo. On success the notice is shown and the
/// gallery refreshed after [`crate::state::upload::REFRESH_DELAY`].
pub fn submit_upload(upload: RwSignal<UploadState>, gallery: RwSignal<GalleryState>) {
    #[cfg(feature = "hydrate")]
    {
        let mut request = None;
        upload.update(|u| request = u.begin_submit());
        let Some(request) = request else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::upload_photo(&request).await;
            let mut outcome = SubmitOutcome::Ignored;
            upload.update(|u| outcome = u.finish_submit(result));
            match outcome {
                SubmitOutcome::Saved { refresh_after } => {
                    log::info!("upload saved: {}", request.filename);
                    gloo_timers::future::sleep(refresh_after).await;
                    upload.update(UploadState::clear_notice);
                    refresh_gallery(gallery);
                }
                SubmitOutcome::Failed(e) => log::warn!("upload failed: {e}"),
                SubmitOutcome::Ignored => {}
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (upload, gallery);
    }
}
