//! Error banner and success toast.
//!
//! One error is shown at a time; an upload error wins over a listing error
//! since it belongs to what the guest just did.

use leptos::prelude::*;

use crate::state::gallery::GalleryState;
use crate::state::upload::UploadState;

#[component]
pub fn Notices() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let upload = expect_context::<RwSignal<UploadState>>();

    // Upload errors are shown inside the modal while it is open.
    let error = move || {
        let upload_error = upload.with(|u| if u.is_open() { None } else { u.error.clone() });
        upload_error.or_else(|| gallery.with(|g| g.error.clone()))
    };

    let dismiss = move |_| {
        upload.update(UploadState::dismiss_error);
        gallery.update(GalleryState::dismiss_error);
    };

    view! {
        <Show when=move || error().is_some()>
            <div
                class="notice notice--error"
                class:notice--validation=move || error().is_some_and(|e| e.is_validation())
                role="alert"
            >
                <span>{move || error().map(|e| e.to_string()).unwrap_or_default()}</span>
                <button class="notice__dismiss" on:click=dismiss title="Dismiss">"×"</button>
            </div>
        </Show>
        <Show when=move || upload.with(|u| u.notice.is_some())>
            <div class="notice notice--toast" role="status">
                {move || upload.with(|u| u.notice.clone().unwrap_or_default())}
            </div>
        </Show>
    }
}
