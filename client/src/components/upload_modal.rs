//! Preview dialog: photo, "Auto Wishes" button, caption and submit.

use leptos::prelude::*;

use crate::state::gallery::GalleryState;
use crate::state::upload::{UploadPhase, UploadState};
use crate::util::gallery_actions::{request_caption, submit_upload};

#[component]
pub fn UploadModal() -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();
    let gallery = expect_context::<RwSignal<GalleryState>>();

    let phase = move || upload.with(|u| u.phase);
    let preview = move || upload.with(|u| u.file.as_ref().map(|f| f.data_url.clone()).unwrap_or_default());
    let error = move || upload.with(|u| u.error.as_ref().map(ToString::to_string));

    let on_close = move |_| upload.update(UploadState::cancel);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            upload.update(UploadState::cancel);
        }
    };

    view! {
        <Show when=move || upload.with(UploadState::is_open)>
            <div class="dialog-backdrop" on:keydown=on_keydown tabindex="-1">
                <div class="dialog upload-modal">
                    <div class="dialog__header">
                        <button
                            class="dialog__close"
                            on:click=on_close
                            disabled=move || phase() == UploadPhase::Submitting
                            title="Close"
                        >
                            "×"
                        </button>
                    </div>

                    <div class="upload-modal__preview">
                        <img src=preview alt="Preview"/>
                        <button
                            class="btn upload-modal__auto"
                            on:click=move |_| request_caption(upload)
                            disabled=move || !upload.with(UploadState::can_caption)
                        >
                            {move || if phase() == UploadPhase::CaptionPending { "Generating..." } else { "Auto Wishes" }}
                        </button>
                    </div>

                    <label class="upload-modal__label" for="upload-caption">"Your Wishes & Caption"</label>
                    <textarea
                        id="upload-caption"
                        class="upload-modal__caption"
                        placeholder="Type your warm wishes for the couple here..."
                        prop:value=move || upload.with(|u| u.caption.clone())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            upload.update(|u| u.set_caption(text));
                        }
                    ></textarea>

                    {move || error().map(|msg| view! { <p class="upload-modal__error">{msg}</p> })}

                    <button
                        class="btn btn--primary upload-modal__submit"
                        on:click=move |_| submit_upload(upload, gallery)
                        disabled=move || !upload.with(UploadState::can_submit)
                    >
                        {move || if phase() == UploadPhase::Submitting { "Sending..." } else { "Send Wishes & Photo" }}
                    </button>
                </div>
            </div>
        </Show>
    }
}
