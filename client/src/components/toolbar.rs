//! Sticky bar with the wishes toggle, the story button and the photo picker.

use leptos::prelude::*;

use crate::net::types::SiteInfo;
use crate::state::ui::UiState;
use crate::state::upload::UploadState;

#[component]
pub fn Toolbar() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteInfo>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let upload = expect_context::<RwSignal<UploadState>>();

    let wishes_on = move || ui.with(|u| u.show_wishes);

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                crate::util::gallery_actions::pick_file(&input, upload);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, upload);
        }
    };

    view! {
        <nav class="toolbar">
            <span class="toolbar__title">{move || site.with(|s| s.title.clone())}</span>
            <span class="toolbar__spacer"></span>

            <button
                class="btn toolbar__wishes"
                class:toolbar__wishes--on=wishes_on
                on:click=move |_| {
                    ui.update(|u| {
                        u.toggle_wishes();
                    });
                }
                title=move || if wishes_on() { "Hide Wishes" } else { "Show Wishes" }
            >
                {move || if wishes_on() { "Wishes On" } else { "Wishes Off" }}
            </button>

            <button class="btn toolbar__story" on:click=move |_| ui.update(UiState::open_story)>
                "Story"
            </button>

            <label class="btn btn--primary toolbar__upload">
                "Add Photo"
                <input type="file" accept="image/*" class="toolbar__file" on:change=on_pick/>
            </label>
        </nav>
    }
}
