//! The couple's story, shown from the toolbar.

use leptos::prelude::*;

use crate::net::types::SiteInfo;
use crate::state::ui::UiState;

#[component]
pub fn StoryModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let site = expect_context::<RwSignal<SiteInfo>>();

    let on_close = move |_| ui.update(UiState::close_story);

    view! {
        <Show when=move || ui.with(|u| u.show_story)>
            <div class="dialog-backdrop" on:click=on_close>
                <div class="dialog story-modal" on:click=|ev| ev.stop_propagation()>
                    <button class="dialog__close" on:click=on_close title="Close">"×"</button>
                    <p class="story-modal__text">{move || site.with(|s| s.story.clone())}</p>
                </div>
            </div>
        </Show>
    }
}
