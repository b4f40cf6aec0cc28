//! Thumbnail grid with loading and empty states.

use leptos::prelude::*;

use crate::net::types::Photo;
use crate::state::gallery::GalleryState;

#[component]
pub fn PhotoGrid() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();

    view! {
        <Show when=move || gallery.with(|g| g.loading)>
            <div class="photo-grid__loading">
                <span class="spinner"></span>
                <p>"Developing photos..."</p>
            </div>
        </Show>

        <Show when=move || gallery.with(GalleryState::is_empty_gallery)>
            <div class="photo-grid__empty">
                <h3>"It's quiet here."</h3>
                <p>"Upload the first photo to start the collection."</p>
            </div>
        </Show>

        <Show when=move || gallery.with(|g| !g.loading && !g.photos.is_empty())>
            <div class="photo-grid">
                <For
                    each=move || gallery.with(|g| g.photos.clone())
                    key=|photo| photo.id.clone()
                    children=|photo| view! { <PhotoCard photo/> }
                />
            </div>
        </Show>
    }
}

#[component]
fn PhotoCard(photo: Photo) -> impl IntoView {
    let caption = (!photo.description.trim().is_empty()).then(|| photo.description.clone());

    view! {
        <figure class="photo-card">
            <div class="photo-card__frame">
                <img class="photo-card__image" src=photo.thumbnail alt="Memory" loading="lazy"/>
                <a class="photo-card__view" href=photo.url target="_blank" rel="noreferrer">
                    "View Full"
                </a>
            </div>
            {caption.map(|text| view! { <figcaption class="photo-card__caption">{text}</figcaption> })}
        </figure>
    }
}
