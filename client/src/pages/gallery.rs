//! The photo wall: the only route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the listing and the branding once on mount, then composes the
//! banner, toolbar, grid, overlays and dialogs. Further refreshes only come
//! from a successful upload.

use leptos::prelude::*;

use crate::components::banner::Banner;
use crate::components::notices::Notices;
use crate::components::photo_grid::PhotoGrid;
use crate::components::story_modal::StoryModal;
use crate::components::toolbar::Toolbar;
use crate::components::upload_modal::UploadModal;
use crate::components::wish_overlay::WishOverlay;
use crate::net::types::SiteInfo;
use crate::state::gallery::GalleryState;
use crate::util::gallery_actions::{load_site, refresh_gallery};

#[component]
pub fn GalleryPage() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let site = expect_context::<RwSignal<SiteInfo>>();

    // No tracked reads: runs once after mount.
    Effect::new(move || {
        load_site(site);
        refresh_gallery(gallery);
    });

    view! {
        <div class="gallery-page">
            <Banner/>
            <Toolbar/>
            <main class="gallery-page__main">
                <Notices/>
                <PhotoGrid/>
            </main>
            <WishOverlay/>
            <UploadModal/>
            <StoryModal/>
        </div>
    }
}
