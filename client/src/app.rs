//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::types::SiteInfo;
use crate::pages::gallery::GalleryPage;
use crate::state::{gallery::GalleryState, ui::UiState, upload::UploadState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the gallery, upload, UI and site contexts and mounts the single
/// gallery route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let gallery = RwSignal::new(GalleryState::default());
    let upload = RwSignal::new(UploadState::default());
    let ui = RwSignal::new(UiState::default());
    let site = RwSignal::new(SiteInfo::default());

    provide_context(gallery);
    provide_context(upload);
    provide_context(ui);
    provide_context(site);

    view! {
        <Stylesheet id="leptos" href="/pkg/wishwall.css"/>
        <Title text=move || site.with(|s| s.title.clone())/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=GalleryPage/>
            </Routes>
        </Router>
    }
}
