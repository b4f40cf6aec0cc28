//! Cover image with the couple's names and date.

use leptos::prelude::*;

use crate::net::types::SiteInfo;

#[component]
pub fn Banner() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteInfo>>();

    view! {
        <header class="banner">
            <img class="banner__image" src=move || site.with(|s| s.banner_url.clone()) alt="Banner"/>
            <div class="banner__overlay">
                <h1 class="banner__title">{move || site.with(|s| s.title.clone())}</h1>
                <p class="banner__date">{move || site.with(|s| s.date.clone())}</p>
            </div>
        </header>
    }
}
