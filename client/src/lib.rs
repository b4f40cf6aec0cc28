//! # client
//!
//! Leptos + WASM front-end for the wedding photo wall.
//!
//! Guests browse the photo grid, upload a photo with a wish, optionally ask
//! the caption model for one, and watch captions drift across the screen as
//! floating wish bubbles. All remote work goes through the host server's
//! `/api` routes; this crate owns only UI state and browser glue.
//!
//! The floating bubbles are driven by the `danmaku` crate's spawner, with a
//! browser interval as its ticker and CSS `animationend` as the expiry
//! signal (see [`components::wish_overlay`]).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
