//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the gallery page while reading and writing shared state
//! from Leptos context providers. Remote calls go through
//! `util::gallery_actions`, never directly to `net::api`.

pub mod banner;
pub mod notices;
pub mod photo_grid;
pub mod story_modal;
pub mod toolbar;
pub mod upload_modal;
pub mod wish_overlay;
