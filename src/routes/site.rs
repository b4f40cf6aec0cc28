//! `GET /api/site`: couple branding for the banner and story.

use axum::Json;
use axum::extract::State;
use client::net::types::{Envelope, SiteInfo};

use crate::state::AppState;

pub async fn site_info(State(state): State<AppState>) -> Json<Envelope<SiteInfo>> {
    Json(Envelope::success(state.site.as_ref().clone()))
}
