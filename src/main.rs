mod caption;
mod config;
mod error;
mod routes;
mod script;
mod state;

use std::sync::Arc;

use caption::Captioner;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::GalleryConfig::from_env().expect("gallery config");
    let store = script::ScriptClient::new(config.script_url.clone(), config.timeouts).expect("script client init failed");

    // Captioning is optional: the "Auto Wishes" button answers 503 without it.
    let captioner: Option<Arc<dyn Captioner>> = match init_captioner(config.timeouts) {
        Ok(client) => {
            tracing::info!(model = client.model(), "caption client initialized");
            let client: Arc<dyn Captioner> = Arc::new(client);
            Some(client)
        }
        Err(e) => {
            tracing::warn!(error = %e, "caption client not configured; auto wishes disabled");
            None
        }
    };

    tracing::info!(title = %config.site.title, "gallery configured");
    let port = config.port;
    let state = state::AppState::new(Arc::new(store), captioner, config.site);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "wishwall listening");
    axum::serve(listener, app).await.expect("server failed");
}

fn init_captioner(timeouts: config::HttpTimeouts) -> Result<caption::GeminiClient, String> {
    let config = config::CaptionConfig::from_env(timeouts).map_err(|e| e.to_string())?;
    caption::GeminiClient::new(config).map_err(|e| e.to_string())
}
