//! Web server bootstrap

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::{self, AppState};
use crate::config::StayfinderConfig;
use crate::search::HotelSearchClient;

/// Bind and serve the chat application until shutdown
pub async fn run(config: StayfinderConfig) -> Result<()> {
    let search = HotelSearchClient::new(config.provider.clone())?;
    let state = AppState {
        search: Arc::new(search),
        default_budget: config.defaults.nightly_budget,
        max_offers_shown: config.defaults.max_offers_shown as usize,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // The chat page and its assets are served as static files; everything
    // dynamic goes through the API router.
    let app = Router::new()
        .merge(api::router(state))
        .fallback_service(ServeDir::new("static"))
        .layer(cors);

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(
        "Chat server running at http://localhost:{}",
        config.server.port
    );
    axum::serve(listener, app)
        .await
        .with_context(|| "Server error")?;

    Ok(())
}
