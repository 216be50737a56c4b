//! HTTP backend for the browser board.
//!
//! Stateless: the browser owns the board and posts it with each request.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use ghost_engine::SuggestionEngine;
use ghost_providers::ElevenLabsClient;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

mod handlers;

/// Shared application state
pub struct AppState {
    pub engine: Arc<SuggestionEngine>,
    pub speech: Option<Arc<ElevenLabsClient>>,
}

impl AppState {
    pub fn new(engine: Arc<SuggestionEngine>, speech: Option<Arc<ElevenLabsClient>>) -> Arc<Self> {
        Arc::new(Self { engine, speech })
    }
}

/// Build the `/api` router with permissive CORS.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/suggest", post(handlers::suggest))
        .route("/api/ask", post(handlers::ask))
        .route("/api/speak", post(handlers::speak))
        .route("/api/priority", post(handlers::priority))
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(state: Arc<AppState>, addr: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        "Kanban Ghost server on http://{}",
        listener.local_addr().context("listener has no local address")?
    );

    axum::serve(listener, router(state))
        .await
        .context("HTTP server stopped")?;

    Ok(())
}
