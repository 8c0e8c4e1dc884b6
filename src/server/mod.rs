// src/server/mod.rs
// HTTP server: routes, middleware, and startup
//
// Endpoints:
// - GET  /, /selfcare, /nutrition, /wellness - HTML pages
// - GET  /static/*                          - static assets
// - GET  /health                            - liveness + model config check
// - GET  /tips                              - daily tips
// - POST /predict, /remedies, /chat, /treatment, /ai-insights, /exercise

pub mod handlers;
pub mod pages;
pub mod state;

use anyhow::Result;
use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::gateway::TextGenerator;

pub use state::AppState;

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let assets = ServeDir::new(&state.static_dir);

    Router::new()
        // Pages
        .route("/", get(pages::home))
        .route("/selfcare", get(pages::selfcare))
        .route("/nutrition", get(pages::nutrition))
        .route("/wellness", get(pages::wellness))
        // Model-backed endpoints
        .route("/health", get(handlers::health))
        .route("/tips", get(handlers::tips))
        .route("/predict", post(handlers::predict))
        .route("/remedies", post(handlers::remedies))
        .route("/chat", post(handlers::chat))
        .route("/treatment", post(handlers::treatment))
        .route("/ai-insights", post(handlers::ai_insights))
        .route("/exercise", post(handlers::exercise))
        .nest_service("/static", assets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server until Ctrl-C
pub async fn run(config: ServerConfig, generator: Arc<dyn TextGenerator>) -> Result<()> {
    let state = AppState::new(generator, &config.templates_dir, &config.static_dir);
    let app = create_router(state);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
