mod api;
mod engine;
mod feed;
mod ingest;
mod storage;
mod utils;

#[cfg(test)]
mod tests;

use axum::{
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::feed::FeedSource;
use crate::storage::StateStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    utils::init_logging();

    let config = utils::Config::from_env();

    tracing::info!("Starting Sunwin predictor on port {}", config.port);

    // Initialize storage layer and restore the last snapshot
    let store: Arc<dyn StateStore> = Arc::new(storage::FileStateStore::new(&config.state_file));
    let session = Arc::new(RwLock::new(store.load().await?));

    // Initialize feed client
    let feed: Arc<dyn FeedSource> = Arc::new(feed::HttpFeedClient::new(&config)?);

    // Initialize metrics
    let metrics = Arc::new(utils::Metrics::new());

    // Background ingest loop: first tick fires immediately
    let ingest = ingest::IngestLoop::new(
        feed,
        store,
        session.clone(),
        metrics.clone(),
        Duration::from_secs(config.poll_interval_secs),
    );
    tokio::spawn(ingest.run());

    // Create application state for the responder
    let prediction_state = Arc::new(api::PredictionState { session });

    // Build routers
    let app = Router::new()
        // Health & Admin Routes
        .nest("/api/admin", api::admin_router(metrics))
        // Prediction Route
        .nest("/api", api::prediction_router(prediction_state))
        // Root health check
        .route("/health", get(health_check))
        // Global middleware
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(logging_middleware)),
        );

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!("Server listening on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Logging middleware
async fn logging_middleware(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let start = std::time::Instant::now();
    let response = next.run(req).await;
    let duration = start.elapsed();

    tracing::info!(
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}
