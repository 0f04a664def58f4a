use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use shark_core::models::{DownloadRequest, DownloadResult, HealthStatus, RelayStats};
use shark_core::relay::Relay;
use std::sync::Arc;
use tracing::info;

/// Builds the relay router over a shared [`Relay`].
pub fn build_router(relay: Arc<Relay>) -> Router {
    Router::new()
        .route("/download", post(download_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .with_state(relay)
}

/// Download handler - classifies, dispatches and always answers 200
async fn download_handler(
    State(relay): State<Arc<Relay>>,
    Json(request): Json<DownloadRequest>,
) -> Json<DownloadResult> {
    info!(url = %request.url, quality = %request.quality, "Download request received");
    Json(relay.handle(&request).await)
}

/// Stats handler - counters are never incremented
async fn stats_handler() -> Json<RelayStats> {
    Json(RelayStats::default())
}

async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
