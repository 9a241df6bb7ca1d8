use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::storage::SessionState;

/// Shared state for the prediction endpoint. Read-only view of the
/// session state the ingest loop maintains.
pub struct PredictionState {
    pub session: Arc<RwLock<SessionState>>,
}

/// GET /api/sunwin - current session, history string and prediction.
///
/// Always answers with the last successfully computed state; a failing
/// feed shows up as stale data, never as an error response.
pub async fn get_prediction(
    State(state): State<Arc<PredictionState>>,
) -> Json<serde_json::Value> {
    let snapshot = state.session.read().await.clone();

    Json(json!({
        "ID": "Bi Trùm Api",
        "Game": "Sunwin",
        "phien": snapshot.phien_hien_tai,
        "chuoi_cau": snapshot.chuoi_cau,
        "du_doan": snapshot.du_doan,
        "do_tin_cay": snapshot.do_tin_cay,
    }))
}

/// Router for the prediction endpoint
pub fn prediction_router(state: Arc<PredictionState>) -> Router {
    Router::new()
        .route("/sunwin", get(get_prediction))
        .with_state(state)
}
