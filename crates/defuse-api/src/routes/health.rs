//! Health check endpoint

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::AppState;

/// GET /health - Service liveness plus the selector's phase
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let selector = state.selector();
    let phase = selector.lock().await.phase_kind();
    Json(HealthResponse::new(phase))
}
