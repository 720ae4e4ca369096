use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub storage: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    // Storage probe: an exists() call on a name that is never written. Storage
    // trouble is reported but does not fail liveness.
    let storage = match state.store.exists("health-check-probe").await {
        Ok(_) => "healthy".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Storage health check warning");
            format!("unhealthy: {}", e)
        }
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        storage,
    })
}
