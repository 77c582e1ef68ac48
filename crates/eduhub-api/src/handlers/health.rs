//! Health check handler.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_ok = match state.db.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            false
        }
    };

    let storage_ok = match state.storage.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            warn!(provider = state.storage.provider_type(), error = %e, "Storage health check failed");
            false
        }
    };

    let status = if database_ok && storage_ok {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        database: if database_ok { "connected" } else { "unavailable" }.to_string(),
        storage: if storage_ok { "available" } else { "unavailable" }.to_string(),
    })
}
