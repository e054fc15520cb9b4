use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

/// Health check endpoint (liveness)
///
/// Reports the stats of the currently published snapshot.
pub async fn health_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let stats = state.catalog.stats();

    Json(json!({
        "status": "healthy",
        "service": "citydb-server",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": state.uptime_seconds(),
        "dataset": {
            "source": state.catalog.source().display().to_string(),
            "load_mode": state.catalog.mode(),
            "cities": stats.cities,
            "timezones": stats.timezones,
        }
    }))
}
