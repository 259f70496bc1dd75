use axum::{Json, extract::State, http::StatusCode};

use crate::state::AppState;

/// Name reported by `GET /`.
pub const SERVICE_NAME: &str = "gigboard";

// ── GET / ────────────────────────────────────────────────────────────────────

pub async fn index() -> Json<&'static str> {
    Json(SERVICE_NAME)
}

// ── GET /readyz ──────────────────────────────────────────────────────────────

/// Ready when the store answers a ping.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.db.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "store ping failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
