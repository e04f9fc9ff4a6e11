use axum::{extract::State, http::StatusCode};

use crate::domain::repository::Store;

/// Handler for `GET /healthz`: liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz`: ready once the database answers.
pub async fn readyz<S: Store>(State(state): State<S>) -> StatusCode {
    match state.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = ?e, "readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
