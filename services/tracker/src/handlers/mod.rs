pub mod health;
pub mod intensity;
pub mod nutrition;
pub mod user;
pub mod weight;

use axum::Json;
use serde::Serialize;

/// Body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub(crate) fn deleted(resource: &str) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: format!("{resource} deleted successfully"),
    })
}
