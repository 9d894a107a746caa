//! Health check endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::StubState;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn router() -> Router<StubState> {
    Router::new().route("/health", get(health_check))
}
