use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::issue_manager_jwt;
use crate::state::StubState;

use super::{route_error, RouteError};

#[derive(Debug, Deserialize)]
struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    access_token: String,
}

/// POST /auth/login
async fn login(
    State(state): State<StubState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, RouteError> {
    let config = state.config();
    if req.username != config.username || req.password != config.password {
        warn!("Rejected login for {}", req.username);
        return Err(route_error(StatusCode::UNAUTHORIZED, "Invalid credentials"));
    }

    let access_token =
        issue_manager_jwt(&req.username, &config.jwt_secret, config.token_ttl_hours)
            .map_err(|e| route_error(StatusCode::INTERNAL_SERVER_ERROR, e))?;
    info!("Issued token for {}", req.username);
    Ok(Json(LoginResponse { access_token }))
}

pub fn router() -> Router<StubState> {
    Router::new().route("/auth/login", post(login))
}
