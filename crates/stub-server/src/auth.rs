use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::routes::ErrorBody;
use crate::state::StubState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerClaims {
    pub sub: String,
    pub username: String,
    pub iat: usize,
    pub exp: usize,
}

pub fn issue_manager_jwt(
    username: &str,
    secret: &str,
    ttl_hours: i64,
) -> Result<String, String> {
    let now = Utc::now();
    let claims = ManagerClaims {
        sub: username.to_string(),
        username: username.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(ttl_hours)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|err| format!("Failed to sign manager JWT: {}", err))
}

pub fn verify_manager_jwt(token: &str, secret: &str) -> Result<ManagerClaims, String> {
    let mut validation = Validation::default();
    validation.validate_exp = true;
    decode::<ManagerClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|decoded| decoded.claims)
    .map_err(|err| format!("Invalid manager JWT: {}", err))
}

/// Reject requests without a valid bearer token
pub async fn require_bearer(
    State(state): State<StubState>,
    request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token.map(|t| verify_manager_jwt(t, &state.config().jwt_secret)) {
        Some(Ok(_)) => next.run(request).await,
        Some(Err(err)) => {
            debug!("{}", err);
            unauthorized()
        }
        None => unauthorized(),
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorBody::new("Unauthorized")),
    )
        .into_response()
}
