//! Route handlers

pub mod auth;
pub mod health;
pub mod room;
pub mod tenant;

use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::state::StubError;

/// Failure body shared by every endpoint
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

pub type RouteError = (StatusCode, Json<ErrorBody>);

pub fn route_error(status: StatusCode, message: impl Into<String>) -> RouteError {
    (status, Json(ErrorBody::new(message)))
}

impl From<StubError> for (StatusCode, Json<ErrorBody>) {
    fn from(err: StubError) -> Self {
        let status = match err {
            StubError::NotFound(_) => StatusCode::NOT_FOUND,
            StubError::Invalid(_) | StubError::DuplicateRoomName => StatusCode::BAD_REQUEST,
        };
        route_error(status, err.to_string())
    }
}
