//! Room endpoints, including tenant assignment

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use rentdesk_core::room::{Room, RoomDraft};

use crate::state::StubState;

use super::RouteError;

#[derive(Debug, Serialize)]
struct RoomListResponse {
    success: bool,
    rooms: Vec<Room>,
}

#[derive(Debug, Serialize)]
struct RoomResponse {
    room: Room,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct AssignRequest {
    id: String,
}

/// GET /rooms
async fn list_rooms(State(state): State<StubState>) -> Json<RoomListResponse> {
    let rooms = state.data().read().await.list_rooms();
    Json(RoomListResponse {
        success: true,
        rooms,
    })
}

/// POST /rooms/create
async fn create_room(
    State(state): State<StubState>,
    Json(draft): Json<RoomDraft>,
) -> Result<(StatusCode, Json<RoomResponse>), RouteError> {
    let room = state.data().write().await.create_room(&draft)?;
    Ok((StatusCode::CREATED, Json(RoomResponse { room })))
}

/// PUT /rooms/{id}
async fn update_room(
    State(state): State<StubState>,
    Path(id): Path<String>,
    Json(draft): Json<RoomDraft>,
) -> Result<Json<RoomResponse>, RouteError> {
    let room = state.data().write().await.update_room(&id, &draft)?;
    Ok(Json(RoomResponse { room }))
}

/// DELETE /rooms/delete/{id}
async fn delete_room(
    State(state): State<StubState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, RouteError> {
    state.data().write().await.delete_room(&id)?;
    Ok(Json(MessageResponse {
        message: "Room deleted".to_string(),
    }))
}

/// PUT /rooms/addTenant/{target}/{previous}, where `previous` may be "null"
async fn assign_tenant(
    State(state): State<StubState>,
    Path((target, previous)): Path<(String, String)>,
    Json(req): Json<AssignRequest>,
) -> Result<Json<MessageResponse>, RouteError> {
    let previous = Some(previous.as_str()).filter(|p| *p != "null");
    state
        .data()
        .write()
        .await
        .assign(&target, previous, &req.id)?;
    info!("Assigned tenant {} to room {}", req.id, target);
    Ok(Json(MessageResponse {
        message: "Tenant assigned".to_string(),
    }))
}

pub fn router() -> Router<StubState> {
    Router::new()
        .route("/rooms", get(list_rooms))
        .route("/rooms/create", post(create_room))
        .route("/rooms/{id}", put(update_room))
        .route("/rooms/delete/{id}", delete(delete_room))
        .route("/rooms/addTenant/{target}/{previous}", put(assign_tenant))
}
