//! Tenant endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use rentdesk_core::tenant::{Tenant, TenantDraft};

use crate::state::StubState;

use super::RouteError;

#[derive(Debug, Serialize)]
struct TenantListResponse {
    data: Vec<Tenant>,
}

#[derive(Debug, Serialize)]
struct TenantResponse {
    success: bool,
    tenant: Tenant,
}

#[derive(Debug, Serialize)]
struct DeleteResponse {
    success: bool,
    message: String,
}

/// GET /tenant
async fn list_tenants(State(state): State<StubState>) -> Json<TenantListResponse> {
    let data = state.data().read().await.list_tenants();
    Json(TenantListResponse { data })
}

/// POST /tenant/create
async fn create_tenant(
    State(state): State<StubState>,
    Json(draft): Json<TenantDraft>,
) -> Result<(StatusCode, Json<TenantResponse>), RouteError> {
    let tenant = state.data().write().await.create_tenant(&draft)?;
    Ok((
        StatusCode::CREATED,
        Json(TenantResponse {
            success: true,
            tenant,
        }),
    ))
}

/// PUT /tenant/{id}
async fn update_tenant(
    State(state): State<StubState>,
    Path(id): Path<String>,
    Json(draft): Json<TenantDraft>,
) -> Result<Json<TenantResponse>, RouteError> {
    let tenant = state.data().write().await.update_tenant(&id, &draft)?;
    Ok(Json(TenantResponse {
        success: true,
        tenant,
    }))
}

/// DELETE /delete/{id}
async fn delete_tenant(
    State(state): State<StubState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, RouteError> {
    state.data().write().await.delete_tenant(&id)?;
    Ok(Json(DeleteResponse {
        success: true,
        message: "Tenant deleted".to_string(),
    }))
}

pub fn router() -> Router<StubState> {
    Router::new()
        .route("/tenant", get(list_tenants))
        .route("/tenant/create", post(create_tenant))
        .route("/tenant/{id}", put(update_tenant))
        .route("/delete/{id}", delete(delete_tenant))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::state::{StubConfig, StubState};

    fn app() -> Router {
        super::router().with_state(StubState::new(StubConfig::default()))
    }

    async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let body = body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty);
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn ada() -> Value {
        json!({
            "fullname": "Ada Lovelace",
            "email": "ada@example.com",
            "rental_date": "2024-01-01",
            "rent_money": 450
        })
    }

    #[tokio::test]
    async fn create_then_list_tenant() {
        let app = app();
        let (status, body) = call(&app, "POST", "/tenant/create", Some(ada())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["tenant"]["fullname"], "Ada Lovelace");

        let (status, body) = call(&app, "GET", "/tenant", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_unknown_tenant_is_not_found() {
        let (status, body) = call(&app(), "PUT", "/tenant/missing", Some(ada())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Tenant not found");
    }

    #[tokio::test]
    async fn delete_tenant_reports_success() {
        let app = app();
        let (_, created) = call(&app, "POST", "/tenant/create", Some(ada())).await;
        let id = created["tenant"]["_id"].as_str().unwrap().to_string();

        let (status, body) = call(&app, "DELETE", &format!("/delete/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn invalid_tenant_is_rejected() {
        let mut draft = ada();
        draft["rent_money"] = json!(-10);
        let (status, body) = call(&app(), "POST", "/tenant/create", Some(draft)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }
}
