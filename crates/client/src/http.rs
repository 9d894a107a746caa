//! reqwest implementation of the rental API

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use rentdesk_core::room::{Room, RoomDraft};
use rentdesk_core::tenant::{Tenant, TenantDraft};
use rentdesk_core::{Error, RentalApi, Result};

use crate::config::ClientConfig;
use crate::envelope::{
    LoginEnvelope, MessageEnvelope, RoomEnvelope, RoomListEnvelope, TenantDeleteEnvelope,
    TenantEnvelope, TenantListEnvelope,
};
use crate::session::Session;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct AssignRequest<'a> {
    id: &'a str,
}

fn build_client(config: &ClientConfig) -> Client {
    let builder = Client::builder();
    let builder = if config.no_proxy {
        builder.no_proxy()
    } else {
        builder
    };
    builder.build().unwrap_or_else(|_| Client::new())
}

/// Send a request and decode the endpoint's envelope.
///
/// An empty body reads as an empty envelope. A body that does not parse is a
/// serialization error on success statuses, and an empty envelope otherwise
/// so the endpoint's fallback message applies.
async fn exchange<T>(request: RequestBuilder) -> Result<(StatusCode, T)>
where
    T: DeserializeOwned + Default,
{
    let response = request
        .send()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Transport(format!("Failed to read response: {}", e)))?;

    if body.trim().is_empty() {
        return Ok((status, T::default()));
    }
    match serde_json::from_str(&body) {
        Ok(envelope) => Ok((status, envelope)),
        Err(e) if status.is_success() => Err(Error::Serialization(e)),
        Err(_) => {
            debug!("Discarding non-JSON error body (HTTP {})", status);
            Ok((status, T::default()))
        }
    }
}

/// Log in and return the session for the issued token
pub async fn login(config: &ClientConfig, username: &str, password: &str) -> Result<Session> {
    let request = build_client(config)
        .post(config.url("/auth/login"))
        .header(CONTENT_TYPE, "application/json")
        .json(&LoginRequest { username, password });

    let (status, envelope): (_, LoginEnvelope) = exchange(request).await?;
    let token = envelope.into_result(status)?;
    let session = Session::from_token(token)?;
    info!("Logged in as {}", session.display_name());
    Ok(session)
}

/// Rental API client bound to one backend and one session
pub struct HttpRentalApi {
    client: Client,
    config: ClientConfig,
    session: Session,
}

impl HttpRentalApi {
    pub fn new(config: ClientConfig, session: Session) -> Self {
        Self {
            client: build_client(&config),
            config,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn headers(&self) -> Result<HeaderMap> {
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.session.token()))
            .map_err(|_| Error::Unauthenticated("Token is not a valid header value".into()))?;
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> Result<RequestBuilder> {
        let url = self.config.url(path);
        debug!("{} {}", method, url);
        Ok(self.client.request(method, url).headers(self.headers()?))
    }
}

fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[async_trait]
impl RentalApi for HttpRentalApi {
    async fn list_tenants(&self) -> Result<Vec<Tenant>> {
        let request = self.request(reqwest::Method::GET, "/tenant")?;
        let (status, envelope): (_, TenantListEnvelope) = exchange(request).await?;
        envelope.into_result(status)
    }

    async fn create_tenant(&self, draft: &TenantDraft) -> Result<Tenant> {
        let request = self
            .request(reqwest::Method::POST, "/tenant/create")?
            .json(draft);
        let (status, envelope): (_, TenantEnvelope) = exchange(request).await?;
        envelope.into_result(status)
    }

    async fn update_tenant(&self, id: &str, draft: &TenantDraft) -> Result<Tenant> {
        let request = self
            .request(reqwest::Method::PUT, &format!("/tenant/{}", segment(id)))?
            .json(draft);
        let (status, envelope): (_, TenantEnvelope) = exchange(request).await?;
        envelope.into_result(status)
    }

    async fn delete_tenant(&self, id: &str) -> Result<()> {
        let request = self.request(reqwest::Method::DELETE, &format!("/delete/{}", segment(id)))?;
        let (status, envelope): (_, TenantDeleteEnvelope) = exchange(request).await?;
        envelope.into_result(status)
    }

    async fn list_rooms(&self) -> Result<Vec<Room>> {
        let request = self.request(reqwest::Method::GET, "/rooms")?;
        let (status, envelope): (_, RoomListEnvelope) = exchange(request).await?;
        envelope.into_result(status)
    }

    async fn create_room(&self, draft: &RoomDraft) -> Result<Room> {
        let request = self
            .request(reqwest::Method::POST, "/rooms/create")?
            .json(draft);
        let (status, envelope): (_, RoomEnvelope) = exchange(request).await?;
        envelope.into_result(status)
    }

    async fn update_room(&self, id: &str, draft: &RoomDraft) -> Result<Room> {
        let request = self
            .request(reqwest::Method::PUT, &format!("/rooms/{}", segment(id)))?
            .json(draft);
        let (status, envelope): (_, RoomEnvelope) = exchange(request).await?;
        envelope.into_result(status)
    }

    async fn delete_room(&self, id: &str) -> Result<()> {
        let request = self.request(
            reqwest::Method::DELETE,
            &format!("/rooms/delete/{}", segment(id)),
        )?;
        let (status, envelope): (_, MessageEnvelope) = exchange(request).await?;
        envelope.into_result(status, "Delete failed")
    }

    async fn assign_tenant(
        &self,
        target_room_id: &str,
        previous_room_id: Option<&str>,
        tenant_id: &str,
    ) -> Result<()> {
        let path = format!(
            "/rooms/addTenant/{}/{}",
            segment(target_room_id),
            previous_room_id.map(segment).unwrap_or_else(|| "null".to_string())
        );
        let request = self
            .request(reqwest::Method::PUT, &path)?
            .json(&AssignRequest { id: tenant_id });
        let (status, envelope): (_, MessageEnvelope) = exchange(request).await?;
        envelope.into_result(status, "Could not assign tenant")
    }
}
