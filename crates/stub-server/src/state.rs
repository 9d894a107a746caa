//! Stub server state
//!
//! Tenants are stored whole; rooms store tenant identifiers and are populated
//! with the tenant records on the way out, the way the real backend embeds
//! them.

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use rentdesk_core::room::{Room, RoomDraft, RoomSize};
use rentdesk_core::tenant::{Tenant, TenantDraft};

/// Stub server configuration
#[derive(Debug, Clone)]
pub struct StubConfig {
    pub addr: SocketAddr,
    pub username: String,
    pub password: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3001)),
            username: "admin".to_string(),
            password: "admin".to_string(),
            jwt_secret: "dev-jwt-secret-change-me".to_string(),
            token_ttl_hours: 24,
        }
    }
}

impl StubConfig {
    /// Read overrides from `RENTDESK_STUB_*` and `RENTDESK_JWT_SECRET`
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Ok(addr) = std::env::var("RENTDESK_STUB_ADDR") {
            config.addr = addr.parse()?;
        }
        if let Ok(username) = std::env::var("RENTDESK_STUB_USER") {
            config.username = username;
        }
        if let Ok(password) = std::env::var("RENTDESK_STUB_PASSWORD") {
            config.password = password;
        }
        if let Ok(secret) = std::env::var("RENTDESK_JWT_SECRET") {
            config.jwt_secret = secret;
        }
        Ok(config)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StubError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Invalid(String),

    #[error("Room name already exists")]
    DuplicateRoomName,
}

#[derive(Debug, Clone)]
struct StoredRoom {
    id: String,
    unique_room_name: String,
    size: RoomSize,
    tenant_ids: Vec<String>,
}

#[derive(Debug, Default)]
pub struct StubData {
    tenants: Vec<Tenant>,
    rooms: Vec<StoredRoom>,
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn validate_tenant(draft: &TenantDraft) -> Result<(), StubError> {
    draft
        .validate()
        .map_err(|e| StubError::Invalid(e.to_string()))
}

impl StubData {
    fn populate(&self, room: &StoredRoom) -> Room {
        let tenants: Vec<Tenant> = room
            .tenant_ids
            .iter()
            .filter_map(|id| self.tenants.iter().find(|t| &t.id == id).cloned())
            .collect();
        Room {
            id: room.id.clone(),
            unique_room_name: room.unique_room_name.clone(),
            size: room.size,
            occupied: !tenants.is_empty(),
            tenants,
        }
    }

    fn room_index(&self, id: &str) -> Result<usize, StubError> {
        self.rooms
            .iter()
            .position(|r| r.id == id)
            .ok_or(StubError::NotFound("Room"))
    }

    fn check_room_name(&self, draft: &RoomDraft, except: Option<&str>) -> Result<(), StubError> {
        draft
            .validate()
            .map_err(|e| StubError::Invalid(e.to_string()))?;
        let taken = self.rooms.iter().any(|r| {
            r.unique_room_name == draft.unique_room_name && Some(r.id.as_str()) != except
        });
        if taken {
            return Err(StubError::DuplicateRoomName);
        }
        Ok(())
    }

    pub fn list_tenants(&self) -> Vec<Tenant> {
        self.tenants.clone()
    }

    pub fn create_tenant(&mut self, draft: &TenantDraft) -> Result<Tenant, StubError> {
        validate_tenant(draft)?;
        let mut tenant = Tenant::new(new_id(), draft.fullname.clone());
        apply_draft(&mut tenant, draft);
        self.tenants.push(tenant.clone());
        Ok(tenant)
    }

    pub fn update_tenant(&mut self, id: &str, draft: &TenantDraft) -> Result<Tenant, StubError> {
        validate_tenant(draft)?;
        let tenant = self
            .tenants
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StubError::NotFound("Tenant"))?;
        apply_draft(tenant, draft);
        Ok(tenant.clone())
    }

    pub fn delete_tenant(&mut self, id: &str) -> Result<(), StubError> {
        let before = self.tenants.len();
        self.tenants.retain(|t| t.id != id);
        if self.tenants.len() == before {
            return Err(StubError::NotFound("Tenant"));
        }
        for room in self.rooms.iter_mut() {
            room.tenant_ids.retain(|t| t != id);
        }
        Ok(())
    }

    pub fn list_rooms(&self) -> Vec<Room> {
        self.rooms.iter().map(|r| self.populate(r)).collect()
    }

    pub fn create_room(&mut self, draft: &RoomDraft) -> Result<Room, StubError> {
        self.check_room_name(draft, None)?;
        let room = StoredRoom {
            id: new_id(),
            unique_room_name: draft.unique_room_name.clone(),
            size: draft.size,
            tenant_ids: Vec::new(),
        };
        self.rooms.push(room.clone());
        Ok(self.populate(&room))
    }

    pub fn update_room(&mut self, id: &str, draft: &RoomDraft) -> Result<Room, StubError> {
        let index = self.room_index(id)?;
        self.check_room_name(draft, Some(id))?;
        let room = &mut self.rooms[index];
        room.unique_room_name = draft.unique_room_name.clone();
        room.size = draft.size;
        let room = room.clone();
        Ok(self.populate(&room))
    }

    pub fn delete_room(&mut self, id: &str) -> Result<(), StubError> {
        let index = self.room_index(id)?;
        let room = self.rooms.remove(index);
        for tenant in self.tenants.iter_mut() {
            tenant.rooms.retain(|r| r != &room.id);
        }
        Ok(())
    }

    /// Move a tenant into `target`, out of `previous` when given
    pub fn assign(
        &mut self,
        target: &str,
        previous: Option<&str>,
        tenant_id: &str,
    ) -> Result<(), StubError> {
        let target_index = self.room_index(target)?;
        let previous_index = previous.map(|p| self.room_index(p)).transpose()?;
        let tenant = self
            .tenants
            .iter_mut()
            .find(|t| t.id == tenant_id)
            .ok_or(StubError::NotFound("Tenant"))?;
        tenant.rooms = vec![target.to_string()];

        if let Some(index) = previous_index {
            self.rooms[index].tenant_ids.retain(|t| t != tenant_id);
        }
        let target_room = &mut self.rooms[target_index];
        if !target_room.tenant_ids.iter().any(|t| t == tenant_id) {
            target_room.tenant_ids.push(tenant_id.to_string());
        }
        Ok(())
    }
}

fn apply_draft(tenant: &mut Tenant, draft: &TenantDraft) {
    tenant.fullname = draft.fullname.clone();
    tenant.email = draft.email.clone();
    tenant.phone = draft.phone.clone();
    tenant.address = draft.address.clone();
    tenant.rental_date = draft.rental_date.clone();
    tenant.leave_date = draft.leave_date.clone();
    tenant.active = draft.active;
    tenant.emergency_contact = draft.emergency_contact.clone();
    tenant.rent_money = draft.rent_money;
}

/// Shared stub server state
#[derive(Clone)]
pub struct StubState {
    inner: Arc<StubStateInner>,
}

struct StubStateInner {
    config: StubConfig,
    data: RwLock<StubData>,
}

impl StubState {
    pub fn new(config: StubConfig) -> Self {
        Self {
            inner: Arc::new(StubStateInner {
                config,
                data: RwLock::new(StubData::default()),
            }),
        }
    }

    pub fn config(&self) -> &StubConfig {
        &self.inner.config
    }

    pub fn data(&self) -> &RwLock<StubData> {
        &self.inner.data
    }
}
