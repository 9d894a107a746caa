//! Remote rental API
//!
//! Defines the operations the views need from the backend. The HTTP
//! implementation lives in `rentdesk-client`.

use async_trait::async_trait;

use crate::room::{Room, RoomDraft};
use crate::tenant::{Tenant, TenantDraft};
use crate::Result;

/// Backend operations, one per REST endpoint
#[async_trait]
pub trait RentalApi: Send + Sync {
    /// Fetch every tenant
    async fn list_tenants(&self) -> Result<Vec<Tenant>>;

    /// Create a tenant, returning the server's copy
    async fn create_tenant(&self, draft: &TenantDraft) -> Result<Tenant>;

    /// Update a tenant, returning the server's copy
    async fn update_tenant(&self, id: &str, draft: &TenantDraft) -> Result<Tenant>;

    /// Delete a tenant
    async fn delete_tenant(&self, id: &str) -> Result<()>;

    /// Fetch every room with its embedded tenants
    async fn list_rooms(&self) -> Result<Vec<Room>>;

    /// Create a room, returning the server's copy
    async fn create_room(&self, draft: &RoomDraft) -> Result<Room>;

    /// Update a room, returning the server's copy
    async fn update_room(&self, id: &str, draft: &RoomDraft) -> Result<Room>;

    /// Delete a room
    async fn delete_room(&self, id: &str) -> Result<()>;

    /// Move a tenant into `target_room_id`, out of `previous_room_id` if any
    async fn assign_tenant(
        &self,
        target_room_id: &str,
        previous_room_id: Option<&str>,
        tenant_id: &str,
    ) -> Result<()>;
}
