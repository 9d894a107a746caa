//! Assignment board model
//!
//! The board shows an unassigned pool and one bucket per room. Everything
//! here is synchronous; the view in `board::view` drives it around the
//! network call.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::room::Room;
use crate::tenant::Tenant;

/// Data attached to a drag gesture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    pub tenant_id: String,
}

impl DragPayload {
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
        }
    }
}

/// Why a drop was dropped without contacting the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    EmptyPayload,
    UnknownTenant,
    UnknownRoom,
    AlreadyInRoom,
}

/// An assignment ready to be sent to the server
#[derive(Debug, Clone, PartialEq)]
pub struct DropPlan {
    pub tenant: Tenant,
    pub target_room_id: String,
    pub previous_room_id: Option<String>,
}

/// Result of dropping a tenant on a room
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    Assigned(DropPlan),
    Ignored(IgnoreReason),
}

/// Everything the board knows: all tenants plus the rooms with their buckets
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    pub tenants: Vec<Tenant>,
    pub rooms: Vec<Room>,
}

impl BoardState {
    pub fn new(tenants: Vec<Tenant>, rooms: Vec<Room>) -> Self {
        Self { tenants, rooms }
    }

    /// Tenants that are inactive and absent from every room's bucket
    pub fn unassigned(&self) -> Vec<Tenant> {
        self.tenants
            .iter()
            .filter(|t| !t.active && !self.rooms.iter().any(|r| r.contains_tenant(&t.id)))
            .cloned()
            .collect()
    }

    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == room_id)
    }

    pub fn tenant(&self, tenant_id: &str) -> Option<&Tenant> {
        self.tenants.iter().find(|t| t.id == tenant_id)
    }

    /// Identifiers of every room whose bucket holds the tenant.
    ///
    /// More than one entry means the backend broke the one-room-per-tenant rule.
    pub fn rooms_holding(&self, tenant_id: &str) -> Vec<String> {
        self.rooms
            .iter()
            .filter(|r| r.contains_tenant(tenant_id))
            .map(|r| r.id.clone())
            .collect()
    }

    /// Work out what dropping `payload` on `target_room_id` should do
    pub fn plan_drop(
        &self,
        payload: &DragPayload,
        target_room_id: &str,
    ) -> Result<DropPlan, IgnoreReason> {
        if payload.tenant_id.is_empty() {
            return Err(IgnoreReason::EmptyPayload);
        }
        let tenant = self
            .tenant(&payload.tenant_id)
            .ok_or(IgnoreReason::UnknownTenant)?;
        let target = self.room(target_room_id).ok_or(IgnoreReason::UnknownRoom)?;
        if target.contains_tenant(&tenant.id) {
            return Err(IgnoreReason::AlreadyInRoom);
        }

        let holding = self.rooms_holding(&tenant.id);
        if holding.len() > 1 {
            warn!(
                "Tenant {} is listed in {} rooms ({}); moving it out of {} only",
                tenant.id,
                holding.len(),
                holding.join(", "),
                holding[0]
            );
        }

        Ok(DropPlan {
            tenant: tenant.clone(),
            target_room_id: target.id.clone(),
            previous_room_id: holding.into_iter().next(),
        })
    }

    /// Apply a confirmed assignment in one pass over the rooms
    pub fn apply_assignment(&mut self, plan: &DropPlan) {
        let mut tenant = plan.tenant.clone();
        tenant.rooms = vec![plan.target_room_id.clone()];

        for room in self.rooms.iter_mut() {
            if room.id == plan.target_room_id {
                if !room.contains_tenant(&tenant.id) {
                    room.tenants.push(tenant.clone());
                }
                room.occupied = true;
            } else if plan.previous_room_id.as_deref() == Some(room.id.as_str()) {
                room.tenants.retain(|t| t.id != tenant.id);
                room.occupied = !room.tenants.is_empty();
            }
        }

        if let Some(slot) = self.tenants.iter_mut().find(|t| t.id == tenant.id) {
            slot.rooms = tenant.rooms.clone();
        }
    }
}
