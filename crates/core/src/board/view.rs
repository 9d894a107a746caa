//! Assignment board view
//!
//! Holds the board state behind a lock that is never held across a request,
//! so a second drop can be issued while the first is still in flight. Each
//! drop is resolved independently by its own response.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::api::RentalApi;
use crate::room::Room;
use crate::tenant::Tenant;
use crate::{Error, Result};

use super::model::{BoardState, DragPayload, DropOutcome};

#[derive(Clone)]
pub struct AssignmentBoard {
    state: Arc<RwLock<BoardState>>,
    alert: Arc<RwLock<Option<String>>>,
    api: Arc<dyn RentalApi>,
}

impl AssignmentBoard {
    pub fn new(api: Arc<dyn RentalApi>) -> Self {
        Self {
            state: Arc::new(RwLock::new(BoardState::default())),
            alert: Arc::new(RwLock::new(None)),
            api,
        }
    }

    /// Fetch rooms and tenants concurrently and replace the board state
    pub async fn load(&self) -> Result<()> {
        let (rooms, tenants) =
            futures::future::try_join(self.api.list_rooms(), self.api.list_tenants()).await?;
        debug!("Board loaded {} rooms, {} tenants", rooms.len(), tenants.len());
        *self.state.write().await = BoardState::new(tenants, rooms);
        Ok(())
    }

    pub async fn snapshot(&self) -> BoardState {
        self.state.read().await.clone()
    }

    pub async fn rooms(&self) -> Vec<Room> {
        self.state.read().await.rooms.clone()
    }

    pub async fn unassigned(&self) -> Vec<Tenant> {
        self.state.read().await.unassigned()
    }

    /// Begin dragging a tenant
    pub fn drag_start(&self, tenant: &Tenant) -> DragPayload {
        DragPayload::new(tenant.id.clone())
    }

    /// Drop a dragged tenant on a room.
    ///
    /// Local state changes only after the server accepts the assignment.
    pub async fn drop_on(&self, payload: &DragPayload, target_room_id: &str) -> Result<DropOutcome> {
        let plan = match self.state.read().await.plan_drop(payload, target_room_id) {
            Ok(plan) => plan,
            Err(reason) => {
                debug!(
                    "Ignoring drop of {:?} on {}: {:?}",
                    payload.tenant_id, target_room_id, reason
                );
                return Ok(DropOutcome::Ignored(reason));
            }
        };

        let result = self
            .api
            .assign_tenant(
                &plan.target_room_id,
                plan.previous_room_id.as_deref(),
                &plan.tenant.id,
            )
            .await;

        match result {
            Ok(()) => {
                info!(
                    "Assigned tenant {} to room {} (previous: {:?})",
                    plan.tenant.id, plan.target_room_id, plan.previous_room_id
                );
                self.state.write().await.apply_assignment(&plan);
                Ok(DropOutcome::Assigned(plan))
            }
            Err(e) => {
                warn!("Assignment of tenant {} failed: {}", plan.tenant.id, e);
                let message = match &e {
                    Error::Transport(_) => "Network error. Could not assign tenant.".to_string(),
                    other => format!("Error: {}", other.user_message()),
                };
                *self.alert.write().await = Some(message);
                Err(e)
            }
        }
    }

    /// The alert raised by the last failed drop
    pub async fn alert(&self) -> Option<String> {
        self.alert.read().await.clone()
    }

    pub async fn dismiss_alert(&self) {
        *self.alert.write().await = None;
    }
}
