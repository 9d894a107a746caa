//! In-memory `RentalApi` used by the view tests

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::api::RentalApi;
use crate::room::{Room, RoomDraft};
use crate::tenant::{Tenant, TenantDraft};
use crate::{Error, Result};

type Assignment = (String, Option<String>, String);

#[derive(Default)]
struct FakeData {
    tenants: Vec<Tenant>,
    rooms: Vec<Room>,
    next_id: usize,
    calls: usize,
    fail_next: Option<Error>,
    last_assignment: Option<Assignment>,
}

impl FakeData {
    /// Count the call and hand out the queued failure, if any
    fn begin(&mut self) -> Result<()> {
        self.calls += 1;
        match self.fail_next.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{}", prefix, self.next_id)
    }
}

#[derive(Default)]
pub struct FakeApi {
    data: Mutex<FakeData>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed_tenant(&self, tenant: Tenant) {
        self.data.lock().await.tenants.push(tenant);
    }

    pub async fn seed_room(&self, room: Room) {
        self.data.lock().await.rooms.push(room);
    }

    /// Make the next call fail with `error`
    pub async fn fail_next_with(&self, error: Error) {
        self.data.lock().await.fail_next = Some(error);
    }

    pub async fn calls(&self) -> usize {
        self.data.lock().await.calls
    }

    pub async fn last_assignment(&self) -> Option<Assignment> {
        self.data.lock().await.last_assignment.clone()
    }
}

fn tenant_from_draft(id: String, draft: &TenantDraft) -> Tenant {
    Tenant {
        id,
        fullname: draft.fullname.clone(),
        email: draft.email.clone(),
        phone: draft.phone.clone(),
        address: draft.address.clone(),
        rental_date: draft.rental_date.clone(),
        leave_date: draft.leave_date.clone(),
        active: draft.active,
        emergency_contact: draft.emergency_contact.clone(),
        rent_money: draft.rent_money,
        rooms: Vec::new(),
    }
}

#[async_trait]
impl RentalApi for FakeApi {
    async fn list_tenants(&self) -> Result<Vec<Tenant>> {
        let mut data = self.data.lock().await;
        data.begin()?;
        Ok(data.tenants.clone())
    }

    async fn create_tenant(&self, draft: &TenantDraft) -> Result<Tenant> {
        let mut data = self.data.lock().await;
        data.begin()?;
        let id = data.next_id("tenant");
        let tenant = tenant_from_draft(id, draft);
        data.tenants.push(tenant.clone());
        Ok(tenant)
    }

    async fn update_tenant(&self, id: &str, draft: &TenantDraft) -> Result<Tenant> {
        let mut data = self.data.lock().await;
        data.begin()?;
        let slot = data
            .tenants
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::api_with_status(404, "Tenant not found"))?;
        *slot = tenant_from_draft(id.to_string(), draft);
        Ok(slot.clone())
    }

    async fn delete_tenant(&self, id: &str) -> Result<()> {
        let mut data = self.data.lock().await;
        data.begin()?;
        data.tenants.retain(|t| t.id != id);
        Ok(())
    }

    async fn list_rooms(&self) -> Result<Vec<Room>> {
        let mut data = self.data.lock().await;
        data.begin()?;
        Ok(data.rooms.clone())
    }

    async fn create_room(&self, draft: &RoomDraft) -> Result<Room> {
        let mut data = self.data.lock().await;
        data.begin()?;
        let id = data.next_id("room");
        let room = Room::new(id, draft.unique_room_name.clone(), draft.size);
        data.rooms.push(room.clone());
        Ok(room)
    }

    async fn update_room(&self, id: &str, draft: &RoomDraft) -> Result<Room> {
        let mut data = self.data.lock().await;
        data.begin()?;
        let room = data
            .rooms
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::api_with_status(404, "Room not found"))?;
        room.unique_room_name = draft.unique_room_name.clone();
        room.size = draft.size;
        Ok(room.clone())
    }

    async fn delete_room(&self, id: &str) -> Result<()> {
        let mut data = self.data.lock().await;
        data.begin()?;
        data.rooms.retain(|r| r.id != id);
        Ok(())
    }

    async fn assign_tenant(
        &self,
        target_room_id: &str,
        previous_room_id: Option<&str>,
        tenant_id: &str,
    ) -> Result<()> {
        let mut data = self.data.lock().await;
        data.begin()?;
        let tenant = data
            .tenants
            .iter()
            .find(|t| t.id == tenant_id)
            .cloned()
            .ok_or_else(|| Error::api_with_status(404, "Tenant not found"))?;
        for room in data.rooms.iter_mut() {
            if room.id == target_room_id {
                room.tenants.push(tenant.clone());
                room.occupied = true;
            } else if previous_room_id == Some(room.id.as_str()) {
                room.tenants.retain(|t| t.id != tenant_id);
                room.occupied = !room.tenants.is_empty();
            }
        }
        data.last_assignment = Some((
            target_room_id.to_string(),
            previous_room_id.map(str::to_string),
            tenant_id.to_string(),
        ));
        Ok(())
    }
}
