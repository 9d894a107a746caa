//! Room list view

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::api::RentalApi;
use crate::notice::Notice;
use crate::{Error, Result};

use super::model::{Room, RoomDraft};

#[derive(Debug, Clone, Default)]
pub struct RoomListState {
    pub rooms: Vec<Room>,
    pub notice: Option<Notice>,
}

impl RoomListState {
    pub fn replace(&mut self, room: Room) -> bool {
        match self.rooms.iter_mut().find(|r| r.id == room.id) {
            Some(slot) => {
                *slot = room;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Room> {
        let index = self.rooms.iter().position(|r| r.id == id)?;
        Some(self.rooms.remove(index))
    }
}

/// Room view backed by the remote API
#[derive(Clone)]
pub struct RoomView {
    state: Arc<RwLock<RoomListState>>,
    api: Arc<dyn RentalApi>,
}

impl RoomView {
    pub fn new(api: Arc<dyn RentalApi>) -> Self {
        Self {
            state: Arc::new(RwLock::new(RoomListState::default())),
            api,
        }
    }

    pub async fn snapshot(&self) -> RoomListState {
        self.state.read().await.clone()
    }

    pub async fn rooms(&self) -> Vec<Room> {
        self.state.read().await.rooms.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Room> {
        self.state.read().await.rooms.iter().find(|r| r.id == id).cloned()
    }

    pub async fn load(&self) -> Result<Vec<Room>> {
        match self.api.list_rooms().await {
            Ok(rooms) => {
                let mut state = self.state.write().await;
                state.rooms = rooms.clone();
                state.notice = None;
                Ok(rooms)
            }
            Err(e) => Err(self.fail(e).await),
        }
    }

    pub async fn create(&self, draft: &RoomDraft) -> Result<Room> {
        if let Err(e) = draft.validate() {
            return Err(self.fail(e).await);
        }
        match self.api.create_room(draft).await {
            Ok(room) => {
                info!("Created room {} ({})", room.unique_room_name, room.id);
                self.state.write().await.rooms.push(room.clone());
                Ok(room)
            }
            Err(e) => Err(self.fail(e).await),
        }
    }

    pub async fn update(&self, id: &str, draft: &RoomDraft) -> Result<Room> {
        if let Err(e) = draft.validate() {
            return Err(self.fail(e).await);
        }
        match self.api.update_room(id, draft).await {
            Ok(room) => {
                info!("Updated room {}", room.id);
                if !self.state.write().await.replace(room.clone()) {
                    warn!("Updated room {} is not in the local list", room.id);
                }
                Ok(room)
            }
            Err(e) => Err(self.fail(e).await),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        match self.api.delete_room(id).await {
            Ok(()) => {
                info!("Deleted room {}", id);
                self.state.write().await.remove(id);
                Ok(())
            }
            Err(e) => Err(self.fail(e).await),
        }
    }

    pub async fn notice(&self) -> Option<Notice> {
        self.state.read().await.notice.clone()
    }

    pub async fn dismiss_notice(&self) {
        self.state.write().await.notice = None;
    }

    async fn fail(&self, error: Error) -> Error {
        warn!("Room operation failed: {}", error);
        self.state.write().await.notice = Some(Notice::new(error.user_message(), None));
        error
    }
}
