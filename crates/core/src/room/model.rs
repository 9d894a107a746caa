//! Room model definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::nullable::null_as_default;
use crate::tenant::Tenant;
use crate::{Error, Result};

/// Room size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomSize {
    Small,
    Medium,
    Big,
}

impl Default for RoomSize {
    fn default() -> Self {
        Self::Small
    }
}

impl RoomSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Big => "Big",
        }
    }
}

impl fmt::Display for RoomSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "big" => Ok(Self::Big),
            other => Err(Error::InvalidInput(format!(
                "Unknown room size '{}' (expected Small, Medium or Big)",
                other
            ))),
        }
    }
}

/// A room with its embedded tenants, as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "_id")]
    pub id: String,
    pub unique_room_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: RoomSize,
    #[serde(default, deserialize_with = "null_as_default")]
    pub occupied: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tenants: Vec<Tenant>,
}

impl Room {
    /// Create an empty room
    pub fn new(id: impl Into<String>, name: impl Into<String>, size: RoomSize) -> Self {
        Self {
            id: id.into(),
            unique_room_name: name.into(),
            size,
            occupied: false,
            tenants: Vec::new(),
        }
    }

    /// Add an embedded tenant
    pub fn with_tenant(mut self, tenant: Tenant) -> Self {
        self.tenants.push(tenant);
        self.occupied = true;
        self
    }

    pub fn contains_tenant(&self, tenant_id: &str) -> bool {
        self.tenants.iter().any(|t| t.id == tenant_id)
    }
}

/// Editable room fields, sent as the body of create and update requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomDraft {
    pub unique_room_name: String,
    pub size: RoomSize,
}

impl RoomDraft {
    pub fn new(name: impl Into<String>, size: RoomSize) -> Self {
        Self {
            unique_room_name: name.into(),
            size,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.unique_room_name.trim().is_empty() {
            return Err(Error::InvalidInput("Room name is required".into()));
        }
        Ok(())
    }
}

impl From<&Room> for RoomDraft {
    fn from(room: &Room) -> Self {
        Self::new(room.unique_room_name.clone(), room.size)
    }
}
