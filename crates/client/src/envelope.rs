//! Response envelopes
//!
//! The backend wraps each endpoint's payload differently. Every endpoint gets
//! its own struct here, and each struct decides success the way that
//! endpoint reports it.

use reqwest::StatusCode;
use serde::Deserialize;

use rentdesk_core::room::Room;
use rentdesk_core::tenant::Tenant;
use rentdesk_core::{Error, Result};

fn failure(status: StatusCode, message: Option<String>, fallback: &str) -> Error {
    let message = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());
    Error::api_with_status(status.as_u16(), message)
}

/// `GET /tenant`
#[derive(Debug, Default, Deserialize)]
pub struct TenantListEnvelope {
    #[serde(default)]
    pub data: Option<Vec<Tenant>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl TenantListEnvelope {
    pub fn into_result(self, status: StatusCode) -> Result<Vec<Tenant>> {
        if !status.is_success() {
            return Err(failure(status, self.message, "Failed to load tenants"));
        }
        Ok(self.data.unwrap_or_default())
    }
}

/// `POST /tenant/create` and `PUT /tenant/{id}`
#[derive(Debug, Default, Deserialize)]
pub struct TenantEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub tenant: Option<Tenant>,
    #[serde(default)]
    pub message: Option<String>,
}

impl TenantEnvelope {
    pub fn into_result(self, status: StatusCode) -> Result<Tenant> {
        match self.tenant {
            Some(tenant) if status.is_success() && self.success => Ok(tenant),
            _ => Err(failure(status, self.message, "Action failed")),
        }
    }
}

/// `DELETE /delete/{id}`
#[derive(Debug, Default, Deserialize)]
pub struct TenantDeleteEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl TenantDeleteEnvelope {
    pub fn into_result(self, status: StatusCode) -> Result<()> {
        if status.is_success() && self.success {
            Ok(())
        } else {
            Err(failure(status, self.message, "Delete failed"))
        }
    }
}

/// `GET /rooms`
#[derive(Debug, Default, Deserialize)]
pub struct RoomListEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub rooms: Option<Vec<Room>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RoomListEnvelope {
    pub fn into_result(self, status: StatusCode) -> Result<Vec<Room>> {
        if !status.is_success() || !self.success {
            return Err(failure(status, self.message, "Failed to load rooms"));
        }
        Ok(self.rooms.unwrap_or_default())
    }
}

/// `POST /rooms/create` and `PUT /rooms/{id}`
#[derive(Debug, Default, Deserialize)]
pub struct RoomEnvelope {
    #[serde(default)]
    pub room: Option<Room>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RoomEnvelope {
    pub fn into_result(self, status: StatusCode) -> Result<Room> {
        match self.room {
            Some(room) if status.is_success() => Ok(room),
            _ => Err(failure(status, self.message, "Action failed")),
        }
    }
}

/// Endpoints that only report success through the status:
/// `DELETE /rooms/delete/{id}` and `PUT /rooms/addTenant/...`
#[derive(Debug, Default, Deserialize)]
pub struct MessageEnvelope {
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageEnvelope {
    pub fn into_result(self, status: StatusCode, fallback: &str) -> Result<()> {
        if status.is_success() {
            Ok(())
        } else {
            Err(failure(status, self.message, fallback))
        }
    }
}

/// `POST /auth/login`
#[derive(Debug, Default, Deserialize)]
pub struct LoginEnvelope {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginEnvelope {
    pub fn into_result(self, status: StatusCode) -> Result<String> {
        match self.access_token {
            Some(token) if status.is_success() && !token.is_empty() => Ok(token),
            _ => Err(failure(
                status,
                self.message,
                "Login failed. Please check your credentials.",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<T: serde::de::DeserializeOwned>(body: &str) -> T {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_tenant_list_without_data_is_empty() {
        let env: TenantListEnvelope = parse("{}");
        assert!(env.into_result(StatusCode::OK).unwrap().is_empty());
    }

    #[test]
    fn test_tenant_list_fails_on_error_status() {
        let env: TenantListEnvelope = parse(r#"{"message":"Unauthorized"}"#);
        let err = env.into_result(StatusCode::UNAUTHORIZED).unwrap_err();
        assert!(matches!(err, Error::Api { status: Some(401), ref message } if message == "Unauthorized"));
    }

    #[test]
    fn test_tenant_mutation_requires_success_flag() {
        let env: TenantEnvelope = parse(r#"{"tenant":{"_id":"t1","fullname":"Ada"}}"#);
        let err = env.into_result(StatusCode::OK).unwrap_err();
        assert_eq!(err.user_message(), "Action failed");

        let env: TenantEnvelope =
            parse(r#"{"success":true,"tenant":{"_id":"t1","fullname":"Ada"}}"#);
        assert_eq!(env.into_result(StatusCode::OK).unwrap().id, "t1");
    }

    #[test]
    fn test_tenant_delete_uses_server_message() {
        let env: TenantDeleteEnvelope = parse(r#"{"success":false,"message":"Tenant not found"}"#);
        assert_eq!(
            env.into_result(StatusCode::NOT_FOUND).unwrap_err().user_message(),
            "Tenant not found"
        );
        let env: TenantDeleteEnvelope = parse(r#"{"success":false}"#);
        assert_eq!(
            env.into_result(StatusCode::OK).unwrap_err().user_message(),
            "Delete failed"
        );
    }

    #[test]
    fn test_room_list_requires_success_flag() {
        let env: RoomListEnvelope = parse(r#"{"rooms":[]}"#);
        assert_eq!(
            env.into_result(StatusCode::OK).unwrap_err().user_message(),
            "Failed to load rooms"
        );

        let env: RoomListEnvelope = parse(
            r#"{"success":true,"rooms":[{"_id":"r1","unique_room_name":"Room 101","size":"Small","tenants":null}]}"#,
        );
        let rooms = env.into_result(StatusCode::OK).unwrap();
        assert!(rooms[0].tenants.is_empty());
    }

    #[test]
    fn test_success_flag_does_not_override_error_status() {
        let env: TenantEnvelope = parse(r#"{"success":true,"tenant":{"_id":"t1"}}"#);
        let err = env.into_result(StatusCode::INTERNAL_SERVER_ERROR).unwrap_err();
        assert!(matches!(err, Error::Api { status: Some(500), .. }));
        assert_eq!(err.user_message(), "Action failed");

        let env: TenantDeleteEnvelope = parse(r#"{"success":true}"#);
        assert_eq!(
            env.into_result(StatusCode::BAD_GATEWAY).unwrap_err().user_message(),
            "Delete failed"
        );

        let env: RoomListEnvelope = parse(r#"{"success":true,"rooms":[]}"#);
        assert_eq!(
            env.into_result(StatusCode::SERVICE_UNAVAILABLE)
                .unwrap_err()
                .user_message(),
            "Failed to load rooms"
        );
    }

    #[test]
    fn test_embedded_tenant_with_null_fields_decodes() {
        let env: RoomListEnvelope = parse(
            r#"{"success":true,"rooms":[{"_id":"r1","unique_room_name":"Room 101","size":"Small","occupied":true,"tenants":[{"_id":"t1","fullname":"Ada","email":null,"rental_date":null,"active":null,"rent_money":null}]}]}"#,
        );
        let rooms = env.into_result(StatusCode::OK).unwrap();
        let tenant = &rooms[0].tenants[0];
        assert_eq!(tenant.fullname, "Ada");
        assert_eq!(tenant.rental_date, "");
        assert!(!tenant.active);
        assert_eq!(tenant.rent_money, 0.0);
    }

    #[test]
    fn test_room_mutation_requires_ok_status() {
        let env: RoomEnvelope = parse(r#"{"message":"Room name already exists"}"#);
        assert_eq!(
            env.into_result(StatusCode::BAD_REQUEST).unwrap_err().user_message(),
            "Room name already exists"
        );
    }

    #[test]
    fn test_message_envelope_status_decides() {
        assert!(MessageEnvelope::default()
            .into_result(StatusCode::OK, "Could not assign tenant")
            .is_ok());
        let err = MessageEnvelope::default()
            .into_result(StatusCode::INTERNAL_SERVER_ERROR, "Could not assign tenant")
            .unwrap_err();
        assert_eq!(err.user_message(), "Could not assign tenant");
    }

    #[test]
    fn test_login_fallback_message() {
        let err = LoginEnvelope::default()
            .into_result(StatusCode::UNAUTHORIZED)
            .unwrap_err();
        assert_eq!(
            err.user_message(),
            "Login failed. Please check your credentials."
        );
    }
}
