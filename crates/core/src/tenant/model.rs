//! Tenant model definitions
//!
//! Field names follow the backend's JSON. Tenants embedded in a room are often
//! partially populated, so everything except the identifier tolerates absence.

use serde::{Deserialize, Serialize};

use crate::nullable::null_as_default;
use crate::{Error, Result};

/// A tenant as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fullname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Rental start date, as the backend formats it
    #[serde(default, deserialize_with = "null_as_default")]
    pub rental_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rent_money: f64,
    /// Rooms the backend last associated with this tenant
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub rooms: Vec<String>,
}

impl Tenant {
    /// Create a tenant with only the identifying fields set
    pub fn new(id: impl Into<String>, fullname: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fullname: fullname.into(),
            email: String::new(),
            phone: None,
            address: None,
            rental_date: String::new(),
            leave_date: None,
            active: false,
            emergency_contact: None,
            rent_money: 0.0,
            rooms: Vec::new(),
        }
    }

    /// Set email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set phone
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the active flag
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set monthly rent
    pub fn with_rent(mut self, rent_money: f64) -> Self {
        self.rent_money = rent_money;
        self
    }

    /// Whether this tenant matches a search term.
    ///
    /// Name and email match case-insensitively; phone is a plain substring match.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.fullname.to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
            || self.phone.as_deref().is_some_and(|p| p.contains(term))
    }
}

/// Editable tenant fields, sent as the body of create and update requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TenantDraft {
    pub fullname: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub rental_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_date: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    pub rent_money: f64,
}

impl TenantDraft {
    /// Check the rules the entry form enforces before submitting
    pub fn validate(&self) -> Result<()> {
        if self.fullname.trim().is_empty() {
            return Err(Error::InvalidInput("Full name is required".into()));
        }
        if self.email.trim().is_empty() {
            return Err(Error::InvalidInput("Email address is required".into()));
        }
        if self.rental_date.trim().is_empty() {
            return Err(Error::InvalidInput("Rental start date is required".into()));
        }
        if !self.rent_money.is_finite() || self.rent_money < 0.0 {
            return Err(Error::InvalidInput(
                "Monthly rent must be a non-negative amount".into(),
            ));
        }
        Ok(())
    }
}

impl From<&Tenant> for TenantDraft {
    fn from(tenant: &Tenant) -> Self {
        Self {
            fullname: tenant.fullname.clone(),
            email: tenant.email.clone(),
            phone: tenant.phone.clone(),
            address: tenant.address.clone(),
            rental_date: tenant.rental_date.clone(),
            leave_date: tenant.leave_date.clone(),
            active: tenant.active,
            emergency_contact: tenant.emergency_contact.clone(),
            rent_money: tenant.rent_money,
        }
    }
}
