//! Tenant list view
//!
//! Keeps the local tenant list in step with the backend. Mutations are
//! applied only after the server confirms them, and always from the server's
//! echoed record.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::api::RentalApi;
use crate::notice::Notice;
use crate::{Error, Result};

use super::model::{Tenant, TenantDraft};

/// How long a tenant notice stays visible
pub const TENANT_NOTICE_TTL_SECS: i64 = 4;

/// In-memory tenant list plus the current search term
#[derive(Debug, Clone, Default)]
pub struct TenantListState {
    pub tenants: Vec<Tenant>,
    pub search: String,
    pub notice: Option<Notice>,
}

impl TenantListState {
    /// Tenants matching the current search term, in list order
    pub fn visible(&self) -> Vec<Tenant> {
        self.tenants
            .iter()
            .filter(|t| t.matches(&self.search))
            .cloned()
            .collect()
    }

    pub fn push(&mut self, tenant: Tenant) {
        self.tenants.push(tenant);
    }

    /// Replace the entry sharing the tenant's identifier; false if absent
    pub fn replace(&mut self, tenant: Tenant) -> bool {
        match self.tenants.iter_mut().find(|t| t.id == tenant.id) {
            Some(slot) => {
                *slot = tenant;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Tenant> {
        let index = self.tenants.iter().position(|t| t.id == id)?;
        Some(self.tenants.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Tenant> {
        self.tenants.iter().find(|t| t.id == id)
    }
}

/// Tenant view backed by the remote API
#[derive(Clone)]
pub struct TenantView {
    state: Arc<RwLock<TenantListState>>,
    api: Arc<dyn RentalApi>,
}

impl TenantView {
    pub fn new(api: Arc<dyn RentalApi>) -> Self {
        Self {
            state: Arc::new(RwLock::new(TenantListState::default())),
            api,
        }
    }

    /// Get a snapshot of the current state
    pub async fn snapshot(&self) -> TenantListState {
        self.state.read().await.clone()
    }

    /// Fetch all tenants, replacing the local list
    pub async fn load(&self) -> Result<Vec<Tenant>> {
        match self.api.list_tenants().await {
            Ok(tenants) => {
                let mut state = self.state.write().await;
                state.tenants = tenants.clone();
                state.notice = None;
                Ok(tenants)
            }
            Err(e) => {
                warn!("Loading tenants failed: {}", e);
                self.raise("Failed to load tenants").await;
                Err(e)
            }
        }
    }

    /// Set the search term used by [`TenantView::visible`]
    pub async fn set_search(&self, term: impl Into<String>) {
        self.state.write().await.search = term.into();
    }

    /// Tenants matching the current search term
    pub async fn visible(&self) -> Vec<Tenant> {
        self.state.read().await.visible()
    }

    pub async fn get(&self, id: &str) -> Option<Tenant> {
        self.state.read().await.get(id).cloned()
    }

    /// Create a tenant and append the server's record
    pub async fn create(&self, draft: &TenantDraft) -> Result<Tenant> {
        if let Err(e) = draft.validate() {
            return Err(self.fail(e, "Action failed").await);
        }
        match self.api.create_tenant(draft).await {
            Ok(tenant) => {
                info!("Created tenant {}", tenant.id);
                self.state.write().await.push(tenant.clone());
                Ok(tenant)
            }
            Err(e) => Err(self.fail(e, "Action failed").await),
        }
    }

    /// Update a tenant and swap in the server's record
    pub async fn update(&self, id: &str, draft: &TenantDraft) -> Result<Tenant> {
        if let Err(e) = draft.validate() {
            return Err(self.fail(e, "Action failed").await);
        }
        match self.api.update_tenant(id, draft).await {
            Ok(tenant) => {
                info!("Updated tenant {}", tenant.id);
                if !self.state.write().await.replace(tenant.clone()) {
                    warn!("Updated tenant {} is not in the local list", tenant.id);
                }
                Ok(tenant)
            }
            Err(e) => Err(self.fail(e, "Action failed").await),
        }
    }

    /// Delete a tenant and drop it from the local list
    pub async fn delete(&self, id: &str) -> Result<()> {
        match self.api.delete_tenant(id).await {
            Ok(()) => {
                info!("Deleted tenant {}", id);
                self.state.write().await.remove(id);
                Ok(())
            }
            Err(e) => Err(self.fail(e, "Delete failed").await),
        }
    }

    /// The current notice, if one is raised and has not expired
    pub async fn notice(&self) -> Option<Notice> {
        let now = Utc::now();
        self.state
            .read()
            .await
            .notice
            .clone()
            .filter(|n| !n.is_expired_at(now))
    }

    pub async fn dismiss_notice(&self) {
        self.state.write().await.notice = None;
    }

    async fn fail(&self, error: Error, fallback: &str) -> Error {
        warn!("Tenant operation failed: {}", error);
        let message = match &error {
            Error::Api { message, .. } if message.is_empty() => fallback.to_string(),
            other => other.user_message(),
        };
        self.raise(message).await;
        error
    }

    async fn raise(&self, message: impl Into<String>) {
        self.state.write().await.notice = Some(Notice::new(
            message,
            Some(Duration::seconds(TENANT_NOTICE_TTL_SECS)),
        ));
    }
}
