//! Bearer token persistence between invocations

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use rentdesk_client::{GuardDecision, Session};
use tracing::debug;

/// Default location of the session file, relative to the working directory
pub const DEFAULT_SESSION_FILE: &str = ".rentdesk-session";

/// File holding the raw bearer token
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token, `None` when nobody is logged in
    pub async fn load(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(token) => {
                let token = token.trim().to_string();
                Ok((!token.is_empty()).then_some(token))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read session file {}", self.path.display())),
        }
    }

    pub async fn save(&self, session: &Session) -> Result<()> {
        tokio::fs::write(&self.path, session.token())
            .await
            .with_context(|| format!("Failed to write session file {}", self.path.display()))?;
        debug!("Saved session to {}", self.path().display());
        Ok(())
    }

    /// Remove the stored token. Missing files are fine.
    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove session file {}", self.path.display())),
        }
    }

    /// Run the session guard over the stored token.
    ///
    /// A token the guard rejects is discarded so the next run starts clean.
    pub async fn require_session(&self) -> Result<Session> {
        let token = self.load().await?;
        match Session::guard(token.as_deref(), Utc::now()) {
            GuardDecision::Authenticated(session) => Ok(session),
            GuardDecision::RequireLogin { reason } => {
                self.clear().await?;
                anyhow::bail!("{}. Run `rentdesk login` first.", reason)
            }
        }
    }
}
