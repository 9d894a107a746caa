//! Dismissible, view-local failure messages

use chrono::{DateTime, Duration, Utc};

/// A failure message shown by a view until dismissed or expired
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub raised_at: DateTime<Utc>,
    /// `None` keeps the notice until it is dismissed
    pub ttl: Option<Duration>,
}

impl Notice {
    pub fn new(message: impl Into<String>, ttl: Option<Duration>) -> Self {
        Self {
            message: message.into(),
            raised_at: Utc::now(),
            ttl,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.ttl {
            Some(ttl) => now >= self.raised_at + ttl,
            None => false,
        }
    }
}
