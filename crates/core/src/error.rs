//! Error types for the core library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The request never completed (connection refused, DNS, reset...).
    #[error("Network error: {0}")]
    Transport(String),

    /// A response arrived but reports failure, via status or envelope.
    #[error("{message}")]
    Api {
        status: Option<u16>,
        message: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not authenticated: {0}")]
    Unauthenticated(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create an Api error without an HTTP status
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            status: None,
            message: message.into(),
        }
    }

    /// Create an Api error carrying the HTTP status it came with
    pub fn api_with_status(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Text shown to the operator for this failure
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => "Network error".to_string(),
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
