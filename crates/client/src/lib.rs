//! HTTP client for the RentDesk backend
//!
//! Implements [`rentdesk_core::RentalApi`] over reqwest, plus login and
//! session handling.

mod config;
mod envelope;
mod http;
mod session;

pub use config::{ClientConfig, DEFAULT_API_URL};
pub use http::{login, HttpRentalApi};
pub use session::{GuardDecision, Session, SessionClaims};
