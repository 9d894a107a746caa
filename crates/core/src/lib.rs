//! Core library for RentDesk
//!
//! This crate contains the client-side business logic, including:
//! - Tenant and room models and their list views
//! - The assignment board
//! - Dashboard statistics
//! - The `RentalApi` seam implemented by the HTTP client

pub mod api;
pub mod board;
pub mod error;
pub mod notice;
pub mod room;
pub mod stats;
pub mod tenant;

mod nullable;

#[cfg(test)]
pub(crate) mod testing;

pub use api::RentalApi;
pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
