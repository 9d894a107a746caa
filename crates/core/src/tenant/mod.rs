//! Tenant module
//!
//! Tenant records and the tenant list view.

mod model;
mod view;

pub use model::*;
pub use view::*;
