//! Assignment board
//!
//! This module provides the room assignment board: an unassigned-tenant pool
//! next to one bucket per room, with tenants moved by drag and drop.

mod model;
mod view;

pub use model::*;
pub use view::*;
