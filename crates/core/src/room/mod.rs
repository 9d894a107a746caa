//! Room module
//!
//! Room records and the room list view.

mod model;
mod view;

pub use model::*;
pub use view::*;
