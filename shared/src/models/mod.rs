//! Data models
//!
//! Shared between the front-desk state engine and any UI surface.
//! All IDs are `i64`, allocated monotonically and never reused.

pub mod customer;
pub mod notification;
pub mod reservation;
pub mod table;

// Re-exports
pub use customer::*;
pub use notification::*;
pub use reservation::*;
pub use table::*;
