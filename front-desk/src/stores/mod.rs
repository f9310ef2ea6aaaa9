//! In-memory stores
//!
//! One store per entity collection. Single-threaded, synchronous,
//! mutation-by-user-action; every derived value is recomputed on read.

pub mod customers;
pub mod ids;
pub mod notifications;
pub mod reservations;
pub mod tables;

pub use customers::CustomerDirectory;
pub use ids::IdAlloc;
pub use notifications::NotificationInbox;
pub use reservations::ReservationStore;
pub use tables::{TableStatusCounts, TableStore};
