//! Front-desk state engine for the Riviera reservation system
//!
//! Holds the session-scoped in-memory model behind both the public
//! booking flow and the admin dashboard: reservations, tables, the
//! customer directory, the notification inbox, and the derived
//! aggregates every view reads. All mutation is synchronous and
//! single-writer; nothing persists across sessions.

pub mod analytics;
pub mod booking;
pub mod config;
pub mod notice;
pub mod seed;
pub mod state;
pub mod stores;
pub mod view;

pub use config::FrontDeskConfig;
pub use notice::{Notice, NoticeLevel};
pub use state::FrontDesk;
pub use view::{AdminTab, View};
