//! Shared types for the Riviera reservation system
//!
//! Entity models, error types, and utility types used by the
//! front-desk state engine and any future surface layered on top.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
