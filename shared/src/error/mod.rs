//! Unified error system
//!
//! - [`ErrorCode`]: standardized error codes for all error types
//! - [`AppError`]: rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Reservation errors
//! - 2xxx: Table errors
//! - 3xxx: Customer errors
//! - 4xxx: Notification errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::NotFound);
//! let err = AppError::with_message(ErrorCode::ValidationFailed, "Invalid email format");
//! let err = AppError::validation("Missing required field").with_detail("field", "email");
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
