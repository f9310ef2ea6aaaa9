//! Unified error codes for the reservation system
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Reservation errors
//! - 2xxx: Table errors
//! - 3xxx: Customer errors
//! - 4xxx: Notification errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 4,
    /// Required field missing
    RequiredField = 5,
    /// Value out of range
    ValueOutOfRange = 6,

    // ==================== 1xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 1001,
    /// Invalid reservation time
    InvalidReservationTime = 1002,
    /// Invalid party size
    InvalidPartySize = 1003,

    // ==================== 2xxx: Table ====================
    /// Table not found
    TableNotFound = 2001,
    /// Table is occupied or reserved and cannot be removed
    TableInUse = 2002,

    // ==================== 3xxx: Customer ====================
    /// Customer not found
    CustomerNotFound = 3001,

    // ==================== 4xxx: Notification ====================
    /// Notification not found
    NotificationNotFound = 4001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
}

impl ErrorCode {
    /// Default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",
            Self::ReservationNotFound => "Reservation not found",
            Self::InvalidReservationTime => "Invalid reservation time",
            Self::InvalidPartySize => "Invalid party size",
            Self::TableNotFound => "Table not found",
            Self::TableInUse => "Table is occupied or reserved",
            Self::CustomerNotFound => "Customer not found",
            Self::NotificationNotFound => "Notification not found",
            Self::InternalError => "Internal error",
        }
    }

    /// Numeric code as u16
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.as_u16())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Error returned when converting an unknown u16 to [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::InvalidRequest,
            5 => Self::RequiredField,
            6 => Self::ValueOutOfRange,
            1001 => Self::ReservationNotFound,
            1002 => Self::InvalidReservationTime,
            1003 => Self::InvalidPartySize,
            2001 => Self::TableNotFound,
            2002 => Self::TableInUse,
            3001 => Self::CustomerNotFound,
            4001 => Self::NotificationNotFound,
            9001 => Self::InternalError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_u16() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::TableInUse,
            ErrorCode::ReservationNotFound,
            ErrorCode::InternalError,
        ] {
            let n: u16 = code.into();
            assert_eq!(ErrorCode::try_from(n), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ErrorCode::try_from(65535), Err(InvalidErrorCode(65535)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::TableInUse).unwrap();
        assert_eq!(json, "2002");
        let back: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ErrorCode::TableInUse);
    }
}
