//! Unified error codes for the seating planner
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Guest errors
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as its `u16` value so the front end can match on numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Snapshot is not valid JSON or does not match the expected shape
    InvalidFormat = 6,

    // ==================== 6xxx: Guest ====================
    /// The same guest id appears more than once
    GuestDuplicateId = 6002,

    // ==================== 7xxx: Table ====================
    /// The same table id appears more than once
    TableDuplicateId = 7002,
    /// Table capacity is negative
    TableInvalidCapacity = 7003,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Snapshot file could not be read
    SnapshotReadFailed = 9101,
    /// Result could not be written
    OutputWriteFailed = 9102,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
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
        match value {
            // General
            6 => Ok(ErrorCode::InvalidFormat),

            // Guest
            6002 => Ok(ErrorCode::GuestDuplicateId),

            // Table
            7002 => Ok(ErrorCode::TableDuplicateId),
            7003 => Ok(ErrorCode::TableInvalidCapacity),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9101 => Ok(ErrorCode::SnapshotReadFailed),
            9102 => Ok(ErrorCode::OutputWriteFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
