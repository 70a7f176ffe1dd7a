//! Unified error system for the seating planner
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of errors by code range
//! - [`AppError`]: Error with code, message and optional details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Guest errors
//! - 7xxx: Table errors
//! - 9xxx: System errors
//!
//! The auto-assignment core never fails; these codes cover the surfaces
//! around it (snapshot loading, configuration, output).
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::TableDuplicateId, "Table t1 appears twice")
//!     .with_detail("table_id", "t1");
//! assert_eq!(err.code.code(), 7002);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
