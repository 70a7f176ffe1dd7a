//! Utilities
//!
//! - [`AppError`] / [`AppResult`] (from shared::error)
//! - logging setup

pub mod logger;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
