//! Shared types for the seating planner
//!
//! Guest and table records as stored by the wedding-planning application,
//! grouping rules, and the workspace error types.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{GroupingRules, Guest, RsvpStatus, SeatingTable, SeatingTableUpdate, TableNumber};
pub use serde::{Deserialize, Serialize};
