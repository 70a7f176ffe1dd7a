//! Data models
//!
//! Field names follow the application's document store (camelCase on the wire).
//! All IDs are opaque document ids (`String`).

pub mod grouping_rules;
pub mod guest;
pub mod seating_table;

// Re-exports
pub use grouping_rules::*;
pub use guest::*;
pub use seating_table::*;
