//! Core module - configuration and the planning run
//!
//! - [`Config`] - planner configuration
//! - [`plan_snapshot`] / [`run`] - one auto-assignment pass over a snapshot

pub mod config;
pub mod planner;

pub use config::Config;
pub use planner::{plan_snapshot, run};
