//! Seating planner - wedding seating auto-assignment
//!
//! # Overview
//!
//! Given the guest list and the tables (with whoever already sits there),
//! produce a plan that seats the remaining guests, keeping families and
//! wedding sides together, plus a suggested name for every table that got
//! guests.
//!
//! # Modules
//!
//! ```text
//! seating/src/
//! ├── assignment/    # capacity, grouping, packing, naming (pure)
//! ├── core/          # configuration and the planning run
//! ├── snapshot.rs    # snapshot JSON in, report JSON out
//! └── utils/         # logging, error re-exports
//! ```
//!
//! # Example
//!
//! ```
//! use seating::assignment::auto_assign;
//! use shared::models::{GroupingRules, Guest, SeatingTable};
//!
//! let guests = vec![
//!     Guest::new("g1", "Ana").with_relation("family").with_side("bride"),
//!     Guest::new("g2", "Luis").with_relation("family").with_side("bride"),
//! ];
//! let tables = vec![SeatingTable::new("t1", 1, 8)];
//!
//! let plan = auto_assign(&guests, &tables, &guests, &GroupingRules::default());
//! assert_eq!(plan.assignments["t1"], vec!["g1", "g2"]);
//! assert_eq!(plan.table_names["t1"], "family (bride)");
//! ```

pub mod assignment;
pub mod core;
pub mod snapshot;
pub mod utils;

// Re-export public types
pub use crate::assignment::{PlanSummary, SeatingPlan, auto_assign};
pub use crate::core::Config;
pub use crate::snapshot::{SeatingReport, SeatingSnapshot};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and set up logging from the resulting configuration
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
