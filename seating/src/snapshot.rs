//! Seating snapshot I/O
//!
//! A snapshot is the guest list and tables as exported from the application:
//!
//! ```json
//! { "guests": [ { "id": "g1", "relation": "family", "side": "bride" } ],
//!   "tables": [ { "id": "t1", "number": 1, "capacity": 8, "assignedGuests": [] } ] }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Guest, SeatingTable, SeatingTableUpdate};

use crate::assignment::{PlanSummary, SeatingPlan};

/// Guests and tables at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingSnapshot {
    #[serde(default)]
    pub guests: Vec<Guest>,
    #[serde(default)]
    pub tables: Vec<SeatingTable>,
}

impl SeatingSnapshot {
    /// Read and validate a snapshot file
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_message(
                ErrorCode::SnapshotReadFailed,
                format!("Failed to read {}: {}", path.display(), e),
            )
            .with_detail("path", path.display().to_string())
        })?;

        let snapshot = Self::from_json(&text)?;
        tracing::info!(
            path = %path.display(),
            guests = snapshot.guests.len(),
            tables = snapshot.tables.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Parse and validate snapshot JSON
    pub fn from_json(text: &str) -> AppResult<Self> {
        let snapshot: Self = serde_json::from_str(text)
            .map_err(|e| AppError::invalid_format(format!("Invalid snapshot JSON: {}", e)))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Reject snapshots the planner cannot give a consistent answer for
    pub fn validate(&self) -> AppResult<()> {
        let mut table_ids = HashSet::new();
        for table in &self.tables {
            if !table_ids.insert(table.id.as_str()) {
                return Err(AppError::with_message(
                    ErrorCode::TableDuplicateId,
                    format!("Table {} appears more than once", table.id),
                )
                .with_detail("table_id", table.id.clone()));
            }
            if table.capacity < 0 {
                return Err(AppError::with_message(
                    ErrorCode::TableInvalidCapacity,
                    format!("Table {} has negative capacity {}", table.id, table.capacity),
                )
                .with_detail("table_id", table.id.clone())
                .with_detail("capacity", table.capacity));
            }
        }

        let mut guest_ids = HashSet::new();
        for guest in &self.guests {
            if !guest_ids.insert(guest.id.as_str()) {
                return Err(AppError::with_message(
                    ErrorCode::GuestDuplicateId,
                    format!("Guest {} appears more than once", guest.id),
                )
                .with_detail("guest_id", guest.id.clone()));
            }
        }

        Ok(())
    }
}

/// What the planner hands back to the application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatingReport {
    #[serde(flatten)]
    pub plan: SeatingPlan,
    /// Payloads for the bulk table update
    pub updates: Vec<SeatingTableUpdate>,
    /// Guests the run could not seat
    pub unseated: Vec<String>,
    pub summary: PlanSummary,
}

impl SeatingReport {
    pub fn to_json_pretty(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::internal(format!("Failed to serialize report: {}", e)))
    }

    /// Write the report to `path`, or stdout when `None`
    pub fn write_to(&self, path: Option<&Path>) -> AppResult<()> {
        let json = self.to_json_pretty()?;

        match path {
            Some(path) => std::fs::write(path, json + "\n").map_err(|e| {
                AppError::with_message(
                    ErrorCode::OutputWriteFailed,
                    format!("Failed to write {}: {}", path.display(), e),
                )
                .with_detail("path", path.display().to_string())
            }),
            None => {
                println!("{}", json);
                Ok(())
            }
        }
    }
}
