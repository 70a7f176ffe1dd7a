//! Planning run
//!
//! Glue between a snapshot and the assignment core: pick who still needs a
//! seat, run auto-assignment, and package the result for the application.

use std::path::Path;

use crate::assignment::{PlanSummary, auto_assign, select_unassigned};
use crate::core::Config;
use crate::snapshot::{SeatingReport, SeatingSnapshot};
use crate::utils::AppResult;

/// Run one auto-assignment pass over an in-memory snapshot
pub fn plan_snapshot(snapshot: &SeatingSnapshot, config: &Config) -> SeatingReport {
    let candidates = select_unassigned(&snapshot.guests, &snapshot.tables, config.attending_only);

    let plan = auto_assign(
        candidates.iter().copied(),
        &snapshot.tables,
        &snapshot.guests,
        &config.rules,
    );

    let updates = plan.table_updates(&snapshot.tables, config.apply_table_names);
    let unseated: Vec<String> = plan
        .unseated(candidates.iter().copied())
        .into_iter()
        .map(|guest| guest.id.clone())
        .collect();
    let summary = PlanSummary::from_plan(&plan, candidates.iter().copied());

    if summary.unseated > 0 {
        tracing::warn!(
            unseated = summary.unseated,
            "Not every guest could be seated, add tables or seats"
        );
    }
    tracing::info!(
        seated = summary.seated,
        seats_used = summary.seats_used,
        tables_used = summary.tables_used,
        "Seating plan ready"
    );

    SeatingReport {
        plan,
        updates,
        unseated,
        summary,
    }
}

/// Load the configured snapshot, plan it and write the report
pub fn run(config: &Config) -> AppResult<SeatingReport> {
    let snapshot = SeatingSnapshot::load(&config.snapshot_path)?;
    let report = plan_snapshot(&snapshot, config);
    report.write_to(config.output_path.as_deref().map(Path::new))?;
    Ok(report)
}
