//! Seating Auto-Assignment Module
//!
//! Seats unseated guests at tables with free capacity:
//! 1. group guests by affinity (relation / side)
//! 2. pack groups onto tables, largest group and emptiest table first
//! 3. suggest table names from what ended up at each table
//!
//! Everything here is pure computation over the snapshot passed in. Guests
//! that do not fit are simply absent from the plan.

mod capacity;
mod grouping;
mod naming;
mod packer;
mod plan;
mod selection;

pub use capacity::{group_weight, guest_weight, used_capacity};
pub use grouping::{GuestGroup, group_guests};
pub use naming::{suggest_table_name, suggest_table_names};
pub use packer::{PackingResult, TableComposition, pack_groups};
pub use plan::{PlanSummary, SeatingPlan};
pub use selection::{seated_guest_ids, select_unassigned};

use std::collections::HashSet;

use shared::models::{GroupingRules, Guest, SeatingTable};

/// Run one auto-assignment pass.
///
/// # Arguments
/// * `unassigned_guests` - Guests to seat
/// * `tables` - Tables with their current occupancy
/// * `all_guests` - Every guest record, used to weigh existing occupancy
/// * `rules` - Affinity grouping rules
///
/// Guests already seated at a table, and repeated ids, are skipped so no guest
/// can end up at two tables.
pub fn auto_assign<'a, I>(
    unassigned_guests: I,
    tables: &[SeatingTable],
    all_guests: &[Guest],
    rules: &GroupingRules,
) -> SeatingPlan
where
    I: IntoIterator<Item = &'a Guest>,
{
    let candidates = eligible_guests(unassigned_guests, tables);
    let groups = group_guests(candidates.iter().copied(), rules);
    let packing = pack_groups(&groups, tables, all_guests);
    let table_names = suggest_table_names(&packing.compositions);

    let plan = SeatingPlan {
        assignments: packing.assignments,
        table_names,
    };

    tracing::info!(
        candidates = candidates.len(),
        groups = groups.len(),
        seated = plan.seated_count(),
        tables = plan.assignments.len(),
        "Auto-assignment finished"
    );

    plan
}

fn eligible_guests<'a, I>(guests: I, tables: &[SeatingTable]) -> Vec<&'a Guest>
where
    I: IntoIterator<Item = &'a Guest>,
{
    let seated = seated_guest_ids(tables);
    let mut seen: HashSet<&'a str> = HashSet::new();

    guests
        .into_iter()
        .filter(|&guest| {
            if seated.contains(guest.id.as_str()) {
                tracing::debug!(guest = %guest.id, "Guest already seated, skipping");
                return false;
            }
            if !seen.insert(guest.id.as_str()) {
                tracing::debug!(guest = %guest.id, "Duplicate guest id, skipping");
                return false;
            }
            true
        })
        .collect()
}
