//! Seating plan
//!
//! Result of one auto-assignment run and the helpers a caller needs to act on
//! it: table update payloads, leftover detection and a run summary.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use shared::models::{Guest, SeatingTable, SeatingTableUpdate};

use super::capacity::guest_weight;

/// Assignment plan plus suggested table names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatingPlan {
    /// table id → guest ids newly seated there
    pub assignments: BTreeMap<String, Vec<String>>,
    /// table id → suggested display name
    pub table_names: BTreeMap<String, String>,
}

impl SeatingPlan {
    pub fn is_empty(&self) -> bool {
        self.assignments.values().all(Vec::is_empty)
    }

    /// Number of guest records seated by this plan
    pub fn seated_count(&self) -> usize {
        self.assignments.values().map(Vec::len).sum()
    }

    /// Table the plan put a guest on
    pub fn table_for(&self, guest_id: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|(_, guest_ids)| guest_ids.iter().any(|id| id == guest_id))
            .map(|(table_id, _)| table_id.as_str())
    }

    /// Guests from `candidates` the plan could not seat
    pub fn unseated<'a, I>(&self, candidates: I) -> Vec<&'a Guest>
    where
        I: IntoIterator<Item = &'a Guest>,
    {
        let placed = self.placed_ids();
        candidates
            .into_iter()
            .filter(|guest| !placed.contains(guest.id.as_str()))
            .collect()
    }

    /// Update payloads for every table that gained guests.
    ///
    /// The new guest list is the existing one followed by the new ids. With
    /// `apply_names`, the suggested name is included when there is one; a
    /// missing suggestion leaves the stored name alone.
    pub fn table_updates(
        &self,
        tables: &[SeatingTable],
        apply_names: bool,
    ) -> Vec<SeatingTableUpdate> {
        tables
            .iter()
            .filter_map(|table| {
                let new_ids = self.assignments.get(&table.id).filter(|ids| !ids.is_empty())?;

                let mut assigned_guests = table.assigned_guests.clone();
                assigned_guests.extend(new_ids.iter().cloned());

                let name = if apply_names {
                    self.table_names.get(&table.id).cloned()
                } else {
                    None
                };

                Some(SeatingTableUpdate {
                    id: table.id.clone(),
                    assigned_guests: Some(assigned_guests),
                    name,
                })
            })
            .collect()
    }

    fn placed_ids(&self) -> HashSet<&str> {
        self.assignments
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

/// Counts describing one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Guests the run tried to seat
    pub candidates: usize,
    pub seated: usize,
    pub unseated: usize,
    /// Seats consumed by the newly seated guests (party sizes included)
    pub seats_used: u32,
    /// Tables that gained at least one guest
    pub tables_used: usize,
}

impl PlanSummary {
    pub fn from_plan<'a, I>(plan: &SeatingPlan, candidates: I) -> Self
    where
        I: IntoIterator<Item = &'a Guest>,
    {
        let placed = plan.placed_ids();
        let mut summary = Self {
            tables_used: plan.assignments.values().filter(|ids| !ids.is_empty()).count(),
            ..Self::default()
        };

        for guest in candidates {
            summary.candidates += 1;
            if placed.contains(guest.id.as_str()) {
                summary.seated += 1;
                summary.seats_used = summary.seats_used.saturating_add(guest_weight(guest));
            } else {
                summary.unseated += 1;
            }
        }

        summary
    }
}
