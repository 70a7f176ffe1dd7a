//! Table Packer
//!
//! Greedy first-fit packing of affinity groups onto tables ordered by free
//! seats. Groups that fit nowhere whole are split guest by guest across the
//! following tables; whatever still does not fit stays unseated.

use std::collections::{BTreeMap, BTreeSet};

use shared::models::{Guest, SeatingTable};

use super::capacity::{group_weight, guest_weight, used_capacity};
use super::grouping::GuestGroup;

/// Relations and sides seated at one table during a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableComposition {
    pub relations: BTreeSet<String>,
    pub sides: BTreeSet<String>,
}

impl TableComposition {
    fn record(&mut self, group: &GuestGroup<'_>) {
        if let Some(relation) = &group.relation {
            self.relations.insert(relation.clone());
        }
        if let Some(side) = &group.side {
            self.sides.insert(side.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty() && self.sides.is_empty()
    }
}

/// Packer output
#[derive(Debug, Clone, Default)]
pub struct PackingResult {
    /// table id → newly seated guest ids, in placement order
    pub assignments: BTreeMap<String, Vec<String>>,
    /// table id → what was seated there
    pub compositions: BTreeMap<String, TableComposition>,
}

/// Per-table bookkeeping, indexed in parallel with the sorted table list
struct TableSlot<'t> {
    table: &'t SeatingTable,
    remaining: u32,
}

/// Pack groups onto tables.
///
/// Tables are ordered once by free seats (descending, stable) and that order
/// holds for the whole run. Scanning starts at a cursor that never rewinds.
pub fn pack_groups(
    groups: &[GuestGroup<'_>],
    tables: &[SeatingTable],
    all_guests: &[Guest],
) -> PackingResult {
    let mut slots = open_slots(tables, all_guests);
    let mut result = PackingResult::default();

    if slots.is_empty() {
        tracing::debug!("No table has free seats, nothing to pack");
        return result;
    }

    let mut cursor = 0usize;

    for group in groups.iter().filter(|g| !g.is_empty()) {
        let weight = group_weight(group.members.iter().copied());

        let fit = (cursor..slots.len()).find(|&i| slots[i].remaining >= weight);

        match fit {
            Some(index) => {
                let slot = &mut slots[index];
                slot.remaining -= weight;
                seat(&mut result, slot.table, group, &group.members);

                tracing::debug!(
                    group = %group.key,
                    table = %slot.table.display_label(),
                    weight,
                    remaining = slot.remaining,
                    "Group seated whole"
                );

                cursor = if slot.remaining == 0 { index + 1 } else { index };
            }
            None => split_group(&mut result, &mut slots[cursor..], group),
        }
    }

    result
}

/// Tables with free seats, most free seats first
fn open_slots<'t>(tables: &'t [SeatingTable], all_guests: &[Guest]) -> Vec<TableSlot<'t>> {
    let mut slots: Vec<TableSlot<'t>> = tables
        .iter()
        .filter_map(|table| {
            let used = i64::from(used_capacity(&table.assigned_guests, all_guests));
            let available = i64::from(table.capacity) - used;
            (available > 0).then(|| TableSlot {
                table,
                remaining: u32::try_from(available).unwrap_or(u32::MAX),
            })
        })
        .collect();

    slots.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    slots
}

/// Spread a group over the slots in order, taking guests from the front while
/// they fit. Stops at the first guest that does not fit the current table.
fn split_group(result: &mut PackingResult, slots: &mut [TableSlot<'_>], group: &GuestGroup<'_>) {
    let mut pending: &[&Guest] = &group.members;

    for slot in slots.iter_mut() {
        if pending.is_empty() {
            break;
        }
        if slot.remaining == 0 {
            continue;
        }

        let mut taken = 0usize;
        let mut taken_weight = 0u32;
        for guest in pending {
            let next = taken_weight.saturating_add(guest_weight(guest));
            if next > slot.remaining {
                break;
            }
            taken_weight = next;
            taken += 1;
        }

        if taken == 0 {
            continue;
        }

        let (portion, rest) = pending.split_at(taken);
        slot.remaining -= taken_weight;
        seat(result, slot.table, group, portion);

        tracing::debug!(
            group = %group.key,
            table = %slot.table.display_label(),
            seated = taken,
            weight = taken_weight,
            remaining = slot.remaining,
            "Group split across tables"
        );

        pending = rest;
    }

    if !pending.is_empty() {
        tracing::debug!(
            group = %group.key,
            unseated = pending.len(),
            "Not enough free seats, guests left unseated"
        );
    }
}

fn seat(
    result: &mut PackingResult,
    table: &SeatingTable,
    group: &GuestGroup<'_>,
    guests: &[&Guest],
) {
    result
        .assignments
        .entry(table.id.clone())
        .or_default()
        .extend(guests.iter().map(|guest| guest.id.clone()));
    result
        .compositions
        .entry(table.id.clone())
        .or_default()
        .record(group);
}
