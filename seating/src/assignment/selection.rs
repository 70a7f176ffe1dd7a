//! Candidate selection
//!
//! Works out who still needs a seat from the full guest list and the tables'
//! current occupancy.

use std::collections::HashSet;

use shared::models::{Guest, SeatingTable};

/// Ids of every guest already seated at some table
pub fn seated_guest_ids(tables: &[SeatingTable]) -> HashSet<&str> {
    tables
        .iter()
        .flat_map(|table| table.assigned_guests.iter().map(String::as_str))
        .collect()
}

/// Guests not seated at any table.
///
/// With `attending_only`, guests who declined their RSVP are left out.
/// A missing RSVP or attendance flag does not count as declining.
pub fn select_unassigned<'a>(
    all_guests: &'a [Guest],
    tables: &[SeatingTable],
    attending_only: bool,
) -> Vec<&'a Guest> {
    let seated = seated_guest_ids(tables);

    all_guests
        .iter()
        .filter(|guest| !seated.contains(guest.id.as_str()))
        .filter(|guest| !(attending_only && guest.has_declined()))
        .collect()
}
