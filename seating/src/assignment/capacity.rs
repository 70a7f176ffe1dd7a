//! Capacity Calculator
//!
//! Seat accounting for guests and tables. A guest record may stand for a
//! whole party (couple, family) whose headcount comes from the RSVP amount.

use shared::models::Guest;
use std::collections::HashSet;

/// Seats consumed by a single guest record.
///
/// Reads the leading integer of the RSVP amount (`"3"` → 3, `"2 adults"` → 2).
/// Missing, non-numeric or non-positive amounts count as one seat.
pub fn guest_weight(guest: &Guest) -> u32 {
    guest
        .rsvp_amount()
        .and_then(parse_leading_int)
        .filter(|&n| n >= 1)
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
        .unwrap_or(1)
}

/// Seats consumed by a list of guests
pub fn group_weight<'a, I>(guests: I) -> u32
where
    I: IntoIterator<Item = &'a Guest>,
{
    guests
        .into_iter()
        .fold(0u32, |acc, guest| acc.saturating_add(guest_weight(guest)))
}

/// Seats already taken at a table.
///
/// Ids without a matching guest record contribute nothing.
pub fn used_capacity<S: AsRef<str>>(assigned_guest_ids: &[S], all_guests: &[Guest]) -> u32 {
    let assigned: HashSet<&str> = assigned_guest_ids.iter().map(AsRef::as_ref).collect();
    group_weight(
        all_guests
            .iter()
            .filter(|guest| assigned.contains(guest.id.as_str())),
    )
}

/// Leading-integer parse: optional whitespace and sign, then digits up to the
/// first non-digit. `None` when no digit is found.
fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // Overlong digit runs saturate instead of failing
    let value = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
