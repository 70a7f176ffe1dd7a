//! Guest Grouper
//!
//! Partitions unseated guests into affinity groups so related guests are
//! packed onto the same table whenever possible.

use shared::models::{GroupingRules, Guest};
use std::collections::HashMap;

/// Guests that should be seated together
#[derive(Debug, Clone)]
pub struct GuestGroup<'a> {
    /// Composite grouping key (`relation:family_side:bride`, `individual_<id>`)
    pub key: String,
    /// Relation the group was keyed on
    pub relation: Option<String>,
    /// Side the group was keyed on
    pub side: Option<String>,
    pub members: Vec<&'a Guest>,
}

impl<'a> GuestGroup<'a> {
    fn new(key: String, relation: Option<String>, side: Option<String>) -> Self {
        Self {
            key,
            relation,
            side,
            members: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Group guests by the enabled affinity rules, largest group first.
///
/// Ties keep the order in which their keys were first seen.
pub fn group_guests<'a, I>(guests: I, rules: &GroupingRules) -> Vec<GuestGroup<'a>>
where
    I: IntoIterator<Item = &'a Guest>,
{
    let mut groups: Vec<GuestGroup<'a>> = Vec::new();

    if !rules.is_grouping() {
        groups.extend(guests.into_iter().map(|guest| {
            let mut group = GuestGroup::new(individual_key(guest), None, None);
            group.members.push(guest);
            group
        }));
        return groups;
    }

    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for guest in guests {
        let relation = (rules.group_by_relation && !guest.relation.is_empty())
            .then(|| guest.relation.clone());
        let side = (rules.group_by_side && !guest.side.is_empty()).then(|| guest.side.clone());

        let key = match (&relation, &side) {
            (None, None) => individual_key(guest),
            _ => affinity_key(relation.as_deref(), side.as_deref()),
        };

        let index = *index_by_key.entry(key.clone()).or_insert_with(|| {
            groups.push(GuestGroup::new(key, relation, side));
            groups.len() - 1
        });
        groups[index].members.push(guest);
    }

    // sort_by is stable: equal sizes keep first-seen order
    groups.sort_by(|a, b| b.len().cmp(&a.len()));
    groups
}

fn affinity_key(relation: Option<&str>, side: Option<&str>) -> String {
    let mut parts = Vec::with_capacity(2);
    if let Some(relation) = relation {
        parts.push(format!("relation:{}", relation));
    }
    if let Some(side) = side {
        parts.push(format!("side:{}", side));
    }
    parts.join("_")
}

fn individual_key(guest: &Guest) -> String {
    format!("individual_{}", guest.id)
}
