use std::collections::HashSet;

use proptest::prelude::*;
use seating::assignment::{
    auto_assign, group_guests, group_weight, select_unassigned, used_capacity,
};
use shared::models::{GroupingRules, Guest, SeatingTable};

fn guest_fields() -> impl Strategy<Value = (&'static str, &'static str, Option<&'static str>)> {
    (
        prop::sample::select(vec!["", "family", "friends", "work"]),
        prop::sample::select(vec!["", "bride", "groom"]),
        prop::option::of(prop::sample::select(vec!["1", "2", "3", "0", "abc"])),
    )
}

/// Guests plus tables, some guests already seated at one table each
fn snapshot() -> impl Strategy<Value = (Vec<Guest>, Vec<SeatingTable>)> {
    (
        prop::collection::vec(guest_fields(), 0..30),
        prop::collection::vec(0i32..10, 0..6),
        prop::collection::vec(prop::option::of(0usize..6), 30),
    )
        .prop_map(|(specs, capacities, seatings)| {
            let guests: Vec<Guest> = specs
                .into_iter()
                .enumerate()
                .map(|(i, (relation, side, amount))| {
                    let guest = Guest::new(format!("g{}", i), format!("Guest {}", i))
                        .with_relation(relation)
                        .with_side(side);
                    match amount {
                        Some(amount) => guest.with_amount(amount),
                        None => guest,
                    }
                })
                .collect();

            let mut tables: Vec<SeatingTable> = capacities
                .into_iter()
                .enumerate()
                .map(|(i, capacity)| SeatingTable::new(format!("t{}", i), i as i64 + 1, capacity))
                .collect();

            for (guest, seat) in guests.iter().zip(seatings) {
                if let Some(index) = seat
                    && let Some(table) = tables.get_mut(index)
                {
                    table.assigned_guests.push(guest.id.clone());
                }
            }

            (guests, tables)
        })
}

fn rules() -> impl Strategy<Value = GroupingRules> {
    (any::<bool>(), any::<bool>()).prop_map(|(relation, side)| GroupingRules::new(relation, side))
}

proptest! {
    #[test]
    fn test_no_guest_seated_twice((guests, tables) in snapshot(), rules in rules()) {
        let unassigned = select_unassigned(&guests, &tables, false);
        let plan = auto_assign(unassigned.iter().copied(), &tables, &guests, &rules);

        let already_seated: HashSet<&str> = tables
            .iter()
            .flat_map(|t| t.assigned_guests.iter().map(String::as_str))
            .collect();

        let mut seen = HashSet::new();
        for id in plan.assignments.values().flatten() {
            prop_assert!(seen.insert(id.as_str()), "guest {} planned twice", id);
            prop_assert!(!already_seated.contains(id.as_str()), "guest {} was already seated", id);
        }
    }

    #[test]
    fn test_capacity_respected((guests, tables) in snapshot(), rules in rules()) {
        let unassigned = select_unassigned(&guests, &tables, false);
        let plan = auto_assign(unassigned.iter().copied(), &tables, &guests, &rules);

        for table in &tables {
            let Some(new_ids) = plan.assignments.get(&table.id) else {
                continue;
            };
            let new_guests = guests.iter().filter(|g| new_ids.contains(&g.id));
            let total = used_capacity(&table.assigned_guests, &guests) + group_weight(new_guests);
            prop_assert!(
                i64::from(total) <= i64::from(table.capacity),
                "table {} over capacity: {} > {}", table.id, total, table.capacity
            );
        }
    }

    #[test]
    fn test_plan_is_deterministic((guests, tables) in snapshot(), rules in rules()) {
        let unassigned = select_unassigned(&guests, &tables, false);

        let first = auto_assign(unassigned.iter().copied(), &tables, &guests, &rules);
        let second = auto_assign(unassigned.iter().copied(), &tables, &guests, &rules);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_only_candidates_are_planned((guests, tables) in snapshot(), rules in rules()) {
        let unassigned = select_unassigned(&guests, &tables, false);
        let candidate_ids: HashSet<&str> = unassigned.iter().map(|g| g.id.as_str()).collect();

        let plan = auto_assign(unassigned.iter().copied(), &tables, &guests, &rules);

        for id in plan.assignments.values().flatten() {
            prop_assert!(candidate_ids.contains(id.as_str()));
        }
        prop_assert_eq!(
            plan.seated_count() + plan.unseated(unassigned.iter().copied()).len(),
            unassigned.len()
        );
    }

    #[test]
    fn test_rules_off_gives_singletons((guests, _tables) in snapshot()) {
        let groups = group_guests(&guests, &GroupingRules::individual());

        prop_assert_eq!(groups.len(), guests.len());
        prop_assert!(groups.iter().all(|g| g.len() == 1));
    }
}
