//! Name Synthesizer
//!
//! Suggests table names from who was seated there, e.g.
//! `"family & friends (bride & groom)"`. Values are used verbatim.

use std::collections::{BTreeMap, BTreeSet};

use super::packer::TableComposition;

const JOINER: &str = " & ";

/// Suggested name for one table, `None` when nothing identifying was seated
pub fn suggest_table_name(composition: &TableComposition) -> Option<String> {
    let relation_part = join_sorted(&composition.relations);
    let side_part = join_sorted(&composition.sides);

    let name = match (relation_part, side_part) {
        (None, None) => return None,
        (Some(relations), None) => relations,
        (None, Some(sides)) => format!("({})", sides),
        (Some(relations), Some(sides)) => format!("{} ({})", relations, sides),
    };

    Some(name)
}

/// Suggested names for every table that has one
pub fn suggest_table_names(
    compositions: &BTreeMap<String, TableComposition>,
) -> BTreeMap<String, String> {
    compositions
        .iter()
        .filter_map(|(table_id, composition)| {
            suggest_table_name(composition).map(|name| (table_id.clone(), name))
        })
        .collect()
}

// BTreeSet iterates in sorted order and holds distinct values
fn join_sorted(values: &BTreeSet<String>) -> Option<String> {
    let parts: Vec<&str> = values
        .iter()
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .collect();

    (!parts.is_empty()).then(|| parts.join(JOINER))
}
