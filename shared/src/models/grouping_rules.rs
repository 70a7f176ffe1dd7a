//! Grouping Rules Model

use serde::{Deserialize, Serialize};

/// Which affinity tags keep guests together during auto-assignment
///
/// With both flags off every guest is placed on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupingRules {
    #[serde(default = "enabled")]
    pub group_by_relation: bool,
    #[serde(default = "enabled")]
    pub group_by_side: bool,
}

fn enabled() -> bool {
    true
}

impl GroupingRules {
    pub const fn new(group_by_relation: bool, group_by_side: bool) -> Self {
        Self {
            group_by_relation,
            group_by_side,
        }
    }

    /// Rules that disable affinity grouping entirely
    pub const fn individual() -> Self {
        Self::new(false, false)
    }

    pub const fn is_grouping(&self) -> bool {
        self.group_by_relation || self.group_by_side
    }
}

impl Default for GroupingRules {
    fn default() -> Self {
        Self::new(true, true)
    }
}
