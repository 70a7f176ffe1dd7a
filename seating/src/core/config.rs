use shared::models::GroupingRules;

/// Planner configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | SEATING_SNAPSHOT | seating.json | Snapshot file to read |
/// | SEATING_OUTPUT | (stdout) | Where to write the result |
/// | GROUP_BY_RELATION | true | Keep guests with the same relation together |
/// | GROUP_BY_SIDE | true | Keep guests from the same side together |
/// | APPLY_TABLE_NAMES | true | Put suggested names into table updates |
/// | ATTENDING_ONLY | true | Skip guests who declined |
/// | LOG_LEVEL | info | Max log level |
/// | LOG_DIR | (none) | Write daily rolling log files here |
///
/// # Example
///
/// ```ignore
/// GROUP_BY_SIDE=false SEATING_OUTPUT=plan.json cargo run -- guests.json
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Snapshot JSON path
    pub snapshot_path: String,
    /// Result JSON path, stdout when unset
    pub output_path: Option<String>,
    /// Affinity grouping rules
    pub rules: GroupingRules,
    /// Include suggested names in table updates
    pub apply_table_names: bool,
    /// Leave out guests whose RSVP says they are not coming
    pub attending_only: bool,
    /// trace | debug | info | warn | error
    pub log_level: String,
    /// Log file directory
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str, default: bool| {
            var(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        Self {
            snapshot_path: var("SEATING_SNAPSHOT").unwrap_or_else(|| "seating.json".into()),
            output_path: var("SEATING_OUTPUT").filter(|p| !p.trim().is_empty()),
            rules: GroupingRules::new(flag("GROUP_BY_RELATION", true), flag("GROUP_BY_SIDE", true)),
            apply_table_names: flag("APPLY_TABLE_NAMES", true),
            attending_only: flag("ATTENDING_ONLY", true),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR").filter(|d| !d.trim().is_empty()),
        }
    }

    /// Override the snapshot path (first command line argument)
    pub fn with_snapshot(mut self, path: impl Into<String>) -> Self {
        self.snapshot_path = path.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
