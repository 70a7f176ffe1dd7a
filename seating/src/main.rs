use seating::{core::run, setup_environment};

fn main() -> anyhow::Result<()> {
    // 1. .env, config, logging
    let mut config = setup_environment();

    // 2. A positional argument overrides SEATING_SNAPSHOT
    if let Some(path) = std::env::args().nth(1) {
        config = config.with_snapshot(path);
    }

    tracing::info!(
        snapshot = %config.snapshot_path,
        group_by_relation = config.rules.group_by_relation,
        group_by_side = config.rules.group_by_side,
        "Seating planner starting"
    );

    // 3. Plan and write the report
    if let Err(e) = run(&config) {
        tracing::error!(
            code = %e.code,
            category = e.code.category().name(),
            "Seating planner failed: {}",
            e
        );
        return Err(e.into());
    }

    Ok(())
}
