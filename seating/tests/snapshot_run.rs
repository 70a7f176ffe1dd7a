use seating::core::{Config, plan_snapshot, run};
use seating::snapshot::SeatingSnapshot;
use shared::error::ErrorCode;
use shared::models::GroupingRules;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
  "guests": [
    { "id": "g1", "name": "Ana", "relation": "family", "side": "bride",
      "rsvpStatus": { "amount": "2", "attendance": true } },
    { "id": "g2", "name": "Luis", "relation": "family", "side": "bride" },
    { "id": "g3", "name": "Marta", "relation": "friends", "side": "groom",
      "rsvpStatus": { "amount": 1, "attendance": false } },
    { "id": "g4", "name": "Pablo", "relation": null, "side": null },
    { "id": "g5", "name": "Sara", "relation": "work", "side": "groom" }
  ],
  "tables": [
    { "id": "t1", "number": 1, "capacity": 4, "assignedGuests": ["g5"], "name": "Head table" },
    { "id": "t2", "number": "B", "capacity": 2 }
  ]
}"#;

fn test_config(dir: &TempDir) -> Config {
    Config {
        snapshot_path: dir.path().join("seating.json").display().to_string(),
        output_path: Some(dir.path().join("plan.json").display().to_string()),
        rules: GroupingRules::default(),
        apply_table_names: true,
        attending_only: true,
        log_level: "info".to_string(),
        log_dir: None,
    }
}

#[test]
fn test_run_writes_report() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    std::fs::write(&config.snapshot_path, SNAPSHOT).unwrap();

    let report = run(&config).unwrap();

    // g3 declined, g5 is already seated
    assert_eq!(report.summary.candidates, 3);

    // family (weight 3) takes the 3 free seats at t1, g4 goes to t2
    assert_eq!(report.plan.assignments["t1"], vec!["g1", "g2"]);
    assert_eq!(report.plan.assignments["t2"], vec!["g4"]);
    assert_eq!(report.plan.table_names["t1"], "family (bride)");
    assert!(!report.plan.table_names.contains_key("t2"));
    assert!(report.unseated.is_empty());

    let written = std::fs::read_to_string(config.output_path.as_deref().unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();

    assert_eq!(value["assignments"]["t1"][0], "g1");
    assert_eq!(value["tableNames"]["t1"], "family (bride)");
    assert_eq!(value["summary"]["seated"], 3);
    assert_eq!(value["summary"]["seatsUsed"], 4);

    let t1 = value["updates"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["id"] == "t1")
        .unwrap();
    assert_eq!(t1["assignedGuests"], serde_json::json!(["g5", "g1", "g2"]));
    assert_eq!(t1["name"], "family (bride)");
}

#[test]
fn test_declined_guests_included_when_not_filtered() {
    let snapshot = SeatingSnapshot::from_json(SNAPSHOT).unwrap();
    let dir = TempDir::new().unwrap();
    let mut config = test_config(&dir);
    config.attending_only = false;

    let report = plan_snapshot(&snapshot, &config);

    assert_eq!(report.summary.candidates, 4);
    assert!(report.plan.table_for("g3").is_some() || report.unseated.contains(&"g3".to_string()));
}

#[test]
fn test_names_left_out_of_updates_when_disabled() {
    let snapshot = SeatingSnapshot::from_json(SNAPSHOT).unwrap();
    let dir = TempDir::new().unwrap();
    let mut config = test_config(&dir);
    config.apply_table_names = false;

    let report = plan_snapshot(&snapshot, &config);

    assert!(report.updates.iter().all(|u| u.name.is_none()));
    // Suggestions are still reported
    assert_eq!(report.plan.table_names["t1"], "family (bride)");
}

#[test]
fn test_run_missing_snapshot() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    let err = run(&config).unwrap_err();

    assert_eq!(err.code, ErrorCode::SnapshotReadFailed);
    assert!(!dir.path().join("plan.json").exists());
}

#[test]
fn test_run_rejects_duplicate_tables() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    std::fs::write(
        &config.snapshot_path,
        r#"{"tables":[{"id":"t1","number":1,"capacity":2},{"id":"t1","number":2,"capacity":2}]}"#,
    )
    .unwrap();

    let err = run(&config).unwrap_err();

    assert_eq!(err.code, ErrorCode::TableDuplicateId);
}
