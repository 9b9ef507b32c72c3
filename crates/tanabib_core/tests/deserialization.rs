/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::path::PathBuf;

use tanabib_core::{ExportConfig, ItemType, NumOrStr, Record, SourceStatus};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(name)
}

#[test]
fn test_fixture_records_deserialize() {
    let content = std::fs::read_to_string(fixture("items.json")).unwrap();
    let records: Vec<Record> = serde_json::from_str(&content).unwrap();

    assert_eq!(records.len(), 5);
    assert_eq!(records[0].item_type, ItemType::JournalArticle);
    assert_eq!(records[0].volume.as_deref(), Some("5"));
    assert_eq!(records[0].tags[0].text(), "science");
    assert_eq!(records[1].library_id, Some(NumOrStr::Number(3)));
    assert_eq!(records[3].case_name.as_deref(), Some("Roe v. Wade"));
    assert_eq!(records[4].item_type, ItemType::Unknown("dataset".to_string()));
}

#[test]
fn test_record_keeps_unknown_type_name_on_output() {
    let record: Record = serde_json::from_str(r#"{"itemType": "dataset"}"#).unwrap();
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["itemType"], "dataset");
}

#[test]
fn test_fixture_config_loads() {
    let config = ExportConfig::load(&fixture("config.toml")).unwrap();
    assert_eq!(config.sentinel, "%%tana%%");
    assert!(config.is_ignored_topic("TO-READ"));
    assert_eq!(
        config.node_ids.tags.get("journal article").map(String::as_str),
        Some("p_7iFOOsX3")
    );
    assert_eq!(config.initial_status.video, Some(SourceStatus::Watching));
}

#[test]
fn test_config_rejects_unknown_keys() {
    assert!(ExportConfig::from_toml_str("sentinal = \"x\"").is_err());
    assert!(ExportConfig::from_yaml_str("node-ids:\n  tag: {}\n").is_err());
}
