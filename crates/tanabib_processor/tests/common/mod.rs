/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use std::path::PathBuf;

use tanabib_core::{Contributor, ExportConfig, ItemType, Record, Tag};
use tanabib_processor::Exporter;

// --- Helper Functions for Test Data Construction ---

/// Path to a file under the workspace `tests/fixtures` directory.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(name)
}

/// A record with a title and item key.
pub fn make_record(item_type: ItemType, title: &str, key: &str) -> Record {
    Record {
        title: Some(title.to_string()),
        key: Some(key.to_string()),
        ..Record::new(item_type)
    }
}

pub fn person(role: &str, first: &str, last: &str) -> Contributor {
    Contributor::new(role, Some(first), Some(last))
}

pub fn tags(names: &[&str]) -> Vec<Tag> {
    names.iter().map(|name| Tag::from(*name)).collect()
}

/// Export with the default configuration into a vector of lines.
pub fn export_lines(records: Vec<Record>) -> Vec<String> {
    export_lines_with(ExportConfig::default(), records)
}

pub fn export_lines_with(config: ExportConfig, records: Vec<Record>) -> Vec<String> {
    let mut lines = Vec::new();
    Exporter::new(config)
        .export(records, &mut lines)
        .expect("export failed");
    lines
}
