/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tanabib_core::{ExportConfig, ItemType};
use tanabib_processor::io::load_records;
use tanabib_processor::schema::{schema_for, TagSource};
use tanabib_processor::{ExportSummary, Exporter, WriteSink};
use tracing::info;

/// The configuration at `path`, or the defaults.
pub fn load_config(path: Option<&Path>) -> Result<ExportConfig> {
    match path {
        Some(path) => ExportConfig::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display())),
        None => Ok(ExportConfig::default()),
    }
}

pub fn export(input: &Path, output: Option<&Path>, config: Option<&Path>) -> Result<ExportSummary> {
    let exporter = match config {
        Some(path) => Exporter::from_config_file(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => Exporter::default(),
    };
    let records = load_records(input)
        .with_context(|| format!("failed to read records from {}", input.display()))?;
    info!(count = records.len(), input = %input.display(), "loaded records");

    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut sink = WriteSink::new(BufWriter::new(writer));
    let summary = exporter
        .export(records, &mut sink)
        .context("export failed")?;
    sink.into_inner().flush()?;

    info!(
        records = summary.records,
        generic = summary.generic,
        "export finished"
    );
    Ok(summary)
}

#[derive(Debug, Serialize)]
struct TypeInfo {
    item_type: String,
    tag: String,
    status: &'static str,
    fields: Vec<&'static str>,
}

fn type_infos(config: &ExportConfig) -> Vec<TypeInfo> {
    ItemType::KNOWN
        .iter()
        .map(|item_type| {
            let schema = schema_for(item_type);
            let tag = match schema.tag {
                TagSource::Fixed(tag) => tag.name().to_string(),
                TagSource::ItemTypeName => item_type.to_string(),
            };
            TypeInfo {
                item_type: item_type.to_string(),
                tag,
                status: config.status_for(schema.medium).label(),
                fields: schema.field_names(),
            }
        })
        .collect()
}

/// Every known item type with its tag, initial status and fields.
pub fn types(config: &ExportConfig, json: bool) -> Result<String> {
    let infos = type_infos(config);
    if json {
        return Ok(serde_json::to_string_pretty(&infos)?);
    }

    use tabled::{settings::Style, Table, Tabled};

    #[derive(Tabled)]
    struct TypeRow {
        #[tabled(rename = "Item type")]
        item_type: String,
        #[tabled(rename = "Tag")]
        tag: String,
        #[tabled(rename = "Status")]
        status: &'static str,
        #[tabled(rename = "Fields")]
        fields: String,
    }

    let rows = infos.into_iter().map(|info| TypeRow {
        item_type: info.item_type,
        tag: info.tag,
        status: info.status,
        fields: info.fields.join(", "),
    });
    let mut table = Table::new(rows);
    table.with(Style::modern());
    Ok(table.to_string())
}

/// Load a configuration file and describe what it sets.
pub fn check_config(path: &Path) -> Result<String> {
    use colored::Colorize;

    let config = ExportConfig::load(path)
        .with_context(|| format!("invalid configuration {}", path.display()))?;
    let pinned = config.node_ids.tags.len()
        + config.node_ids.fields.len()
        + config.node_ids.statuses.len();
    Ok(format!(
        "{} {}\n  sentinel: {}\n  ignored topics: {}\n  pinned node ids: {}",
        "✓".green(),
        path.display(),
        config.sentinel,
        config.ignored_topics.join(", "),
        pinned
    ))
}

#[cfg(feature = "schema")]
pub fn schema() -> Result<String> {
    let schema = schemars::schema_for!(Vec<tanabib_core::Record>);
    Ok(serde_json::to_string_pretty(&schema)?)
}
