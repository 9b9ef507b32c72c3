/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The exporter: sentinel line, then one source node per record.

use std::path::Path;

use tanabib_core::{ExportConfig, Record};
use tracing::{debug, warn};

use crate::error::ExportError;
use crate::markup::Vocabulary;
use crate::schema::{schema_for, Schema, TagSource, TitleSource};
use crate::sink::LineSink;
use crate::writers::FieldWriter;

/// Counts from a finished export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub records: usize,
    /// Records of an unknown type, written with the bare layout.
    pub generic: usize,
}

/// Exports records as a Tana paste outline.
///
/// The exporter holds no state between records, so exporting the same
/// records twice produces the same lines.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// An exporter configured from a TOML or YAML file.
    pub fn from_config_file(path: &Path) -> Result<Self, ExportError> {
        Ok(Self::new(ExportConfig::load(path)?))
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Write the sentinel and every record, in input order.
    ///
    /// The first failure stops the export; lines already written stay in the
    /// sink.
    pub fn export<I, S>(&self, records: I, sink: &mut S) -> Result<ExportSummary, ExportError>
    where
        I: IntoIterator<Item = Record>,
        S: LineSink + ?Sized,
    {
        sink.write_line(&self.config.sentinel)?;
        let mut summary = ExportSummary::default();
        for record in records {
            let schema = self.export_record(&record, sink)?;
            summary.records += 1;
            if schema.is_generic() {
                summary.generic += 1;
            }
        }
        Ok(summary)
    }

    /// Write one record's node and fields, returning the layout used.
    pub fn export_record<S>(&self, record: &Record, sink: &mut S) -> Result<Schema, ExportError>
    where
        S: LineSink + ?Sized,
    {
        let schema = schema_for(&record.item_type);
        let vocab = Vocabulary::new(&self.config);
        let label = record.label();

        let tag = match schema.tag {
            TagSource::Fixed(tag) => vocab.tag(tag),
            TagSource::ItemTypeName => {
                warn!(
                    item_type = %record.item_type,
                    record = label,
                    "unknown item type, writing base node only"
                );
                vocab.literal_tag(record.item_type.as_str())
            }
        };
        debug!(item_type = %record.item_type, record = label, "exporting");

        let title = match schema.title {
            TitleSource::Title => record.title.as_deref(),
            TitleSource::CaseName => record.case_name.as_deref(),
        };

        let mut writer = FieldWriter::new(sink, vocab, label);
        writer.write_base(title, &tag, self.config.status_for(schema.medium))?;
        if schema.identity {
            writer.write_citation_key(record.citation_key.as_deref(), 1)?;
            writer.write_zotero_link(record.key.as_deref(), record.library_id.as_ref(), 1)?;
        }
        for step in schema.steps {
            writer.write_step(*step, record, 1)?;
        }
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tanabib_core::{ItemType, SourceStatus};

    #[test]
    fn test_sentinel_first_even_without_records() {
        let mut lines = Vec::new();
        let summary = Exporter::default()
            .export(Vec::<Record>::new(), &mut lines)
            .unwrap();
        assert_eq!(lines, vec!["%%tana%%"]);
        assert_eq!(summary, ExportSummary::default());
    }

    #[test]
    fn test_custom_sentinel_and_initial_status() {
        let mut config = ExportConfig::default();
        config.sentinel = "%%paste%%".to_string();
        config.initial_status.video = Some(SourceStatus::Watched);
        let mut record = Record::new(ItemType::Film);
        record.title = Some("Selma".to_string());

        let mut lines = Vec::new();
        Exporter::new(config).export([record], &mut lines).unwrap();
        assert_eq!(
            lines,
            vec![
                "%%paste%%",
                "- Selma #[[film]]",
                "  - Title:: Selma",
                "  - Source Status:: [[📼 Watched]]",
            ]
        );
    }

    #[test]
    fn test_case_titled_by_case_name() {
        let mut record = Record::new(ItemType::Case);
        record.title = Some("ignored".to_string());
        record.case_name = Some("Roe v. Wade".to_string());
        let mut lines = Vec::new();
        Exporter::default().export_record(&record, &mut lines).unwrap();
        assert_eq!(lines[0], "- Roe v. Wade #[[case]]");
    }

    #[test]
    fn test_summary_counts_generic() {
        let records = vec![
            Record::new(ItemType::Book),
            Record::new(ItemType::Unknown("dataset".to_string())),
        ];
        let mut lines = Vec::new();
        let summary = Exporter::default().export(records, &mut lines).unwrap();
        assert_eq!(summary, ExportSummary { records: 2, generic: 1 });
    }
}
