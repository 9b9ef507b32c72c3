/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tanabib_core::Record;

use crate::ExportError;

/// The envelope some exports wrap their items in.
#[derive(Debug, Deserialize)]
struct Items {
    items: Vec<Record>,
}

/// Input encodings for record files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// JSON for `.json` files, YAML for anything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Format::Json,
            _ => Format::Yaml,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
        }
    }
}

/// Load records from a file.
/// Accepts a list of items or an object with an `items` list, in JSON or YAML.
pub fn load_records(path: &Path) -> Result<Vec<Record>, ExportError> {
    let content = fs::read_to_string(path)?;
    parse_records(&content, Format::from_path(path))
}

pub fn parse_records(content: &str, format: Format) -> Result<Vec<Record>, ExportError> {
    let parse_error = |e: &dyn std::fmt::Display| {
        ExportError::ParseError(format.name().to_string(), e.to_string())
    };
    match format {
        Format::Json => {
            // Check for syntax errors first
            let value: serde_json::Value =
                serde_json::from_str(content).map_err(|e| parse_error(&e))?;
            if value.is_array() {
                serde_json::from_value::<Vec<Record>>(value).map_err(|e| parse_error(&e))
            } else {
                serde_json::from_value::<Items>(value)
                    .map(|envelope| envelope.items)
                    .map_err(|e| parse_error(&e))
            }
        }
        Format::Yaml => {
            let value: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| parse_error(&e))?;
            if value.is_sequence() {
                serde_yaml::from_value::<Vec<Record>>(value).map_err(|e| parse_error(&e))
            } else {
                serde_yaml::from_value::<Items>(value)
                    .map(|envelope| envelope.items)
                    .map_err(|e| parse_error(&e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tanabib_core::ItemType;

    #[test]
    fn test_json_array() {
        let records = parse_records(
            r#"[{"itemType": "book", "title": "Kindred"}, {"itemType": "film"}]"#,
            Format::Json,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].item_type, ItemType::Book);
        assert_eq!(records[1].item_type, ItemType::Film);
    }

    #[test]
    fn test_json_envelope() {
        let records = parse_records(
            r#"{"items": [{"itemType": "journalArticle", "volume": 5}]}"#,
            Format::Json,
        )
        .unwrap();
        assert_eq!(records[0].volume.as_deref(), Some("5"));
    }

    #[test]
    fn test_yaml_list() {
        let yaml = "- itemType: case\n  caseName: Roe v. Wade\n";
        let records = parse_records(yaml, Format::Yaml).unwrap();
        assert_eq!(records[0].case_name.as_deref(), Some("Roe v. Wade"));
    }

    #[test]
    fn test_syntax_error_names_format() {
        let err = parse_records("[{", Format::Json).unwrap_err();
        assert!(matches!(err, ExportError::ParseError(ref f, _) if f == "JSON"));
    }

    #[test]
    fn test_missing_item_type_is_rejected() {
        assert!(parse_records(r#"[{"title": "x"}]"#, Format::Json).is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("a.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("a.yml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a")), Format::Yaml);
    }
}
