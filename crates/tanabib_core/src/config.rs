/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Export configuration.
//!
//! A Tana graph references an existing node by appending `^` and the node id
//! to its name (`source^p_7iFOOsX3`). Pinning tags, fields and statuses this
//! way keeps a paste from creating duplicate nodes, which matters most when
//! working across several graphs.
//!
//! ```toml
//! ignored-topics = ["_tablet", "_tablet_modified", "to-process"]
//!
//! [node-ids.tags]
//! "journal article" = "p_7iFOOsX3"
//!
//! [node-ids.statuses]
//! "To Read" = "Xy12ab"
//!
//! [initial-status]
//! video = "to-read"
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::vocab::{Medium, SourceStatus};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ExportConfig {
    /// First line of the document, marking it as a Tana paste.
    #[serde(default = "default_sentinel")]
    pub sentinel: String,

    /// Tags dropped from the Topic(s) field, compared case-insensitively.
    #[serde(default = "default_ignored_topics")]
    pub ignored_topics: Vec<String>,

    #[serde(default)]
    pub node_ids: NodeIds,

    #[serde(default)]
    pub initial_status: InitialStatus,
}

/// Node ids keyed by vocabulary name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeIds {
    /// Keyed by tag name, e.g. `"journal article"`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub tags: IndexMap<String, String>,

    /// Keyed by field name, e.g. `"Author(s)"`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub fields: IndexMap<String, String>,

    /// Keyed by status label, e.g. `"To Read"`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub statuses: IndexMap<String, String>,
}

/// Overrides of the status a new source starts with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InitialStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<SourceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<SourceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<SourceStatus>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sentinel: default_sentinel(),
            ignored_topics: default_ignored_topics(),
            node_ids: NodeIds::default(),
            initial_status: InitialStatus::default(),
        }
    }
}

fn default_sentinel() -> String {
    "%%tana%%".to_string()
}

fn default_ignored_topics() -> Vec<String> {
    vec!["_tablet".to_string(), "_tablet_modified".to_string()]
}

impl ExportConfig {
    /// Load a configuration file, as YAML when the extension says so and TOML otherwise.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// The status a new source of the given medium starts with.
    pub fn status_for(&self, medium: Medium) -> SourceStatus {
        let overridden = match medium {
            Medium::Text => self.initial_status.text,
            Medium::Video => self.initial_status.video,
            Medium::Audio => self.initial_status.audio,
        };
        overridden.unwrap_or_else(|| medium.default_status())
    }

    /// Whether a tag belongs to the ignore list.
    pub fn is_ignored_topic(&self, topic: &str) -> bool {
        let topic = topic.to_lowercase();
        self.ignored_topics
            .iter()
            .any(|ignored| ignored.to_lowercase() == topic)
    }
}
