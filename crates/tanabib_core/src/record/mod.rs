/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! A record is one bibliographic item, such as a journal article, a film or
//! a court case, in the shape Zotero exports it.
//!
//! Every attribute besides the item type is optional. Keys the exporter has
//! no use for are ignored on input.

pub mod contributor;
pub mod item_type;

#[cfg(test)]
mod tests;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{self, Display, Formatter};

pub use self::contributor::Contributor;
pub use self::item_type::ItemType;

/// A value that could be either a number or a string.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(untagged)]
pub enum NumOrStr {
    Number(i64),
    Str(String),
}

impl Display for NumOrStr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(i) => write!(f, "{}", i),
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Read a scalar that Zotero may serialize as a number, keeping its text.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumOrStr>::deserialize(deserializer)?.map(|v| v.to_string()))
}

/// A Zotero tag: either the `{ "tag": ..., "type": ... }` object or a bare string.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(untagged)]
pub enum Tag {
    Plain(String),
    Structured {
        tag: String,
        /// 0 for manual tags, 1 for automatic ones.
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<u8>,
    },
}

impl Tag {
    pub fn text(&self) -> &str {
        match self {
            Tag::Plain(text) => text,
            Tag::Structured { tag, .. } => tag,
        }
    }
}

impl From<&str> for Tag {
    fn from(text: &str) -> Self {
        Tag::Plain(text.to_string())
    }
}

/// The record model.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub item_type: ItemType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The title of a legal case or hearing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_key: Option<String>,
    /// The item key, unique within its library.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "libraryID", default, skip_serializing_if = "Option::is_none")]
    pub library_id: Option<NumOrStr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub creators: Vec<Contributor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_decided: Option<String>,
    /// Journal, magazine or newspaper title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_title: Option<String>,
    #[serde(default, deserialize_with = "text_or_number", skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, deserialize_with = "text_or_number", skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(default, alias = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "DOI", alias = "doi", default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// The containing book of a book section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_catalog: Option<String>,
    #[serde(default, deserialize_with = "text_or_number", skip_serializing_if = "Option::is_none")]
    pub episode_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork_medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, deserialize_with = "text_or_number", skip_serializing_if = "Option::is_none")]
    pub bill_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legislative_body: Option<String>,
    #[serde(default, deserialize_with = "text_or_number", skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_type: Option<String>,
    #[serde(default, deserialize_with = "text_or_number", skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conference_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encyclopedia_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "text_or_number", skip_serializing_if = "Option::is_none")]
    pub patent_number: Option<String>,
}

impl Record {
    pub fn new(item_type: ItemType) -> Self {
        Self {
            item_type,
            ..Default::default()
        }
    }

    /// The record's identity for log messages: citation key, then item key.
    pub fn label(&self) -> &str {
        self.citation_key
            .as_deref()
            .or(self.key.as_deref())
            .unwrap_or("<unkeyed>")
    }
}
