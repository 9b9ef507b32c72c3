/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Primitive Tana markup.
//!
//! The free functions build the fragments every writer assembles lines from.
//! [`Vocabulary`] applies the export configuration to the fixed names in
//! [`tanabib_core::vocab`], so a tag, field or status renders with its pinned
//! node id when one is configured.

use tanabib_core::vocab::{Field, RelationTag, SourceStatus};
use tanabib_core::ExportConfig;
use tanabib_date::PartialDate;
use thiserror::Error;

/// Bullet prefixes by nesting level.
const INDENTS: [&str; 10] = [
    "- ",
    "  - ",
    "    - ",
    "      - ",
    "        - ",
    "          - ",
    "            - ",
    "              - ",
    "                - ",
    "                  - ",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("cannot title-case {0:?}: it contains an empty word")]
    EmptyTitleToken(String),

    #[error("indent level {0} is deeper than the outline supports")]
    IndentTooDeep(usize),
}

/// A reference to a node by name: `[[name]]`.
pub fn link(name: &str) -> String {
    format!("[[{}]]", name)
}

/// A supertag, with the leading space that lets it follow a value directly.
pub fn relation_tag(name: &str) -> String {
    format!(" #[[{}]]", name)
}

/// The `name:: ` prefix of a field line.
pub fn field_label(name: &str) -> String {
    format!("{}:: ", name)
}

pub fn external_link(label: &str, url: &str) -> String {
    format!("[{}]({})", label, url)
}

pub fn doi_url(doi: &str) -> String {
    format!("https://doi.org/{}", doi)
}

/// The bullet prefix for a nesting level.
pub fn indent(level: usize) -> Result<&'static str, MarkupError> {
    INDENTS
        .get(level)
        .copied()
        .ok_or(MarkupError::IndentTooDeep(level))
}

/// Lowercase the text, then capitalize each space-separated word.
///
/// Words are split on single spaces, so a doubled, leading or trailing space
/// yields an empty word, which is rejected.
pub fn title_case(text: &str) -> Result<String, MarkupError> {
    let lower = text.to_lowercase();
    let mut words = Vec::new();
    for word in lower.split(' ') {
        let mut chars = word.chars();
        let first = chars
            .next()
            .ok_or_else(|| MarkupError::EmptyTitleToken(text.to_string()))?;
        words.push(first.to_uppercase().chain(chars).collect::<String>());
    }
    Ok(words.join(" "))
}

/// A date as a link to its Tana day node.
pub fn format_date(date: &PartialDate) -> String {
    link(&date.to_string())
}

/// Vocabulary names as they appear in the output under a given configuration.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary<'a> {
    config: &'a ExportConfig,
}

impl<'a> Vocabulary<'a> {
    pub fn new(config: &'a ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a ExportConfig {
        self.config
    }

    pub fn tag(&self, tag: RelationTag) -> String {
        self.literal_tag(tag.name())
    }

    /// A supertag by free-form name, such as an unrecognized item type.
    pub fn literal_tag(&self, name: &str) -> String {
        relation_tag(&pinned(name, self.config.node_ids.tags.get(name)))
    }

    pub fn field(&self, field: Field) -> String {
        let name = field.name();
        field_label(&pinned(name, self.config.node_ids.fields.get(name)))
    }

    pub fn status(&self, status: SourceStatus) -> String {
        let label = status.label();
        let name = format!("{} {}", status.emoji(), label);
        link(&pinned(&name, self.config.node_ids.statuses.get(label)))
    }
}

fn pinned(name: &str, node_id: Option<&String>) -> String {
    match node_id {
        Some(id) => format!("{}^{}", name, id),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives() {
        assert_eq!(link("Jane Doe"), "[[Jane Doe]]");
        assert_eq!(relation_tag("author"), " #[[author]]");
        assert_eq!(field_label("Volume"), "Volume:: ");
        assert_eq!(
            external_link("Zotero", "zotero://select/items/0_ABC"),
            "[Zotero](zotero://select/items/0_ABC)"
        );
        assert_eq!(doi_url("10.1000/xyz"), "https://doi.org/10.1000/xyz");
    }

    #[test]
    fn test_link_passes_text_through() {
        assert_eq!(link("[[odd]] name"), "[[[[odd]] name]]");
        assert_eq!(doi_url("not a doi"), "https://doi.org/not a doi");
    }

    #[test]
    fn test_indent_levels() {
        assert_eq!(indent(0).unwrap(), "- ");
        assert_eq!(indent(2).unwrap(), "    - ");
        assert_eq!(indent(9).unwrap(), "                  - ");
        assert_eq!(indent(10), Err(MarkupError::IndentTooDeep(10)));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("machine learning").unwrap(), "Machine Learning");
        assert_eq!(title_case("HISTORY of SCIENCE").unwrap(), "History Of Science");
        assert_eq!(title_case("über-tag").unwrap(), "Über-tag");
    }

    #[test]
    fn test_title_case_rejects_empty_words() {
        assert_eq!(
            title_case("machine  learning"),
            Err(MarkupError::EmptyTitleToken("machine  learning".to_string()))
        );
        assert!(title_case("").is_err());
        assert!(title_case("trailing ").is_err());
    }

    #[test]
    fn test_format_date() {
        let date = PartialDate::new(Some(2020), Some(2), Some(15));
        assert_eq!(format_date(&date), "[[March 15th, 2020]]");
        assert_eq!(format_date(&PartialDate::default()), "[[January 1st, 2100]]");
    }

    #[test]
    fn test_vocabulary_defaults() {
        let config = ExportConfig::default();
        let vocab = Vocabulary::new(&config);
        assert_eq!(vocab.tag(RelationTag::JournalArticle), " #[[journal article]]");
        assert_eq!(vocab.field(Field::Authors), "Author(s):: ");
        assert_eq!(vocab.status(SourceStatus::ToRead), "[[📚 To Read]]");
    }

    #[test]
    fn test_vocabulary_pins_node_ids() {
        let mut config = ExportConfig::default();
        config
            .node_ids
            .tags
            .insert("journal article".to_string(), "p_7iFOOsX3".to_string());
        config
            .node_ids
            .fields
            .insert("Title".to_string(), "f_1".to_string());
        config
            .node_ids
            .statuses
            .insert("To Read".to_string(), "s_1".to_string());
        let vocab = Vocabulary::new(&config);
        assert_eq!(
            vocab.tag(RelationTag::JournalArticle),
            " #[[journal article^p_7iFOOsX3]]"
        );
        assert_eq!(vocab.field(Field::Title), "Title^f_1:: ");
        assert_eq!(vocab.status(SourceStatus::ToRead), "[[📚 To Read^s_1]]");
        assert_eq!(vocab.literal_tag("dataset"), " #[[dataset]]");
    }
}
