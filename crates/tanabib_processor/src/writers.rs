/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Field writers.
//!
//! Each writer renders one field of a source node at a nesting level and
//! hands the finished lines to the sink. Scalar writers skip absent or empty
//! values. List writers write their parent line only when at least one child
//! follows.

use tanabib_core::vocab::{Field, RelationTag, SourceStatus};
use tanabib_core::{Contributor, NumOrStr, Record, Tag};
use tracing::trace;

use crate::contributors::{filter_contributors, CreatorGroup};
use crate::error::ExportError;
use crate::markup::{self, Vocabulary};
use crate::schema::Step;
use crate::sink::LineSink;

/// Treats an empty string the same as a missing one.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Writes the fields of one record.
pub struct FieldWriter<'a, S: LineSink + ?Sized> {
    sink: &'a mut S,
    vocab: Vocabulary<'a>,
    /// Identifies the record in errors.
    record: &'a str,
}

impl<'a, S: LineSink + ?Sized> FieldWriter<'a, S> {
    pub fn new(sink: &'a mut S, vocab: Vocabulary<'a>, record: &'a str) -> Self {
        Self {
            sink,
            vocab,
            record,
        }
    }

    fn line(&mut self, level: usize, content: &str) -> Result<(), ExportError> {
        let line = format!("{}{}", markup::indent(level)?, content);
        self.sink.write_line(&line)?;
        Ok(())
    }

    fn scalar(
        &mut self,
        field: Field,
        value: Option<&str>,
        tag: Option<RelationTag>,
        level: usize,
    ) -> Result<(), ExportError> {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return Ok(());
        };
        let tag = tag.map(|t| self.vocab.tag(t)).unwrap_or_default();
        let content = format!("{}{}{}", self.vocab.field(field), value, tag);
        self.line(level, &content)
    }

    fn list(
        &mut self,
        field: Field,
        items: &[String],
        tag: RelationTag,
        level: usize,
    ) -> Result<(), ExportError> {
        if items.is_empty() {
            return Ok(());
        }
        let parent = self.vocab.field(field);
        self.line(level, &parent)?;
        let tag = self.vocab.tag(tag);
        for item in items {
            self.line(level + 1, &format!("{}{}", item, tag))?;
        }
        Ok(())
    }

    fn dated(
        &mut self,
        field: Field,
        name: &'static str,
        date: Option<&str>,
        level: usize,
    ) -> Result<(), ExportError> {
        let Some(date) = date.filter(|d| !d.is_empty()) else {
            return Ok(());
        };
        let parsed = tanabib_date::parse(date).map_err(|source| ExportError::Date {
            field: name,
            record: self.record.to_string(),
            source,
        })?;
        let value = markup::format_date(&parsed);
        self.scalar(field, Some(&value), None, level)
    }

    /// The node line itself, followed by its Title and Source Status.
    ///
    /// `tag` is the rendered supertag, leading space included.
    pub fn write_base(
        &mut self,
        title: Option<&str>,
        tag: &str,
        status: SourceStatus,
    ) -> Result<(), ExportError> {
        let title = title.filter(|t| !t.is_empty()).unwrap_or("Unknown title");
        self.line(0, &format!("{}{}", title, tag))?;
        self.write_title(Some(title), 1)?;
        self.write_source_status(status, 1)
    }

    pub fn write_title(&mut self, title: Option<&str>, level: usize) -> Result<(), ExportError> {
        let title = title.filter(|t| !t.is_empty()).unwrap_or("Unknown title");
        self.scalar(Field::Title, Some(title), None, level)
    }

    pub fn write_source_status(
        &mut self,
        status: SourceStatus,
        level: usize,
    ) -> Result<(), ExportError> {
        let status = self.vocab.status(status);
        self.scalar(Field::SourceStatus, Some(&status), None, level)
    }

    pub fn write_citation_key(&mut self, key: Option<&str>, level: usize) -> Result<(), ExportError> {
        let key = key.filter(|k| !k.is_empty()).map(|k| format!("@{}", k));
        self.scalar(Field::CitationKey, key.as_deref(), None, level)
    }

    /// A `zotero://select` link to the item; the library defaults to 0.
    pub fn write_zotero_link(
        &mut self,
        key: Option<&str>,
        library: Option<&NumOrStr>,
        level: usize,
    ) -> Result<(), ExportError> {
        let Some(key) = key.filter(|k| !k.is_empty()) else {
            return Ok(());
        };
        let library = library.map_or_else(|| "0".to_string(), NumOrStr::to_string);
        let link = format!("zotero://select/items/{}_{}", library, key);
        self.scalar(Field::ZoteroLink, Some(&link), None, level)
    }

    pub fn write_journal_title(
        &mut self,
        journal: Option<&str>,
        level: usize,
    ) -> Result<(), ExportError> {
        self.scalar(
            Field::Journal,
            journal,
            Some(RelationTag::JournalPublication),
            level,
        )
    }

    pub fn write_volume(&mut self, volume: Option<&str>, level: usize) -> Result<(), ExportError> {
        self.scalar(Field::Volume, volume, None, level)
    }

    pub fn write_issue(&mut self, issue: Option<&str>, level: usize) -> Result<(), ExportError> {
        self.scalar(Field::Issue, issue, None, level)
    }

    pub fn write_publication_date(
        &mut self,
        date: Option<&str>,
        level: usize,
    ) -> Result<(), ExportError> {
        self.dated(Field::PublicationDate, "publication date", date, level)
    }

    pub fn write_date(&mut self, date: Option<&str>, level: usize) -> Result<(), ExportError> {
        self.dated(Field::Date, "date", date, level)
    }

    pub fn write_date_decided(
        &mut self,
        date: Option<&str>,
        level: usize,
    ) -> Result<(), ExportError> {
        self.dated(Field::DateDecided, "date decided", date, level)
    }

    /// The contributors admitted by `group`, one child per person.
    pub fn write_creators(
        &mut self,
        group: CreatorGroup,
        creators: &[Contributor],
        level: usize,
    ) -> Result<(), ExportError> {
        let names = filter_contributors(creators, Some(group.roles()));
        trace!(?group, count = names.len(), "writing creators");
        self.list(group.field(), &names, group.tag(), level)
    }

    pub fn write_authors(&mut self, creators: &[Contributor], level: usize) -> Result<(), ExportError> {
        self.write_creators(CreatorGroup::Authors, creators, level)
    }

    pub fn write_hosts(&mut self, creators: &[Contributor], level: usize) -> Result<(), ExportError> {
        self.write_creators(CreatorGroup::Hosts, creators, level)
    }

    pub fn write_interviewees(
        &mut self,
        creators: &[Contributor],
        level: usize,
    ) -> Result<(), ExportError> {
        self.write_creators(CreatorGroup::Interviewees, creators, level)
    }

    pub fn write_directors(
        &mut self,
        creators: &[Contributor],
        level: usize,
    ) -> Result<(), ExportError> {
        self.write_creators(CreatorGroup::Directors, creators, level)
    }

    pub fn write_presenters(
        &mut self,
        creators: &[Contributor],
        level: usize,
    ) -> Result<(), ExportError> {
        self.write_creators(CreatorGroup::Presenters, creators, level)
    }

    pub fn write_artists(&mut self, creators: &[Contributor], level: usize) -> Result<(), ExportError> {
        self.write_creators(CreatorGroup::Artists, creators, level)
    }

    pub fn write_bill_sponsors(
        &mut self,
        creators: &[Contributor],
        level: usize,
    ) -> Result<(), ExportError> {
        self.write_creators(CreatorGroup::BillSponsors, creators, level)
    }

    pub fn write_cartographers(
        &mut self,
        creators: &[Contributor],
        level: usize,
    ) -> Result<(), ExportError> {
        self.write_creators(CreatorGroup::Cartographers, creators, level)
    }

    pub fn write_inventors(
        &mut self,
        creators: &[Contributor],
        level: usize,
    ) -> Result<(), ExportError> {
        self.write_creators(CreatorGroup::Inventors, creators, level)
    }

    pub fn write_url(&mut self, url: Option<&str>, level: usize) -> Result<(), ExportError> {
        self.scalar(Field::Url, url, None, level)
    }

    pub fn write_doi(&mut self, doi: Option<&str>, level: usize) -> Result<(), ExportError> {
        let url = doi.filter(|d| !d.is_empty()).map(markup::doi_url);
        self.scalar(Field::Doi, url.as_deref(), None, level)
    }

    /// Tags as topics, minus the configured ignore list, in title case.
    pub fn write_topics(&mut self, tags: &[Tag], level: usize) -> Result<(), ExportError> {
        let config = self.vocab.config();
        let topics = tags
            .iter()
            .map(Tag::text)
            .filter(|topic| !config.is_ignored_topic(topic))
            .map(markup::title_case)
            .collect::<Result<Vec<_>, _>>()?;
        self.list(Field::Topics, &topics, RelationTag::Topic, level)
    }

    pub fn write_publisher(
        &mut self,
        publisher: Option<&str>,
        level: usize,
    ) -> Result<(), ExportError> {
        self.scalar(
            Field::Publisher,
            publisher,
            Some(RelationTag::Organization),
            level,
        )
    }

    /// A nested node for the book a chapter belongs to, carrying its title,
    /// a To Read status, authors and topics.
    pub fn write_book(
        &mut self,
        title: Option<&str>,
        creators: &[Contributor],
        tags: &[Tag],
        level: usize,
    ) -> Result<(), ExportError> {
        let Some(title) = title.filter(|t| !t.is_empty()) else {
            return Ok(());
        };
        let parent = self.vocab.field(Field::Book);
        self.line(level, &parent)?;
        let tag = self.vocab.tag(RelationTag::Book);
        self.line(level + 1, &format!("{}{}", title, tag))?;
        self.write_title(Some(title), level + 2)?;
        self.write_source_status(SourceStatus::ToRead, level + 2)?;
        self.write_authors(creators, level + 2)?;
        self.write_topics(tags, level + 2)
    }

    pub fn write_publication(
        &mut self,
        publication: Option<&str>,
        level: usize,
    ) -> Result<(), ExportError> {
        self.scalar(
            Field::Publication,
            publication,
            Some(RelationTag::Publication),
            level,
        )
    }

    pub fn write_episode_number(
        &mut self,
        episode: Option<&str>,
        level: usize,
    ) -> Result<(), ExportError> {
        self.scalar(Field::EpisodeNumber, episode, None, level)
    }

    pub fn write_podcast(&mut self, podcast: Option<&str>, level: usize) -> Result<(), ExportError> {
        self.scalar(Field::Podcast, podcast, Some(RelationTag::Podcast), level)
    }

    pub fn write_genre(&mut self, genre: Option<&str>, level: usize) -> Result<(), ExportError> {
        self.scalar(Field::Genre, genre, None, level)
    }

    pub fn write_language(&mut self, language: Option<&str>, level: usize) -> Result<(), ExportError> {
        self.scalar(Field::Language, language, None, level)
    }

    pub fn write_artwork_medium(
        &mut self,
        medium: Option<&str>,
        level: usize,
    ) -> Result<(), ExportError> {
        self.scalar(Field::ArtworkMedium, medium, None, level)
    }

    pub fn write_artwork_size(&mut self, size: Option<&str>, level: usize) -> Result<(), ExportError> {
        self.scalar(Field::ArtworkSize, size, None, level)
    }

    pub fn write_institution(
        &mut self,
        institution: Option<&str>,
        level: usize,
    ) -> Result<(), ExportError> {
        self.scalar(
            Field::Institution,
            institution,
            Some(RelationTag::Organization),
            level,
        )
    }

    pub fn write_bill_number(&mut self, number: Option<&str>, level: usize) -> Result<(), ExportError> {
        self.scalar(Field::BillNumber, number, None, level)
    }

    pub fn write_legislative_body(
        &mut self,
        body: Option<&str>,
        level: usize,
    ) -> Result<(), ExportError> {
        self.scalar(
            Field::LegislativeBody,
            body,
            Some(RelationTag::Organization),
            level,
        )
    }

    pub fn write_legislative_session(
        &mut self,
        session: Option<&str>,
        level: usize,
    ) -> Result<(), ExportError> {
        self.scalar(Field::LegislativeSession, session, None, level)
    }

    pub fn write_court(&mut self, court: Option<&str>, level: usize) -> Result<(), ExportError> {
        self.scalar(Field::Court, court, None, level)
    }

    pub fn write_map_type(&mut self, map_type: Option<&str>, level: usize) -> Result<(), ExportError> {
        self.scalar(Field::MapType, map_type, None, level)
    }

    pub fn write_map_scale(&mut self, scale: Option<&str>, level: usize) -> Result<(), ExportError> {
        self.scalar(Field::MapScale, scale, None, level)
    }

    pub fn write_location(&mut self, place: Option<&str>, level: usize) -> Result<(), ExportError> {
        self.scalar(Field::Location, place, None, level)
    }

    pub fn write_conference(
        &mut self,
        conference: Option<&str>,
        level: usize,
    ) -> Result<(), ExportError> {
        self.scalar(
            Field::Conference,
            conference,
            Some(RelationTag::Conference),
            level,
        )
    }

    pub fn write_program_title(
        &mut self,
        title: Option<&str>,
        level: usize,
    ) -> Result<(), ExportError> {
        self.scalar(Field::ProgramTitle, title, None, level)
    }

    pub fn write_tv_network(&mut self, network: Option<&str>, level: usize) -> Result<(), ExportError> {
        self.scalar(Field::TvNetwork, network, None, level)
    }

    pub fn write_radio_network(
        &mut self,
        network: Option<&str>,
        level: usize,
    ) -> Result<(), ExportError> {
        self.scalar(Field::RadioNetwork, network, None, level)
    }

    pub fn write_medium(&mut self, medium: Option<&str>, level: usize) -> Result<(), ExportError> {
        self.scalar(Field::Medium, medium, None, level)
    }

    pub fn write_encyclopedia_title(
        &mut self,
        title: Option<&str>,
        level: usize,
    ) -> Result<(), ExportError> {
        self.scalar(Field::EncyclopediaTitle, title, None, level)
    }

    pub fn write_country(&mut self, country: Option<&str>, level: usize) -> Result<(), ExportError> {
        self.scalar(Field::Country, country, Some(RelationTag::Country), level)
    }

    pub fn write_patent_number(
        &mut self,
        number: Option<&str>,
        level: usize,
    ) -> Result<(), ExportError> {
        self.scalar(Field::PatentNumber, number, None, level)
    }

    /// Run one schema step against a record.
    pub fn write_step(&mut self, step: Step, record: &Record, level: usize) -> Result<(), ExportError> {
        let r = record;
        match step {
            Step::Creators(group) => self.write_creators(group, &r.creators, level),
            Step::JournalTitle => self.write_journal_title(present(&r.publication_title), level),
            Step::PublicationDate => self.write_publication_date(present(&r.date), level),
            Step::Date => self.write_date(present(&r.date), level),
            Step::DateDecided => self.write_date_decided(present(&r.date_decided), level),
            Step::Volume => self.write_volume(present(&r.volume), level),
            Step::Issue => self.write_issue(present(&r.issue), level),
            Step::Url => self.write_url(present(&r.url), level),
            Step::Doi => self.write_doi(present(&r.doi), level),
            Step::Topics => self.write_topics(&r.tags, level),
            Step::Publisher => self.write_publisher(present(&r.publisher), level),
            Step::Book => self.write_book(present(&r.book_title), &r.creators, &r.tags, level),
            Step::Publication => self.write_publication(present(&r.library_catalog), level),
            Step::EpisodeNumber => self.write_episode_number(present(&r.episode_number), level),
            Step::Podcast => self.write_podcast(present(&r.series_title), level),
            Step::Genre => self.write_genre(present(&r.genre), level),
            Step::Language => self.write_language(present(&r.language), level),
            Step::ArtworkMedium => self.write_artwork_medium(present(&r.artwork_medium), level),
            Step::ArtworkSize => self.write_artwork_size(present(&r.artwork_size), level),
            Step::Institution => self.write_institution(present(&r.institution), level),
            Step::BillNumber => self.write_bill_number(present(&r.bill_number), level),
            Step::LegislativeBody => {
                self.write_legislative_body(present(&r.legislative_body), level)
            }
            Step::LegislativeSession => self.write_legislative_session(present(&r.session), level),
            Step::Court => self.write_court(present(&r.court), level),
            Step::MapType => self.write_map_type(present(&r.map_type), level),
            Step::MapScale => self.write_map_scale(present(&r.scale), level),
            Step::Location => self.write_location(present(&r.place), level),
            Step::Conference => self.write_conference(present(&r.conference_name), level),
            Step::ProgramTitle => self.write_program_title(present(&r.program_title), level),
            Step::TvNetwork => self.write_tv_network(present(&r.network), level),
            Step::RadioNetwork => self.write_radio_network(present(&r.network), level),
            Step::Medium => self.write_medium(present(&r.interview_medium), level),
            Step::EncyclopediaTitle => self.write_encyclopedia_title(
                present(&r.encyclopedia_title).or(present(&r.dictionary_title)),
                level,
            ),
            Step::Country => self.write_country(present(&r.country), level),
            Step::PatentNumber => self.write_patent_number(present(&r.patent_number), level),
        }
    }
}
