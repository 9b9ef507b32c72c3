/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Export layouts per item type.
//!
//! A [`Schema`] names the supertag and initial status of a source node and
//! the fields written under it, in order. Schemas are static; [`schema_for`]
//! is total over [`ItemType`], with a generic layout for unknown types.

use tanabib_core::vocab::{Field, Medium, RelationTag};
use tanabib_core::ItemType;

use crate::contributors::CreatorGroup;

/// One field writer invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Creators(CreatorGroup),
    JournalTitle,
    PublicationDate,
    Date,
    DateDecided,
    Volume,
    Issue,
    Url,
    Doi,
    Topics,
    Publisher,
    Book,
    Publication,
    EpisodeNumber,
    Podcast,
    Genre,
    Language,
    ArtworkMedium,
    ArtworkSize,
    Institution,
    BillNumber,
    LegislativeBody,
    LegislativeSession,
    Court,
    MapType,
    MapScale,
    Location,
    Conference,
    ProgramTitle,
    TvNetwork,
    RadioNetwork,
    Medium,
    EncyclopediaTitle,
    Country,
    PatentNumber,
}

impl Step {
    /// The field the step writes.
    pub fn field(self) -> Field {
        match self {
            Step::Creators(group) => group.field(),
            Step::JournalTitle => Field::Journal,
            Step::PublicationDate => Field::PublicationDate,
            Step::Date => Field::Date,
            Step::DateDecided => Field::DateDecided,
            Step::Volume => Field::Volume,
            Step::Issue => Field::Issue,
            Step::Url => Field::Url,
            Step::Doi => Field::Doi,
            Step::Topics => Field::Topics,
            Step::Publisher => Field::Publisher,
            Step::Book => Field::Book,
            Step::Publication => Field::Publication,
            Step::EpisodeNumber => Field::EpisodeNumber,
            Step::Podcast => Field::Podcast,
            Step::Genre => Field::Genre,
            Step::Language => Field::Language,
            Step::ArtworkMedium => Field::ArtworkMedium,
            Step::ArtworkSize => Field::ArtworkSize,
            Step::Institution => Field::Institution,
            Step::BillNumber => Field::BillNumber,
            Step::LegislativeBody => Field::LegislativeBody,
            Step::LegislativeSession => Field::LegislativeSession,
            Step::Court => Field::Court,
            Step::MapType => Field::MapType,
            Step::MapScale => Field::MapScale,
            Step::Location => Field::Location,
            Step::Conference => Field::Conference,
            Step::ProgramTitle => Field::ProgramTitle,
            Step::TvNetwork => Field::TvNetwork,
            Step::RadioNetwork => Field::RadioNetwork,
            Step::Medium => Field::Medium,
            Step::EncyclopediaTitle => Field::EncyclopediaTitle,
            Step::Country => Field::Country,
            Step::PatentNumber => Field::PatentNumber,
        }
    }
}

const AUTHORS: Step = Step::Creators(CreatorGroup::Authors);
const HOSTS: Step = Step::Creators(CreatorGroup::Hosts);
const DIRECTORS: Step = Step::Creators(CreatorGroup::Directors);

/// Where the node's supertag comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSource {
    Fixed(RelationTag),
    /// The item type's own name, for types without a layout.
    ItemTypeName,
}

/// Which attribute titles the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    Title,
    CaseName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub tag: TagSource,
    pub medium: Medium,
    pub title: TitleSource,
    /// Whether Citation Key and Zotero Link follow the base node.
    pub identity: bool,
    pub steps: &'static [Step],
}

impl Schema {
    const fn new(tag: RelationTag, medium: Medium, steps: &'static [Step]) -> Self {
        Self {
            tag: TagSource::Fixed(tag),
            medium,
            title: TitleSource::Title,
            identity: true,
            steps,
        }
    }

    const fn titled_by_case_name(self) -> Self {
        Self {
            title: TitleSource::CaseName,
            ..self
        }
    }

    /// The bare layout for item types without one of their own.
    pub const GENERIC: Schema = Schema {
        tag: TagSource::ItemTypeName,
        medium: Medium::Text,
        title: TitleSource::Title,
        identity: false,
        steps: &[],
    };

    pub fn is_generic(&self) -> bool {
        self.tag == TagSource::ItemTypeName
    }

    /// Field names in the order they are written, after the base node.
    pub fn field_names(&self) -> Vec<&'static str> {
        let identity: &[Field] = if self.identity {
            &[Field::CitationKey, Field::ZoteroLink]
        } else {
            &[]
        };
        identity
            .iter()
            .copied()
            .chain(self.steps.iter().map(|step| step.field()))
            .map(Field::name)
            .collect()
    }
}

const JOURNAL_ARTICLE: Schema = Schema::new(
    RelationTag::JournalArticle,
    Medium::Text,
    &[
        AUTHORS,
        Step::JournalTitle,
        Step::PublicationDate,
        Step::Volume,
        Step::Issue,
        Step::Url,
        Step::Doi,
        Step::Topics,
    ],
);

const BOOK: Schema = Schema::new(
    RelationTag::Book,
    Medium::Text,
    &[AUTHORS, Step::Url, Step::Topics, Step::Publisher],
);

const BOOK_SECTION: Schema = Schema::new(
    RelationTag::Chapter,
    Medium::Text,
    &[Step::Topics, Step::Book],
);

const VIDEO: Schema = Schema::new(
    RelationTag::Video,
    Medium::Video,
    &[HOSTS, Step::Publication, Step::Url, Step::Topics],
);

const PODCAST_EPISODE: Schema = Schema::new(
    RelationTag::PodcastEpisode,
    Medium::Audio,
    &[
        HOSTS,
        Step::EpisodeNumber,
        Step::Podcast,
        Step::Topics,
        Step::Url,
    ],
);

const FILM: Schema = Schema::new(
    RelationTag::Film,
    Medium::Video,
    &[DIRECTORS, Step::Topics, Step::Genre, Step::Language],
);

const PRESENTATION: Schema = Schema::new(
    RelationTag::Presentation,
    Medium::Video,
    &[
        Step::Topics,
        Step::Date,
        Step::Creators(CreatorGroup::Presenters),
    ],
);

const NEWSPAPER_ARTICLE: Schema = Schema::new(
    RelationTag::NewspaperArticle,
    Medium::Text,
    &[Step::Topics, AUTHORS, Step::PublicationDate],
);

const BLOG_POST: Schema = Schema::new(
    RelationTag::BlogPost,
    Medium::Text,
    &[Step::Topics, AUTHORS, Step::PublicationDate, Step::Url],
);

const ARTWORK: Schema = Schema::new(
    RelationTag::Artwork,
    Medium::Text,
    &[
        Step::Topics,
        Step::Creators(CreatorGroup::Artists),
        Step::ArtworkMedium,
        Step::ArtworkSize,
        Step::Date,
    ],
);

const REPORT: Schema = Schema::new(
    RelationTag::Report,
    Medium::Text,
    &[Step::Topics, Step::PublicationDate, Step::Institution],
);

const BILL: Schema = Schema::new(
    RelationTag::Bill,
    Medium::Text,
    &[
        Step::Topics,
        Step::Creators(CreatorGroup::BillSponsors),
        Step::BillNumber,
        Step::LegislativeBody,
        Step::LegislativeSession,
        Step::Date,
    ],
);

const CASE: Schema = Schema::new(
    RelationTag::Case,
    Medium::Text,
    &[Step::Topics, Step::Court, Step::DateDecided, Step::Url],
)
.titled_by_case_name();

const LETTER: Schema = Schema::new(
    RelationTag::Letter,
    Medium::Text,
    &[Step::Topics, AUTHORS, Step::Date],
);

const DOCUMENT: Schema = Schema::new(
    RelationTag::Letter,
    Medium::Text,
    &[Step::Topics, Step::Publisher, Step::Url],
);

const INSTANT_MESSAGE: Schema = Schema::new(
    RelationTag::InstantMessage,
    Medium::Text,
    &[Step::Topics, AUTHORS, Step::Date],
);

const EMAIL: Schema = Schema::new(
    RelationTag::Email,
    Medium::Text,
    &[Step::Topics, AUTHORS, Step::Date],
);

const MAP: Schema = Schema::new(
    RelationTag::Map,
    Medium::Text,
    &[
        Step::Topics,
        Step::Creators(CreatorGroup::Cartographers),
        Step::MapType,
        Step::MapScale,
        Step::Date,
        Step::Location,
    ],
);

const PATENT: Schema = Schema::new(
    RelationTag::Patent,
    Medium::Text,
    &[
        Step::Topics,
        Step::Location,
        Step::Creators(CreatorGroup::Inventors),
        Step::Country,
        Step::PatentNumber,
    ],
);

const INTERVIEW: Schema = Schema::new(
    RelationTag::Interview,
    Medium::Video,
    &[
        Step::Topics,
        Step::Date,
        HOSTS,
        Step::Creators(CreatorGroup::Interviewees),
        Step::Medium,
        Step::Url,
    ],
);

const PREPRINT: Schema = Schema::new(
    RelationTag::Preprint,
    Medium::Text,
    &[Step::Topics, AUTHORS, Step::Url],
);

const ENCYCLOPEDIA_ARTICLE: Schema = Schema::new(
    RelationTag::EncyclopediaArticle,
    Medium::Text,
    &[
        Step::Topics,
        AUTHORS,
        Step::Url,
        Step::EncyclopediaTitle,
        Step::Publisher,
    ],
);

const RADIO_BROADCAST: Schema = Schema::new(
    RelationTag::RadioBroadcast,
    Medium::Audio,
    &[
        Step::Topics,
        DIRECTORS,
        Step::ProgramTitle,
        Step::EpisodeNumber,
        Step::Location,
        Step::RadioNetwork,
    ],
);

const TV_BROADCAST: Schema = Schema::new(
    RelationTag::TvBroadcast,
    Medium::Video,
    &[
        Step::Topics,
        DIRECTORS,
        Step::ProgramTitle,
        Step::EpisodeNumber,
        Step::TvNetwork,
        Step::Location,
        Step::Date,
    ],
);

const STATUTE: Schema = Schema::new(
    RelationTag::Statute,
    Medium::Text,
    &[Step::Topics, AUTHORS],
);

const CONFERENCE_PAPER: Schema = Schema::new(
    RelationTag::ConferencePaper,
    Medium::Text,
    &[Step::Topics, AUTHORS, Step::PublicationDate, Step::Conference],
);

/// The export layout for an item type.
pub fn schema_for(item_type: &ItemType) -> Schema {
    match item_type {
        ItemType::JournalArticle => JOURNAL_ARTICLE,
        ItemType::Book | ItemType::Thesis => BOOK,
        ItemType::BookSection => BOOK_SECTION,
        ItemType::VideoRecording => VIDEO,
        ItemType::Podcast | ItemType::AudioRecording => PODCAST_EPISODE,
        ItemType::Film => FILM,
        ItemType::Presentation => PRESENTATION,
        ItemType::NewspaperArticle | ItemType::MagazineArticle => NEWSPAPER_ARTICLE,
        ItemType::BlogPost | ItemType::Webpage | ItemType::ForumPost => BLOG_POST,
        ItemType::Artwork => ARTWORK,
        ItemType::Report => REPORT,
        ItemType::Bill => BILL,
        ItemType::Case | ItemType::Hearing => CASE,
        ItemType::Letter => LETTER,
        ItemType::Document
        | ItemType::Manuscript
        | ItemType::Attachment
        | ItemType::Annotation
        | ItemType::ComputerProgram => DOCUMENT,
        ItemType::InstantMessage => INSTANT_MESSAGE,
        ItemType::Email => EMAIL,
        ItemType::Map => MAP,
        ItemType::Patent => PATENT,
        ItemType::Interview => INTERVIEW,
        ItemType::Preprint => PREPRINT,
        ItemType::EncyclopediaArticle | ItemType::DictionaryEntry => ENCYCLOPEDIA_ARTICLE,
        ItemType::RadioBroadcast => RADIO_BROADCAST,
        ItemType::TvBroadcast => TV_BROADCAST,
        ItemType::Statute => STATUTE,
        ItemType::ConferencePaper => CONFERENCE_PAPER,
        ItemType::Unknown(_) => Schema::GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_type_has_a_layout() {
        for item_type in ItemType::KNOWN {
            let schema = schema_for(&item_type);
            assert!(!schema.is_generic(), "{item_type} fell back to generic");
            assert!(schema.identity, "{item_type} skips identity fields");
        }
    }

    #[test]
    fn test_unknown_type_is_generic() {
        let schema = schema_for(&ItemType::Unknown("dataset".to_string()));
        assert_eq!(schema, Schema::GENERIC);
        assert!(schema.steps.is_empty());
        assert!(!schema.identity);
    }

    #[test]
    fn test_initial_media() {
        assert_eq!(schema_for(&ItemType::Film).medium, Medium::Video);
        assert_eq!(schema_for(&ItemType::Podcast).medium, Medium::Audio);
        assert_eq!(schema_for(&ItemType::RadioBroadcast).medium, Medium::Audio);
        assert_eq!(schema_for(&ItemType::Interview).medium, Medium::Video);
        assert_eq!(schema_for(&ItemType::Thesis).medium, Medium::Text);
    }

    #[test]
    fn test_legal_types_titled_by_case_name() {
        assert_eq!(schema_for(&ItemType::Case).title, TitleSource::CaseName);
        assert_eq!(schema_for(&ItemType::Hearing).title, TitleSource::CaseName);
        assert_eq!(schema_for(&ItemType::Bill).title, TitleSource::Title);
    }

    #[test]
    fn test_shared_layouts() {
        assert_eq!(schema_for(&ItemType::Thesis), schema_for(&ItemType::Book));
        assert_eq!(
            schema_for(&ItemType::ComputerProgram).tag,
            TagSource::Fixed(RelationTag::Letter)
        );
        assert_eq!(
            schema_for(&ItemType::DictionaryEntry),
            schema_for(&ItemType::EncyclopediaArticle)
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(
            schema_for(&ItemType::Case).field_names(),
            vec!["Citation Key", "Zotero Link", "Topic(s)", "Court", "Date Decided", "URL"]
        );
        assert!(Schema::GENERIC.field_names().is_empty());
    }

    #[test]
    fn test_journal_article_order() {
        assert_eq!(
            schema_for(&ItemType::JournalArticle).steps,
            &[
                AUTHORS,
                Step::JournalTitle,
                Step::PublicationDate,
                Step::Volume,
                Step::Issue,
                Step::Url,
                Step::Doi,
                Step::Topics,
            ]
        );
    }
}
