/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The fixed vocabulary of the Tana export: supertags, field names and
//! source statuses.
//!
//! Names here are the node names a Tana graph is expected to contain. They
//! can be pinned to specific node ids through
//! [`NodeIds`](crate::config::NodeIds).

use serde::{Deserialize, Serialize};

/// A supertag applied to a node with `#[[name]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationTag {
    Artist,
    Artwork,
    Author,
    BlogPost,
    Bill,
    Book,
    Case,
    Chapter,
    Conference,
    ConferencePaper,
    Country,
    Director,
    Email,
    EncyclopediaArticle,
    Film,
    Host,
    InstantMessage,
    Interview,
    JournalArticle,
    JournalPublication,
    Letter,
    Map,
    NewspaperArticle,
    Organization,
    Patent,
    Person,
    Podcast,
    PodcastEpisode,
    Preprint,
    Presentation,
    Publication,
    RadioBroadcast,
    Report,
    Statute,
    Topic,
    TvBroadcast,
    Video,
}

impl RelationTag {
    pub fn name(self) -> &'static str {
        match self {
            RelationTag::Artist => "artist",
            RelationTag::Artwork => "artwork",
            RelationTag::Author => "author",
            RelationTag::BlogPost => "blog post",
            RelationTag::Bill => "bill",
            RelationTag::Book => "book",
            RelationTag::Case => "case",
            RelationTag::Chapter => "chapter",
            RelationTag::Conference => "conference",
            RelationTag::ConferencePaper => "conference paper",
            RelationTag::Country => "country",
            RelationTag::Director => "director",
            RelationTag::Email => "email",
            RelationTag::EncyclopediaArticle => "encyclopedia article",
            RelationTag::Film => "film",
            RelationTag::Host => "host",
            RelationTag::InstantMessage => "instant message",
            RelationTag::Interview => "interview",
            RelationTag::JournalArticle => "journal article",
            RelationTag::JournalPublication => "journal (publication)",
            RelationTag::Letter => "letter",
            RelationTag::Map => "map",
            RelationTag::NewspaperArticle => "newspaper article",
            RelationTag::Organization => "organization",
            RelationTag::Patent => "patent",
            RelationTag::Person => "person",
            RelationTag::Podcast => "podcast",
            RelationTag::PodcastEpisode => "podcast episode",
            RelationTag::Preprint => "preprint",
            RelationTag::Presentation => "presentation",
            RelationTag::Publication => "publication",
            RelationTag::RadioBroadcast => "radio broadcast",
            RelationTag::Report => "report",
            RelationTag::Statute => "statute",
            RelationTag::Topic => "topic",
            RelationTag::TvBroadcast => "tv broadcast",
            RelationTag::Video => "video",
        }
    }
}

/// A field of a source node, written as `Name:: value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    SourceStatus,
    CitationKey,
    ZoteroLink,
    Authors,
    PublicationDate,
    Journal,
    Volume,
    Issue,
    Url,
    Doi,
    Topics,
    Publisher,
    Book,
    Hosts,
    Publication,
    EpisodeNumber,
    Podcast,
    Director,
    Genre,
    Language,
    Date,
    Presenter,
    Artist,
    ArtworkMedium,
    ArtworkSize,
    Institution,
    BillSponsor,
    BillNumber,
    LegislativeBody,
    LegislativeSession,
    Court,
    DateDecided,
    Cartographer,
    MapType,
    MapScale,
    Location,
    Conference,
    ProgramTitle,
    TvNetwork,
    RadioNetwork,
    Interviewees,
    Medium,
    EncyclopediaTitle,
    Country,
    PatentNumber,
    Inventor,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::SourceStatus => "Source Status",
            Field::CitationKey => "Citation Key",
            Field::ZoteroLink => "Zotero Link",
            Field::Authors => "Author(s)",
            Field::PublicationDate => "Publication Date",
            Field::Journal => "Journal",
            Field::Volume => "Volume",
            Field::Issue => "Issue",
            Field::Url => "URL",
            Field::Doi => "DOI",
            Field::Topics => "Topic(s)",
            Field::Publisher => "Publisher",
            Field::Book => "Book",
            Field::Hosts => "Host(s)",
            Field::Publication => "Publication",
            Field::EpisodeNumber => "Episode Number",
            Field::Podcast => "Podcast",
            Field::Director => "Director",
            Field::Genre => "Genre",
            Field::Language => "Language",
            Field::Date => "Date",
            Field::Presenter => "Presenter",
            Field::Artist => "Artist",
            Field::ArtworkMedium => "Artwork Medium",
            Field::ArtworkSize => "Artwork Size",
            Field::Institution => "Institution",
            Field::BillSponsor => "Bill Sponsor",
            Field::BillNumber => "Bill Number",
            Field::LegislativeBody => "Legislative Body",
            Field::LegislativeSession => "Legislative Session",
            Field::Court => "Court",
            Field::DateDecided => "Date Decided",
            Field::Cartographer => "Cartographer",
            Field::MapType => "Map Type",
            Field::MapScale => "Map Scale",
            Field::Location => "Location",
            Field::Conference => "Conference",
            Field::ProgramTitle => "Program Title",
            Field::TvNetwork => "TV Network",
            Field::RadioNetwork => "Radio Network",
            Field::Interviewees => "Interview with",
            Field::Medium => "Medium",
            Field::EncyclopediaTitle => "Encyclopedia Title",
            Field::Country => "Country",
            Field::PatentNumber => "Patent Number",
            Field::Inventor => "Inventor",
        }
    }
}

/// How a source is consumed, which decides its initial status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Medium {
    Text,
    Video,
    Audio,
}

impl Medium {
    pub fn default_status(self) -> SourceStatus {
        match self {
            Medium::Text => SourceStatus::ToRead,
            Medium::Video => SourceStatus::ToWatch,
            Medium::Audio => SourceStatus::ToListen,
        }
    }
}

/// The reading/watching/listening state of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceStatus {
    ToRead,
    Reading,
    Read,
    ToWatch,
    Watching,
    Watched,
    ToListen,
    Listening,
    Listened,
}

impl SourceStatus {
    pub fn emoji(self) -> &'static str {
        match self {
            SourceStatus::ToRead => "📚",
            SourceStatus::Reading => "📖",
            SourceStatus::Read => "📗",
            SourceStatus::ToWatch => "🎞️",
            SourceStatus::Watching => "📽️",
            SourceStatus::Watched => "📼",
            SourceStatus::ToListen => "💿",
            SourceStatus::Listening => "🎧",
            SourceStatus::Listened => "🔇",
        }
    }

    /// The status name without its emoji, e.g. "To Read".
    pub fn label(self) -> &'static str {
        match self {
            SourceStatus::ToRead => "To Read",
            SourceStatus::Reading => "Reading",
            SourceStatus::Read => "Read",
            SourceStatus::ToWatch => "To Watch",
            SourceStatus::Watching => "Watching",
            SourceStatus::Watched => "Watched",
            SourceStatus::ToListen => "To Listen",
            SourceStatus::Listening => "Listening",
            SourceStatus::Listened => "Listened",
        }
    }
}
