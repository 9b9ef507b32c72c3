/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Creator role filtering.
//!
//! Each contributor field admits a fixed set of Zotero creator types. A
//! "contributor" counts in almost every field; the rest are specific.

use tanabib_core::vocab::{Field, RelationTag};
use tanabib_core::Contributor;

const AUTHOR_ROLES: &[&str] = &[
    "author",
    "contributor",
    "editor",
    "translator",
    "seriesEditor",
    "bookAuthor",
    "reviewedAuthor",
];
const HOST_ROLES: &[&str] = &[
    "director",
    "contributor",
    "castMember",
    "podcaster",
    "guest",
    "interviewer",
];
const INTERVIEWEE_ROLES: &[&str] = &["interviewee"];
const DIRECTOR_ROLES: &[&str] = &["director"];
const PRESENTER_ROLES: &[&str] = &["presenter", "contributor"];
const ARTIST_ROLES: &[&str] = &["artist", "contributor"];
const SPONSOR_ROLES: &[&str] = &["sponsor", "cosponsor", "contributor"];
const CARTOGRAPHER_ROLES: &[&str] = &["cartographer", "seriesEditor", "contributor"];
const INVENTOR_ROLES: &[&str] = &["inventor", "contributor"];

/// A list-valued field of people, with its role allowlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreatorGroup {
    Authors,
    Hosts,
    Interviewees,
    Directors,
    Presenters,
    Artists,
    BillSponsors,
    Cartographers,
    Inventors,
}

impl CreatorGroup {
    pub fn roles(self) -> &'static [&'static str] {
        match self {
            CreatorGroup::Authors => AUTHOR_ROLES,
            CreatorGroup::Hosts => HOST_ROLES,
            CreatorGroup::Interviewees => INTERVIEWEE_ROLES,
            CreatorGroup::Directors => DIRECTOR_ROLES,
            CreatorGroup::Presenters => PRESENTER_ROLES,
            CreatorGroup::Artists => ARTIST_ROLES,
            CreatorGroup::BillSponsors => SPONSOR_ROLES,
            CreatorGroup::Cartographers => CARTOGRAPHER_ROLES,
            CreatorGroup::Inventors => INVENTOR_ROLES,
        }
    }

    pub fn field(self) -> Field {
        match self {
            CreatorGroup::Authors => Field::Authors,
            CreatorGroup::Hosts => Field::Hosts,
            CreatorGroup::Interviewees => Field::Interviewees,
            CreatorGroup::Directors => Field::Director,
            CreatorGroup::Presenters => Field::Presenter,
            CreatorGroup::Artists => Field::Artist,
            CreatorGroup::BillSponsors => Field::BillSponsor,
            CreatorGroup::Cartographers => Field::Cartographer,
            CreatorGroup::Inventors => Field::Inventor,
        }
    }

    /// The tag each listed person receives.
    pub fn tag(self) -> RelationTag {
        match self {
            CreatorGroup::Authors => RelationTag::Author,
            CreatorGroup::Hosts => RelationTag::Host,
            CreatorGroup::Directors => RelationTag::Director,
            CreatorGroup::Artists => RelationTag::Artist,
            CreatorGroup::Interviewees
            | CreatorGroup::Presenters
            | CreatorGroup::BillSponsors
            | CreatorGroup::Cartographers
            | CreatorGroup::Inventors => RelationTag::Person,
        }
    }
}

/// Display names of the renderable contributors, in input order.
///
/// With `roles`, only contributors whose creator type is in the list
/// (ignoring case) are kept.
pub fn filter_contributors(contributors: &[Contributor], roles: Option<&[&str]>) -> Vec<String> {
    contributors
        .iter()
        .filter(|c| roles.is_none_or(|roles| roles.iter().any(|role| c.has_role(role))))
        .filter_map(Contributor::display_name)
        .collect()
}
