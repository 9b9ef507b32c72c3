use serde::{Deserialize, Serialize};
use std::fmt;

/// The Zotero item type of a record.
///
/// Types without a dedicated export layout are kept verbatim in
/// [`ItemType::Unknown`], so the literal name can still be used as a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    Annotation,
    Artwork,
    Attachment,
    AudioRecording,
    Bill,
    BlogPost,
    Book,
    BookSection,
    Case,
    ComputerProgram,
    ConferencePaper,
    DictionaryEntry,
    /// Zotero's catch-all type.
    #[default]
    Document,
    Email,
    EncyclopediaArticle,
    Film,
    ForumPost,
    Hearing,
    InstantMessage,
    Interview,
    JournalArticle,
    Letter,
    MagazineArticle,
    Manuscript,
    Map,
    NewspaperArticle,
    Patent,
    Podcast,
    Preprint,
    Presentation,
    RadioBroadcast,
    Report,
    Statute,
    Thesis,
    TvBroadcast,
    VideoRecording,
    Webpage,
    Unknown(String),
}

impl ItemType {
    /// Every known item type, in alphabetical order of its Zotero name.
    pub const KNOWN: [ItemType; 37] = [
        ItemType::Annotation,
        ItemType::Artwork,
        ItemType::Attachment,
        ItemType::AudioRecording,
        ItemType::Bill,
        ItemType::BlogPost,
        ItemType::Book,
        ItemType::BookSection,
        ItemType::Case,
        ItemType::ComputerProgram,
        ItemType::ConferencePaper,
        ItemType::DictionaryEntry,
        ItemType::Document,
        ItemType::Email,
        ItemType::EncyclopediaArticle,
        ItemType::Film,
        ItemType::ForumPost,
        ItemType::Hearing,
        ItemType::InstantMessage,
        ItemType::Interview,
        ItemType::JournalArticle,
        ItemType::Letter,
        ItemType::MagazineArticle,
        ItemType::Manuscript,
        ItemType::Map,
        ItemType::NewspaperArticle,
        ItemType::Patent,
        ItemType::Podcast,
        ItemType::Preprint,
        ItemType::Presentation,
        ItemType::RadioBroadcast,
        ItemType::Report,
        ItemType::Statute,
        ItemType::Thesis,
        ItemType::TvBroadcast,
        ItemType::VideoRecording,
        ItemType::Webpage,
    ];

    /// The Zotero name of the type, e.g. `journalArticle`.
    pub fn as_str(&self) -> &str {
        match self {
            ItemType::Annotation => "annotation",
            ItemType::Artwork => "artwork",
            ItemType::Attachment => "attachment",
            ItemType::AudioRecording => "audioRecording",
            ItemType::Bill => "bill",
            ItemType::BlogPost => "blogPost",
            ItemType::Book => "book",
            ItemType::BookSection => "bookSection",
            ItemType::Case => "case",
            ItemType::ComputerProgram => "computerProgram",
            ItemType::ConferencePaper => "conferencePaper",
            ItemType::DictionaryEntry => "dictionaryEntry",
            ItemType::Document => "document",
            ItemType::Email => "email",
            ItemType::EncyclopediaArticle => "encyclopediaArticle",
            ItemType::Film => "film",
            ItemType::ForumPost => "forumPost",
            ItemType::Hearing => "hearing",
            ItemType::InstantMessage => "instantMessage",
            ItemType::Interview => "interview",
            ItemType::JournalArticle => "journalArticle",
            ItemType::Letter => "letter",
            ItemType::MagazineArticle => "magazineArticle",
            ItemType::Manuscript => "manuscript",
            ItemType::Map => "map",
            ItemType::NewspaperArticle => "newspaperArticle",
            ItemType::Patent => "patent",
            ItemType::Podcast => "podcast",
            ItemType::Preprint => "preprint",
            ItemType::Presentation => "presentation",
            ItemType::RadioBroadcast => "radioBroadcast",
            ItemType::Report => "report",
            ItemType::Statute => "statute",
            ItemType::Thesis => "thesis",
            ItemType::TvBroadcast => "tvBroadcast",
            ItemType::VideoRecording => "videoRecording",
            ItemType::Webpage => "webpage",
            ItemType::Unknown(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ItemType::Unknown(_))
    }
}

impl From<&str> for ItemType {
    fn from(name: &str) -> Self {
        ItemType::KNOWN
            .iter()
            .find(|t| t.as_str() == name)
            .cloned()
            .unwrap_or_else(|| ItemType::Unknown(name.to_string()))
    }
}

impl From<String> for ItemType {
    fn from(name: String) -> Self {
        match ItemType::from(name.as_str()) {
            ItemType::Unknown(_) => ItemType::Unknown(name),
            known => known,
        }
    }
}

impl From<ItemType> for String {
    fn from(item_type: ItemType) -> Self {
        item_type.as_str().to_string()
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
