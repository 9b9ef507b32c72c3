#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A person or organization credited on a record, in a given role.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    /// The Zotero creator type, e.g. `author`, `director`, `seriesEditor`.
    pub creator_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl Contributor {
    pub fn new(creator_type: &str, first_name: Option<&str>, last_name: Option<&str>) -> Self {
        Self {
            creator_type: creator_type.to_string(),
            first_name: first_name.map(str::to_string),
            last_name: last_name.map(str::to_string),
        }
    }

    /// The name shown in the export: "First Last", or just "Last".
    ///
    /// Contributors without a last name cannot be rendered. Empty strings
    /// count as missing.
    pub fn display_name(&self) -> Option<String> {
        let first = self.first_name.as_deref().filter(|s| !s.is_empty());
        let last = self.last_name.as_deref().filter(|s| !s.is_empty())?;
        Some(match first {
            Some(first) => format!("{} {}", first, last),
            None => last.to_string(),
        })
    }

    /// Whether the creator type matches `role`, ignoring case.
    pub fn has_role(&self, role: &str) -> bool {
        self.creator_type.eq_ignore_ascii_case(role)
    }
}
