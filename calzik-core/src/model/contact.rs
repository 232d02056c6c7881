use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalzikError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Salle,
    Association,
    Festival,
    Autre,
}

impl ContactKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Salle => "Salle",
            ContactKind::Association => "Association",
            ContactKind::Festival => "Festival",
            ContactKind::Autre => "Autre",
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ContactKind {
    type Err = CalzikError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "salle" | "venue" => Ok(ContactKind::Salle),
            "association" => Ok(ContactKind::Association),
            "festival" => Ok(ContactKind::Festival),
            "autre" | "other" => Ok(ContactKind::Autre),
            other => Err(CalzikError::Validation(format!(
                "unknown contact type '{}' (expected salle, association, festival or autre)",
                other
            ))),
        }
    }
}

/// Venue, association or festival the band works with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ContactKind,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Directory filter. Empty strings and `None` match everything.
#[derive(Debug, Clone, Default)]
pub struct ContactFilter {
    /// Case-insensitive substring of name, city or email.
    pub search: String,
    pub kind: Option<ContactKind>,
    /// Case-insensitive substring of the city.
    pub city: String,
}

impl ContactFilter {
    pub fn matches(&self, contact: &Contact) -> bool {
        let search = self.search.trim().to_lowercase();
        let matches_search = search.is_empty()
            || contact.name.to_lowercase().contains(&search)
            || contact.city.to_lowercase().contains(&search)
            || contact.email.to_lowercase().contains(&search);

        let matches_kind = self.kind.is_none_or(|kind| contact.kind == kind);

        let city = self.city.trim().to_lowercase();
        let matches_city = city.is_empty() || contact.city.to_lowercase().contains(&city);

        matches_search && matches_kind && matches_city
    }
}
