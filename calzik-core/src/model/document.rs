use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata of a file kept in the band's document storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDocument {
    pub id: String,
    /// Original file name, as uploaded.
    pub name: String,
    pub size: u64,
    /// Name of the copy inside the documents directory.
    pub stored_as: String,
    pub added: DateTime<Utc>,
    #[serde(default)]
    pub uploaded_by: String,
}
