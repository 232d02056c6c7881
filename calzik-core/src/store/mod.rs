//! Persistence of the calzik stores.
//!
//! A [`Repository`] is a flat key-value store of JSON documents. Collections
//! are read leniently: a missing, unreadable or corrupt document loads as an
//! empty collection, and a record that doesn't deserialize is skipped. Both
//! are logged.

mod dir;
mod memory;

pub use dir::DirRepository;
pub use memory::MemoryRepository;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CalzikResult;

/// Keys of the documents written by the workspace.
pub mod keys {
    pub const USERS: &str = "users";
    pub const AVAILABILITIES: &str = "availabilities";
    pub const CONCERTS: &str = "concerts";
    pub const CONTACTS: &str = "contacts";
    pub const INVOICES: &str = "invoices";
    pub const INVOICE_SEQ: &str = "invoiceSeq";
    pub const NOTIFICATIONS: &str = "notifications";
    pub const IDEAS: &str = "ideas";
    pub const DOCUMENTS: &str = "documents";
    pub const SESSION: &str = "session";
}

pub trait Repository {
    /// Raw document stored under `key`, or `None` if there is none.
    fn read(&self, key: &str) -> CalzikResult<Option<String>>;

    /// Replace the document stored under `key`.
    fn write(&self, key: &str, contents: &str) -> CalzikResult<()>;

    /// Remove the document stored under `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> CalzikResult<()>;
}

/// Load a JSON value, treating unreadable or corrupt documents as absent.
pub fn load_value<T: DeserializeOwned>(repo: &dyn Repository, key: &str) -> Option<T> {
    let content = match repo.read(key) {
        Ok(Some(content)) => content,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("Could not read '{}': {}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring corrupt '{}': {}", key, e);
            None
        }
    }
}

/// Load a JSON array record by record. Records that don't deserialize are
/// skipped and logged; the others are kept.
pub fn load_collection<T: DeserializeOwned>(repo: &dyn Repository, key: &str) -> Vec<T> {
    let raw: Vec<serde_json::Value> = load_value(repo, key).unwrap_or_default();
    let items: Vec<T> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("Skipping invalid record #{} in '{}': {}", index, key, e);
                None
            }
        })
        .collect();
    log::debug!("Loaded {} record(s) from '{}'", items.len(), key);
    items
}

pub fn save_value<T: Serialize + ?Sized>(
    repo: &dyn Repository,
    key: &str,
    value: &T,
) -> CalzikResult<()> {
    let content = serde_json::to_string_pretty(value)?;
    repo.write(key, &content)
}
