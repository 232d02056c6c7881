use crate::error::{CalzikError, CalzikResult};
use crate::model::StoredDocument;

/// Metadata of stored documents, bounded by a total size quota.
#[derive(Debug, Clone)]
pub struct DocumentShelf {
    documents: Vec<StoredDocument>,
    quota: u64,
}

impl DocumentShelf {
    pub fn new(documents: Vec<StoredDocument>, quota: u64) -> Self {
        DocumentShelf { documents, quota }
    }

    pub fn all(&self) -> &[StoredDocument] {
        &self.documents
    }

    pub fn get(&self, id: &str) -> Option<&StoredDocument> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn quota(&self) -> u64 {
        self.quota
    }

    pub fn used(&self) -> u64 {
        self.documents.iter().map(|d| d.size).sum()
    }

    /// Fails if `requested` more bytes would go over the quota.
    pub fn check_room(&self, requested: u64) -> CalzikResult<()> {
        let used = self.used();
        if used.saturating_add(requested) > self.quota {
            return Err(CalzikError::QuotaExceeded {
                used,
                requested,
                quota: self.quota,
            });
        }
        Ok(())
    }

    /// Record a batch of documents, all or nothing.
    pub fn add_all(&mut self, batch: Vec<StoredDocument>) -> CalzikResult<()> {
        let requested = batch.iter().map(|d| d.size).sum();
        self.check_room(requested)?;
        self.documents.extend(batch);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> CalzikResult<StoredDocument> {
        let index = self
            .documents
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| CalzikError::not_found("Document", id))?;
        Ok(self.documents.remove(index))
    }
}
