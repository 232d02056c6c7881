use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::CalzikResult;
use crate::store::Repository;

/// Keeps documents in memory. Used by tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    documents: RefCell<HashMap<String, String>>,
}

impl Repository for MemoryRepository {
    fn read(&self, key: &str) -> CalzikResult<Option<String>> {
        Ok(self.documents.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, contents: &str) -> CalzikResult<()> {
        self.documents
            .borrow_mut()
            .insert(key.to_string(), contents.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> CalzikResult<()> {
        self.documents.borrow_mut().remove(key);
        Ok(())
    }
}
