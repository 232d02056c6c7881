use std::path::PathBuf;

use crate::error::CalzikResult;
use crate::store::Repository;

/// Stores each key as `<root>/<key>.json`.
///
/// Writes go to a temporary file that is then renamed over the old one, so a
/// document is either fully replaced or left untouched. There is no locking:
/// two processes writing the same key race and the last rename wins.
#[derive(Debug, Clone)]
pub struct DirRepository {
    root: PathBuf,
}

impl DirRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirRepository { root: root.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl Repository for DirRepository {
    fn read(&self, key: &str) -> CalzikResult<Option<String>> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn write(&self, key: &str, contents: &str) -> CalzikResult<()> {
        std::fs::create_dir_all(&self.root)?;

        let path = self.path(key);
        let temp = self.root.join(format!("{}.json.tmp", key));

        std::fs::write(&temp, contents)?;
        std::fs::rename(&temp, &path)?;
        log::debug!("Wrote {}", path.display());
        Ok(())
    }

    fn delete(&self, key: &str) -> CalzikResult<()> {
        let path = self.path(key);
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}
