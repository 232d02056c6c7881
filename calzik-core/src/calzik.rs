//! Calzik root: global configuration and the data directory.

use std::path::PathBuf;

use chrono::NaiveDate;
use ::config::{Config, Environment, File};

use crate::config::CalzikConfig;
use crate::error::{CalzikError, CalzikResult};
use crate::model::TimeSlot;
use crate::store::DirRepository;
use crate::workspace::{Workspace, WorkspaceSettings};

#[derive(Clone)]
pub struct Calzik {
    config: CalzikConfig,
}

impl Calzik {
    /// Load the global config, creating a commented default file on first run.
    /// `CALZIK_*` environment variables override values from the file.
    pub fn load() -> CalzikResult<Self> {
        let config_path = CalzikConfig::config_path()?;

        if !config_path.exists() {
            CalzikConfig::create_default_config(&config_path)?;
        }

        let config: CalzikConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(Environment::with_prefix("CALZIK").try_parsing(true))
            .build()
            .map_err(|e| CalzikError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalzikError::Config(e.to_string()))?;

        Ok(Calzik { config })
    }

    pub fn config(&self) -> &CalzikConfig {
        &self.config
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the data directory path in display-friendly form,
    /// keeping `~` instead of expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.config.data_dir.clone()
    }

    pub fn documents_path(&self) -> PathBuf {
        self.data_path().join("documents")
    }

    pub fn is_initialized(&self) -> bool {
        self.data_path().is_dir()
    }

    /// Create the data directory and its documents folder.
    pub fn init_data_dir(&self) -> CalzikResult<()> {
        std::fs::create_dir_all(self.documents_path())?;
        Ok(())
    }

    pub fn slots(&self) -> CalzikResult<Vec<TimeSlot>> {
        self.config.slots()
    }

    pub fn repository(&self) -> DirRepository {
        DirRepository::new(self.data_path())
    }

    pub fn settings(&self) -> WorkspaceSettings {
        WorkspaceSettings {
            overdue_days: self.config.overdue_days,
            document_quota: self.config.document_quota_bytes,
            documents_dir: self.documents_path(),
        }
    }

    pub fn open_workspace(&self, today: NaiveDate) -> CalzikResult<Workspace> {
        Workspace::open(Box::new(self.repository()), self.settings(), today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Repository;

    #[test]
    fn paths_follow_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let calzik = Calzik {
            config: CalzikConfig {
                data_dir: dir.path().join("band"),
                ..CalzikConfig::default()
            },
        };

        assert!(!calzik.is_initialized());
        calzik.init_data_dir().unwrap();
        assert!(calzik.is_initialized());
        assert!(calzik.documents_path().is_dir());

        calzik.repository().write("users", "[]").unwrap();
        assert!(dir.path().join("band").join("users.json").is_file());
    }

    #[test]
    fn tilde_is_expanded_but_displayed() {
        let calzik = Calzik {
            config: CalzikConfig::default(),
        };
        assert_eq!(calzik.display_path(), PathBuf::from("~/.calzik"));
        assert!(!calzik.data_path().starts_with("~"));
    }
}
