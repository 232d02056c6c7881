//! Global calzik configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_TIME_SLOTS, DEFAULT_VAT_RATE, DOCUMENT_QUOTA_BYTES, OVERDUE_DAYS,
};
use crate::error::{CalzikError, CalzikResult};
use crate::model::{Party, TimeSlot};

static DEFAULT_DATA_PATH: &str = "~/.calzik";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn is_default_data_path(p: &PathBuf) -> bool {
    *p == default_data_path()
}

fn default_vat_rate() -> String {
    DEFAULT_VAT_RATE.to_string()
}

fn default_time_slots() -> Vec<String> {
    DEFAULT_TIME_SLOTS.iter().map(|s| s.to_string()).collect()
}

fn default_overdue_days() -> i64 {
    OVERDUE_DAYS
}

fn default_document_quota() -> u64 {
    DOCUMENT_QUOTA_BYTES
}

/// Global configuration at ~/.config/calzik/config.toml
///
/// Every field has a default, so a missing or empty file is a valid config.
/// Scalar fields can be overridden with `CALZIK_*` environment variables
/// (e.g. `CALZIK_DATA_DIR`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CalzikConfig {
    #[serde(default = "default_data_path", skip_serializing_if = "is_default_data_path")]
    pub data_dir: PathBuf,

    #[serde(default = "default_vat_rate")]
    pub default_vat_rate: String,

    #[serde(default = "default_time_slots")]
    pub time_slots: Vec<String>,

    #[serde(default = "default_overdue_days")]
    pub overdue_days: i64,

    #[serde(default = "default_document_quota")]
    pub document_quota_bytes: u64,

    /// Default issuer printed on new invoices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Party>,
}

impl Default for CalzikConfig {
    fn default() -> Self {
        CalzikConfig {
            data_dir: default_data_path(),
            default_vat_rate: default_vat_rate(),
            time_slots: default_time_slots(),
            overdue_days: default_overdue_days(),
            document_quota_bytes: default_document_quota(),
            provider: None,
        }
    }
}

impl CalzikConfig {
    pub fn config_path() -> CalzikResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalzikError::Config("Could not determine config directory".into()))?
            .join("calzik");

        Ok(config_dir.join("config.toml"))
    }

    /// Parse the configured slot strings.
    pub fn slots(&self) -> CalzikResult<Vec<TimeSlot>> {
        self.time_slots
            .iter()
            .map(|s| {
                TimeSlot::parse(s).map_err(|_| {
                    CalzikError::Config(format!("Invalid time slot '{}' in time_slots", s))
                })
            })
            .collect()
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalzikResult<()> {
        let contents = format!(
            "\
# calzik configuration

# Where band data lives:
# data_dir = \"{}\"

# VAT rate preselected on new invoices (percent):
# default_vat_rate = \"{}\"

# Slots shown in the availability grid:
# time_slots = [{}]

# Days after the service date before an unpaid invoice is flagged:
# overdue_days = {}

# Total size allowed for stored documents, in bytes:
# document_quota_bytes = {}

# Default issuer for invoices:
# [provider]
# name = \"Association CalZik\"
# address = \"1 rue de la Musique, 69000 Lyon\"
",
            DEFAULT_DATA_PATH,
            DEFAULT_VAT_RATE,
            DEFAULT_TIME_SLOTS
                .iter()
                .map(|s| format!("\"{}\"", s))
                .collect::<Vec<_>>()
                .join(", "),
            OVERDUE_DAYS,
            DOCUMENT_QUOTA_BYTES,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalzikError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalzikError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
