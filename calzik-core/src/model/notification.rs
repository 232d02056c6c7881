use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message shown to the band until dismissed.
///
/// Records written by older versions may lack `date` or `read`; they load
/// as "now" and unread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    pub fn new(id: &str, message: &str, date: DateTime<Utc>) -> Self {
        Notification {
            id: id.to_string(),
            message: message.to_string(),
            date,
            link: None,
            read: false,
        }
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn old_records_get_defaults() {
        let before = Utc::now();
        let n: Notification =
            serde_json::from_str(r#"{"id":"invoice-1","message":"Facture impayée"}"#).unwrap();
        assert!(!n.read);
        assert!(n.date >= before);
        assert!(n.link.is_none());
    }
}
