use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::time_format::{hhmm, hhmm_opt};
use crate::error::CalzikError;

/// What kind of date this is on the band calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    #[serde(alias = "gig")]
    Concert,
    #[serde(rename = "repetition", alias = "rehearsal")]
    Rehearsal,
    Audition,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Concert => "Concert",
            EventKind::Rehearsal => "Répétition",
            EventKind::Audition => "Audition",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EventKind {
    type Err = CalzikError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "concert" | "gig" => Ok(EventKind::Concert),
            "repetition" | "répétition" | "rehearsal" => Ok(EventKind::Rehearsal),
            "audition" => Ok(EventKind::Audition),
            other => Err(CalzikError::Validation(format!(
                "unknown event type '{}' (expected concert, rehearsal or audition)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventStatus::Pending => write!(f, "pending"),
            EventStatus::Confirmed => write!(f, "confirmed"),
            EventStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for EventStatus {
    type Err = CalzikError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(EventStatus::Pending),
            "confirmed" => Ok(EventStatus::Confirmed),
            "cancelled" | "canceled" => Ok(EventStatus::Cancelled),
            other => Err(CalzikError::Validation(format!(
                "unknown status '{}' (expected pending, confirmed or cancelled)",
                other
            ))),
        }
    }
}

/// A concert, rehearsal or audition on the band calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concert {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    #[serde(default, with = "hhmm_opt", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    #[serde(alias = "location")]
    pub venue: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default)]
    pub status: EventStatus,
    // Not checked against the contact directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub created_by: String,
}

impl Concert {
    pub fn from_draft(draft: ConcertDraft) -> Self {
        Concert {
            id: super::new_id(),
            title: draft.title,
            date: draft.date,
            time: draft.time,
            end_time: draft.end_time,
            venue: draft.venue,
            kind: draft.kind,
            status: draft.status,
            contact_id: draft.contact_id,
            description: draft.description,
            created_by: draft.created_by,
        }
    }

    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today
    }
}

impl fmt::Display for Concert {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Fields of a concert before it is given an id.
#[derive(Debug, Clone)]
pub struct ConcertDraft {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub end_time: Option<NaiveTime>,
    pub venue: String,
    pub kind: EventKind,
    pub status: EventStatus,
    pub contact_id: Option<String>,
    pub description: Option<String>,
    pub created_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_both_type_vocabularies() {
        let old: Concert = serde_json::from_str(
            r#"{"id":"1","title":"Concert d'été","date":"2024-06-28","time":"20:00","location":"Salle des Fêtes","type":"gig"}"#,
        )
        .unwrap();
        assert_eq!(old.kind, EventKind::Concert);
        assert_eq!(old.venue, "Salle des Fêtes");
        assert_eq!(old.status, EventStatus::Pending);

        let new: Concert = serde_json::from_str(
            r#"{"id":"2","title":"Répétition générale","date":"2025-12-12","time":"19:00","venue":"Local","type":"repetition","status":"confirmed","createdBy":"1"}"#,
        )
        .unwrap();
        assert_eq!(new.kind, EventKind::Rehearsal);
        assert_eq!(new.status, EventStatus::Confirmed);
        assert_eq!(new.created_by, "1");
    }

    #[test]
    fn writes_canonical_vocabulary() {
        let concert: Concert = serde_json::from_str(
            r#"{"id":"1","title":"Répét","date":"2024-06-21","time":"19:00","venue":"Local","type":"rehearsal","endTime":""}"#,
        )
        .unwrap();
        assert!(concert.end_time.is_none());

        let json = serde_json::to_value(&concert).unwrap();
        assert_eq!(json["type"], "repetition");
        assert_eq!(json["time"], "19:00");
        assert!(json.get("endTime").is_none());
    }

    #[test]
    fn parse_kind_and_status() {
        assert_eq!("gig".parse::<EventKind>().unwrap(), EventKind::Concert);
        assert_eq!("Rehearsal".parse::<EventKind>().unwrap(), EventKind::Rehearsal);
        assert_eq!("canceled".parse::<EventStatus>().unwrap(), EventStatus::Cancelled);
        assert!("party".parse::<EventKind>().is_err());
    }
}
