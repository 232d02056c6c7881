use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::time_format;
use crate::error::{CalzikError, CalzikResult};

/// A time interval on a given day, e.g. `19:00-22:00`.
///
/// Parsing normalizes spacing and dash variants so that two spellings of the
/// same interval compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSlot {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> CalzikResult<Self> {
        if start >= end {
            return Err(CalzikError::InvalidSlot(format!(
                "{}-{}",
                start.format("%H:%M"),
                end.format("%H:%M")
            )));
        }
        Ok(TimeSlot { start, end })
    }

    pub fn parse(s: &str) -> CalzikResult<Self> {
        let invalid = || CalzikError::InvalidSlot(s.to_string());

        let (start, end) = s
            .split_once(['-', '–', '—'])
            .ok_or_else(invalid)?;
        let start = time_format::parse(start).ok_or_else(invalid)?;
        let end = time_format::parse(end).ok_or_else(invalid)?;

        Self::new(start, end).map_err(|_| invalid())
    }

}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

impl FromStr for TimeSlot {
    type Err = CalzikError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::parse(s)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TimeSlot::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// One member's answer for one slot on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub is_available: bool,
}

impl Availability {
    pub fn new(user_id: &str, date: NaiveDate, time_slot: TimeSlot, is_available: bool) -> Self {
        Availability {
            id: super::new_id(),
            user_id: user_id.to_string(),
            date,
            time_slot,
            is_available,
        }
    }

    pub fn is_for(&self, user_id: &str, date: NaiveDate, slot: TimeSlot) -> bool {
        self.user_id == user_id && self.date == date && self.time_slot == slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- TimeSlot::parse ---

    #[test]
    fn parse_canonical_slot() {
        let slot = TimeSlot::parse("19:00-22:00").unwrap();
        assert_eq!(slot.start, NaiveTime::from_hms_opt(19, 0, 0).unwrap());
        assert_eq!(slot.end, NaiveTime::from_hms_opt(22, 0, 0).unwrap());
    }

    #[test]
    fn parse_normalizes_spacing_and_dashes() {
        let canonical = TimeSlot::parse("19:00-22:00").unwrap();
        assert_eq!(TimeSlot::parse("19:00 - 22:00").unwrap(), canonical);
        assert_eq!(TimeSlot::parse(" 19:00 – 22:00 ").unwrap(), canonical);
        assert_eq!(TimeSlot::parse("19:00 - 22:00").unwrap().to_string(), "19:00-22:00");
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(matches!(TimeSlot::parse("19h00-22h00"), Err(CalzikError::InvalidSlot(_))));
        assert!(TimeSlot::parse("19:00").is_err());
        assert!(TimeSlot::parse("").is_err());
    }

    #[test]
    fn parse_rejects_reversed_interval() {
        assert!(TimeSlot::parse("22:00-19:00").is_err());
        assert!(TimeSlot::parse("19:00-19:00").is_err());
    }

    #[test]
    fn slot_serializes_as_string() {
        let availability = Availability {
            id: "a1".to_string(),
            user_id: "1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 12, 12).unwrap(),
            time_slot: TimeSlot::parse("19:00-22:00").unwrap(),
            is_available: true,
        };
        let json = serde_json::to_value(&availability).unwrap();
        assert_eq!(json["timeSlot"], "19:00-22:00");
        assert_eq!(json["date"], "2025-12-12");
        assert_eq!(json["userId"], "1");
    }
}
