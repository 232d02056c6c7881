//! Day ranges for the availability grid.

use chrono::{Duration, NaiveDate};

use crate::constants::{GRID_DAYS, MAX_GRID_DAYS};
use crate::error::{CalzikError, CalzikResult};

/// `days` consecutive days starting at `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub from: NaiveDate,
    pub days: i64,
}

impl DayRange {
    /// Build a range from CLI arguments.
    /// - `from`: "today" or YYYY-MM-DD, defaults to today
    /// - `days`: defaults to GRID_DAYS, between 1 and MAX_GRID_DAYS
    pub fn from_args(from: Option<&str>, days: Option<i64>, today: NaiveDate) -> CalzikResult<Self> {
        let from = match from {
            None | Some("today") => today,
            Some(s) => parse_date(s)?,
        };

        let days = days.unwrap_or(GRID_DAYS);
        if !(1..=MAX_GRID_DAYS).contains(&days) {
            return Err(CalzikError::Validation(format!(
                "Number of days must be between 1 and {}, got {}",
                MAX_GRID_DAYS, days
            )));
        }

        if from.checked_add_signed(Duration::days(days - 1)).is_none() {
            return Err(CalzikError::Validation(format!(
                "{} days from {} runs past the last representable date",
                days, from
            )));
        }

        Ok(DayRange { from, days })
    }

    /// Each day of the range in order. Stops early rather than overflow
    /// past the last representable date.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let from = self.from;
        (0..self.days.clamp(0, MAX_GRID_DAYS))
            .map_while(move |offset| from.checked_add_signed(Duration::days(offset)))
    }
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> CalzikResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| CalzikError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 20).unwrap()
    }

    #[test]
    fn defaults_to_grid_days_from_today() {
        let range = DayRange::from_args(None, None, today()).unwrap();
        assert_eq!(range.from, today());
        assert_eq!(range.dates().count(), GRID_DAYS as usize);
        assert_eq!(range.dates().last(), NaiveDate::from_ymd_opt(2025, 3, 21));
    }

    #[test]
    fn explicit_start_and_length() {
        let range = DayRange::from_args(Some("2025-03-01"), Some(3), today()).unwrap();
        let dates: Vec<NaiveDate> = range.dates().collect();
        assert_eq!(dates.len(), 3);
        assert_eq!(dates[2], NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            DayRange::from_args(Some("20/02/2025"), None, today()),
            Err(CalzikError::InvalidDate(_))
        ));
        assert!(DayRange::from_args(None, Some(0), today()).is_err());
    }

    // --- bounds ---

    #[test]
    fn rejects_more_days_than_the_grid_allows() {
        assert!(DayRange::from_args(None, Some(MAX_GRID_DAYS), today()).is_ok());
        assert!(matches!(
            DayRange::from_args(None, Some(MAX_GRID_DAYS + 1), today()),
            Err(CalzikError::Validation(_))
        ));
        assert!(matches!(
            DayRange::from_args(None, Some(i64::MAX), today()),
            Err(CalzikError::Validation(_))
        ));
    }

    #[test]
    fn rejects_range_past_the_last_date() {
        assert!(DayRange::from_args(None, Some(1), NaiveDate::MAX).is_ok());
        assert!(matches!(
            DayRange::from_args(Some("today"), Some(5), NaiveDate::MAX),
            Err(CalzikError::Validation(_))
        ));
    }

    #[test]
    fn dates_stop_at_the_last_date() {
        let range = DayRange {
            from: NaiveDate::MAX.pred_opt().unwrap(),
            days: 10,
        };
        assert_eq!(range.dates().count(), 2);
    }
}
