//! Per-slot aggregation of member availability.
//!
//! Counts only consider active members, and each member counts once per
//! (date, slot) even when older data holds duplicate records, so
//! `available <= total` always holds.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::date_range::DayRange;
use crate::model::{Availability, TimeSlot, User};

/// How full a slot is, from everyone available down to nobody.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillTier {
    Full,
    High,
    Medium,
    Low,
    Empty,
}

impl FillTier {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 1.0 {
            FillTier::Full
        } else if ratio >= 0.8 {
            FillTier::High
        } else if ratio >= 0.5 {
            FillTier::Medium
        } else if ratio > 0.0 {
            FillTier::Low
        } else {
            FillTier::Empty
        }
    }

    /// Grade letter shown in compact grids.
    pub fn letter(&self) -> char {
        match self {
            FillTier::Full => 'A',
            FillTier::High => 'B',
            FillTier::Medium => 'C',
            FillTier::Low => 'D',
            FillTier::Empty => 'E',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotSummary {
    pub available: usize,
    pub unavailable: usize,
    /// Number of active members.
    pub total: usize,
}

impl SlotSummary {
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.available as f64 / self.total as f64
    }

    pub fn tier(&self) -> FillTier {
        FillTier::from_ratio(self.ratio())
    }
}

/// Records answering for `slot` on `date`, whoever they belong to.
pub fn slot_records<'a>(
    availabilities: &'a [Availability],
    date: NaiveDate,
    slot: TimeSlot,
) -> impl Iterator<Item = &'a Availability> {
    availabilities
        .iter()
        .filter(move |a| a.date == date && a.time_slot == slot)
}

pub fn summarize_slot(
    availabilities: &[Availability],
    users: &[User],
    date: NaiveDate,
    slot: TimeSlot,
) -> SlotSummary {
    let active: HashSet<&str> = users
        .iter()
        .filter(|u| u.is_active)
        .map(|u| u.id.as_str())
        .collect();

    let mut available: HashSet<&str> = HashSet::new();
    let mut unavailable: HashSet<&str> = HashSet::new();
    for record in slot_records(availabilities, date, slot) {
        let user_id = record.user_id.as_str();
        if !active.contains(user_id) {
            continue;
        }
        if record.is_available {
            available.insert(user_id);
        } else {
            unavailable.insert(user_id);
        }
    }

    // A member with conflicting duplicates counts as available.
    let unavailable = unavailable.difference(&available).count();

    SlotSummary {
        available: available.len(),
        unavailable,
        total: active.len(),
    }
}

/// One cell of the availability grid.
#[derive(Debug, Clone)]
pub struct GridCell {
    pub date: NaiveDate,
    pub slot: TimeSlot,
    pub summary: SlotSummary,
    /// The viewing member's own answer, if they gave one.
    pub mine: Option<bool>,
}

/// Every day of `range` crossed with every slot.
pub fn day_grid(
    availabilities: &[Availability],
    users: &[User],
    viewer_id: Option<&str>,
    range: &DayRange,
    slots: &[TimeSlot],
) -> Vec<GridCell> {
    let mut cells = Vec::new();

    for date in range.dates() {
        for &slot in slots {
            let mine = viewer_id.and_then(|viewer| {
                slot_records(availabilities, date, slot)
                    .find(|a| a.user_id == viewer)
                    .map(|a| a.is_available)
            });
            cells.push(GridCell {
                date,
                slot,
                summary: summarize_slot(availabilities, users, date, slot),
                mine,
            });
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn make_test_user(id: &str, active: bool) -> User {
        User {
            id: id.to_string(),
            email: format!("{id}@band.fr"),
            name: id.to_string(),
            instrument: "Guitare".to_string(),
            role: Role::Member,
            is_active: active,
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, day).unwrap()
    }

    fn slot() -> TimeSlot {
        TimeSlot::parse("19:00-22:00").unwrap()
    }

    fn record(user: &str, day: u32, available: bool) -> Availability {
        Availability::new(user, date(day), slot(), available)
    }

    // --- tiers ---

    #[test]
    fn tier_thresholds() {
        assert_eq!(FillTier::from_ratio(1.0), FillTier::Full);
        assert_eq!(FillTier::from_ratio(0.8), FillTier::High);
        assert_eq!(FillTier::from_ratio(0.79), FillTier::Medium);
        assert_eq!(FillTier::from_ratio(0.5), FillTier::Medium);
        assert_eq!(FillTier::from_ratio(0.25), FillTier::Low);
        assert_eq!(FillTier::from_ratio(0.0), FillTier::Empty);
    }

    #[test]
    fn no_members_means_empty() {
        let summary = summarize_slot(&[record("a", 1, true)], &[], date(1), slot());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.ratio(), 0.0);
        assert_eq!(summary.tier(), FillTier::Empty);
    }

    // --- summarize_slot ---

    #[test]
    fn counts_only_matching_date_and_slot() {
        let users = vec![make_test_user("a", true), make_test_user("b", true)];
        let other_slot = TimeSlot::parse("14:00-17:00").unwrap();
        let records = vec![
            record("a", 1, true),
            record("b", 2, true),
            Availability::new("b", date(1), other_slot, true),
        ];

        let summary = summarize_slot(&records, &users, date(1), slot());
        assert_eq!(summary.available, 1);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.tier(), FillTier::Medium);
    }

    #[test]
    fn available_never_exceeds_active_members() {
        let users = vec![make_test_user("a", true), make_test_user("gone", false)];
        let records = vec![
            record("a", 1, true),
            record("a", 1, true),
            record("gone", 1, true),
            record("stranger", 1, true),
        ];

        let summary = summarize_slot(&records, &users, date(1), slot());
        assert_eq!(summary.available, 1);
        assert_eq!(summary.total, 1);
        assert!(summary.available <= summary.total);
        assert_eq!(summary.tier(), FillTier::Full);
    }

    #[test]
    fn unavailable_counts_distinct_members() {
        let users = vec![
            make_test_user("a", true),
            make_test_user("b", true),
            make_test_user("c", true),
        ];
        let records = vec![
            record("a", 1, false),
            record("b", 1, false),
            record("b", 1, true),
            record("c", 1, true),
        ];

        let summary = summarize_slot(&records, &users, date(1), slot());
        assert_eq!(summary.available, 2);
        assert_eq!(summary.unavailable, 1);
    }

    // --- day_grid ---

    #[test]
    fn grid_crosses_days_with_slots() {
        let users = vec![make_test_user("a", true)];
        let slots = vec![TimeSlot::parse("14:00-17:00").unwrap(), slot()];
        let records = vec![record("a", 2, false)];

        let range = DayRange { from: date(1), days: 3 };
        let grid = day_grid(&records, &users, Some("a"), &range, &slots);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[0].date, date(1));
        assert_eq!(grid[5].date, date(3));

        let cell = grid
            .iter()
            .find(|c| c.date == date(2) && c.slot == slot())
            .unwrap();
        assert_eq!(cell.mine, Some(false));
        assert!(grid.iter().filter(|c| c.mine.is_some()).count() == 1);
    }

    #[test]
    fn grid_without_viewer_has_no_own_state() {
        let users = vec![make_test_user("a", true)];
        let range = DayRange { from: date(1), days: 1 };
        let grid = day_grid(&[record("a", 1, true)], &users, None, &range, &[slot()]);
        assert_eq!(grid[0].mine, None);
        assert_eq!(grid[0].summary.available, 1);
    }

    #[test]
    fn grid_near_the_last_date_is_truncated() {
        let users = vec![make_test_user("a", true)];
        let range = DayRange {
            from: NaiveDate::MAX,
            days: 5,
        };
        let grid = day_grid(&[], &users, Some("a"), &range, &[slot()]);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0].date, NaiveDate::MAX);
    }
}
