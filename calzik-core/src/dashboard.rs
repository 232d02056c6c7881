//! Dashboard and admin summaries, computed from the stores on demand.

use chrono::NaiveDate;

use crate::constants::UPCOMING_LIMIT;
use crate::model::{Availability, Concert, EventKind, EventStatus, User};

#[derive(Debug, Clone)]
pub struct DashboardSummary<'a> {
    /// Next events from today on, soonest first.
    pub upcoming: Vec<&'a Concert>,
    pub next_rehearsal: Option<&'a Concert>,
    pub active_members: usize,
    pub confirmed_concerts: usize,
    /// Share of "available" answers among answers dated today or later.
    pub availability_percentage: u32,
}

impl<'a> DashboardSummary<'a> {
    pub fn compute(
        concerts: &'a [Concert],
        availabilities: &[Availability],
        users: &[User],
        today: NaiveDate,
    ) -> Self {
        let mut upcoming: Vec<&Concert> = concerts.iter().filter(|c| c.is_upcoming(today)).collect();
        upcoming.sort_by_key(|c| (c.date, c.time));

        let next_rehearsal = upcoming
            .iter()
            .find(|c| c.kind == EventKind::Rehearsal)
            .copied();
        upcoming.truncate(UPCOMING_LIMIT);

        DashboardSummary {
            upcoming,
            next_rehearsal,
            active_members: users.iter().filter(|u| u.is_active).count(),
            confirmed_concerts: concerts
                .iter()
                .filter(|c| c.status == EventStatus::Confirmed)
                .count(),
            availability_percentage: availability_percentage(availabilities, today),
        }
    }
}

/// `round(available / total * 100)` over records dated today or later.
/// With no such records the total counts as 1, giving 0.
pub fn availability_percentage(availabilities: &[Availability], today: NaiveDate) -> u32 {
    let recent: Vec<&Availability> = availabilities.iter().filter(|a| a.date >= today).collect();
    let available = recent.iter().filter(|a| a.is_available).count();
    let total = recent.len().max(1);

    (available as f64 / total as f64 * 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminStats {
    pub active_users: usize,
    pub admins: usize,
    pub upcoming_concerts: usize,
    pub availability_records: usize,
}

impl AdminStats {
    pub fn compute(
        users: &[User],
        concerts: &[Concert],
        availabilities: &[Availability],
        today: NaiveDate,
    ) -> Self {
        AdminStats {
            active_users: users.iter().filter(|u| u.is_active).count(),
            admins: users.iter().filter(|u| u.is_admin()).count(),
            upcoming_concerts: concerts.iter().filter(|c| c.is_upcoming(today)).count(),
            availability_records: availabilities.len(),
        }
    }
}
