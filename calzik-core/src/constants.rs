/// Slots offered in the availability grid when the config doesn't list any.
pub const DEFAULT_TIME_SLOTS: [&str; 4] = ["14:00-17:00", "17:00-20:00", "19:00-22:00", "20:00-23:00"];

/// Number of days shown in the availability grid.
pub const GRID_DAYS: i64 = 30;

/// Longest range the availability grid accepts.
pub const MAX_GRID_DAYS: i64 = 366;

/// An unpaid invoice becomes overdue this many days after its service date.
pub const OVERDUE_DAYS: i64 = 30;

/// Total size allowed for stored documents (1 GiB).
pub const DOCUMENT_QUOTA_BYTES: u64 = 1024 * 1024 * 1024;

pub const DEFAULT_VAT_RATE: &str = "20";

/// VAT rates offered by the invoice form (percent).
pub const VAT_RATES: [&str; 5] = ["0", "2.1", "5.5", "10", "20"];

/// How many upcoming concerts the dashboard lists.
pub const UPCOMING_LIMIT: usize = 3;
