//! Date arithmetic for weekly plans, quarterly KPI targets and habit streaks.

use chrono::{Datelike, Duration, NaiveDate};

/// Sunday and Saturday of the week containing `date`.
#[must_use]
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = i64::from(date.weekday().num_days_from_sunday());
    let start = date - Duration::days(offset);
    (start, start + Duration::days(6))
}

/// Quarter (1-4) of a month (1-12).
#[must_use]
pub const fn quarter_of(month: u32) -> u32 {
    (month.saturating_sub(1)) / 3 + 1
}

/// 0 = Sunday .. 6 = Saturday.
#[must_use]
pub fn day_of_week(date: NaiveDate) -> u8 {
    // num_days_from_sunday is always 0..=6.
    u8::try_from(date.weekday().num_days_from_sunday()).unwrap_or(0)
}

/// English weekday label for a `day_of_week` slot.
#[must_use]
pub const fn weekday_name(day_of_week: u8) -> &'static str {
    match day_of_week {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        _ => "?",
    }
}
