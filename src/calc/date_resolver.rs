use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

/// Day count used when chrono cannot build the first of the requested month.
pub const FALLBACK_DAYS_IN_MONTH: u32 = 30;

/// Text shown when the selected triple is not a real calendar date.
pub const INVALID_DATE: &str = "Invalid date";

/// A validated Gregorian date as picked by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Returns None unless `day` fits in `[1, days_in_month(year, month)]`.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if day == 0 || day > days_in_month(year, month) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        CalendarDate(date)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Full English weekday name, e.g. "Tuesday".
    pub fn weekday_name(&self) -> String {
        self.0.format("%A").to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d-%m-%Y %A"))
    }
}

/// Gregorian leap rule: every 4th year, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or 30 if the month cannot be built.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return FALLBACK_DAYS_IN_MONTH,
    };
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next_first {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        None => FALLBACK_DAYS_IN_MONTH,
    }
}

/// Formats the triple as `DD-MM-YYYY Weekday`, or returns "Invalid date".
pub fn weekday_name(year: i32, month: u32, day: u32) -> String {
    match CalendarDate::new(year, month, day) {
        Some(date) => date.to_string(),
        None => INVALID_DATE.to_string(),
    }
}
