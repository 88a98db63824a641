use crate::calc::{days_in_month, weekday_name, CalendarDate};
use std::ops::RangeInclusive;

/// The picker selection and the info panel flag.
///
/// Every setter keeps the triple inside the pickers' ranges: the year inside
/// the configured range, the month in 1..=12 and the day in
/// 1..=days_in_month(year, month). Changing the year or month re-clamps the
/// day to the last day of the new month, so 31 January becomes 29 February in
/// a leap year rather than an invalid date.
#[derive(Debug, Clone)]
pub struct PresentationState {
    year: i32,
    month: u32,
    day: u32,
    year_range: RangeInclusive<i32>,
    info_panel_visible: bool,
}

impl PresentationState {
    /// An inverted `year_range` is read with its ends swapped.
    pub fn new(today: CalendarDate, year_range: RangeInclusive<i32>) -> Self {
        let (start, end) = year_range.into_inner();
        let year_range = start.min(end)..=start.max(end);
        let mut state = PresentationState {
            year: *year_range.start(),
            month: 1,
            day: 1,
            year_range,
            info_panel_visible: false,
        };
        state.reset_to(today);
        state
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn year_range(&self) -> &RangeInclusive<i32> {
        &self.year_range
    }

    pub fn info_panel_visible(&self) -> bool {
        self.info_panel_visible
    }

    /// Upper bound of the day picker for the current year and month.
    pub fn max_day(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year.clamp(*self.year_range.start(), *self.year_range.end());
        self.clamp_day();
        log::debug!("year set to {} (day {})", self.year, self.day);
    }

    pub fn set_month(&mut self, month: u32) {
        self.month = month.clamp(1, 12);
        self.clamp_day();
        log::debug!("month set to {} (day {})", self.month, self.day);
    }

    pub fn set_day(&mut self, day: u32) {
        self.day = day.clamp(1, self.max_day());
        log::debug!("day set to {}", self.day);
    }

    pub fn step_year(&mut self, delta: i32) {
        self.set_year(self.year.saturating_add(delta));
    }

    pub fn step_month(&mut self, delta: i32) {
        self.set_month(step_u32(self.month, delta));
    }

    pub fn step_day(&mut self, delta: i32) {
        self.set_day(step_u32(self.day, delta));
    }

    /// Moves all three pickers to `date`, clamping the year into range.
    pub fn reset_to(&mut self, date: CalendarDate) {
        self.set_year(date.year());
        self.set_month(date.month());
        self.set_day(date.day());
    }

    pub fn displayed_text(&self) -> String {
        weekday_name(self.year, self.month, self.day)
    }

    pub fn toggle_info_panel(&mut self) {
        self.info_panel_visible = !self.info_panel_visible;
    }

    pub fn close_info_panel(&mut self) {
        self.info_panel_visible = false;
    }

    fn clamp_day(&mut self) {
        self.day = self.day.clamp(1, self.max_day());
    }
}

fn step_u32(value: u32, delta: i32) -> u32 {
    if delta >= 0 {
        value.saturating_add(delta as u32)
    } else {
        value.saturating_sub(delta.unsigned_abs())
    }
}
