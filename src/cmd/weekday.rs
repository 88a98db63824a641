use crate::calc::{weekday_name, CalendarDate};
use crate::data::AppSettings;
use anyhow::{bail, Result};
use serde::Serialize;

#[derive(Serialize, Debug, PartialEq)]
pub(crate) struct WeekdayReport {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<String>,
    pub text: String,
}

impl WeekdayReport {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        let date = CalendarDate::new(year, month, day);
        WeekdayReport {
            year,
            month,
            day,
            valid: date.is_some(),
            weekday: date.map(|d| d.weekday_name()),
            text: weekday_name(year, month, day),
        }
    }
}

pub fn run(day: u32, month: u32, year: i32, json: bool) -> Result<()> {
    let settings = AppSettings::load()?;
    check_year(&settings, year)?;
    let report = WeekdayReport::new(year, month, day);
    write_weekday(&report, json, &mut std::io::stdout())
}

/// Applies the year picker's bounds to command-line input.
pub(crate) fn check_year(settings: &AppSettings, year: i32) -> Result<()> {
    if !settings.year_range().contains(&year) {
        bail!(
            "year {} is outside the supported range {}-{}",
            year,
            settings.min_year,
            settings.max_year
        );
    }
    Ok(())
}

pub(crate) fn write_weekday<W: std::io::Write>(
    report: &WeekdayReport,
    json: bool,
    out: &mut W,
) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
    } else {
        writeln!(out, "{}", report.text)?;
    }
    Ok(())
}
