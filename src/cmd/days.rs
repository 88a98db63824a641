use crate::calc::{days_in_month, is_leap_year};
use anyhow::{bail, Result};

pub fn run(month: u32, year: i32) -> Result<()> {
    if !(1..=12).contains(&month) {
        bail!("month must be between 1 and 12, got {}", month);
    }
    write_days(month, year, &mut std::io::stdout())
}

pub(crate) fn write_days<W: std::io::Write>(month: u32, year: i32, out: &mut W) -> Result<()> {
    let leap = if is_leap_year(year) { "leap year" } else { "common year" };
    writeln!(
        out,
        "{:02}-{:04}: {} days ({})",
        month,
        year,
        days_in_month(year, month),
        leap
    )?;
    Ok(())
}
