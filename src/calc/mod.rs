pub mod date_resolver;

pub use date_resolver::{days_in_month, is_leap_year, weekday_name, CalendarDate, INVALID_DATE};
