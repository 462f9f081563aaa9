mod activity;
mod case;
mod hours;
mod ids;

pub use activity::*;
pub use case::*;
pub use hours::*;
pub use ids::*;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

const ISO_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

time::serde::format_description!(pub(crate) iso_date, Date, "[year]-[month]-[day]");

/// Format a date as `YYYY-MM-DD`.
pub fn format_iso(date: Date) -> String {
    date.format(ISO_FORMAT).unwrap_or_else(|_| date.to_string())
}

/// Parse a `YYYY-MM-DD` string.
pub fn parse_iso(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s.trim(), ISO_FORMAT)
}
