//! Date/time picker confirmation formatting.
//!
//! The picker widget hands back a point in time; these helpers turn it into
//! the strings the form stores: a long-form date ("07 de mayo de 2024") and
//! a 24-hour HH:MM time. Parsing accepts the long form plus the numeric
//! formats older installs stored.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};

/// Month names for the long date format, January first.
const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Format a date the way the date picker confirmation does.
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{:02} de {} de {}",
        date.day(),
        MONTH_NAMES[date.month0() as usize],
        date.year()
    )
}

/// Format a time of day as 24-hour HH:MM.
pub fn format_time(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour, minute)
}

/// Parse a stored date string. Accepts the long format produced by
/// [`format_long_date`], ISO `YYYY-MM-DD`, and `DD/MM/YYYY`. Returns `None`
/// for anything that is not a valid calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%d/%m/%Y") {
        return Some(date);
    }
    parse_long_date(value)
}

/// Parse "07 de mayo de 2024".
fn parse_long_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split_whitespace();
    let day: u32 = parts.next()?.parse().ok()?;
    if parts.next()? != "de" {
        return None;
    }
    let month = month_number(parts.next()?)?;
    if parts.next()? != "de" {
        return None;
    }
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Month number (1-12) for a long-format month name.
fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|m| *m == lower)
        .map(|i| i as u32 + 1)
}

/// Decode a picker timestamp (Unix milliseconds) into device-local time.
pub fn local_datetime_from_millis(millis: i64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(millis).single()
}
