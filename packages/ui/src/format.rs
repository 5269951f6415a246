//! Date formatting for bylines and comment timestamps.
//!
//! Inputs are the API's ISO-8601 strings. Empty input renders as nothing,
//! unparsable input as "Invalid Date". Output uses the browser's local time
//! zone; the `_in` variants take an explicit zone.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub const INVALID_DATE: &str = "Invalid Date";

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn format_with<Tz: TimeZone>(raw: &str, tz: &Tz, pattern: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if raw.trim().is_empty() {
        return String::new();
    }
    match parse_timestamp(raw) {
        Some(dt) => dt.with_timezone(tz).format(pattern).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// "May 6, 2025"
pub fn format_date(raw: &str) -> String {
    format_date_in(raw, &Local)
}

pub fn format_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format_with(raw, tz, "%B %-d, %Y")
}

/// "May 6, 2025, 07:52 PM"
pub fn format_date_time(raw: &str) -> String {
    format_date_time_in(raw, &Local)
}

pub fn format_date_time_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format_with(raw, tz, "%B %-d, %Y, %I:%M %p")
}

/// "3 days ago", measured against `now`.
pub fn format_relative_time(raw: &str, now: DateTime<Utc>) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    let Some(then) = parse_timestamp(raw) else {
        return INVALID_DATE.to_string();
    };

    let seconds = (now - then).num_seconds();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let months = days / 30;
    let years = months / 12;

    let (count, unit) = if seconds < 60 {
        (seconds, "second")
    } else if minutes < 60 {
        (minutes, "minute")
    } else if hours < 24 {
        (hours, "hour")
    } else if days < 30 {
        (days, "day")
    } else if months < 12 {
        (months, "month")
    } else {
        (years, "year")
    };
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{plural} ago")
}

/// [`format_relative_time`] against the current clock.
pub fn time_ago(raw: &str) -> String {
    format_relative_time(raw, Utc::now())
}
