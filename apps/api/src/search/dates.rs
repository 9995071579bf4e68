//! "Days ago" derivation for provider posting dates.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

pub const UNKNOWN_DAYS: &str = "N/A";

const SECONDS_PER_DAY: i64 = 86_400;

/// Date-only layouts accepted for absolute posting dates. Interpreted as UTC midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%m/%d/%Y"];

fn relative_days_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+)\s+day").expect("valid days-ago pattern"))
}

/// Whole days between `posted` and `now`, as a string.
///
/// Accepts relative phrases ("3 days ago") or absolute dates. Anything else,
/// including an empty string, yields "N/A".
pub fn days_ago(posted: &str, now: DateTime<Utc>) -> String {
    let posted = posted.trim();
    if posted.is_empty() {
        return UNKNOWN_DAYS.to_string();
    }

    if let Some(days) = relative_days_pattern()
        .captures(posted)
        .and_then(|caps| caps.get(1))
    {
        return days.as_str().to_string();
    }

    match parse_absolute(posted) {
        Some(at) => (now - at)
            .num_seconds()
            .div_euclid(SECONDS_PER_DAY)
            .to_string(),
        None => UNKNOWN_DAYS.to_string(),
    }
}

fn parse_absolute(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Some(at.with_timezone(&Utc));
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
