use chrono::{Datelike, NaiveDate};

use crate::types::Track;

pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Name of the month playlist that `date` falls into, e.g. `"january"`.
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Name of the year archive that `date` falls into, e.g. `"2024"`.
pub fn year_name(date: NaiveDate) -> String {
    date.year().to_string()
}

/// Returns the 1-based month number for a month playlist name.
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| *m == name)
        .map(|i| i as u32 + 1)
}

/// Whether a playlist name is one the rotation manages (a month or a year).
pub fn is_rotation_name(name: &str) -> bool {
    month_number(name).is_some() || (name.len() == 4 && name.chars().all(|c| c.is_ascii_digit()))
}

/// Parses a `YYYY-MM-DD` date argument.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("expected a date like 2024-02-01: {}", e))
}

pub fn describe_track(track: &Track) -> String {
    format!("{} by {}", track.name, track.artist)
}
