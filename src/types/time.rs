//! Time-of-day helpers
//!
//! All layout arithmetic works on fractional hours since midnight.

use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::OnceLock;

use super::{Result, WeekgridError};

/// Convert a time of day to fractional hours since midnight.
///
/// # Examples
/// ```
/// use chrono::NaiveTime;
/// use weekgrid::types::hours_of;
///
/// let t = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
/// assert_eq!(hours_of(t), 9.5);
/// ```
pub fn hours_of(time: NaiveTime) -> f64 {
    let seconds = time.second() as f64 + time.nanosecond() as f64 / 1_000_000_000.0;
    time.hour() as f64 + (time.minute() as f64 + seconds / 60.0) / 60.0
}

/// Hours elapsed from `start` to `end`. Negative if `end` comes first.
pub fn duration(start: NaiveTime, end: NaiveTime) -> f64 {
    hours_of(end) - hours_of(start)
}

fn time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9]{1,2})(?:[:.]?([0-9]{2}))?$").expect("time pattern is valid")
    })
}

/// Parse a time of day such as `9`, `09:30`, `9.30` or `930`.
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    let trimmed = s.trim();
    let invalid = || WeekgridError::InvalidTime(format!("{:?}", s));

    let caps = time_regex().captures(trimmed).ok_or_else(invalid)?;
    let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().map_err(|_| invalid())?,
        None => 0,
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}
