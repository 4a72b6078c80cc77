//! YAML event file reader

use crate::types::{parse_time, Event, Result, Rgb, WeekgridError};
use serde::Deserialize;
use tracing::{debug, warn};

use super::days::parse_days;

/// One entry of the event list, as written by the user
#[derive(Deserialize)]
struct RawEvent {
    #[serde(default)]
    name: Option<String>,
    days: String,
    time: String,
    #[serde(default)]
    color: Option<String>,
}

/// Read a YAML list of events. JSON input is accepted too, being valid YAML.
///
/// Entries without a `color` take `palette[i % palette.len()]`, where `i` is
/// the entry's position in the list. An empty palette falls back to grey.
pub fn read_events(input: &str, palette: &[Rgb]) -> Result<Vec<Event>> {
    let value: serde_yaml::Value = serde_yaml::from_str(input)
        .map_err(|e| WeekgridError::Parse(format!("invalid YAML: {}", e)))?;
    let serde_yaml::Value::Sequence(entries) = value else {
        return Err(WeekgridError::Parse("input must be a YAML list".into()));
    };

    let events = entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let fallback = palette
                .get(i % palette.len().max(1))
                .copied()
                .unwrap_or(Rgb::GREY);
            convert_entry(entry, fallback).map_err(|e| {
                WeekgridError::Parse(format!("event #{}: {}", i + 1, detail(&e)))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(count = events.len(), "read events");
    Ok(events)
}

fn convert_entry(entry: serde_yaml::Value, fallback: Rgb) -> Result<Event> {
    let raw: RawEvent =
        serde_yaml::from_value(entry).map_err(|e| WeekgridError::Parse(e.to_string()))?;

    let (start, end) = raw
        .time
        .split_once('-')
        .ok_or_else(|| WeekgridError::InvalidTime(format!("{:?}", raw.time)))?;
    let start = parse_time(start.trim())?;
    let end = parse_time(end.trim())?;

    let color = match raw.color.as_deref() {
        Some(hex) => Rgb::from_hex(hex)?,
        None => fallback,
    };

    let days = parse_days(&raw.days);
    if days.is_empty() {
        warn!(days = %raw.days, "no weekday recognized; event will not be drawn");
    }

    let text: Vec<String> = raw
        .name
        .as_deref()
        .map(|n| split_lines(n).map(str::to_string).collect())
        .unwrap_or_default();

    Event::new(start, end, text, color, days)
}

/// Split on every line boundary Unicode recognizes, treating `\r\n` as one.
/// A trailing boundary does not produce an empty last line.
fn split_lines(s: &str) -> impl Iterator<Item = &str> {
    let mut rest = s;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(at) = rest.find(is_line_break) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..at];
        let tail = &rest[at..];
        let skip = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(0, char::len_utf8)
        };
        rest = &tail[skip..];
        Some(line)
    })
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Inner message without a nested `parse error:` prefix
fn detail(err: &WeekgridError) -> String {
    match err {
        WeekgridError::Parse(msg) => msg.clone(),
        other => other.to_string(),
    }
}
