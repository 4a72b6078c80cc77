//! Events and colors

use chrono::{NaiveTime, Weekday};
use regex::Regex;
use std::sync::OnceLock;

use super::time::duration;
use super::{Result, WeekgridError};

/// RGB color with channels in `[0, 1]`
///
/// Channels are only reachable through the validating constructors:
///
/// ```compile_fail
/// let c = weekgrid::types::Rgb { r: 2.0, g: 0.0, b: 0.0 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    r: f64,
    g: f64,
    b: f64,
}

/// Green-channel cutoff at or below which a background counts as dark
const DARK_GREEN_THRESHOLD: f64 = 1.0 / 3.0;

const fn rgb(r: f64, g: f64, b: f64) -> Rgb {
    Rgb { r, g, b }
}

impl Rgb {
    pub const BLACK: Rgb = rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = rgb(1.0, 1.0, 1.0);
    pub const GREY: Rgb = rgb(0.8, 0.8, 0.8);

    /// Build a color, rejecting channels outside `[0, 1]` (and NaN).
    pub fn new(r: f64, g: f64, b: f64) -> Result<Self> {
        for c in [r, g, b] {
            if !(0.0..=1.0).contains(&c) {
                return Err(WeekgridError::InvalidColor(format!(
                    "channel {} out of range in ({}, {}, {})",
                    c, r, g, b
                )));
            }
        }
        Ok(rgb(r, g, b))
    }

    pub fn r(self) -> f64 {
        self.r
    }

    pub fn g(self) -> f64 {
        self.g
    }

    pub fn b(self) -> f64 {
        self.b
    }

    /// Parse `#rrggbb` (the `#` and surrounding whitespace are optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(r"^\s*#?\s*([a-fA-F0-9]{2})([a-fA-F0-9]{2})([a-fA-F0-9]{2})\s*$")
                .expect("valid regex")
        });
        let caps = re
            .captures(s)
            .ok_or_else(|| WeekgridError::InvalidColor(format!("{:?}", s)))?;

        let channel = |i: usize| {
            u8::from_str_radix(&caps[i], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|_| WeekgridError::InvalidColor(format!("{:?}", s)))
        };
        Ok(rgb(channel(1)?, channel(2)?, channel(3)?))
    }

    /// Whether text on this background should be drawn light.
    ///
    /// Only the green channel is consulted.
    pub fn is_dark(self) -> bool {
        self.g <= DARK_GREEN_THRESHOLD
    }

    /// Text color for this background: white on dark, black otherwise
    pub fn text_color(self) -> Rgb {
        if self.is_dark() {
            Self::WHITE
        } else {
            Self::BLACK
        }
    }
}

/// Box colors cycled through when events are colored (`--color`)
pub const PALETTE: [Rgb; 10] = [
    Rgb::GREY,
    rgb(1.0, 0.0, 0.0),   // red
    rgb(0.0, 1.0, 0.0),   // green
    rgb(0.0, 0.0, 1.0),   // blue
    rgb(0.0, 1.0, 1.0),   // cyan
    rgb(1.0, 1.0, 0.0),   // yellow
    rgb(0.5, 0.0, 0.5),   // purple
    rgb(1.0, 1.0, 1.0),   // white
    rgb(1.0, 0.5, 0.0),   // orange
    rgb(1.0, 0.0, 1.0),   // magenta
];

/// A recurring block of time on one or more weekdays
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    start_time: NaiveTime,
    end_time: NaiveTime,
    text: Vec<String>,
    color: Rgb,
    days: Vec<Weekday>,
}

impl Event {
    /// Create an event. Fails unless `start_time < end_time`.
    pub fn new(
        start_time: NaiveTime,
        end_time: NaiveTime,
        text: Vec<String>,
        color: Rgb,
        days: impl IntoIterator<Item = Weekday>,
    ) -> Result<Self> {
        if start_time >= end_time {
            return Err(WeekgridError::InvalidEvent(format!(
                "event must start before it ends ({} - {})",
                start_time.format("%H:%M"),
                end_time.format("%H:%M")
            )));
        }

        let mut unique: Vec<Weekday> = Vec::new();
        for day in days {
            if !unique.contains(&day) {
                unique.push(day);
            }
        }

        Ok(Self {
            start_time,
            end_time,
            text,
            color,
            days: unique,
        })
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    /// Text lines, split on explicit line breaks but not wrapped
    pub fn text(&self) -> &[String] {
        &self.text
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    pub fn occurs_on(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Length of the event in hours (always positive)
    pub fn length(&self) -> f64 {
        duration(self.start_time, self.end_time)
    }
}
