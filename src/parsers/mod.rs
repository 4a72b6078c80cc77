//! Event file parsing: day expressions and the YAML event list

pub mod days;
pub mod events;

pub use days::{parse_days, week, FULL_WEEK, FULL_WEEK_MON, WEEKDAYS};
pub use events::read_events;

use crate::types::{Rgb, PALETTE};

/// Fill colors handed out to events without an explicit color
pub fn palette(colorful: bool) -> &'static [Rgb] {
    if colorful {
        &PALETTE
    } else {
        std::slice::from_ref(&PALETTE[0])
    }
}
