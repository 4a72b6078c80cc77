//! Type definitions for weekgrid

mod error;
mod event;
mod geometry;
mod schedule;
mod time;

pub use error::*;
pub use event::*;
pub use geometry::PageBox;
pub use schedule::{DayNames, Schedule};
pub use time::{duration, hours_of, parse_time};
