//! Grid geometry
//!
//! Everything here is pure arithmetic on the schedule, the target area and
//! the font size. The only surface interaction is measuring time labels.

use tracing::debug;

use super::surface::DrawingSurface;
use super::RenderOptions;
use crate::types::{hours_of, Event, PageBox, Result, Schedule, WeekgridError};

/// Assumed average glyph width as a fraction of the font size
pub const EM: f64 = 0.6;

/// Line height as a multiple of the font size
pub const LEADING: f64 = 1.2;

/// Padding added before the earliest start and after the latest end
const RANGE_PADDING_HOURS: f64 = 0.5;

/// Visible span of the day in fractional hours
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub min: f64,
    pub max: f64,
}

impl TimeRange {
    /// Use explicit bounds where given, otherwise pad the events' extent by
    /// half an hour, clamped to the day.
    pub fn resolve(events: &[Event], min_time: Option<f64>, max_time: Option<f64>) -> Result<Self> {
        let min = match min_time {
            Some(min) => min,
            None => {
                let earliest = events
                    .iter()
                    .map(|e| hours_of(e.start_time()))
                    .reduce(f64::min)
                    .ok_or(WeekgridError::EmptySchedule)?;
                (earliest - RANGE_PADDING_HOURS).max(0.0)
            }
        };
        let max = match max_time {
            Some(max) => max,
            None => {
                let latest = events
                    .iter()
                    .map(|e| hours_of(e.end_time()))
                    .reduce(f64::max)
                    .ok_or(WeekgridError::EmptySchedule)?;
                (latest + RANGE_PADDING_HOURS).min(24.0)
            }
        };

        // Also rejects NaN bounds
        if !(min < max) {
            return Err(WeekgridError::InvalidTimeRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whole hours strictly inside the range that get a grid line and label
    pub fn hour_lines(&self) -> Vec<i32> {
        let first = self.min.floor() as i32 + 1;
        let end = self.max.ceil() as i32;
        (first..end).collect()
    }
}

/// Font sizes derived from the base size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeScale {
    pub font_size: f64,
    pub line_height: f64,
    /// Day header text
    pub header_size: f64,
    /// Height of the day header row
    pub day_height: f64,
    /// Hour labels
    pub time_size: f64,
}

impl TypeScale {
    pub fn new(font_size: f64) -> Self {
        let header_size = font_size * LEADING;
        Self {
            font_size,
            line_height: font_size * LEADING,
            header_size,
            day_height: header_size * LEADING,
            time_size: font_size / LEADING,
        }
    }
}

/// Resolved geometry for one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// Everything drawn stays inside this box
    pub area: PageBox,
    /// Day columns below the header row, right of the time labels
    pub body: PageBox,
    pub range: TimeRange,
    pub hours: Vec<i32>,
    pub scale: TypeScale,
    /// Space between hour labels and the grid
    pub time_gap: f64,
    /// Width reserved for hour labels (zero when hidden)
    pub time_width: f64,
    pub hour_height: f64,
    pub day_width: f64,
    /// Characters per wrapped line of event text
    pub wrap_columns: usize,
}

impl GridLayout {
    /// Leaves the surface's font at the hour-label size.
    pub fn compute<S: DrawingSurface + ?Sized>(
        schedule: &Schedule,
        surface: &mut S,
        area: PageBox,
        font_size: f64,
        options: &RenderOptions,
    ) -> Result<Self> {
        let range = TimeRange::resolve(schedule.all_events(), options.min_time, options.max_time)?;
        let hours = range.hour_lines();
        let scale = TypeScale::new(font_size);

        surface.set_font_size(scale.time_size);
        let time_gap = 0.2 * surface.string_width(":00");
        let time_width = if options.show_times {
            let widest = hours
                .iter()
                .map(|h| surface.string_width(&hour_label(*h)))
                .fold(0.0, f64::max);
            time_gap + widest
        } else {
            0.0
        };

        let body = PageBox::new(
            area.ulx + time_width,
            area.uly - scale.day_height,
            area.width - time_width,
            area.height - scale.day_height,
        );
        let hour_height = body.height / range.span();
        let day_width = body.width / schedule.number_of_days() as f64;
        let wrap_columns = (day_width / (font_size * EM)).floor().max(0.0) as usize;

        debug!(
            min_time = range.min,
            max_time = range.max,
            hour_lines = hours.len(),
            hour_height,
            day_width,
            wrap_columns,
            "computed grid layout"
        );

        Ok(Self {
            area,
            body,
            range,
            hours,
            scale,
            time_gap,
            time_width,
            hour_height,
            day_width,
            wrap_columns,
        })
    }

    /// Page y coordinate of a time of day (fractional hours)
    pub fn hour_y(&self, hour: f64) -> f64 {
        self.body.uly - (hour - self.range.min) * self.hour_height
    }

    /// Left edge of the `index`-th day column
    pub fn column_x(&self, index: usize) -> f64 {
        self.body.ulx + self.day_width * index as f64
    }

    /// Box occupied by `event` in the `column`-th day column.
    ///
    /// The box is clipped to the time range; `None` if nothing of the event
    /// falls inside it.
    pub fn event_box(&self, column: usize, event: &Event) -> Option<PageBox> {
        let start = hours_of(event.start_time()).max(self.range.min);
        let end = (hours_of(event.start_time()) + event.length()).min(self.range.max);
        if end <= start {
            return None;
        }
        Some(PageBox::new(
            self.column_x(column),
            self.hour_y(start),
            self.day_width,
            (end - start) * self.hour_height,
        ))
    }
}

/// Label drawn beside an hour line, e.g. `9:00`
pub fn hour_label(hour: i32) -> String {
    format!("{}:00", hour)
}

/// Event text after wrapping and shrink-to-fit
#[derive(Debug, Clone, PartialEq)]
pub struct FittedText {
    pub lines: Vec<String>,
    pub font_size: f64,
    pub line_height: f64,
    /// Whether `font_size` is smaller than the base size
    pub shrunk: bool,
}

impl FittedText {
    /// Shrink the font just enough for `lines` to fit `box_height`, if needed.
    pub fn fit(lines: Vec<String>, box_height: f64, scale: &TypeScale) -> Self {
        let n = lines.len() as f64;
        if n * scale.line_height > box_height {
            let font_size = box_height / n / LEADING;
            Self {
                lines,
                font_size,
                line_height: font_size * LEADING,
                shrunk: true,
            }
        } else {
            Self {
                lines,
                font_size: scale.font_size,
                line_height: scale.line_height,
                shrunk: false,
            }
        }
    }

    /// Baselines for each line, centering the block vertically in `ebox`
    pub fn baselines(&self, ebox: &PageBox) -> Vec<f64> {
        let n = self.lines.len() as f64;
        let top = ebox.lry() + ebox.height / 2.0 + n * self.line_height / 2.0 + self.font_size / 3.0;
        (1..=self.lines.len())
            .map(|i| top - i as f64 * self.line_height)
            .collect()
    }
}
