//! Schedule layout and rendering
//!
//! [`Schedule::render`] draws one week grid into a [`PageBox`] on any
//! [`DrawingSurface`]. Drawing order is fixed: border, day headers, header
//! rule, dashed hour lines, day separators, hour labels, then events column
//! by column in insertion order.

pub mod layout;
pub mod metrics;
pub mod page;
pub mod pdf;
pub mod recording;
pub mod surface;
pub mod text;

pub use layout::{FittedText, GridLayout, TimeRange, TypeScale};
pub use metrics::{FontFace, StandardFont, TrueTypeFont};
pub use page::{PageSetup, PageTransform};
pub use pdf::PdfSurface;
pub use recording::{DrawOp, RecordingSurface};
pub use surface::{DrawingSurface, FontScope};

use tracing::{debug, warn};

use crate::types::{Event, PageBox, Result, Rgb, Schedule};
use layout::hour_label;

/// Dash pattern for hour lines
const HOUR_LINE_DASH: [f64; 1] = [2.0];

/// Display options for a render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Label each hour line at the left of the grid
    pub show_times: bool,
    /// Top of the grid in fractional hours; derived from events if unset
    pub min_time: Option<f64>,
    /// Bottom of the grid in fractional hours; derived from events if unset
    pub max_time: Option<f64>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_times: true,
            min_time: None,
            max_time: None,
        }
    }
}

impl Schedule {
    /// Draw the schedule into `area`, returning the geometry used.
    ///
    /// Fails before drawing anything if the time range cannot be resolved.
    /// The surface is left at `font_size` with a solid dash.
    pub fn render<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        area: PageBox,
        font_size: f64,
        options: &RenderOptions,
    ) -> Result<GridLayout> {
        let layout = GridLayout::compute(self, surface, area, font_size, options)?;

        surface.set_stroke_color(Rgb::BLACK);
        surface.set_fill_color(Rgb::BLACK);
        self.draw_chrome(surface, &layout, options);

        surface.set_font_size(font_size);
        for (i, &day) in self.days().iter().enumerate() {
            for event in self.events_on_day(day) {
                draw_event(surface, &layout, i, event);
            }
        }

        let orphans = self
            .all_events()
            .iter()
            .filter(|e| !e.days().iter().any(|d| self.days().contains(d)))
            .count();
        if orphans > 0 {
            warn!(count = orphans, "events fall on no displayed day and were skipped");
        }

        Ok(layout)
    }

    fn draw_chrome<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        layout: &GridLayout,
        options: &RenderOptions,
    ) {
        let area = &layout.area;
        let body = &layout.body;
        let scale = &layout.scale;

        // Border around headers and body
        surface.rect(body.ulx, body.lry(), body.width, area.height, true, false);

        surface.set_font_size(scale.header_size);
        for (i, name) in self.day_names().enumerate() {
            surface.draw_centred_string(
                body.ulx + layout.day_width * (i as f64 + 0.5),
                area.uly - scale.line_height,
                &name,
            );
        }

        surface.line(body.ulx, body.uly, body.lrx(), body.uly);

        surface.set_dash(&HOUR_LINE_DASH);
        for &hour in &layout.hours {
            let y = layout.hour_y(hour as f64);
            surface.line(body.ulx, y, body.lrx(), y);
        }

        surface.set_dash(&[]);
        for i in 1..self.number_of_days() {
            let x = layout.column_x(i);
            surface.line(x, area.uly, x, area.lry());
        }

        if options.show_times {
            surface.set_font_size(scale.time_size);
            for &hour in &layout.hours {
                surface.draw_right_string(
                    body.ulx - layout.time_gap,
                    layout.hour_y(hour as f64) - scale.time_size / 2.0,
                    &hour_label(hour),
                );
            }
        }
    }
}

fn draw_event<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    layout: &GridLayout,
    column: usize,
    event: &Event,
) {
    let Some(ebox) = layout.event_box(column, event) else {
        debug!(column, "event outside the time range; skipped");
        return;
    };
    let color = event.color();

    surface.set_stroke_color(Rgb::BLACK);
    surface.set_fill_color(color);
    let (x, y, width, height) = ebox.rect();
    surface.rect(x, y, width, height, true, true);
    surface.set_fill_color(color.text_color());

    if !(ebox.height > 0.0) {
        warn!(column, height = ebox.height, "event box has no height; text skipped");
        return;
    }

    let lines = text::wrap_lines(event.text(), layout.wrap_columns);
    let fitted = FittedText::fit(lines, ebox.height, &layout.scale);
    if fitted.shrunk {
        debug!(
            column,
            lines = fitted.lines.len(),
            font_size = fitted.font_size,
            "shrinking event text to fit"
        );
        let mut scoped = FontScope::new(surface, fitted.font_size);
        draw_lines(&mut *scoped, &ebox, &fitted);
    } else {
        draw_lines(surface, &ebox, &fitted);
    }
}

fn draw_lines<S: DrawingSurface + ?Sized>(surface: &mut S, ebox: &PageBox, fitted: &FittedText) {
    let cx = ebox.ulx + ebox.width / 2.0;
    for (line, y) in fitted.lines.iter().zip(fitted.baselines(ebox)) {
        surface.draw_centred_string(cx, y, line);
    }
}
