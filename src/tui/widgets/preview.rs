//! Schedule preview widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use tracing::warn;

use crate::render::RenderOptions;
use crate::tui::surface::TerminalSurface;
use crate::tui::theme::Theme;
use crate::types::Schedule;

/// Font size at which one text line is one terminal row
pub const PREVIEW_FONT_SIZE: f64 = 10.0;

/// Draws a schedule grid filling the widget area
pub struct SchedulePreview<'a> {
    schedule: &'a Schedule,
    options: RenderOptions,
    theme: Theme,
}

impl<'a> SchedulePreview<'a> {
    pub fn new(schedule: &'a Schedule, options: RenderOptions, theme: Theme) -> Self {
        Self {
            schedule,
            options,
            theme,
        }
    }
}

impl Widget for SchedulePreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let page_area = TerminalSurface::page_area(area);
        let result = {
            let mut surface = TerminalSurface::new(buf, area, self.theme);
            self.schedule
                .render(&mut surface, page_area, PREVIEW_FONT_SIZE, &self.options)
        };

        if let Err(e) = result {
            warn!(error = %e, "preview render failed");
            buf.set_stringn(
                area.x,
                area.y,
                e.to_string(),
                area.width as usize,
                Style::default().fg(Color::Red),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Event, Rgb};
    use chrono::{NaiveTime, Weekday};

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn schedule() -> Schedule {
        let mut sched = Schedule::new([Weekday::Mon, Weekday::Tue]);
        sched.add_event(
            Event::new(
                NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
                vec!["Math".into()],
                Rgb::new(0.0, 0.0, 1.0).unwrap(),
                [Weekday::Mon],
            )
            .unwrap(),
        );
        sched
    }

    #[test]
    fn test_preview_draws_headers_and_event() {
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        let sched = schedule();
        SchedulePreview::new(&sched, RenderOptions::default(), Theme::Dark).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Monday"));
        assert!(text.contains("Tuesday"));
        assert!(text.contains("Math"));
        assert!(text.contains("10:00"));
    }

    #[test]
    fn test_preview_event_background_uses_event_color() {
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        let sched = schedule();
        SchedulePreview::new(&sched, RenderOptions::default(), Theme::Dark).render(area, &mut buf);

        let blue = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .filter(|&(x, y)| buf[(x, y)].bg == Color::Rgb(0, 0, 255))
            .count();
        assert!(blue > 0);
    }

    #[test]
    fn test_preview_reports_errors_inline() {
        let area = Rect::new(0, 0, 60, 5);
        let mut buf = Buffer::empty(area);
        let sched = Schedule::new([Weekday::Mon]);
        SchedulePreview::new(&sched, RenderOptions::default(), Theme::Dark).render(area, &mut buf);

        assert!(buffer_text(&buf).contains("no events"));
    }
}
