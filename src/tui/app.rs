//! One-shot terminal preview

use std::io;

use ratatui::{
    backend::CrosstermBackend, layout::Position, Frame, Terminal, TerminalOptions, Viewport,
};
use tracing::debug;

use crate::render::{RenderOptions, TimeRange};
use crate::types::Schedule;

use super::theme::Theme;
use super::widgets::preview::SchedulePreview;

/// What the preview draws
pub struct App<'a> {
    schedule: &'a Schedule,
    options: RenderOptions,
    theme: Theme,
}

impl<'a> App<'a> {
    pub fn new(schedule: &'a Schedule, options: RenderOptions, theme: Theme) -> Self {
        Self {
            schedule,
            options,
            theme,
        }
    }

    fn draw(&self, frame: &mut Frame) {
        frame.render_widget(
            SchedulePreview::new(self.schedule, self.options, self.theme),
            frame.area(),
        );
    }
}

/// Print the schedule once below the prompt, sized to the terminal, and
/// return. Nothing waits for input.
///
/// The time range is checked before the terminal is touched so input errors
/// surface as ordinary CLI errors.
pub fn run(schedule: &Schedule, options: RenderOptions) -> anyhow::Result<()> {
    TimeRange::resolve(schedule.all_events(), options.min_time, options.max_time)?;

    let theme = Theme::detect();
    let (width, rows) = crossterm::terminal::size()?;
    // one row stays free for the shell prompt
    let height = rows.saturating_sub(1).max(1);
    debug!(width, height, "preview size");

    let mut terminal = Terminal::with_options(
        CrosstermBackend::new(io::stdout()),
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    )?;
    let app = App::new(schedule, options, theme);
    let area = terminal.draw(|frame| app.draw(frame))?.area;

    terminal.set_cursor_position(Position::new(0, area.bottom().saturating_sub(1)))?;
    terminal.show_cursor()?;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Weekday};
    use ratatui::{backend::TestBackend, buffer::Buffer};

    use crate::types::{Event, Rgb};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn gym_schedule() -> Schedule {
        let mut sched = Schedule::new([Weekday::Mon]);
        sched.add_event(
            Event::new(
                NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                vec!["Gym".into()],
                Rgb::GREY,
                [Weekday::Mon],
            )
            .unwrap(),
        );
        sched
    }

    #[test]
    fn test_draw_fills_frame_with_grid() {
        let sched = gym_schedule();
        let app = App::new(&sched, RenderOptions::default(), Theme::Dark);
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let buf = terminal.backend().buffer();
        let text: String = (0..buf.area.height).map(|y| row_text(buf, y)).collect();
        assert!(text.contains("Monday"));
        assert!(text.contains("Gym"));
    }

    #[test]
    fn test_draw_leaves_no_key_hint() {
        let sched = gym_schedule();
        let app = App::new(&sched, RenderOptions::default(), Theme::Dark);
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let buf = terminal.backend().buffer();
        let text: String = (0..buf.area.height).map(|y| row_text(buf, y)).collect();
        assert!(!text.contains("quit"));
    }
}
