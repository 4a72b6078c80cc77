//! Drawing surface backed by a ratatui buffer
//!
//! Page space is mapped onto terminal cells at a fixed size per cell, so one
//! line of 10pt text is one row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

use super::theme::Theme;
use crate::render::DrawingSurface;
use crate::types::{PageBox, Rgb};

/// Width of one terminal cell in points
pub const CELL_WIDTH_PT: f64 = 6.0;
/// Height of one terminal cell in points
pub const CELL_HEIGHT_PT: f64 = 12.0;

const H_SOLID: &str = "─";
const H_DASHED: &str = "┄";
const V_SOLID: &str = "│";
const V_DASHED: &str = "┆";
const CROSS: &str = "┼";

fn term_color(c: Rgb) -> Color {
    let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::Rgb(byte(c.r()), byte(c.g()), byte(c.b()))
}

/// Renders drawing calls into the cells of `area`
pub struct TerminalSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    theme: Theme,
    font_size: f64,
    stroke: Rgb,
    fill: Rgb,
    dashed: bool,
}

impl<'a> TerminalSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect, theme: Theme) -> Self {
        Self {
            buf,
            area,
            theme,
            font_size: 10.0,
            stroke: Rgb::BLACK,
            fill: Rgb::BLACK,
            dashed: false,
        }
    }

    /// Page-space box covering `area`, origin at its bottom-left cell
    pub fn page_area(area: Rect) -> PageBox {
        let height = area.height as f64 * CELL_HEIGHT_PT;
        PageBox::new(0.0, height, area.width as f64 * CELL_WIDTH_PT, height)
    }

    fn col(&self, x: f64) -> u16 {
        let c = (x / CELL_WIDTH_PT).floor();
        let max = self.area.width.saturating_sub(1) as f64;
        self.area.x + c.clamp(0.0, max) as u16
    }

    fn row(&self, y: f64) -> u16 {
        let top = self.area.height as f64 * CELL_HEIGHT_PT;
        let r = ((top - y) / CELL_HEIGHT_PT).floor();
        let max = self.area.height.saturating_sub(1) as f64;
        self.area.y + r.clamp(0.0, max) as u16
    }

    /// Foreground for `color` over a cell whose background is `bg`.
    ///
    /// Black ink on the bare terminal background follows the theme instead.
    fn ink(&self, color: Rgb, bg: Color) -> Color {
        if color == Rgb::BLACK && bg == Color::Reset {
            self.theme.ink()
        } else {
            term_color(color)
        }
    }

    fn put_line_symbol(&mut self, x: u16, y: u16, symbol: &'static str, horizontal: bool) {
        let Some(bg) = self.buf.cell((x, y)).map(|c| c.bg) else {
            return;
        };
        let fg = if self.dashed && bg == Color::Reset {
            self.theme.muted()
        } else {
            self.ink(self.stroke, bg)
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            let crossing = if horizontal {
                matches!(cell.symbol(), V_SOLID | V_DASHED | CROSS)
            } else {
                matches!(cell.symbol(), H_SOLID | H_DASHED | CROSS)
            };
            cell.set_symbol(if crossing { CROSS } else { symbol });
            cell.set_fg(fg);
        }
    }

    fn hline(&mut self, x1: f64, x2: f64, y: f64) {
        let symbol = if self.dashed { H_DASHED } else { H_SOLID };
        let row = self.row(y);
        for col in self.col(x1.min(x2))..=self.col(x1.max(x2)) {
            self.put_line_symbol(col, row, symbol, true);
        }
    }

    fn vline(&mut self, x: f64, y1: f64, y2: f64) {
        let symbol = if self.dashed { V_DASHED } else { V_SOLID };
        let col = self.col(x);
        for row in self.row(y1.max(y2))..=self.row(y1.min(y2)) {
            self.put_line_symbol(col, row, symbol, false);
        }
    }

    /// Write `text` starting at page x (possibly left of the area)
    fn text_from(&mut self, x: f64, y: f64, text: &str) {
        let row = self.row(y + self.font_size / 3.0);
        let start = (x / CELL_WIDTH_PT).round() as i64;
        let mut chars = text.chars();
        // Clip on the left edge
        let skip = (-start).max(0) as usize;
        let start = start.max(0) as u16;
        if skip > 0 {
            chars.nth(skip - 1);
        }
        let visible: String = chars.collect();
        let col = self.area.x + start;
        let right = self.area.x + self.area.width;
        if col >= right {
            return;
        }
        let bg = self.buf.cell((col, row)).map_or(Color::Reset, |c| c.bg);
        let style = Style::default().fg(self.ink(self.fill, bg));
        self.buf
            .set_stringn(col, row, visible, (right - col) as usize, style);
    }
}

impl DrawingSurface for TerminalSurface<'_> {
    fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }

    fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Every character takes one cell regardless of font size
    fn string_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * CELL_WIDTH_PT
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, stroke: bool, fill: bool) {
        if fill {
            let bg = term_color(self.fill);
            let (left, right) = (self.col(x), self.col(x + width));
            let (top, bottom) = (self.row(y + height), self.row(y));
            for row in top..=bottom {
                for col in left..=right {
                    if let Some(cell) = self.buf.cell_mut((col, row)) {
                        cell.set_bg(bg);
                    }
                }
            }
        }
        if stroke {
            self.hline(x, x + width, y + height);
            self.hline(x, x + width, y);
            self.vline(x, y, y + height);
            self.vline(x + width, y, y + height);
        }
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        if (y1 - y2).abs() < f64::EPSILON {
            self.hline(x1, x2, y1);
        } else if (x1 - x2).abs() < f64::EPSILON {
            self.vline(x1, y1, y2);
        }
        // Diagonals have no cell representation
    }

    fn draw_centred_string(&mut self, x: f64, y: f64, text: &str) {
        let width = self.string_width(text);
        self.text_from(x - width / 2.0, y, text);
    }

    fn draw_right_string(&mut self, x: f64, y: f64, text: &str) {
        let width = self.string_width(text);
        self.text_from(x - width, y, text);
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.stroke = color;
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.fill = color;
    }

    fn set_dash(&mut self, pattern: &[f64]) {
        self.dashed = !pattern.is_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_page_area_matches_cells() {
        let area = TerminalSurface::page_area(Rect::new(0, 0, 10, 5));
        assert_eq!(area, PageBox::new(0.0, 60.0, 60.0, 60.0));
    }

    #[test]
    fn test_horizontal_lines_solid_and_dashed() {
        let rect = Rect::new(0, 0, 5, 3);
        let mut buf = Buffer::empty(rect);
        {
            let mut s = TerminalSurface::new(&mut buf, rect, Theme::Dark);
            s.line(0.0, 30.0, 29.0, 30.0);
            s.set_dash(&[2.0]);
            s.line(0.0, 6.0, 29.0, 6.0);
        }
        assert_eq!(row_text(&buf, 0), "─────");
        assert_eq!(row_text(&buf, 2), "┄┄┄┄┄");
    }

    #[test]
    fn test_crossing_lines() {
        let rect = Rect::new(0, 0, 5, 3);
        let mut buf = Buffer::empty(rect);
        {
            let mut s = TerminalSurface::new(&mut buf, rect, Theme::Dark);
            s.line(0.0, 18.0, 29.0, 18.0);
            s.line(12.0, 0.0, 12.0, 36.0);
        }
        assert_eq!(row_text(&buf, 1), "──┼──");
        assert_eq!(buf[(2, 0)].symbol(), "│");
    }

    #[test]
    fn test_centred_text_and_fill_color() {
        let rect = Rect::new(0, 0, 9, 2);
        let mut buf = Buffer::empty(rect);
        {
            let mut s = TerminalSurface::new(&mut buf, rect, Theme::Dark);
            s.set_fill_color(Rgb::WHITE);
            s.draw_centred_string(27.0, 14.0, "Mon");
        }
        assert_eq!(row_text(&buf, 0), "   Mon   ");
        assert_eq!(buf[(3, 0)].fg, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_black_ink_follows_theme() {
        let rect = Rect::new(0, 0, 6, 1);
        let mut buf = Buffer::empty(rect);
        {
            let mut s = TerminalSurface::new(&mut buf, rect, Theme::Light);
            s.set_fill_color(Rgb::BLACK);
            s.draw_centred_string(18.0, 2.0, "Tue");
        }
        assert_eq!(buf[(2, 0)].fg, Color::Black);

        let mut buf = Buffer::empty(rect);
        {
            let mut s = TerminalSurface::new(&mut buf, rect, Theme::Dark);
            s.set_fill_color(Rgb::BLACK);
            s.draw_centred_string(18.0, 2.0, "Tue");
        }
        assert_eq!(buf[(2, 0)].fg, Color::White);
    }

    #[test]
    fn test_text_clipped_at_edges() {
        let rect = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(rect);
        {
            let mut s = TerminalSurface::new(&mut buf, rect, Theme::Dark);
            s.draw_right_string(12.0, 2.0, "10:00");
        }
        assert_eq!(row_text(&buf, 0), "00  ");
    }

    #[test]
    fn test_filled_rect_sets_background() {
        let rect = Rect::new(0, 0, 6, 4);
        let mut buf = Buffer::empty(rect);
        {
            let mut s = TerminalSurface::new(&mut buf, rect, Theme::Dark);
            s.set_fill_color(Rgb::new(1.0, 0.0, 0.0).unwrap());
            s.rect(6.0, 12.0, 18.0, 24.0, false, true);
        }
        assert_eq!(buf[(2, 2)].bg, Color::Rgb(255, 0, 0));
        assert_eq!(buf[(5, 0)].bg, Color::Reset);
    }
}
