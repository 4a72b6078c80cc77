//! In-memory surface that records every call

use super::metrics::FontFace;
use super::surface::DrawingSurface;
use crate::types::Rgb;

/// One call made against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    SetFontSize(f64),
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        stroke: bool,
        fill: bool,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    CentredString {
        x: f64,
        y: f64,
        text: String,
    },
    RightString {
        x: f64,
        y: f64,
        text: String,
    },
    StrokeColor(Rgb),
    FillColor(Rgb),
    Dash(Vec<f64>),
}

/// Surface that draws nothing and keeps an ordered log of calls.
///
/// String widths come from the built-in font tables, so layouts computed
/// against it match the PDF backend.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    face: FontFace,
    font_size: f64,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(font_size: f64) -> Self {
        Self::with_face(FontFace::default(), font_size)
    }

    pub fn with_face(face: FontFace, font_size: f64) -> Self {
        Self {
            face,
            font_size,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Text drawn with [`DrawingSurface::draw_centred_string`], in order
    pub fn centred_strings(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::CentredString { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
        self.ops.push(DrawOp::SetFontSize(size));
    }

    fn font_size(&self) -> f64 {
        self.font_size
    }

    fn string_width(&self, text: &str) -> f64 {
        self.face.string_width(text, self.font_size)
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, stroke: bool, fill: bool) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            stroke,
            fill,
        });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.ops.push(DrawOp::Line { x1, y1, x2, y2 });
    }

    fn draw_centred_string(&mut self, x: f64, y: f64, text: &str) {
        self.ops.push(DrawOp::CentredString {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn draw_right_string(&mut self, x: f64, y: f64, text: &str) {
        self.ops.push(DrawOp::RightString {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.ops.push(DrawOp::StrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.ops.push(DrawOp::FillColor(color));
    }

    fn set_dash(&mut self, pattern: &[f64]) {
        self.ops.push(DrawOp::Dash(pattern.to_vec()));
    }
}
