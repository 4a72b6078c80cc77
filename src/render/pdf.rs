//! Single-page PDF backend

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::*;
use std::io::{BufWriter, Write};
use tracing::debug;

use super::metrics::{FontFace, StandardFont};
use super::page::{PageSetup, PageTransform};
use super::surface::DrawingSurface;
use crate::types::{Result, Rgb, WeekgridError};

const LINE_WIDTH: f32 = 1.0;

fn pt(v: f64) -> Mm {
    Mm::from(Pt(v as f32))
}

fn builtin(font: StandardFont) -> BuiltinFont {
    match font {
        StandardFont::Helvetica => BuiltinFont::Helvetica,
        StandardFont::HelveticaBold => BuiltinFont::HelveticaBold,
        StandardFont::HelveticaOblique => BuiltinFont::HelveticaOblique,
        StandardFont::HelveticaBoldOblique => BuiltinFont::HelveticaBoldOblique,
        StandardFont::Courier => BuiltinFont::Courier,
        StandardFont::CourierBold => BuiltinFont::CourierBold,
        StandardFont::CourierOblique => BuiltinFont::CourierOblique,
        StandardFont::CourierBoldOblique => BuiltinFont::CourierBoldOblique,
        StandardFont::TimesRoman => BuiltinFont::TimesRoman,
        StandardFont::TimesBold => BuiltinFont::TimesBold,
        StandardFont::TimesItalic => BuiltinFont::TimesItalic,
        StandardFont::TimesBoldItalic => BuiltinFont::TimesBoldItalic,
        StandardFont::Symbol => BuiltinFont::Symbol,
        StandardFont::ZapfDingbats => BuiltinFont::ZapfDingbats,
    }
}

fn pdf_color(c: Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(c.r() as f32, c.g() as f32, c.b() as f32, None))
}

/// Draws onto one page of a new PDF document in a standard or embedded font
pub struct PdfSurface {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    face: FontFace,
    font_size: f64,
    transform: PageTransform,
}

impl PdfSurface {
    pub fn new(
        title: &str,
        setup: &PageSetup,
        face: FontFace,
        font_size: f64,
        transform: PageTransform,
    ) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(title, pt(setup.width), pt(setup.height), "Schedule");
        let layer = doc.get_page(page).get_layer(layer);

        let font = match &face {
            FontFace::Standard(font) => doc.add_builtin_font(builtin(*font)),
            FontFace::TrueType(font) => doc.add_external_font(font.data()),
        }
        .map_err(|e| WeekgridError::Pdf(format!("{}: {}", face.name(), e)))?;

        layer.set_outline_thickness(LINE_WIDTH * transform.length(1.0) as f32);
        debug!(font = face.name(), font_size, "created pdf page");

        Ok(Self {
            doc,
            layer,
            font,
            face,
            font_size,
            transform,
        })
    }

    /// Serialize the document
    pub fn save<W: Write>(self, writer: W) -> Result<()> {
        let mut writer = BufWriter::new(writer);
        self.doc
            .save(&mut writer)
            .map_err(|e| WeekgridError::Pdf(e.to_string()))?;
        writer.flush()?;
        Ok(())
    }

    fn point(&self, x: f64, y: f64) -> Point {
        let (x, y) = self.transform.point(x, y);
        Point::new(pt(x), pt(y))
    }

    fn text_at(&self, x: f64, y: f64, text: &str) {
        let (x, y) = self.transform.point(x, y);
        let size = self.transform.length(self.font_size) as f32;
        self.layer.use_text(text, size, pt(x), pt(y), &self.font);
    }
}

impl DrawingSurface for PdfSurface {
    fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }

    fn font_size(&self) -> f64 {
        self.font_size
    }

    fn string_width(&self, text: &str) -> f64 {
        self.face.string_width(text, self.font_size)
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, stroke: bool, fill: bool) {
        let ring = vec![
            (self.point(x, y), false),
            (self.point(x + width, y), false),
            (self.point(x + width, y + height), false),
            (self.point(x, y + height), false),
        ];
        let mode = match (stroke, fill) {
            (true, true) => PaintMode::FillStroke,
            (false, true) => PaintMode::Fill,
            (true, false) => PaintMode::Stroke,
            (false, false) => return,
        };
        self.layer.add_polygon(Polygon {
            rings: vec![ring],
            mode,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let line = Line {
            points: vec![(self.point(x1, y1), false), (self.point(x2, y2), false)],
            is_closed: false,
        };
        self.layer.add_line(line);
    }

    fn draw_centred_string(&mut self, x: f64, y: f64, text: &str) {
        let width = self.string_width(text);
        self.text_at(x - width / 2.0, y, text);
    }

    fn draw_right_string(&mut self, x: f64, y: f64, text: &str) {
        let width = self.string_width(text);
        self.text_at(x - width, y, text);
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.layer.set_outline_color(pdf_color(color));
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.layer.set_fill_color(pdf_color(color));
    }

    fn set_dash(&mut self, pattern: &[f64]) {
        let mut lengths = pattern
            .iter()
            .map(|&l| (self.transform.length(l).round() as i64).max(1));
        let dash = LineDashPattern {
            dash_1: lengths.next(),
            gap_1: lengths.next(),
            dash_2: lengths.next(),
            gap_2: lengths.next(),
            dash_3: lengths.next(),
            gap_3: lengths.next(),
            ..Default::default()
        };
        self.layer.set_line_dash_pattern(dash);
    }
}
