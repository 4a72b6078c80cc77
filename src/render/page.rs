//! Page presets and the optional scale-down transform

use crate::types::PageBox;

/// Points per inch
pub const INCH: f64 = 72.0;

/// US Letter, in points
const LETTER: (f64, f64) = (8.5 * INCH, 11.0 * INCH);

/// Physical page and the margin the schedule is inset by
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl PageSetup {
    pub fn letter_landscape() -> Self {
        Self {
            width: LETTER.1,
            height: LETTER.0,
            margin: INCH,
        }
    }

    pub fn letter_portrait() -> Self {
        Self {
            width: LETTER.0,
            height: LETTER.1,
            margin: INCH,
        }
    }

    pub fn letter(portrait: bool) -> Self {
        if portrait {
            Self::letter_portrait()
        } else {
            Self::letter_landscape()
        }
    }

    /// Area inside the margins, anchored at the top-left margin corner
    pub fn content_area(&self) -> PageBox {
        PageBox::new(
            self.margin,
            self.height - self.margin,
            self.width - 2.0 * self.margin,
            self.height - 2.0 * self.margin,
        )
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::letter_landscape()
    }
}

/// Uniform scale about the page center, applied by backends on output.
///
/// A `scale` of 2 draws everything at half size, centered on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTransform {
    factor: f64,
    dx: f64,
    dy: f64,
}

impl PageTransform {
    pub fn identity() -> Self {
        Self {
            factor: 1.0,
            dx: 0.0,
            dy: 0.0,
        }
    }

    /// Scale down by `scale` (`None` or a non-positive value means no scaling)
    pub fn scaled(setup: &PageSetup, scale: Option<f64>) -> Self {
        match scale {
            Some(s) if s > 0.0 && s.is_finite() => {
                let factor = 1.0 / s;
                Self {
                    factor,
                    dx: (1.0 - factor) * setup.width / 2.0,
                    dy: (1.0 - factor) * setup.height / 2.0,
                }
            }
            _ => Self::identity(),
        }
    }

    pub fn point(&self, x: f64, y: f64) -> (f64, f64) {
        (self.dx + self.factor * x, self.dy + self.factor * y)
    }

    /// Scale a length (widths, font sizes, dash lengths)
    pub fn length(&self, len: f64) -> f64 {
        self.factor * len
    }
}

impl Default for PageTransform {
    fn default() -> Self {
        Self::identity()
    }
}
