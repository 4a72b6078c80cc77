//! Drawing surface abstraction
//!
//! The engine only ever talks to a backend through [`DrawingSurface`]. A
//! surface is stateful: font size, colors and dash pattern persist between
//! calls until changed. Coordinates are page-space points with y growing
//! upward.

use std::ops::{Deref, DerefMut};

use crate::types::Rgb;

/// Primitive drawing operations needed to typeset a schedule
pub trait DrawingSurface {
    /// Set the size of the active font, in points
    fn set_font_size(&mut self, size: f64);

    /// Size of the active font, in points
    fn font_size(&self) -> f64;

    /// Width of `text` in the active font
    fn string_width(&self, text: &str) -> f64;

    /// Rectangle with lower-left corner `(x, y)`
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, stroke: bool, fill: bool);

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    /// Draw `text` with its baseline centered on `(x, y)`
    fn draw_centred_string(&mut self, x: f64, y: f64, text: &str);

    /// Draw `text` with its baseline ending at `(x, y)`
    fn draw_right_string(&mut self, x: f64, y: f64, text: &str);

    fn set_stroke_color(&mut self, color: Rgb);

    /// Fill color, also used for text
    fn set_fill_color(&mut self, color: Rgb);

    /// Alternating dash/gap lengths; empty for a solid line
    fn set_dash(&mut self, pattern: &[f64]);
}

/// Temporarily switches a surface to another font size.
///
/// The previous size is restored when the scope is dropped, including during
/// unwinding.
pub struct FontScope<'a, S: DrawingSurface + ?Sized> {
    surface: &'a mut S,
    saved: f64,
}

impl<'a, S: DrawingSurface + ?Sized> FontScope<'a, S> {
    pub fn new(surface: &'a mut S, size: f64) -> Self {
        let saved = surface.font_size();
        surface.set_font_size(size);
        Self { surface, saved }
    }
}

impl<S: DrawingSurface + ?Sized> Deref for FontScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> DerefMut for FontScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> Drop for FontScope<'_, S> {
    fn drop(&mut self) {
        self.surface.set_font_size(self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{DrawOp, RecordingSurface};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_font_scope_restores_size() {
        let mut surface = RecordingSurface::new(10.0);
        {
            let scoped = FontScope::new(&mut surface, 6.0);
            assert_eq!(scoped.font_size(), 6.0);
        }
        assert_eq!(surface.font_size(), 10.0);
        assert_eq!(
            surface.ops(),
            &[DrawOp::SetFontSize(6.0), DrawOp::SetFontSize(10.0)]
        );
    }

    #[test]
    fn test_font_scope_restores_on_panic() {
        let mut surface = RecordingSurface::new(12.0);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut scoped = FontScope::new(&mut surface, 4.0);
            scoped.draw_centred_string(0.0, 0.0, "x");
            panic!("backend failure");
        }));
        assert!(result.is_err());
        assert_eq!(surface.font_size(), 12.0);
    }

    #[test]
    fn test_font_scope_nested() {
        let mut surface = RecordingSurface::new(10.0);
        {
            let mut outer = FontScope::new(&mut surface, 8.0);
            {
                let inner = FontScope::new(&mut *outer, 5.0);
                assert_eq!(inner.font_size(), 5.0);
            }
            assert_eq!(outer.font_size(), 8.0);
        }
        assert_eq!(surface.font_size(), 10.0);
    }
}
