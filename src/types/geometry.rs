//! Axis-aligned page rectangles

/// Rectangle anchored at its upper-left corner.
///
/// Coordinates are page space with y growing toward the top of the page
/// (PDF convention), so the lower edge sits at `uly - height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBox {
    pub ulx: f64,
    pub uly: f64,
    pub width: f64,
    pub height: f64,
}

impl PageBox {
    pub fn new(ulx: f64, uly: f64, width: f64, height: f64) -> Self {
        Self {
            ulx,
            uly,
            width,
            height,
        }
    }

    /// Right edge
    pub fn lrx(&self) -> f64 {
        self.ulx + self.width
    }

    /// Bottom edge
    pub fn lry(&self) -> f64 {
        self.uly - self.height
    }

    /// `(x, y, width, height)` with `(x, y)` the lower-left corner, as taken by
    /// [`DrawingSurface::rect`](crate::render::DrawingSurface::rect).
    pub fn rect(&self) -> (f64, f64, f64, f64) {
        (self.ulx, self.lry(), self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_right_corner() {
        let b = PageBox::new(72.0, 540.0, 648.0, 468.0);
        assert_eq!(b.lrx(), 720.0);
        assert_eq!(b.lry(), 72.0);
    }

    #[test]
    fn test_rect_uses_lower_left() {
        let b = PageBox::new(10.0, 100.0, 20.0, 30.0);
        assert_eq!(b.rect(), (10.0, 70.0, 20.0, 30.0));
    }

    #[test]
    fn test_zero_sized_box() {
        let b = PageBox::new(5.0, 5.0, 0.0, 0.0);
        assert_eq!(b.lrx(), b.ulx);
        assert_eq!(b.lry(), b.uly);
    }
}
