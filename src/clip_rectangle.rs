//! Viewport bounds for edge extraction.
//!
//! The clip rectangle carries the same bounds in two forms: integer Y in
//! subpixel scanlines (for bucketing) and floating-point X/Y in edge space
//! (for clipping). X is in pixels, Y in subpixel lines. The X bounds are
//! pulled inward by just under one subpixel so a clipped edge never lands
//! exactly on the buffer boundary.

/// X inset in pixels before dividing by the subpixel scale.
const X_INSET: f64 = 0.99;

/// Clip rectangle in edge space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRectangle {
    min_yi: i32,
    max_yi: i32,
    min_xf: f64,
    min_yf: f64,
    max_xf: f64,
    max_yf: f64,
}

impl ClipRectangle {
    /// Build from a pixel rectangle and the subpixel scale (8 for this filler).
    pub fn new(x: i32, y: i32, width: i32, height: i32, scale: i32) -> Self {
        let min_xi = x;
        let min_yi = y * scale;
        let max_xi = x + width;
        let max_yi = (y + height) * scale;

        let x_offset = X_INSET / scale as f64;

        Self {
            min_yi,
            max_yi,
            min_xf: min_xi as f64 + x_offset,
            min_yf: min_yi as f64,
            max_xf: max_xi as f64 - x_offset,
            max_yf: max_yi as f64,
        }
    }

    /// First subpixel scanline.
    #[inline]
    pub fn min_yi(&self) -> i32 {
        self.min_yi
    }

    /// One past the last subpixel scanline.
    #[inline]
    pub fn max_yi(&self) -> i32 {
        self.max_yi
    }

    #[inline]
    pub fn min_xf(&self) -> f64 {
        self.min_xf
    }

    #[inline]
    pub fn min_yf(&self) -> f64 {
        self.min_yf
    }

    #[inline]
    pub fn max_xf(&self) -> f64 {
        self.max_xf
    }

    #[inline]
    pub fn max_yf(&self) -> f64 {
        self.max_yf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_bounds() {
        let c = ClipRectangle::new(0, 0, 32, 24, 8);
        assert_eq!(c.min_yi(), 0);
        assert_eq!(c.max_yi(), 192);
    }

    #[test]
    fn test_offset_origin() {
        let c = ClipRectangle::new(4, 2, 10, 10, 8);
        assert_eq!(c.min_yi(), 16);
        assert_eq!(c.max_yi(), 96);
        assert_eq!(c.min_yf(), 16.0);
        assert_eq!(c.max_yf(), 96.0);
    }

    #[test]
    fn test_x_inset() {
        let c = ClipRectangle::new(0, 0, 32, 32, 8);
        let inset = 0.99 / 8.0;
        assert!((c.min_xf() - inset).abs() < 1e-12);
        assert!((c.max_xf() - (32.0 - inset)).abs() < 1e-12);
        assert!(c.min_xf() > 0.0 && c.min_xf() < 1.0 / 8.0);
        assert!(c.max_xf() < 32.0 && c.max_xf() > 32.0 - 1.0 / 8.0);
    }

    #[test]
    fn test_bounds_ordered() {
        let c = ClipRectangle::new(0, 0, 1, 1, 8);
        assert!(c.min_xf() <= c.max_xf());
        assert!(c.min_yf() <= c.max_yf());
    }
}
