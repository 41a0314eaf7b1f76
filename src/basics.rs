//! Foundation types, constants, and fixed-point conversions.
//!
//! Everything the edge extractor and the scanline filler share: the subpixel
//! grid, the 16.16 fixed-point format used for edge X positions and slopes,
//! the interleaved sample offsets, and the slope-fix period.

// ============================================================================
// Subpixel grid
// ============================================================================

/// 8x8 subpixels per pixel: a shift of 3 converts between pixel and
/// subpixel coordinates.
pub const SUBPIXEL_SHIFT: u32 = 3;
pub const SUBPIXEL_COUNT: i32 = 1 << SUBPIXEL_SHIFT;
pub const SUBPIXEL_MASK: i32 = SUBPIXEL_COUNT - 1;

/// Mask value with every subpixel row covered.
pub const SUBPIXEL_FULL_COVERAGE: u8 = 0xff;

// ============================================================================
// Fixed point (16.16)
// ============================================================================

pub const FIXED_POINT_SHIFT: u32 = 16;
pub const FIXED_POINT_ONE: i32 = 1 << FIXED_POINT_SHIFT;

#[inline]
pub const fn int_to_fixed(v: i32) -> i32 {
    v << FIXED_POINT_SHIFT
}

/// Fixed to integer, rounding toward negative infinity.
#[inline]
pub const fn fixed_to_int(v: i32) -> i32 {
    v >> FIXED_POINT_SHIFT
}

/// Floor a double to an integer (round toward negative infinity).
///
/// Out-of-range values saturate and NaN maps to 0.
#[inline]
pub fn ifloor(v: f64) -> i32 {
    v.floor() as i32
}

/// Convert a coordinate to 16.16 fixed point, rounding down.
#[inline]
pub fn rational_to_fixed(v: f64) -> i32 {
    ifloor(v * FIXED_POINT_ONE as f64)
}

// ============================================================================
// Sample pattern
// ============================================================================

/// Horizontal sample offset of each subpixel row, in eighths of a pixel.
///
/// ```text
///  [][][][][]##[][] 5
///  ##[][][][][][][] 0
///  [][][]##[][][][] 3
///  [][][][][][]##[] 6
///  []##[][][][][][] 1
///  [][][][]##[][][] 4
///  [][][][][][][]## 7
///  [][]##[][][][][] 2
/// ```
pub const SUBPIXEL_OFFSETS: [i32; SUBPIXEL_COUNT as usize] = [5, 0, 3, 6, 1, 4, 7, 2];

/// The sample offsets in 16.16 fixed point.
pub const SUBPIXEL_OFFSETS_FIXED: [i32; SUBPIXEL_COUNT as usize] = {
    let mut out = [0; SUBPIXEL_COUNT as usize];
    let mut i = 0;
    while i < SUBPIXEL_COUNT as usize {
        out[i] = SUBPIXEL_OFFSETS[i] << (FIXED_POINT_SHIFT - SUBPIXEL_SHIFT);
        i += 1;
    }
    out
};

// ============================================================================
// Slope fix
// ============================================================================

/// Repeated `x += slope` drifts. Edges spanning at least `SLOPE_FIX_STEP`
/// subpixel lines carry a correction that is applied once every
/// `SLOPE_FIX_SCANLINES` scanlines.
pub const SLOPE_FIX_SHIFT: u32 = 8;
pub const SLOPE_FIX_STEP: i32 = 1 << SLOPE_FIX_SHIFT;
pub const SLOPE_FIX_SCANLINES: i32 = 1 << (SLOPE_FIX_SHIFT - SUBPIXEL_SHIFT);
pub const SLOPE_FIX_SCANLINE_MASK: i32 = SLOPE_FIX_SCANLINES - 1;

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

pub type PointD = PointBase<f64>;

impl PointD {
    pub fn len(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rescale to length `len`. A zero vector stays zero.
    pub fn with_len(&self, len: f64) -> Self {
        let l = self.len();
        if l > 0.0 {
            let s = len / l;
            Self::new(self.x * s, self.y * s)
        } else {
            *self
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
