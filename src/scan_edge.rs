//! Scan-converted polygon edge.
//!
//! A `ScanEdge` is a clipped line segment ready for the scanline sweep:
//! the inclusive range of subpixel lines it crosses, its X position at the
//! first line, and its per-line slope, all in 16.16 fixed point.

use crate::basics::{int_to_fixed, rational_to_fixed, PointD, SLOPE_FIX_SHIFT, SLOPE_FIX_STEP};

/// An edge in subpixel scanline space.
///
/// Invariant: `first_line <= last_line`. Horizontal segments never become
/// scan edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanEdge {
    /// First subpixel line crossed (inclusive).
    pub first_line: i32,
    /// Last subpixel line crossed (inclusive).
    pub last_line: i32,
    /// X at `first_line`, 16.16 fixed point, pixels.
    pub x: i32,
    /// X step per subpixel line, 16.16 fixed point.
    pub slope: i32,
    /// Correction added to `x` every 32 scanlines.
    pub slope_fix: i32,
}

impl ScanEdge {
    /// A vertical edge pinned at `x`, used where the clip boundary itself
    /// stands in for part of the polygon outline.
    pub fn vertical(first_line: i32, last_line: i32, x: f64) -> Self {
        Self {
            first_line,
            last_line,
            x: rational_to_fixed(x),
            slope: int_to_fixed(0),
            slope_fix: int_to_fixed(0),
        }
    }

    /// An edge through `origin` with slope `slope` (pixels per subpixel
    /// line), starting at `first_line`.
    ///
    /// The intercept is evaluated at `first_line`, so the same call handles
    /// edges whose true start lies above the clip top.
    pub fn sloped(first_line: i32, last_line: i32, origin: &PointD, slope: f64) -> Self {
        let start_x = origin.x + (first_line as f64 - origin.y) * slope;
        let fixed_slope = rational_to_fixed(slope);

        let slope_fix = if last_line - first_line >= SLOPE_FIX_STEP {
            rational_to_fixed(slope * SLOPE_FIX_STEP as f64)
                .wrapping_sub(fixed_slope.wrapping_shl(SLOPE_FIX_SHIFT))
        } else {
            int_to_fixed(0)
        };

        Self {
            first_line,
            last_line,
            x: rational_to_fixed(start_x),
            slope: fixed_slope,
            slope_fix,
        }
    }
}
