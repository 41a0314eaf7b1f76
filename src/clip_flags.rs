//! Outcodes for classifying vertices against a [`ClipRectangle`].
//!
//! Flags are mutually exclusive per axis: a point is left or right (or
//! neither), and top or bottom (or neither).

use crate::basics::PointD;
use crate::clip_rectangle::ClipRectangle;

pub const CLIP_NONE: u32 = 0x00;
pub const CLIP_LEFT: u32 = 0x01;
pub const CLIP_RIGHT: u32 = 0x02;
pub const CLIP_TOP: u32 = 0x04;
pub const CLIP_BOTTOM: u32 = 0x08;
pub const CLIP_HORIZONTAL: u32 = CLIP_LEFT | CLIP_RIGHT;
pub const CLIP_VERTICAL: u32 = CLIP_TOP | CLIP_BOTTOM;

/// Compute the outcode for a point in edge space.
///
/// ```text
///        |        |
///  0101  |  0100  | 0110
///        |        |
/// -------+--------+-------- min_yf
///        |        |
///  0001  |  0000  | 0010
///        |        |
/// -------+--------+-------- max_yf
///        |        |
///  1001  |  1000  | 1010
///        |        |
///     min_xf   max_xf
/// ```
///
/// The low bounds are inclusive and the high bounds exclusive.
#[inline]
pub fn clip_flags(point: &PointD, clip: &ClipRectangle) -> u32 {
    let mut flags = CLIP_NONE;

    if point.x < clip.min_xf() {
        flags |= CLIP_LEFT;
    } else if point.x >= clip.max_xf() {
        flags |= CLIP_RIGHT;
    }

    if point.y < clip.min_yf() {
        flags |= CLIP_TOP;
    } else if point.y >= clip.max_yf() {
        flags |= CLIP_BOTTOM;
    }

    flags
}
