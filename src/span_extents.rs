//! Min/max accumulator for spans.
//!
//! Tracks the vertical extent of a polygon (in scanlines) and the horizontal
//! extent of the pixels touched on one scanline.

/// Running minimum and maximum of marked spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanExtents {
    pub minimum: i32,
    pub maximum: i32,
}

impl SpanExtents {
    pub fn new() -> Self {
        Self {
            minimum: i32::MAX,
            maximum: i32::MIN,
        }
    }

    pub fn reset(&mut self) {
        self.minimum = i32::MAX;
        self.maximum = i32::MIN;
    }

    /// Mark a span. `start` must not be greater than `end`.
    #[inline]
    pub fn mark(&mut self, start: i32, end: i32) {
        if start < self.minimum {
            self.minimum = start;
        }
        if end > self.maximum {
            self.maximum = end;
        }
    }

    /// Mark a span whose ends may come in either order.
    #[inline]
    pub fn mark_with_sort(&mut self, start: i32, end: i32) {
        if start <= end {
            self.mark(start, end);
        } else {
            self.mark(end, start);
        }
    }

    /// True until something has been marked.
    pub fn is_empty(&self) -> bool {
        self.minimum > self.maximum
    }
}

impl Default for SpanExtents {
    fn default() -> Self {
        Self::new()
    }
}
