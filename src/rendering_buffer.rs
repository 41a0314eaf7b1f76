//! Rendering buffer: row-oriented access to packed pixels.
//!
//! Pixels are 32-bit `0xAARRGGBB` words stored row-major and top-down, so
//! pixel `(x, y)` lives at `pixels[y * width + x]`. Rows are handed out as
//! slices; the filler never touches memory outside the row it is sweeping.

use crate::color::Rgba8;

/// An owned, row-major buffer of packed ARGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderingBuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl RenderingBuffer {
    /// Create a `width` x `height` buffer cleared to transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Wrap existing pixel data. Returns `None` if `pixels` does not hold
    /// exactly `width * height` entries.
    pub fn from_pixels(pixels: Vec<u32>, width: u32, height: u32) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read the packed pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.offset(x, y)])
        } else {
            None
        }
    }

    /// Write a packed pixel. Writes outside the buffer are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u32) {
        if x < self.width && y < self.height {
            let i = self.offset(x, y);
            self.pixels[i] = value;
        }
    }

    /// Get a row slice (immutable).
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row(&self, y: u32) -> &[u32] {
        let start = self.offset(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    /// Get a row slice (mutable).
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [u32] {
        let start = self.offset(0, y);
        let end = start + self.width as usize;
        &mut self.pixels[start..end]
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Fill the whole buffer with one color.
    pub fn clear(&mut self, color: Rgba8) {
        self.pixels.fill(color.to_packed());
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

// ============================================================================
// Tests
// ============================================================================
