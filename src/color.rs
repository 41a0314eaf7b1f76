//! Solid fill color.
//!
//! Target pixels are packed 32-bit ARGB words (`0xAARRGGBB`). The blender
//! works on the packed form directly, splitting it into two interleaved
//! lanes: red and blue in `0x00ff00ff`, alpha and green in `0xff00ff00`.

// ============================================================================
// Rgba8
// ============================================================================

/// RGBA color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }

    pub const fn black() -> Self {
        Self::new_opaque(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::new_opaque(0xff, 0xff, 0xff)
    }

    pub const fn no_color() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Unpack a `0xAARRGGBB` pixel.
    pub const fn from_packed(v: u32) -> Self {
        Self::new((v >> 16) as u8, (v >> 8) as u8, v as u8, (v >> 24) as u8)
    }

    /// Pack into a `0xAARRGGBB` pixel.
    pub const fn to_packed(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 0xff
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::no_color()
    }
}

impl From<u32> for Rgba8 {
    fn from(v: u32) -> Self {
        Self::from_packed(v)
    }
}

impl From<Rgba8> for u32 {
    fn from(c: Rgba8) -> Self {
        c.to_packed()
    }
}

// ============================================================================
// Tests
// ============================================================================
