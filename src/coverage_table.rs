//! Subpixel mask to coverage lookup.
//!
//! Each mask byte holds one bit per subpixel row of a pixel; the population
//! count of the byte is the number of covered samples (0 to 8).

const fn pixel_coverage(mask: u8) -> u8 {
    let mut count = 0;
    let mut bit = 0;
    while bit < 8 {
        count += (mask >> bit) & 1;
        bit += 1;
    }
    count
}

/// Population count of every 8-bit subpixel mask.
pub static COVERAGE_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = pixel_coverage(i as u8);
        i += 1;
    }
    table
};

/// Number of covered subpixel samples in `mask`.
#[inline]
pub fn coverage(mask: u8) -> u32 {
    COVERAGE_TABLE[mask as usize] as u32
}
