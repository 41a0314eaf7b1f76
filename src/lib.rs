//! # edgeflag
//!
//! Antialiased polygon filling with the scanline edge-flag algorithm.
//!
//! Polygons are sampled on an 8x8 subpixel grid with even-odd fill: each
//! edge XOR-toggles a per-column subpixel mask, a running XOR across the
//! scanline turns the flags into coverage, and the popcount of each mask
//! byte gives the pixel's coverage in eighths. All edge stepping runs in
//! 16.16 fixed point, with a periodic slope correction bounding drift on
//! long edges. Clipping to the target is analytic, per edge, so no geometry
//! outside the target is ever traced.
//!
//! ## Pipeline
//!
//! 1. **Polygon data**: vertices in target pixel coordinates
//! 2. **Edge extraction**: clip against the target and convert to fixed-point scan edges
//! 3. **Edge table**: bucket edges by the scanline they start on
//! 4. **Sweep**: maintain the active edges, toggle the mask row per scanline
//! 5. **Blend**: write covered runs, blend partial pixels, skip empty runs
//!
//! ```
//! use edgeflag::{PointD, PolygonData, PolygonFiller, RenderingBuffer, Rgba8};
//!
//! let mut buffer = RenderingBuffer::new(32, 32);
//! buffer.clear(Rgba8::white());
//!
//! let mut poly = PolygonData::from_points(&[
//!     PointD::new(10.0, 10.0),
//!     PointD::new(20.0, 10.0),
//!     PointD::new(20.0, 20.0),
//!     PointD::new(10.0, 20.0),
//! ]);
//! let mut filler = PolygonFiller::new();
//! filler.draw_poly(&mut buffer, &mut poly, Rgba8::black()).unwrap();
//!
//! assert_eq!(buffer.pixel(15, 15), Some(Rgba8::black().to_packed()));
//! assert_eq!(buffer.pixel(20, 15), Some(Rgba8::white().to_packed()));
//! ```

// Foundation types & math
pub mod basics;
pub mod coverage_table;
pub mod span_extents;

// Clipping & edge extraction
pub mod clip_flags;
pub mod clip_rectangle;
pub mod polygon_data;
pub mod scan_edge;

// Target buffer
pub mod color;
pub mod rendering_buffer;

// Rasterization
pub mod error;
pub mod polygon_filler;

// Drawing primitives
pub mod antialiased_draw;

pub use antialiased_draw::AntialiasedDraw;
pub use basics::PointD;
pub use clip_rectangle::ClipRectangle;
pub use color::Rgba8;
pub use error::FillError;
pub use polygon_data::PolygonData;
pub use polygon_filler::{FillerConfig, PolygonFiller};
pub use rendering_buffer::RenderingBuffer;
pub use scan_edge::ScanEdge;
