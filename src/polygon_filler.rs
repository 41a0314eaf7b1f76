//! Scanline edge-flag polygon filler.
//!
//! Polygons are converted to clipped [`ScanEdge`]s, bucketed by the scanline
//! they start on, and swept top to bottom. On each scanline every edge
//! XOR-toggles one bit per subpixel row in a mask row, at the column where
//! the row's sample offset puts the edge. A left-to-right running XOR over
//! the mask then gives, per pixel, which of the 8 subpixel rows are inside
//! the polygon (even-odd), and the popcount of that byte is the coverage in
//! eighths.
//!
//! The filler keeps its working storage between calls: a mask row sized for
//! the target width, a bucket head per target scanline, and a growable pool
//! of edges linked by index. The mask row is zeroed as it is swept and every
//! bucket is drained, so the storage is clean again when `draw_poly`
//! returns.

use log::{debug, trace, warn};

use crate::basics::{
    fixed_to_int, SLOPE_FIX_SCANLINE_MASK, SUBPIXEL_COUNT, SUBPIXEL_FULL_COVERAGE, SUBPIXEL_MASK,
    SUBPIXEL_OFFSETS_FIXED, SUBPIXEL_SHIFT,
};
use crate::clip_rectangle::ClipRectangle;
use crate::color::Rgba8;
use crate::coverage_table::coverage;
use crate::error::FillError;
use crate::polygon_data::PolygonData;
use crate::rendering_buffer::RenderingBuffer;
use crate::scan_edge::ScanEdge;
use crate::span_extents::SpanExtents;

/// Extra mask columns past the target width: one for the flag that closes
/// the last span, one for the largest sample offset, one for the sentinel.
const MASK_PADDING: usize = 3;

// ============================================================================
// Configuration
// ============================================================================

/// Tunables for a [`PolygonFiller`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillerConfig {
    /// Number of edges the pool holds before the first polygon needs more.
    pub initial_edge_capacity: usize,
}

impl Default for FillerConfig {
    fn default() -> Self {
        Self {
            initial_edge_capacity: 60,
        }
    }
}

// ============================================================================
// PolygonFiller
// ============================================================================

/// Antialiased even-odd polygon filler with reusable working storage.
///
/// One filler serves one thread; it may draw into any number of buffers,
/// rebinding its storage whenever the target dimensions change.
#[derive(Debug)]
pub struct PolygonFiller {
    bound: Option<(u32, u32)>,
    mask_buffer: Vec<u8>,
    // Bucket heads: first edge starting on each scanline.
    edge_table: Vec<Option<u32>>,
    edges: Vec<ScanEdge>,
    // Link to the next edge in the same bucket or in the active edge list.
    next: Vec<Option<u32>>,
    vertical_extents: SpanExtents,
}

impl PolygonFiller {
    pub fn new() -> Self {
        Self::with_config(FillerConfig::default())
    }

    pub fn with_config(config: FillerConfig) -> Self {
        Self {
            bound: None,
            mask_buffer: Vec::new(),
            edge_table: Vec::new(),
            edges: vec![ScanEdge::default(); config.initial_edge_capacity],
            next: vec![None; config.initial_edge_capacity],
            vertical_extents: SpanExtents::new(),
        }
    }

    /// Number of edges the pool can hold without growing.
    pub fn edge_capacity(&self) -> usize {
        self.edges.len()
    }

    /// Dimensions of the target the working storage is currently sized for.
    pub fn bound_size(&self) -> Option<(u32, u32)> {
        self.bound
    }

    /// Fill `poly` into `buffer` with `color`, antialiased and clipped to the
    /// buffer.
    ///
    /// Fully covered pixels are overwritten with `color`; partially covered
    /// ones are blended towards it in proportion to their coverage. Polygons
    /// with fewer than three vertices draw nothing.
    ///
    /// On error nothing is drawn and the filler remains usable.
    pub fn draw_poly(
        &mut self,
        buffer: &mut RenderingBuffer,
        poly: &mut PolygonData,
        color: Rgba8,
    ) -> Result<(), FillError> {
        if poly.vertex_count() < 3 {
            trace!(
                "skipping degenerate polygon with {} vertices",
                poly.vertex_count()
            );
            return Ok(());
        }
        if buffer.width() == 0 || buffer.height() == 0 {
            return Ok(());
        }

        let prepared = self
            .bind(buffer.width(), buffer.height())
            .and_then(|()| self.ensure_edge_capacity(poly.max_scan_edges()));
        if let Err(err) = prepared {
            warn!("abandoning polygon fill: {err}");
            self.clear_edge_table();
            return Err(err);
        }

        let clip = ClipRectangle::new(
            0,
            0,
            buffer.width() as i32,
            buffer.height() as i32,
            SUBPIXEL_COUNT,
        );
        let edge_count = poly.get_scan_edges(&mut self.edges, &clip);

        self.vertical_extents.reset();
        for index in 0..edge_count {
            let edge = self.edges[index];
            let first = edge.first_line >> SUBPIXEL_SHIFT;
            let last = edge.last_line >> SUBPIXEL_SHIFT;

            let bucket = &mut self.edge_table[first as usize];
            self.next[index] = *bucket;
            *bucket = Some(index as u32);

            self.vertical_extents.mark(first, last);
        }

        if self.vertical_extents.is_empty() {
            trace!("polygon clipped away");
            return Ok(());
        }
        trace!(
            "filling {} edges over scanlines {}..={}",
            edge_count,
            self.vertical_extents.minimum,
            self.vertical_extents.maximum
        );

        self.fill(buffer, color);
        Ok(())
    }

    /// Size the mask row and edge table for a `width` x `height` target.
    fn bind(&mut self, width: u32, height: u32) -> Result<(), FillError> {
        if self.bound == Some((width, height)) {
            return Ok(());
        }

        let mask_len = width as usize + MASK_PADDING;
        let mut mask_buffer = Vec::new();
        mask_buffer
            .try_reserve_exact(mask_len)
            .map_err(|source| FillError::WorkingBuffers {
                width,
                height,
                source,
            })?;
        mask_buffer.resize(mask_len, 0);

        let mut edge_table = Vec::new();
        edge_table
            .try_reserve_exact(height as usize)
            .map_err(|source| FillError::WorkingBuffers {
                width,
                height,
                source,
            })?;
        edge_table.resize(height as usize, None);

        debug!("binding polygon filler to {width}x{height} target");
        self.mask_buffer = mask_buffer;
        self.edge_table = edge_table;
        self.bound = Some((width, height));
        Ok(())
    }

    /// Grow the edge pool to hold at least `required` edges.
    fn ensure_edge_capacity(&mut self, required: usize) -> Result<(), FillError> {
        let current = self.edges.len();
        if required <= current {
            return Ok(());
        }

        let additional = required - current;
        let storage_error = |source| FillError::EdgeStorage {
            requested: required,
            source,
        };
        self.edges
            .try_reserve_exact(additional)
            .map_err(storage_error)?;
        self.next.try_reserve_exact(additional).map_err(storage_error)?;
        self.edges.resize(required, ScanEdge::default());
        self.next.resize(required, None);

        debug!("edge pool grown from {current} to {required} edges");
        Ok(())
    }

    fn clear_edge_table(&mut self) {
        self.edge_table.fill(None);
    }

    /// Sweep the bucketed edges over the vertical extents and blend the
    /// resulting coverage into `buffer`.
    fn fill(&mut self, buffer: &mut RenderingBuffer, color: Rgba8) {
        let width = buffer.width() as i32;
        let blender = SpanBlender::new(color);

        let mut active = None;
        let mut extents = SpanExtents::new();

        for y in self.vertical_extents.minimum..=self.vertical_extents.maximum {
            extents.reset();
            self.render_edges(y, &mut active, &mut extents, width);
            if extents.is_empty() {
                continue;
            }

            // Sample offsets reach up to one pixel past the marked span.
            let min_x = extents.minimum.max(0);
            let max_x = extents.maximum.saturating_add(1).min(width);

            if min_x < max_x {
                blender.sweep(
                    &mut self.mask_buffer,
                    buffer.row_mut(y as u32),
                    min_x as usize,
                    max_x as usize,
                );
            } else {
                // Only reachable with non-finite input.
                self.mask_buffer.fill(0);
            }
        }
    }

    /// Toggle the mask row for scanline `line`.
    ///
    /// Edges already active are traced first; those ending on this scanline
    /// are dropped from `active`. Then the bucket for `line` is drained and
    /// its edges traced from their first subpixel row; those that continue
    /// are appended to `active`.
    fn render_edges(
        &mut self,
        line: i32,
        active: &mut Option<u32>,
        extents: &mut SpanExtents,
        width: i32,
    ) {
        let mask = self.mask_buffer.as_mut_slice();
        let mut prev: Option<u32> = None;

        let mut current = *active;
        while let Some(index) = current {
            let i = index as usize;
            let edge = self.edges[i];
            let next = self.next[i];

            if edge.last_line >> SUBPIXEL_SHIFT == line {
                let last_row = (edge.last_line & SUBPIXEL_MASK) as usize;
                let x = trace_rows(mask, width, edge.x, edge.slope, 0, last_row);
                extents.mark_with_sort(
                    fixed_to_int(edge.x),
                    fixed_to_int(x.wrapping_sub(edge.slope)),
                );

                match prev {
                    Some(p) => self.next[p as usize] = next,
                    None => *active = next,
                }
            } else {
                let x = trace_full_line(mask, width, edge.x, edge.slope);
                extents.mark_with_sort(
                    fixed_to_int(edge.x),
                    fixed_to_int(x.wrapping_sub(edge.slope)),
                );

                self.edges[i].x = if line & SLOPE_FIX_SCANLINE_MASK == 0 {
                    x.wrapping_add(edge.slope_fix)
                } else {
                    x
                };
                prev = Some(index);
            }

            current = next;
        }

        let mut current = self.edge_table[line as usize].take();
        while let Some(index) = current {
            let i = index as usize;
            let edge = self.edges[i];
            let next = self.next[i];
            let first_row = (edge.first_line & SUBPIXEL_MASK) as usize;

            if edge.last_line >> SUBPIXEL_SHIFT == line {
                let last_row = (edge.last_line & SUBPIXEL_MASK) as usize;
                let x = trace_rows(mask, width, edge.x, edge.slope, first_row, last_row);
                extents.mark_with_sort(
                    fixed_to_int(edge.x),
                    fixed_to_int(x.wrapping_sub(edge.slope)),
                );
            } else {
                let last_row = SUBPIXEL_MASK as usize;
                let x = trace_rows(mask, width, edge.x, edge.slope, first_row, last_row);
                extents.mark_with_sort(
                    fixed_to_int(edge.x),
                    fixed_to_int(x.wrapping_sub(edge.slope)),
                );

                self.edges[i].x = x;
                match prev {
                    Some(p) => self.next[p as usize] = Some(index),
                    None => *active = Some(index),
                }
                prev = Some(index);
            }

            current = next;
        }

        if let Some(p) = prev {
            self.next[p as usize] = None;
        }
    }
}

impl Default for PolygonFiller {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Mask toggling
// ============================================================================

/// Flip subpixel row `row` at the column its sample offset lands on.
#[inline(always)]
fn toggle(mask: &mut [u8], width: i32, x: i32, row: usize) {
    let column = fixed_to_int(x.wrapping_add(SUBPIXEL_OFFSETS_FIXED[row])).clamp(0, width);
    mask[column as usize] ^= 1 << row;
}

/// Trace an edge through subpixel rows `first..=last`, returning its X
/// after the last step.
#[inline]
fn trace_rows(
    mask: &mut [u8],
    width: i32,
    mut x: i32,
    slope: i32,
    first: usize,
    last: usize,
) -> i32 {
    for row in first..=last {
        toggle(mask, width, x, row);
        x = x.wrapping_add(slope);
    }
    x
}

/// Trace an edge through all eight subpixel rows of a scanline.
#[inline]
fn trace_full_line(mask: &mut [u8], width: i32, mut x: i32, slope: i32) -> i32 {
    macro_rules! step {
        ($($row:literal)*) => {$(
            toggle(mask, width, x, $row);
            x = x.wrapping_add(slope);
        )*};
    }
    step!(0 1 2 3 4 5 6 7);
    x
}

// ============================================================================
// Span blending
// ============================================================================

/// Writes one swept mask row into a target row.
///
/// The packed color is pre-split into its red/blue and alpha/green lanes so
/// a partial pixel blends two channels per multiply.
#[derive(Debug, Clone, Copy)]
struct SpanBlender {
    color: u32,
    lane_rb: u32,
    lane_ag: u32,
}

impl SpanBlender {
    fn new(color: Rgba8) -> Self {
        let color = color.to_packed();
        Self {
            color,
            lane_rb: color & 0x00ff_00ff,
            lane_ag: (color >> 8) & 0x00ff_00ff,
        }
    }

    /// Blend `coverage` eighths of the color over `dst`.
    #[inline]
    fn blend(&self, dst: u32, coverage: u32) -> u32 {
        let inverse = SUBPIXEL_COUNT as u32 - coverage;
        let rb = (((dst & 0x00ff_00ff) * inverse + self.lane_rb * coverage) >> SUBPIXEL_SHIFT)
            & 0x00ff_00ff;
        let ag = ((((dst >> 8) & 0x00ff_00ff) * inverse + self.lane_ag * coverage)
            << (8 - SUBPIXEL_SHIFT))
            & 0xff00_ff00;
        rb + ag
    }

    /// Accumulate mask columns `min_x..=max_x` left to right and write the
    /// covered pixels. Every mask byte read is zeroed.
    ///
    /// A full-coverage sentinel at `max_x + 1` ends every run.
    fn sweep(&self, mask: &mut [u8], row: &mut [u32], min_x: usize, max_x: usize) {
        let end = max_x + 1;
        mask[end] = SUBPIXEL_FULL_COVERAGE;

        let mut state = mask[min_x];
        mask[min_x] = 0;
        let mut next = min_x + 1;
        let mut px = min_x;

        while next <= end {
            if state == 0 {
                // Uncovered: skip to the next flag.
                let start = next;
                loop {
                    state = mask[next];
                    mask[next] = 0;
                    next += 1;
                    if state != 0 {
                        break;
                    }
                }
                px += next - start;
            } else if state == SUBPIXEL_FULL_COVERAGE {
                // Covered: write the color until a flag changes the state.
                loop {
                    if let Some(pixel) = row.get_mut(px) {
                        *pixel = self.color;
                    }
                    px += 1;
                    let flags = mask[next];
                    mask[next] = 0;
                    next += 1;
                    if flags != 0 {
                        state ^= flags;
                        break;
                    }
                }
            } else {
                loop {
                    if let Some(pixel) = row.get_mut(px) {
                        *pixel = self.blend(*pixel, coverage(state));
                    }
                    px += 1;
                    state ^= mask[next];
                    mask[next] = 0;
                    next += 1;
                    if state == 0 || state == SUBPIXEL_FULL_COVERAGE || next > end {
                        break;
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::PointD;

    const BLACK: u32 = 0xFF00_0000;
    const WHITE: u32 = 0xFFFF_FFFF;

    fn white_buffer(width: u32, height: u32) -> RenderingBuffer {
        let mut buffer = RenderingBuffer::new(width, height);
        buffer.clear(Rgba8::white());
        buffer
    }

    fn points(coords: &[(f64, f64)]) -> Vec<PointD> {
        coords.iter().map(|&(x, y)| PointD::new(x, y)).collect()
    }

    fn draw(filler: &mut PolygonFiller, buffer: &mut RenderingBuffer, coords: &[(f64, f64)]) {
        let mut poly = PolygonData::from_points(&points(coords));
        filler
            .draw_poly(buffer, &mut poly, Rgba8::black())
            .unwrap();
        assert_clean(filler);
    }

    fn assert_clean(filler: &PolygonFiller) {
        assert!(filler.mask_buffer.iter().all(|&m| m == 0));
        assert!(filler.edge_table.iter().all(Option::is_none));
    }

    fn square(x1: f64, y1: f64, x2: f64, y2: f64) -> Vec<(f64, f64)> {
        vec![(x1, y1), (x2, y1), (x2, y2), (x1, y2)]
    }

    /// Coverage in eighths of black drawn over white, read back from a pixel.
    fn eighths(pixel: u32) -> u32 {
        8 - ((pixel & 0xff) + 1) / 32
    }

    fn regular_polygon(n: usize, cx: f64, cy: f64, r: f64) -> Vec<(f64, f64)> {
        (0..n)
            .map(|k| {
                let a = std::f64::consts::TAU * k as f64 / n as f64;
                (cx + r * a.cos(), cy + r * a.sin())
            })
            .collect()
    }

    #[test]
    fn test_blend_lanes() {
        let blender = SpanBlender::new(Rgba8::black());
        assert_eq!(blender.blend(WHITE, 0), WHITE);
        assert_eq!(blender.blend(WHITE, 8), BLACK);
        assert_eq!(blender.blend(WHITE, 4), 0xFF7F_7F7F);

        let blender = SpanBlender::new(Rgba8::from_packed(0x80FF_4020));
        assert_eq!(blender.blend(0x0000_0000, 8), 0x80FF_4020);
        let half = blender.blend(0x0000_0000, 4);
        assert_eq!(half, 0x407F_2010);
    }

    #[test]
    fn test_square_exact_coverage() {
        let mut filler = PolygonFiller::new();
        let mut buffer = white_buffer(32, 32);
        draw(&mut filler, &mut buffer, &square(10.0, 10.0, 20.0, 20.0));

        for y in 0..32 {
            for x in 0..32 {
                let inside = (10..20).contains(&x) && (10..20).contains(&y);
                let expected = if inside { BLACK } else { WHITE };
                assert_eq!(buffer.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
        assert_eq!(filler.bound_size(), Some((32, 32)));
    }

    #[test]
    fn test_full_run_writes_color_verbatim() {
        let mut filler = PolygonFiller::new();
        let mut buffer = white_buffer(16, 16);
        let color = Rgba8::new(10, 20, 30, 40);
        let mut poly = PolygonData::from_points(&points(&square(2.0, 2.0, 6.0, 6.0)));
        filler.draw_poly(&mut buffer, &mut poly, color).unwrap();
        assert_eq!(buffer.pixel(3, 3), Some(color.to_packed()));
        assert_eq!(buffer.pixel(6, 3), Some(WHITE));
    }

    #[test]
    fn test_diagonal_half_coverage() {
        let mut filler = PolygonFiller::new();
        let mut buffer = white_buffer(32, 32);
        draw(
            &mut filler,
            &mut buffer,
            &[(4.0, 4.0), (24.0, 4.0), (4.0, 24.0)],
        );

        for y in 4..24u32 {
            for x in 4..24u32 {
                let pixel = buffer.pixel(x, y).unwrap();
                match x + y {
                    s if s <= 26 => assert_eq!(pixel, BLACK, "pixel ({x}, {y})"),
                    27 => assert_eq!(eighths(pixel), 4, "pixel ({x}, {y})"),
                    _ => assert_eq!(pixel, WHITE, "pixel ({x}, {y})"),
                }
            }
        }
    }

    #[test]
    fn test_bowtie_fills_both_lobes() {
        let mut filler = PolygonFiller::new();
        let mut buffer = white_buffer(32, 32);
        draw(
            &mut filler,
            &mut buffer,
            &[(4.0, 4.0), (28.0, 28.0), (28.0, 4.0), (4.0, 28.0)],
        );
        assert_eq!(buffer.pixel(6, 16), Some(BLACK));
        assert_eq!(buffer.pixel(26, 16), Some(BLACK));
        assert_eq!(buffer.pixel(16, 6), Some(WHITE));
        assert_eq!(buffer.pixel(16, 26), Some(WHITE));
    }

    #[test]
    fn test_doubly_traced_square_cancels() {
        let mut filler = PolygonFiller::new();
        let mut buffer = white_buffer(32, 32);
        let mut twice = square(10.0, 10.0, 20.0, 20.0);
        twice.extend(square(10.0, 10.0, 20.0, 20.0));
        draw(&mut filler, &mut buffer, &twice);
        assert!(buffer.pixels().iter().all(|&p| p == WHITE));
    }

    #[test]
    fn test_pentagram_has_even_odd_hole() {
        let mut filler = PolygonFiller::new();
        let mut buffer = white_buffer(32, 32);
        let star: Vec<_> = (0..5)
            .map(|k| {
                let a = (-90.0 + 144.0 * k as f64).to_radians();
                (16.0 + 14.0 * a.cos(), 16.0 + 14.0 * a.sin())
            })
            .collect();
        draw(&mut filler, &mut buffer, &star);

        assert_eq!(buffer.pixel(16, 16), Some(WHITE));
        assert_eq!(buffer.pixel(15, 15), Some(WHITE));
        assert_eq!(buffer.pixel(15, 9), Some(BLACK));
        assert_eq!(buffer.pixel(16, 9), Some(BLACK));
    }

    #[test]
    fn test_polygon_covering_whole_buffer() {
        let mut filler = PolygonFiller::new();
        let mut buffer = white_buffer(32, 32);
        draw(
            &mut filler,
            &mut buffer,
            &square(-10.0, -10.0, 50.0, 50.0),
        );

        assert!(buffer.pixels().iter().all(|&p| p != WHITE));
        for y in 1..32 {
            for x in 0..31 {
                assert_eq!(buffer.pixel(x, y), Some(BLACK), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_clipped_at_left_edge() {
        let mut filler = PolygonFiller::new();
        let mut buffer = white_buffer(32, 32);
        draw(
            &mut filler,
            &mut buffer,
            &[(-10.0, 4.0), (16.0, 16.0), (-10.0, 28.0)],
        );

        assert_eq!(buffer.pixel(0, 16), Some(BLACK));
        assert_eq!(buffer.pixel(2, 16), Some(BLACK));
        for y in 0..32 {
            for x in 17..32 {
                assert_eq!(buffer.pixel(x, y), Some(WHITE), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_clipped_at_bottom_and_right() {
        let mut filler = PolygonFiller::new();
        let mut buffer = white_buffer(32, 32);
        draw(&mut filler, &mut buffer, &square(8.0, 20.0, 24.0, 60.0));
        for y in 0..32 {
            for x in 0..32 {
                let inside = (8..24).contains(&x) && y >= 20;
                let expected = if inside { BLACK } else { WHITE };
                assert_eq!(buffer.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }

        let mut buffer = white_buffer(32, 32);
        draw(&mut filler, &mut buffer, &square(20.0, 4.0, 90.0, 12.0));
        assert_eq!(buffer.pixel(25, 8), Some(BLACK));
        assert_eq!(buffer.pixel(30, 8), Some(BLACK));
        assert_eq!(buffer.pixel(19, 8), Some(WHITE));
    }

    #[test]
    fn test_side_crossing_on_bottom_bound() {
        let mut filler = PolygonFiller::new();
        let mut buffer = white_buffer(32, 32);
        draw(
            &mut filler,
            &mut buffer,
            &[(29.336, 31.0), (34.0, 33.0), (19.336, 33.0)],
        );
        for y in 0..31 {
            assert!(buffer.row(y).iter().all(|&p| p == WHITE), "row {y}");
        }
        assert!(buffer.row(31)[..19].iter().all(|&p| p == WHITE));
        assert!(buffer.row(31).iter().any(|&p| p != WHITE));
    }

    #[test]
    fn test_triangles_leaving_through_side_and_bottom() {
        let mut filler = PolygonFiller::new();
        for i in 0..3000 {
            let sx = 20.0 + i as f64 * 0.004;
            for sy in [30.0, 31.0] {
                let top = sy as u32;
                let left = (sx - 10.0).floor() as usize;
                for tri in [
                    [(sx, sy), (34.0, 33.0), (sx - 10.0, 33.0)],
                    [(sx, sy), (sx - 10.0, 33.0), (34.0, 33.0)],
                ] {
                    let mut buffer = white_buffer(32, 32);
                    draw(&mut filler, &mut buffer, &tri);
                    for y in 0..top {
                        assert!(buffer.row(y).iter().all(|&p| p == WHITE), "{tri:?}");
                    }
                    for y in top..32 {
                        assert!(buffer.row(y)[..left].iter().all(|&p| p == WHITE), "{tri:?}");
                    }
                    assert!(buffer.pixels().iter().any(|&p| p != WHITE), "{tri:?}");
                }
            }
        }
    }

    #[test]
    fn test_fully_outside_draws_nothing() {
        let mut filler = PolygonFiller::new();
        let mut buffer = white_buffer(32, 32);
        draw(&mut filler, &mut buffer, &square(-20.0, -20.0, -5.0, -5.0));
        draw(&mut filler, &mut buffer, &square(40.0, 0.0, 60.0, 30.0));
        draw(&mut filler, &mut buffer, &square(4.0, 40.0, 20.0, 60.0));
        assert!(buffer.pixels().iter().all(|&p| p == WHITE));
    }

    #[test]
    fn test_degenerate_polygon_is_ignored() {
        let mut filler = PolygonFiller::new();
        let mut buffer = white_buffer(16, 16);
        let mut poly = PolygonData::from_points(&points(&[(1.0, 1.0), (10.0, 10.0)]));
        filler
            .draw_poly(&mut buffer, &mut poly, Rgba8::black())
            .unwrap();
        assert!(buffer.pixels().iter().all(|&p| p == WHITE));

        let mut empty = RenderingBuffer::new(0, 0);
        let mut poly = PolygonData::from_points(&points(&square(0.0, 0.0, 4.0, 4.0)));
        filler
            .draw_poly(&mut empty, &mut poly, Rgba8::black())
            .unwrap();
    }

    #[test]
    fn test_non_finite_vertices_do_not_panic() {
        let mut filler = PolygonFiller::new();
        let mut buffer = white_buffer(16, 16);
        draw(
            &mut filler,
            &mut buffer,
            &[(f64::NAN, 2.0), (8.0, f64::INFINITY), (1e30, -1e30)],
        );
        draw(&mut filler, &mut buffer, &square(2.0, 2.0, 6.0, 6.0));
        assert_eq!(buffer.pixel(3, 3), Some(BLACK));
    }

    #[test]
    fn test_rebinding_matches_fresh_filler() {
        let a = square(4.0, 4.0, 14.5, 20.25);
        let b = [(10.0, 2.0), (30.0, 18.0), (6.0, 28.0)];

        let mut reused = PolygonFiller::new();
        let mut first = white_buffer(32, 32);
        draw(&mut reused, &mut first, &a);

        let mut other = white_buffer(8, 5);
        draw(&mut reused, &mut other, &square(1.0, 1.0, 6.0, 4.0));
        assert_eq!(reused.bound_size(), Some((8, 5)));
        assert_eq!(reused.mask_buffer.len(), 8 + MASK_PADDING);

        draw(&mut reused, &mut first, &b);
        assert_eq!(reused.bound_size(), Some((32, 32)));

        let mut fresh = PolygonFiller::new();
        let mut second = white_buffer(32, 32);
        draw(&mut fresh, &mut second, &a);
        draw(&mut fresh, &mut second, &b);

        assert_eq!(first, second);
    }

    #[test]
    fn test_edge_pool_grows_to_fit() {
        let gon = regular_polygon(40, 16.0, 16.0, 12.0);

        let mut grown = PolygonFiller::new();
        assert_eq!(grown.edge_capacity(), 60);
        let mut first = white_buffer(32, 32);
        draw(&mut grown, &mut first, &gon);
        assert_eq!(grown.edge_capacity(), 120);

        let mut sized = PolygonFiller::with_config(FillerConfig {
            initial_edge_capacity: 200,
        });
        let mut second = white_buffer(32, 32);
        draw(&mut sized, &mut second, &gon);
        assert_eq!(sized.edge_capacity(), 200);

        assert_eq!(first, second);
        assert_eq!(first.pixel(16, 16), Some(BLACK));
    }

    #[test]
    fn test_edge_pool_growth_failure() {
        let mut filler = PolygonFiller::new();
        let err = filler.ensure_edge_capacity(usize::MAX).unwrap_err();
        assert!(matches!(err, FillError::EdgeStorage { .. }));
        assert_eq!(filler.edge_capacity(), 60);
    }

    #[test]
    fn test_coverage_tracks_area_along_tall_edge() {
        let mut filler = PolygonFiller::new();
        let mut buffer = white_buffer(48, 304);
        draw(
            &mut filler,
            &mut buffer,
            &[(2.0, 1.0), (40.0, 300.0), (2.0, 300.0)],
        );

        for y in 1..300u32 {
            let covered: u32 = buffer.row(y).iter().map(|&p| eighths(p)).sum();
            let exact = 38.0 * (y as f64 + 0.5 - 1.0) / 299.0;
            let sampled = covered as f64 / 8.0;
            assert!(
                (sampled - exact).abs() <= 0.75,
                "row {y}: sampled {sampled}, exact {exact}"
            );
        }
    }

    #[test]
    fn test_slope_fix_bounds_drift() {
        let mut filler = PolygonFiller::new();
        filler.bind(1100, 400).unwrap();

        let slope = 1.0 / 3.0;
        let origin = PointD::new(0.0625, -0.5);
        filler.edges[0] = ScanEdge::sloped(0, 3199, &origin, slope);
        assert!(filler.edges[0].slope_fix > 0);
        filler.next[0] = None;
        filler.edge_table[0] = Some(0);

        let mut active = None;
        let mut extents = SpanExtents::new();
        for row in 0..399 {
            extents.reset();
            filler.render_edges(row, &mut active, &mut extents, 1100);
            assert_eq!(active, Some(0));

            let line = 8.0 * (row + 1) as f64;
            let exact = (origin.x + (line - origin.y) * slope) * 65536.0;
            let drift = (filler.edges[0].x as f64 - exact).abs();
            assert!(drift <= 96.0, "row {row}: drift {drift}");
        }
    }

    #[test]
    fn test_edge_ending_in_first_scanline_is_not_activated() {
        let mut filler = PolygonFiller::new();
        filler.bind(16, 4).unwrap();
        filler.edges[0] = ScanEdge::vertical(2, 5, 3.0625);
        filler.next[0] = None;
        filler.edge_table[0] = Some(0);

        let mut active = None;
        let mut extents = SpanExtents::new();
        filler.render_edges(0, &mut active, &mut extents, 16);
        assert_eq!(active, None);
        assert_eq!(filler.mask_buffer[3], 0b0011_1100);
        assert_eq!((extents.minimum, extents.maximum), (3, 3));
    }
}
