//! Polygon vertex storage and clipped edge extraction.
//!
//! `PolygonData` owns a fixed-capacity vertex array that callers rewrite in
//! place for each primitive they draw (an arrowhead, then its shaft, and so
//! on). [`PolygonData::get_scan_edges`] turns the active vertices into
//! [`ScanEdge`]s, clipping each edge analytically against a
//! [`ClipRectangle`]:
//!
//! - an edge entirely above or below the rectangle is dropped;
//! - an edge entirely left or right of it collapses to a vertical edge on
//!   that boundary, so the boundary closes the clipped outline;
//! - an edge crossing the left and/or right boundary is split at the
//!   crossings into up to three sub-edges.
//!
//! The rasterizer accumulates coverage with even-odd toggling, so the
//! pieces never need to be stitched into a closed clipped polygon.

use crate::basics::{ifloor, PointD, SUBPIXEL_COUNT};
use crate::clip_flags::{
    clip_flags, CLIP_BOTTOM, CLIP_HORIZONTAL, CLIP_LEFT, CLIP_NONE, CLIP_RIGHT, CLIP_TOP,
    CLIP_VERTICAL,
};
use crate::clip_rectangle::ClipRectangle;
use crate::error::FillError;
use crate::scan_edge::ScanEdge;

/// Worst case number of scan edges per polygon vertex: an edge clipped on
/// both the left and the right side splits into three.
pub const MAX_EDGES_PER_VERTEX: usize = 3;

/// Per-vertex working data in edge space (X in pixels, Y in subpixel lines).
#[derive(Debug, Clone, Copy, Default)]
struct VertexData {
    position: PointD,
    clip_flags: u32,
    line: i32,
}

impl VertexData {
    /// A clip vertex on a vertical boundary. It only becomes real once its
    /// Y has been computed and its horizontal flag cleared.
    fn on_boundary(x: f64, side: u32) -> Self {
        Self {
            position: PointD::new(x, 0.0),
            clip_flags: side,
            line: 0,
        }
    }

    /// Resolve the scanline of a computed clip vertex, clamping it to the
    /// rectangle when the edge also leaves it vertically.
    ///
    /// The bottom bound is exclusive, as for vertices. The resolved line is
    /// never past the last line of the rectangle.
    fn resolve_line(&mut self, clip: &ClipRectangle, vertical_clip: bool) {
        if vertical_clip && self.position.y < clip.min_yf() {
            self.clip_flags = CLIP_TOP;
            self.line = clip.min_yi();
        } else if vertical_clip && self.position.y >= clip.max_yf() {
            self.clip_flags = CLIP_BOTTOM;
            self.line = clip.max_yi() - 1;
        } else {
            self.clip_flags = CLIP_NONE;
            // Rounding can put a crossing exactly on the bottom bound.
            self.line = ifloor(self.position.y).min(clip.max_yi() - 1);
        }
    }

    #[inline]
    fn is_clipped_horizontally(&self) -> bool {
        self.clip_flags & CLIP_HORIZONTAL != 0
    }
}

/// Output cursor over the caller's edge array.
struct EdgeSink<'a> {
    edges: &'a mut [ScanEdge],
    count: usize,
}

impl<'a> EdgeSink<'a> {
    fn new(edges: &'a mut [ScanEdge]) -> Self {
        Self { edges, count: 0 }
    }

    /// Append an edge. Edges that cross no subpixel line are skipped.
    #[inline]
    fn push(&mut self, edge: ScanEdge) {
        if edge.first_line <= edge.last_line {
            self.edges[self.count] = edge;
            self.count += 1;
        }
    }
}

/// Vertex data for one polygon plus scratch space for edge extraction.
#[derive(Debug, Clone)]
pub struct PolygonData {
    vertices: Vec<PointD>,
    vertex_count: usize,
    // One extra slot: the first vertex is repeated at the end to close the ring.
    vertex_data: Vec<VertexData>,
}

impl PolygonData {
    /// Create a polygon able to hold `capacity` vertices. All of them are
    /// active and start at the origin.
    pub fn new(capacity: usize) -> Self {
        Self {
            vertices: vec![PointD::default(); capacity],
            vertex_count: capacity,
            vertex_data: vec![VertexData::default(); capacity + 1],
        }
    }

    /// Create a polygon holding exactly `points`.
    pub fn from_points(points: &[PointD]) -> Self {
        let mut poly = Self::new(points.len());
        poly.vertices.copy_from_slice(points);
        poly
    }

    /// Maximum number of vertices.
    pub fn capacity(&self) -> usize {
        self.vertices.len()
    }

    /// Number of active vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Change the number of active vertices without reallocating.
    pub fn set_vertex_count(&mut self, count: usize) -> Result<(), FillError> {
        if count > self.capacity() {
            return Err(FillError::VertexCapacity {
                requested: count,
                capacity: self.capacity(),
            });
        }
        self.vertex_count = count;
        Ok(())
    }

    /// The active vertices.
    pub fn vertices(&self) -> &[PointD] {
        &self.vertices[..self.vertex_count]
    }

    /// The active vertices, for rewriting in place.
    pub fn vertices_mut(&mut self) -> &mut [PointD] {
        &mut self.vertices[..self.vertex_count]
    }

    /// Replace the active vertices with `points`.
    pub fn set_vertices(&mut self, points: &[PointD]) -> Result<(), FillError> {
        self.set_vertex_count(points.len())?;
        self.vertices[..points.len()].copy_from_slice(points);
        Ok(())
    }

    /// Upper bound on the number of edges `get_scan_edges` can produce.
    pub fn max_scan_edges(&self) -> usize {
        self.vertex_count * MAX_EDGES_PER_VERTEX
    }

    /// Convert the polygon into clipped scan edges.
    ///
    /// Edges are visited in winding order; each emitted edge runs top to
    /// bottom and lies within `clip.min_yi()..clip.max_yi()`. Returns the
    /// number of edges written to the front of `edges`.
    ///
    /// # Panics
    /// If `edges` holds fewer than [`max_scan_edges`](Self::max_scan_edges)
    /// entries.
    pub fn get_scan_edges(&mut self, edges: &mut [ScanEdge], clip: &ClipRectangle) -> usize {
        let count = self.vertex_count;
        if count == 0 {
            return 0;
        }
        assert!(
            edges.len() >= self.max_scan_edges(),
            "edge buffer holds {} edges, polygon may need {}",
            edges.len(),
            self.max_scan_edges()
        );

        let half_subpixel = 0.5 / SUBPIXEL_COUNT as f64;
        for (data, vertex) in self.vertex_data.iter_mut().zip(&self.vertices[..count]) {
            // Into subpixel space; both axes biased by half a subpixel.
            data.position = PointD::new(
                vertex.x + half_subpixel,
                vertex.y * SUBPIXEL_COUNT as f64 - 0.5,
            );
            data.clip_flags = clip_flags(&data.position, clip);

            data.line = if data.clip_flags & CLIP_TOP != 0 {
                clip.min_yi()
            } else if data.clip_flags & CLIP_BOTTOM != 0 {
                clip.max_yi() - 1
            } else {
                ifloor(data.position.y)
            };
        }
        self.vertex_data[count] = self.vertex_data[0];

        let mut sink = EdgeSink::new(edges);
        for pair in self.vertex_data[..=count].windows(2) {
            extract_edge(&pair[0], &pair[1], clip, &mut sink);
        }
        sink.count
    }
}

/// Emit the scan edges for the polygon edge `v0 -> v1`.
fn extract_edge(v0: &VertexData, v1: &VertexData, clip: &ClipRectangle, sink: &mut EdgeSink<'_>) {
    let clip_sum = v0.clip_flags | v1.clip_flags;
    let clip_union = v0.clip_flags & v1.clip_flags;

    if clip_union & CLIP_VERTICAL != 0 || v0.line == v1.line {
        return;
    }

    let (start, end) = if v0.position.y < v1.position.y {
        (v0, v1)
    } else {
        (v1, v0)
    };

    let first_line = start.line + 1;
    let last_line = end.line;

    if clip_union & CLIP_RIGHT != 0 {
        sink.push(ScanEdge::vertical(first_line, last_line, clip.max_xf()));
        return;
    }
    if clip_union & CLIP_LEFT != 0 {
        sink.push(ScanEdge::vertical(first_line, last_line, clip.min_xf()));
        return;
    }

    let slope = (end.position.x - start.position.x) / (end.position.y - start.position.y);

    if clip_sum & CLIP_HORIZONTAL == 0 {
        sink.push(ScanEdge::sloped(first_line, last_line, &start.position, slope));
        return;
    }

    // The edge crosses the left and/or right boundary. Compute the crossing
    // points in top-to-bottom order; a crossing the edge never reaches keeps
    // its horizontal flag and is treated as absent.
    let mut crossings = if start.position.x < end.position.x {
        [
            VertexData::on_boundary(clip.min_xf(), CLIP_LEFT),
            VertexData::on_boundary(clip.max_xf(), CLIP_RIGHT),
        ]
    } else {
        [
            VertexData::on_boundary(clip.max_xf(), CLIP_RIGHT),
            VertexData::on_boundary(clip.min_xf(), CLIP_LEFT),
        ]
    };

    let vertical_clip = clip_sum & CLIP_VERTICAL != 0;
    for crossing in crossings.iter_mut() {
        if clip_sum & crossing.clip_flags != 0 {
            crossing.position.y =
                start.position.y + (crossing.position.x - start.position.x) / slope;
            crossing.resolve_line(clip, vertical_clip);
        }
    }

    // start - crossing0 - crossing1 - end, or start - crossingN - end.
    let (top, bottom) = if !crossings[0].is_clipped_horizontally()
        && !crossings[1].is_clipped_horizontally()
    {
        if crossings[0].line != crossings[1].line {
            sink.push(ScanEdge::sloped(
                crossings[0].line + 1,
                crossings[1].line,
                &start.position,
                slope,
            ));
        }
        (&crossings[0], &crossings[1])
    } else if crossings[0].is_clipped_horizontally() {
        (&crossings[1], &crossings[1])
    } else {
        (&crossings[0], &crossings[0])
    };

    if start.line != top.line {
        // An endpoint outside the rectangle is replaced by the boundary.
        let edge = if start.is_clipped_horizontally() {
            ScanEdge::vertical(first_line, top.line, top.position.x)
        } else {
            ScanEdge::sloped(first_line, top.line, &start.position, slope)
        };
        sink.push(edge);
    }

    if bottom.line != end.line {
        let first = bottom.line + 1;
        let edge = if end.is_clipped_horizontally() {
            ScanEdge::vertical(first, last_line, bottom.position.x)
        } else {
            ScanEdge::sloped(first, last_line, &start.position, slope)
        };
        sink.push(edge);
    }
}
