//! Antialiased arrows and ellipse outlines built from filled polygons.
//!
//! Each primitive is broken into triangles and quads that are filled one at
//! a time through a single reusable [`PolygonData`].

use crate::basics::PointD;
use crate::color::Rgba8;
use crate::error::FillError;
use crate::polygon_data::PolygonData;
use crate::polygon_filler::PolygonFiller;
use crate::rendering_buffer::RenderingBuffer;

/// Arrowhead length, in multiples of the line thickness.
const ARROW_HEAD_LENGTH: f64 = 10.0;
/// Arrowhead width at its base, in multiples of the line thickness.
const ARROW_HEAD_WIDTH: f64 = 7.0;
/// Ellipse segments are `ELLIPSE_STEP / (width + height)` radians apart.
const ELLIPSE_STEP: f64 = 15.0;

/// Drawing context owning a filler and a four-vertex scratch polygon.
#[derive(Debug)]
pub struct AntialiasedDraw {
    filler: PolygonFiller,
    poly: PolygonData,
}

impl AntialiasedDraw {
    pub fn new() -> Self {
        Self::with_filler(PolygonFiller::new())
    }

    pub fn with_filler(filler: PolygonFiller) -> Self {
        Self {
            filler,
            poly: PolygonData::new(4),
        }
    }

    pub fn filler(&self) -> &PolygonFiller {
        &self.filler
    }

    /// Draw a line from `start` to `end` ending in a filled arrowhead.
    ///
    /// The head is `10 * thickness` long and `7 * thickness` wide with its
    /// tip at `end`; the shaft is `thickness` wide and runs from `start` to
    /// the base of the head.
    pub fn draw_single_arrow(
        &mut self,
        buffer: &mut RenderingBuffer,
        start: PointD,
        end: PointD,
        thickness: f64,
        color: Rgba8,
    ) -> Result<(), FillError> {
        let delta = PointD::new(end.x - start.x, end.y - start.y);
        if delta.len() == 0.0 {
            return Ok(());
        }
        let ortho = PointD::new(delta.y, -delta.x);

        let head = delta.with_len(thickness * ARROW_HEAD_LENGTH);
        let base = PointD::new(end.x - head.x, end.y - head.y);

        let o = ortho.with_len(thickness * ARROW_HEAD_WIDTH / 2.0);
        self.poly.set_vertices(&[
            end,
            PointD::new(base.x + o.x, base.y + o.y),
            PointD::new(base.x - o.x, base.y - o.y),
        ])?;
        self.filler.draw_poly(buffer, &mut self.poly, color)?;

        let o = ortho.with_len(thickness / 2.0);
        self.poly.set_vertices(&[
            PointD::new(start.x + o.x, start.y + o.y),
            PointD::new(base.x + o.x, base.y + o.y),
            PointD::new(base.x - o.x, base.y - o.y),
            PointD::new(start.x - o.x, start.y - o.y),
        ])?;
        self.filler.draw_poly(buffer, &mut self.poly, color)
    }

    /// Draw the outline of an axis-aligned ellipse.
    ///
    /// `width` and `height` are the horizontal and vertical radii; the
    /// outline is `thickness` wide, centred on the ellipse.
    pub fn draw_ellipse(
        &mut self,
        buffer: &mut RenderingBuffer,
        centre: PointD,
        width: f64,
        height: f64,
        thickness: f64,
        color: Rgba8,
    ) -> Result<(), FillError> {
        // Also rejects NaN.
        if !(width + height > 0.0) {
            return Ok(());
        }
        let step = ELLIPSE_STEP / (width + height);
        let half = thickness / 2.0;

        let on_ellipse = |angle: f64| {
            let (sin, cos) = angle.sin_cos();
            let pos = PointD::new(centre.x + width * cos, centre.y + height * sin);
            let radial = PointD::new(cos, sin).with_len(half);
            (pos, radial)
        };

        let mut angle = 0.0;
        while angle < std::f64::consts::TAU {
            let (pos1, r1) = on_ellipse(angle);
            let (pos2, r2) = on_ellipse(angle + step);

            self.poly.set_vertices(&[
                PointD::new(pos1.x + r1.x, pos1.y + r1.y),
                PointD::new(pos2.x + r2.x, pos2.y + r2.y),
                PointD::new(pos2.x - r2.x, pos2.y - r2.y),
                PointD::new(pos1.x - r1.x, pos1.y - r1.y),
            ])?;
            self.filler.draw_poly(buffer, &mut self.poly, color)?;

            angle += step;
        }
        Ok(())
    }
}

impl Default for AntialiasedDraw {
    fn default() -> Self {
        Self::new()
    }
}
