//! The cartographic projection object owned by each globe descriptor.
//!
//! [`GeoProjection`] composes a raw forward transform with three-axis
//! rotation, uniform scale, translation, small-circle clipping and an
//! optional rectangular clip extent. Chainable `with_*` setters cover
//! factory construction; plain setters cover in-place mutation during
//! interaction.

pub mod path;
pub mod raw;
mod rotation;

use crate::core::{bounds::Bounds, geo::Coord, geo::Point};
use raw::RawProjection;
use rotation::Rotation;

const DEFAULT_SCALE: f64 = 150.0;
const DEFAULT_TRANSLATE: Point = Point { x: 480.0, y: 250.0 };
const DEFAULT_PRECISION: f64 = 0.7;

#[derive(Debug, Clone)]
pub struct GeoProjection {
    raw: RawProjection,
    rotate: [f64; 3],
    rotation: Rotation,
    scale: f64,
    translate: Point,
    clip_angle: Option<f64>,
    clip_extent: Option<Bounds>,
    precision: f64,
}

impl GeoProjection {
    pub fn new(raw: RawProjection) -> Self {
        Self {
            raw,
            rotate: [0.0, 0.0, 0.0],
            rotation: Rotation::from_degrees([0.0, 0.0, 0.0]),
            scale: DEFAULT_SCALE,
            translate: DEFAULT_TRANSLATE,
            clip_angle: None,
            clip_extent: None,
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn raw(&self) -> RawProjection {
        self.raw
    }

    /// Current rotation triple `(lon, lat, roll)` in degrees
    pub fn rotate(&self) -> [f64; 3] {
        self.rotate
    }

    pub fn set_rotate(&mut self, rotate: [f64; 3]) {
        self.rotate = rotate;
        self.rotation = Rotation::from_degrees(rotate);
    }

    pub fn with_rotate(mut self, rotate: [f64; 3]) -> Self {
        self.set_rotate(rotate);
        self
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn translate(&self) -> Point {
        self.translate
    }

    pub fn set_translate(&mut self, translate: Point) {
        self.translate = translate;
    }

    pub fn with_translate(mut self, translate: Point) -> Self {
        self.translate = translate;
        self
    }

    /// Small-circle clip radius in degrees from the projection center
    pub fn clip_angle(&self) -> Option<f64> {
        self.clip_angle
    }

    pub fn set_clip_angle(&mut self, angle: f64) {
        self.clip_angle = Some(angle);
    }

    pub fn with_clip_angle(mut self, angle: f64) -> Self {
        self.clip_angle = Some(angle);
        self
    }

    pub fn clip_extent(&self) -> Option<&Bounds> {
        self.clip_extent.as_ref()
    }

    pub fn set_clip_extent(&mut self, extent: Bounds) {
        self.clip_extent = Some(extent);
    }

    pub fn with_clip_extent(mut self, extent: Bounds) -> Self {
        self.clip_extent = Some(extent);
        self
    }

    /// Sampling resolution in degrees for outline and path generation
    pub fn precision(&self) -> f64 {
        self.precision
    }

    pub fn set_precision(&mut self, precision: f64) {
        self.precision = precision;
    }

    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    /// Projects a geographic coordinate (degrees) to pixel coordinates.
    ///
    /// Returns `None` when the rotated point falls outside the clip angle.
    pub fn project(&self, coord: Coord) -> Option<Point> {
        let (lambda, phi) = self
            .rotation
            .apply(coord.lon.to_radians(), coord.lat.to_radians());
        self.project_rotated(lambda, phi)
    }

    /// Projects a coordinate already expressed in rotated space (radians),
    /// honoring the clip angle.
    pub(crate) fn project_rotated(&self, lambda: f64, phi: f64) -> Option<Point> {
        if let Some(angle) = self.clip_angle {
            let c = (lambda.cos() * phi.cos()).clamp(-1.0, 1.0).acos();
            if c > angle.to_radians() + 1e-9 {
                return None;
            }
        }
        let point = self.project_rotated_unclipped(lambda, phi);
        point.is_finite().then_some(point)
    }

    /// Raw forward transform plus the screen transform, no clipping.
    pub(crate) fn project_rotated_unclipped(&self, lambda: f64, phi: f64) -> Point {
        let raw = self.raw.forward(lambda, phi);
        Point::new(
            self.translate.x + self.scale * raw.x,
            self.translate.y - self.scale * raw.y,
        )
    }
}
