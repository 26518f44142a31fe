//! Path generation over a projection: sphere outline, pixel bounds, and the
//! graticule.

use crate::core::{bounds::Bounds, geo::Coord, geo::Point};
use crate::projection::GeoProjection;
use std::f64::consts::{FRAC_PI_2, PI};

/// Minimal contract for the external drawing surface, canvas-style.
pub trait PathSink {
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    fn close(&mut self);
}

/// A [`PathSink`] that records commands, used in tests and for measuring.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub commands: Vec<PathCommand>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

impl PathSink for RecordingSink {
    fn move_to(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.commands.push(PathCommand::LineTo(point));
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}

/// Renders the full-sphere silhouette onto a drawing surface.
///
/// For projections clipped to a small circle the outline is that circle;
/// otherwise it is the image of the projection domain boundary.
pub fn sphere_outline(projection: &GeoProjection, sink: &mut dyn PathSink) {
    let points = outline_points(projection);
    let mut started = false;
    for point in points {
        if !started {
            sink.move_to(point);
            started = true;
        } else {
            sink.line_to(point);
        }
    }
    if started {
        sink.close();
    }
}

/// Pixel-space bounding box of the full sphere under the projection.
///
/// Rotation-invariant: rotating a sphere does not change its image, so the
/// samples are taken directly in rotated space.
pub fn sphere_bounds(projection: &GeoProjection) -> Bounds {
    let mut bounds = Bounds::empty();
    for point in outline_points(projection) {
        bounds.extend(&point);
    }
    // interior sweep catches extrema the boundary misses
    let mut lon: f64 = -180.0;
    while lon <= 180.0 {
        let mut lat: f64 = -90.0;
        while lat <= 90.0 {
            if let Some(point) =
                projection.project_rotated(lon.to_radians(), lat.to_radians())
            {
                bounds.extend(&point);
            }
            lat += 10.0;
        }
        lon += 10.0;
    }
    if !bounds.is_valid() {
        return Bounds::default();
    }
    match projection.clip_extent() {
        Some(extent) => bounds.clamp_to(extent),
        None => bounds,
    }
}

fn outline_points(projection: &GeoProjection) -> Vec<Point> {
    let step = projection.precision().clamp(0.1, 5.0).to_radians();
    let mut points = match projection.clip_angle() {
        Some(angle) => clip_circle_points(projection, angle.to_radians(), step),
        None => domain_boundary_points(projection, step),
    };
    points.retain(Point::is_finite);
    if let Some(extent) = projection.clip_extent() {
        for point in &mut points {
            *point = extent.clamp(point);
        }
    }
    points
}

/// Samples the small circle of the clip angle around the rotated origin.
/// Clipping happens after rotation, so the circle is fixed in rotated space.
fn clip_circle_points(projection: &GeoProjection, angle: f64, step: f64) -> Vec<Point> {
    let samples = ((2.0 * PI / step).ceil() as usize).max(90);
    let (sin_a, cos_a) = angle.sin_cos();
    (0..=samples)
        .map(|i| {
            let t = i as f64 / samples as f64 * 2.0 * PI;
            let x = cos_a;
            let y = sin_a * t.sin();
            let z = sin_a * t.cos();
            let lambda = y.atan2(x);
            let phi = z.clamp(-1.0, 1.0).asin();
            projection.project_rotated_unclipped(lambda, phi)
        })
        .collect()
}

/// Walks the boundary of the projection domain rectangle
/// [-PI, PI] x [-PI/2, PI/2].
fn domain_boundary_points(projection: &GeoProjection, step: f64) -> Vec<Point> {
    let mut points = Vec::new();
    let samples = ((PI / step).ceil() as usize).max(45);
    let edge = |points: &mut Vec<Point>, f: &dyn Fn(f64) -> (f64, f64)| {
        for i in 0..=samples {
            let t = i as f64 / samples as f64;
            let (lambda, phi) = f(t);
            points.push(projection.project_rotated_unclipped(lambda, phi));
        }
    };
    // antimeridian down, south pole line, antimeridian up, north pole line
    edge(&mut points, &|t| (PI, FRAC_PI_2 - t * PI));
    edge(&mut points, &|t| (PI - t * 2.0 * PI, -FRAC_PI_2));
    edge(&mut points, &|t| (-PI, -FRAC_PI_2 + t * PI));
    edge(&mut points, &|t| (-PI + t * 2.0 * PI, FRAC_PI_2));
    points
}

/// The rendered grid of latitude/longitude lines.
#[derive(Debug, Clone)]
pub struct Graticule {
    pub meridian_step: f64,
    pub parallel_step: f64,
    pub parallel_limit: f64,
    pub sample_step: f64,
}

impl Default for Graticule {
    fn default() -> Self {
        Self {
            meridian_step: 10.0,
            parallel_step: 10.0,
            parallel_limit: 80.0,
            sample_step: 2.5,
        }
    }
}

impl Graticule {
    /// The grid polylines in geographic coordinates.
    pub fn lines(&self) -> Vec<Vec<Coord>> {
        let mut lines = Vec::new();

        let mut lon = -180.0;
        while lon < 180.0 {
            let mut line = Vec::new();
            let mut lat = -self.parallel_limit;
            while lat <= self.parallel_limit + 1e-9 {
                line.push(Coord::new(lon, lat));
                lat += self.sample_step;
            }
            lines.push(line);
            lon += self.meridian_step;
        }

        let mut lat = -self.parallel_limit;
        while lat <= self.parallel_limit + 1e-9 {
            let mut line = Vec::new();
            let mut lon = -180.0;
            while lon <= 180.0 + 1e-9 {
                line.push(Coord::new(lon, lat));
                lon += self.sample_step;
            }
            lines.push(line);
            lat += self.parallel_step;
        }

        lines
    }

    /// Renders the grid through a projection, lifting the pen across
    /// clipped gaps.
    pub fn render(&self, projection: &GeoProjection, sink: &mut dyn PathSink) {
        for line in self.lines() {
            let mut pen_down = false;
            for coord in line {
                match projection.project(coord) {
                    Some(point) => {
                        if pen_down {
                            sink.line_to(point);
                        } else {
                            sink.move_to(point);
                            pen_down = true;
                        }
                    }
                    None => pen_down = false,
                }
            }
        }
    }
}
