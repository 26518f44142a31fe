//! The projection descriptor abstraction.
//!
//! [`Globe`] defines the eight behaviors every projection descriptor
//! shares. The trait supplies default implementations for all of them;
//! concrete descriptors provide only the three accessors, and the handful
//! of projections that differ override the single behavior that changes.
//! Exactly one live [`GeoProjection`] exists per descriptor and is never
//! shared between descriptors; the descriptor is stateless beyond it.

pub mod elements;
pub mod manipulator;
mod orientation;

use crate::core::{bounds::Bounds, geo::Point, viewport::Viewport};
use crate::globe::elements::MapElements;
use crate::globe::manipulator::Manipulator;
use crate::projection::path::{self, PathSink};
use crate::projection::GeoProjection;

/// The interactive zoom bounds `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleExtent {
    pub min: f64,
    pub max: f64,
}

impl ScaleExtent {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }
}

/// A zero-argument constructor producing a fresh projection with
/// projection-specific defaults
pub type ProjectionFactory = Box<dyn Fn() -> GeoProjection + Send + Sync>;

/// A projection descriptor: the uniform interface the rendering and
/// interaction layers drive the globe through.
pub trait Globe {
    /// Builds a fresh projection in its default configuration
    fn factory(&self) -> GeoProjection;

    /// The live projection instance owned by this descriptor
    fn projection(&self) -> &GeoProjection;

    fn projection_mut(&mut self) -> &mut GeoProjection;

    /// Pixel bounding box of the full sphere, clamped to the viewport
    fn bounds(&self, view: Viewport) -> Bounds {
        path::sphere_bounds(self.projection()).clamp_to(&view.rect())
    }

    /// The scale at which a default-configuration projection fills the
    /// viewport with a 10% margin.
    ///
    /// Measured on a fresh `factory()` instance, so the live rotation and
    /// scale never affect the result. A zero-scale factory is a
    /// configuration error and produces undefined values here.
    fn fit(&self, view: Viewport) -> f64 {
        let default_projection = self.factory();
        let bounds = path::sphere_bounds(&default_projection);
        let h_scale = bounds.width() / default_projection.scale();
        let v_scale = bounds.height() / default_projection.scale();
        (view.width / h_scale).min(view.height / v_scale) * 0.9
    }

    /// Where the projection is translated to within the viewport
    fn center(&self, view: Viewport) -> Point {
        view.center()
    }

    /// Interactive zoom bounds, independent of viewport and projection
    fn scale_extent(&self) -> ScaleExtent {
        ScaleExtent::new(25.0, 3000.0)
    }

    /// Encodes the current rotation and scale as an orientation string
    fn orientation(&self) -> String {
        let projection = self.projection();
        orientation::format_orientation(projection.rotate(), projection.scale())
    }

    /// Applies an orientation string to the live projection.
    ///
    /// Malformed longitude/latitude silently falls back to the factory's
    /// default rotation; an out-of-extent scale falls back to `fit()`. The
    /// roll component of a valid rotation is preserved, as the encoding
    /// does not carry it. Always re-translates to `center()`.
    fn set_orientation(&mut self, value: &str, view: Viewport) {
        let parts = orientation::parse_orientation(value);

        let rotate = match (parts.lon, parts.lat) {
            (Some(lon), Some(lat)) if (-90.0..=90.0).contains(&lat) => {
                let roll = self.projection().rotate()[2];
                [-lon, -lat, roll]
            }
            _ => {
                log::debug!(
                    "orientation {:?} carries no usable rotation, using default",
                    value
                );
                self.factory().rotate()
            }
        };

        let scale = match parts.scale {
            Some(scale) if self.scale_extent().contains(scale) => scale,
            _ => {
                log::debug!("orientation {:?} carries no usable scale, fitting", value);
                self.fit(view)
            }
        };

        let center = self.center(view);
        let projection = self.projection_mut();
        projection.set_rotate(rotate);
        projection.set_scale(scale);
        projection.set_translate(center);
    }

    /// Builds the drag handler for one gesture, freezing the start
    /// position, scale, and rotation baseline
    fn manipulator(&mut self, start_mouse: Point, start_scale: f64) -> Manipulator<'_> {
        Manipulator::new(self.projection_mut(), start_mouse, start_scale)
    }

    /// Renders the full-sphere silhouette onto a drawing surface, used for
    /// hit-testing and background fills
    fn define_mask(&self, sink: &mut dyn PathSink) {
        path::sphere_outline(self.projection(), sink)
    }

    /// Declares the drawing-surface node set for this projection
    fn define_map(&self) -> MapElements {
        MapElements::standard()
    }
}

/// The standard descriptor: a factory, the single projection built from it,
/// and every behavior inherited from the trait defaults.
pub struct StandardGlobe {
    factory: ProjectionFactory,
    projection: GeoProjection,
}

impl StandardGlobe {
    pub fn new(factory: ProjectionFactory) -> Self {
        let projection = factory();
        Self {
            factory,
            projection,
        }
    }
}

impl Globe for StandardGlobe {
    fn factory(&self) -> GeoProjection {
        (self.factory)()
    }

    fn projection(&self) -> &GeoProjection {
        &self.projection
    }

    fn projection_mut(&mut self) -> &mut GeoProjection {
        &mut self.projection
    }
}

/// Conic projections carry their visual weight high, so the center is
/// biased downward to compensate.
pub struct ConicEquidistantGlobe(StandardGlobe);

impl ConicEquidistantGlobe {
    pub fn new(factory: ProjectionFactory) -> Self {
        Self(StandardGlobe::new(factory))
    }
}

impl Globe for ConicEquidistantGlobe {
    fn factory(&self) -> GeoProjection {
        self.0.factory()
    }

    fn projection(&self) -> &GeoProjection {
        self.0.projection()
    }

    fn projection_mut(&mut self) -> &mut GeoProjection {
        self.0.projection_mut()
    }

    fn center(&self, view: Viewport) -> Point {
        let center = view.center();
        Point::new(center.x, center.y + view.height * 0.065)
    }
}

/// Orthographic globes shade the sphere with a radial gradient for a
/// 3-D look.
pub struct OrthographicGlobe(StandardGlobe);

impl OrthographicGlobe {
    pub fn new(factory: ProjectionFactory) -> Self {
        Self(StandardGlobe::new(factory))
    }
}

impl Globe for OrthographicGlobe {
    fn factory(&self) -> GeoProjection {
        self.0.factory()
    }

    fn projection(&self) -> &GeoProjection {
        self.0.projection()
    }

    fn projection_mut(&mut self) -> &mut GeoProjection {
        self.0.projection_mut()
    }

    fn define_map(&self) -> MapElements {
        MapElements::shaded()
    }
}

/// The Waterman butterfly's drawable region is its polyhedral silhouette,
/// not the outline bounding box, so graticule and coastline are clipped
/// to it.
pub struct WatermanGlobe(StandardGlobe);

impl WatermanGlobe {
    pub fn new(factory: ProjectionFactory) -> Self {
        Self(StandardGlobe::new(factory))
    }
}

impl Globe for WatermanGlobe {
    fn factory(&self) -> GeoProjection {
        self.0.factory()
    }

    fn projection(&self) -> &GeoProjection {
        self.0.projection()
    }

    fn projection_mut(&mut self) -> &mut GeoProjection {
        self.0.projection_mut()
    }

    fn define_map(&self) -> MapElements {
        MapElements::clipped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::raw::RawProjection;

    fn orthographic() -> StandardGlobe {
        StandardGlobe::new(Box::new(|| {
            GeoProjection::new(RawProjection::Orthographic)
                .with_precision(0.1)
                .with_clip_angle(90.0)
        }))
    }

    #[test]
    fn test_factory_builds_fresh_instances() {
        let mut globe = orthographic();
        globe.projection_mut().set_rotate([50.0, 10.0, 0.0]);
        // the factory never reflects live mutations
        assert_eq!(globe.factory().rotate(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_fit_reserves_margin() {
        let globe = orthographic();
        let view = Viewport::new(1024.0, 768.0);
        // unit disc: both ratios are 2, so fit = 768 / 2 * 0.9
        let fit = globe.fit(view);
        assert!((fit - 345.6).abs() < 2.0, "fit = {}", fit);
    }

    #[test]
    fn test_fit_ignores_live_state() {
        let mut globe = orthographic();
        let view = Viewport::new(1024.0, 768.0);
        let before = globe.fit(view);
        globe.projection_mut().set_rotate([77.0, 10.0, 0.0]);
        globe.projection_mut().set_scale(1234.0);
        let after = globe.fit(view);
        assert_eq!(before, after);
    }

    #[test]
    fn test_default_center_and_extent() {
        let globe = orthographic();
        let view = Viewport::new(900.0, 600.0);
        assert_eq!(globe.center(view), Point::new(450.0, 300.0));
        assert_eq!(globe.scale_extent(), ScaleExtent::new(25.0, 3000.0));
    }

    #[test]
    fn test_conic_center_is_biased_down() {
        let globe = ConicEquidistantGlobe::new(Box::new(|| {
            GeoProjection::new(RawProjection::ConicEquidistant).with_precision(0.1)
        }));
        let view = Viewport::new(900.0, 600.0);
        assert_eq!(globe.center(view), Point::new(450.0, 300.0 + 600.0 * 0.065));
    }

    #[test]
    fn test_bounds_clamped_to_viewport() {
        let mut globe = orthographic();
        let view = Viewport::new(400.0, 300.0);
        globe.set_orientation("0,0,200", view);
        let bounds = globe.bounds(view);
        assert!(bounds.is_valid());
        assert!(bounds.min.x >= 0.0 && bounds.min.y >= 0.0);
        assert!(bounds.max.x <= 400.0 && bounds.max.y <= 300.0);
    }

    #[test]
    fn test_set_orientation_translates_to_center() {
        let mut globe = orthographic();
        let view = Viewport::new(1024.0, 768.0);
        globe.set_orientation("30,-40,500", view);
        assert_eq!(globe.projection().translate(), Point::new(512.0, 384.0));
        assert_eq!(globe.projection().rotate(), [-30.0, 40.0, 0.0]);
        assert_eq!(globe.projection().scale(), 500.0);
    }
}
