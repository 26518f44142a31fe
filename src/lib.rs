//! # Globes
//!
//! A registry of interchangeable geographic-projection descriptors for
//! rendering a rotatable, zoomable globe.
//!
//! Each descriptor wraps a [`projection::GeoProjection`] with a uniform set
//! of behaviors: compute a best-fit scale for a viewport, derive a default
//! center, expose zoom bounds, encode/decode orientation strings, build the
//! drag/zoom manipulator, and declare the drawing-surface elements needed to
//! render the globe. Ten projections share the default behaviors through the
//! [`globe::Globe`] trait, overriding only what differs.

pub mod core;
pub mod globe;
pub mod projection;
pub mod registry;

// Re-export public API
pub use crate::core::{
    bounds::Bounds,
    geo::{Coord, Point},
    viewport::Viewport,
};

pub use crate::globe::{
    elements::{GradientStop, MapElement, MapElements, SphereFillStyle},
    manipulator::Manipulator,
    ConicEquidistantGlobe, Globe, OrthographicGlobe, ProjectionFactory, ScaleExtent,
    StandardGlobe, WatermanGlobe,
};

pub use crate::projection::{
    path::{Graticule, PathSink},
    raw::RawProjection,
    GeoProjection,
};

pub use crate::registry::GlobeBuilder;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, GlobeError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum GlobeError {
    #[error("no such projection: {0}")]
    UnknownProjection(String),
}
