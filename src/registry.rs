//! The fixed registry of named projection descriptors.
//!
//! Pure declarative configuration: each entry maps a key to a builder that
//! hands the standard descriptor a factory with projection-specific
//! defaults. Builders take the current viewport because the stereographic
//! factory bakes the view rectangle into its clip extent.

use crate::core::viewport::Viewport;
use crate::globe::{
    ConicEquidistantGlobe, Globe, OrthographicGlobe, StandardGlobe, WatermanGlobe,
};
use crate::projection::{raw::RawProjection, GeoProjection};
use crate::{GlobeError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A zero-state constructor for a named descriptor
pub type GlobeBuilder = fn(Viewport) -> Box<dyn Globe>;

static REGISTRY: Lazy<HashMap<&'static str, GlobeBuilder>> = Lazy::new(|| {
    let mut registry: HashMap<&'static str, GlobeBuilder> = HashMap::new();
    registry.insert("atlantis", atlantis);
    registry.insert("azimuthal_equal_area", azimuthal_equal_area);
    registry.insert("azimuthal_equidistant", azimuthal_equidistant);
    registry.insert("conic_equidistant", conic_equidistant);
    registry.insert("equirectangular", equirectangular);
    registry.insert("mercator", mercator);
    registry.insert("orthographic", orthographic);
    registry.insert("stereographic", stereographic);
    registry.insert("waterman", waterman);
    registry.insert("winkel3", winkel3);
    registry
});

/// Looks up a descriptor builder by name
pub fn get(name: &str) -> Option<GlobeBuilder> {
    REGISTRY.get(name).copied()
}

/// Builds a named descriptor, or reports the unknown key
pub fn build(name: &str, view: Viewport) -> Result<Box<dyn Globe>> {
    match get(name) {
        Some(builder) => Ok(builder(view)),
        None => {
            log::debug!("projection lookup missed: {:?}", name);
            Err(GlobeError::UnknownProjection(name.to_string()))
        }
    }
}

/// The registered projection names, sorted
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}

fn atlantis(_view: Viewport) -> Box<dyn Globe> {
    Box::new(StandardGlobe::new(Box::new(|| {
        GeoProjection::new(RawProjection::Mollweide)
            .with_rotate([30.0, -45.0, 90.0])
            .with_precision(0.1)
    })))
}

fn azimuthal_equal_area(_view: Viewport) -> Box<dyn Globe> {
    Box::new(StandardGlobe::new(Box::new(|| {
        GeoProjection::new(RawProjection::AzimuthalEqualArea)
            .with_precision(0.1)
            .with_clip_angle(180.0 - 0.001)
    })))
}

fn azimuthal_equidistant(_view: Viewport) -> Box<dyn Globe> {
    Box::new(StandardGlobe::new(Box::new(|| {
        GeoProjection::new(RawProjection::AzimuthalEquidistant)
            .with_precision(0.1)
            .with_clip_angle(180.0 - 0.001)
    })))
}

fn conic_equidistant(_view: Viewport) -> Box<dyn Globe> {
    Box::new(ConicEquidistantGlobe::new(Box::new(|| {
        GeoProjection::new(RawProjection::ConicEquidistant).with_precision(0.1)
    })))
}

fn equirectangular(_view: Viewport) -> Box<dyn Globe> {
    Box::new(StandardGlobe::new(Box::new(|| {
        GeoProjection::new(RawProjection::Equirectangular).with_precision(0.1)
    })))
}

fn mercator(_view: Viewport) -> Box<dyn Globe> {
    Box::new(StandardGlobe::new(Box::new(|| {
        GeoProjection::new(RawProjection::Mercator).with_precision(0.1)
    })))
}

fn orthographic(_view: Viewport) -> Box<dyn Globe> {
    Box::new(OrthographicGlobe::new(Box::new(|| {
        GeoProjection::new(RawProjection::Orthographic)
            .with_precision(0.1)
            .with_clip_angle(90.0)
    })))
}

fn stereographic(view: Viewport) -> Box<dyn Globe> {
    Box::new(StandardGlobe::new(Box::new(move || {
        GeoProjection::new(RawProjection::Stereographic)
            .with_rotate([-43.0, -20.0, 0.0])
            .with_precision(1.0)
            .with_clip_angle(180.0 - 0.0001)
            .with_clip_extent(view.rect())
    })))
}

fn waterman(_view: Viewport) -> Box<dyn Globe> {
    Box::new(WatermanGlobe::new(Box::new(|| {
        GeoProjection::new(RawProjection::Waterman)
            .with_rotate([20.0, 0.0, 0.0])
            .with_precision(0.1)
    })))
}

fn winkel3(_view: Viewport) -> Box<dyn Globe> {
    Box::new(StandardGlobe::new(Box::new(|| {
        GeoProjection::new(RawProjection::Winkel3).with_precision(0.1)
    })))
}
