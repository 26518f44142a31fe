//! Declarative drawing-surface element sets.
//!
//! A descriptor does not draw; it declares which nodes the rendering layer
//! should create, in order. The coastline node is a placeholder populated
//! later by the data-loading layer.

/// A stop in a radial gradient fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Offset as a fraction of the gradient radius
    pub offset: f64,
    pub color: &'static str,
}

/// How the sphere background is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SphereFillStyle {
    /// Flat fill styled by the rendering layer
    Flat,
    /// References the gradient declared by `RadialGradientDefinition`
    Gradient,
}

/// A single drawing-surface node
#[derive(Debug, Clone, PartialEq)]
pub enum MapElement {
    /// Reusable full-sphere outline definition
    SphereDefinition,
    /// Clip path referencing the sphere definition
    ClipPathDefinition,
    /// Radial gradient for 3-D-looking shading
    RadialGradientDefinition {
        cx: f64,
        cy: f64,
        radius: f64,
        stops: Vec<GradientStop>,
    },
    /// Filled sphere background
    SphereFill { style: SphereFillStyle },
    /// Latitude/longitude grid path
    Graticule { clipped: bool },
    /// Empty coastline path, populated by the data layer
    Coastline { clipped: bool },
    /// Stroked sphere outline on the foreground layer
    SphereStroke,
}

/// The node sets for the map layer and the foreground layer, in render order
#[derive(Debug, Clone, PartialEq)]
pub struct MapElements {
    pub map: Vec<MapElement>,
    pub foreground: Vec<MapElement>,
}

impl MapElements {
    /// The default node set shared by most projections
    pub fn standard() -> Self {
        Self {
            map: vec![
                MapElement::SphereDefinition,
                MapElement::SphereFill {
                    style: SphereFillStyle::Flat,
                },
                MapElement::Graticule { clipped: false },
                MapElement::Coastline { clipped: false },
            ],
            foreground: vec![MapElement::SphereStroke],
        }
    }

    /// Radial-gradient shading in place of the flat fill
    pub fn shaded() -> Self {
        Self {
            map: vec![
                MapElement::RadialGradientDefinition {
                    cx: 0.5,
                    cy: 0.49,
                    radius: 0.5,
                    stops: vec![
                        GradientStop {
                            offset: 0.69,
                            color: "#303030",
                        },
                        GradientStop {
                            offset: 0.91,
                            color: "#202020",
                        },
                        GradientStop {
                            offset: 0.96,
                            color: "#000000",
                        },
                    ],
                },
                MapElement::SphereDefinition,
                MapElement::SphereFill {
                    style: SphereFillStyle::Gradient,
                },
                MapElement::Graticule { clipped: false },
                MapElement::Coastline { clipped: false },
            ],
            foreground: vec![MapElement::SphereStroke],
        }
    }

    /// Graticule and coastline clipped to the exact sphere silhouette,
    /// for projections whose outline is not the drawable region
    pub fn clipped() -> Self {
        Self {
            map: vec![
                MapElement::SphereDefinition,
                MapElement::ClipPathDefinition,
                MapElement::SphereFill {
                    style: SphereFillStyle::Flat,
                },
                MapElement::Graticule { clipped: true },
                MapElement::Coastline { clipped: true },
            ],
            foreground: vec![MapElement::SphereStroke],
        }
    }
}
