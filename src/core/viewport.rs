use crate::core::{bounds::Bounds, geo::Point};
use serde::{Deserialize, Serialize};

/// The size of the rendering viewport in pixels.
///
/// Supplied by the surrounding layout layer and consulted on every fit,
/// center, and bounds computation rather than cached, so resizing the
/// display is honored automatically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The viewport rectangle anchored at the origin
    pub fn rect(&self) -> Bounds {
        Bounds::from_coords(0.0, 0.0, self.width, self.height)
    }

    /// The geometric center of the viewport
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024.0, 768.0)
    }
}
