//! Pointer-drag manipulation of a projection.

use crate::core::geo::Point;
use crate::projection::GeoProjection;

/// Translates pointer drag deltas into projection rotation and a scale
/// input into zoom.
///
/// All state is frozen at construction: the start position, a sensitivity
/// of `60 / start_scale` (keeping drag feel roughly scale-invariant), and a
/// rotation baseline. Each [`move_to`](Self::move_to) depends only on that
/// state and its own arguments, so identical inputs are idempotent and
/// nothing accumulates across calls. Construct a fresh manipulator at the
/// start of every drag gesture.
#[derive(Debug)]
pub struct Manipulator<'a> {
    projection: &'a mut GeoProjection,
    start_mouse: Point,
    sensitivity: f64,
    offset: Point,
}

impl<'a> Manipulator<'a> {
    pub(crate) fn new(
        projection: &'a mut GeoProjection,
        start_mouse: Point,
        start_scale: f64,
    ) -> Self {
        let sensitivity = 60.0 / start_scale; // good drag scaling factor
        let rotate = projection.rotate();
        let offset = Point::new(rotate[0] / sensitivity, -rotate[1] / sensitivity);
        Self {
            projection,
            start_mouse,
            sensitivity,
            offset,
        }
    }

    /// Applies the drag delta from the start position and sets the scale.
    ///
    /// The scale is applied verbatim; the caller clamps it to the
    /// descriptor's scale extent beforehand.
    pub fn move_to(&mut self, mouse: Point, scale: f64) {
        let xd = mouse.x - self.start_mouse.x + self.offset.x;
        let yd = mouse.y - self.start_mouse.y + self.offset.y;
        let roll = self.projection.rotate()[2];
        self.projection.set_rotate([
            xd * self.sensitivity,
            -yd * self.sensitivity,
            roll,
        ]);
        self.projection.set_scale(scale);
    }
}
