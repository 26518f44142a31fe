use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Represents a bounding box in screen/pixel coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Creates new bounds from two points
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Gets the width of the bounds
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Gets the height of the bounds
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Checks if the bounds intersect with another bounds
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(other.max.x < self.min.x
            || other.min.x > self.max.x
            || other.max.y < self.min.y
            || other.min.y > self.max.y)
    }

    /// Gets the intersection of two bounds
    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        if !self.intersects(other) {
            return None;
        }

        Some(Bounds::new(
            Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        ))
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Clamps a point to be within the bounds
    pub fn clamp(&self, point: &Point) -> Point {
        Point::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
        )
    }

    /// Clamps both corners of these bounds into another bounds.
    /// Disjoint inputs collapse to a degenerate rectangle on the edge of
    /// `other` rather than becoming invalid.
    pub fn clamp_to(&self, other: &Bounds) -> Bounds {
        Bounds::new(other.clamp(&self.min), other.clamp(&self.max))
    }

    /// Checks if the bounds are valid (min <= max)
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Creates empty bounds (invalid bounds that can be extended)
    pub fn empty() -> Self {
        Self::new(
            Point::new(f64::INFINITY, f64::INFINITY),
            Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_creation() {
        let bounds = Bounds::from_coords(10.0, 20.0, 30.0, 40.0);
        assert_eq!(bounds.width(), 20.0);
        assert_eq!(bounds.height(), 20.0);
    }

    #[test]
    fn test_bounds_intersection() {
        let bounds1 = Bounds::from_coords(0.0, 0.0, 10.0, 10.0);
        let bounds2 = Bounds::from_coords(5.0, 5.0, 15.0, 15.0);

        let intersection = bounds1.intersection(&bounds2).unwrap();
        assert_eq!(intersection.min, Point::new(5.0, 5.0));
        assert_eq!(intersection.max, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_bounds_clamp_to() {
        let view = Bounds::from_coords(0.0, 0.0, 100.0, 100.0);

        let inside = Bounds::from_coords(10.0, 10.0, 50.0, 50.0);
        assert_eq!(inside.clamp_to(&view), inside);

        let overflowing = Bounds::from_coords(-20.0, 30.0, 140.0, 90.0);
        assert_eq!(
            overflowing.clamp_to(&view),
            Bounds::from_coords(0.0, 30.0, 100.0, 90.0)
        );

        // Disjoint bounds collapse to a degenerate rect, never invert
        let disjoint = Bounds::from_coords(200.0, 200.0, 300.0, 300.0);
        let clamped = disjoint.clamp_to(&view);
        assert!(clamped.is_valid());
        assert_eq!(clamped.width(), 0.0);
    }

    #[test]
    fn test_bounds_extend_from_empty() {
        let mut bounds = Bounds::empty();
        assert!(!bounds.is_valid());

        bounds.extend(&Point::new(5.0, -3.0));
        bounds.extend(&Point::new(-1.0, 7.0));
        assert_eq!(bounds, Bounds::from_coords(-1.0, -3.0, 5.0, 7.0));
    }
}
