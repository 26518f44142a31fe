//! Raw forward transforms for the supported projections.
//!
//! A raw projection maps a rotated spherical coordinate (radians) onto the
//! unit-scale plane; [`super::GeoProjection`] composes one with rotation,
//! scale, translation, and clipping. Y grows north here; the screen
//! transform flips it.

use crate::core::geo::Point;
use crate::projection::rotation::Rotation;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, PI, SQRT_2};

/// Latitude of the octant face centers used by the butterfly layout,
/// atan(1/sqrt(2))
const FACE_LAT: f64 = 0.615_479_708_670_387_3;

/// Conic equidistant standard parallels (0 and 60 degrees)
const CONIC_PHI0: f64 = 0.0;
const CONIC_PHI1: f64 = PI / 3.0;

/// The raw projection families backing the descriptor registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawProjection {
    AzimuthalEqualArea,
    AzimuthalEquidistant,
    ConicEquidistant,
    Equirectangular,
    Mercator,
    Mollweide,
    Orthographic,
    Stereographic,
    Waterman,
    Winkel3,
}

impl RawProjection {
    /// Projects a rotated spherical coordinate onto the unit-scale plane.
    pub fn forward(&self, lambda: f64, phi: f64) -> Point {
        match self {
            Self::AzimuthalEqualArea => azimuthal_equal_area(lambda, phi),
            Self::AzimuthalEquidistant => azimuthal_equidistant(lambda, phi),
            Self::ConicEquidistant => conic_equidistant(lambda, phi),
            Self::Equirectangular => Point::new(lambda, phi),
            Self::Mercator => mercator(lambda, phi),
            Self::Mollweide => mollweide(lambda, phi),
            Self::Orthographic => Point::new(phi.cos() * lambda.sin(), phi.sin()),
            Self::Stereographic => stereographic(lambda, phi),
            Self::Waterman => waterman_butterfly(lambda, phi),
            Self::Winkel3 => winkel3(lambda, phi),
        }
    }
}

fn mercator(lambda: f64, phi: f64) -> Point {
    // y clamped to the square extent the default rectangular clip imposes
    let y = (FRAC_PI_4 + phi / 2.0).tan().ln();
    Point::new(lambda, y.clamp(-PI, PI))
}

fn stereographic(lambda: f64, phi: f64) -> Point {
    let cos_phi = phi.cos();
    let k = 1.0 + lambda.cos() * cos_phi;
    Point::new(cos_phi * lambda.sin() / k, phi.sin() / k)
}

fn azimuthal_equal_area(lambda: f64, phi: f64) -> Point {
    let cos_phi = phi.cos();
    let k = (2.0 / (1.0 + lambda.cos() * cos_phi)).sqrt();
    Point::new(k * cos_phi * lambda.sin(), k * phi.sin())
}

fn azimuthal_equidistant(lambda: f64, phi: f64) -> Point {
    let cos_phi = phi.cos();
    let c = (lambda.cos() * cos_phi).clamp(-1.0, 1.0).acos();
    let sin_c = c.sin();
    let k = if sin_c.abs() < 1e-12 { 1.0 } else { c / sin_c };
    Point::new(k * cos_phi * lambda.sin(), k * phi.sin())
}

fn conic_equidistant(lambda: f64, phi: f64) -> Point {
    let n = (CONIC_PHI0.cos() - CONIC_PHI1.cos()) / (CONIC_PHI1 - CONIC_PHI0);
    let g = CONIC_PHI0.cos() / n + CONIC_PHI0;
    let rho = g - phi;
    Point::new(rho * (n * lambda).sin(), g - rho * (n * lambda).cos())
}

fn mollweide(lambda: f64, phi: f64) -> Point {
    let k = PI * phi.sin();
    let mut theta = phi;
    for _ in 0..25 {
        let delta =
            (2.0 * theta + (2.0 * theta).sin() - k) / (2.0 + 2.0 * (2.0 * theta).cos());
        if !delta.is_finite() {
            break;
        }
        theta -= delta;
        if delta.abs() < 1e-10 {
            break;
        }
    }
    Point::new(
        2.0 * SQRT_2 / PI * lambda * theta.cos(),
        SQRT_2 * theta.sin(),
    )
}

fn winkel3(lambda: f64, phi: f64) -> Point {
    // mean of the Aitoff projection and the equirectangular projection at
    // the standard parallel acos(2/pi)
    let cos_phi1 = 2.0 / PI;
    let cos_phi = phi.cos();
    let half = lambda / 2.0;
    let alpha = (cos_phi * half.cos()).clamp(-1.0, 1.0).acos();
    let sinc_inv = if alpha == 0.0 { 1.0 } else { alpha / alpha.sin() };
    Point::new(
        (2.0 * cos_phi * half.sin() * sinc_inv + lambda * cos_phi1) / 2.0,
        (phi.sin() * sinc_inv + phi) / 2.0,
    )
}

/// Polyhedral butterfly: gnomonic projection per octahedron face, each
/// hemisphere pair unfolded along its shared equator edge and the four
/// wings fanned out diagonally.
fn waterman_butterfly(lambda: f64, phi: f64) -> Point {
    let quadrant = (((lambda + PI) / FRAC_PI_2).floor() as i32).clamp(0, 3);
    let face_lon = -3.0 * FRAC_PI_4 + quadrant as f64 * FRAC_PI_2;
    let north = phi >= 0.0;
    let face_lat = if north { FACE_LAT } else { -FACE_LAT };

    // gnomonic about the face center
    let rotation = Rotation::from_radians(-face_lon, -face_lat, 0.0);
    let (l, p) = rotation.apply(lambda, phi);
    let cos_p = p.cos();
    // denominator bounded at the face corners
    let k = (l.cos() * cos_p).max(0.05);
    let gx = cos_p * l.sin() / k;
    let gy = p.sin() / k;

    // unfold so the equator edge midpoint sits at the local origin
    let (ux, uy) = if north {
        (gx, gy + FRAC_1_SQRT_2)
    } else {
        (gx, gy - FRAC_1_SQRT_2)
    };

    let (sin_w, cos_w) = face_lon.sin_cos();
    Point::new(ux * cos_w - uy * sin_w, ux * sin_w + uy * cos_w)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(p: Point, x: f64, y: f64) {
        assert!((p.x - x).abs() < EPS, "x: {} vs {}", p.x, x);
        assert!((p.y - y).abs() < EPS, "y: {} vs {}", p.y, y);
    }

    #[test]
    fn test_equirectangular_is_identity() {
        assert_close(RawProjection::Equirectangular.forward(0.5, -0.25), 0.5, -0.25);
    }

    #[test]
    fn test_origin_maps_to_origin() {
        for raw in [
            RawProjection::AzimuthalEqualArea,
            RawProjection::AzimuthalEquidistant,
            RawProjection::ConicEquidistant,
            RawProjection::Equirectangular,
            RawProjection::Mercator,
            RawProjection::Mollweide,
            RawProjection::Orthographic,
            RawProjection::Stereographic,
            RawProjection::Winkel3,
        ] {
            let p = raw.forward(0.0, 0.0);
            assert!(p.x.abs() < EPS && p.y.abs() < EPS, "{:?}: {:?}", raw, p);
        }
    }

    #[test]
    fn test_orthographic_equator_edge() {
        assert_close(RawProjection::Orthographic.forward(FRAC_PI_2, 0.0), 1.0, 0.0);
        assert_close(RawProjection::Orthographic.forward(0.0, FRAC_PI_2), 0.0, 1.0);
    }

    #[test]
    fn test_mercator_clamps_poles() {
        let p = RawProjection::Mercator.forward(0.0, FRAC_PI_2);
        assert!(p.y.is_finite());
        assert!((p.y - PI).abs() < EPS);
    }

    #[test]
    fn test_mollweide_pole() {
        let p = RawProjection::Mollweide.forward(0.0, FRAC_PI_2);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_mollweide_equal_area_symmetry() {
        let n = RawProjection::Mollweide.forward(1.0, 0.7);
        let s = RawProjection::Mollweide.forward(1.0, -0.7);
        assert!((n.x - s.x).abs() < EPS);
        assert!((n.y + s.y).abs() < EPS);
    }

    #[test]
    fn test_azimuthal_equidistant_radius_is_arc_length() {
        // a point at angular distance c from the center projects at radius c
        let c = 1.2_f64;
        let p = RawProjection::AzimuthalEquidistant.forward(c, 0.0);
        assert!((p.x - c).abs() < EPS);
        assert!(p.y.abs() < EPS);
    }

    #[test]
    fn test_stereographic_hemisphere_edge() {
        // the equatorial aspect maps the 90-degree meridian to radius 1
        assert_close(RawProjection::Stereographic.forward(FRAC_PI_2, 0.0), 1.0, 0.0);
    }

    #[test]
    fn test_winkel3_zero_meridian() {
        // along the central meridian x reduces to 0
        let p = RawProjection::Winkel3.forward(0.0, 0.9);
        assert!(p.x.abs() < EPS);
        assert!(p.y > 0.0);
    }

    #[test]
    fn test_waterman_is_finite_everywhere() {
        let mut lon = -180.0;
        while lon <= 180.0 {
            let mut lat = -90.0;
            while lat <= 90.0 {
                let p = RawProjection::Waterman
                    .forward(f64::to_radians(lon), f64::to_radians(lat));
                assert!(p.is_finite(), "waterman diverged at ({}, {})", lon, lat);
                lat += 7.5;
            }
            lon += 7.5;
        }
    }

    #[test]
    fn test_waterman_wings_differ_by_quadrant() {
        let a = RawProjection::Waterman.forward(f64::to_radians(-135.0), 0.5);
        let b = RawProjection::Waterman.forward(f64::to_radians(135.0), 0.5);
        assert!(a.distance_to(&b) > 0.5);
    }
}
