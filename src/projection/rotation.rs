use std::f64::consts::{PI, TAU};

/// Three-axis spherical rotation applied before the raw projection.
///
/// The rotation recenters the visible hemisphere: a projection rotated by
/// `(-lon, -lat, roll)` places `(lon, lat)` at the projection origin.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rotation {
    delta_lambda: f64,
    cos_delta_phi: f64,
    sin_delta_phi: f64,
    cos_delta_gamma: f64,
    sin_delta_gamma: f64,
    rotates_phi_gamma: bool,
}

impl Rotation {
    pub fn from_degrees(rotate: [f64; 3]) -> Self {
        Self::from_radians(
            rotate[0].to_radians(),
            rotate[1].to_radians(),
            rotate[2].to_radians(),
        )
    }

    pub fn from_radians(delta_lambda: f64, delta_phi: f64, delta_gamma: f64) -> Self {
        Self {
            delta_lambda,
            cos_delta_phi: delta_phi.cos(),
            sin_delta_phi: delta_phi.sin(),
            cos_delta_gamma: delta_gamma.cos(),
            sin_delta_gamma: delta_gamma.sin(),
            rotates_phi_gamma: delta_phi != 0.0 || delta_gamma != 0.0,
        }
    }

    /// Rotates a spherical coordinate (radians in, radians out).
    pub fn apply(&self, lambda: f64, phi: f64) -> (f64, f64) {
        let lambda = normalize_lambda(lambda + self.delta_lambda);
        if !self.rotates_phi_gamma {
            return (lambda, phi);
        }

        let cos_phi = phi.cos();
        let x = lambda.cos() * cos_phi;
        let y = lambda.sin() * cos_phi;
        let z = phi.sin();
        let k = z * self.cos_delta_phi + x * self.sin_delta_phi;

        (
            (y * self.cos_delta_gamma - k * self.sin_delta_gamma)
                .atan2(x * self.cos_delta_phi - z * self.sin_delta_phi),
            clamped_asin(k * self.cos_delta_gamma + y * self.sin_delta_gamma),
        )
    }
}

/// Wraps a longitude into [-PI, PI]
pub(crate) fn normalize_lambda(lambda: f64) -> f64 {
    if lambda.abs() > PI {
        (lambda + PI).rem_euclid(TAU) - PI
    } else {
        lambda
    }
}

fn clamped_asin(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}
