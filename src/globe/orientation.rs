//! The orientation string codec.
//!
//! An orientation is the textual triple `longitude,latitude,scale` used to
//! share or restore a view, typically embedded in a URL. The encoding
//! negates the stored rotation (a projection rotated by `(-lon, -lat)`
//! centers `(lon, lat)`), rounds angles to two decimals and the scale to an
//! integer, and never carries the roll component.

/// Fields parsed out of an orientation string. `None` marks a missing or
/// non-finite component; range policy is applied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct OrientationParts {
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    pub scale: Option<f64>,
}

pub(crate) fn parse_orientation(value: &str) -> OrientationParts {
    let parts: Vec<&str> = value.split(',').collect();
    OrientationParts {
        lon: parse_part(parts.first()),
        lat: parse_part(parts.get(1)),
        scale: parse_part(parts.get(2)),
    }
}

fn parse_part(part: Option<&&str>) -> Option<f64> {
    part.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

pub(crate) fn format_orientation(rotate: [f64; 3], scale: f64) -> String {
    format!(
        "{},{},{}",
        format_angle(-rotate[0]),
        format_angle(-rotate[1]),
        scale.round() as i64
    )
}

/// Rounds to two decimals and prints the shortest form ("10", not "10.00")
fn format_angle(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // normalize -0
        return "0".to_string();
    }
    format!("{}", rounded)
}
