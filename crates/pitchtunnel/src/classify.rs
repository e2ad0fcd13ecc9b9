//! Tunnel and strike classification.
//!
//! Strike likelihood is a bucketed heuristic, not a fitted model. The zone
//! and the four buckets are fixed so that results stay comparable across
//! releases.

use crate::integrator::Point3D;
use crate::params::PitchParameters;
use crate::vector::Vector;

/// Likelihood for a plate point inside the zone.
pub const IN_ZONE: f64 = 0.93;

/// Likelihood for a miss of under 3 inches.
pub const BALL_NEAR: f64 = 0.70;

/// Likelihood for a miss of 3 to 6 inches.
pub const BALL_WIDE: f64 = 0.52;

/// Likelihood for a miss of 6 inches or more.
pub const BALL_FAR: f64 = 0.28;

pub(crate) const INCHES_PER_FOOT: f64 = 12.0;

/// Rectangular strike zone at the plate, in feet. Edges count as in-zone.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeZone {
    /// Half the plate width, measured from the plate's center line.
    pub half_width: f64,
    /// Bottom edge height.
    pub bottom: f64,
    /// Top edge height.
    pub top: f64,
}

impl StrikeZone {
    /// The fixed zone all likelihoods are computed against.
    pub const REGULATION: Self = Self {
        half_width: 8.5 / INCHES_PER_FOOT,
        bottom: 1.5,
        top: 3.5,
    };

    /// Returns `true` if `(y, z)` lies inside or on the zone's edge.
    #[inline]
    pub fn contains(&self, y: f64, z: f64) -> bool {
        y.abs() <= self.half_width && z >= self.bottom && z <= self.top
    }

    /// How far `(y, z)` misses the zone, in inches.
    ///
    /// The lateral excess and the vertical excess are summed, not combined
    /// in quadrature. Zero inside the zone.
    pub fn miss_distance(&self, y: f64, z: f64) -> f64 {
        let lateral = (y.abs() - self.half_width).max(0.0);
        let vertical = if z < self.bottom {
            self.bottom - z
        } else if z > self.top {
            z - self.top
        } else {
            0.0
        };
        (lateral + vertical) * INCHES_PER_FOOT
    }

    /// Bucketed strike likelihood for a plate crossing at `(y, z)`.
    pub fn likelihood(&self, y: f64, z: f64) -> f64 {
        if self.contains(y, z) {
            return IN_ZONE;
        }
        match self.miss_distance(y, z) {
            miss if miss < 3.0 => BALL_NEAR,
            miss if miss < 6.0 => BALL_WIDE,
            _ => BALL_FAR,
        }
    }
}

impl Default for StrikeZone {
    fn default() -> Self {
        Self::REGULATION
    }
}

/// Strike likelihood of a plate crossing against the regulation zone.
///
/// # Example
///
/// ```rust
/// use pitchtunnel::{strike_likelihood, Point3D};
///
/// let middle = Point3D::new(54.0, 0.0, 2.5, 0.41);
/// assert_eq!(strike_likelihood(&middle), 0.93);
///
/// let bounced = Point3D::new(54.0, 0.0, 0.2, 0.43);
/// assert_eq!(strike_likelihood(&bounced), 0.28);
/// ```
#[inline]
pub fn strike_likelihood(plate: &Point3D) -> f64 {
    StrikeZone::REGULATION.likelihood(plate.y, plate.z)
}

/// Distance between the simulated tunnel point and the ideal straight-line
/// point, in the batter's (y, z) plane, in inches.
#[inline]
pub fn tunnel_deviation(tunnel: &Point3D, ideal: Vector) -> f64 {
    (tunnel.y - ideal.y).hypot(tunnel.z - ideal.z) * INCHES_PER_FOOT
}

/// Tunnel health for a measured deviation against a target tunnel width,
/// both in inches.
///
/// Peaks at 100 when the deviation matches the target exactly, and is
/// clamped to `[0, 100]`. A NaN input scores 0.
#[inline]
pub fn health_score(deviation: f64, target_width: f64) -> f64 {
    let raw = 100.0 - (deviation - target_width).abs();
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, 100.0)
    }
}

/// Offset of a plate crossing from the aim point, in inches.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlateBreak {
    /// Positive toward the glove side.
    pub horizontal: f64,
    /// Positive up.
    pub vertical: f64,
}

/// How far the plate crossing landed from where the pitch was aimed.
#[inline]
pub fn plate_break(plate: &Point3D, params: &PitchParameters) -> PlateBreak {
    PlateBreak {
        horizontal: (plate.y - params.lateral_target()) * INCHES_PER_FOOT,
        vertical: (plate.z - params.target_height()) * INCHES_PER_FOOT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: f64, z: f64) -> Point3D {
        Point3D::new(54.0, y, z, 0.4)
    }

    #[test]
    fn test_center_in_zone() {
        assert_eq!(strike_likelihood(&at(0.0, 2.5)), IN_ZONE);
    }

    #[test]
    fn test_boundaries_in_zone() {
        let zone = StrikeZone::REGULATION;
        assert_eq!(strike_likelihood(&at(zone.half_width, 2.5)), IN_ZONE);
        assert_eq!(strike_likelihood(&at(-zone.half_width, 2.5)), IN_ZONE);
        assert_eq!(strike_likelihood(&at(0.0, zone.top)), IN_ZONE);
        assert_eq!(strike_likelihood(&at(0.0, zone.bottom)), IN_ZONE);
        assert_eq!(strike_likelihood(&at(zone.half_width, zone.top)), IN_ZONE);
    }

    #[test]
    fn test_just_outside_is_near() {
        let zone = StrikeZone::REGULATION;
        assert_eq!(strike_likelihood(&at(zone.half_width + 0.01, 2.5)), BALL_NEAR);
        assert_eq!(strike_likelihood(&at(-zone.half_width - 0.01, 2.5)), BALL_NEAR);
        assert_eq!(strike_likelihood(&at(0.0, zone.top + 0.01)), BALL_NEAR);
        assert_eq!(strike_likelihood(&at(0.0, zone.bottom - 0.01)), BALL_NEAR);
    }

    #[test]
    fn test_buckets() {
        // 4 inches low.
        assert_eq!(strike_likelihood(&at(0.0, 1.5 - 4.0 / 12.0)), BALL_WIDE);
        // 7 inches high.
        assert_eq!(strike_likelihood(&at(0.0, 3.5 + 7.0 / 12.0)), BALL_FAR);
        // Way outside.
        assert_eq!(strike_likelihood(&at(3.0, 0.0)), BALL_FAR);
    }

    #[test]
    fn test_miss_distance_sums_components() {
        let zone = StrikeZone::REGULATION;
        // 2 inches wide and 2 inches low: 4 inches total, not 2.83.
        let y = zone.half_width + 2.0 / 12.0;
        let z = zone.bottom - 2.0 / 12.0;
        assert!((zone.miss_distance(y, z) - 4.0).abs() < 1e-9);
        assert_eq!(zone.likelihood(y, z), BALL_WIDE);
    }

    #[test]
    fn test_miss_distance_zero_inside() {
        assert_eq!(StrikeZone::REGULATION.miss_distance(0.1, 2.0), 0.0);
    }

    #[test]
    fn test_tunnel_deviation_inches() {
        let tunnel = Point3D::new(31.0, 0.3, 4.0, 0.22);
        let ideal = Vector::new(31.0, 0.0, 3.6);
        // 0.3 and 0.4 ft legs: 0.5 ft = 6 in.
        assert!((tunnel_deviation(&tunnel, ideal) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_tunnel_deviation_ignores_x() {
        let tunnel = Point3D::new(31.0, 1.0, 2.0, 0.2);
        let ideal = Vector::new(35.0, 1.0, 2.0);
        assert_eq!(tunnel_deviation(&tunnel, ideal), 0.0);
    }

    #[test]
    fn test_health_score() {
        assert_eq!(health_score(2.0, 2.0), 100.0);
        assert_eq!(health_score(5.0, 2.0), 97.0);
        assert_eq!(health_score(0.0, 2.0), 98.0);
        assert_eq!(health_score(250.0, 2.0), 0.0);
    }

    #[test]
    fn test_health_score_non_finite_inputs() {
        assert_eq!(health_score(2.0, f64::NAN), 0.0);
        assert_eq!(health_score(f64::NAN, 2.0), 0.0);
        assert_eq!(health_score(2.0, f64::INFINITY), 0.0);
        assert_eq!(health_score(f64::INFINITY, f64::INFINITY), 0.0);
    }

    #[test]
    fn test_plate_break() {
        let params = PitchParameters::builder().target(2.5, 0.0).build().unwrap();
        let brk = plate_break(&at(-0.5, 2.0), &params);
        assert!((brk.horizontal + 6.0).abs() < 1e-9);
        assert!((brk.vertical + 6.0).abs() < 1e-9);
    }
}
