//! Aerodynamic and gravitational force model.
//!
//! Four terms act on the ball, all expressed directly as accelerations:
//!
//! - **Gravity**: constant, straight down.
//! - **Drag**: quadratic, opposing the direction of travel.
//! - **Magnus lift**: proportional to `axis × v`, scaled by spin efficiency
//!   and by spin rate relative to [`REFERENCE_SPIN_RATE`].
//! - **Seam-shifted wake**: an empirical bias of the same form as Magnus, but
//!   about an axis rotated [`SEAM_SHIFT_OFFSET`] degrees from the spin axis.
//!
//! The seam-shift term is a tunable bias, not a first-principles model. Its
//! form and coefficients are fixed; changing them shifts every result.

use crate::config::SimConfig;
use crate::params::PitchParameters;
use crate::vector::Vector;

/// Drag acceleration per unit drag scale per (ft/s)² of speed, in 1/ft.
pub const DRAG_FACTOR: f64 = 0.002;

/// Magnus acceleration per unit efficiency at the reference spin rate, in 1/s.
pub const MAGNUS_FACTOR: f64 = 0.21;

/// Spin rate at which the Magnus term runs at full [`MAGNUS_FACTOR`] (rpm).
pub const REFERENCE_SPIN_RATE: f64 = 2200.0;

/// Seam-shift acceleration per unit seam-shift magnitude, in 1/s.
pub const SEAM_SHIFT_FACTOR: f64 = 0.075;

/// Angle between the spin axis and the seam-shift axis (degrees).
pub const SEAM_SHIFT_OFFSET: f64 = 90.0;

/// Unit spin axis for an angle in degrees.
///
/// The lateral reference axis `(0, 1, 0)` is rotated through the
/// lateral/vertical plane: `(0, cos θ, sin θ)`. For a ball travelling toward
/// the plate, 180° is pure backspin (Magnus lifts), 0° pure topspin, and 90°
/// pure sidespin breaking to the glove side.
///
/// # Example
///
/// ```rust
/// use pitchtunnel::spin_axis_vector;
///
/// let axis = spin_axis_vector(180.0);
/// assert!((axis.y + 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn spin_axis_vector(degrees: f64) -> Vector {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vector::new(0.0, cos, sin)
}

/// Precomputed force coefficients for one pitch.
///
/// Built once per simulation; [`acceleration`](Self::acceleration) is then
/// called every integration step with the current velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceModel {
    gravity: Vector,
    drag: f64,
    magnus: f64,
    seam_shift: f64,
    spin_axis: Vector,
    seam_axis: Vector,
}

impl ForceModel {
    /// Derives the coefficients for `params` under `config`.
    pub fn new(params: &PitchParameters, config: &SimConfig) -> Self {
        Self {
            gravity: Vector::new(0.0, 0.0, -config.gravity),
            drag: DRAG_FACTOR * params.drag(),
            magnus: MAGNUS_FACTOR
                * params.spin_efficiency()
                * (params.spin_rate() / REFERENCE_SPIN_RATE),
            seam_shift: SEAM_SHIFT_FACTOR * params.seam_shift(),
            spin_axis: spin_axis_vector(params.spin_axis()),
            seam_axis: spin_axis_vector(params.spin_axis() + SEAM_SHIFT_OFFSET),
        }
    }

    /// Combined acceleration at velocity `v` (ft/s²).
    #[inline]
    pub fn acceleration(&self, v: Vector) -> Vector {
        let drag = v * (-self.drag * v.magnitude());
        let magnus = self.spin_axis.cross(v) * self.magnus;
        let seam = self.seam_axis.cross(v) * self.seam_shift;
        self.gravity + drag + magnus + seam
    }

    /// Unit spin axis used by the Magnus term.
    #[inline]
    pub const fn spin_axis(&self) -> Vector {
        self.spin_axis
    }

    /// Unit axis used by the seam-shift term.
    #[inline]
    pub const fn seam_axis(&self) -> Vector {
        self.seam_axis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn model(builder: crate::params::PitchParametersBuilder) -> ForceModel {
        ForceModel::new(&builder.build().unwrap(), &SimConfig::default())
    }

    fn quiet() -> crate::params::PitchParametersBuilder {
        PitchParameters::builder()
            .spin_rate(0.0)
            .drag(0.0)
            .seam_shift(0.0)
    }

    #[test]
    fn test_spin_axis_is_unit() {
        for deg in [0.0, 37.0, 90.0, 180.0, 255.5, 360.0, -45.0] {
            let axis = spin_axis_vector(deg);
            assert!((axis.magnitude() - 1.0).abs() < TOLERANCE);
            assert_eq!(axis.x, 0.0);
        }
    }

    #[test]
    fn test_gravity_only() {
        let m = model(quiet());
        let a = m.acceleration(Vector::new(130.0, 2.0, -5.0));
        assert!(a.x.abs() < TOLERANCE);
        assert!(a.y.abs() < TOLERANCE);
        assert!((a.z + 32.174).abs() < TOLERANCE);
    }

    #[test]
    fn test_drag_opposes_motion() {
        let m = ForceModel::new(
            &quiet().drag(1.0).build().unwrap(),
            &SimConfig {
                gravity: 0.0,
                ..SimConfig::default()
            },
        );
        let v = Vector::new(100.0, 0.0, 0.0);
        let a = m.acceleration(v);

        assert!(a.x < 0.0);
        assert!((a.x + DRAG_FACTOR * 100.0 * 100.0).abs() < TOLERANCE);
        assert!(a.y.abs() < TOLERANCE && a.z.abs() < TOLERANCE);
    }

    #[test]
    fn test_drag_is_quadratic() {
        let config = SimConfig {
            gravity: 0.0,
            ..SimConfig::default()
        };
        let m = ForceModel::new(&quiet().drag(0.8).build().unwrap(), &config);
        let slow = m.acceleration(Vector::new(50.0, 0.0, 0.0)).magnitude();
        let fast = m.acceleration(Vector::new(100.0, 0.0, 0.0)).magnitude();
        assert!((fast / slow - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_backspin_lifts() {
        let m = model(quiet().spin_rate(2200.0).spin_efficiency(1.0).spin_axis(180.0));
        let a = m.acceleration(Vector::new(130.0, 0.0, 0.0));
        let lift = a.z + 32.174;
        assert!((lift - MAGNUS_FACTOR * 130.0).abs() < 1e-9);
        assert!(a.y.abs() < 1e-9);
    }

    #[test]
    fn test_topspin_drops() {
        let m = model(quiet().spin_rate(2200.0).spin_efficiency(1.0).spin_axis(0.0));
        let a = m.acceleration(Vector::new(130.0, 0.0, 0.0));
        assert!(a.z < -32.174);
    }

    #[test]
    fn test_sidespin_breaks_glove_side() {
        let m = model(quiet().spin_rate(2500.0).spin_efficiency(1.0).spin_axis(90.0));
        let a = m.acceleration(Vector::new(130.0, 0.0, 0.0));
        assert!(a.y > 0.0);
    }

    #[test]
    fn test_magnus_scales_with_efficiency_and_rate() {
        let v = Vector::new(120.0, 0.0, 0.0);
        let full = model(quiet().spin_rate(2200.0).spin_efficiency(1.0));
        let half = model(quiet().spin_rate(2200.0).spin_efficiency(0.5));
        let double = model(quiet().spin_rate(4400.0).spin_efficiency(1.0));

        let lift = |m: &ForceModel| m.acceleration(v).z + 32.174;
        assert!((lift(&half) * 2.0 - lift(&full)).abs() < 1e-9);
        assert!((lift(&double) - lift(&full) * 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_magnus_perpendicular_to_velocity() {
        let config = SimConfig {
            gravity: 0.0,
            ..SimConfig::default()
        };
        let m = ForceModel::new(
            &quiet()
                .spin_rate(2600.0)
                .spin_axis(135.0)
                .build()
                .unwrap(),
            &config,
        );
        let v = Vector::new(125.0, 3.0, -8.0);
        assert!(m.acceleration(v).dot(v).abs() < 1e-9);
    }

    #[test]
    fn test_seam_shift_axis_offset() {
        let m = model(quiet().spin_axis(180.0).seam_shift(1.0));
        let expected = spin_axis_vector(270.0);
        assert!((m.seam_axis() - expected).magnitude() < TOLERANCE);

        // Seam axis straight down pushes a pitch toward the arm side.
        let a = m.acceleration(Vector::new(130.0, 0.0, 0.0));
        assert!(a.y < 0.0);
        assert!((a.y + SEAM_SHIFT_FACTOR * 130.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_velocity_only_gravity() {
        let m = model(
            PitchParameters::builder()
                .spin_rate(3000.0)
                .drag(1.2)
                .seam_shift(0.5),
        );
        let a = m.acceleration(Vector::zero());
        assert_eq!(a, Vector::new(0.0, 0.0, -32.174));
    }
}
