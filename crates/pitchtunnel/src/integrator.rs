//! Fixed-step trajectory integration.
//!
//! The ball is advanced with fixed semi-implicit Euler steps (velocity first,
//! then position with the new velocity) until it reaches the plate, drops
//! into the dirt, or runs out of time. The scheme drifts slightly over a
//! flight; at a 5 ms step and a ~0.4 s flight that drift is well under the
//! resolution anything downstream cares about.

use core::fmt;

use tracing::debug;

use crate::config::SimConfig;
use crate::forces::ForceModel;
use crate::params::PitchParameters;
use crate::vector::Vector;

/// A sampled ball position with its elapsed time since release.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3D {
    /// Forward distance from release (ft).
    pub x: f64,
    /// Horizontal offset, positive toward the glove side (ft).
    pub y: f64,
    /// Height (ft).
    pub z: f64,
    /// Elapsed time since release (s).
    pub t: f64,
}

impl Point3D {
    /// Creates a new sample.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, t: f64) -> Self {
        Self { x, y, z, t }
    }

    /// The spatial part of the sample.
    #[inline]
    pub const fn position(&self) -> Vector {
        Vector::new(self.x, self.y, self.z)
    }

    /// Distance to `other` in the plane facing the batter (y, z), in feet.
    #[inline]
    pub fn lateral_distance(&self, other: &Point3D) -> f64 {
        (self.y - other.y).hypot(self.z - other.z)
    }

    fn lerp(&self, other: &Point3D, fraction: f64) -> Point3D {
        Point3D {
            x: self.x + (other.x - self.x) * fraction,
            y: self.y + (other.y - self.y) * fraction,
            z: self.z + (other.z - self.z) * fraction,
            t: self.t + (other.t - self.t) * fraction,
        }
    }
}

/// Why integration stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Termination {
    /// The ball reached the plate's forward distance.
    ReachedPlate,
    /// The ball fell below the ground floor before reaching the plate.
    HitGround,
    /// Elapsed time passed the maximum duration.
    TimedOut,
}

impl Termination {
    /// Returns `true` when the path ends at the plate.
    #[inline]
    pub const fn reached_plate(self) -> bool {
        matches!(self, Self::ReachedPlate)
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReachedPlate => write!(f, "reached plate"),
            Self::HitGround => write!(f, "hit ground"),
            Self::TimedOut => write!(f, "timed out"),
        }
    }
}

/// A time-ordered flight path from release to a terminal condition.
///
/// Always holds at least the release sample. Elapsed time is strictly
/// increasing; forward distance is non-decreasing for any pitch thrown toward
/// the plate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trajectory {
    points: Vec<Point3D>,
    termination: Termination,
}

impl Trajectory {
    /// All samples, release first.
    #[inline]
    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a trajectory holds at least its release sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The release sample (t = 0).
    #[inline]
    pub fn first(&self) -> Point3D {
        self.points[0]
    }

    /// The final sample.
    #[inline]
    pub fn last(&self) -> Point3D {
        self.points[self.points.len() - 1]
    }

    /// Why integration stopped.
    #[inline]
    pub const fn termination(&self) -> Termination {
        self.termination
    }

    /// Iterates over the samples.
    pub fn iter(&self) -> core::slice::Iter<'_, Point3D> {
        self.points.iter()
    }

    /// Ball position at elapsed time `t`, interpolated between samples.
    ///
    /// Times outside the flight clamp to the first or last sample. Intended
    /// for playback adapters animating against a clock.
    pub fn at_time(&self, t: f64) -> Point3D {
        let first = self.first();
        let last = self.last();
        if t <= first.t {
            return first;
        }
        if t >= last.t {
            return last;
        }
        // t is strictly increasing, so the bracket is found by binary search.
        let upper = self.points.partition_point(|p| p.t < t);
        let a = self.points[upper - 1];
        let b = self.points[upper];
        a.lerp(&b, (t - a.t) / (b.t - a.t))
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Point3D;
    type IntoIter = core::slice::Iter<'a, Point3D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

pub(crate) fn interpolate(a: &Point3D, b: &Point3D, fraction: f64) -> Point3D {
    a.lerp(b, fraction)
}

/// Integrates a pitch from release to a terminal condition.
///
/// The ball leaves `(0, release_side, release_height)` aimed straight at the
/// target point, then each step evaluates the force model, advances velocity,
/// and advances position with the new velocity.
///
/// `config` must pass [`SimConfig::validate`]; a non-positive time step never
/// advances the clock.
///
/// # Example
///
/// ```rust
/// use pitchtunnel::{integrate, PitchParameters, SimConfig, Termination};
///
/// let params = PitchParameters::builder().build().unwrap();
/// let path = integrate(&params, &SimConfig::default());
///
/// assert_eq!(path.termination(), Termination::ReachedPlate);
/// assert_eq!(path.first().t, 0.0);
/// ```
pub fn integrate(params: &PitchParameters, config: &SimConfig) -> Trajectory {
    let travel = config.travel_distance(params.extension());
    let release = Vector::new(0.0, params.release_side(), params.release_height());
    let target = Vector::new(travel, params.lateral_target(), params.target_height());
    let model = ForceModel::new(params, config);
    let dt = config.time_step;

    let mut pos = release;
    let mut vel = (target - release).normalized() * params.velocity();
    let mut points = Vec::with_capacity(128);
    points.push(Point3D::new(pos.x, pos.y, pos.z, 0.0));

    let mut steps: u64 = 0;
    let termination = loop {
        let acc = model.acceleration(vel);
        vel += acc * dt;
        pos += vel * dt;
        steps += 1;
        // Time from the step count rather than a running sum, so it never drifts.
        #[allow(clippy::cast_precision_loss)]
        let t = steps as f64 * dt;
        points.push(Point3D::new(pos.x, pos.y, pos.z, t));

        if pos.x >= travel {
            break Termination::ReachedPlate;
        }
        if pos.z < config.ground_floor {
            break Termination::HitGround;
        }
        if t > config.max_duration {
            break Termination::TimedOut;
        }
    };

    debug!(
        samples = points.len(),
        travel,
        %termination,
        "trajectory integrated"
    );

    Trajectory {
        points,
        termination,
    }
}
