//! Resolves a discrete trajectory to exact forward distances.

use crate::integrator::{interpolate, Point3D, Trajectory};
use crate::vector::Vector;

/// Ball position at forward distance `x`, linearly interpolated between the
/// two samples that bracket it.
///
/// Distances before the first sample return the first sample, distances past
/// the last return the last; nothing is extrapolated.
///
/// # Example
///
/// ```rust
/// use pitchtunnel::{integrate, point_at_distance, PitchParameters, SimConfig};
///
/// let params = PitchParameters::builder().extension(6.5).build().unwrap();
/// let path = integrate(&params, &SimConfig::default());
///
/// let plate = point_at_distance(&path, 54.0);
/// assert!((plate.x - 54.0).abs() < 1e-9);
/// ```
pub fn point_at_distance(trajectory: &Trajectory, x: f64) -> Point3D {
    let points = trajectory.points();
    let first = trajectory.first();
    let last = trajectory.last();
    if x <= first.x {
        return first;
    }
    if x >= last.x {
        return last;
    }

    points
        .windows(2)
        .find(|pair| pair[0].x <= x && x <= pair[1].x)
        .map_or(last, |pair| {
            let (a, b) = (&pair[0], &pair[1]);
            let span = b.x - a.x;
            if span > 0.0 {
                interpolate(a, b, (x - a.x) / span)
            } else {
                *a
            }
        })
}

/// Point on the straight line from `release` to `target` at `fraction` of the
/// way (0 = release, 1 = target).
///
/// This is where a pitch thrown with no break at all would be, independent
/// of any simulated path.
#[inline]
pub fn ideal_point(release: Vector, target: Vector, fraction: f64) -> Vector {
    release + (target - release) * fraction
}
