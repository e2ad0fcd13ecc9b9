//! Engine entry points: one pitch in, one [`SimulationResult`] out.

use tracing::trace;

use crate::classify::{plate_break, strike_likelihood, tunnel_deviation, PlateBreak};
use crate::config::SimConfig;
use crate::integrator::{integrate, Point3D, Termination, Trajectory};
use crate::params::PitchParameters;
use crate::resolver::{ideal_point, point_at_distance};
use crate::vector::Vector;

/// Everything derived from simulating one pitch.
///
/// Results are immutable and independent; simulating the same parameters
/// again produces an equal, separately owned result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationResult {
    trajectory: Trajectory,
    travel_distance: f64,
    tunnel_window: f64,
    release: Vector,
    target: Vector,
    plate: Point3D,
    tunnel: Option<Point3D>,
    ideal_tunnel: Option<Vector>,
    tunnel_deviation: Option<f64>,
    strike_likelihood: f64,
    plate_break: PlateBreak,
}

impl SimulationResult {
    /// The sampled flight path.
    #[inline]
    pub const fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Why integration stopped.
    #[inline]
    pub const fn termination(&self) -> Termination {
        self.trajectory.termination()
    }

    /// Seconds from release to the plate crossing (or to the last sample if
    /// the ball never got there).
    #[inline]
    pub const fn flight_time(&self) -> f64 {
        self.plate.t
    }

    /// Effective release-to-plate distance after extension (ft).
    #[inline]
    pub const fn travel_distance(&self) -> f64 {
        self.travel_distance
    }

    /// Tunnel window the result was evaluated at (ft before the plate).
    #[inline]
    pub const fn tunnel_window(&self) -> f64 {
        self.tunnel_window
    }

    /// Release point.
    #[inline]
    pub const fn release(&self) -> Vector {
        self.release
    }

    /// Aim point at the plate.
    #[inline]
    pub const fn target(&self) -> Vector {
        self.target
    }

    /// Where the ball crosses the plate.
    #[inline]
    pub const fn plate(&self) -> Point3D {
        self.plate
    }

    /// Where the ball is at the tunnel window, or `None` if the window is at
    /// least as long as the whole flight.
    #[inline]
    pub const fn tunnel(&self) -> Option<Point3D> {
        self.tunnel
    }

    /// Where a pitch with no break would be at the tunnel window.
    #[inline]
    pub const fn ideal_tunnel(&self) -> Option<Vector> {
        self.ideal_tunnel
    }

    /// Distance between [`tunnel`](Self::tunnel) and
    /// [`ideal_tunnel`](Self::ideal_tunnel) in inches.
    #[inline]
    pub const fn tunnel_deviation(&self) -> Option<f64> {
        self.tunnel_deviation
    }

    /// Bucketed strike likelihood of the plate crossing.
    #[inline]
    pub const fn strike_likelihood(&self) -> f64 {
        self.strike_likelihood
    }

    /// Plate crossing relative to the aim point, in inches.
    #[inline]
    pub const fn plate_break(&self) -> PlateBreak {
        self.plate_break
    }
}

/// Simulates a pitch under the regulation [`SimConfig`].
///
/// `tunnel_window` is the distance in feet before the plate at which
/// tunneling is measured.
///
/// # Example
///
/// ```rust
/// use pitchtunnel::{simulate, PitchParameters};
///
/// let params = PitchParameters::builder().build().unwrap();
/// let result = simulate(&params, 23.0);
///
/// assert!(result.tunnel().is_some());
/// assert!(result.tunnel_deviation().unwrap() >= 0.0);
/// ```
pub fn simulate(params: &PitchParameters, tunnel_window: f64) -> SimulationResult {
    simulate_with(params, tunnel_window, &SimConfig::default())
}

/// Simulates a pitch under a custom [`SimConfig`].
///
/// A negative `tunnel_window` is treated as zero (tunnel at the plate).
pub fn simulate_with(
    params: &PitchParameters,
    tunnel_window: f64,
    config: &SimConfig,
) -> SimulationResult {
    let tunnel_window = tunnel_window.max(0.0);
    let travel = config.travel_distance(params.extension());
    let release = Vector::new(0.0, params.release_side(), params.release_height());
    let target = Vector::new(travel, params.lateral_target(), params.target_height());

    let trajectory = integrate(params, config);
    let plate = point_at_distance(&trajectory, travel);

    let tunnel_x = travel - tunnel_window;
    let (tunnel, ideal_tunnel, deviation) = if tunnel_x > 0.0 {
        let tunnel = point_at_distance(&trajectory, tunnel_x);
        let ideal = ideal_point(release, target, tunnel_x / travel);
        (Some(tunnel), Some(ideal), Some(tunnel_deviation(&tunnel, ideal)))
    } else {
        (None, None, None)
    };

    let result = SimulationResult {
        travel_distance: travel,
        tunnel_window,
        release,
        target,
        plate,
        tunnel,
        ideal_tunnel,
        tunnel_deviation: deviation,
        strike_likelihood: strike_likelihood(&plate),
        plate_break: plate_break(&plate, params),
        trajectory,
    };

    trace!(
        flight_time = result.flight_time(),
        plate.y = plate.y,
        plate.z = plate.z,
        deviation = ?result.tunnel_deviation,
        strike = result.strike_likelihood,
        "pitch simulated"
    );

    result
}
