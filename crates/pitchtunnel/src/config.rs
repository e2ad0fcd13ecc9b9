//! Integration and field constants.
//!
//! [`SimConfig::default`] holds the regulation values every result is
//! calibrated against. Overriding them is meant for analysis (a gravity-free
//! run isolates the aerodynamic terms, a finer step checks convergence), not
//! for everyday use. Any override should pass [`SimConfig::validate`] before
//! it reaches the integrator.

use thiserror::Error;

/// Standard gravity (ft/s²).
pub const GRAVITY: f64 = 32.174;

/// Distance from the rubber to the front of home plate (ft).
pub const PLATE_DISTANCE: f64 = 60.5;

/// Reasons a simulation config is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimConfigError {
    /// A field holds NaN or an infinity.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The step does not advance time.
    #[error("time step must be positive, got {0} s")]
    NonPositiveTimeStep(f64),
}

/// Configuration for a single simulation run.
///
/// # Example
///
/// ```rust
/// use pitchtunnel::SimConfig;
///
/// let config = SimConfig {
///     gravity: 0.0,
///     ..SimConfig::default()
/// };
/// assert_eq!(config.time_step, 0.005);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Fixed integration step (s).
    pub time_step: f64,
    /// Runaway guard: integration stops once elapsed time exceeds this (s).
    pub max_duration: f64,
    /// Ball-in-dirt guard: integration stops once height drops below this (ft).
    pub ground_floor: f64,
    /// Rubber-to-plate distance before extension is subtracted (ft).
    pub plate_distance: f64,
    /// Lower bound on effective travel distance (ft).
    pub min_travel: f64,
    /// Downward gravitational acceleration (ft/s²).
    pub gravity: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            time_step: 0.005,
            max_duration: 5.0,
            ground_floor: -5.0,
            plate_distance: PLATE_DISTANCE,
            min_travel: 5.0,
            gravity: GRAVITY,
        }
    }
}

impl SimConfig {
    /// Effective distance the ball travels from release to the plate.
    ///
    /// Extension shortens the trip; the result never drops below
    /// [`min_travel`](Self::min_travel).
    #[inline]
    pub fn travel_distance(&self, extension: f64) -> f64 {
        (self.plate_distance - extension).max(self.min_travel)
    }

    /// Upper bound on the number of samples a trajectory can hold.
    ///
    /// Saturates at `usize::MAX` for a config that fails [`validate`](Self::validate).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn max_samples(&self) -> usize {
        ((self.max_duration / self.time_step).ceil() as usize).saturating_add(2)
    }

    /// Checks that integration under this config is guaranteed to stop.
    ///
    /// # Errors
    ///
    /// Returns a [`SimConfigError`] when any field is non-finite or the time
    /// step is not positive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pitchtunnel::{SimConfig, SimConfigError};
    ///
    /// assert!(SimConfig::default().validate().is_ok());
    ///
    /// let stalled = SimConfig { time_step: 0.0, ..SimConfig::default() };
    /// assert_eq!(stalled.validate(), Err(SimConfigError::NonPositiveTimeStep(0.0)));
    /// ```
    pub fn validate(&self) -> Result<(), SimConfigError> {
        let fields = [
            ("time_step", self.time_step),
            ("max_duration", self.max_duration),
            ("ground_floor", self.ground_floor),
            ("plate_distance", self.plate_distance),
            ("min_travel", self.min_travel),
            ("gravity", self.gravity),
        ];
        if let Some(&(field, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SimConfigError::NonFinite { field, value });
        }
        if self.time_step <= 0.0 {
            return Err(SimConfigError::NonPositiveTimeStep(self.time_step));
        }
        Ok(())
    }
}
