//! Pitch release parameters and the validation layer that guards the engine.
//!
//! The engine assumes its input is physically sensible and never re-checks
//! it mid-flight. [`PitchParametersBuilder::build`] is where that check lives:
//! every [`PitchParameters`] value in existence has passed it.

use thiserror::Error;

/// Miles per hour to feet per second.
pub const MPH_TO_FPS: f64 = 5280.0 / 3600.0;

/// Converts a speed in miles per hour to feet per second.
///
/// # Example
///
/// ```rust
/// use pitchtunnel::mph_to_fps;
///
/// assert!((mph_to_fps(60.0) - 88.0).abs() < 1e-9);
/// ```
#[inline]
pub fn mph_to_fps(mph: f64) -> f64 {
    mph * MPH_TO_FPS
}

/// Reasons a set of pitch parameters is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// A field holds NaN or an infinity.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The pitch has no forward speed.
    #[error("velocity must be positive, got {0} ft/s")]
    NonPositiveVelocity(f64),

    /// Spin rate below zero.
    #[error("spin rate cannot be negative, got {0} rpm")]
    NegativeSpinRate(f64),

    /// Drag scale below zero would accelerate the ball.
    #[error("drag scale cannot be negative, got {0}")]
    NegativeDrag(f64),

    /// Extension below zero would place release behind the rubber.
    #[error("extension cannot be negative, got {0} ft")]
    NegativeExtension(f64),
}

/// Validated, immutable release parameters for a single pitch.
///
/// Construct with [`PitchParameters::builder`]. All lengths are in feet,
/// speeds in feet per second, angles in degrees.
///
/// # Example
///
/// ```rust
/// use pitchtunnel::PitchParameters;
///
/// let params = PitchParameters::builder()
///     .velocity_mph(92.0)
///     .spin_rate(2300.0)
///     .build()
///     .unwrap();
///
/// assert!(params.velocity() > 134.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawParameters"))]
pub struct PitchParameters {
    velocity: f64,
    spin_rate: f64,
    spin_axis: f64,
    release_height: f64,
    release_side: f64,
    extension: f64,
    target_height: f64,
    lateral_target: f64,
    drag: f64,
    spin_efficiency: f64,
    seam_shift: f64,
}

impl PitchParameters {
    /// Starts a builder seeded with a neutral fastball.
    pub fn builder() -> PitchParametersBuilder {
        PitchParametersBuilder::default()
    }

    /// Returns a builder seeded with this pitch's values, for tweaking one
    /// field at a time.
    pub fn to_builder(&self) -> PitchParametersBuilder {
        PitchParametersBuilder {
            velocity: self.velocity,
            spin_rate: self.spin_rate,
            spin_axis: self.spin_axis,
            release_height: self.release_height,
            release_side: self.release_side,
            extension: self.extension,
            target_height: self.target_height,
            lateral_target: self.lateral_target,
            drag: self.drag,
            spin_efficiency: self.spin_efficiency,
            seam_shift: self.seam_shift,
        }
    }

    /// Release speed in feet per second.
    #[inline]
    pub const fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Release speed in miles per hour.
    #[inline]
    pub fn velocity_mph(&self) -> f64 {
        self.velocity / MPH_TO_FPS
    }

    /// Spin rate in revolutions per minute.
    #[inline]
    pub const fn spin_rate(&self) -> f64 {
        self.spin_rate
    }

    /// Spin axis in degrees (180 = pure backspin, 0 = pure topspin).
    #[inline]
    pub const fn spin_axis(&self) -> f64 {
        self.spin_axis
    }

    /// Release height above the ground (ft).
    #[inline]
    pub const fn release_height(&self) -> f64 {
        self.release_height
    }

    /// Lateral release offset, positive toward the glove side (ft).
    #[inline]
    pub const fn release_side(&self) -> f64 {
        self.release_side
    }

    /// Distance in front of the rubber at release (ft).
    #[inline]
    pub const fn extension(&self) -> f64 {
        self.extension
    }

    /// Aim height at the plate (ft).
    #[inline]
    pub const fn target_height(&self) -> f64 {
        self.target_height
    }

    /// Lateral aim point at the plate (ft).
    #[inline]
    pub const fn lateral_target(&self) -> f64 {
        self.lateral_target
    }

    /// Drag scale, 1.0 being sea-level air for a regulation ball.
    #[inline]
    pub const fn drag(&self) -> f64 {
        self.drag
    }

    /// Fraction of spin that produces Magnus lift, in `[0, 1]`.
    #[inline]
    pub const fn spin_efficiency(&self) -> f64 {
        self.spin_efficiency
    }

    /// Seam-shifted-wake force magnitude.
    #[inline]
    pub const fn seam_shift(&self) -> f64 {
        self.seam_shift
    }
}

/// Builder for [`PitchParameters`].
///
/// Unset fields keep the defaults of a league-average four-seam fastball
/// aimed at the middle of the zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchParametersBuilder {
    velocity: f64,
    spin_rate: f64,
    spin_axis: f64,
    release_height: f64,
    release_side: f64,
    extension: f64,
    target_height: f64,
    lateral_target: f64,
    drag: f64,
    spin_efficiency: f64,
    seam_shift: f64,
}

impl Default for PitchParametersBuilder {
    fn default() -> Self {
        Self {
            velocity: mph_to_fps(94.0),
            spin_rate: 2300.0,
            spin_axis: 180.0,
            release_height: 6.0,
            release_side: -1.5,
            extension: 6.3,
            target_height: 2.5,
            lateral_target: 0.0,
            drag: 1.0,
            spin_efficiency: 0.9,
            seam_shift: 0.0,
        }
    }
}

impl PitchParametersBuilder {
    /// Sets release speed in miles per hour.
    pub fn velocity_mph(mut self, mph: f64) -> Self {
        self.velocity = mph_to_fps(mph);
        self
    }

    /// Sets release speed in feet per second.
    pub fn velocity_fps(mut self, fps: f64) -> Self {
        self.velocity = fps;
        self
    }

    /// Sets spin rate (rpm).
    pub fn spin_rate(mut self, rpm: f64) -> Self {
        self.spin_rate = rpm;
        self
    }

    /// Sets spin axis (degrees).
    pub fn spin_axis(mut self, degrees: f64) -> Self {
        self.spin_axis = degrees;
        self
    }

    /// Sets release height and side (ft).
    pub fn release(mut self, height: f64, side: f64) -> Self {
        self.release_height = height;
        self.release_side = side;
        self
    }

    /// Sets release height alone (ft).
    pub fn release_height(mut self, height: f64) -> Self {
        self.release_height = height;
        self
    }

    /// Sets release side alone (ft).
    pub fn release_side(mut self, side: f64) -> Self {
        self.release_side = side;
        self
    }

    /// Sets extension (ft).
    pub fn extension(mut self, feet: f64) -> Self {
        self.extension = feet;
        self
    }

    /// Sets the aim point at the plate: height, then lateral offset (ft).
    pub fn target(mut self, height: f64, lateral: f64) -> Self {
        self.target_height = height;
        self.lateral_target = lateral;
        self
    }

    /// Sets aim height alone (ft).
    pub fn target_height(mut self, height: f64) -> Self {
        self.target_height = height;
        self
    }

    /// Sets lateral aim offset alone (ft).
    pub fn lateral_target(mut self, lateral: f64) -> Self {
        self.lateral_target = lateral;
        self
    }

    /// Sets the drag scale.
    pub fn drag(mut self, drag: f64) -> Self {
        self.drag = drag;
        self
    }

    /// Sets spin efficiency; clamped to `[0, 1]` on build.
    pub fn spin_efficiency(mut self, efficiency: f64) -> Self {
        self.spin_efficiency = efficiency;
        self
    }

    /// Sets the seam-shift force magnitude.
    pub fn seam_shift(mut self, seam_shift: f64) -> Self {
        self.seam_shift = seam_shift;
        self
    }

    /// Validates the fields and produces the immutable parameter record.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] when any field is non-finite, the
    /// velocity is not positive, or spin rate, drag or extension is negative.
    pub fn build(self) -> Result<PitchParameters, ParameterError> {
        let fields = [
            ("velocity", self.velocity),
            ("spin_rate", self.spin_rate),
            ("spin_axis", self.spin_axis),
            ("release_height", self.release_height),
            ("release_side", self.release_side),
            ("extension", self.extension),
            ("target_height", self.target_height),
            ("lateral_target", self.lateral_target),
            ("drag", self.drag),
            ("spin_efficiency", self.spin_efficiency),
            ("seam_shift", self.seam_shift),
        ];
        if let Some(&(field, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ParameterError::NonFinite { field, value });
        }
        if self.velocity <= 0.0 {
            return Err(ParameterError::NonPositiveVelocity(self.velocity));
        }
        if self.spin_rate < 0.0 {
            return Err(ParameterError::NegativeSpinRate(self.spin_rate));
        }
        if self.drag < 0.0 {
            return Err(ParameterError::NegativeDrag(self.drag));
        }
        if self.extension < 0.0 {
            return Err(ParameterError::NegativeExtension(self.extension));
        }

        Ok(self.assume_valid())
    }

    /// Produces the record without the checks in [`build`](Self::build).
    /// Only for values fixed in source, such as the built-in presets.
    pub(crate) fn assume_valid(self) -> PitchParameters {
        PitchParameters {
            velocity: self.velocity,
            spin_rate: self.spin_rate,
            spin_axis: self.spin_axis,
            release_height: self.release_height,
            release_side: self.release_side,
            extension: self.extension,
            target_height: self.target_height,
            lateral_target: self.lateral_target,
            drag: self.drag,
            spin_efficiency: self.spin_efficiency.clamp(0.0, 1.0),
            seam_shift: self.seam_shift,
        }
    }
}

/// Unvalidated wire form; deserialization goes through the builder.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawParameters {
    velocity: f64,
    spin_rate: f64,
    spin_axis: f64,
    release_height: f64,
    release_side: f64,
    extension: f64,
    target_height: f64,
    lateral_target: f64,
    drag: f64,
    spin_efficiency: f64,
    seam_shift: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawParameters> for PitchParameters {
    type Error = ParameterError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        PitchParametersBuilder {
            velocity: raw.velocity,
            spin_rate: raw.spin_rate,
            spin_axis: raw.spin_axis,
            release_height: raw.release_height,
            release_side: raw.release_side,
            extension: raw.extension,
            target_height: raw.target_height,
            lateral_target: raw.lateral_target,
            drag: raw.drag,
            spin_efficiency: raw.spin_efficiency,
            seam_shift: raw.seam_shift,
        }
        .build()
    }
}
