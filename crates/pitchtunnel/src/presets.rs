//! Built-in pitch archetypes for a right-handed pitcher.
//!
//! These are fixed starting points for comparisons and demos. Storing
//! user-defined presets is up to the caller; a preset here is just a
//! function returning [`PitchParameters`].

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::params::PitchParameters;

/// A named pitch archetype.
///
/// # Example
///
/// ```rust
/// use pitchtunnel::{simulate, Preset};
///
/// let slider: Preset = "slider".parse().unwrap();
/// let result = simulate(&slider.params(), 23.0);
/// assert!(result.termination().reached_plate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Riding four-seam fastball.
    FourSeam,
    /// Two-seam sinker with arm-side run.
    Sinker,
    /// Gyro-heavy slider breaking to the glove side.
    Slider,
    /// 1-7 curveball.
    Curveball,
    /// Changeup with seam-shifted fade.
    Changeup,
}

impl Preset {
    /// Every preset, in display order.
    pub const ALL: [Preset; 5] = [
        Preset::FourSeam,
        Preset::Sinker,
        Preset::Slider,
        Preset::Curveball,
        Preset::Changeup,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::FourSeam => "four-seam",
            Self::Sinker => "sinker",
            Self::Slider => "slider",
            Self::Curveball => "curveball",
            Self::Changeup => "changeup",
        }
    }

    /// Release parameters for this archetype.
    pub fn params(self) -> PitchParameters {
        let b = PitchParameters::builder();
        match self {
            Self::FourSeam => b
                .velocity_mph(95.0)
                .spin_rate(2400.0)
                .spin_axis(180.0)
                .release(6.1, -1.6)
                .extension(6.5)
                .target(2.4, 0.0)
                .drag(0.78)
                .spin_efficiency(0.88)
                .seam_shift(0.3),
            Self::Sinker => b
                .velocity_mph(93.0)
                .spin_rate(2150.0)
                .spin_axis(220.0)
                .release(5.8, -1.9)
                .extension(6.3)
                .target(3.3, 0.9)
                .drag(0.8)
                .spin_efficiency(0.9)
                .seam_shift(0.6),
            Self::Slider => b
                .velocity_mph(87.0)
                .spin_rate(2450.0)
                .spin_axis(90.0)
                .release(5.9, -1.7)
                .extension(6.3)
                .target(4.1, -0.6)
                .drag(0.8)
                .spin_efficiency(0.35)
                .seam_shift(0.2),
            Self::Curveball => b
                .velocity_mph(79.0)
                .spin_rate(2650.0)
                .spin_axis(30.0)
                .release(6.0, -1.6)
                .extension(6.0)
                .target(6.4, -0.4)
                .drag(0.8)
                .spin_efficiency(0.7)
                .seam_shift(0.0),
            Self::Changeup => b
                .velocity_mph(86.0)
                .spin_rate(1750.0)
                .spin_axis(200.0)
                .release(6.0, -1.7)
                .extension(6.4)
                .target(3.4, 0.6)
                .drag(0.8)
                .spin_efficiency(0.9)
                .seam_shift(0.8),
        }
        .assume_valid()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized preset name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown preset {0:?} (expected one of: four-seam, sinker, slider, curveball, changeup)")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "four-seam" | "fourseam" | "4-seam" | "ff" => Ok(Self::FourSeam),
            "sinker" | "two-seam" | "si" => Ok(Self::Sinker),
            "slider" | "sl" => Ok(Self::Slider),
            "curveball" | "curve" | "cu" => Ok(Self::Curveball),
            "changeup" | "change" | "ch" => Ok(Self::Changeup),
            _ => Err(UnknownPreset(s.to_string())),
        }
    }
}
