//! Comparison files and pitch definitions.
//!
//! A comparison file is TOML: shared tunnel settings at the top level and one
//! `[[pitch]]` table per pitch. Each pitch starts from a preset (or the
//! builder defaults) and overrides whichever fields it names.
//!
//! ```toml
//! tunnel_window = 23.0
//! target_width = 2.0
//!
//! [[pitch]]
//! label = "fastball"
//! preset = "four-seam"
//!
//! [[pitch]]
//! label = "slider"
//! velocity_mph = 87.0
//! spin_axis = 90.0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use pitchtunnel::{
    ParameterError, PitchParameters, PitchParametersBuilder, Preset, SimConfig, SimConfigError,
    TunnelComparison, UnknownPreset,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::cli::DEFAULT_WINDOW;

/// Default target tunnel width (in).
pub const DEFAULT_TARGET_WIDTH: f64 = 2.0;

/// Errors from loading or resolving a comparison file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the expected shape.
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A pitch names a preset that does not exist.
    #[error("pitch {label:?} has an unknown preset")]
    UnknownPreset {
        label: String,
        #[source]
        source: UnknownPreset,
    },

    /// A pitch resolved to parameters the engine rejects.
    #[error("pitch {label:?} has invalid parameters")]
    Invalid {
        label: String,
        #[source]
        source: ParameterError,
    },

    /// The `[sim]` table would stall or destabilize integration.
    #[error("invalid [sim] settings")]
    Sim(#[source] SimConfigError),

    /// A top-level setting is out of range.
    #[error("{field} must be {expected}, got {value}")]
    Setting {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },

    /// The file defines no `[[pitch]]` entries.
    #[error("comparison defines no pitches")]
    Empty,
}

/// Rejects a tunnel window that is NaN or infinite.
///
/// Negative windows are accepted; the engine measures them at the plate.
pub fn check_window(window: f64) -> Result<f64, ConfigError> {
    if window.is_finite() {
        Ok(window)
    } else {
        Err(ConfigError::Setting {
            field: "tunnel_window",
            expected: "finite",
            value: window,
        })
    }
}

fn check_target_width(width: f64) -> Result<f64, ConfigError> {
    if width.is_finite() && width >= 0.0 {
        Ok(width)
    } else {
        Err(ConfigError::Setting {
            field: "target_width",
            expected: "finite and non-negative",
            value: width,
        })
    }
}

/// Optional per-field overrides applied on top of a base pitch.
///
/// Shared by the `simulate` flags and the `[[pitch]]` tables.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq)]
pub struct PitchOverrides {
    /// Release speed (mph)
    #[arg(long, allow_negative_numbers = true)]
    pub velocity_mph: Option<f64>,

    /// Spin rate (rpm)
    #[arg(long, allow_negative_numbers = true)]
    pub spin_rate: Option<f64>,

    /// Spin axis in degrees (180 = backspin, 0 = topspin, 90 = glove side)
    #[arg(long, allow_negative_numbers = true)]
    pub spin_axis: Option<f64>,

    /// Release height (ft)
    #[arg(long, allow_negative_numbers = true)]
    pub release_height: Option<f64>,

    /// Release side, positive toward the glove side (ft)
    #[arg(long, allow_negative_numbers = true)]
    pub release_side: Option<f64>,

    /// Extension toward the plate (ft)
    #[arg(long, allow_negative_numbers = true)]
    pub extension: Option<f64>,

    /// Aim height at the plate (ft)
    #[arg(long, allow_negative_numbers = true)]
    pub target_height: Option<f64>,

    /// Aim offset at the plate (ft)
    #[arg(long, allow_negative_numbers = true)]
    pub lateral_target: Option<f64>,

    /// Drag scale (0 = no drag)
    #[arg(long, allow_negative_numbers = true)]
    pub drag: Option<f64>,

    /// Share of spin producing Magnus force, 0 to 1
    #[arg(long, allow_negative_numbers = true)]
    pub spin_efficiency: Option<f64>,

    /// Seam-shifted wake strength, signed
    #[arg(long, allow_negative_numbers = true)]
    pub seam_shift: Option<f64>,
}

impl PitchOverrides {
    /// Applies every set field to `builder`.
    pub fn apply(&self, builder: PitchParametersBuilder) -> PitchParametersBuilder {
        type Setter = fn(PitchParametersBuilder, f64) -> PitchParametersBuilder;

        let setters: [(Option<f64>, Setter); 11] = [
            (self.velocity_mph, PitchParametersBuilder::velocity_mph),
            (self.spin_rate, PitchParametersBuilder::spin_rate),
            (self.spin_axis, PitchParametersBuilder::spin_axis),
            (self.release_height, PitchParametersBuilder::release_height),
            (self.release_side, PitchParametersBuilder::release_side),
            (self.extension, PitchParametersBuilder::extension),
            (self.target_height, PitchParametersBuilder::target_height),
            (self.lateral_target, PitchParametersBuilder::lateral_target),
            (self.drag, PitchParametersBuilder::drag),
            (self.spin_efficiency, PitchParametersBuilder::spin_efficiency),
            (self.seam_shift, PitchParametersBuilder::seam_shift),
        ];
        setters
            .into_iter()
            .fold(builder, |b, (value, set)| value.map_or(b, |v| set(b, v)))
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Builds parameters from an optional preset plus overrides.
pub fn resolve_pitch(
    preset: Option<Preset>,
    overrides: &PitchOverrides,
) -> Result<PitchParameters, ParameterError> {
    let base = preset.map_or_else(PitchParameters::builder, |p| p.params().to_builder());
    overrides.apply(base).build()
}

/// One `[[pitch]]` table.
///
/// Field overrides sit next to `label` and `preset` in the table; unknown
/// keys are rejected so a misspelled field is not silently ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RawPitchSpec")]
pub struct PitchSpec {
    /// Name shown in reports.
    pub label: String,

    /// Optional preset the overrides apply to.
    pub preset: Option<String>,

    /// Fields overriding the preset or builder defaults.
    pub overrides: PitchOverrides,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPitchSpec {
    label: String,
    preset: Option<String>,
    velocity_mph: Option<f64>,
    spin_rate: Option<f64>,
    spin_axis: Option<f64>,
    release_height: Option<f64>,
    release_side: Option<f64>,
    extension: Option<f64>,
    target_height: Option<f64>,
    lateral_target: Option<f64>,
    drag: Option<f64>,
    spin_efficiency: Option<f64>,
    seam_shift: Option<f64>,
}

impl From<RawPitchSpec> for PitchSpec {
    fn from(raw: RawPitchSpec) -> Self {
        Self {
            label: raw.label,
            preset: raw.preset,
            overrides: PitchOverrides {
                velocity_mph: raw.velocity_mph,
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
            },
        }
    }
}

impl PitchSpec {
    /// Resolves this entry to validated parameters.
    pub fn resolve(&self) -> Result<PitchParameters, ConfigError> {
        let preset = self
            .preset
            .as_deref()
            .map(str::parse::<Preset>)
            .transpose()
            .map_err(|source| ConfigError::UnknownPreset {
                label: self.label.clone(),
                source,
            })?;

        resolve_pitch(preset, &self.overrides).map_err(|source| ConfigError::Invalid {
            label: self.label.clone(),
            source,
        })
    }
}

/// A parsed comparison file.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ComparisonFile {
    /// Tunnel window (ft before the plate).
    #[serde(default = "default_window")]
    pub tunnel_window: f64,

    /// Target tunnel width (in).
    #[serde(default = "default_target_width")]
    pub target_width: f64,

    /// Optional `[sim]` table overriding integration constants.
    #[serde(default)]
    pub sim: SimConfig,

    /// The `[[pitch]]` entries, in file order.
    #[serde(default, rename = "pitch")]
    pub pitches: Vec<PitchSpec>,
}

const fn default_window() -> f64 {
    DEFAULT_WINDOW
}

const fn default_target_width() -> f64 {
    DEFAULT_TARGET_WIDTH
}

impl ComparisonFile {
    /// Reads and parses a comparison file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::parse(&text, path)?;
        info!(
            path = %path.display(),
            pitches = file.pitches.len(),
            "loaded comparison file"
        );
        Ok(file)
    }

    /// Parses comparison TOML; `path` is only used in error messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolves every pitch and assembles the comparison set.
    pub fn into_comparison(self) -> Result<TunnelComparison, ConfigError> {
        if self.pitches.is_empty() {
            return Err(ConfigError::Empty);
        }
        let window = check_window(self.tunnel_window)?;
        let target_width = check_target_width(self.target_width)?;
        self.sim.validate().map_err(ConfigError::Sim)?;

        let mut set = TunnelComparison::new(window, target_width).with_config(self.sim);
        for spec in &self.pitches {
            let params = spec.resolve()?;
            debug!(label = %spec.label, preset = ?spec.preset, "resolved pitch");
            set.push(spec.label.clone(), params);
        }
        Ok(set)
    }
}
