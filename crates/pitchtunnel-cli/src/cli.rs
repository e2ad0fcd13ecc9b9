//! Command-line interface for `pitchtunnel`.
//!
//! # Examples
//!
//! ```bash
//! # Simulate a built-in pitch
//! pitchtunnel simulate --preset slider
//!
//! # Start from a preset and override a few fields
//! pitchtunnel simulate --preset four-seam --spin-rate 2600 --window 20
//!
//! # Score a set of pitches from a file
//! pitchtunnel compare --config arsenal.toml --format json
//!
//! # More logging
//! pitchtunnel -vv simulate
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pitchtunnel::Preset;

use crate::config::PitchOverrides;

/// Default tunnel window (ft before the plate).
pub const DEFAULT_WINDOW: f64 = 23.0;

/// Pitch trajectory simulation and tunneling analysis.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pitchtunnel",
    author,
    version,
    about = "Simulate pitch trajectories and measure how well pitches tunnel",
    long_about = "Simulates pitch flight under gravity, drag, Magnus lift and \
                  seam-shifted wake, then reports plate location, strike \
                  likelihood and tunnel deviation."
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// Ignored when `RUST_LOG` is set
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Simulate a single pitch
    Simulate(SimulateArgs),

    /// Compare a set of pitches defined in a TOML file
    Compare(CompareArgs),

    /// List the built-in pitch presets
    Presets(PresetsArgs),
}

/// Arguments for the `simulate` subcommand.
#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Start from a built-in preset (four-seam, sinker, slider, curveball, changeup)
    #[arg(long, short = 'p')]
    pub preset: Option<Preset>,

    #[command(flatten)]
    pub overrides: PitchOverrides,

    /// Tunnel window in feet before the plate
    #[arg(
        long,
        short = 'w',
        default_value_t = DEFAULT_WINDOW,
        env = "PITCHTUNNEL_WINDOW"
    )]
    pub window: f64,

    /// Include every trajectory sample in the output
    #[arg(long)]
    pub trajectory: bool,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Path to the comparison file
    #[arg(long, short = 'c', env = "PITCHTUNNEL_CONFIG")]
    pub config: PathBuf,

    /// Override the file's tunnel window (ft)
    #[arg(long, short = 'w')]
    pub window: Option<f64>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

/// Arguments for the `presets` subcommand.
#[derive(Args, Debug, Clone)]
pub struct PresetsArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

/// Output formats.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Plain,
    /// Pretty-printed JSON
    Json,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }
}
