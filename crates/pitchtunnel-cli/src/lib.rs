#![forbid(unsafe_code)]

//! # Pitchtunnel CLI
//!
//! Command-line front end for the `pitchtunnel` engine. The binary is a thin
//! adapter: it turns flags or a comparison file into [`PitchParameters`],
//! runs the engine and prints the result.
//!
//! [`PitchParameters`]: pitchtunnel::PitchParameters

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;

use std::io::Write;

use anyhow::Context;
use pitchtunnel::{simulate, Preset};
use tracing::info;

use cli::{Cli, Command, CompareArgs, SimulateArgs};
use config::{check_window, resolve_pitch, ComparisonFile};

/// Runs the parsed command, writing results to `out`.
///
/// # Errors
///
/// Returns an error for invalid pitch parameters, an unreadable or invalid
/// comparison file, or a failed write.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    match &cli.command {
        Command::Simulate(args) => run_simulate(args, out),
        Command::Compare(args) => run_compare(args, out),
        Command::Presets(args) => {
            output::write_presets(out, args.format).context("failed to write output")
        }
    }
}

fn run_simulate<W: Write>(args: &SimulateArgs, out: &mut W) -> anyhow::Result<()> {
    let params = resolve_pitch(args.preset, &args.overrides).context("invalid pitch parameters")?;
    let window = check_window(args.window)?;
    let label = args.preset.map_or("pitch", Preset::name);

    info!(
        label,
        velocity_mph = params.velocity_mph(),
        spin_rate = params.spin_rate(),
        window,
        "simulating pitch"
    );
    let result = simulate(&params, window);

    output::write_simulation(out, label, &result, args.trajectory, args.format)
        .context("failed to write output")
}

fn run_compare<W: Write>(args: &CompareArgs, out: &mut W) -> anyhow::Result<()> {
    let mut file = ComparisonFile::load(&args.config)?;
    if let Some(window) = args.window {
        file.tunnel_window = window;
    }

    let report = file.into_comparison()?.evaluate();
    info!(
        pitches = report.pitches().len(),
        cohesion = ?report.cohesion(),
        "comparison complete"
    );

    output::write_comparison(out, &report, args.format).context("failed to write output")
}
