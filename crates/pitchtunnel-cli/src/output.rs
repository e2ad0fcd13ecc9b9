//! Plain-text and JSON rendering of engine results.

use std::io::{self, Write};

use pitchtunnel::{
    ComparisonReport, PairReport, PitchParameters, PlateBreak, Point3D, Preset, SimulationResult,
    Termination, Vector,
};
use serde::Serialize;

use crate::cli::OutputFormat;

/// JSON view of one simulation. The sample list is optional since it is
/// by far the bulkiest part.
#[derive(Serialize, Debug)]
pub struct SimulationSummary<'a> {
    pub label: &'a str,
    pub termination: Termination,
    pub flight_time: f64,
    pub travel_distance: f64,
    pub tunnel_window: f64,
    pub release: Vector,
    pub target: Vector,
    pub plate: Point3D,
    pub plate_break: PlateBreak,
    pub strike_likelihood: f64,
    pub tunnel: Option<Point3D>,
    pub ideal_tunnel: Option<Vector>,
    pub tunnel_deviation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trajectory: Option<&'a [Point3D]>,
}

impl<'a> SimulationSummary<'a> {
    pub fn new(label: &'a str, result: &'a SimulationResult, include_trajectory: bool) -> Self {
        Self {
            label,
            termination: result.termination(),
            flight_time: result.flight_time(),
            travel_distance: result.travel_distance(),
            tunnel_window: result.tunnel_window(),
            release: result.release(),
            target: result.target(),
            plate: result.plate(),
            plate_break: result.plate_break(),
            strike_likelihood: result.strike_likelihood(),
            tunnel: result.tunnel(),
            ideal_tunnel: result.ideal_tunnel(),
            tunnel_deviation: result.tunnel_deviation(),
            trajectory: include_trajectory.then(|| result.trajectory().points()),
        }
    }
}

#[derive(Serialize, Debug)]
struct PitchEntry<'a> {
    #[serde(flatten)]
    summary: SimulationSummary<'a>,
    health: Option<f64>,
}

#[derive(Serialize, Debug)]
struct ComparisonSummary<'a> {
    tunnel_window: f64,
    target_width: f64,
    cohesion: Option<f64>,
    pitches: Vec<PitchEntry<'a>>,
    pairs: &'a [PairReport],
}

#[derive(Serialize, Debug)]
struct PresetEntry {
    name: &'static str,
    velocity_mph: f64,
    #[serde(flatten)]
    params: PitchParameters,
}

/// Writes a single simulation.
pub fn write_simulation<W: Write>(
    out: &mut W,
    label: &str,
    result: &SimulationResult,
    include_trajectory: bool,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            write_json(out, &SimulationSummary::new(label, result, include_trajectory))
        }
        OutputFormat::Plain => {
            write_simulation_plain(out, label, result)?;
            if include_trajectory {
                writeln!(out)?;
                write_trajectory_plain(out, result)?;
            }
            Ok(())
        }
    }
}

/// Writes a comparison report.
pub fn write_comparison<W: Write>(
    out: &mut W,
    report: &ComparisonReport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let summary = ComparisonSummary {
                tunnel_window: report.tunnel_window(),
                target_width: report.target_width(),
                cohesion: report.cohesion(),
                pitches: report
                    .pitches()
                    .iter()
                    .map(|p| PitchEntry {
                        summary: SimulationSummary::new(&p.label, &p.result, false),
                        health: p.health,
                    })
                    .collect(),
                pairs: report.pairs(),
            };
            write_json(out, &summary)
        }
        OutputFormat::Plain => write_comparison_plain(out, report),
    }
}

/// Writes the built-in preset table.
pub fn write_presets<W: Write>(out: &mut W, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<PresetEntry> = Preset::ALL
                .iter()
                .map(|preset| {
                    let params = preset.params();
                    PresetEntry {
                        name: preset.name(),
                        velocity_mph: params.velocity_mph(),
                        params,
                    }
                })
                .collect();
            write_json(out, &entries)
        }
        OutputFormat::Plain => {
            writeln!(
                out,
                "{:<10} {:>6} {:>6} {:>5} {:>5} {:>5}",
                "preset", "mph", "rpm", "axis", "eff", "seam"
            )?;
            for preset in Preset::ALL {
                let p = preset.params();
                writeln!(
                    out,
                    "{:<10} {:>6.1} {:>6.0} {:>5.0} {:>5.2} {:>5.2}",
                    preset.name(),
                    p.velocity_mph(),
                    p.spin_rate(),
                    p.spin_axis(),
                    p.spin_efficiency(),
                    p.seam_shift()
                )?;
            }
            Ok(())
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn write_simulation_plain<W: Write>(
    out: &mut W,
    label: &str,
    result: &SimulationResult,
) -> io::Result<()> {
    let plate = result.plate();
    let brk = result.plate_break();

    writeln!(out, "{label}")?;
    writeln!(out, "  termination    {}", result.termination())?;
    writeln!(out, "  flight time    {:.3} s", result.flight_time())?;
    writeln!(out, "  plate          y {:+.2} ft  z {:.2} ft", plate.y, plate.z)?;
    writeln!(
        out,
        "  plate break    {:+.1} in horizontal  {:+.1} in vertical",
        brk.horizontal, brk.vertical
    )?;
    writeln!(out, "  strike         {:.2}", result.strike_likelihood())?;
    match result.tunnel_deviation() {
        Some(deviation) => writeln!(
            out,
            "  tunnel         {deviation:.1} in off line at {:.1} ft",
            result.tunnel_window()
        ),
        None => writeln!(
            out,
            "  tunnel         undefined at {:.1} ft (window exceeds {:.1} ft travel)",
            result.tunnel_window(),
            result.travel_distance()
        ),
    }
}

fn write_trajectory_plain<W: Write>(out: &mut W, result: &SimulationResult) -> io::Result<()> {
    writeln!(out, "{:>7} {:>8} {:>8} {:>8}", "t", "x", "y", "z")?;
    for p in result.trajectory() {
        writeln!(out, "{:>7.3} {:>8.3} {:>8.3} {:>8.3}", p.t, p.x, p.y, p.z)?;
    }
    Ok(())
}

fn write_comparison_plain<W: Write>(out: &mut W, report: &ComparisonReport) -> io::Result<()> {
    writeln!(
        out,
        "tunnel window {:.1} ft, target width {:.1} in",
        report.tunnel_window(),
        report.target_width()
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<16} {:>7} {:>7} {:>7} {:>7} {:>7}",
        "pitch", "time", "plate y", "plate z", "dev in", "health"
    )?;
    for pitch in report.pitches() {
        let plate = pitch.result.plate();
        writeln!(
            out,
            "{:<16} {:>7.3} {:>7.2} {:>7.2} {:>7} {:>7}",
            pitch.label,
            pitch.result.flight_time(),
            plate.y,
            plate.z,
            fmt_opt(pitch.result.tunnel_deviation(), 1),
            fmt_opt(pitch.health, 0),
        )?;
    }

    if !report.pairs().is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "{:<33} {:>9} {:>9} {:>7}",
            "pair", "tunnel in", "plate in", "ratio"
        )?;
        for pair in report.pairs() {
            writeln!(
                out,
                "{:<33} {:>9} {:>9.1} {:>7}",
                format!("{} / {}", pair.first, pair.second),
                fmt_opt(pair.tunnel_separation, 1),
                pair.plate_separation,
                fmt_opt(pair.break_ratio, 2),
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "cohesion {}", fmt_opt(report.cohesion(), 0))
}

fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.precision$}"))
}
