//! Multi-pitch tunnel comparison.
//!
//! A comparison set shares one tunnel window and one target tunnel width.
//! Each pitch is simulated on its own; the report then scores how well each
//! pitch holds the target width and how far every pair separates at the
//! tunnel versus at the plate.
//!
//! With the `parallel` feature the pitches are simulated on the rayon thread
//! pool. Results and their order are identical either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::classify::{health_score, INCHES_PER_FOOT};
use crate::config::SimConfig;
use crate::engine::{simulate_with, SimulationResult};
use crate::params::PitchParameters;

/// A set of pitches evaluated against a common tunnel window.
///
/// # Example
///
/// ```rust
/// use pitchtunnel::{PitchParameters, TunnelComparison};
///
/// let fastball = PitchParameters::builder().spin_axis(180.0).build().unwrap();
/// let curve = fastball.to_builder().spin_axis(0.0).build().unwrap();
///
/// let mut set = TunnelComparison::new(23.0, 2.0);
/// set.push("fastball", fastball);
/// set.push("curve", curve);
///
/// let report = set.evaluate();
/// let pair = &report.pairs()[0];
/// assert!(pair.plate_separation > pair.tunnel_separation.unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TunnelComparison {
    tunnel_window: f64,
    target_width: f64,
    config: SimConfig,
    pitches: Vec<(String, PitchParameters)>,
}

impl TunnelComparison {
    /// Creates an empty set: `tunnel_window` in feet before the plate,
    /// `target_width` in inches.
    pub fn new(tunnel_window: f64, target_width: f64) -> Self {
        Self {
            tunnel_window,
            target_width,
            config: SimConfig::default(),
            pitches: Vec::new(),
        }
    }

    /// Uses a custom simulation config for every pitch in the set.
    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds a pitch, builder style.
    pub fn with_pitch(mut self, label: impl Into<String>, params: PitchParameters) -> Self {
        self.push(label, params);
        self
    }

    /// Adds a pitch.
    pub fn push(&mut self, label: impl Into<String>, params: PitchParameters) {
        self.pitches.push((label.into(), params));
    }

    /// Number of pitches in the set.
    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    /// Returns `true` if no pitches have been added.
    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    /// Shared tunnel window (ft).
    pub const fn tunnel_window(&self) -> f64 {
        self.tunnel_window
    }

    /// Shared target tunnel width (in).
    pub const fn target_width(&self) -> f64 {
        self.target_width
    }

    /// Simulates every pitch and scores the set.
    pub fn evaluate(&self) -> ComparisonReport {
        let results = self.simulate_all();

        let pitches: Vec<PitchReport> = self
            .pitches
            .iter()
            .zip(results)
            .map(|((label, _), result)| PitchReport {
                label: label.clone(),
                health: result
                    .tunnel_deviation()
                    .map(|d| health_score(d, self.target_width)),
                result,
            })
            .collect();

        let mut pairs = Vec::new();
        for (i, a) in pitches.iter().enumerate() {
            for b in &pitches[i + 1..] {
                pairs.push(PairReport::between(a, b));
            }
        }

        let healths: Vec<f64> = pitches.iter().filter_map(|p| p.health).collect();
        let cohesion = if healths.is_empty() {
            None
        } else {
            Some(healths.iter().sum::<f64>() / healths.len() as f64)
        };

        debug!(
            pitches = pitches.len(),
            pairs = pairs.len(),
            window = self.tunnel_window,
            cohesion = ?cohesion,
            "tunnel comparison evaluated"
        );

        ComparisonReport {
            tunnel_window: self.tunnel_window,
            target_width: self.target_width,
            pitches,
            pairs,
            cohesion,
        }
    }

    #[cfg(feature = "parallel")]
    fn simulate_all(&self) -> Vec<SimulationResult> {
        self.pitches
            .par_iter()
            .map(|(_, params)| simulate_with(params, self.tunnel_window, &self.config))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn simulate_all(&self) -> Vec<SimulationResult> {
        self.pitches
            .iter()
            .map(|(_, params)| simulate_with(params, self.tunnel_window, &self.config))
            .collect()
    }
}

/// One pitch's outcome within a comparison.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PitchReport {
    /// Caller-supplied label.
    pub label: String,
    /// Full simulation result.
    pub result: SimulationResult,
    /// Health against the set's target width; `None` when the tunnel point
    /// is undefined.
    pub health: Option<f64>,
}

/// How two pitches separate between the tunnel window and the plate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PairReport {
    /// Label of the earlier pitch in the set.
    pub first: String,
    /// Label of the later pitch in the set.
    pub second: String,
    /// Distance between the two tunnel points (in).
    pub tunnel_separation: Option<f64>,
    /// Distance between the two plate crossings (in).
    pub plate_separation: f64,
    /// `plate_separation / tunnel_separation`. Larger means the pair hides
    /// more of its separation until after the tunnel.
    pub break_ratio: Option<f64>,
}

impl PairReport {
    fn between(a: &PitchReport, b: &PitchReport) -> Self {
        let tunnel_separation = match (a.result.tunnel(), b.result.tunnel()) {
            (Some(ta), Some(tb)) => Some(ta.lateral_distance(&tb) * INCHES_PER_FOOT),
            _ => None,
        };
        let plate_separation =
            a.result.plate().lateral_distance(&b.result.plate()) * INCHES_PER_FOOT;
        let break_ratio = tunnel_separation
            .filter(|&s| s > 0.0)
            .map(|s| plate_separation / s);

        Self {
            first: a.label.clone(),
            second: b.label.clone(),
            tunnel_separation,
            plate_separation,
            break_ratio,
        }
    }
}

/// Outcome of [`TunnelComparison::evaluate`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComparisonReport {
    tunnel_window: f64,
    target_width: f64,
    pitches: Vec<PitchReport>,
    pairs: Vec<PairReport>,
    cohesion: Option<f64>,
}

impl ComparisonReport {
    /// Per-pitch results, in insertion order.
    pub fn pitches(&self) -> &[PitchReport] {
        &self.pitches
    }

    /// Every unordered pair, in insertion order.
    pub fn pairs(&self) -> &[PairReport] {
        &self.pairs
    }

    /// Mean health across pitches with a defined tunnel point.
    pub const fn cohesion(&self) -> Option<f64> {
        self.cohesion
    }

    /// Tunnel window the set was evaluated at (ft).
    pub const fn tunnel_window(&self) -> f64 {
        self.tunnel_window
    }

    /// Target tunnel width (in).
    pub const fn target_width(&self) -> f64 {
        self.target_width
    }

    /// Looks up a pitch by label.
    pub fn pitch(&self, label: &str) -> Option<&PitchReport> {
        self.pitches.iter().find(|p| p.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::simulate;

    fn base() -> PitchParameters {
        PitchParameters::builder()
            .velocity_mph(95.0)
            .spin_rate(2400.0)
            .spin_axis(180.0)
            .release(6.1, -1.6)
            .extension(6.5)
            .target(2.4, 0.0)
            .drag(0.78)
            .spin_efficiency(0.88)
            .seam_shift(0.3)
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_set() {
        let report = TunnelComparison::new(23.0, 2.0).evaluate();
        assert!(report.pitches().is_empty());
        assert!(report.pairs().is_empty());
        assert_eq!(report.cohesion(), None);
    }

    #[test]
    fn test_results_match_single_simulation() {
        let report = TunnelComparison::new(23.0, 2.0)
            .with_pitch("fb", base())
            .evaluate();
        assert_eq!(report.pitches()[0].result, simulate(&base(), 23.0));
    }

    #[test]
    fn test_pair_count() {
        let mut set = TunnelComparison::new(23.0, 2.0);
        for (i, axis) in [180.0, 150.0, 90.0, 0.0].into_iter().enumerate() {
            set.push(format!("p{i}"), base().to_builder().spin_axis(axis).build().unwrap());
        }
        assert_eq!(set.len(), 4);
        let report = set.evaluate();
        assert_eq!(report.pairs().len(), 6);
        assert_eq!(report.pairs()[0].first, "p0");
        assert_eq!(report.pairs()[0].second, "p1");
        assert_eq!(report.pairs()[5].first, "p2");
        assert_eq!(report.pairs()[5].second, "p3");
    }

    #[test]
    fn test_identical_pitches_have_no_separation() {
        let report = TunnelComparison::new(23.0, 2.0)
            .with_pitch("a", base())
            .with_pitch("b", base())
            .evaluate();
        let pair = &report.pairs()[0];
        assert_eq!(pair.tunnel_separation, Some(0.0));
        assert_eq!(pair.plate_separation, 0.0);
        assert_eq!(pair.break_ratio, None);
    }

    #[test]
    fn test_cohesion_is_mean_health() {
        let report = TunnelComparison::new(23.0, 2.0)
            .with_pitch("fb", base())
            .with_pitch("curve", base().to_builder().spin_axis(0.0).build().unwrap())
            .evaluate();

        let h: Vec<f64> = report.pitches().iter().map(|p| p.health.unwrap()).collect();
        let expected = (h[0] + h[1]) / 2.0;
        assert!((report.cohesion().unwrap() - expected).abs() < 1e-12);
        for health in h {
            assert!((0.0..=100.0).contains(&health));
        }
    }

    #[test]
    fn test_nan_target_width_keeps_health_bounded() {
        let report = TunnelComparison::new(23.0, f64::NAN)
            .with_pitch("fb", base())
            .evaluate();
        assert_eq!(report.pitches()[0].health, Some(0.0));
        assert_eq!(report.cohesion(), Some(0.0));
    }

    #[test]
    fn test_undefined_tunnel_window() {
        let report = TunnelComparison::new(70.0, 2.0)
            .with_pitch("a", base())
            .with_pitch("b", base().to_builder().spin_axis(0.0).build().unwrap())
            .evaluate();

        assert!(report.pitches().iter().all(|p| p.health.is_none()));
        assert_eq!(report.cohesion(), None);
        let pair = &report.pairs()[0];
        assert_eq!(pair.tunnel_separation, None);
        assert_eq!(pair.break_ratio, None);
        assert!(pair.plate_separation > 0.0);
    }

    #[test]
    fn test_lookup_by_label() {
        let report = TunnelComparison::new(23.0, 2.0)
            .with_pitch("fastball", base())
            .evaluate();
        assert!(report.pitch("fastball").is_some());
        assert!(report.pitch("splitter").is_none());
    }
}
