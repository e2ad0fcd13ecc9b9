#![forbid(unsafe_code)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::many_single_char_names)]

//! # Pitchtunnel
//!
//! Pitch trajectory simulation and tunneling analysis.
//!
//! Pitchtunnel turns a set of release parameters into:
//! - **A simulated flight path** under gravity, quadratic drag, Magnus lift
//!   and a seam-shifted-wake correction
//! - **A plate crossing point** and a bucketed **strike likelihood**
//! - **A tunnel deviation**: how far the pitch has strayed from a dead-straight
//!   throw at the tunnel window, i.e. how much break it has revealed
//!
//! The engine is a pure computation. Every call returns a fresh
//! [`SimulationResult`]; nothing is cached and nothing is shared between calls,
//! so pitches can be simulated from any number of threads.
//!
//! ## Example
//!
//! ```rust
//! use pitchtunnel::{simulate, PitchParameters};
//!
//! let fastball = PitchParameters::builder()
//!     .velocity_mph(95.0)
//!     .spin_rate(2400.0)
//!     .spin_axis(180.0)
//!     .release(6.1, -1.6)
//!     .extension(6.5)
//!     .target(2.4, 0.0)
//!     .drag(0.78)
//!     .spin_efficiency(0.88)
//!     .seam_shift(0.3)
//!     .build()
//!     .unwrap();
//!
//! let result = simulate(&fastball, 23.0);
//!
//! assert!(result.flight_time() > 0.38 && result.flight_time() < 0.45);
//! assert_eq!(result.strike_likelihood(), 0.93);
//! ```
//!
//! ## Comparing Pitches
//!
//! ```rust
//! use pitchtunnel::{Preset, TunnelComparison};
//!
//! let report = TunnelComparison::new(23.0, 2.0)
//!     .with_pitch("fastball", Preset::FourSeam.params())
//!     .with_pitch("changeup", Preset::Changeup.params())
//!     .evaluate();
//!
//! assert_eq!(report.pitches().len(), 2);
//! assert_eq!(report.pairs().len(), 1);
//! ```
//!
//! ## Coordinates
//!
//! - `x`: forward distance from the release point toward the plate (ft)
//! - `y`: horizontal offset, positive toward the pitcher's glove side (ft)
//! - `z`: height above the ground (ft)

mod classify;
mod compare;
mod config;
mod engine;
mod forces;
mod integrator;
mod params;
mod presets;
mod resolver;
mod vector;

pub use classify::{
    health_score, plate_break, strike_likelihood, tunnel_deviation, PlateBreak, StrikeZone, BALL_FAR,
    BALL_NEAR, BALL_WIDE, IN_ZONE,
};
pub use compare::{ComparisonReport, PairReport, PitchReport, TunnelComparison};
pub use config::{SimConfig, SimConfigError};
pub use engine::{simulate, simulate_with, SimulationResult};
pub use forces::{
    spin_axis_vector, ForceModel, DRAG_FACTOR, MAGNUS_FACTOR, REFERENCE_SPIN_RATE,
    SEAM_SHIFT_FACTOR, SEAM_SHIFT_OFFSET,
};
pub use integrator::{integrate, Point3D, Termination, Trajectory};
pub use params::{
    mph_to_fps, ParameterError, PitchParameters, PitchParametersBuilder, MPH_TO_FPS,
};
pub use presets::{Preset, UnknownPreset};
pub use resolver::{ideal_point, point_at_distance};
pub use vector::{add, cross, magnitude, normalize, scale, Vector};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::compare::{ComparisonReport, TunnelComparison};
    pub use crate::config::SimConfig;
    pub use crate::engine::{simulate, simulate_with, SimulationResult};
    pub use crate::integrator::{Point3D, Termination, Trajectory};
    pub use crate::params::{ParameterError, PitchParameters};
    pub use crate::presets::Preset;
    pub use crate::vector::Vector;
}
