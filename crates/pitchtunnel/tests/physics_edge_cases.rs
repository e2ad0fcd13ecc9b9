#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::float_cmp)]

//! Scenario tests for the trajectory engine: the regression fixture,
//! straight-line baselines, tunnel-window edge cases, and late break between
//! pitches sharing a release.

use pitchtunnel::{
    simulate, simulate_with, strike_likelihood, PitchParameters, Point3D, SimConfig, StrikeZone,
    Termination, TunnelComparison, BALL_NEAR, IN_ZONE,
};

fn fixture() -> PitchParameters {
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

fn straight() -> PitchParameters {
    fixture()
        .to_builder()
        .spin_rate(0.0)
        .drag(0.0)
        .seam_shift(0.0)
        .build()
        .unwrap()
}

// =============================================================================
// Regression fixture
// =============================================================================

#[test]
fn fixture_flight_time_and_zone() {
    let result = simulate(&fixture(), 23.0);
    let plate = result.plate();
    let zone = StrikeZone::REGULATION;

    assert!(
        (0.38..=0.45).contains(&result.flight_time()),
        "flight time {}",
        result.flight_time()
    );
    assert!(plate.y.abs() <= zone.half_width, "plate y {}", plate.y);
    assert!(plate.z >= zone.bottom && plate.z <= zone.top, "plate z {}", plate.z);
    assert_eq!(result.strike_likelihood(), IN_ZONE);
}

#[test]
fn fixture_rides_above_gravity_line() {
    // Backspin holds the fastball well above where gravity alone would drop it.
    let spun = simulate(&fixture(), 23.0);
    let dead = simulate(&straight(), 23.0);
    assert!(spun.plate().z > dead.plate().z + 1.0);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn repeated_runs_are_identical() {
    let a = simulate(&fixture(), 23.0);
    let b = simulate(&fixture(), 23.0);

    assert_eq!(a.trajectory().len(), b.trajectory().len());
    assert_eq!(a.plate(), b.plate());
    assert_eq!(a.flight_time(), b.flight_time());
    assert_eq!(a.tunnel_deviation(), b.tunnel_deviation());
    assert_eq!(a.strike_likelihood(), b.strike_likelihood());
    assert_eq!(a, b);
}

#[test]
fn results_are_independent_across_threads() {
    let expected = simulate(&fixture(), 23.0);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| simulate(&fixture(), 23.0)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

// =============================================================================
// Monotonic progress
// =============================================================================

#[test]
fn time_and_distance_are_monotonic() {
    let result = simulate(&fixture(), 23.0);
    for pair in result.trajectory().points().windows(2) {
        assert!(pair[0].t < pair[1].t);
        assert!(pair[0].x <= pair[1].x);
    }
}

// =============================================================================
// Straight-line baseline
// =============================================================================

#[test]
fn no_forces_tunnel_point_matches_ideal() {
    let config = SimConfig {
        gravity: 0.0,
        ..SimConfig::default()
    };
    let result = simulate_with(&straight(), 23.0, &config);
    let tunnel = result.tunnel().unwrap();
    let ideal = result.ideal_tunnel().unwrap();

    assert!((tunnel.y - ideal.y).abs() < 1e-9);
    assert!((tunnel.z - ideal.z).abs() < 1e-9);
    assert!(result.tunnel_deviation().unwrap() < 1e-6);

    let plate = result.plate();
    assert!(plate.y.abs() < 1e-9);
    assert!((plate.z - 2.4).abs() < 1e-9);
}

#[test]
fn no_forces_path_follows_line_everywhere() {
    let config = SimConfig {
        gravity: 0.0,
        ..SimConfig::default()
    };
    let result = simulate_with(&straight(), 23.0, &config);
    let release = result.release();
    let target = result.target();

    for p in result.trajectory().points() {
        let f = (p.x / target.x).min(1.0);
        let line_y = release.y + (target.y - release.y) * f;
        let line_z = release.z + (target.z - release.z) * f;
        if p.x <= target.x {
            assert!((p.y - line_y).abs() < 1e-9, "y off line at x={}", p.x);
            assert!((p.z - line_z).abs() < 1e-9, "z off line at x={}", p.x);
        }
    }
}

#[test]
fn gravity_only_keeps_lateral_line_and_drops_ballistically() {
    let result = simulate(&straight(), 23.0);
    let tunnel = result.tunnel().unwrap();
    let ideal = result.ideal_tunnel().unwrap();

    // Gravity acts only in z, so the lateral track stays on the line.
    assert!((tunnel.y - ideal.y).abs() < 1e-9);

    // The vertical residual is the free-fall drop over the elapsed time.
    let drop = ideal.z - tunnel.z;
    let expected = 0.5 * 32.174 * tunnel.t * tunnel.t;
    assert!(
        (drop - expected).abs() < 0.05,
        "drop {drop} vs ballistic {expected}"
    );
}

// =============================================================================
// Strike-zone boundary
// =============================================================================

#[test]
fn zone_edges_are_strikes() {
    let zone = StrikeZone::REGULATION;
    for (y, z) in [
        (zone.half_width, 2.5),
        (-zone.half_width, 2.5),
        (0.0, zone.top),
        (0.0, zone.bottom),
    ] {
        assert_eq!(strike_likelihood(&Point3D::new(54.0, y, z, 0.4)), IN_ZONE);
    }
}

#[test]
fn just_off_the_edge_is_near_miss() {
    let zone = StrikeZone::REGULATION;
    for (y, z) in [
        (zone.half_width + 0.01, 2.5),
        (-(zone.half_width + 0.01), 2.5),
        (0.0, zone.top + 0.01),
        (0.0, zone.bottom - 0.01),
    ] {
        assert_eq!(strike_likelihood(&Point3D::new(54.0, y, z, 0.4)), BALL_NEAR);
    }
}

// =============================================================================
// Tunnel window edge cases
// =============================================================================

#[test]
fn window_at_or_past_travel_is_undefined() {
    let travel = simulate(&fixture(), 23.0).travel_distance();
    for window in [travel, travel + 0.5, 100.0] {
        let result = simulate(&fixture(), window);
        assert!(result.tunnel().is_none(), "window {window}");
        assert!(result.ideal_tunnel().is_none(), "window {window}");
        assert!(result.tunnel_deviation().is_none(), "window {window}");
    }
}

#[test]
fn window_just_inside_travel_is_defined() {
    let travel = simulate(&fixture(), 23.0).travel_distance();
    let result = simulate(&fixture(), travel - 0.5);
    assert!(result.tunnel().is_some());
    // Half a foot out of the hand nothing has broken yet.
    assert!(result.tunnel_deviation().unwrap() < 0.5);
}

#[test]
fn long_extension_uses_minimum_travel() {
    let params = fixture().to_builder().extension(58.0).build().unwrap();
    let result = simulate(&params, 2.0);
    assert_eq!(result.travel_distance(), 5.0);
    assert_eq!(result.termination(), Termination::ReachedPlate);
    assert!(result.flight_time() < 0.06);
}

// =============================================================================
// Runaway guards
// =============================================================================

#[test]
fn spiked_pitch_stops_at_ground_floor() {
    let params = PitchParameters::builder()
        .velocity_mph(25.0)
        .target(-6.0, 0.0)
        .spin_axis(0.0)
        .spin_rate(2800.0)
        .build()
        .unwrap();
    let result = simulate(&params, 23.0);

    assert_eq!(result.termination(), Termination::HitGround);
    assert_eq!(result.plate(), result.trajectory().last());
    assert!(result.strike_likelihood() < IN_ZONE);
}

#[test]
fn trajectory_length_is_bounded() {
    let config = SimConfig {
        gravity: 0.0,
        ..SimConfig::default()
    };
    let params = PitchParameters::builder()
        .velocity_fps(0.5)
        .spin_rate(0.0)
        .drag(0.0)
        .build()
        .unwrap();
    let result = simulate_with(&params, 23.0, &config);

    assert_eq!(result.termination(), Termination::TimedOut);
    assert!(result.trajectory().len() <= config.max_samples());
}

// =============================================================================
// Late break between pitches
// =============================================================================

#[test]
fn opposite_spin_axes_diverge_toward_plate() {
    let riser = fixture();
    let dropper = fixture().to_builder().spin_axis(0.0).build().unwrap();

    let mut previous_gap = None;
    let mut previous_separation = None;
    for window in [40.0, 30.0, 23.0, 15.0, 8.0, 3.0] {
        let a = simulate(&riser, window);
        let b = simulate(&dropper, window);
        let gap = (a.tunnel_deviation().unwrap() - b.tunnel_deviation().unwrap()).abs();
        let separation = a.tunnel().unwrap().lateral_distance(&b.tunnel().unwrap());

        if let Some(prev) = previous_gap {
            assert!(gap > prev, "window {window}: gap {gap} <= {prev}");
        }
        if let Some(prev) = previous_separation {
            assert!(separation > prev, "window {window}: separation {separation} <= {prev}");
        }
        previous_gap = Some(gap);
        previous_separation = Some(separation);
    }
}

#[test]
fn comparison_break_ratio_exceeds_one_for_late_break() {
    let report = TunnelComparison::new(23.0, 2.0)
        .with_pitch("riser", fixture())
        .with_pitch(
            "dropper",
            fixture().to_builder().spin_axis(0.0).build().unwrap(),
        )
        .evaluate();

    let pair = &report.pairs()[0];
    assert!(pair.plate_separation > pair.tunnel_separation.unwrap());
    assert!(pair.break_ratio.unwrap() > 1.0);
}
