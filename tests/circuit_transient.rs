use std::f64::consts::FRAC_PI_2;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rlc_diode::circuit::integrate_with;
use rlc_diode::prelude::*;

mod common;
use common::{linspace, reference_params, tight_settings};

/// Instant at which the lossless LC quarter period ends and the diode turns on.
fn switch_time(p: &CircuitParameters) -> f64 {
    FRAC_PI_2 / p.natural_frequency()
}

/// Peak current of the blocking phase, V0 * sqrt(C / L).
fn peak_current(p: &CircuitParameters) -> f64 {
    p.v0 * (p.c / p.l).sqrt()
}

fn tight_reference() -> Trajectory {
    let p = reference_params();
    let grid = linspace(0.0, 400e-6, 4000);
    integrate_with(&p, p.initial_state(), 0.0, 400e-6, &grid, &tight_settings())
        .unwrap()
        .trajectory
}

#[test]
fn reference_run_samples_the_whole_grid() {
    let config = SimulationConfig::default();
    let grid = config.time_grid().unwrap();
    let sim = simulate(&config).unwrap();
    let tr = &sim.trajectory;

    assert_eq!(tr.len(), 4000);
    assert_eq!(tr.times(), grid.as_slice());
    assert_eq!(tr.state(0), State::new(0.0, 900.0));
    assert!(sim.stats.naccpt > 0);
}

#[test]
fn reference_run_shows_peak_and_diode_conduction() {
    let p = reference_params();
    let sim = simulate(&SimulationConfig::default()).unwrap();
    let tr = &sim.trajectory;

    // current rises from zero
    assert!(tr.current()[1] > 0.0);
    assert!(tr.current()[1] < tr.current()[10]);

    // voltage falls from V0 and the diode conducts at least once
    assert!(tr.voltage()[10] < 900.0);
    assert!(tr.min_voltage() < 0.0);
    assert!(tr.min_voltage() > -p.v0);

    assert!(tr.max_current() > 0.0);
    assert_relative_eq!(tr.max_current(), peak_current(&p), max_relative = 1e-2);
}

#[test]
fn both_methods_agree_on_the_peaks() {
    let mut config = SimulationConfig::default();
    let rk45 = simulate(&config).unwrap();
    config.solver.method = Method::RK23;
    let rk23 = simulate(&config).unwrap();

    assert_relative_eq!(
        rk45.trajectory.max_current(),
        rk23.trajectory.max_current(),
        max_relative = 1e-2
    );
    assert_relative_eq!(
        rk45.trajectory.min_voltage(),
        rk23.trajectory.min_voltage(),
        max_relative = 5e-2
    );
}

#[test]
fn blocking_phase_is_a_lossless_lc_oscillation() {
    let p = reference_params();
    let tr = tight_reference();
    let w = p.natural_frequency();
    let i_peak = peak_current(&p);
    let e0 = p.stored_energy(p.initial_state());
    let t_switch = switch_time(&p);

    let mut checked = 0;
    for (t, s) in tr.iter().filter(|(t, _)| *t < 0.95 * t_switch) {
        assert!(s.v_c > 0.0);
        assert_abs_diff_eq!(s.i, i_peak * (w * t).sin(), epsilon = 1e-4 * i_peak);
        assert_abs_diff_eq!(s.v_c, p.v0 * (w * t).cos(), epsilon = 1e-4 * p.v0);
        assert_relative_eq!(p.stored_energy(s), e0, max_relative = 1e-6);
        checked += 1;
    }
    assert!(checked > 600);
}

#[test]
fn conducting_phase_matches_two_exponential_decay() {
    let p = reference_params();
    let tr = tight_reference();
    let t_switch = switch_time(&p);
    let i0 = peak_current(&p);

    // eigenvalues of the conducting-mode system matrix
    let g = 1.0 / (p.r * p.c);
    let trace = -(p.r / p.l + g);
    let det = 2.0 / (p.l * p.c);
    let disc = (trace * trace - 4.0 * det).sqrt();
    let (l1, l2) = (0.5 * (trace + disc), 0.5 * (trace - disc));
    let c1 = i0 * (l1 + g) / (l1 - l2);
    let c2 = i0 - c1;

    let mut checked = 0;
    for (t, s) in tr.iter().filter(|(t, _)| *t > t_switch + 1e-6) {
        let tau = t - t_switch;
        let (e1, e2) = ((l1 * tau).exp(), (l2 * tau).exp());
        let i = c1 * e1 + c2 * e2;
        let v = -(c1 * e1 / (l1 + g) + c2 * e2 / (l2 + g)) / p.c;

        assert!(s.v_c < 0.0);
        assert_abs_diff_eq!(s.i, i, epsilon = 1e-4 * i0);
        assert_abs_diff_eq!(s.v_c, v, epsilon = 1e-4 * p.v0);
        checked += 1;
    }
    assert!(checked > 3000);
}

#[test]
fn stored_energy_never_grows() {
    let p = reference_params();
    let tr = tight_reference();
    let e0 = p.stored_energy(p.initial_state());
    let energies: Vec<f64> = tr.iter().map(|(_, s)| p.stored_energy(s)).collect();
    for w in energies.windows(2) {
        assert!(w[1] <= w[0] + 1e-8 * e0);
    }
    assert!(*energies.last().unwrap() < 0.01 * e0);
}

#[test]
fn sampled_slopes_follow_the_active_mode() {
    let p = reference_params();
    let tr = tight_reference();
    let t = tr.times();
    let n = tr.len();

    // keep away from the kink at the switching instant
    let margin = 5;
    let same_mode = |k: usize| {
        let mode = Mode::select(tr.voltage()[k]);
        (k.saturating_sub(margin)..=(k + margin).min(n - 1))
            .all(|j| Mode::select(tr.voltage()[j]) == mode)
    };

    let di_scale = p.v0 / p.l;
    let dv_scale = peak_current(&p) / p.c;
    let mut seen = [0usize; 2];
    for k in 1..n - 1 {
        if !same_mode(k) {
            continue;
        }
        let dt = t[k + 1] - t[k - 1];
        let di = (tr.current()[k + 1] - tr.current()[k - 1]) / dt;
        let dv = (tr.voltage()[k + 1] - tr.voltage()[k - 1]) / dt;
        let expected = evaluate_derivative(t[k], tr.state(k), &p);

        assert!((di - expected.i).abs() <= 1e-3 * expected.i.abs() + 1e-4 * di_scale);
        assert!((dv - expected.v_c).abs() <= 1e-3 * expected.v_c.abs() + 1e-4 * dv_scale);

        match Mode::select(tr.voltage()[k]) {
            Mode::Blocking => seen[0] += 1,
            Mode::Conducting => seen[1] += 1,
        }
    }
    assert!(seen[0] > 0 && seen[1] > 0);
}

#[test]
fn zero_inductance_is_rejected_before_integration() {
    let p = CircuitParameters {
        v0: 900.0,
        l: 0.0,
        r: 85e-3,
        c: 180e-6,
    };
    let grid = linspace(0.0, 400e-6, 10);
    let err = integrate(&p, State::new(0.0, 900.0), 0.0, 400e-6, &grid).unwrap_err();
    assert!(matches!(err, Error::InvalidParameters(_)));

    let config = SimulationConfig {
        l: 0.0,
        ..SimulationConfig::default()
    };
    assert!(matches!(simulate(&config), Err(Error::InvalidParameters(_))));
}

#[test]
fn negative_resistance_is_rejected() {
    let config = SimulationConfig {
        r: -85e-3,
        ..SimulationConfig::default()
    };
    assert!(matches!(simulate(&config), Err(Error::InvalidParameters(_))));
}

#[test]
fn non_positive_initial_voltage_is_rejected() {
    for v0 in [0.0, -900.0] {
        let config = SimulationConfig {
            v0,
            ..SimulationConfig::default()
        };
        assert!(matches!(simulate(&config), Err(Error::InvalidParameters(_))));
    }
}

#[test]
fn reversed_or_non_finite_span_is_rejected() {
    let reversed = SimulationConfig {
        t0: 400e-6,
        tf: 0.0,
        ..SimulationConfig::default()
    };
    assert!(matches!(simulate(&reversed), Err(Error::InvalidParameters(_))));

    let nan = SimulationConfig {
        c: f64::NAN,
        ..SimulationConfig::default()
    };
    assert!(matches!(simulate(&nan), Err(Error::InvalidParameters(_))));
}

#[test]
fn step_budget_exhaustion_is_surfaced() {
    let mut config = SimulationConfig::default();
    config.solver.max_steps = 5;
    match simulate(&config) {
        Err(Error::IntegrationFailure { t, status }) => {
            assert_eq!(status, Status::NeedLargerNMax);
            assert!(t < config.tf);
        }
        other => panic!("expected an integration failure, got {other:?}"),
    }
}

#[test]
fn custom_grid_is_returned_verbatim() {
    let p = reference_params();
    let grid = vec![0.0, 1e-6, 5e-6, 70e-6, 71e-6, 399e-6];
    let tr = integrate(&p, p.initial_state(), 0.0, 400e-6, &grid).unwrap();
    assert_eq!(tr.times(), grid.as_slice());
    assert_eq!(tr.current().len(), grid.len());
    assert_eq!(tr.voltage().len(), grid.len());
}
