use approx::assert_abs_diff_eq;
use rlc_diode::prelude::*;

mod common;
use common::{ExponentialDecay, SHO, linspace, tight_opts};

#[test]
fn harmonic_oscillator_matches_cosine() {
    let xend = 2.0 * std::f64::consts::PI;
    let t_eval = linspace(0.0, xend, 41);
    for method in [Method::RK45, Method::RK23] {
        let sol = solve_ivp(&SHO, 0.0, xend, &[1.0, 0.0], tight_opts(method, t_eval.clone())).unwrap();
        assert_eq!(sol.status, Status::Success);
        assert_eq!(sol.t, t_eval);
        for (t, y) in sol.iter() {
            assert_abs_diff_eq!(y[0], t.cos(), epsilon = 1e-6);
            assert_abs_diff_eq!(y[1], -t.sin(), epsilon = 1e-6);
        }
    }
}

#[test]
fn backward_integration_works() {
    let x0 = 2.0 * std::f64::consts::PI;
    let t_eval = vec![x0, 4.0, 2.0, 0.5, 0.0];
    for method in [Method::RK45, Method::RK23] {
        let sol = solve_ivp(&SHO, x0, 0.0, &[1.0, 0.0], tight_opts(method, t_eval.clone())).unwrap();
        assert_eq!(sol.t, t_eval);
        for (t, y) in sol.iter() {
            assert_abs_diff_eq!(y[0], t.cos(), epsilon = 1e-6);
            assert_abs_diff_eq!(y[1], -t.sin(), epsilon = 1e-6);
        }
    }
}

#[test]
fn step_endpoints_without_t_eval() {
    let options = IVPOptions::builder().rtol(1e-8).atol(1e-10).build();
    let sol = solve_ivp(&ExponentialDecay, 0.0, 3.0, &[1.0], options).unwrap();

    assert_eq!(sol.t.first(), Some(&0.0));
    assert_eq!(sol.t.last(), Some(&3.0));
    assert_eq!(sol.t.len(), sol.naccpt + 1);
    assert!(sol.t.windows(2).all(|w| w[1] > w[0]));
    for (t, y) in sol.iter() {
        assert_abs_diff_eq!(y[0], (-t).exp(), epsilon = 1e-7);
    }
}

#[test]
fn interior_t_eval_does_not_include_bounds() {
    let t_eval = vec![0.25, 0.5, 0.75];
    let sol = solve_ivp(&ExponentialDecay, 0.0, 1.0, &[1.0], tight_opts(Method::RK45, t_eval.clone()))
        .unwrap();
    assert_eq!(sol.t, t_eval);
    assert_eq!(sol.component(0).len(), 3);
}

#[test]
fn rejects_t_eval_outside_span() {
    let err = solve_ivp(&ExponentialDecay, 0.0, 1.0, &[1.0], tight_opts(Method::RK45, vec![0.0, 1.5]))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidTEval(_)));
}

#[test]
fn rejects_non_monotonic_t_eval() {
    let err = solve_ivp(&ExponentialDecay, 0.0, 1.0, &[1.0], tight_opts(Method::RK45, vec![0.0, 0.6, 0.4]))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidTEval(_)));
}

#[test]
fn rejects_empty_t_eval() {
    let err = solve_ivp(&ExponentialDecay, 0.0, 1.0, &[1.0], tight_opts(Method::RK45, vec![]))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidTEval(_)));
}

#[test]
fn rejects_bad_tolerances_and_state() {
    let options = IVPOptions::builder().rtol(-1.0).build();
    let err = solve_ivp(&ExponentialDecay, 0.0, 1.0, &[1.0], options).unwrap_err();
    assert!(matches!(err, Error::InvalidParameters(_)));

    let err = solve_ivp(&ExponentialDecay, 0.0, 1.0, &[f64::NAN], IVPOptions::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidParameters(_)));

    let err = solve_ivp(&ExponentialDecay, 1.0, 1.0, &[1.0], IVPOptions::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidParameters(_)));
}

#[test]
fn too_few_steps_is_a_failure() {
    let options = IVPOptions::builder()
        .rtol(1e-10)
        .atol(1e-12)
        .nmax(3)
        .build();
    let err = solve_ivp(&SHO, 0.0, 100.0, &[1.0, 0.0], options).unwrap_err();
    match err {
        Error::IntegrationFailure { t, status } => {
            assert_eq!(status, Status::NeedLargerNMax);
            assert!(t < 100.0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn zero_nmax_is_invalid() {
    let options = IVPOptions::builder().nmax(0).build();
    let err = solve_ivp(&SHO, 0.0, 1.0, &[1.0, 0.0], options).unwrap_err();
    assert!(matches!(err, Error::InvalidSettings(_)));
}
