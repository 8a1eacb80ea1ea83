#![allow(dead_code)]

use rlc_diode::prelude::*;

/// Simple harmonic oscillator y'' = -y, state [y, y'].
pub struct SHO;

impl ODE for SHO {
    fn ode(&self, _x: f64, y: &[f64], dydx: &mut [f64]) {
        dydx[0] = y[1];
        dydx[1] = -y[0];
    }
}

/// y' = -y
pub struct ExponentialDecay;

impl ODE for ExponentialDecay {
    fn ode(&self, _x: f64, y: &[f64], dydx: &mut [f64]) {
        dydx[0] = -y[0];
    }
}

pub fn tight_opts(method: Method, t_eval: Vec<f64>) -> IVPOptions {
    IVPOptions::builder()
        .method(method)
        .rtol(1e-9)
        .atol(1e-12)
        .t_eval(t_eval)
        .build()
}

pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    uniform_time_grid(a, b, n).unwrap()
}

/// Reference discharge parameters.
pub fn reference_params() -> CircuitParameters {
    CircuitParameters::new(900.0, 11e-6, 85e-3, 180e-6).unwrap()
}

/// Solver settings tight enough for finite-difference checks on the output.
pub fn tight_settings() -> IntegratorSettings {
    IntegratorSettings {
        rtol: 1e-10,
        atol: 1e-10,
        ..IntegratorSettings::default()
    }
}
