//! Simulation configuration and output grid construction.

use crate::{Float, error::Error, solve::Method};

use super::params::CircuitParameters;

/// Solver knobs used by the circuit integrator. Defaults match SciPy's
/// `solve_ivp`: RK45 with rtol 1e-3 and atol 1e-6.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntegratorSettings {
    pub method: Method,
    pub rtol: Float,
    pub atol: Float,
    /// Maximum number of integrator steps before giving up.
    pub max_steps: usize,
}

impl Default for IntegratorSettings {
    fn default() -> Self {
        Self {
            method: Method::RK45,
            rtol: 1e-3,
            atol: 1e-6,
            max_steps: 100_000,
        }
    }
}

/// Everything needed for one simulation run.
///
/// [`SimulationConfig::default`] is the reference discharge: 900 V on
/// 180 µF through 11 µH, with 85 mΩ switched in by the diode, observed for
/// 400 µs on 4000 points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Initial capacitor voltage [V]
    pub v0: Float,
    /// Inductance [H]
    pub l: Float,
    /// Resistance [Ω]
    pub r: Float,
    /// Capacitance [F]
    pub c: Float,
    /// Start of the simulation [s]
    pub t0: Float,
    /// End of the simulation [s]
    pub tf: Float,
    /// Number of equally spaced output samples, endpoints included.
    pub num_samples: usize,
    pub solver: IntegratorSettings,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            v0: 900.0,
            l: 11e-6,
            r: 85e-3,
            c: 180e-6,
            t0: 0.0,
            tf: 400e-6,
            num_samples: 4000,
            solver: IntegratorSettings::default(),
        }
    }
}

impl SimulationConfig {
    pub fn parameters(&self) -> Result<CircuitParameters, Error> {
        CircuitParameters::new(self.v0, self.l, self.r, self.c)
    }

    pub fn time_grid(&self) -> Result<Vec<Float>, Error> {
        uniform_time_grid(self.t0, self.tf, self.num_samples)
    }
}

/// `n` equally spaced times from `t0` to `tf`, both included.
///
/// The first element is exactly `t0` and the last exactly `tf`.
pub fn uniform_time_grid(t0: Float, tf: Float, n: usize) -> Result<Vec<Float>, Error> {
    check_span(t0, tf)?;
    if n < 2 {
        return Err(Error::InvalidParameters(format!(
            "at least two samples are required (got {n})"
        )));
    }
    let step = (tf - t0) / (n - 1) as Float;
    let mut grid: Vec<Float> = (0..n).map(|k| t0 + k as Float * step).collect();
    grid[n - 1] = tf;
    Ok(grid)
}

pub(crate) fn check_span(t0: Float, tf: Float) -> Result<(), Error> {
    if !t0.is_finite() || !tf.is_finite() {
        return Err(Error::InvalidParameters(format!(
            "time bounds must be finite (got t0 = {t0}, tf = {tf})"
        )));
    }
    if t0 >= tf {
        return Err(Error::InvalidParameters(format!(
            "t0 must be smaller than tf (got t0 = {t0}, tf = {tf})"
        )));
    }
    Ok(())
}
