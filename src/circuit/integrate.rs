//! Integration of the switched circuit over an output grid.

use crate::{
    Float,
    error::Error,
    ode::ODE,
    solve::{IVPOptions, solve_ivp},
    trajectory::Trajectory,
};

use super::{
    config::{IntegratorSettings, SimulationConfig, check_span},
    evaluate_derivative,
    params::{CircuitParameters, State},
};

/// [`ODE`] adapter over the piecewise right-hand side, state layout `[i, v_c]`.
pub struct DiodeRlc<'a> {
    params: &'a CircuitParameters,
}

impl<'a> DiodeRlc<'a> {
    pub fn new(params: &'a CircuitParameters) -> Self {
        Self { params }
    }
}

impl ODE for DiodeRlc<'_> {
    fn ode(&self, x: Float, y: &[Float], dydx: &mut [Float]) {
        let d = evaluate_derivative(x, State::from_slice(y), self.params);
        dydx[0] = d.i;
        dydx[1] = d.v_c;
    }
}

/// Solver counters for one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntegrationStats {
    pub nfev: usize,
    pub nstep: usize,
    pub naccpt: usize,
    pub nrejct: usize,
}

/// A finished run: the sampled trajectory and how much work it took.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub params: CircuitParameters,
    pub trajectory: Trajectory,
    pub stats: IntegrationStats,
}

/// Integrates the circuit from `t0` to `tf` with the default solver settings
/// and samples it at every time in `time_grid`.
pub fn integrate(
    params: &CircuitParameters,
    initial: State,
    t0: Float,
    tf: Float,
    time_grid: &[Float],
) -> Result<Trajectory, Error> {
    integrate_with(params, initial, t0, tf, time_grid, &IntegratorSettings::default())
        .map(|simulation| simulation.trajectory)
}

/// Like [`integrate`] with explicit solver settings.
///
/// Every input is checked before the first right-hand side evaluation. A
/// solver stop before `tf` yields [`Error::IntegrationFailure`].
pub fn integrate_with(
    params: &CircuitParameters,
    initial: State,
    t0: Float,
    tf: Float,
    time_grid: &[Float],
    settings: &IntegratorSettings,
) -> Result<Simulation, Error> {
    params.validate()?;
    check_span(t0, tf)?;
    if !initial.is_finite() {
        return Err(Error::InvalidParameters(format!(
            "initial state must be finite (got {initial:?})"
        )));
    }
    check_grid(t0, tf, time_grid)?;

    let _span = tracing::info_span!("integrate", t0, tf, samples = time_grid.len()).entered();

    let options = IVPOptions::builder()
        .method(settings.method)
        .rtol(settings.rtol)
        .atol(settings.atol)
        .nmax(settings.max_steps)
        .t_eval(time_grid.to_vec())
        .build();

    let solution = solve_ivp(&DiodeRlc::new(params), t0, tf, &initial.to_array(), options)?;

    let stats = IntegrationStats {
        nfev: solution.nfev,
        nstep: solution.nstep,
        naccpt: solution.naccpt,
        nrejct: solution.nrejct,
    };
    tracing::info!(
        nfev = stats.nfev,
        naccpt = stats.naccpt,
        nrejct = stats.nrejct,
        "circuit integrated"
    );

    let current = solution.component(0);
    let voltage = solution.component(1);
    let trajectory = Trajectory::new(solution.t, current, voltage)?;

    Ok(Simulation {
        params: *params,
        trajectory,
        stats,
    })
}

/// Runs the simulation described by `config`, starting from `(0, V0)` on the
/// configured uniform grid.
pub fn simulate(config: &SimulationConfig) -> Result<Simulation, Error> {
    let params = config.parameters()?;
    let grid = config.time_grid()?;
    integrate_with(
        &params,
        params.initial_state(),
        config.t0,
        config.tf,
        &grid,
        &config.solver,
    )
}

fn check_grid(t0: Float, tf: Float, grid: &[Float]) -> Result<(), Error> {
    let Some((&first, _)) = grid.split_first() else {
        return Err(Error::InvalidParameters("time grid is empty".into()));
    };
    if first != t0 {
        return Err(Error::InvalidParameters(format!(
            "time grid must start at t0 = {t0} (got {first})"
        )));
    }
    if grid.iter().any(|t| !t.is_finite() || *t > tf) {
        return Err(Error::InvalidParameters(format!(
            "time grid must be finite and lie within [{t0}, {tf}]"
        )));
    }
    if grid.windows(2).any(|w| w[1] <= w[0]) {
        return Err(Error::InvalidParameters(
            "time grid must be strictly increasing".into(),
        ));
    }
    Ok(())
}
