//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use rlc_diode::prelude::*;
//! ```

pub use crate::{
    circuit::{
        CircuitParameters, IntegratorSettings, Mode, SimulationConfig, State, evaluate_derivative,
        integrate, simulate, uniform_time_grid,
    },
    error::Error,
    interpolate::Interpolate,
    ode::ODE,
    output::{ConsoleReport, PlotSink, Summary, TrajectorySink},
    solout::{ControlFlag, SolOut},
    solve::{IVPOptions, IVPSolution, Method, solve_ivp},
    status::Status,
    trajectory::Trajectory,
};
