//! Diode-clamped RLC discharge.
//!
//! State `(i, v_c)`: inductor current and capacitor voltage. The right-hand
//! side switches on the sign of `v_c`:
//!
//! | mode       | condition   | di/dt              | dv_c/dt              |
//! |------------|-------------|--------------------|----------------------|
//! | blocking   | `v_c > 0`   | `v_c / L`          | `-i / C`             |
//! | conducting | `v_c <= 0`  | `(v_c - R i) / L`  | `-(i + v_c / R) / C` |
//!
//! The switching instant is not located explicitly; the integrator's error
//! control alone handles the kink at `v_c = 0`.

mod config;
mod integrate;
mod mode;
mod params;

pub use config::{IntegratorSettings, SimulationConfig, uniform_time_grid};
pub use integrate::{DiodeRlc, IntegrationStats, Simulation, integrate, integrate_with, simulate};
pub use mode::Mode;
pub use params::{CircuitParameters, State};

use crate::Float;

/// Piecewise right-hand side `(di/dt, dv_c/dt)`.
///
/// `t` is accepted for the integration protocol and ignored. The mode is
/// re-selected from `state.v_c` on every call.
pub fn evaluate_derivative(_t: Float, state: State, params: &CircuitParameters) -> State {
    Mode::select(state.v_c).derivative(state, params)
}
