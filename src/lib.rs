//! Transient simulation of a diode-clamped RLC discharge.
//!
//! A capacitor charged to `V0` discharges through an inductor. While the
//! capacitor voltage is positive the ideal diode blocks and the loop is a
//! lossless LC; once the voltage reaches zero the diode conducts and the
//! resistor enters the current path. The resulting switched ODE is integrated
//! with an embedded Runge-Kutta pair (SciPy-like [`solve_ivp`]) and sampled on
//! a fixed output grid.

mod error;
mod hinit;
mod interpolate;
mod ode;
mod result;
mod settings;
mod solout;
mod status;
mod tolerance;

pub mod circuit;
pub mod dp;
pub mod output;
pub mod prelude;
pub mod rk;
pub mod solve;
pub mod trajectory;

pub use error::{Error, Result, SettingsError};
pub use interpolate::Interpolate;
pub use ode::ODE;
pub use result::IntegrationResult;
pub use settings::Settings;
pub use solout::{ControlFlag, SolOut};
pub use solve::{IVPOptions, IVPSolution, Method, solve_ivp};
pub use status::Status;
pub use tolerance::Tolerance;

/// Floating point type used throughout the solver and the circuit model.
pub type Float = f64;
