//! High-level solve module: SciPy-like API pieces split into submodules.

mod options;
mod solout;
mod solution;
mod solve_ivp;

pub use options::{IVPOptions, Method};
pub use solution::IVPSolution;
pub use solve_ivp::solve_ivp;
