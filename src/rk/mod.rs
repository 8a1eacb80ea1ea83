//! Explicit Runge-Kutta integrators (RK23)

mod rk23;

pub use rk23::{contrk23, rk23};
