//! Options and method selection for solve_ivp

use std::{fmt, str::FromStr};

use bon::Builder;

use crate::{Float, tolerance::Tolerance};

/// Solver method selection (roughly mirroring scipy.integrate.solve_ivp)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    /// Bogacki–Shampine 3(2) adaptive RK
    RK23,
    /// Dormand–Prince 5(4) adaptive RK
    #[default]
    RK45,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::RK23 => f.write_str("RK23"),
            Method::RK45 => f.write_str("RK45"),
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RK23" => Ok(Method::RK23),
            "RK45" | "DOPRI5" => Ok(Method::RK45),
            other => Err(format!("unknown method '{other}' (expected RK23 or RK45)")),
        }
    }
}

#[derive(Builder, Clone, Debug)]
/// Options for solve_ivp similar to SciPy
///
/// ```
/// use rlc_diode::{IVPOptions, Method};
///
/// let options = IVPOptions::builder()
///     .method(Method::RK23)
///     .rtol(1e-6)
///     .t_eval(vec![0.0, 0.5, 1.0])
///     .build();
/// assert_eq!(options.nmax, 100_000);
/// ```
pub struct IVPOptions {
    /// Method to use. Default: RK45 (Dormand–Prince 5(4)).
    #[builder(default)]
    pub method: Method,
    /// Relative tolerance for error estimation. Default: 1e-3.
    #[builder(default = Tolerance::Scalar(1e-3), into)]
    pub rtol: Tolerance,
    /// Absolute tolerance for error estimation. Default: 1e-6.
    #[builder(default = Tolerance::Scalar(1e-6), into)]
    pub atol: Tolerance,
    /// Maximum number of allowed steps.
    #[builder(default = 100_000)]
    pub nmax: usize,
    /// Points where the solution is requested. If provided, dense output is
    /// used to sample exactly at these locations and step endpoints are not
    /// recorded.
    pub t_eval: Option<Vec<Float>>,
    /// Initial step suggestion (maps to `settings.h0`).
    pub first_step: Option<Float>,
    /// Maximum step size (maps to `settings.hmax`).
    pub max_step: Option<Float>,
}

impl Default for IVPOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
