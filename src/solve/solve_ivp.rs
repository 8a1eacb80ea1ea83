//! SciPy-like solve_ivp entry point implementation

use crate::{
    Float,
    dp::dopri5,
    error::Error,
    ode::ODE,
    rk::rk23,
    settings::Settings,
};

use super::{
    options::{IVPOptions, Method},
    solout::DefaultSolOut,
    solution::IVPSolution,
};

/// Solve an initial value problem with SciPy-like options.
///
/// Integrates `y' = f(x, y)` from `x0` to `xend` starting at `y0`. Without
/// `t_eval` the solution holds the initial point and every accepted step;
/// with `t_eval` it holds exactly the requested points, interpolated from the
/// method's dense output.
///
/// Any stop before `xend` is reported as [`Error::IntegrationFailure`]; no
/// partial solution is returned.
///
/// ```
/// use rlc_diode::{IVPOptions, ODE, solve_ivp};
///
/// struct Decay;
/// impl ODE for Decay {
///     fn ode(&self, _x: f64, y: &[f64], dydx: &mut [f64]) {
///         dydx[0] = -y[0];
///     }
/// }
///
/// let options = IVPOptions::builder().rtol(1e-8).atol(1e-10).t_eval(vec![0.0, 1.0]).build();
/// let sol = solve_ivp(&Decay, 0.0, 1.0, &[1.0], options).unwrap();
/// assert_eq!(sol.t, vec![0.0, 1.0]);
/// assert!((sol.y[1][0] - (-1.0f64).exp()).abs() < 1e-7);
/// ```
pub fn solve_ivp<F>(
    f: &F,
    x0: Float,
    xend: Float,
    y0: &[Float],
    options: IVPOptions,
) -> Result<IVPSolution, Error>
where
    F: ODE,
{
    validate(x0, xend, y0, &options)?;

    let settings = Settings::builder()
        .nmax(options.nmax)
        .maybe_h0(options.first_step)
        .maybe_hmax(options.max_step)
        .build();

    let _span = tracing::debug_span!("solve_ivp", method = %options.method, x0, xend).entered();

    let t_eval = options.t_eval.as_deref();
    let dense_output = t_eval.is_some();
    let mut solout = DefaultSolOut::new(t_eval);
    let mut y = y0.to_vec();

    let result = match options.method {
        Method::RK23 => rk23(
            f,
            x0,
            xend,
            &mut y,
            &options.rtol,
            &options.atol,
            &mut solout,
            dense_output,
            &settings,
        ),
        Method::RK45 => dopri5(
            f,
            x0,
            xend,
            &mut y,
            &options.rtol,
            &options.atol,
            &mut solout,
            dense_output,
            &settings,
        ),
    }?;

    if !result.status.is_success() {
        tracing::warn!(x = result.x, status = %result.status, "integration stopped early");
        return Err(Error::IntegrationFailure {
            t: result.x,
            status: result.status,
        });
    }

    let (t, y) = solout.into_data();
    if let Some(te) = t_eval {
        check_samples(te.len(), t.len())?;
    }

    tracing::debug!(
        nfev = result.nfev,
        nstep = result.nstep,
        naccpt = result.naccpt,
        nrejct = result.nrejct,
        "integration finished"
    );

    Ok(IVPSolution {
        t,
        y,
        nfev: result.nfev,
        nstep: result.nstep,
        naccpt: result.naccpt,
        nrejct: result.nrejct,
        status: result.status,
    })
}

fn check_samples(requested: usize, produced: usize) -> Result<(), Error> {
    if requested != produced {
        return Err(Error::MissingSamples {
            requested,
            produced,
        });
    }
    Ok(())
}

fn validate(x0: Float, xend: Float, y0: &[Float], options: &IVPOptions) -> Result<(), Error> {
    if !x0.is_finite() || !xend.is_finite() {
        return Err(Error::InvalidParameters(format!(
            "integration bounds must be finite (got {x0}, {xend})"
        )));
    }
    if x0 == xend {
        return Err(Error::InvalidParameters(format!(
            "integration span is empty (x0 = xend = {x0})"
        )));
    }
    if y0.is_empty() {
        return Err(Error::InvalidParameters("initial state is empty".into()));
    }
    if let Some(v) = y0.iter().find(|v| !v.is_finite()) {
        return Err(Error::InvalidParameters(format!(
            "initial state must be finite (got {v})"
        )));
    }
    options
        .rtol
        .check("rtol", y0.len())
        .and_then(|()| options.atol.check("atol", y0.len()))
        .map_err(Error::InvalidParameters)?;

    if let Some(te) = options.t_eval.as_deref() {
        if te.is_empty() {
            return Err(Error::InvalidTEval("t_eval must be non-empty when provided".into()));
        }
        if let Some(v) = te.iter().find(|v| !v.is_finite()) {
            return Err(Error::InvalidTEval(format!("t_eval must be finite (got {v})")));
        }
        // Check monotonicity matching direction
        let direction = (xend - x0).signum();
        if te.windows(2).any(|w| (w[1] - w[0]) * direction <= 0.0) {
            return Err(Error::InvalidTEval(
                "t_eval must be strictly monotonic in the integration direction".into(),
            ));
        }
        // Check range coverage
        let (lo, hi) = if direction > 0.0 { (x0, xend) } else { (xend, x0) };
        if te.iter().any(|&t| t < lo || t > hi) {
            return Err(Error::InvalidTEval(format!(
                "t_eval points must lie within [{lo}, {hi}]"
            )));
        }
    }

    Ok(())
}
