//! DOPRI5 - Dormand–Prince 5(4) explicit Runge–Kutta integrator
//!
//! Step size control, stiffness detection and the dense output polynomial
//! follow the DOPRI5 code of E. Hairer and G. Wanner.
//!
//! Reference
//! - E. Hairer, S. P. Nørsett, and G. Wanner, "Solving Ordinary Differential
//!   Equations I. Nonstiff Problems", 2nd ed., Springer (1993).
//!

use crate::{
    Float,
    error::{Error, SettingsError},
    hinit::hinit,
    interpolate::Interpolate,
    ode::ODE,
    result::IntegrationResult,
    settings::Settings,
    solout::{ControlFlag, SolOut},
    status::Status,
    tolerance::Tolerance,
};

/// Dormand–Prince DOPRI5: explicit embedded Runge–Kutta 5(4) solver with
/// adaptive step-size control and optional dense output.
///
/// This function integrates the system `y' = f(x, y)` from `x` to `xend`,
/// advancing the provided state buffer `y` in-place. It performs classical
/// error control (embedded estimates) and, optionally, computes dense-output
/// coefficients for continuous interpolation inside each step.
///
/// # Arguments
///
/// - `f`: Right‑hand side implementing `ODE`.
/// - `x`: Initial independent variable value.
/// - `xend`: Final independent variable value.
/// - `y`: Mutable slice containing the initial state; on return contains the
///   state at the last reached abscissa.
/// - `rtol`, `atol`: Relative and absolute tolerances (see [`Tolerance`]).
/// - `solout`: Callback invoked at the initial point and after each accepted
///   step.
/// - `dense_output`: If `true`, dense‑output coefficients are computed every
///   accepted step and an interpolant is handed to `solout`.
/// - `settings`: Step control knobs. Defaults: `scale_min = 0.2`,
///   `scale_max = 10`, `beta = 0.04`, `hmax = |xend - x|`.
///
/// # Returns
/// An [`IntegrationResult`] whose `status` tells whether `xend` was reached,
/// or [`Error::InvalidSettings`] when the settings are out of range.
pub fn dopri5<F, S>(
    f: &F,
    mut x: Float,
    xend: Float,
    y: &mut [Float],
    rtol: &Tolerance,
    atol: &Tolerance,
    solout: &mut S,
    dense_output: bool,
    settings: &Settings,
) -> Result<IntegrationResult, Error>
where
    F: ODE,
    S: SolOut,
{
    // --- Input Validation ---
    let mut errors = settings.common_errors();

    let nstiff = settings.nstiff;
    if nstiff == 0 {
        errors.push(SettingsError::NStiffMustBePositive(nstiff));
    }

    // Parameters for step size selection
    let scale_min = settings.scale_min.unwrap_or(0.2);
    let scale_max = settings.scale_max.unwrap_or(10.0);
    if scale_min <= 0.0 || scale_max <= scale_min {
        errors.push(SettingsError::InvalidScaleFactors(scale_min, scale_max));
    }
    let facc1 = 1.0 / scale_min;
    let facc2 = 1.0 / scale_max;

    // Beta for step control stabilization
    let beta = settings.beta.unwrap_or(0.04).max(0.0);
    if beta > 0.2 {
        errors.push(SettingsError::BetaTooLarge(beta));
    }

    if !errors.is_empty() {
        return Err(Error::InvalidSettings(errors));
    }

    let uround = settings.uround;
    let safety_factor = settings.safety_factor;
    let nmax = settings.nmax;
    let hmax = settings.hmax.map_or((xend - x).abs(), Float::abs);

    // --- Declarations ---
    let n = y.len();
    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut k3 = vec![0.0; n];
    let mut k4 = vec![0.0; n];
    let mut k5 = vec![0.0; n];
    let mut k6 = vec![0.0; n];
    let mut y1 = vec![0.0; n];
    let mut ysti = vec![0.0; n];
    let mut cont = vec![0.0; 5 * n];
    let mut facold: Float = 1e-4;
    let mut last = false;
    let mut reject = false;
    let mut nonstiff = 0;
    let mut hlamb: Float = 0.0;
    let mut iasti = 0;
    let mut nfev = 0;
    let mut nstep = 0;
    let mut naccpt = 0;
    let mut nrejct = 0;
    let mut hnew;
    let status;
    let expo1 = 0.2 - beta * 0.75;
    let posneg = (xend - x).signum();

    // --- Initializations ---
    f.ode(x, y, &mut k1);
    nfev += 1;
    let mut h = match settings.h0 {
        Some(h0) => h0.abs().min(hmax) * posneg,
        None => {
            nfev += 1;
            hinit(f, x, y, posneg, &k1, &mut k2, &mut y1, 5, hmax, atol, rtol)
        }
    };

    if solout.solout::<DenseOutput>(x, x, y, None) == ControlFlag::Interrupt {
        return Ok(IntegrationResult {
            x,
            h,
            status: Status::Interrupted,
            nfev,
            nstep,
            naccpt,
            nrejct,
        });
    }

    // --- Main integration loop ---
    loop {
        // Check for maximum number of steps
        if nstep > nmax {
            status = Status::NeedLargerNMax;
            break;
        }

        // Check for underflow due to machine rounding
        if 0.1 * h.abs() <= x.abs() * uround {
            status = Status::StepSizeTooSmall;
            break;
        }

        // Adjust last step to land on xend
        if (x + 1.01 * h - xend) * posneg > 0.0 {
            h = xend - x;
            last = true;
        }

        nstep += 1;

        // Stage 2
        for i in 0..n {
            y1[i] = y[i] + h * A21 * k1[i];
        }
        f.ode(x + C2 * h, &y1, &mut k2);

        // Stage 3
        for i in 0..n {
            y1[i] = y[i] + h * (A31 * k1[i] + A32 * k2[i]);
        }
        f.ode(x + C3 * h, &y1, &mut k3);

        // Stage 4
        for i in 0..n {
            y1[i] = y[i] + h * (A41 * k1[i] + A42 * k2[i] + A43 * k3[i]);
        }
        f.ode(x + C4 * h, &y1, &mut k4);

        // Stage 5
        for i in 0..n {
            y1[i] = y[i] + h * (A51 * k1[i] + A52 * k2[i] + A53 * k3[i] + A54 * k4[i]);
        }
        f.ode(x + C5 * h, &y1, &mut k5);

        // Stage 6
        for i in 0..n {
            ysti[i] =
                y[i] + h * (A61 * k1[i] + A62 * k2[i] + A63 * k3[i] + A64 * k4[i] + A65 * k5[i]);
        }
        let xph = if last { xend } else { x + h };
        f.ode(xph, &ysti, &mut k6);

        // Final stage
        for i in 0..n {
            y1[i] =
                y[i] + h * (A71 * k1[i] + A73 * k3[i] + A74 * k4[i] + A75 * k5[i] + A76 * k6[i]);
        }
        f.ode(xph, &y1, &mut k2);
        nfev += 6;

        // Prepare last segment of dense output before recalculating k4
        if dense_output {
            for i in 0..n {
                cont[4 * n + i] = h
                    * (D1 * k1[i] + D3 * k3[i] + D4 * k4[i] + D5 * k5[i] + D6 * k6[i] + D7 * k2[i]);
            }
        }

        // K4 scaled for error estimate
        for i in 0..n {
            k4[i] =
                (E1 * k1[i] + E3 * k3[i] + E4 * k4[i] + E5 * k5[i] + E6 * k6[i] + E7 * k2[i]) * h;
        }

        // Error estimation
        let mut err: Float = 0.0;
        for i in 0..n {
            let sk = atol[i] + rtol[i] * y[i].abs().max(y1[i].abs());
            err += (k4[i] / sk) * (k4[i] / sk);
        }
        err = (err / n as Float).sqrt();

        // Computation of hnew
        let fac11 = err.powf(expo1);
        // Lund-Stabilization
        let fac = fac11 / facold.powf(beta);
        // We require scale_min <= hnew/h <= scale_max
        let fac = facc2.max(facc1.min(fac / safety_factor));
        hnew = h / fac;

        if err <= 1.0 {
            // Step accepted
            facold = err.max(1.0e-4);
            naccpt += 1;

            // Stiffness detection
            if naccpt % nstiff == 0 || iasti > 0 {
                let mut stnum: Float = 0.0;
                let mut stden: Float = 0.0;
                for i in 0..n {
                    let d1 = k2[i] - k6[i];
                    let d2 = y1[i] - ysti[i];
                    stnum += d1 * d1;
                    stden += d2 * d2;
                }
                if stden > 0.0 {
                    hlamb = h.abs() * (stnum / stden).sqrt();
                }
                if hlamb > 3.25 {
                    nonstiff = 0;
                    iasti += 1;
                    if iasti == 15 {
                        tracing::warn!(x, hlamb, "dopri5: problem seems to become stiff");
                        status = Status::ProbablyStiff;
                        break;
                    }
                } else {
                    nonstiff += 1;
                    if nonstiff == 6 {
                        iasti = 0;
                    }
                }
            }

            // Prepare dense output
            if dense_output {
                for i in 0..n {
                    let ydiff = y1[i] - y[i];
                    let bspl = h * k1[i] - ydiff;
                    cont[i] = y[i];
                    cont[n + i] = ydiff;
                    cont[2 * n + i] = bspl;
                    cont[3 * n + i] = -h * k2[i] + ydiff - bspl;
                }
            }

            // Update state variables
            k1.copy_from_slice(&k2);
            y.copy_from_slice(&y1);
            let xold = x;
            x = xph;

            let interpolator = DenseOutput::new(&cont, xold, h);
            let interpolation = if dense_output { Some(&interpolator) } else { None };
            if solout.solout(xold, x, y, interpolation) == ControlFlag::Interrupt {
                status = Status::Interrupted;
                break;
            }

            // Normal exit
            if last {
                h = hnew;
                status = Status::Success;
                break;
            }

            // Check for step size limits
            if hnew.abs() > hmax {
                hnew = posneg * hmax;
            }

            // Prevent oscillations due to previous rejected step
            if reject {
                hnew = posneg * hnew.abs().min(h.abs());
                reject = false;
            }
        } else {
            // Step rejected
            hnew = h / facc1.min(fac11 / safety_factor);
            reject = true;
            if naccpt >= 1 {
                nrejct += 1;
            }
            last = false;
        }
        h = hnew;
    }

    Ok(IntegrationResult {
        x,
        h,
        status,
        nfev,
        nstep,
        naccpt,
        nrejct,
    })
}

/// Continuous output function for DOPRI5
pub fn contdp5(xi: Float, yi: &mut [Float], cont: &[Float], xold: Float, h: Float) {
    let n = cont.len() / 5;
    let theta = (xi - xold) / h;
    let theta1 = 1.0 - theta;
    for i in 0..n {
        yi[i] = cont[i]
            + theta
                * (cont[n + i]
                    + theta1
                        * (cont[2 * n + i] + theta * (cont[3 * n + i] + theta1 * cont[4 * n + i])));
    }
}

/// Dense output interpolator for DOPRI5
struct DenseOutput<'a> {
    cont: &'a [Float],
    xold: Float,
    h: Float,
}

impl<'a> DenseOutput<'a> {
    fn new(cont: &'a [Float], xold: Float, h: Float) -> Self {
        Self { cont, xold, h }
    }
}

impl Interpolate for DenseOutput<'_> {
    fn interpolate(&self, xi: Float, yi: &mut [Float]) {
        contdp5(xi, yi, self.cont, self.xold, self.h);
    }
}

// DOPRI5 Butcher tableau coefficients
const C2: Float = 0.2;
const C3: Float = 0.3;
const C4: Float = 0.8;
const C5: Float = 8.0 / 9.0;

const A21: Float = 0.2;
const A31: Float = 3.0 / 40.0;
const A32: Float = 9.0 / 40.0;
const A41: Float = 44.0 / 45.0;
const A42: Float = -56.0 / 15.0;
const A43: Float = 32.0 / 9.0;
const A51: Float = 19372.0 / 6561.0;
const A52: Float = -25360.0 / 2187.0;
const A53: Float = 64448.0 / 6561.0;
const A54: Float = -212.0 / 729.0;
const A61: Float = 9017.0 / 3168.0;
const A62: Float = -355.0 / 33.0;
const A63: Float = 46732.0 / 5247.0;
const A64: Float = 49.0 / 176.0;
const A65: Float = -5103.0 / 18656.0;
const A71: Float = 35.0 / 384.0;
const A73: Float = 500.0 / 1113.0;
const A74: Float = 125.0 / 192.0;
const A75: Float = -2187.0 / 6784.0;
const A76: Float = 11.0 / 84.0;

const E1: Float = 71.0 / 57600.0;
const E3: Float = -71.0 / 16695.0;
const E4: Float = 71.0 / 1920.0;
const E5: Float = -17253.0 / 339200.0;
const E6: Float = 22.0 / 525.0;
const E7: Float = -1.0 / 40.0;

const D1: Float = -12715105075.0 / 11282082432.0;
const D3: Float = 87487479700.0 / 32700410799.0;
const D4: Float = -10690763975.0 / 1880347072.0;
const D5: Float = 701980252875.0 / 199316789632.0;
const D6: Float = -1453857185.0 / 822651844.0;
const D7: Float = 69997945.0 / 29380423.0;
