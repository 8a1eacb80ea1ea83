//! Bogacki–Shampine 3(2) pair (RK23) adaptive-step integrator.

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

/// Bogacki–Shampine 3(2) pair (RK23) adaptive-step integrator.
/// This implementation uses an embedded method to estimate errors
/// and adjust the step size accordingly with dense output.
///
/// Arguments mirror [`crate::dp::dopri5`]. Step size factors default to
/// `scale_min = 0.2`, `scale_max = 5`.
pub fn rk23<F, S>(
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

    // Step size scaling factors
    let scale_min = settings.scale_min.unwrap_or(0.2);
    let scale_max = settings.scale_max.unwrap_or(5.0);
    if scale_min <= 0.0 || scale_max <= scale_min {
        errors.push(SettingsError::InvalidScaleFactors(scale_min, scale_max));
    }

    if !errors.is_empty() {
        return Err(Error::InvalidSettings(errors));
    }

    let uround = settings.uround;
    let safety_factor = settings.safety_factor;
    let nmax = settings.nmax;
    let hmax = settings.hmax.map_or((xend - x).abs(), Float::abs);

    // Error exponent
    let error_exponent = -1.0 / 3.0;

    // --- Declarations ---
    let n = y.len();
    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut k3 = vec![0.0; n];
    let mut k4 = vec![0.0; n];
    let mut yt = vec![0.0; n];
    let mut ye = vec![0.0; n];
    let mut cont = vec![0.0; 4 * n];
    let mut nfev = 0;
    let mut nstep = 0;
    let mut naccpt = 0;
    let mut nrejct = 0;
    let mut last = false;
    let status;
    let direction = (xend - x).signum();

    // --- Initializations ---
    f.ode(x, y, &mut k1);
    nfev += 1;
    let mut h = match settings.h0 {
        Some(h0) => h0.abs().min(hmax) * direction,
        None => {
            nfev += 1;
            hinit(f, x, y, direction, &k1, &mut k2, &mut k3, 3, hmax, atol, rtol)
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

        // Check for last step adjustment
        if (x + h - xend) * direction >= 0.0 {
            h = xend - x;
            last = true;
        }

        nstep += 1;

        // Stage 2
        for i in 0..n {
            yt[i] = y[i] + h * A21 * k1[i];
        }
        f.ode(x + C2 * h, &yt, &mut k2);

        // Stage 3
        for i in 0..n {
            yt[i] = y[i] + h * A32 * k2[i];
        }
        f.ode(x + C3 * h, &yt, &mut k3);

        // Compute solution and error estimate
        for i in 0..n {
            yt[i] = y[i] + h * (B1 * k1[i] + B2 * k2[i] + B3 * k3[i]);
        }

        // Stage 4/1: derivative at new point, also used as k1 if accepted.
        let xph = if last { xend } else { x + h };
        f.ode(xph, &yt, &mut k4);
        nfev += 3;

        // Error estimate using embedded 2nd order solution
        for i in 0..n {
            ye[i] = h * (E1 * k1[i] + E2 * k2[i] + E3 * k3[i] + E4 * k4[i]);
        }

        // Error estimation
        let mut err: Float = 0.0;
        for i in 0..n {
            let tol = atol[i] + rtol[i] * yt[i].abs().max(y[i].abs());
            err += (ye[i] / tol).powi(2);
        }
        err = (err / n as Float).sqrt();

        if err <= 1.0 {
            // Step accepted
            naccpt += 1;

            // Prepare dense output
            if dense_output {
                cont[0..n].copy_from_slice(y);
                for i in 0..n {
                    cont[n + i] = k1[i];
                    cont[2 * n + i] = D21 * k1[i] + D22 * k2[i] + D23 * k3[i] + D24 * k4[i];
                    cont[3 * n + i] = D31 * k1[i] + D32 * k2[i] + D33 * k3[i] + D34 * k4[i];
                }
            }

            // Update state, reusing k4 as k1 for the next step
            y.copy_from_slice(&yt);
            k1.copy_from_slice(&k4);
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
                status = Status::Success;
                break;
            }

            // Adjust step size
            let factor = if err == 0.0 {
                scale_max
            } else {
                (safety_factor * err.powf(error_exponent)).clamp(scale_min, scale_max)
            };
            h *= factor;
            if h.abs() > hmax {
                h = direction * hmax;
            }
        } else {
            // Step rejected
            nrejct += 1;
            last = false;
            h *= (safety_factor * err.powf(error_exponent)).clamp(scale_min, 1.0);
        }
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

/// Dense output evaluation for RK23
pub fn contrk23(xi: Float, yi: &mut [Float], cont: &[Float], xold: Float, h: Float) {
    let n = yi.len();
    let x = (xi - xold) / h;
    let x2 = x * x;
    let x3 = x2 * x;
    for i in 0..n {
        yi[i] = cont[i] + h * (cont[n + i] * x + cont[2 * n + i] * x2 + cont[3 * n + i] * x3);
    }
}

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
        contrk23(xi, yi, self.cont, self.xold, self.h);
    }
}

// RK23 Butcher tableau coefficients
const C2: Float = 0.5;
const C3: Float = 0.75;

const A21: Float = 0.5;
const A32: Float = 0.75;

const B1: Float = 2.0 / 9.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 4.0 / 9.0;

const E1: Float = 5.0 / 72.0;
const E2: Float = -1.0 / 12.0;
const E3: Float = -1.0 / 9.0;
const E4: Float = 1.0 / 8.0;

const D21: Float = -4.0 / 3.0;
const D22: Float = 1.0;
const D23: Float = 4.0 / 3.0;
const D24: Float = -1.0;
const D31: Float = 5.0 / 9.0;
const D32: Float = -2.0 / 3.0;
const D33: Float = -8.0 / 9.0;
const D34: Float = 1.0;
