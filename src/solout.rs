//! User defined callback hook executed after each accepted step.

use crate::{Float, interpolate::Interpolate};

/// Return flags for [`SolOut`].
///
/// - `Continue`: proceed with integration as normal.
/// - `Interrupt`: stop integration and return control to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlag {
    Continue,
    Interrupt,
}

/// Callback hook executed after each accepted step.
///
/// The callback is invoked once before the main loop (with `xold == x` and no
/// interpolator) and after every accepted step. The arguments are:
/// - `xold`: the left end of the last accepted step,
/// - `x`: the new abscissa after the accepted step,
/// - `y`: the integrator's current solution at `x`,
/// - `interpolator`: dense output valid on `[xold, x]`, present when the
///   integrator was asked for dense output.
pub trait SolOut {
    fn solout<I: Interpolate>(
        &mut self,
        xold: Float,
        x: Float,
        y: &[Float],
        interpolator: Option<&I>,
    ) -> ControlFlag;
}
