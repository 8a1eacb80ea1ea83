//! Interpolation trait

use crate::Float;

/// Trait for interpolating the solution within the last accepted step.
pub trait Interpolate {
    /// Interpolate the solution at the given abscissa `xi`.
    fn interpolate(&self, xi: Float, yi: &mut [Float]);
}
