//! Errors for the circuit model, the integrators and the output sinks.

use thiserror::Error;

use crate::{Float, status::Status};

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Circuit parameters, integration bounds or the output grid were rejected
    /// before any right-hand side evaluation took place.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The requested output times are unusable for the integration span.
    #[error("invalid t_eval: {0}")]
    InvalidTEval(String),

    /// One or more solver settings are out of range.
    #[error("invalid solver settings: {}", join(.0))]
    InvalidSettings(Vec<SettingsError>),

    /// The integrator stopped before reaching the end of the span. Nothing
    /// sampled up to `t` is returned.
    #[error("integration failed at t = {t:e}: {status}")]
    IntegrationFailure { t: Float, status: Status },

    /// The integrator reached the end of the span but some requested output
    /// times were never sampled.
    #[error("integration produced {produced} of {requested} requested samples")]
    MissingSamples { requested: usize, produced: usize },

    /// A trajectory could not be assembled from the given series.
    #[error("invalid trajectory: {0}")]
    InvalidTrajectory(String),

    #[error("plot error: {0}")]
    Plot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validation errors raised by the Runge-Kutta entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("nmax must be positive (got {0})")]
    NMaxMustBePositive(usize),
    #[error("nstiff must be positive (got {0})")]
    NStiffMustBePositive(usize),
    #[error("uround must be in (1e-35, 1.0) (got {0})")]
    URoundOutOfRange(Float),
    #[error("safety_factor must be in (1e-4, 1.0) (got {0})")]
    SafetyFactorOutOfRange(Float),
    #[error("beta must be <= 0.2 (got {0})")]
    BetaTooLarge(Float),
    #[error("step size scale factors must satisfy 0 < min < max (got {0}, {1})")]
    InvalidScaleFactors(Float, Float),
    #[error("step size must be finite and non-zero (got {0})")]
    InvalidStepSize(Float),
}

pub type Result<T> = std::result::Result<T, Error>;

fn join(errors: &[SettingsError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
