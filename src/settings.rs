//! Settings for numerical integrators

use bon::Builder;

use crate::{Float, error::SettingsError};

#[derive(Builder, Clone, Debug)]
/// Settings for the numerical integrators
///
/// Optional fields fall back to method-specific defaults.
pub struct Settings {
    /// The rounding unit, typically machine epsilon
    #[builder(default = 2.3e-16)]
    pub uround: Float,
    /// safety factor in step-size prediction. Default is 0.9.
    #[builder(default = 0.9)]
    pub safety_factor: Float,
    /// Parameter for step size selection where scale_min <= hnew/hold <= scale_max
    pub scale_min: Option<Float>,
    /// Parameter for step size selection where scale_min <= hnew/hold <= scale_max
    pub scale_max: Option<Float>,
    /// Beta factor for stabilized step size control. Positive values of Beta
    /// ( <= 0.04 ) make the step size control more stable. Negative values
    /// are treated as zero.
    pub beta: Option<Float>,
    /// Maximal step size. Default is |xend - x0|.
    pub hmax: Option<Float>,
    /// Initial step size. None will result in an initial guess
    /// provided by the [`crate::hinit::hinit`] function.
    pub h0: Option<Float>,
    /// Maximum number of allowed steps. Default is 100,000.
    #[builder(default = 100_000)]
    pub nmax: usize,
    /// Number of steps before performing a stiffness test. Default is 1000.
    #[builder(default = 1000)]
    pub nstiff: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Settings {
    /// Checks the settings shared by every method. Method specific checks are
    /// appended by the integrators themselves.
    pub(crate) fn common_errors(&self) -> Vec<SettingsError> {
        let mut errors = Vec::new();
        if self.nmax == 0 {
            errors.push(SettingsError::NMaxMustBePositive(self.nmax));
        }
        if self.uround <= 1e-35 || self.uround >= 1.0 {
            errors.push(SettingsError::URoundOutOfRange(self.uround));
        }
        if self.safety_factor >= 1.0 || self.safety_factor <= 1e-4 {
            errors.push(SettingsError::SafetyFactorOutOfRange(self.safety_factor));
        }
        if let Some(h) = self.h0 {
            if !h.is_finite() || h == 0.0 {
                errors.push(SettingsError::InvalidStepSize(h));
            }
        }
        if let Some(h) = self.hmax {
            if !h.is_finite() || h == 0.0 {
                errors.push(SettingsError::InvalidStepSize(h));
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.nmax, 100_000);
        assert_eq!(settings.nstiff, 1000);
        assert!(settings.common_errors().is_empty());
    }

    #[test]
    fn collects_every_violation() {
        let settings = Settings::builder()
            .nmax(0)
            .safety_factor(1.5)
            .h0(0.0)
            .build();
        let errors = settings.common_errors();
        assert_eq!(
            errors,
            vec![
                SettingsError::NMaxMustBePositive(0),
                SettingsError::SafetyFactorOutOfRange(1.5),
                SettingsError::InvalidStepSize(0.0),
            ]
        );
    }
}
