//! Circuit parameters and the two-component state vector.

use crate::{Float, error::Error};

/// Component values of the discharge loop. All strictly positive and finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircuitParameters {
    /// Initial capacitor voltage [V]
    pub v0: Float,
    /// Inductance [H]
    pub l: Float,
    /// Resistance [Ω]
    pub r: Float,
    /// Capacitance [F]
    pub c: Float,
}

impl CircuitParameters {
    /// Build a validated parameter set.
    pub fn new(v0: Float, l: Float, r: Float, c: Float) -> Result<Self, Error> {
        let params = Self { v0, l, r, c };
        params.validate()?;
        Ok(params)
    }

    /// Rejects non-finite or non-positive values.
    ///
    /// R must stay strictly positive: the conducting branch divides by it.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [("V0", self.v0), ("L", self.l), ("R", self.r), ("C", self.c)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidParameters(format!(
                    "{name} must be finite and strictly positive (got {value})"
                )));
            }
        }
        Ok(())
    }

    /// The state the discharge starts from: no inductor current, capacitor at V0.
    pub fn initial_state(&self) -> State {
        State { i: 0.0, v_c: self.v0 }
    }

    /// Angular frequency of the lossless LC loop, 1/sqrt(LC) [rad/s].
    pub fn natural_frequency(&self) -> Float {
        1.0 / (self.l * self.c).sqrt()
    }

    /// Energy stored in the inductor and capacitor, ½Li² + ½Cv² [J].
    pub fn stored_energy(&self, state: State) -> Float {
        0.5 * self.l * state.i * state.i + 0.5 * self.c * state.v_c * state.v_c
    }
}

/// Instantaneous circuit state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct State {
    /// Inductor current [A]
    pub i: Float,
    /// Capacitor voltage [V]
    pub v_c: Float,
}

impl State {
    pub fn new(i: Float, v_c: Float) -> Self {
        Self { i, v_c }
    }

    /// Layout used by the integrators: `[i, v_c]`.
    pub fn to_array(self) -> [Float; 2] {
        [self.i, self.v_c]
    }

    pub(crate) fn from_slice(y: &[Float]) -> Self {
        Self { i: y[0], v_c: y[1] }
    }

    pub fn is_finite(&self) -> bool {
        self.i.is_finite() && self.v_c.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reference_values() {
        let params = CircuitParameters::new(900.0, 11e-6, 85e-3, 180e-6).unwrap();
        assert_eq!(params.initial_state(), State::new(0.0, 900.0));
    }

    #[test]
    fn rejects_zero_inductance() {
        let err = CircuitParameters::new(900.0, 0.0, 85e-3, 180e-6).unwrap_err();
        assert!(matches!(err, Error::InvalidParameters(msg) if msg.contains('L')));
    }

    #[test]
    fn rejects_negative_resistance() {
        let err = CircuitParameters::new(900.0, 11e-6, -85e-3, 180e-6).unwrap_err();
        assert!(matches!(err, Error::InvalidParameters(msg) if msg.contains('R')));
    }

    #[test]
    fn rejects_non_positive_v0() {
        for v0 in [0.0, -900.0] {
            let err = CircuitParameters::new(v0, 11e-6, 85e-3, 180e-6).unwrap_err();
            assert!(matches!(err, Error::InvalidParameters(msg) if msg.contains("V0")));
        }
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(CircuitParameters::new(Float::NAN, 11e-6, 85e-3, 180e-6).is_err());
        assert!(CircuitParameters::new(900.0, 11e-6, 85e-3, Float::INFINITY).is_err());
    }

    #[test]
    fn energy_of_initial_state() {
        let params = CircuitParameters::new(900.0, 11e-6, 85e-3, 180e-6).unwrap();
        let energy = params.stored_energy(params.initial_state());
        assert!((energy - 0.5 * 180e-6 * 900.0 * 900.0).abs() < 1e-9);
    }
}
