//! Sampled solution of the circuit over the output grid.

use crate::{Float, circuit::State, error::Error};

/// Index-aligned time, current and voltage series. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    times: Vec<Float>,
    current: Vec<Float>,
    voltage: Vec<Float>,
}

impl Trajectory {
    /// Assemble a trajectory; the three series must be non-empty and share
    /// one length.
    pub fn new(times: Vec<Float>, current: Vec<Float>, voltage: Vec<Float>) -> Result<Self, Error> {
        if times.is_empty() {
            return Err(Error::InvalidTrajectory("no samples".into()));
        }
        if current.len() != times.len() || voltage.len() != times.len() {
            return Err(Error::InvalidTrajectory(format!(
                "series lengths differ: {} times, {} currents, {} voltages",
                times.len(),
                current.len(),
                voltage.len()
            )));
        }
        Ok(Self {
            times,
            current,
            voltage,
        })
    }

    /// Sample times [s]
    pub fn times(&self) -> &[Float] {
        &self.times
    }

    /// Inductor current i(t) [A]
    pub fn current(&self) -> &[Float] {
        &self.current
    }

    /// Capacitor voltage v_c(t) [V]
    pub fn voltage(&self) -> &[Float] {
        &self.voltage
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// State at sample `index`.
    pub fn state(&self, index: usize) -> State {
        State::new(self.current[index], self.voltage[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Float, State)> + '_ {
        self.times
            .iter()
            .zip(self.current.iter().zip(&self.voltage))
            .map(|(&t, (&i, &v_c))| (t, State::new(i, v_c)))
    }

    /// Largest sampled inductor current.
    pub fn max_current(&self) -> Float {
        self.current.iter().copied().fold(Float::NEG_INFINITY, Float::max)
    }

    /// Smallest sampled capacitor voltage.
    pub fn min_voltage(&self) -> Float {
        self.voltage.iter().copied().fold(Float::INFINITY, Float::min)
    }

    /// Sample times rescaled to microseconds, for display.
    pub fn times_us(&self) -> Vec<Float> {
        self.times.iter().map(|t| t * 1e6).collect()
    }
}
