//! Diode conduction modes and their closed-form derivatives.

use std::fmt;

use crate::Float;

use super::params::{CircuitParameters, State};

/// Operating mode of the ideal diode.
///
/// The mode is a pure function of the capacitor voltage at the instant of
/// evaluation. No mode is stored between evaluations and there is no
/// hysteresis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// `v_c > 0`: the diode blocks and L, C form a lossless series loop.
    Blocking,
    /// `v_c <= 0`: the diode conducts and R enters the current path.
    Conducting,
}

impl Mode {
    /// Selects the mode from the capacitor voltage.
    ///
    /// `v_c == 0` is routed to [`Mode::Conducting`]. The tie-break is sharp;
    /// moving it shifts results near the switching instant.
    pub fn select(v_c: Float) -> Self {
        if v_c > 0.0 {
            Mode::Blocking
        } else {
            Mode::Conducting
        }
    }

    /// `(di/dt, dv_c/dt)` for this mode.
    pub fn derivative(self, state: State, params: &CircuitParameters) -> State {
        let State { i, v_c } = state;
        let CircuitParameters { l, r, c, .. } = *params;
        match self {
            Mode::Blocking => State {
                i: v_c / l,
                v_c: -i / c,
            },
            Mode::Conducting => State {
                i: (v_c - r * i) / l,
                v_c: -(i + v_c / r) / c,
            },
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Blocking => f.write_str("blocking"),
            Mode::Conducting => f.write_str("conducting"),
        }
    }
}
