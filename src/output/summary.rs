//! Peak values printed after a run.

use std::{fmt, io::Write};

use crate::{Float, error::Error, trajectory::Trajectory};

use super::TrajectorySink;

/// Peak inductor current and minimum capacitor voltage of a trajectory.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub max_current: Float,
    pub min_voltage: Float,
}

impl Summary {
    pub fn of(trajectory: &Trajectory) -> Self {
        Self {
            max_current: trajectory.max_current(),
            min_voltage: trajectory.min_voltage(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Resultados da Simulação =====")?;
        writeln!(f, "Corrente máxima no indutor: {:.2} A", self.max_current)?;
        writeln!(f, "Tensão mínima no capacitor: {:.2} V", self.min_voltage)?;
        write!(f, "===================================")
    }
}

/// Writes the [`Summary`] of each consumed trajectory to `W`.
pub struct ConsoleReport<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleReport<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TrajectorySink for ConsoleReport<W> {
    fn consume(&mut self, trajectory: &Trajectory) -> Result<(), Error> {
        writeln!(self.out, "{}", Summary::of(trajectory))?;
        self.out.flush()?;
        Ok(())
    }
}
