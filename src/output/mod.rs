//! Reporting collaborators.
//!
//! The integrator never performs I/O. Finished trajectories are handed to a
//! [`TrajectorySink`]: the console summary or the PNG plot.

mod plot;
mod summary;

pub use plot::{PlotConfig, PlotSink};
pub use summary::{ConsoleReport, Summary};

use crate::{error::Error, trajectory::Trajectory};

/// Consumer of a finished trajectory.
pub trait TrajectorySink {
    fn consume(&mut self, trajectory: &Trajectory) -> Result<(), Error>;
}
