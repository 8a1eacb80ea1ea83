//! Status codes for integrators

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Interrupted,
    NeedLargerNMax,
    StepSizeTooSmall,
    ProbablyStiff,
}

impl Status {
    pub fn is_success(self) -> bool {
        self == Status::Success
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Status::Success => "integration successful",
            Status::Interrupted => "interrupted by the output callback",
            Status::NeedLargerNMax => "maximum number of steps exceeded",
            Status::StepSizeTooSmall => "step size became too small",
            Status::ProbablyStiff => "problem is probably stiff",
        };
        f.write_str(msg)
    }
}
