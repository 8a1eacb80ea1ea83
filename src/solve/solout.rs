//! Default SolOut that implements t_eval sampling and endpoint recording.

use crate::{
    Float,
    interpolate::Interpolate,
    solout::{ControlFlag, SolOut},
};

/// Relative slack used when deciding whether a requested time lies inside
/// the step that was just accepted.
const SAMPLE_TOL: Float = 1e-12;

pub(crate) struct DefaultSolOut<'a> {
    t_eval: Option<&'a [Float]>,
    next_idx: usize,
    t: Vec<Float>,
    y: Vec<Vec<Float>>,
}

impl<'a> DefaultSolOut<'a> {
    pub(crate) fn new(t_eval: Option<&'a [Float]>) -> Self {
        let capacity = t_eval.map_or(0, <[Float]>::len);
        Self {
            t_eval,
            next_idx: 0,
            t: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn into_data(self) -> (Vec<Float>, Vec<Vec<Float>>) {
        (self.t, self.y)
    }

    fn push(&mut self, t: Float, y: Vec<Float>) {
        self.t.push(t);
        self.y.push(y);
    }
}

impl SolOut for DefaultSolOut<'_> {
    fn solout<I: Interpolate>(
        &mut self,
        xold: Float,
        x: Float,
        y: &[Float],
        interpolator: Option<&I>,
    ) -> ControlFlag {
        let Some(te) = self.t_eval else {
            self.push(x, y.to_vec());
            return ControlFlag::Continue;
        };

        let tol = SAMPLE_TOL * x.abs().max((x - xold).abs());
        match interpolator {
            // Initial call or no dense output: only points sitting on x
            None => {
                while self.next_idx < te.len() && (te[self.next_idx] - x).abs() <= tol {
                    self.push(te[self.next_idx], y.to_vec());
                    self.next_idx += 1;
                }
            }
            // Regular accepted step: every requested time in (xold, x]
            Some(interp) => {
                let direction = (x - xold).signum();
                while self.next_idx < te.len() && (te[self.next_idx] - x) * direction <= tol {
                    let mut yi = vec![0.0; y.len()];
                    interp.interpolate(te[self.next_idx], &mut yi);
                    self.push(te[self.next_idx], yi);
                    self.next_idx += 1;
                }
            }
        }

        ControlFlag::Continue
    }
}
