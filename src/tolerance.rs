//! Tolerance abstraction to allow scalar or vector tolerances

use std::ops::Index;

use crate::Float;

/// Tolerance enum to allow scalar or vector tolerances
/// using [`Into`] trait for easy conversion from `Float`, `[Float; N]`, or `Vec<Float>`
/// users do not need to know or worry this simply allows both
/// `Float` and `[Float; N]` to be passed in as arguments.
#[derive(Clone, Debug, PartialEq)]
pub enum Tolerance {
    Scalar(Float),
    Vector(Vec<Float>),
}

impl Tolerance {
    /// Checks that every entry is finite and strictly positive and, for the
    /// vector form, that there is one entry per state component.
    pub(crate) fn check(&self, name: &str, n: usize) -> Result<(), String> {
        let values: &[Float] = match self {
            Tolerance::Scalar(v) => std::slice::from_ref(v),
            Tolerance::Vector(vs) => {
                if vs.len() != n {
                    return Err(format!(
                        "{name} has {} entries but the state has {n}",
                        vs.len()
                    ));
                }
                vs
            }
        };
        match values.iter().find(|v| !(v.is_finite() && **v > 0.0)) {
            Some(v) => Err(format!("{name} must be finite and positive (got {v})")),
            None => Ok(()),
        }
    }
}

impl From<Float> for Tolerance {
    fn from(val: Float) -> Self {
        Tolerance::Scalar(val)
    }
}

impl From<&[Float]> for Tolerance {
    fn from(val: &[Float]) -> Self {
        Tolerance::Vector(val.to_vec())
    }
}

impl<const N: usize> From<[Float; N]> for Tolerance {
    fn from(val: [Float; N]) -> Self {
        Tolerance::Vector(val.to_vec())
    }
}

impl From<Vec<Float>> for Tolerance {
    fn from(val: Vec<Float>) -> Self {
        Tolerance::Vector(val)
    }
}

impl Index<usize> for Tolerance {
    type Output = Float;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            Tolerance::Scalar(v) => v,
            Tolerance::Vector(vs) => &vs[index],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_applies_to_every_component() {
        let tol = Tolerance::from(1e-6);
        assert_eq!(tol[0], 1e-6);
        assert_eq!(tol[7], 1e-6);
        assert!(tol.check("rtol", 3).is_ok());
    }

    #[test]
    fn vector_length_must_match_state() {
        let tol = Tolerance::from([1e-6, 1e-3]);
        assert_eq!(tol[1], 1e-3);
        assert!(tol.check("atol", 2).is_ok());
        assert!(tol.check("atol", 3).is_err());
    }

    #[test]
    fn rejects_non_positive_entries() {
        assert!(Tolerance::from(0.0).check("rtol", 1).is_err());
        assert!(Tolerance::from(vec![1e-6, -1.0]).check("atol", 2).is_err());
        assert!(Tolerance::from(Float::NAN).check("atol", 1).is_err());
    }
}
