use ndarray::{NdFloat, ScalarOperand};

use num_traits::{FromPrimitive, NumCast, Signed};

use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

mod common;

pub use common::DataPoint;

/// Scalar type used for feature weights and log-probabilities.
pub trait Float:
    NdFloat
    + FromPrimitive
    + Default
    + Signed
    + Sum
    + for<'a> AddAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> DivAssign<&'a Self>
    + num_traits::MulAdd<Output = Self>
    + ScalarOperand
    + std::marker::Unpin
{
    fn cast<T: NumCast>(x: T) -> Option<Self> {
        NumCast::from(x)
    }

    /// Converts a count (documents, rows, term occurrences) into the float type.
    fn from_count(n: usize) -> Self;
}

impl Float for f32 {
    fn from_count(n: usize) -> Self {
        n as f32
    }
}

impl Float for f64 {
    fn from_count(n: usize) -> Self {
        n as f64
    }
}

/// Numerically stable `ln(sum(exp(x)))`.
///
/// Returns negative infinity for an empty slice.
pub fn log_sum_exp<F: Float>(values: &[F]) -> F {
    let max = values
        .iter()
        .copied()
        .fold(F::neg_infinity(), |acc, v| if v > acc { v } else { acc });
    if !max.is_finite() {
        return max;
    }
    let sum: F = values.iter().map(|&v| (v - max).exp()).sum();
    max + sum.ln()
}
