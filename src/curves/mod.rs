//! Parametric curves in N dimensions.
//!
//! A curve maps a scalar parameter `t ∈ [0, 1]` to an N-vector. The output
//! dimension is a const generic, so a planar curve is `CurveNd<2>` and the
//! compiler rejects mixing dimensions.

mod quintic;

pub use quintic::{BOUNDARY_OPERATOR, HERMITE_BASIS, QuinticSpline, monomial_basis};

use nalgebra::SVector;

/// A parametric curve with `N` output coordinates.
///
/// Evaluation is only meaningful for `t ∈ [0, 1]`. Implementations do not
/// clamp; values outside the range extrapolate.
pub trait CurveNd<const N: usize> {
    /// Number of output coordinates.
    fn dim(&self) -> usize {
        N
    }

    /// Point on the curve at parameter `t`.
    fn point(&self, t: f64) -> SVector<f64, N>;
}
