//! Quintic polynomial splines.
//!
//! Each output coordinate is a degree-5 polynomial in `t`:
//!
//! ```text
//! x_i(t) = c_i0 + c_i1 t + c_i2 t² + c_i3 t³ + c_i4 t⁴ + c_i5 t⁵
//! ```
//!
//! Coefficients are stored as an N×6 matrix so that evaluation is a single
//! matrix-vector product with the monomial basis `[1, t, t², t³, t⁴, t⁵]`.
//!
//! ## Hermite construction
//!
//! Boundary data `b = [x0, v0, a0, x1, v1, a1]` relates to the coefficients
//! through [`BOUNDARY_OPERATOR`], which evaluates position, first and second
//! derivative at `t = 0` and `t = 1`:
//!
//! ```text
//! b = B · c        c = H · b        H = B⁻¹
//! ```
//!
//! [`HERMITE_BASIS`] is `H`, derived once by inverting `B`.

use nalgebra::{Matrix6, SMatrix, SVector, Vector6};

use super::CurveNd;
use crate::core::Translation2D;

/// Maps monomial coefficients to `[x0, v0, a0, x1, v1, a1]`.
pub const BOUNDARY_OPERATOR: [[f64; 6]; 6] = [
    [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 2.0, 0.0, 0.0, 0.0],
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    [0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
    [0.0, 0.0, 2.0, 6.0, 12.0, 20.0],
];

/// Maps `[x0, v0, a0, x1, v1, a1]` to monomial coefficients. Inverse of
/// [`BOUNDARY_OPERATOR`].
pub const HERMITE_BASIS: [[f64; 6]; 6] = [
    [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.5, 0.0, 0.0, 0.0],
    [-10.0, -6.0, -1.5, 10.0, -4.0, 0.5],
    [15.0, 8.0, 1.5, -15.0, 7.0, -1.0],
    [-6.0, -3.0, -0.5, 6.0, -3.0, 0.5],
];

fn hermite_matrix() -> Matrix6<f64> {
    Matrix6::from_fn(|r, c| HERMITE_BASIS[r][c])
}

/// Monomial basis `[1, t, t², t³, t⁴, t⁵]`.
#[inline]
pub fn monomial_basis(t: f64) -> Vector6<f64> {
    let t2 = t * t;
    let t3 = t2 * t;
    Vector6::new(1.0, t, t2, t3, t3 * t, t3 * t2)
}

#[inline]
fn velocity_basis(t: f64) -> Vector6<f64> {
    let t2 = t * t;
    Vector6::new(0.0, 1.0, 2.0 * t, 3.0 * t2, 4.0 * t2 * t, 5.0 * t2 * t2)
}

#[inline]
fn acceleration_basis(t: f64) -> Vector6<f64> {
    let t2 = t * t;
    Vector6::new(0.0, 0.0, 2.0, 6.0 * t, 12.0 * t2, 20.0 * t2 * t)
}

/// Quintic spline with `N` output coordinates.
///
/// Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct QuinticSpline<const N: usize> {
    coefficients: SMatrix<f64, N, 6>,
}

impl<const N: usize> QuinticSpline<N> {
    /// Create from an N×6 coefficient matrix (row i = coordinate i).
    pub fn from_coefficients(coefficients: SMatrix<f64, N, 6>) -> Self {
        Self { coefficients }
    }

    /// Create from coefficient rows, lowest order first.
    pub fn from_rows(rows: [[f64; 6]; N]) -> Self {
        Self::from_coefficients(SMatrix::from_fn(|r, c| rows[r][c]))
    }

    /// Create from Hermite boundary conditions.
    ///
    /// `x0[i]` and `x1[i]` hold `[position, velocity, acceleration]` of
    /// coordinate `i` at `t = 0` and `t = 1`.
    pub fn hermite(x0: [[f64; 3]; N], x1: [[f64; 3]; N]) -> Self {
        let boundary =
            SMatrix::<f64, N, 6>::from_fn(|r, c| if c < 3 { x0[r][c] } else { x1[r][c - 3] });
        // Row form of c_i = H · b_i.
        Self::from_coefficients(boundary * hermite_matrix().transpose())
    }

    /// Coefficient matrix.
    pub fn coefficients(&self) -> &SMatrix<f64, N, 6> {
        &self.coefficients
    }

    /// First derivative with respect to `t`.
    pub fn velocity(&self, t: f64) -> SVector<f64, N> {
        self.coefficients * velocity_basis(t)
    }

    /// Second derivative with respect to `t`.
    pub fn acceleration(&self, t: f64) -> SVector<f64, N> {
        self.coefficients * acceleration_basis(t)
    }
}

impl QuinticSpline<1> {
    /// Create a scalar spline from its six coefficients.
    pub fn from_1d_coefficients(coefficients: [f64; 6]) -> Self {
        Self::from_rows([coefficients])
    }

    /// Create a scalar spline from `[position, velocity, acceleration]` at
    /// both ends.
    pub fn hermite_1d(x0: [f64; 3], x1: [f64; 3]) -> Self {
        Self::hermite([x0], [x1])
    }
}

impl QuinticSpline<2> {
    /// Create a planar spline from x and y coefficient rows.
    pub fn from_2d_coefficients(x: [f64; 6], y: [f64; 6]) -> Self {
        Self::from_rows([x, y])
    }

    /// Point on the curve as a translation.
    pub fn translation(&self, t: f64) -> Translation2D {
        let p = self.point(t);
        Translation2D::new(p[0], p[1])
    }
}

impl<const N: usize> CurveNd<N> for QuinticSpline<N> {
    fn dim(&self) -> usize {
        self.coefficients.nrows()
    }

    fn point(&self, t: f64) -> SVector<f64, N> {
        self.coefficients * monomial_basis(t)
    }
}
