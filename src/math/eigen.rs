//! Closed-form eigendecomposition of symmetric 2x2 matrices.
//!
//! ## Purpose
//!
//! This module computes eigenvalues and unit eigenvectors of a symmetric 2x2
//! matrix. The result orients confidence ellipses and classifies
//! quadratic-form level sets.
//!
//! ## Design notes
//!
//! * **Characteristic polynomial**: λ = tr/2 ± √(((a − d)/2)² + b²). This is
//!   the same root as (tr ± √(tr² − 4·det)) / 2 but stays accurate when
//!   `a ≈ d` and `b` is small.
//! * **Eigenvectors**: `v1` is `((a − d)/2 + r, b)` or `(b, r − (a − d)/2)`,
//!   whichever avoids cancellation, and `v2` is its perpendicular. A diagonal
//!   matrix (`|b| < ε`) uses the standard basis directly.
//! * **Fallbacks**: A zero-length eigenvector candidate falls back to a
//!   standard basis vector.
//!
//! ## Invariants
//!
//! * `lambda1 >= lambda2`.
//! * `lambda1 + lambda2 == trace` and `lambda1 * lambda2 == det` up to
//!   round-off.
//! * Both eigenvectors have unit length and are mutually orthogonal.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::{Matrix2, SymmetricMatrix2};
use crate::primitives::vector::Vector2;

/// Off-diagonal magnitude below which a matrix is treated as diagonal.
pub const DIAGONAL_EPSILON: f64 = 1e-10;

/// Eigenvalues and eigenvectors of a symmetric 2x2 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymmetricEigen<T> {
    /// Larger eigenvalue.
    pub lambda1: T,

    /// Smaller eigenvalue.
    pub lambda2: T,

    /// Unit eigenvector for `lambda1`.
    pub v1: Vector2<T>,

    /// Unit eigenvector for `lambda2`.
    pub v2: Vector2<T>,
}

impl<T: Float> SymmetricEigen<T> {
    /// Decompose `m`.
    pub fn new(m: &SymmetricMatrix2<T>) -> Self {
        let two = T::one() + T::one();

        let mid = m.trace() / two;
        let half_diff = (m.a - m.d) / two;
        let root = half_diff.hypot(m.b);

        let lambda1 = mid + root;
        let lambda2 = mid - root;

        let eps = T::from(DIAGONAL_EPSILON).unwrap_or_else(T::epsilon);
        if m.b.abs() < eps {
            // Diagonal: eigenvalues are a and d; keep the ordering.
            let (v1, v2) = if m.a >= m.d {
                (Vector2::unit_x(), Vector2::unit_y())
            } else {
                (Vector2::unit_y(), Vector2::unit_x())
            };
            return Self {
                lambda1,
                lambda2,
                v1,
                v2,
            };
        }

        let candidate = if half_diff >= T::zero() {
            Vector2::new(half_diff + root, m.b)
        } else {
            Vector2::new(m.b, root - half_diff)
        };
        let v1 = candidate.normalize_or(Vector2::unit_x());
        let v2 = Vector2::new(-v1.y, v1.x);

        Self {
            lambda1,
            lambda2,
            v1,
            v2,
        }
    }

    /// Sum of eigenvalues.
    #[inline]
    pub fn trace(&self) -> T {
        self.lambda1 + self.lambda2
    }

    /// Product of eigenvalues.
    #[inline]
    pub fn determinant(&self) -> T {
        self.lambda1 * self.lambda2
    }

    /// Rotation angle of the dominant eigenvector, in radians.
    #[inline]
    pub fn dominant_angle(&self) -> T {
        self.v1.angle()
    }

    /// Whether the two eigenvalues coincide within `tol`.
    #[inline]
    pub fn is_isotropic(&self, tol: T) -> bool {
        (self.lambda1 - self.lambda2).abs() <= tol
    }

    /// Rebuild `V Λ Vᵀ`.
    pub fn reconstruct(&self) -> Matrix2<T> {
        let (l1, l2) = (self.lambda1, self.lambda2);
        let (p, q) = (self.v1, self.v2);
        Matrix2::new(
            l1 * p.x * p.x + l2 * q.x * q.x,
            l1 * p.x * p.y + l2 * q.x * q.y,
            l1 * p.y * p.x + l2 * q.y * q.x,
            l1 * p.y * p.y + l2 * q.y * q.y,
        )
    }
}

impl<T: Float> SymmetricMatrix2<T> {
    /// Eigendecomposition of this matrix.
    #[inline]
    pub fn eigen(&self) -> SymmetricEigen<T> {
        SymmetricEigen::new(self)
    }
}
