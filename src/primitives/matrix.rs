//! 2x2 matrix value types.
//!
//! ## Purpose
//!
//! This module provides the general `Matrix2` (used for Hessians and
//! inverses) and the symmetric `SymmetricMatrix2` (covariances and
//! quadratic forms).
//!
//! ## Design notes
//!
//! * **Closed form**: Determinant and inverse use the explicit 2x2 formulas.
//! * **Symmetry by construction**: `SymmetricMatrix2` stores a single
//!   off-diagonal entry, so `c == b` cannot be violated.
//! * **Fallbacks**: Inversion returns `None` below `SINGULAR_THRESHOLD`;
//!   callers choose the fallback (identity, regularized diagonal).
//!
//! ## Invariants
//!
//! * `inverse()` never returns non-finite entries for finite input.
//!
//! ## Non-goals
//!
//! * This module does not provide arbitrary-dimension matrices.

// External dependencies
use core::ops::Mul;
use num_traits::Float;

// Internal dependencies
use crate::primitives::vector::Vector2;

/// Absolute determinant below which a 2x2 matrix is treated as singular.
pub const SINGULAR_THRESHOLD: f64 = 1e-10;

#[inline]
fn singular_threshold<T: Float>() -> T {
    T::from(SINGULAR_THRESHOLD).unwrap_or_else(T::epsilon)
}

// ============================================================================
// General 2x2 Matrix
// ============================================================================

/// A general 2x2 matrix `[[a, b], [c, d]]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix2<T> {
    /// Row 0, column 0.
    pub a: T,
    /// Row 0, column 1.
    pub b: T,
    /// Row 1, column 0.
    pub c: T,
    /// Row 1, column 1.
    pub d: T,
}

impl<T: Float> Matrix2<T> {
    /// Create a matrix from its entries in row-major order.
    #[inline]
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Self { a, b, c, d }
    }

    /// The identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::diagonal(T::one(), T::one())
    }

    /// A diagonal matrix.
    #[inline]
    pub fn diagonal(d0: T, d1: T) -> Self {
        Self::new(d0, T::zero(), T::zero(), d1)
    }

    /// Determinant `a·d − b·c`.
    #[inline]
    pub fn determinant(&self) -> T {
        self.a * self.d - self.b * self.c
    }

    /// Trace `a + d`.
    #[inline]
    pub fn trace(&self) -> T {
        self.a + self.d
    }

    /// Transpose.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(self.a, self.c, self.b, self.d)
    }

    /// Whether `|det| < SINGULAR_THRESHOLD`.
    #[inline]
    pub fn is_singular(&self) -> bool {
        !(self.determinant().abs() >= singular_threshold())
    }

    /// Closed-form inverse, `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        if self.is_singular() {
            return None;
        }
        let det = self.determinant();
        Some(Self::new(
            self.d / det,
            -self.b / det,
            -self.c / det,
            self.a / det,
        ))
    }

    /// Inverse, or `fallback` when the matrix is singular.
    #[inline]
    pub fn inverse_or(&self, fallback: Self) -> Self {
        self.inverse().unwrap_or_else(|| {
            tracing::trace!("singular 2x2 matrix, using fallback inverse");
            fallback
        })
    }

    /// Inverse with a regularized fallback `diag(1/reg, 1/reg)` for
    /// singular matrices.
    #[inline]
    pub fn regularized_inverse(&self, reg: T) -> Self {
        let inv_reg = T::one() / reg;
        self.inverse_or(Self::diagonal(inv_reg, inv_reg))
    }

    /// Matrix-vector product.
    #[inline]
    pub fn mul_vec(&self, v: Vector2<T>) -> Vector2<T> {
        Vector2::new(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y)
    }

    /// Whether the matrix is symmetric within `tol`.
    #[inline]
    pub fn is_symmetric(&self, tol: T) -> bool {
        (self.b - self.c).abs() <= tol
    }

    /// Rows as nested arrays.
    #[inline]
    pub fn to_rows(&self) -> [[T; 2]; 2] {
        [[self.a, self.b], [self.c, self.d]]
    }
}

impl<T: Float> Default for Matrix2<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Float> From<[[T; 2]; 2]> for Matrix2<T> {
    #[inline]
    fn from([[a, b], [c, d]]: [[T; 2]; 2]) -> Self {
        Self::new(a, b, c, d)
    }
}

impl<T: Float> Mul for Matrix2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.a * rhs.a + self.b * rhs.c,
            self.a * rhs.b + self.b * rhs.d,
            self.c * rhs.a + self.d * rhs.c,
            self.c * rhs.b + self.d * rhs.d,
        )
    }
}

impl<T: Float> Mul<Vector2<T>> for Matrix2<T> {
    type Output = Vector2<T>;

    #[inline]
    fn mul(self, rhs: Vector2<T>) -> Vector2<T> {
        self.mul_vec(rhs)
    }
}

// ============================================================================
// Symmetric 2x2 Matrix
// ============================================================================

/// A symmetric 2x2 matrix `[[a, b], [b, d]]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymmetricMatrix2<T> {
    /// Upper-left entry (variance of x for a covariance).
    pub a: T,
    /// Off-diagonal entry, shared by both triangles.
    pub b: T,
    /// Lower-right entry (variance of y for a covariance).
    pub d: T,
}

impl<T: Float> SymmetricMatrix2<T> {
    /// Create a symmetric matrix from its three free entries.
    #[inline]
    pub fn new(a: T, b: T, d: T) -> Self {
        Self { a, b, d }
    }

    /// The identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::one())
    }

    /// Try to build from a general matrix, `None` if `|b − c| > tol`.
    pub fn from_matrix(m: Matrix2<T>, tol: T) -> Option<Self> {
        if m.is_symmetric(tol) {
            let two = T::one() + T::one();
            Some(Self::new(m.a, (m.b + m.c) / two, m.d))
        } else {
            None
        }
    }

    /// Determinant `a·d − b²`.
    #[inline]
    pub fn determinant(&self) -> T {
        self.a * self.d - self.b * self.b
    }

    /// Trace `a + d`.
    #[inline]
    pub fn trace(&self) -> T {
        self.a + self.d
    }

    /// Whether `|det| < SINGULAR_THRESHOLD`.
    #[inline]
    pub fn is_singular(&self) -> bool {
        !(self.determinant().abs() >= singular_threshold())
    }

    /// Positive definiteness via Sylvester's criterion.
    #[inline]
    pub fn is_positive_definite(&self) -> bool {
        self.a > T::zero() && self.determinant() > singular_threshold()
    }

    /// Closed-form inverse, `None` when singular.
    pub fn inverse(&self) -> Option<Self> {
        if self.is_singular() {
            return None;
        }
        let det = self.determinant();
        Some(Self::new(self.d / det, -self.b / det, self.a / det))
    }

    /// Quadratic form `vᵀ M v = a x² + 2 b x y + d y²`.
    #[inline]
    pub fn quadratic_form(&self, v: Vector2<T>) -> T {
        let two = T::one() + T::one();
        self.a * v.x * v.x + two * self.b * v.x * v.y + self.d * v.y * v.y
    }

    /// Matrix-vector product.
    #[inline]
    pub fn mul_vec(&self, v: Vector2<T>) -> Vector2<T> {
        Vector2::new(self.a * v.x + self.b * v.y, self.b * v.x + self.d * v.y)
    }

    /// Multiply every entry by `s`.
    #[inline]
    pub fn scale(&self, s: T) -> Self {
        Self::new(self.a * s, self.b * s, self.d * s)
    }

    /// Expand to a general matrix.
    #[inline]
    pub fn to_matrix(&self) -> Matrix2<T> {
        Matrix2::new(self.a, self.b, self.b, self.d)
    }

    /// Lower-triangular Cholesky factor `L` with `L Lᵀ = M`.
    ///
    /// Returns `(l11, l21, l22)`, or `None` if the matrix is not positive
    /// definite.
    pub fn cholesky(&self) -> Option<(T, T, T)> {
        if !self.is_positive_definite() {
            return None;
        }
        let l11 = self.a.sqrt();
        let l21 = self.b / l11;
        let rem = self.d - l21 * l21;
        if rem <= T::zero() {
            return None;
        }
        Some((l11, l21, rem.sqrt()))
    }
}

impl<T: Float> Default for SymmetricMatrix2<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Float> From<SymmetricMatrix2<T>> for Matrix2<T> {
    #[inline]
    fn from(m: SymmetricMatrix2<T>) -> Self {
        m.to_matrix()
    }
}
