//! Interop with the nalgebra backend.
//!
//! ## Purpose
//!
//! This module converts the kernel's closed-form 2D types to and from
//! nalgebra's statically sized `Vector2` / `Matrix2`, so callers that already
//! hold nalgebra values can use the kernel directly, and the closed-form
//! routines can be checked against nalgebra's general solvers.
//!
//! ## Design notes
//!
//! * Conversions are plain `From` impls over any `Float + Scalar` type.
//! * Symmetric conversion from a nalgebra matrix averages the off-diagonal
//!   entries.

// External dependencies
use nalgebra::Scalar;
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::{Matrix2, SymmetricMatrix2};
use crate::primitives::vector::Vector2;

impl<T: Float + Scalar> From<Vector2<T>> for nalgebra::Vector2<T> {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

impl<T: Float + Scalar> From<nalgebra::Vector2<T>> for Vector2<T> {
    #[inline]
    fn from(v: nalgebra::Vector2<T>) -> Self {
        Vector2::new(v[0], v[1])
    }
}

impl<T: Float + Scalar> From<Matrix2<T>> for nalgebra::Matrix2<T> {
    #[inline]
    fn from(m: Matrix2<T>) -> Self {
        nalgebra::Matrix2::new(m.a, m.b, m.c, m.d)
    }
}

impl<T: Float + Scalar> From<nalgebra::Matrix2<T>> for Matrix2<T> {
    #[inline]
    fn from(m: nalgebra::Matrix2<T>) -> Self {
        Matrix2::new(m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)])
    }
}

impl<T: Float + Scalar> From<SymmetricMatrix2<T>> for nalgebra::Matrix2<T> {
    #[inline]
    fn from(m: SymmetricMatrix2<T>) -> Self {
        nalgebra::Matrix2::new(m.a, m.b, m.b, m.d)
    }
}

impl<T: Float + Scalar> From<nalgebra::Matrix2<T>> for SymmetricMatrix2<T> {
    #[inline]
    fn from(m: nalgebra::Matrix2<T>) -> Self {
        let two = T::one() + T::one();
        SymmetricMatrix2::new(m[(0, 0)], (m[(0, 1)] + m[(1, 0)]) / two, m[(1, 1)])
    }
}
