//! Quadratic-form level sets.
//!
//! ## Purpose
//!
//! This module evaluates `q(p) = pᵀ M p` for a symmetric matrix `M`,
//! classifies the shape of its level sets from the eigenvalue signs, and
//! traces a level set by radial bisection.
//!
//! ## Key concepts
//!
//! * **Conic classification**: both eigenvalues positive gives ellipses,
//!   both negative gives ellipses of `−q`, mixed signs give hyperbolas.
//! * **Radial bisection**: along each ray from the origin, the radius where
//!   `q` crosses the target level is bracketed in `[0, max_radius]`.
//!
//! ## Non-goals
//!
//! * Rays that never reach the level inside the bracket are not detected;
//!   the returned radius then sits at the bracket edge.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::f64::consts::TAU;
use num_traits::Float;

// Internal dependencies
use crate::math::eigen::SymmetricEigen;
use crate::primitives::matrix::SymmetricMatrix2;
use crate::primitives::vector::Vector2;

/// Shape of the level sets of a quadratic form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConicKind {
    /// Both eigenvalues positive.
    Ellipse,

    /// Both eigenvalues negative.
    InvertedEllipse,

    /// Eigenvalues of opposite sign.
    Hyperbola,

    /// At least one eigenvalue is (near) zero.
    Degenerate,
}

/// Largest number of points a traced contour may hold.
pub const MAX_CONTOUR_SAMPLES: usize = 100_000;

/// Radial bisection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionConfig<T> {
    /// Upper end of the search bracket.
    pub max_radius: T,

    /// Initial guess for the radius.
    pub initial_radius: T,

    /// Maximum number of halvings per ray.
    pub iterations: usize,

    /// Stop early once `|value − level|` drops below this.
    pub tolerance: T,
}

impl<T: Float> BisectionConfig<T> {
    /// Bracket used for quadratic-form contours: radius in `[0, 5]`,
    /// 20 iterations.
    pub fn quadratic() -> Self {
        Self {
            max_radius: T::from(5.0).unwrap_or_else(T::one),
            initial_radius: T::from(0.1).unwrap_or_else(T::one),
            iterations: 20,
            tolerance: T::from(1e-3).unwrap_or_else(T::epsilon),
        }
    }

    /// Bracket used for Gaussian density contours: radius in `[0, 4]`,
    /// 15 iterations.
    pub fn density() -> Self {
        Self {
            max_radius: T::from(4.0).unwrap_or_else(T::one),
            iterations: 15,
            ..Self::quadratic()
        }
    }
}

/// Bisect along `direction` for the radius where `f` crosses `level`.
///
/// `f` must be increasing in the radius for `increasing == true` (quadratic
/// forms) and decreasing otherwise (densities around their mode).
pub fn bisect_ray<T, F>(f: F, level: T, increasing: bool, config: &BisectionConfig<T>) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let two = T::one() + T::one();
    let mut lo = T::zero();
    let mut hi = config.max_radius;
    let mut r = config.initial_radius;

    for _ in 0..config.iterations {
        let value = f(r);
        if (value - level).abs() < config.tolerance {
            break;
        }
        let inside = if increasing {
            value < level
        } else {
            value > level
        };
        if inside {
            lo = r;
            r = (r + hi) / two;
        } else {
            hi = r;
            r = (lo + r) / two;
        }
    }
    r
}

/// A quadratic form `pᵀ M p` over a symmetric matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticForm<T> {
    matrix: SymmetricMatrix2<T>,
    eigen: SymmetricEigen<T>,
}

impl<T: Float> QuadraticForm<T> {
    /// Wrap `matrix` and precompute its eigendecomposition.
    pub fn new(matrix: SymmetricMatrix2<T>) -> Self {
        Self {
            matrix,
            eigen: SymmetricEigen::new(&matrix),
        }
    }

    /// The underlying matrix.
    #[inline]
    pub fn matrix(&self) -> &SymmetricMatrix2<T> {
        &self.matrix
    }

    /// The eigendecomposition.
    #[inline]
    pub fn eigen(&self) -> &SymmetricEigen<T> {
        &self.eigen
    }

    /// `a x² + 2 b x y + d y²`.
    #[inline]
    pub fn evaluate(&self, p: Vector2<T>) -> T {
        self.matrix.quadratic_form(p)
    }

    /// Shape of the level sets.
    pub fn kind(&self) -> ConicKind {
        let eps = T::from(1e-10).unwrap_or_else(T::epsilon);
        let (l1, l2) = (self.eigen.lambda1, self.eigen.lambda2);
        if l1.abs() < eps || l2.abs() < eps {
            ConicKind::Degenerate
        } else if l1 > T::zero() && l2 > T::zero() {
            ConicKind::Ellipse
        } else if l1 < T::zero() && l2 < T::zero() {
            ConicKind::InvertedEllipse
        } else {
            ConicKind::Hyperbola
        }
    }

    /// Semi-axis lengths of the level set `q = level` for an elliptic form,
    /// `√(level / λᵢ)` along each eigenvector.
    pub fn semi_axes(&self, level: T) -> Option<(T, T)> {
        if self.kind() != ConicKind::Ellipse || level <= T::zero() {
            return None;
        }
        Some((
            (level / self.eigen.lambda1).sqrt(),
            (level / self.eigen.lambda2).sqrt(),
        ))
    }

    /// Trace the level set `q = level` at `samples` evenly spaced angles.
    pub fn level_set(&self, level: T, samples: usize) -> Vec<Vector2<T>> {
        self.level_set_with(level, samples, &BisectionConfig::quadratic())
    }

    /// Trace the level set with explicit bisection parameters.
    pub fn level_set_with(
        &self,
        level: T,
        samples: usize,
        config: &BisectionConfig<T>,
    ) -> Vec<Vector2<T>> {
        let Some(n) = T::from(samples) else {
            return Vec::new();
        };
        let tau = T::from(TAU).unwrap_or_else(T::zero);

        (0..samples)
            .filter_map(|i| T::from(i))
            .map(|i| {
                let dir = Vector2::from_angle(tau * i / n);
                let r = bisect_ray(|r| self.evaluate(dir * r), level, true, config);
                dir * r
            })
            .collect()
    }
}
