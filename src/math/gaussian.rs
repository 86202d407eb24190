//! Bivariate Gaussian density and confidence regions.
//!
//! ## Purpose
//!
//! This module evaluates the bivariate normal density, Mahalanobis
//! distances, confidence ellipses at fixed probability levels, and traces
//! density contours for drawing.
//!
//! ## Design notes
//!
//! * **Closed form**: Σ⁻¹ and |Σ| use the 2x2 formulas.
//! * **Degeneracy**: When `det(Σ) <= SINGULAR_THRESHOLD` (or Σ is otherwise
//!   not positive definite) the density is 0, Mahalanobis distances and
//!   ellipses are `None`. NaN never escapes.
//! * **Quantiles**: χ² quantiles for two degrees of freedom are fixed
//!   constants; only the three supported levels exist.
//! * **Sampling**: With the `rand` feature, samples are drawn as `μ + L z`
//!   with `L` the Cholesky factor of Σ and `z` standard normal.
//!
//! ## Key concepts
//!
//! * **Mahalanobis distance**: `(x − μ)ᵀ Σ⁻¹ (x − μ)`.
//! * **Confidence ellipse**: `{x : mahalanobis²(x) ≤ χ²_p}`, with semi-axes
//!   `√(χ²_p · λᵢ)` along the eigenvectors of Σ.
//!
//! ## Invariants
//!
//! * `pdf(x) >= 0` and finite for finite input.
//! * `pdf` attains its maximum at the mean.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::f64::consts::{PI, TAU};
use num_traits::Float;

// Internal dependencies
use crate::math::eigen::SymmetricEigen;
use crate::math::quadratic::{BisectionConfig, MAX_CONTOUR_SAMPLES, bisect_ray};
use crate::primitives::matrix::SymmetricMatrix2;
use crate::primitives::vector::Vector2;

// ============================================================================
// Confidence Levels
// ============================================================================

/// Probability mass enclosed by a confidence ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfidenceLevel {
    /// 68% (roughly one standard deviation).
    P68,

    /// 95%.
    #[default]
    P95,

    /// 99%.
    P99,
}

impl ConfidenceLevel {
    /// All levels, innermost first.
    pub const ALL: [ConfidenceLevel; 3] = [Self::P68, Self::P95, Self::P99];

    /// χ² quantile with two degrees of freedom.
    #[inline]
    pub fn chi_squared(self) -> f64 {
        match self {
            Self::P68 => 2.279,
            Self::P95 => 5.991,
            Self::P99 => 9.210,
        }
    }

    /// Nominal probability.
    #[inline]
    pub fn probability(self) -> f64 {
        match self {
            Self::P68 => 0.68,
            Self::P95 => 0.95,
            Self::P99 => 0.99,
        }
    }

    /// Map a probability to a supported level; unsupported values map to
    /// 95%.
    pub fn from_probability(p: f64) -> Self {
        const TOL: f64 = 1e-9;
        if (p - 0.68).abs() < TOL {
            Self::P68
        } else if (p - 0.99).abs() < TOL {
            Self::P99
        } else {
            Self::P95
        }
    }
}

// ============================================================================
// Confidence Ellipse
// ============================================================================

/// An ellipse centered at `center` with axes rotated by `angle`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfidenceEllipse<T> {
    /// Center of the ellipse (the Gaussian mean).
    pub center: Vector2<T>,

    /// Semi-axis along the dominant eigenvector.
    pub semi_major: T,

    /// Semi-axis along the minor eigenvector.
    pub semi_minor: T,

    /// Rotation of the major axis, radians counter-clockwise from +x.
    pub angle: T,
}

impl<T: Float> ConfidenceEllipse<T> {
    /// Enclosed area `π a b`.
    #[inline]
    pub fn area(&self) -> T {
        T::from(PI).unwrap_or_else(T::zero) * self.semi_major * self.semi_minor
    }

    /// Whether `p` lies inside or on the ellipse.
    pub fn contains(&self, p: Vector2<T>) -> bool {
        let (sin, cos) = self.angle.sin_cos();
        let d = p - self.center;
        // Rotate into the ellipse frame.
        let u = d.x * cos + d.y * sin;
        let v = -d.x * sin + d.y * cos;
        let (a, b) = (self.semi_major, self.semi_minor);
        if a <= T::zero() || b <= T::zero() {
            return false;
        }
        (u / a).powi(2) + (v / b).powi(2) <= T::one()
    }

    /// Sample `samples` points on the boundary, counter-clockwise.
    pub fn boundary(&self, samples: usize) -> Vec<Vector2<T>> {
        let Some(n) = T::from(samples) else {
            return Vec::new();
        };
        let tau = T::from(TAU).unwrap_or_else(T::zero);
        let (sin, cos) = self.angle.sin_cos();

        (0..samples)
            .filter_map(|i| T::from(i))
            .map(|i| {
                let (st, ct) = (tau * i / n).sin_cos();
                let u = self.semi_major * ct;
                let v = self.semi_minor * st;
                self.center + Vector2::new(u * cos - v * sin, u * sin + v * cos)
            })
            .collect()
    }
}

// ============================================================================
// Gaussian
// ============================================================================

/// A bivariate normal distribution `N(mean, covariance)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gaussian<T> {
    /// Mean vector μ.
    pub mean: Vector2<T>,

    /// Covariance matrix Σ.
    pub covariance: SymmetricMatrix2<T>,
}

impl<T: Float> Gaussian<T> {
    /// Create a Gaussian. Degenerate covariances are accepted; density
    /// queries then fall back to zero.
    #[inline]
    pub fn new(mean: Vector2<T>, covariance: SymmetricMatrix2<T>) -> Self {
        Self { mean, covariance }
    }

    /// Standard normal `N(0, I)`.
    #[inline]
    pub fn standard() -> Self {
        Self::new(Vector2::zero(), SymmetricMatrix2::identity())
    }

    /// Whether Σ fails to be positive definite, i.e. `det(Σ) <=
    /// SINGULAR_THRESHOLD` or a non-positive variance.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !self.covariance.is_positive_definite()
    }

    /// Σ⁻¹, `None` when degenerate.
    #[inline]
    pub fn precision(&self) -> Option<SymmetricMatrix2<T>> {
        if self.is_degenerate() {
            return None;
        }
        self.covariance.inverse()
    }

    /// Squared Mahalanobis distance from the mean.
    pub fn mahalanobis_squared(&self, x: Vector2<T>) -> Option<T> {
        self.precision().map(|inv| inv.quadratic_form(x - self.mean))
    }

    /// Mahalanobis distance from the mean.
    #[inline]
    pub fn mahalanobis(&self, x: Vector2<T>) -> Option<T> {
        self.mahalanobis_squared(x).map(Float::sqrt)
    }

    /// Normalization constant `1 / (2π √|Σ|)`, `None` when degenerate.
    #[inline]
    pub fn normalization(&self) -> Option<T> {
        if self.is_degenerate() {
            return None;
        }
        let tau = T::from(TAU).unwrap_or_else(T::one);
        Some(T::one() / (tau * self.covariance.determinant().sqrt()))
    }

    /// Probability density at `x`; zero for a degenerate covariance.
    pub fn pdf(&self, x: Vector2<T>) -> T {
        let (Some(norm), Some(m2)) = (self.normalization(), self.mahalanobis_squared(x)) else {
            return T::zero();
        };
        let half = T::from(0.5).unwrap_or_else(T::zero);
        norm * (-half * m2).exp()
    }

    /// Density at the mean, the maximum of `pdf`.
    #[inline]
    pub fn peak_density(&self) -> T {
        self.normalization().unwrap_or_else(T::zero)
    }

    /// Confidence ellipse at `level`, `None` when degenerate.
    pub fn confidence_ellipse(&self, level: ConfidenceLevel) -> Option<ConfidenceEllipse<T>> {
        if self.is_degenerate() {
            return None;
        }
        let chi2 = T::from(level.chi_squared())?;
        let eigen = SymmetricEigen::new(&self.covariance);
        if eigen.lambda2 < T::zero() {
            return None;
        }
        Some(ConfidenceEllipse {
            center: self.mean,
            semi_major: (chi2 * eigen.lambda1).sqrt(),
            semi_minor: (chi2 * eigen.lambda2).sqrt(),
            angle: eigen.dominant_angle(),
        })
    }

    /// Trace the density contour `pdf = level` with a fixed angular step.
    pub fn density_contour(&self, level: T, angular_step: T) -> Vec<Vector2<T>> {
        self.density_contour_with(level, angular_step, &BisectionConfig::density())
    }

    /// Trace a density contour with explicit bisection parameters.
    ///
    /// Angles run `i · angular_step` for every `i` that stays within 2π.
    /// Returns an empty contour for a degenerate covariance, a non-positive
    /// step, or a step so fine the contour would exceed
    /// `MAX_CONTOUR_SAMPLES` points.
    pub fn density_contour_with(
        &self,
        level: T,
        angular_step: T,
        config: &BisectionConfig<T>,
    ) -> Vec<Vector2<T>> {
        if self.is_degenerate() || !(angular_step > T::zero()) {
            return Vec::new();
        }
        let tau = T::from(TAU).unwrap_or_else(T::zero);
        let Some(last) = (tau / angular_step).floor().to_usize() else {
            return Vec::new();
        };
        if last >= MAX_CONTOUR_SAMPLES {
            return Vec::new();
        }

        (0..=last)
            .filter_map(|i| T::from(i))
            .map(|i| {
                let dir = Vector2::from_angle(angular_step * i);
                let r = bisect_ray(|r| self.pdf(self.mean + dir * r), level, false, config);
                self.mean + dir * r
            })
            .collect()
    }
}

#[cfg(feature = "rand")]
impl<T: Float> Gaussian<T>
where
    rand_distr::StandardNormal: rand_distr::Distribution<T>,
{
    /// Draw one sample.
    ///
    /// Uses the Cholesky factor of Σ; a positive semi-definite covariance
    /// without a Cholesky factor is sampled through its clamped
    /// eigendecomposition instead.
    pub fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Vector2<T> {
        use rand_distr::{Distribution, StandardNormal};

        let z1: T = StandardNormal.sample(rng);
        let z2: T = StandardNormal.sample(rng);

        match self.covariance.cholesky() {
            Some((l11, l21, l22)) => self.mean + Vector2::new(l11 * z1, l21 * z1 + l22 * z2),
            None => {
                let eigen = SymmetricEigen::new(&self.covariance);
                let s1 = eigen.lambda1.max(T::zero()).sqrt();
                let s2 = eigen.lambda2.max(T::zero()).sqrt();
                self.mean + eigen.v1 * (s1 * z1) + eigen.v2 * (s2 * z2)
            }
        }
    }

    /// Draw `n` samples.
    pub fn sample_n<R: rand::Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<Vector2<T>> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}
