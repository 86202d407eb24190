//! Quadratic Discriminant Analysis for two labeled classes.
//!
//! ## Purpose
//!
//! This module estimates per-class Gaussian parameters (mean, covariance,
//! prior) from labeled 2D points and evaluates the resulting Bayes decision
//! function.
//!
//! ## Design notes
//!
//! * **Estimators**: Arithmetic mean and the unbiased (n − 1) covariance.
//!   A class with a single point uses the identity covariance.
//! * **Decision**: `pdf₊(x)·π₊ − pdf₋(x)·π₋`. The sign picks the class and
//!   the magnitude drives background shading.
//! * **Full refit**: No incremental updates; every edit refits.
//!
//! ## Invariants
//!
//! * Priors lie in `[0, 1]` and sum to one.
//! * Covariances are symmetric by construction.
//!
//! ## Non-goals
//!
//! * No covariance shrinkage or regularization beyond the identity fallback.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::gaussian::{ConfidenceEllipse, ConfidenceLevel, Gaussian};
use crate::primitives::matrix::SymmetricMatrix2;
use crate::primitives::point::{Label, LabeledPoint, partition};
use crate::primitives::vector::Vector2;

/// Decision magnitude below which a point is drawn as boundary.
pub const BOUNDARY_BAND: f64 = 0.01;

/// Unbiased sample covariance around `mean`; identity for fewer than two
/// points.
pub fn sample_covariance<T: Float>(points: &[Vector2<T>], mean: Vector2<T>) -> SymmetricMatrix2<T> {
    if points.len() <= 1 {
        return SymmetricMatrix2::identity();
    }
    let (mut sxx, mut sxy, mut syy) = (T::zero(), T::zero(), T::zero());
    for p in points {
        let d = *p - mean;
        sxx = sxx + d.x * d.x;
        sxy = sxy + d.x * d.y;
        syy = syy + d.y * d.y;
    }
    let dof = T::from(points.len() - 1).unwrap_or_else(T::one);
    SymmetricMatrix2::new(sxx / dof, sxy / dof, syy / dof)
}

/// Gaussian parameters of one class.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaussianParams<T> {
    /// Class mean.
    pub mean: Vector2<T>,

    /// Class covariance.
    pub covariance: SymmetricMatrix2<T>,

    /// Fraction of all points in this class.
    pub prior: T,
}

impl<T: Float> GaussianParams<T> {
    /// Estimate parameters from the points of one class out of `total`.
    /// `None` when the class is empty.
    pub fn estimate(points: &[Vector2<T>], total: usize) -> Option<Self> {
        let mean = Vector2::mean(points.iter().copied())?;
        let covariance = sample_covariance(points, mean);
        let prior = T::from(points.len())? / T::from(total.max(1))?;
        Some(Self {
            mean,
            covariance,
            prior,
        })
    }

    /// The class likelihood.
    #[inline]
    pub fn gaussian(&self) -> Gaussian<T> {
        Gaussian::new(self.mean, self.covariance)
    }

    /// Unnormalized posterior `pdf(x)·prior`.
    #[inline]
    pub fn score(&self, x: Vector2<T>) -> T {
        self.gaussian().pdf(x) * self.prior
    }
}

/// A fitted two-class QDA model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Qda<T> {
    /// Parameters of the `Positive` class.
    pub positive: GaussianParams<T>,

    /// Parameters of the `Negative` class.
    pub negative: GaussianParams<T>,
}

impl<T: Float> Qda<T> {
    /// Fit both classes, `None` if either is empty.
    pub fn fit(points: &[LabeledPoint<T>]) -> Option<Self> {
        let (pos, neg) = partition(points);
        let total = points.len();
        Some(Self {
            positive: GaussianParams::estimate(&pos, total)?,
            negative: GaussianParams::estimate(&neg, total)?,
        })
    }

    /// Refit in place. Keeps the current parameters and returns `false`
    /// when a class is empty.
    pub fn refit(&mut self, points: &[LabeledPoint<T>]) -> bool {
        match Self::fit(points) {
            Some(fitted) => {
                *self = fitted;
                true
            }
            None => false,
        }
    }

    /// Parameters of the class `label`.
    #[inline]
    pub fn params(&self, label: Label) -> &GaussianParams<T> {
        match label {
            Label::Positive => &self.positive,
            Label::Negative => &self.negative,
        }
    }

    /// Posterior score difference `pdf₊·π₊ − pdf₋·π₋`.
    #[inline]
    pub fn decision(&self, x: Vector2<T>) -> T {
        self.positive.score(x) - self.negative.score(x)
    }

    /// Predicted label for `x`.
    #[inline]
    pub fn classify(&self, x: Vector2<T>) -> Label {
        Label::from_decision(self.decision(x))
    }

    /// Whether `|decision(x)| < tol`.
    #[inline]
    pub fn on_boundary(&self, x: Vector2<T>, tol: T) -> bool {
        self.decision(x).abs() < tol
    }

    /// `on_boundary` with the `BOUNDARY_BAND` used when shading a QDA map.
    #[inline]
    pub fn on_boundary_band(&self, x: Vector2<T>) -> bool {
        T::from(BOUNDARY_BAND).is_some_and(|band| self.on_boundary(x, band))
    }

    /// Confidence ellipse of class `label`.
    #[inline]
    pub fn confidence_ellipse(&self, label: Label, level: ConfidenceLevel) -> Option<ConfidenceEllipse<T>> {
        self.params(label).gaussian().confidence_ellipse(level)
    }
}
