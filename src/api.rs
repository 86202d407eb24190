//! High-level API for the planar kernel.
//!
//! ## Purpose
//!
//! This module provides the validated entry points: fluent builders for
//! optimizer trajectories and Gaussian densities, plus re-exports of the
//! value types callers work with.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with defaults for every parameter.
//! * **Validated**: Parameters are checked when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: Create a builder via `Descent::new()`, chain
//!   setters, then finish with `.build()` (one trajectory) or
//!   `.build_pair()` (gradient descent and Newton side by side).
//! * **Duplicates**: Setting a parameter twice is reported as
//!   `KernelError::DuplicateParameter` on build.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::centroid::CentroidSeparator;
pub use crate::algorithms::objective::Objective;
pub use crate::algorithms::optimizer::{
    Method, OptimizationState, Optimizer, OptimizerConfig, Status,
};
pub use crate::algorithms::qda::{GaussianParams, Qda};
pub use crate::engine::scheduler::{
    FrameHandle, FrameScheduler, RotatingVector, TickOutcome, Tickable, TrajectoryPair,
};
pub use crate::engine::viewport::Viewport;
pub use crate::math::convexity::{CurveKind, Curvature, Line, Secant};
pub use crate::math::eigen::SymmetricEigen;
pub use crate::math::gaussian::{ConfidenceEllipse, ConfidenceLevel, Gaussian};
pub use crate::math::norm::{NormKind, NormReport, UnitBall};
pub use crate::math::quadratic::{BisectionConfig, ConicKind, QuadraticForm};
pub use crate::primitives::bounds::Bounds;
pub use crate::primitives::errors::KernelError;
pub use crate::primitives::matrix::{Matrix2, SymmetricMatrix2};
pub use crate::primitives::point::{Label, LabeledPoint, PointSet};
pub use crate::primitives::vector::Vector2;

// ============================================================================
// Descent Builder
// ============================================================================

/// Fluent builder for optimization trajectories.
#[derive(Debug, Clone)]
pub struct DescentBuilder<T> {
    /// Function being minimized.
    pub objective: Option<Objective>,

    /// Update rule.
    pub method: Option<Method>,

    /// Gradient descent step size.
    pub learning_rate: Option<T>,

    /// Gradient-norm convergence threshold.
    pub tolerance: Option<T>,

    /// Cap on the number of updates.
    pub max_steps: Option<usize>,

    /// Start position.
    pub start: Option<Vector2<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for DescentBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> DescentBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            objective: None,
            method: None,
            learning_rate: None,
            tolerance: None,
            max_steps: None,
            start: None,
            duplicate_param: None,
        }
    }

    /// Set the objective function.
    pub fn objective(mut self, objective: Objective) -> Self {
        if self.objective.is_some() {
            self.duplicate_param = Some("objective");
        }
        self.objective = Some(objective);
        self
    }

    /// Set the update rule.
    pub fn method(mut self, method: Method) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set the gradient descent step size, in `[0.01, 0.5]`.
    pub fn learning_rate(mut self, rate: T) -> Self {
        if self.learning_rate.is_some() {
            self.duplicate_param = Some("learning_rate");
        }
        self.learning_rate = Some(rate);
        self
    }

    /// Set the convergence threshold on the gradient norm.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the step cap.
    pub fn max_steps(mut self, steps: usize) -> Self {
        if self.max_steps.is_some() {
            self.duplicate_param = Some("max_steps");
        }
        self.max_steps = Some(steps);
        self
    }

    /// Set the start position.
    pub fn start(mut self, x: T, y: T) -> Self {
        if self.start.is_some() {
            self.duplicate_param = Some("start");
        }
        self.start = Some(Vector2::new(x, y));
        self
    }

    /// Resolve and validate the configuration.
    pub fn config(&self) -> Result<OptimizerConfig<T>, KernelError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = OptimizerConfig::<T>::default();
        let config = OptimizerConfig {
            objective: self.objective.unwrap_or(defaults.objective),
            method: self.method.unwrap_or(defaults.method),
            learning_rate: self.learning_rate.unwrap_or(defaults.learning_rate),
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
            max_steps: self.max_steps.unwrap_or(defaults.max_steps),
            start: self.start.unwrap_or(defaults.start),
        };

        Validator::validate_learning_rate(config.learning_rate)?;
        Validator::validate_tolerance(config.tolerance)?;
        Validator::validate_max_steps(config.max_steps)?;
        Validator::validate_vector(config.start, "start")?;
        Ok(config)
    }

    /// Build a single trajectory.
    pub fn build(self) -> Result<Optimizer<T>, KernelError> {
        Ok(Optimizer::from_config(self.config()?))
    }

    /// Build gradient descent and Newton trajectories sharing every setting
    /// except the method.
    pub fn build_pair(self) -> Result<TrajectoryPair<T>, KernelError> {
        Ok(TrajectoryPair::new(self.config()?))
    }
}

// ============================================================================
// Gaussian Builder
// ============================================================================

/// Fluent builder for validated bivariate Gaussians.
#[derive(Debug, Clone)]
pub struct GaussianBuilder<T> {
    /// Mean vector.
    pub mean: Option<Vector2<T>>,

    /// Covariance matrix.
    pub covariance: Option<SymmetricMatrix2<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for GaussianBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> GaussianBuilder<T> {
    /// Create a builder for the standard normal.
    pub fn new() -> Self {
        Self {
            mean: None,
            covariance: None,
            duplicate_param: None,
        }
    }

    /// Set the mean.
    pub fn mean(mut self, x: T, y: T) -> Self {
        if self.mean.is_some() {
            self.duplicate_param = Some("mean");
        }
        self.mean = Some(Vector2::new(x, y));
        self
    }

    /// Set the covariance from its three distinct entries.
    pub fn covariance(mut self, var_x: T, cov_xy: T, var_y: T) -> Self {
        if self.covariance.is_some() {
            self.duplicate_param = Some("covariance");
        }
        self.covariance = Some(SymmetricMatrix2::new(var_x, cov_xy, var_y));
        self
    }

    /// Validate and build. The covariance must be positive definite.
    pub fn build(self) -> Result<Gaussian<T>, KernelError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let mean = self.mean.unwrap_or_else(Vector2::zero);
        let covariance = self.covariance.unwrap_or_else(SymmetricMatrix2::identity);

        Validator::validate_vector(mean, "mean")?;
        Validator::validate_covariance(&covariance)?;
        Ok(Gaussian::new(mean, covariance))
    }
}

// ============================================================================
// Checked Sampling
// ============================================================================

/// Boundary points of the unit ball of `kind`, rejecting a zero sample
/// count.
pub fn unit_ball<T: Float>(kind: NormKind, samples: usize) -> Result<UnitBall<T>, KernelError> {
    Validator::validate_sample_count(samples)?;
    Ok(kind.unit_ball(samples))
}

/// Boundary points of a confidence ellipse, rejecting a zero sample count.
pub fn ellipse_boundary<T: Float>(
    ellipse: &ConfidenceEllipse<T>,
    samples: usize,
) -> Result<Vec<Vector2<T>>, KernelError> {
    Validator::validate_sample_count(samples)?;
    Ok(ellipse.boundary(samples))
}
