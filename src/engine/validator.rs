//! Input validation for kernel configuration.
//!
//! ## Purpose
//!
//! This module checks caller-supplied configuration: learning rates,
//! tolerances, step caps, scales, sample counts and covariance matrices.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Configuration only**: Per-frame numeric degeneracy is handled by
//!   fallbacks in the math layer, never here.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clamp or correct invalid values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::optimizer::LEARNING_RATE_RANGE;
use crate::math::quadratic::MAX_CONTOUR_SAMPLES;
use crate::primitives::errors::KernelError;
use crate::primitives::matrix::SymmetricMatrix2;
use crate::primitives::vector::Vector2;

/// Largest accepted step cap.
pub const MAX_STEP_CAP: usize = 10_000;

/// Validation utility for kernel configuration.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Scalars
    // ========================================================================

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), KernelError> {
        if !val.is_finite() {
            return Err(KernelError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate both coordinates of a vector for finiteness.
    pub fn validate_vector<T: Float>(v: Vector2<T>, name: &str) -> Result<(), KernelError> {
        if !v.is_finite() {
            return Err(KernelError::InvalidNumericValue(format!(
                "{}=({}, {})",
                name,
                v.x.to_f64().unwrap_or(f64::NAN),
                v.y.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Optimizer Parameters
    // ========================================================================

    /// Validate the gradient-descent step size against `LEARNING_RATE_RANGE`.
    pub fn validate_learning_rate<T: Float>(rate: T) -> Result<(), KernelError> {
        let (min, max) = LEARNING_RATE_RANGE;
        let got = rate.to_f64().unwrap_or(f64::NAN);
        if !(got >= min && got <= max) {
            return Err(KernelError::InvalidLearningRate { got, min, max });
        }
        Ok(())
    }

    /// Validate the convergence tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), KernelError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(KernelError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the step cap.
    pub fn validate_max_steps(steps: usize) -> Result<(), KernelError> {
        if steps == 0 || steps > MAX_STEP_CAP {
            return Err(KernelError::InvalidMaxSteps(steps));
        }
        Ok(())
    }

    // ========================================================================
    // Geometry Parameters
    // ========================================================================

    /// Validate a positive, finite scale (viewport scale, timestep).
    pub fn validate_scale<T: Float>(scale: T) -> Result<(), KernelError> {
        if !scale.is_finite() || scale <= T::zero() {
            return Err(KernelError::InvalidScale(
                scale.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a sample count for boundaries and contours.
    pub fn validate_sample_count(n: usize) -> Result<(), KernelError> {
        if n == 0 || n > MAX_CONTOUR_SAMPLES {
            return Err(KernelError::InvalidSampleCount(n));
        }
        Ok(())
    }

    /// Validate that a covariance is finite and positive definite.
    pub fn validate_covariance<T: Float>(cov: &SymmetricMatrix2<T>) -> Result<(), KernelError> {
        Self::validate_scalar(cov.a, "covariance.a")?;
        Self::validate_scalar(cov.b, "covariance.b")?;
        Self::validate_scalar(cov.d, "covariance.d")?;
        if !cov.is_positive_definite() {
            return Err(KernelError::NotPositiveDefinite {
                det: cov.determinant().to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Report a parameter that was set more than once.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), KernelError> {
        if let Some(parameter) = duplicate {
            return Err(KernelError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
