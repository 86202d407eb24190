//! Error types for kernel configuration.
//!
//! ## Purpose
//!
//! This module defines `KernelError`, returned only when a caller-supplied
//! configuration value is out of range. Numeric degeneracy (singular
//! matrices, zero-length vectors, empty classes) is never an error; those
//! paths return fallback values instead.
//!
//! ## Invariants
//!
//! * Every variant carries enough context to render a one-line message.
//! * The `Display` output is stable and covered by tests.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Error returned by builders and validators.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Learning rate outside the accepted interval.
    InvalidLearningRate {
        /// Offending value.
        got: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// Convergence tolerance is not positive and finite.
    InvalidTolerance(f64),

    /// Step cap is zero or above the supported maximum.
    InvalidMaxSteps(usize),

    /// Requested sample count is zero.
    InvalidSampleCount(usize),

    /// Viewport scale or scheduler timestep is not positive and finite.
    InvalidScale(f64),

    /// Covariance matrix is not positive definite.
    NotPositiveDefinite {
        /// Determinant of the rejected matrix.
        det: f64,
    },

    /// A NaN or infinite value was supplied.
    InvalidNumericValue(String),

    /// The same builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLearningRate { got, min, max } => {
                write!(f, "Invalid learning rate: {} (must be in [{}, {}])", got, min, max)
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {} (must be > 0 and finite)", tol)
            }
            Self::InvalidMaxSteps(steps) => {
                write!(f, "Invalid max steps: {} (must be in [1, 10000])", steps)
            }
            Self::InvalidSampleCount(n) => {
                write!(f, "Invalid sample count: {} (must be in [1, 100000])", n)
            }
            Self::InvalidScale(scale) => {
                write!(f, "Invalid scale: {} (must be > 0 and finite)", scale)
            }
            Self::NotPositiveDefinite { det } => {
                write!(f, "Covariance is not positive definite (det = {})", det)
            }
            Self::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            Self::DuplicateParameter { parameter } => {
                write!(f, "Parameter '{}' was set more than once", parameter)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KernelError {}
