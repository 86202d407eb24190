//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the closed-form mathematical routines:
//! - Vector norms and unit balls
//! - Symmetric 2x2 eigendecomposition and quadratic forms
//! - Bivariate Gaussian density and confidence ellipses
//! - Convexity analysis of scalar test curves
//!
//! These are reusable building blocks with no classifier- or
//! optimizer-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Convexity analysis of 1D test curves.
pub mod convexity;

/// Symmetric 2x2 eigendecomposition.
pub mod eigen;

/// Bivariate Gaussian density and confidence ellipses.
pub mod gaussian;

/// nalgebra conversions.
pub mod linalg;

/// Vector norms and unit balls.
pub mod norm;

/// Quadratic forms and level sets.
pub mod quadratic;
