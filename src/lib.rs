//! # planar-rs: closed-form 2D geometry for interactive visualizations
//!
//! A small numerical kernel behind a family of canvas demos: vector norms and
//! their unit balls, symmetric 2x2 eigendecomposition, bivariate Gaussian
//! densities with confidence ellipses, two toy classifiers, and gradient
//! descent / Newton trajectories on fixed test surfaces.
//!
//! Everything is closed form and generic over [`num_traits::Float`]. The
//! crate draws nothing; callers turn the returned points, contours and
//! trajectories into pixels through [`Viewport`](prelude::Viewport).
//!
//! ## Quick Start
//!
//! ### Norms and unit balls
//!
//! ```rust
//! use planar_rs::prelude::*;
//!
//! let v = Vector2::new(3.0_f64, -4.0);
//! assert_eq!(NormKind::L1.evaluate(v), 7.0);
//! assert!((NormKind::L2.evaluate(v) - 5.0).abs() < 1e-12);
//! assert_eq!(NormKind::LInf.evaluate(v), 4.0);
//!
//! // 64 boundary points of the L1 diamond.
//! let diamond: Vec<Vector2<f64>> = NormKind::L1.unit_ball(64).collect();
//! assert!(diamond.iter().all(|p| (NormKind::l1(*p) - 1.0).abs() < 1e-9));
//! ```
//!
//! ### Eigendecomposition
//!
//! ```rust
//! use planar_rs::prelude::*;
//!
//! let eig = SymmetricMatrix2::new(2.0_f64, 1.0, 2.0).eigen();
//! assert!((eig.lambda1 - 3.0).abs() < 1e-12);
//! assert!((eig.lambda2 - 1.0).abs() < 1e-12);
//! assert!(eig.v1.dot(eig.v2).abs() < 1e-12);
//! ```
//!
//! ### Gaussian density
//!
//! ```rust
//! use planar_rs::prelude::*;
//!
//! let g = GaussianBuilder::new()
//!     .mean(1.0_f64, -1.0)
//!     .covariance(2.0, 0.5, 1.0)
//!     .build()?;
//!
//! assert!(g.pdf(Vector2::new(1.0, -1.0)) > g.pdf(Vector2::new(2.0, 0.0)));
//!
//! let ellipse = g.confidence_ellipse(ConfidenceLevel::P95).unwrap();
//! assert!(ellipse.semi_major >= ellipse.semi_minor);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ### Optimizer trajectories
//!
//! ```rust
//! use planar_rs::prelude::*;
//!
//! let mut newton = Descent::new()
//!     .objective(Objective::Quadratic)
//!     .method(Newton)
//!     .start(-2.0_f64, 1.5)
//!     .build()?;
//!
//! let state = newton.run_to_end();
//! assert_eq!(state.status, Status::Converged);
//! assert_eq!(state.step, 1);
//! assert_eq!(state.path.len(), 2);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ### Classifiers
//!
//! ```rust
//! use planar_rs::prelude::*;
//!
//! let points = vec![
//!     LabeledPoint::positive(2.0_f64, 2.0),
//!     LabeledPoint::positive(3.0, 1.5),
//!     LabeledPoint::positive(2.5, 3.0),
//!     LabeledPoint::negative(-2.0, -1.0),
//!     LabeledPoint::negative(-1.5, -2.5),
//!     LabeledPoint::negative(-3.0, -2.0),
//! ];
//!
//! let svm = CentroidSeparator::fit(&points).unwrap();
//! assert_eq!(svm.classify(Vector2::new(4.0, 4.0)), Label::Positive);
//!
//! let qda = Qda::fit(&points).unwrap();
//! assert_eq!(qda.classify(Vector2::new(-2.0, -2.0)), Label::Negative);
//! ```
//!
//! ### Animation
//!
//! ```rust
//! use planar_rs::prelude::*;
//!
//! let mut scheduler = FrameScheduler::new(0.25)?;
//! let handle = scheduler.register(Descent::<f64>::new().build_pair()?);
//! scheduler.play(handle);
//!
//! // Newton converges on the second tick, which pauses the pair.
//! assert_eq!(scheduler.frame(1.0), 2);
//! assert!(!scheduler.is_playing(handle));
//!
//! let pair = scheduler.cancel(handle).unwrap();
//! assert_eq!(pair.newton.state().step, 1);
//! assert_eq!(pair.gradient.state().step, 2);
//! assert_eq!(scheduler.frame(1.0), 0);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Numeric degeneracy is never an error: singular matrices fall back to
//! regularized inverses, zero-length directions fall back to basis vectors
//! and degenerate fits return `None`. [`KernelError`](prelude::KernelError)
//! is reserved for configuration that fails validation when a builder's
//! `build()` is called.
//!
//! ```rust
//! use planar_rs::prelude::*;
//!
//! let err = Descent::<f64>::new().learning_rate(2.0).build().unwrap_err();
//! assert!(matches!(err, KernelError::InvalidLearningRate { .. }));
//!
//! let err = GaussianBuilder::new().covariance(1.0_f64, 2.0, 1.0).build().unwrap_err();
//! assert!(matches!(err, KernelError::NotPositiveDefinite { .. }));
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support. Without it the crate is
//!   `no_std` + `alloc`.
//! - `serde`: `Serialize`/`Deserialize` on value types.
//! - `rand`: Gaussian sampling through `rand` and `rand_distr`.
//! - `dev`: exposes the [`internals`] module for tests and benchmarks.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (optimizer terminal transitions,
//! animation state changes and singular-matrix fallbacks) and installs no
//! subscriber.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - value types.
//
// Contains `Vector2`, `Matrix2`, `SymmetricMatrix2`, labeled points,
// bounds and the configuration error type.
mod primitives;

// Layer 2: Math - closed-form routines.
//
// Contains norms and unit balls, eigendecomposition, quadratic forms,
// Gaussian densities and convexity analysis.
mod math;

// Layer 3: Algorithms - classifiers and optimizers.
//
// Contains the centroid separator, QDA, the test objectives and the
// gradient descent / Newton optimizer.
mod algorithms;

// Layer 4: Engine - host integration.
//
// Contains validation, the viewport transform and the frame scheduler.
mod engine;

// High-level fluent API.
//
// Provides the `Descent` and `GaussianBuilder` builders.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard planar prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use planar_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        BisectionConfig, Bounds, CentroidSeparator, ConfidenceEllipse, ConfidenceLevel,
        ConicKind, Curvature, CurveKind, DescentBuilder as Descent, FrameHandle, FrameScheduler,
        Gaussian, GaussianBuilder, GaussianParams, KernelError, Label, LabeledPoint, Line, Matrix2,
        Method,
        Method::{GradientDescent, Newton},
        NormKind, NormReport, Objective, OptimizationState, Optimizer, OptimizerConfig,
        PointSet, Qda, QuadraticForm, RotatingVector, Secant, Status, SymmetricEigen,
        SymmetricMatrix2, TickOutcome, Tickable, TrajectoryPair, UnitBall, Vector2, Viewport,
        ellipse_boundary, unit_ball,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math routines.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal classifiers and optimizers.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
