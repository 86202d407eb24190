//! Layer 3: Algorithms
//!
//! Classifier fits (centroid separator, QDA), the fixed test objectives, and
//! the gradient descent / Newton optimizer.

/// Centroid-midpoint linear separator.
pub mod centroid;

/// Fixed test objectives.
pub mod objective;

/// Gradient descent and Newton trajectories.
pub mod optimizer;

/// Quadratic Discriminant Analysis.
pub mod qda;
