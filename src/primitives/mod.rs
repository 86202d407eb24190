//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the value types shared by every other layer:
//! - 2D vectors and 2x2 matrices
//! - Labeled points and editable point sets
//! - Axis-aligned bounds
//! - Configuration errors
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Axis-aligned rectangles.
pub mod bounds;

/// Configuration error type.
pub mod errors;

/// 2x2 general and symmetric matrices.
pub mod matrix;

/// Labeled points and point sets.
pub mod point;

/// 2D vectors.
pub mod vector;
