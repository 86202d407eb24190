//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer connects the kernel to a host:
//! - Configuration validation
//! - The graph-to-screen viewport transform
//! - Fixed-timestep frame scheduling of animated state
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fixed-timestep frame scheduler.
pub mod scheduler;

/// Configuration validation.
pub mod validator;

/// Graph-to-screen transform.
pub mod viewport;
