//! Gradient descent and Newton iterations on the test objectives.
//!
//! ## Purpose
//!
//! This module advances an optimization trajectory one update per tick and
//! records the visited path.
//!
//! ## Design notes
//!
//! * **Gradient descent**: `x ← x − α ∇f(x)` with a fixed step size.
//! * **Newton**: `x ← x − H⁻¹ ∇f(x)`; when `|det H| < 1e-10` the inverse is
//!   replaced by `diag(1/ρ, 1/ρ)` with `ρ = NEWTON_REGULARIZATION`.
//! * **No error path**: divergence just produces large coordinates; the
//!   step cap ends the run.
//!
//! ## Key concepts
//!
//! * **Status machine**: `Running → Converged` when `‖∇f‖ < tolerance`
//!   (checked before stepping), or `Running → StoppedAtCap` once `max_steps`
//!   updates have been applied. Both terminal states are absorbing.
//!
//! ## Invariants
//!
//! * `path[0]` is the start position and `path.len() == step + 1`.
//! * `step <= max_steps`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::objective::Objective;
use crate::primitives::vector::Vector2;

/// Default step size for gradient descent.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Accepted learning-rate interval, inclusive.
pub const LEARNING_RATE_RANGE: (f64, f64) = (0.01, 0.5);

/// Default gradient-norm convergence threshold.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default cap on the number of updates.
pub const DEFAULT_MAX_STEPS: usize = 100;

/// Default start position.
pub const DEFAULT_START: (f64, f64) = (-2.0, 1.5);

/// Diagonal used in place of a singular Hessian.
pub const NEWTON_REGULARIZATION: f64 = 0.01;

/// Update rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// First-order fixed-step descent.
    #[default]
    GradientDescent,

    /// Second-order Newton step with regularized inverse.
    Newton,
}

/// Trajectory status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Still iterating.
    #[default]
    Running,

    /// Gradient norm fell below the tolerance.
    Converged,

    /// The step cap was reached first.
    StoppedAtCap,
}

impl Status {
    /// Whether no further updates will be applied.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Compute one update from `position`.
///
/// Returns the gradient at `position` and the next position.
pub fn propose<T: Float>(
    objective: Objective,
    method: Method,
    learning_rate: T,
    position: Vector2<T>,
) -> (Vector2<T>, Vector2<T>) {
    let grad = objective.gradient(position);
    let next = match method {
        Method::GradientDescent => position - grad * learning_rate,
        Method::Newton => {
            let reg = T::from(NEWTON_REGULARIZATION).unwrap_or_else(T::one);
            let inv = objective.hessian(position).regularized_inverse(reg);
            position - inv.mul_vec(grad)
        }
    };
    (grad, next)
}

/// Resolved optimizer configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizerConfig<T> {
    /// Function being minimized.
    pub objective: Objective,

    /// Update rule.
    pub method: Method,

    /// Step size α (gradient descent only).
    pub learning_rate: T,

    /// Convergence threshold on ‖∇f‖.
    pub tolerance: T,

    /// Maximum number of updates.
    pub max_steps: usize,

    /// Start position.
    pub start: Vector2<T>,
}

impl<T: Float> Default for OptimizerConfig<T> {
    fn default() -> Self {
        Self {
            objective: Objective::default(),
            method: Method::default(),
            learning_rate: T::from(DEFAULT_LEARNING_RATE).unwrap_or_else(T::one),
            tolerance: T::from(DEFAULT_TOLERANCE).unwrap_or_else(T::epsilon),
            max_steps: DEFAULT_MAX_STEPS,
            start: Vector2::new(
                T::from(DEFAULT_START.0).unwrap_or_else(T::zero),
                T::from(DEFAULT_START.1).unwrap_or_else(T::zero),
            ),
        }
    }
}

/// Snapshot of a trajectory.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationState<T> {
    /// Current position.
    pub position: Vector2<T>,

    /// Gradient evaluated at the last visited position.
    pub gradient: Vector2<T>,

    /// Number of updates applied.
    pub step: usize,

    /// Current status.
    pub status: Status,

    /// Every visited position, starting with the start position.
    pub path: Vec<Vector2<T>>,
}

impl<T: Float> OptimizationState<T> {
    /// Fresh state at `start`.
    pub fn at(start: Vector2<T>) -> Self {
        let mut path = Vec::with_capacity(DEFAULT_MAX_STEPS + 1);
        path.push(start);
        Self {
            position: start,
            gradient: Vector2::zero(),
            step: 0,
            status: Status::Running,
            path,
        }
    }

    /// Whether the trajectory converged.
    #[inline]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}

/// One optimization trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimizer<T> {
    config: OptimizerConfig<T>,
    state: OptimizationState<T>,
}

impl<T: Float> Optimizer<T> {
    /// Create an optimizer from a resolved configuration.
    ///
    /// Use the `Descent` builder for validated construction.
    pub fn from_config(config: OptimizerConfig<T>) -> Self {
        Self {
            state: OptimizationState::at(config.start),
            config,
        }
    }

    /// The configuration.
    #[inline]
    pub fn config(&self) -> &OptimizerConfig<T> {
        &self.config
    }

    /// The current state.
    #[inline]
    pub fn state(&self) -> &OptimizationState<T> {
        &self.state
    }

    /// The current status.
    #[inline]
    pub fn status(&self) -> Status {
        self.state.status
    }

    /// Objective value at the current position.
    #[inline]
    pub fn value(&self) -> T {
        self.config.objective.value(self.state.position)
    }

    /// Apply at most one update and return the resulting status.
    pub fn tick(&mut self) -> Status {
        if self.state.status.is_terminal() {
            return self.state.status;
        }

        let cfg = &self.config;
        let (grad, next) = propose(cfg.objective, cfg.method, cfg.learning_rate, self.state.position);
        self.state.gradient = grad;

        if grad.length() < cfg.tolerance {
            self.state.status = Status::Converged;
            tracing::debug!(
                method = ?cfg.method,
                objective = ?cfg.objective,
                steps = self.state.step,
                "optimizer converged"
            );
            return self.state.status;
        }

        self.state.position = next;
        self.state.step += 1;
        self.state.path.push(next);

        if self.state.step >= cfg.max_steps {
            self.state.status = Status::StoppedAtCap;
            tracing::debug!(
                method = ?cfg.method,
                objective = ?cfg.objective,
                steps = self.state.step,
                "optimizer stopped at step cap"
            );
        }
        self.state.status
    }

    /// Tick until a terminal status is reached.
    pub fn run_to_end(&mut self) -> &OptimizationState<T> {
        // Each tick either steps or terminates, so this ends within
        // max_steps + 1 iterations.
        while !self.tick().is_terminal() {}
        &self.state
    }

    /// Return to the start position.
    pub fn reset(&mut self) {
        self.state = OptimizationState::at(self.config.start);
    }

    /// Switch objective and restart.
    pub fn set_objective(&mut self, objective: Objective) {
        self.config.objective = objective;
        self.reset();
    }
}
