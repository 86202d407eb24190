//! Fixed-timestep frame scheduling.
//!
//! ## Purpose
//!
//! This module drives animated state from a host frame callback. Each
//! registered state advances by whole timesteps as frame time accumulates;
//! cancelling a registration releases its state so nothing ticks after
//! teardown.
//!
//! ## Design notes
//!
//! * **Single-threaded**: All ticks run synchronously inside `frame`.
//! * **Catch-up cap**: At most `MAX_CATCH_UP` ticks run per registration per
//!   frame; any remaining backlog is dropped.
//! * **Auto-pause**: A state reporting `Finished` is paused.
//! * **Generation-tagged handles**: A cancelled slot is reused by the next
//!   registration under a new generation, so a stale handle can never
//!   address a later registration.
//!
//! ## Key concepts
//!
//! * **Tickable**: Anything with a one-update `tick`.
//! * **TrajectoryPair**: Gradient descent and Newton advanced side by side in
//!   the same tick, with no data shared between them.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::objective::Objective;
use crate::algorithms::optimizer::{Method, OptimizationState, Optimizer, OptimizerConfig, Status};
use crate::engine::validator::Validator;
use crate::math::norm::NormReport;
use crate::primitives::errors::KernelError;

/// Default timestep, one 60 Hz frame.
pub const DEFAULT_TIMESTEP: f64 = 1.0 / 60.0;

/// Maximum ticks per registration per frame.
pub const MAX_CATCH_UP: usize = 8;

// ============================================================================
// Tickable
// ============================================================================

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// More ticks may change the state.
    Continue,

    /// The state reached a terminal condition.
    Finished,
}

/// State that advances by discrete updates.
pub trait Tickable {
    /// Apply one update.
    fn tick(&mut self) -> TickOutcome;
}

impl<T: Float> Tickable for Optimizer<T> {
    fn tick(&mut self) -> TickOutcome {
        if Optimizer::tick(self).is_terminal() {
            TickOutcome::Finished
        } else {
            TickOutcome::Continue
        }
    }
}

// ============================================================================
// Animated States
// ============================================================================

/// Gradient descent and Newton on the same objective from the same start.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryPair<T> {
    /// First-order trajectory.
    pub gradient: Optimizer<T>,

    /// Second-order trajectory.
    pub newton: Optimizer<T>,
}

impl<T: Float> TrajectoryPair<T> {
    /// Build both trajectories from `config`, overriding its method.
    pub fn new(config: OptimizerConfig<T>) -> Self {
        Self {
            gradient: Optimizer::from_config(OptimizerConfig {
                method: Method::GradientDescent,
                ..config
            }),
            newton: Optimizer::from_config(OptimizerConfig {
                method: Method::Newton,
                ..config
            }),
        }
    }

    /// Both states, gradient descent first.
    pub fn states(&self) -> (&OptimizationState<T>, &OptimizationState<T>) {
        (self.gradient.state(), self.newton.state())
    }

    /// Whether either trajectory has stopped.
    #[inline]
    pub fn any_terminal(&self) -> bool {
        self.gradient.status().is_terminal() || self.newton.status().is_terminal()
    }

    /// Reset both trajectories.
    pub fn reset(&mut self) {
        self.gradient.reset();
        self.newton.reset();
    }

    /// Switch both trajectories to `objective` and reset.
    pub fn set_objective(&mut self, objective: Objective) {
        self.gradient.set_objective(objective);
        self.newton.set_objective(objective);
    }
}

impl<T: Float> Tickable for TrajectoryPair<T> {
    fn tick(&mut self) -> TickOutcome {
        // Independent updates; a terminal trajectory ignores further ticks.
        let a: Status = self.gradient.tick();
        let b: Status = self.newton.tick();
        if a.is_terminal() || b.is_terminal() {
            TickOutcome::Finished
        } else {
            TickOutcome::Continue
        }
    }
}

/// A vector of fixed length rotating at constant angular speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatingVector<T> {
    /// Current angle in radians.
    pub angle: T,

    /// Length of the vector.
    pub length: T,

    /// Angle increment per tick.
    pub speed: T,
}

impl<T: Float> RotatingVector<T> {
    /// Angle increment per tick used by the norm display.
    pub const DEFAULT_SPEED: f64 = 0.015;

    /// Start at angle zero.
    pub fn new(length: T) -> Self {
        Self {
            angle: T::zero(),
            length,
            speed: T::from(Self::DEFAULT_SPEED).unwrap_or_else(T::zero),
        }
    }

    /// All four norms of the current vector.
    #[inline]
    pub fn report(&self) -> NormReport<T> {
        NormReport::polar(self.length, self.angle)
    }

    /// Rewind to angle zero.
    #[inline]
    pub fn reset(&mut self) {
        self.angle = T::zero();
    }
}

impl<T: Float> Tickable for RotatingVector<T> {
    fn tick(&mut self) -> TickOutcome {
        self.angle = self.angle + self.speed;
        TickOutcome::Continue
    }
}

// ============================================================================
// Frame Scheduler
// ============================================================================

/// Handle to a registered state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle {
    index: usize,
    generation: u64,
}

#[derive(Debug)]
struct Registration<S> {
    state: S,
    playing: bool,
    accumulator: f64,
}

#[derive(Debug)]
struct Slot<S> {
    generation: u64,
    registration: Option<Registration<S>>,
}

/// Fixed-timestep driver for registered states.
#[derive(Debug)]
pub struct FrameScheduler<S> {
    timestep: f64,
    slots: Vec<Slot<S>>,
    free: Vec<usize>,
}

impl<S> Default for FrameScheduler<S> {
    /// A scheduler ticking at `DEFAULT_TIMESTEP`.
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            slots: Vec::new(),
            free: Vec::new(),
        }
    }
}

impl<S: Tickable> FrameScheduler<S> {
    /// Create a scheduler ticking every `timestep` seconds.
    pub fn new(timestep: f64) -> Result<Self, KernelError> {
        Validator::validate_scale(timestep)?;
        Ok(Self {
            timestep,
            ..Self::default()
        })
    }

    /// Seconds per tick.
    #[inline]
    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Register a paused state, reusing a cancelled slot when one is free.
    pub fn register(&mut self, state: S) -> FrameHandle {
        let registration = Some(Registration {
            state,
            playing: false,
            accumulator: 0.0,
        });
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index].registration = registration;
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    registration,
                });
                self.slots.len() - 1
            }
        };
        FrameHandle {
            index,
            generation: self.slots[index].generation,
        }
    }

    fn slot(&self, handle: FrameHandle) -> Option<&Registration<S>> {
        self.slots
            .get(handle.index)
            .filter(|s| s.generation == handle.generation)
            .and_then(|s| s.registration.as_ref())
    }

    fn slot_mut(&mut self, handle: FrameHandle) -> Option<&mut Registration<S>> {
        self.slots
            .get_mut(handle.index)
            .filter(|s| s.generation == handle.generation)
            .and_then(|s| s.registration.as_mut())
    }

    /// Resume ticking. Returns `false` for a cancelled handle.
    pub fn play(&mut self, handle: FrameHandle) -> bool {
        match self.slot_mut(handle) {
            Some(reg) => {
                if !reg.playing {
                    tracing::debug!(handle = handle.index, "animation playing");
                }
                reg.playing = true;
                true
            }
            None => false,
        }
    }

    /// Stop ticking and drop accumulated time. Returns `false` for a
    /// cancelled handle.
    pub fn pause(&mut self, handle: FrameHandle) -> bool {
        match self.slot_mut(handle) {
            Some(reg) => {
                if reg.playing {
                    tracing::debug!(handle = handle.index, "animation paused");
                }
                reg.playing = false;
                reg.accumulator = 0.0;
                true
            }
            None => false,
        }
    }

    /// Whether the registration is live and playing.
    #[inline]
    pub fn is_playing(&self, handle: FrameHandle) -> bool {
        self.slot(handle).is_some_and(|r| r.playing)
    }

    /// Tick once regardless of play state.
    pub fn step(&mut self, handle: FrameHandle) -> Option<TickOutcome> {
        self.slot_mut(handle).map(|reg| reg.state.tick())
    }

    /// Release the registration and return its state. The handle is dead
    /// afterwards.
    pub fn cancel(&mut self, handle: FrameHandle) -> Option<S> {
        let slot = self
            .slots
            .get_mut(handle.index)
            .filter(|s| s.generation == handle.generation)?;
        let reg = slot.registration.take()?;
        slot.generation += 1;
        self.free.push(handle.index);
        tracing::debug!(handle = handle.index, "animation cancelled");
        Some(reg.state)
    }

    /// Borrow a registered state.
    #[inline]
    pub fn get(&self, handle: FrameHandle) -> Option<&S> {
        self.slot(handle).map(|r| &r.state)
    }

    /// Mutably borrow a registered state.
    #[inline]
    pub fn get_mut(&mut self, handle: FrameHandle) -> Option<&mut S> {
        self.slot_mut(handle).map(|r| &mut r.state)
    }

    /// Number of live registrations.
    pub fn active(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Number of allocated slots, live or awaiting reuse.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Advance all playing states by `elapsed` seconds. Returns the total
    /// number of ticks run.
    pub fn frame(&mut self, elapsed: f64) -> usize {
        let elapsed = if elapsed.is_finite() && elapsed > 0.0 {
            elapsed
        } else {
            0.0
        };
        let timestep = self.timestep;
        let mut total = 0;

        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Some(reg) = slot.registration.as_mut() else { continue };
            if !reg.playing {
                continue;
            }

            reg.accumulator += elapsed;
            let mut ticks = 0;
            while reg.accumulator >= timestep && ticks < MAX_CATCH_UP {
                reg.accumulator -= timestep;
                ticks += 1;
                if reg.state.tick() == TickOutcome::Finished {
                    reg.playing = false;
                    reg.accumulator = 0.0;
                    tracing::debug!(handle = index, "animation finished");
                    break;
                }
            }
            if ticks == MAX_CATCH_UP {
                reg.accumulator = 0.0;
            }
            total += ticks;
        }
        total
    }
}
