//! Vector norms and unit-ball boundaries in the plane.
//!
//! ## Purpose
//!
//! This module evaluates the L0, L1, L2 and L∞ norms of a 2D vector and
//! produces sampled boundaries of the corresponding unit balls.
//!
//! ## Design notes
//!
//! * **Lazy boundaries**: `UnitBall` is a finite iterator over `n` angles;
//!   cloning it or calling `restart` replays the same boundary.
//! * **L0 approximation**: The L0 "unit ball" is a discrete set. For drawing
//!   it is approximated by scaling each direction with `1 / max(|dx|, |dy|)`,
//!   which traces the L∞ square.
//!
//! ## Invariants
//!
//! * Every norm is non-negative and zero only at the origin.
//! * For every `v`: `L∞(v) ≤ L2(v) ≤ L1(v) ≤ L0(v)·max(|x|, |y|)`.
//!
//! ## Non-goals
//!
//! * This module does not provide general Lp norms.

// External dependencies
use core::f64::consts::TAU;
use num_traits::Float;

// Internal dependencies
use crate::primitives::vector::Vector2;

/// Which norm to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NormKind {
    /// Count of non-zero coordinates.
    L0,

    /// Manhattan norm: |x| + |y|.
    L1,

    /// Euclidean norm: √(x² + y²).
    #[default]
    L2,

    /// Chebyshev norm: max(|x|, |y|).
    LInf,
}

impl NormKind {
    /// All norms in legend order.
    pub const ALL: [NormKind; 4] = [Self::L0, Self::L1, Self::L2, Self::LInf];

    /// All norms in legend order.
    #[inline]
    pub fn all() -> [NormKind; 4] {
        Self::ALL
    }

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::L0 => "L0",
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::LInf => "L∞",
        }
    }

    /// Evaluate the norm of `v`.
    #[inline]
    pub fn evaluate<T: Float>(self, v: Vector2<T>) -> T {
        match self {
            Self::L0 => Self::l0(v),
            Self::L1 => Self::l1(v),
            Self::L2 => Self::l2(v),
            Self::LInf => Self::linf(v),
        }
    }

    /// Count of non-zero coordinates (0, 1 or 2).
    #[inline]
    pub fn l0<T: Float>(v: Vector2<T>) -> T {
        let count = |c: T| if c != T::zero() { T::one() } else { T::zero() };
        count(v.x) + count(v.y)
    }

    /// Manhattan norm.
    #[inline]
    pub fn l1<T: Float>(v: Vector2<T>) -> T {
        v.x.abs() + v.y.abs()
    }

    /// Euclidean norm.
    #[inline]
    pub fn l2<T: Float>(v: Vector2<T>) -> T {
        (v.x * v.x + v.y * v.y).sqrt()
    }

    /// Chebyshev norm.
    #[inline]
    pub fn linf<T: Float>(v: Vector2<T>) -> T {
        v.x.abs().max(v.y.abs())
    }

    /// Radial scale that maps the unit direction `d` onto this norm's unit
    /// ball boundary, or `None` when the norm of `d` is zero.
    #[inline]
    pub fn boundary_scale<T: Float>(self, d: Vector2<T>) -> Option<T> {
        let n = match self {
            Self::L0 => Self::linf(d),
            other => other.evaluate(d),
        };
        if n > T::zero() {
            Some(T::one() / n)
        } else {
            None
        }
    }

    /// Lazily sample `samples` points on the unit-ball boundary.
    pub fn unit_ball<T: Float>(self, samples: usize) -> UnitBall<T> {
        UnitBall {
            kind: self,
            index: 0,
            samples,
            _marker: core::marker::PhantomData,
        }
    }
}

// ============================================================================
// Unit Ball Iterator
// ============================================================================

/// Finite, restartable iterator over unit-ball boundary points.
///
/// Angles are `2πi / samples` for `i` in `0..samples`, i.e. over `[0, 2π)`.
#[derive(Debug, Clone)]
pub struct UnitBall<T> {
    kind: NormKind,
    index: usize,
    samples: usize,
    _marker: core::marker::PhantomData<T>,
}

impl<T: Float> UnitBall<T> {
    /// Norm being traced.
    #[inline]
    pub fn kind(&self) -> NormKind {
        self.kind
    }

    /// Rewind to the first sample.
    #[inline]
    pub fn restart(&mut self) {
        self.index = 0;
    }
}

impl<T: Float> Iterator for UnitBall<T> {
    type Item = Vector2<T>;

    fn next(&mut self) -> Option<Vector2<T>> {
        let n = T::from(self.samples)?;
        let tau = T::from(TAU)?;
        while self.index < self.samples {
            let i = T::from(self.index)?;
            self.index += 1;
            let d = Vector2::from_angle(tau * i / n);
            if let Some(s) = self.kind.boundary_scale(d) {
                return Some(d * s);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.samples - self.index))
    }
}

impl<T: Float> core::iter::FusedIterator for UnitBall<T> {}

// ============================================================================
// Norm Report
// ============================================================================

/// All four norms of one vector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormReport<T> {
    /// The evaluated vector.
    pub vector: Vector2<T>,
    /// L0 norm.
    pub l0: T,
    /// L1 norm.
    pub l1: T,
    /// L2 norm.
    pub l2: T,
    /// L∞ norm.
    pub linf: T,
}

impl<T: Float> NormReport<T> {
    /// Evaluate all norms of `v`.
    pub fn new(v: Vector2<T>) -> Self {
        Self {
            vector: v,
            l0: NormKind::l0(v),
            l1: NormKind::l1(v),
            l2: NormKind::l2(v),
            linf: NormKind::linf(v),
        }
    }

    /// Report for a vector of `length` at `angle` radians, as the rotating
    /// vector display shows it.
    pub fn polar(length: T, angle: T) -> Self {
        Self::new(Vector2::from_angle(angle) * length)
    }

    /// Value of the norm `kind`.
    pub fn get(&self, kind: NormKind) -> T {
        match kind {
            NormKind::L0 => self.l0,
            NormKind::L1 => self.l1,
            NormKind::L2 => self.l2,
            NormKind::LInf => self.linf,
        }
    }
}
