//! Labeled points and editable point sets.
//!
//! ## Purpose
//!
//! This module provides `LabeledPoint` and `PointSet`, the user-editable
//! training data behind the classifier fits. Points are created on click,
//! moved on drag and removed on request; every edit is followed by a full
//! refit in the caller.
//!
//! ## Design notes
//!
//! * **Clamping**: Positions are clamped into the set's bounds, never rejected.
//! * **Alternating labels**: `add` alternates `+1` / `-1` by set size.
//! * **Picking**: `pick` returns the nearest point within a radius.
//!
//! ## Invariants
//!
//! * When bounds are set, every stored position lies inside them.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::bounds::Bounds;
use crate::primitives::vector::Vector2;

/// Binary class label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Label {
    /// Class `+1`.
    Positive,

    /// Class `-1`.
    Negative,
}

impl Label {
    /// Numeric value, `+1` or `-1`.
    #[inline]
    pub fn sign<T: Float>(self) -> T {
        match self {
            Self::Positive => T::one(),
            Self::Negative => -T::one(),
        }
    }

    /// Label from the sign of a decision value; zero maps to `Positive`.
    #[inline]
    pub fn from_decision<T: Float>(value: T) -> Self {
        if value >= T::zero() {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// The other label.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

/// A point with a class label.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabeledPoint<T> {
    /// Location of the point.
    pub position: Vector2<T>,

    /// Class of the point.
    pub label: Label,
}

impl<T: Float> LabeledPoint<T> {
    /// Create a labeled point.
    #[inline]
    pub fn new(x: T, y: T, label: Label) -> Self {
        Self {
            position: Vector2::new(x, y),
            label,
        }
    }

    /// Shorthand for a `Positive` point.
    #[inline]
    pub fn positive(x: T, y: T) -> Self {
        Self::new(x, y, Label::Positive)
    }

    /// Shorthand for a `Negative` point.
    #[inline]
    pub fn negative(x: T, y: T) -> Self {
        Self::new(x, y, Label::Negative)
    }
}

/// Split points by label into `(positives, negatives)`.
pub fn partition<T: Float>(points: &[LabeledPoint<T>]) -> (Vec<Vector2<T>>, Vec<Vector2<T>>) {
    let mut pos = Vec::new();
    let mut neg = Vec::new();
    for p in points {
        match p.label {
            Label::Positive => pos.push(p.position),
            Label::Negative => neg.push(p.position),
        }
    }
    (pos, neg)
}

// ============================================================================
// Point Set
// ============================================================================

/// An editable collection of labeled points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSet<T> {
    points: Vec<LabeledPoint<T>>,
    bounds: Option<Bounds<T>>,
}

impl<T: Float> PointSet<T> {
    /// Create an empty, unbounded set.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            bounds: None,
        }
    }

    /// Create an empty set whose positions are clamped into `bounds`.
    pub fn with_bounds(bounds: Bounds<T>) -> Self {
        Self {
            points: Vec::new(),
            bounds: Some(bounds),
        }
    }

    /// Create a set from existing points, clamping them if bounded.
    pub fn from_points(points: Vec<LabeledPoint<T>>, bounds: Option<Bounds<T>>) -> Self {
        let mut set = Self { points, bounds };
        if let Some(b) = set.bounds {
            for p in set.points.iter_mut() {
                p.position = b.clamp(p.position);
            }
        }
        set
    }

    #[inline]
    fn constrain(&self, p: Vector2<T>) -> Vector2<T> {
        match self.bounds {
            Some(b) => b.clamp(p),
            None => p,
        }
    }

    /// Add a point whose label alternates with the set size: even sizes
    /// yield `Positive`, odd sizes `Negative`. Returns the new index.
    pub fn add(&mut self, position: Vector2<T>) -> usize {
        let label = if self.points.len() % 2 == 0 {
            Label::Positive
        } else {
            Label::Negative
        };
        self.push(LabeledPoint {
            position,
            label,
        })
    }

    /// Add a point with an explicit label. Returns the new index.
    pub fn push(&mut self, mut point: LabeledPoint<T>) -> usize {
        point.position = self.constrain(point.position);
        self.points.push(point);
        self.points.len() - 1
    }

    /// Move point `index` to `position` (clamped). Returns `false` if the
    /// index is out of range.
    pub fn drag(&mut self, index: usize, position: Vector2<T>) -> bool {
        let position = self.constrain(position);
        match self.points.get_mut(index) {
            Some(p) => {
                p.position = position;
                true
            }
            None => false,
        }
    }

    /// Flip the label of point `index`. Returns `false` if the index is out
    /// of range.
    pub fn toggle_label(&mut self, index: usize) -> bool {
        match self.points.get_mut(index) {
            Some(p) => {
                p.label = p.label.opposite();
                true
            }
            None => false,
        }
    }

    /// Remove and return point `index`.
    pub fn remove(&mut self, index: usize) -> Option<LabeledPoint<T>> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }

    /// Index of the nearest point within `radius` of `at`.
    pub fn pick(&self, at: Vector2<T>, radius: T) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.position.distance(at)))
            .filter(|&(_, d)| d < radius)
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(core::cmp::Ordering::Equal))
            .map(|(i, _)| i)
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points with `label`.
    pub fn count(&self, label: Label) -> usize {
        self.points.iter().filter(|p| p.label == label).count()
    }

    /// Borrow the points.
    #[inline]
    pub fn as_slice(&self) -> &[LabeledPoint<T>] {
        &self.points
    }

    /// Iterate over the points.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, LabeledPoint<T>> {
        self.points.iter()
    }

    /// The clamping bounds, if any.
    #[inline]
    pub fn bounds(&self) -> Option<Bounds<T>> {
        self.bounds
    }
}

impl<'a, T> IntoIterator for &'a PointSet<T> {
    type Item = &'a LabeledPoint<T>;
    type IntoIter = core::slice::Iter<'a, LabeledPoint<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
