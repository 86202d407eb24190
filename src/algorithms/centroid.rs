//! Centroid-midpoint linear separator.
//!
//! ## Purpose
//!
//! This module fits a linear decision boundary between two labeled point
//! classes by joining their centroids: the weight vector points from the
//! negative centroid to the positive one and the boundary passes through
//! their midpoint.
//!
//! ## Design notes
//!
//! * **Heuristic**: This is not a max-margin solver. No optimization is
//!   performed; the fit is closed form.
//! * **Full refit**: Every edit to the point set triggers a complete refit.
//! * **Degeneracy**: An empty class or coincident centroids yield `None`;
//!   `refit` keeps the previous parameters in that case.
//!
//! ## Invariants
//!
//! * `‖w‖ = 1` for every fitted separator.
//! * The midpoint of the centroids satisfies `w·x + b = 0`.
//! * `decision(x) > 0` on the positive centroid.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::bounds::Bounds;
use crate::primitives::point::{Label, LabeledPoint, partition};
use crate::primitives::vector::Vector2;

/// Coefficients below this magnitude are treated as zero when clipping.
const CLIP_EPSILON: f64 = 1e-10;

/// A linear separator `w·x + b = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CentroidSeparator<T> {
    /// Unit normal of the boundary, pointing toward the positive class.
    pub w: Vector2<T>,

    /// Bias term.
    pub b: T,

    /// Centroid of the positive class.
    pub positive_centroid: Vector2<T>,

    /// Centroid of the negative class.
    pub negative_centroid: Vector2<T>,
}

impl<T: Float> CentroidSeparator<T> {
    /// Fit a separator, `None` if a class is empty or the centroids coincide.
    pub fn fit(points: &[LabeledPoint<T>]) -> Option<Self> {
        let (pos, neg) = partition(points);
        let c_pos = Vector2::mean(pos.iter().copied())?;
        let c_neg = Vector2::mean(neg.iter().copied())?;

        let w = (c_pos - c_neg).try_normalize()?;
        let midpoint = c_pos.midpoint(c_neg);
        let b = -w.dot(midpoint);

        Some(Self {
            w,
            b,
            positive_centroid: c_pos,
            negative_centroid: c_neg,
        })
    }

    /// Refit in place. Keeps the current parameters and returns `false`
    /// when the new point set is degenerate.
    pub fn refit(&mut self, points: &[LabeledPoint<T>]) -> bool {
        match Self::fit(points) {
            Some(fitted) => {
                *self = fitted;
                true
            }
            None => false,
        }
    }

    /// Decision value `w·x + b`; its magnitude is the signed distance to
    /// the boundary.
    #[inline]
    pub fn decision(&self, x: Vector2<T>) -> T {
        self.w.dot(x) + self.b
    }

    /// Predicted label for `x`.
    #[inline]
    pub fn classify(&self, x: Vector2<T>) -> Label {
        Label::from_decision(self.decision(x))
    }

    /// Fraction of `points` classified correctly.
    pub fn accuracy(&self, points: &[LabeledPoint<T>]) -> T {
        if points.is_empty() {
            return T::zero();
        }
        let correct = points
            .iter()
            .filter(|p| self.classify(p.position) == p.label)
            .count();
        T::from(correct).unwrap_or_else(T::zero) / T::from(points.len()).unwrap_or_else(T::one)
    }

    /// Margin width `2 / ‖w‖` between the lines `w·x + b = ±1`.
    #[inline]
    pub fn margin_width(&self) -> T {
        let two = T::one() + T::one();
        two / self.w.length()
    }

    /// Clip the line `w·x + b + offset = 0` to `bounds`.
    ///
    /// `offset = 0` gives the decision boundary, `±1` the margin lines.
    /// Returns `None` if the line misses the rectangle.
    pub fn boundary_segment(&self, bounds: &Bounds<T>, offset: T) -> Option<(Vector2<T>, Vector2<T>)> {
        clip_line(self.w, self.b + offset, bounds)
    }
}

/// Clip the line `w·x + c = 0` against the edges of `bounds`.
pub fn clip_line<T: Float>(
    w: Vector2<T>,
    c: T,
    bounds: &Bounds<T>,
) -> Option<(Vector2<T>, Vector2<T>)> {
    let eps = T::from(CLIP_EPSILON).unwrap_or_else(T::epsilon);
    let mut hits: Vec<Vector2<T>> = Vec::with_capacity(4);

    if w.y.abs() > eps {
        for x in [bounds.min.x, bounds.max.x] {
            let y = -(w.x * x + c) / w.y;
            if y >= bounds.min.y && y <= bounds.max.y {
                hits.push(Vector2::new(x, y));
            }
        }
    }
    if w.x.abs() > eps {
        for y in [bounds.min.y, bounds.max.y] {
            let x = -(w.y * y + c) / w.x;
            if x >= bounds.min.x && x <= bounds.max.x {
                hits.push(Vector2::new(x, y));
            }
        }
    }

    // A line through a corner hits two edges at the same point.
    let first = *hits.first()?;
    let tol = eps.max(T::epsilon());
    hits.iter()
        .copied()
        .find(|p| p.distance(first) > tol)
        .map(|second| (first, second))
}
