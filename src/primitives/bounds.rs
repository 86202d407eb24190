//! Axis-aligned rectangles for clamping and clipping.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::vector::Vector2;

/// Axis-aligned rectangle `[min.x, max.x] × [min.y, max.y]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<T> {
    /// Lower-left corner.
    pub min: Vector2<T>,
    /// Upper-right corner.
    pub max: Vector2<T>,
}

impl<T: Float> Bounds<T> {
    /// Create bounds from two opposite corners in any order.
    pub fn new(p: Vector2<T>, q: Vector2<T>) -> Self {
        Self {
            min: Vector2::new(p.x.min(q.x), p.y.min(q.y)),
            max: Vector2::new(p.x.max(q.x), p.y.max(q.y)),
        }
    }

    /// Bounds `[0, width] × [0, height]`, the shape of a canvas.
    pub fn from_size(width: T, height: T) -> Self {
        Self::new(Vector2::zero(), Vector2::new(width, height))
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }

    /// Whether `p` lies inside or on the edge.
    #[inline]
    pub fn contains(&self, p: Vector2<T>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Clamp `p` into the rectangle.
    #[inline]
    pub fn clamp(&self, p: Vector2<T>) -> Vector2<T> {
        p.clamp(self.min, self.max)
    }
}
