//! Two-dimensional vector value type.
//!
//! ## Purpose
//!
//! This module provides `Vector2`, the immutable coordinate pair every other
//! layer passes around: slider and pointer input, means, gradients,
//! eigenvectors and boundary points.
//!
//! ## Design notes
//!
//! * **Value semantics**: `Copy`; operations return new vectors.
//! * **Generics**: Generic over `Float` types.
//! * **Fallbacks**: Normalization of a zero-length vector returns a caller
//!   supplied fallback instead of NaN.
//!
//! ## Invariants
//!
//! * `normalize_or` never returns a non-finite vector for finite input.

// External dependencies
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use num_traits::Float;

/// A point or direction in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2<T> {
    /// Horizontal coordinate.
    pub x: T,

    /// Vertical coordinate.
    pub y: T,
}

impl<T: Float> Vector2<T> {
    /// Create a vector from its coordinates.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The origin.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Unit vector along the x axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// Unit vector along the y axis.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Unit vector at angle `theta` (radians, counter-clockwise from +x).
    #[inline]
    pub fn from_angle(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(cos, sin)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> T {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> T {
        (self - other).length()
    }

    /// Normalize to unit length, or `None` for a (near) zero vector.
    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        if len > T::epsilon() && len.is_finite() {
            Some(self / len)
        } else {
            None
        }
    }

    /// Normalize to unit length, returning `fallback` for a zero vector.
    #[inline]
    pub fn normalize_or(self, fallback: Self) -> Self {
        self.try_normalize().unwrap_or(fallback)
    }

    /// Angle of the vector in radians, in (-π, π].
    #[inline]
    pub fn angle(self) -> T {
        self.y.atan2(self.x)
    }

    /// Midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = T::one() + T::one();
        (self + other) / two
    }

    /// Component-wise clamp into `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(self.x.max(min.x).min(max.x), self.y.max(min.y).min(max.y))
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Arithmetic mean of a set of vectors, `None` if empty.
    pub fn mean<I: IntoIterator<Item = Self>>(vectors: I) -> Option<Self> {
        let mut sum = Self::zero();
        let mut count = T::zero();
        for v in vectors {
            sum += v;
            count = count + T::one();
        }
        if count > T::zero() {
            Some(sum / count)
        } else {
            None
        }
    }
}

impl<T: Float> From<(T, T)> for Vector2<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Float> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T: Float> Add for Vector2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Float> AddAssign for Vector2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Float> Sub for Vector2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Float> SubAssign for Vector2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Float> Neg for Vector2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Float> Mul<T> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Float> Div<T> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}
