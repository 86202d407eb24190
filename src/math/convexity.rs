//! Convexity analysis of one-dimensional test curves.
//!
//! ## Purpose
//!
//! This module provides three fixed scalar functions (convex, non-convex,
//! concave) with analytic first and second derivatives, plus tangent lines,
//! secant chords and a local curvature classification by the sign of f''.
//!
//! ## Key concepts
//!
//! * **Tangent**: `y = f(x₀) + f'(x₀)(x − x₀)`; a convex curve lies above it.
//! * **Secant**: chord through `x₀ ± h`; a convex curve lies below it
//!   between the endpoints.
//!
//! ## Invariants
//!
//! * Query abscissae are clamped to `[-DOMAIN_LIMIT, DOMAIN_LIMIT]`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::vector::Vector2;

/// Half-width of the analysed domain.
pub const DOMAIN_LIMIT: f64 = 3.0;

/// Default half-width of a secant chord.
pub const DEFAULT_SECANT_HALF_WIDTH: f64 = 1.0;

#[inline]
fn lit<T: Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::zero)
}

/// One of the fixed test curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveKind {
    /// `0.5x² + 0.2x + 1`.
    #[default]
    Convex,

    /// `0.1x⁴ − 0.8x² + 1.5`.
    NonConvex,

    /// `−0.5x² + 0.2x + 2`.
    Concave,
}

/// Local curvature at a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curvature {
    /// f'' > 0.
    LocallyConvex,

    /// f'' < 0.
    LocallyConcave,

    /// f'' = 0.
    Inflection,
}

/// A straight line `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<T> {
    /// Slope.
    pub slope: T,
    /// Value at x = 0.
    pub intercept: T,
}

impl<T: Float> Line<T> {
    /// Line through `p` with `slope`.
    #[inline]
    pub fn through(p: Vector2<T>, slope: T) -> Self {
        Self {
            slope,
            intercept: p.y - slope * p.x,
        }
    }

    /// Value at `x`.
    #[inline]
    pub fn at(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// Endpoints over `[x0, x1]`.
    #[inline]
    pub fn segment(&self, x0: T, x1: T) -> (Vector2<T>, Vector2<T>) {
        (Vector2::new(x0, self.at(x0)), Vector2::new(x1, self.at(x1)))
    }
}

/// A secant chord between two points on a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Secant<T> {
    /// Left endpoint on the curve.
    pub left: Vector2<T>,
    /// Right endpoint on the curve.
    pub right: Vector2<T>,
    /// Extended line through both endpoints.
    pub line: Line<T>,
}

impl CurveKind {
    /// All curves.
    pub const ALL: [CurveKind; 3] = [Self::Convex, Self::NonConvex, Self::Concave];

    /// Formula for legends.
    pub fn name(self) -> &'static str {
        match self {
            Self::Convex => "Convex: f(x) = 0.5x² + 0.2x + 1",
            Self::NonConvex => "Non-convex: f(x) = 0.1x⁴ - 0.8x² + 1.5",
            Self::Concave => "Concave: f(x) = -0.5x² + 0.2x + 2",
        }
    }

    /// Clamp `x` into the analysed domain.
    #[inline]
    pub fn clamp_x<T: Float>(x: T) -> T {
        let limit = lit::<T>(DOMAIN_LIMIT);
        x.max(-limit).min(limit)
    }

    /// f(x).
    pub fn value<T: Float>(self, x: T) -> T {
        match self {
            Self::Convex => lit::<T>(0.5) * x * x + lit::<T>(0.2) * x + T::one(),
            Self::NonConvex => lit::<T>(0.1) * x.powi(4) - lit::<T>(0.8) * x * x + lit::<T>(1.5),
            Self::Concave => lit::<T>(-0.5) * x * x + lit::<T>(0.2) * x + lit::<T>(2.0),
        }
    }

    /// f'(x).
    pub fn derivative<T: Float>(self, x: T) -> T {
        match self {
            Self::Convex => x + lit::<T>(0.2),
            Self::NonConvex => lit::<T>(0.4) * x.powi(3) - lit::<T>(1.6) * x,
            Self::Concave => -x + lit::<T>(0.2),
        }
    }

    /// f''(x).
    pub fn second_derivative<T: Float>(self, x: T) -> T {
        match self {
            Self::Convex => T::one(),
            Self::NonConvex => lit::<T>(1.2) * x * x - lit::<T>(1.6),
            Self::Concave => -T::one(),
        }
    }

    /// Curvature classification at `x`.
    pub fn curvature<T: Float>(self, x: T) -> Curvature {
        let k = self.second_derivative(Self::clamp_x(x));
        if k > T::zero() {
            Curvature::LocallyConvex
        } else if k < T::zero() {
            Curvature::LocallyConcave
        } else {
            Curvature::Inflection
        }
    }

    /// Whether the curve is convex over the whole domain.
    #[inline]
    pub fn is_globally_convex(self) -> bool {
        matches!(self, Self::Convex)
    }

    /// Tangent line at `x` (clamped).
    pub fn tangent_at<T: Float>(self, x: T) -> Line<T> {
        let x = Self::clamp_x(x);
        Line::through(Vector2::new(x, self.value(x)), self.derivative(x))
    }

    /// Secant through `x − half_width` and `x + half_width` (center clamped).
    ///
    /// When the two abscissae coincide the secant degenerates to the
    /// tangent at `x`.
    pub fn secant<T: Float>(self, x: T, half_width: T) -> Secant<T> {
        let x = Self::clamp_x(x);
        let (x0, x1) = (x - half_width, x + half_width);
        let left = Vector2::new(x0, self.value(x0));
        let right = Vector2::new(x1, self.value(x1));
        let run = right.x - left.x;
        let slope = if run == T::zero() {
            self.derivative(x)
        } else {
            (right.y - left.y) / run
        };
        Secant {
            left,
            right,
            line: Line::through(left, slope),
        }
    }

    /// Secant with the default half-width.
    #[inline]
    pub fn default_secant<T: Float>(self, x: T) -> Secant<T> {
        self.secant(x, lit(DEFAULT_SECANT_HALF_WIDTH))
    }

    /// Sample `(x, f(x))` over the domain at `samples` evenly spaced abscissae.
    pub fn sample_curve<T: Float>(self, samples: usize) -> impl Iterator<Item = Vector2<T>> {
        let limit = lit::<T>(DOMAIN_LIMIT);
        let denom = lit::<T>(samples.saturating_sub(1).max(1) as f64);
        (0..samples).map(move |i| {
            let t = lit::<T>(i as f64) / denom;
            let x = -limit + (limit + limit) * t;
            Vector2::new(x, self.value(x))
        })
    }
}
