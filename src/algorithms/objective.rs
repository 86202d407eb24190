//! Fixed two-variable test objectives.
//!
//! Each objective exposes its value, analytic gradient and analytic Hessian.
//!
//! | Objective  | f(x, y)                             | Minima                     |
//! |------------|-------------------------------------|----------------------------|
//! | Quadratic  | 0.5x² + 0.8y² + 0.3xy               | (0, 0)                     |
//! | Rosenbrock | (1 − x)² + 100(y − x²)²             | (1, 1)                     |
//! | Himmelblau | (x² + y − 11)² + (x + y² − 7)²      | (3, 2) and three others    |

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::Matrix2;
use crate::primitives::vector::Vector2;

#[inline]
fn lit<T: Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::zero)
}

/// A fixed test objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    /// Convex quadratic bowl.
    #[default]
    Quadratic,

    /// Rosenbrock's banana valley.
    Rosenbrock,

    /// Himmelblau's four-minimum function.
    Himmelblau,
}

impl Objective {
    /// All objectives.
    pub const ALL: [Objective; 3] = [Self::Quadratic, Self::Rosenbrock, Self::Himmelblau];

    /// Formula for legends.
    pub fn name(self) -> &'static str {
        match self {
            Self::Quadratic => "Quadratic: f(x,y) = 0.5x² + 0.8y² + 0.3xy",
            Self::Rosenbrock => "Rosenbrock: f(x,y) = (1-x)² + 100(y-x²)²",
            Self::Himmelblau => "Himmelblau: f(x,y) = (x²+y-11)² + (x+y²-7)²",
        }
    }

    /// f(p).
    pub fn value<T: Float>(self, p: Vector2<T>) -> T {
        let Vector2 { x, y } = p;
        match self {
            Self::Quadratic => lit::<T>(0.5) * x * x + lit::<T>(0.8) * y * y + lit::<T>(0.3) * x * y,
            Self::Rosenbrock => {
                let a = T::one() - x;
                let b = y - x * x;
                a * a + lit::<T>(100.0) * b * b
            }
            Self::Himmelblau => {
                let u = x * x + y - lit::<T>(11.0);
                let v = x + y * y - lit::<T>(7.0);
                u * u + v * v
            }
        }
    }

    /// ∇f(p).
    pub fn gradient<T: Float>(self, p: Vector2<T>) -> Vector2<T> {
        let Vector2 { x, y } = p;
        let two = lit::<T>(2.0);
        match self {
            Self::Quadratic => Vector2::new(x + lit::<T>(0.3) * y, lit::<T>(1.6) * y + lit::<T>(0.3) * x),
            Self::Rosenbrock => {
                let b = y - x * x;
                Vector2::new(
                    -two * (T::one() - x) - lit::<T>(400.0) * x * b,
                    lit::<T>(200.0) * b,
                )
            }
            Self::Himmelblau => {
                let u = x * x + y - lit::<T>(11.0);
                let v = x + y * y - lit::<T>(7.0);
                Vector2::new(
                    lit::<T>(4.0) * x * u + two * v,
                    two * u + lit::<T>(4.0) * y * v,
                )
            }
        }
    }

    /// ∇²f(p).
    pub fn hessian<T: Float>(self, p: Vector2<T>) -> Matrix2<T> {
        let Vector2 { x, y } = p;
        match self {
            Self::Quadratic => {
                let off = lit::<T>(0.3);
                Matrix2::new(T::one(), off, off, lit::<T>(1.6))
            }
            Self::Rosenbrock => {
                let off = lit::<T>(-400.0) * x;
                Matrix2::new(
                    lit::<T>(2.0) + lit::<T>(1200.0) * x * x - lit::<T>(400.0) * y,
                    off,
                    off,
                    lit::<T>(200.0),
                )
            }
            Self::Himmelblau => {
                let off = lit::<T>(4.0) * (x + y);
                Matrix2::new(
                    lit::<T>(12.0) * x * x + lit::<T>(4.0) * y - lit::<T>(42.0),
                    off,
                    off,
                    lit::<T>(4.0) * x + lit::<T>(12.0) * y * y - lit::<T>(26.0),
                )
            }
        }
    }

    /// A known global minimizer.
    pub fn minimizer<T: Float>(self) -> Vector2<T> {
        match self {
            Self::Quadratic => Vector2::zero(),
            Self::Rosenbrock => Vector2::new(T::one(), T::one()),
            Self::Himmelblau => Vector2::new(lit(3.0), lit(2.0)),
        }
    }
}
