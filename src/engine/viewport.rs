//! Graph-to-screen affine transform.
//!
//! ## Purpose
//!
//! This module maps kernel coordinates to canvas pixels and back:
//! `sx = cx + gx·scale_x`, `sy = cy − gy·scale_y`. The y axis flips because
//! canvas rows grow downward.
//!
//! ## Invariants
//!
//! * `to_graph(to_screen(p)) == p` up to round-off.
//! * Scales are positive and finite (enforced by `Viewport::new`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::bounds::Bounds;
use crate::primitives::errors::KernelError;
use crate::primitives::vector::Vector2;

/// A canvas with a graph origin and per-axis pixel scales.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport<T> {
    /// Screen position of the graph origin.
    pub center: Vector2<T>,

    /// Pixels per graph unit along x.
    pub scale_x: T,

    /// Pixels per graph unit along y.
    pub scale_y: T,

    /// Canvas width in pixels.
    pub width: T,

    /// Canvas height in pixels.
    pub height: T,
}

impl<T: Float> Viewport<T> {
    /// Create a viewport with independent axis scales.
    pub fn new(
        width: T,
        height: T,
        center: Vector2<T>,
        scale_x: T,
        scale_y: T,
    ) -> Result<Self, KernelError> {
        Validator::validate_scale(width)?;
        Validator::validate_scale(height)?;
        Validator::validate_scale(scale_x)?;
        Validator::validate_scale(scale_y)?;
        Validator::validate_vector(center, "center")?;
        Ok(Self {
            center,
            scale_x,
            scale_y,
            width,
            height,
        })
    }

    /// A canvas centered on the origin with a uniform scale.
    pub fn centered(width: T, height: T, scale: T) -> Result<Self, KernelError> {
        let two = T::one() + T::one();
        Self::new(width, height, Vector2::new(width / two, height / two), scale, scale)
    }

    /// Graph → screen.
    #[inline]
    pub fn to_screen(&self, g: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            self.center.x + g.x * self.scale_x,
            self.center.y - g.y * self.scale_y,
        )
    }

    /// Screen → graph.
    #[inline]
    pub fn to_graph(&self, s: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            (s.x - self.center.x) / self.scale_x,
            (self.center.y - s.y) / self.scale_y,
        )
    }

    /// Canvas rectangle in screen coordinates.
    #[inline]
    pub fn screen_bounds(&self) -> Bounds<T> {
        Bounds::from_size(self.width, self.height)
    }

    /// Visible rectangle in graph coordinates.
    pub fn graph_bounds(&self) -> Bounds<T> {
        Bounds::new(
            self.to_graph(Vector2::zero()),
            self.to_graph(Vector2::new(self.width, self.height)),
        )
    }

    /// Clamp a screen position onto the canvas.
    #[inline]
    pub fn clamp_screen(&self, s: Vector2<T>) -> Vector2<T> {
        self.screen_bounds().clamp(s)
    }

    /// Whether a graph point is visible.
    #[inline]
    pub fn is_visible(&self, g: Vector2<T>) -> bool {
        self.screen_bounds().contains(self.to_screen(g))
    }

    /// Graph coordinates of every pixel center in row-major order, for
    /// per-pixel shading.
    pub fn pixel_centers(&self, stride: usize) -> impl Iterator<Item = (usize, usize, Vector2<T>)> + '_ {
        let stride = stride.max(1);
        let w = self.width.to_usize().unwrap_or(0);
        let h = self.height.to_usize().unwrap_or(0);
        let half = T::from(0.5).unwrap_or_else(T::zero);
        (0..h).step_by(stride).flat_map(move |row| {
            (0..w).step_by(stride).map(move |col| {
                let s = Vector2::new(
                    T::from(col).unwrap_or_else(T::zero) + half,
                    T::from(row).unwrap_or_else(T::zero) + half,
                );
                (col, row, self.to_graph(s))
            })
        })
    }
}
