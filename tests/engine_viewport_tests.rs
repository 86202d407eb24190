#![cfg(feature = "dev")]
//! Tests for the graph-to-screen transform.
//!
//! ## Test Organization
//!
//! 1. **Mapping** - Forward and inverse transforms, y flip
//! 2. **Bounds** - Visible region, clamping
//! 3. **Pixel Grid** - Pixel-center iteration
//! 4. **Validation** - Rejected scales and centers

use approx::assert_relative_eq;

use planar_rs::internals::engine::viewport::Viewport;
use planar_rs::internals::primitives::errors::KernelError;
use planar_rs::internals::primitives::vector::Vector2;

fn canvas() -> Viewport<f64> {
    Viewport::centered(800.0, 600.0, 50.0).unwrap()
}

// ============================================================================
// Mapping Tests
// ============================================================================

#[test]
fn test_origin_maps_to_center() {
    let vp = canvas();
    assert_eq!(vp.center, Vector2::new(400.0, 300.0));
    assert_eq!(vp.to_screen(Vector2::zero()), vp.center);
    assert_eq!(vp.to_graph(vp.center), Vector2::zero());
}

#[test]
fn test_y_axis_flips() {
    let vp = canvas();
    assert_eq!(vp.to_screen(Vector2::new(1.0, 2.0)), Vector2::new(450.0, 200.0));
    assert_eq!(vp.to_graph(Vector2::new(450.0, 400.0)), Vector2::new(1.0, -2.0));
}

#[test]
fn test_round_trip() {
    let vp = Viewport::new(640.0, 480.0, Vector2::new(100.0, 380.0), 37.5, 12.25).unwrap();
    for &(x, y) in &[(0.3, -1.7), (-4.0, 8.5), (12.0, 0.0), (1e-3, 1e3)] {
        let g = Vector2::new(x, y);
        let back = vp.to_graph(vp.to_screen(g));
        assert_relative_eq!(back.x, g.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, g.y, epsilon = 1e-9);
    }
}

// ============================================================================
// Bounds Tests
// ============================================================================

#[test]
fn test_graph_bounds() {
    let b = canvas().graph_bounds();
    assert_eq!(b.min, Vector2::new(-8.0, -6.0));
    assert_eq!(b.max, Vector2::new(8.0, 6.0));

    let s = canvas().screen_bounds();
    assert_eq!(s.width(), 800.0);
    assert_eq!(s.height(), 600.0);
}

#[test]
fn test_visibility_and_clamp() {
    let vp = canvas();
    assert!(vp.is_visible(Vector2::new(7.9, -5.9)));
    assert!(!vp.is_visible(Vector2::new(8.5, 0.0)));
    assert_eq!(vp.clamp_screen(Vector2::new(-5.0, 700.0)), Vector2::new(0.0, 600.0));
    assert_eq!(vp.clamp_screen(Vector2::new(10.0, 20.0)), Vector2::new(10.0, 20.0));
}

// ============================================================================
// Pixel Grid Tests
// ============================================================================

#[test]
fn test_pixel_centers_row_major() {
    let vp = Viewport::new(4.0, 2.0, Vector2::new(2.0, 1.0), 1.0, 1.0).unwrap();
    let px: Vec<_> = vp.pixel_centers(1).collect();
    assert_eq!(px.len(), 8);

    let (col, row, g) = px[0];
    assert_eq!((col, row), (0, 0));
    assert_eq!(g, Vector2::new(-1.5, 0.5));

    let (col, row, g) = px[5];
    assert_eq!((col, row), (1, 1));
    assert_eq!(g, Vector2::new(-0.5, -0.5));
}

#[test]
fn test_pixel_centers_stride() {
    let vp = Viewport::new(4.0, 2.0, Vector2::new(2.0, 1.0), 1.0, 1.0).unwrap();
    let cols: Vec<(usize, usize)> = vp.pixel_centers(2).map(|(c, r, _)| (c, r)).collect();
    assert_eq!(cols, vec![(0, 0), (2, 0)]);

    // Zero stride is treated as one.
    assert_eq!(vp.pixel_centers(0).count(), 8);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_rejects_bad_parameters() {
    assert!(matches!(
        Viewport::<f64>::centered(800.0, 600.0, 0.0),
        Err(KernelError::InvalidScale(_))
    ));
    assert!(matches!(
        Viewport::<f64>::centered(-800.0, 600.0, 10.0),
        Err(KernelError::InvalidScale(_))
    ));
    assert!(matches!(
        Viewport::new(800.0, 600.0, Vector2::new(f64::NAN, 0.0), 1.0, 1.0),
        Err(KernelError::InvalidNumericValue(_))
    ));
    assert!(Viewport::new(800.0f32, 600.0, Vector2::new(400.0, 300.0), 50.0, 25.0).is_ok());
}
