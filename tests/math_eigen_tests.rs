#![cfg(feature = "dev")]
//! Tests for the closed-form symmetric 2x2 eigendecomposition.
//!
//! ## Test Organization
//!
//! 1. **Known Decompositions** - Hand-checked matrices
//! 2. **Invariants** - Trace, determinant, unit and orthogonal eigenvectors
//! 3. **Degenerate Inputs** - Diagonal, isotropic and singular matrices
//! 4. **Cross-Check** - Agreement with nalgebra's general solver

use approx::assert_relative_eq;

use planar_rs::internals::math::eigen::SymmetricEigen;
use planar_rs::internals::primitives::matrix::SymmetricMatrix2;
use planar_rs::internals::primitives::vector::Vector2;

fn sample_matrices() -> Vec<SymmetricMatrix2<f64>> {
    let mut out = Vec::new();
    for &a in &[-3.0, -0.5, 0.0, 1.0, 2.5] {
        for &b in &[-2.0, -0.3, 0.0, 0.7, 1.5] {
            for &d in &[-1.0, 0.0, 0.4, 2.0, 4.0] {
                out.push(SymmetricMatrix2::new(a, b, d));
            }
        }
    }
    out
}

/// Whether `u` and `v` agree up to sign.
fn same_direction(u: Vector2<f64>, v: Vector2<f64>) -> bool {
    (u.dot(v).abs() - 1.0).abs() < 1e-9
}

// ============================================================================
// Known Decompositions
// ============================================================================

#[test]
fn test_eigen_two_one_two() {
    let eig = SymmetricMatrix2::new(2.0f64, 1.0, 2.0).eigen();
    assert_relative_eq!(eig.lambda1, 3.0, epsilon = 1e-12);
    assert_relative_eq!(eig.lambda2, 1.0, epsilon = 1e-12);

    let s = 1.0 / 2.0f64.sqrt();
    assert!(same_direction(eig.v1, Vector2::new(s, s)));
    assert!(same_direction(eig.v2, Vector2::new(s, -s)));
    assert_relative_eq!(eig.dominant_angle().abs(), core::f64::consts::FRAC_PI_4, epsilon = 1e-12);
}

#[test]
fn test_eigen_reconstruct() {
    let m = SymmetricMatrix2::new(1.5f64, -0.8, 0.3);
    let r = m.eigen().reconstruct();
    assert_relative_eq!(r.a, m.a, epsilon = 1e-12);
    assert_relative_eq!(r.b, m.b, epsilon = 1e-12);
    assert_relative_eq!(r.c, m.b, epsilon = 1e-12);
    assert_relative_eq!(r.d, m.d, epsilon = 1e-12);
}

// ============================================================================
// Invariant Tests
// ============================================================================

#[test]
fn test_eigen_trace_and_determinant() {
    for m in sample_matrices() {
        let eig = SymmetricEigen::new(&m);
        assert!(eig.lambda1 >= eig.lambda2);
        assert_relative_eq!(eig.trace(), m.trace(), epsilon = 1e-6);
        assert_relative_eq!(eig.determinant(), m.determinant(), epsilon = 1e-6);
    }
}

#[test]
fn test_eigenvectors_unit_and_orthogonal() {
    for m in sample_matrices() {
        let eig = m.eigen();
        assert_relative_eq!(eig.v1.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(eig.v2.length(), 1.0, epsilon = 1e-12);
        if !eig.is_isotropic(1e-9) {
            assert!(eig.v1.dot(eig.v2).abs() < 1e-9, "not orthogonal for {m:?}");
        }
    }
}

#[test]
fn test_eigenvectors_satisfy_definition() {
    for m in sample_matrices() {
        let eig = m.eigen();
        for (lambda, v) in [(eig.lambda1, eig.v1), (eig.lambda2, eig.v2)] {
            let mv = m.mul_vec(v);
            assert_relative_eq!(mv.x, lambda * v.x, epsilon = 1e-9);
            assert_relative_eq!(mv.y, lambda * v.y, epsilon = 1e-9);
        }
    }
}

// ============================================================================
// Degenerate Inputs
// ============================================================================

#[test]
fn test_eigen_diagonal_keeps_ordering() {
    let eig = SymmetricMatrix2::new(1.0f64, 0.0, 5.0).eigen();
    assert_relative_eq!(eig.lambda1, 5.0);
    assert_relative_eq!(eig.lambda2, 1.0);
    assert_eq!(eig.v1, Vector2::unit_y());
    assert_eq!(eig.v2, Vector2::unit_x());

    let eig = SymmetricMatrix2::new(4.0f64, 0.0, -2.0).eigen();
    assert_eq!(eig.v1, Vector2::unit_x());
    assert_eq!(eig.v2, Vector2::unit_y());
}

#[test]
fn test_eigen_isotropic() {
    let eig = SymmetricMatrix2::new(2.0f64, 0.0, 2.0).eigen();
    assert!(eig.is_isotropic(1e-12));
    assert_relative_eq!(eig.lambda1, 2.0);
    assert_relative_eq!(eig.lambda2, 2.0);
}

#[test]
fn test_eigen_near_isotropic() {
    for b in [3e-9, 1e-9, 1e-8, 1e-7, -5e-8] {
        let m = SymmetricMatrix2::new(1.0f64, b, 1.0);
        let eig = m.eigen();
        assert_relative_eq!(eig.lambda1, 1.0 + b.abs(), epsilon = 1e-15);
        assert_relative_eq!(eig.lambda2, 1.0 - b.abs(), epsilon = 1e-15);
        assert!(eig.v1.dot(eig.v2).abs() < 1e-12, "not orthogonal for b = {b}");

        let r = eig.reconstruct();
        assert_relative_eq!(r.a, 1.0, epsilon = 1e-12);
        assert_relative_eq!(r.b, b, epsilon = 1e-12);
        assert_relative_eq!(r.c, b, epsilon = 1e-12);
        assert_relative_eq!(r.d, 1.0, epsilon = 1e-12);
    }

    // Nearly equal diagonal with a small coupling.
    let eig = SymmetricMatrix2::new(2.0f64 + 1e-9, 2e-9, 2.0).eigen();
    assert!(eig.v1.dot(eig.v2).abs() < 1e-12);
    assert!(eig.lambda1 > eig.lambda2);
}

#[test]
fn test_eigen_singular_matrix_proceeds() {
    let eig = SymmetricMatrix2::new(1.0f64, 1.0, 1.0).eigen();
    assert_relative_eq!(eig.lambda1, 2.0, epsilon = 1e-12);
    assert_relative_eq!(eig.lambda2, 0.0, epsilon = 1e-12);
    assert!(eig.v1.is_finite() && eig.v2.is_finite());

    let zero = SymmetricMatrix2::new(0.0f64, 0.0, 0.0).eigen();
    assert_eq!(zero.lambda1, 0.0);
    assert_eq!(zero.v1, Vector2::unit_x());
}

#[test]
fn test_eigen_f32() {
    let eig = SymmetricMatrix2::new(2.0f32, 1.0, 2.0).eigen();
    assert_relative_eq!(eig.lambda1, 3.0f32, epsilon = 1e-5);
    assert_relative_eq!(eig.lambda2, 1.0f32, epsilon = 1e-5);
}

// ============================================================================
// nalgebra Cross-Check
// ============================================================================

#[test]
fn test_eigen_matches_nalgebra() {
    for m in sample_matrices() {
        let ours = m.eigen();
        let na: nalgebra::Matrix2<f64> = m.into();
        let theirs = na.symmetric_eigen();

        let (hi, lo) = {
            let e0 = theirs.eigenvalues[0];
            let e1 = theirs.eigenvalues[1];
            if e0 >= e1 { (e0, e1) } else { (e1, e0) }
        };
        assert_relative_eq!(ours.lambda1, hi, epsilon = 1e-9);
        assert_relative_eq!(ours.lambda2, lo, epsilon = 1e-9);
    }
}

#[test]
fn test_nalgebra_conversions() {
    let v = Vector2::new(1.0f64, -2.0);
    let na: nalgebra::Vector2<f64> = v.into();
    assert_eq!(na, nalgebra::Vector2::new(1.0, -2.0));
    assert_eq!(Vector2::from(na), v);

    let skewed = nalgebra::Matrix2::new(1.0f64, 0.4, 0.6, 3.0);
    let sym = SymmetricMatrix2::from(skewed);
    assert_relative_eq!(sym.b, 0.5, epsilon = 1e-12);
}
