#![cfg(feature = "dev")]

use planar_rs::internals::engine::validator::Validator;
use planar_rs::internals::primitives::errors::KernelError;
use planar_rs::internals::primitives::matrix::SymmetricMatrix2;
use planar_rs::internals::primitives::vector::Vector2;

#[test]
fn test_kernel_error_display() {
    // InvalidLearningRate
    let err = KernelError::InvalidLearningRate {
        got: 0.9,
        min: 0.01,
        max: 0.5,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid learning rate: 0.9 (must be in [0.01, 0.5])"
    );

    // InvalidTolerance
    let err = KernelError::InvalidTolerance(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid tolerance: -1 (must be > 0 and finite)"
    );

    // InvalidMaxSteps
    let err = KernelError::InvalidMaxSteps(0);
    assert_eq!(
        format!("{}", err),
        "Invalid max steps: 0 (must be in [1, 10000])"
    );

    // InvalidSampleCount
    let err = KernelError::InvalidSampleCount(0);
    assert_eq!(
        format!("{}", err),
        "Invalid sample count: 0 (must be in [1, 100000])"
    );

    // InvalidScale
    let err = KernelError::InvalidScale(0.0);
    assert_eq!(
        format!("{}", err),
        "Invalid scale: 0 (must be > 0 and finite)"
    );

    // NotPositiveDefinite
    let err = KernelError::NotPositiveDefinite { det: -3.0 };
    assert_eq!(
        format!("{}", err),
        "Covariance is not positive definite (det = -3)"
    );

    // InvalidNumericValue
    let err = KernelError::InvalidNumericValue("x=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: x=NaN");

    // DuplicateParameter
    let err = KernelError::DuplicateParameter {
        parameter: "learning_rate",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter 'learning_rate' was set more than once"
    );
}

#[test]
fn test_kernel_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&KernelError::InvalidScale(-1.0));
}

// ============================================================================
// Validator Tests
// ============================================================================

#[test]
fn test_validate_learning_rate_bounds() {
    assert!(Validator::validate_learning_rate(0.01f64).is_ok());
    assert!(Validator::validate_learning_rate(0.5f64).is_ok());
    assert!(Validator::validate_learning_rate(0.1f32).is_ok());

    let err = Validator::validate_learning_rate(0.6f64).unwrap_err();
    assert!(matches!(err, KernelError::InvalidLearningRate { min, max, .. } if min == 0.01 && max == 0.5));

    assert!(Validator::validate_learning_rate(0.0f64).is_err());
    assert!(Validator::validate_learning_rate(f64::NAN).is_err());
}

#[test]
fn test_validate_tolerance_and_steps() {
    assert!(Validator::validate_tolerance(1e-6f64).is_ok());
    assert_eq!(
        Validator::validate_tolerance(0.0f64),
        Err(KernelError::InvalidTolerance(0.0))
    );
    assert!(Validator::validate_tolerance(f64::INFINITY).is_err());

    assert!(Validator::validate_max_steps(1).is_ok());
    assert!(Validator::validate_max_steps(10_000).is_ok());
    assert_eq!(
        Validator::validate_max_steps(10_001),
        Err(KernelError::InvalidMaxSteps(10_001))
    );
    assert_eq!(
        Validator::validate_max_steps(0),
        Err(KernelError::InvalidMaxSteps(0))
    );
}

#[test]
fn test_validate_scale_and_samples() {
    assert!(Validator::validate_scale(40.0f64).is_ok());
    assert_eq!(
        Validator::validate_scale(-2.0f64),
        Err(KernelError::InvalidScale(-2.0))
    );
    assert!(Validator::validate_scale(f64::NAN).is_err());

    assert!(Validator::validate_sample_count(1).is_ok());
    assert_eq!(
        Validator::validate_sample_count(0),
        Err(KernelError::InvalidSampleCount(0))
    );
    assert!(Validator::validate_sample_count(100_000).is_ok());
    assert_eq!(
        Validator::validate_sample_count(100_001),
        Err(KernelError::InvalidSampleCount(100_001))
    );
}

#[test]
fn test_validate_vector_and_scalar() {
    assert!(Validator::validate_vector(Vector2::new(1.0f64, -2.0), "start").is_ok());

    let err = Validator::validate_vector(Vector2::new(f64::NAN, 0.0), "start").unwrap_err();
    match err {
        KernelError::InvalidNumericValue(msg) => assert!(msg.starts_with("start=")),
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(Validator::validate_scalar(f64::NEG_INFINITY, "x").is_err());
}

#[test]
fn test_validate_covariance() {
    assert!(Validator::validate_covariance(&SymmetricMatrix2::new(2.0f64, 0.5, 1.0)).is_ok());

    // Indefinite: det = 1 - 4 < 0.
    let err = Validator::validate_covariance(&SymmetricMatrix2::new(1.0f64, 2.0, 1.0)).unwrap_err();
    assert_eq!(err, KernelError::NotPositiveDefinite { det: -3.0 });

    // Negative definite is also rejected.
    assert!(Validator::validate_covariance(&SymmetricMatrix2::new(-1.0f64, 0.0, -1.0)).is_err());

    // Non-finite entries report the entry name.
    let err = Validator::validate_covariance(&SymmetricMatrix2::new(1.0f64, f64::NAN, 1.0)).unwrap_err();
    assert!(matches!(err, KernelError::InvalidNumericValue(ref m) if m.starts_with("covariance.b")));
}

#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("method")),
        Err(KernelError::DuplicateParameter { parameter: "method" })
    );
}
