use planar_rs::prelude::*;

// ============================================================================
// Descent Builder Tests
// ============================================================================

#[test]
fn test_descent_defaults() {
    let config = Descent::<f64>::new().config().unwrap();
    assert_eq!(config.objective, Objective::Quadratic);
    assert_eq!(config.method, GradientDescent);
    assert_eq!(config.learning_rate, 0.1);
    assert_eq!(config.tolerance, 1e-6);
    assert_eq!(config.max_steps, 100);
    assert_eq!(config.start, Vector2::new(-2.0, 1.5));
    assert_eq!(config, OptimizerConfig::default());
}

#[test]
fn test_descent_setters() {
    let opt = Descent::new()
        .objective(Objective::Himmelblau)
        .method(Newton)
        .learning_rate(0.25)
        .tolerance(1e-8)
        .max_steps(500)
        .start(0.5_f64, -0.5)
        .build()
        .unwrap();

    let c = opt.config();
    assert_eq!(c.objective, Objective::Himmelblau);
    assert_eq!(c.method, Newton);
    assert_eq!(c.learning_rate, 0.25);
    assert_eq!(c.max_steps, 500);
    assert_eq!(opt.state().path, vec![Vector2::new(0.5, -0.5)]);
    assert_eq!(opt.status(), Status::Running);
}

#[test]
fn test_descent_learning_rate_range() {
    for rate in [0.01, 0.5] {
        assert!(Descent::<f64>::new().learning_rate(rate).build().is_ok());
    }
    for rate in [0.0, 0.009, 0.51, -0.1, f64::NAN] {
        let err = Descent::<f64>::new().learning_rate(rate).build().unwrap_err();
        assert!(
            matches!(err, KernelError::InvalidLearningRate { min, max, .. } if min == 0.01 && max == 0.5),
            "rate {rate}"
        );
    }
}

#[test]
fn test_descent_rejects_bad_parameters() {
    assert!(matches!(
        Descent::<f64>::new().tolerance(0.0).build(),
        Err(KernelError::InvalidTolerance(_))
    ));
    assert!(matches!(
        Descent::<f64>::new().max_steps(0).build(),
        Err(KernelError::InvalidMaxSteps(0))
    ));
    assert!(matches!(
        Descent::<f64>::new().start(f64::INFINITY, 0.0).build(),
        Err(KernelError::InvalidNumericValue(_))
    ));
}

#[test]
fn test_descent_duplicate_parameter() {
    let err = Descent::<f64>::new()
        .method(Newton)
        .method(GradientDescent)
        .build()
        .unwrap_err();
    assert_eq!(err, KernelError::DuplicateParameter { parameter: "method" });

    let err = Descent::<f64>::new().start(0.0, 0.0).start(1.0, 1.0).build_pair().unwrap_err();
    assert_eq!(err, KernelError::DuplicateParameter { parameter: "start" });
}

#[test]
fn test_descent_build_pair() {
    let pair = Descent::new()
        .objective(Objective::Rosenbrock)
        .method(Newton)
        .learning_rate(0.01)
        .build_pair()
        .unwrap();
    assert_eq!(pair.gradient.config().method, GradientDescent);
    assert_eq!(pair.newton.config().method, Newton);
    assert_eq!(pair.gradient.config().objective, Objective::Rosenbrock);
    assert_eq!(pair.gradient.config().learning_rate, 0.01_f64);
}

#[test]
fn test_descent_f32() {
    let mut opt = Descent::<f32>::new().method(Newton).build().unwrap();
    let state = opt.run_to_end();
    assert_eq!(state.status, Status::Converged);
    assert!(state.position.length() < 1e-5);
}

// ============================================================================
// Gaussian Builder Tests
// ============================================================================

#[test]
fn test_gaussian_builder_defaults() {
    let g = GaussianBuilder::<f64>::new().build().unwrap();
    assert_eq!(g, Gaussian::standard());
}

#[test]
fn test_gaussian_builder_values() {
    let g = GaussianBuilder::new()
        .mean(1.0_f64, 2.0)
        .covariance(2.0, 0.3, 1.0)
        .build()
        .unwrap();
    assert_eq!(g.mean, Vector2::new(1.0, 2.0));
    assert_eq!(g.covariance, SymmetricMatrix2::new(2.0, 0.3, 1.0));
    assert!(!g.is_degenerate());
}

#[test]
fn test_gaussian_builder_rejects_invalid() {
    for (a, b, d) in [(1.0, 1.0, 1.0), (-1.0, 0.0, 1.0), (0.0, 0.0, 0.0)] {
        let err = GaussianBuilder::new().covariance(a, b, d).build().unwrap_err();
        assert!(matches!(err, KernelError::NotPositiveDefinite { .. }));
    }
    assert!(matches!(
        GaussianBuilder::new().covariance(f64::NAN, 0.0, 1.0).build(),
        Err(KernelError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        GaussianBuilder::new().mean(0.0, f64::NAN).build(),
        Err(KernelError::InvalidNumericValue(_))
    ));

    let err = GaussianBuilder::<f64>::new().mean(0.0, 0.0).mean(1.0, 1.0).build().unwrap_err();
    assert_eq!(err, KernelError::DuplicateParameter { parameter: "mean" });
}

// ============================================================================
// Checked Sampling Tests
// ============================================================================

#[test]
fn test_checked_sampling() {
    let ball = unit_ball::<f64>(NormKind::LInf, 16).unwrap();
    assert_eq!(ball.count(), 16);
    assert_eq!(
        unit_ball::<f64>(NormKind::L1, 0).unwrap_err(),
        KernelError::InvalidSampleCount(0)
    );

    let ellipse = Gaussian::<f64>::standard()
        .confidence_ellipse(ConfidenceLevel::P99)
        .unwrap();
    assert_eq!(ellipse_boundary(&ellipse, 12).unwrap().len(), 12);
    assert!(matches!(
        ellipse_boundary(&ellipse, 0),
        Err(KernelError::InvalidSampleCount(0))
    ));
}

#[test]
fn test_contours_with_custom_bisection() {
    let config = BisectionConfig {
        iterations: 40,
        tolerance: 1e-9,
        ..BisectionConfig::<f64>::density()
    };
    let g = Gaussian::<f64>::standard();
    let level = g.pdf(Vector2::new(1.0, 0.0));
    for p in g.density_contour_with(level, 0.5, &config) {
        assert!((p.length() - 1.0).abs() < 1e-4);
    }

    let q = QuadraticForm::new(SymmetricMatrix2::new(1.0_f64, 0.0, 1.0));
    let ring = q.level_set_with(4.0, 6, &BisectionConfig::quadratic());
    assert_eq!(ring.len(), 6);
}

// ============================================================================
// End-to-End Tests
// ============================================================================

#[test]
fn test_classifier_workflow() {
    let mut set = PointSet::new();
    for &(x, y) in &[(2.0, 2.0), (-2.0, -1.0), (3.0, 1.5), (-1.5, -2.5), (2.5, 3.0), (-3.0, -2.0)] {
        set.add(Vector2::new(x, y));
    }
    assert_eq!(set.count(Label::Positive), 3);
    assert_eq!(set.count(Label::Negative), 3);

    let svm = CentroidSeparator::fit(set.as_slice()).unwrap();
    assert_eq!(svm.accuracy(set.as_slice()), 1.0);

    let qda = Qda::fit(set.as_slice()).unwrap();
    for p in set.iter() {
        assert_eq!(qda.classify(p.position), p.label);
    }

    // Drawing the QDA map over a small canvas touches both classes.
    let vp = Viewport::centered(40.0_f64, 40.0, 4.0).unwrap();
    let labels: Vec<Label> = vp.pixel_centers(4).map(|(_, _, g)| qda.classify(g)).collect();
    assert!(labels.contains(&Label::Positive));
    assert!(labels.contains(&Label::Negative));
}

#[test]
fn test_animation_workflow() {
    let mut scheduler = FrameScheduler::new(0.25).unwrap();
    let handle = scheduler.register(
        Descent::new()
            .method(Newton)
            .learning_rate(0.5)
            .build_pair()
            .unwrap(),
    );
    scheduler.play(handle);
    while scheduler.is_playing(handle) {
        scheduler.frame(0.25);
    }

    let pair = scheduler.cancel(handle).unwrap();
    let (gd, newton) = pair.states();
    assert_eq!(newton.status, Status::Converged);
    assert!(gd.step < 100);
    assert!(scheduler.get(handle).is_none());
}
