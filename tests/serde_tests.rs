#![cfg(feature = "serde")]
//! Serialization of value types.

use planar_rs::prelude::*;

#[test]
fn test_labeled_points_json() {
    let points = vec![LabeledPoint::positive(1.0_f64, 2.0), LabeledPoint::negative(-0.5, 0.25)];
    let json = serde_json::to_string(&points).unwrap();
    assert!(json.contains("\"Positive\""));
    let back: Vec<LabeledPoint<f64>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, points);
}

#[test]
fn test_fitted_models_json() {
    let points = vec![
        LabeledPoint::positive(2.0_f64, 2.0),
        LabeledPoint::positive(3.0, 1.5),
        LabeledPoint::positive(2.5, 3.0),
        LabeledPoint::negative(-2.0, -1.0),
        LabeledPoint::negative(-1.5, -2.5),
        LabeledPoint::negative(-3.0, -2.0),
    ];
    let qda = Qda::fit(&points).unwrap();
    let back: Qda<f64> = serde_json::from_str(&serde_json::to_string(&qda).unwrap()).unwrap();
    for label in [Label::Positive, Label::Negative] {
        let (a, b) = (back.params(label), qda.params(label));
        assert!((a.mean - b.mean).length() < 1e-12);
        assert!((a.covariance.b - b.covariance.b).abs() < 1e-12);
        assert!((a.prior - b.prior).abs() < 1e-12);
    }

    let svm = CentroidSeparator::fit(&points).unwrap();
    let value = serde_json::to_value(svm).unwrap();
    assert!(value.get("w").is_some());
    assert!(value.get("b").is_some());
}

#[test]
fn test_optimizer_state_json() {
    let mut opt = Descent::<f64>::new().method(Newton).build().unwrap();
    let state = opt.run_to_end().clone();
    let value = serde_json::to_value(&state).unwrap();
    assert_eq!(value["status"], "Converged");
    assert_eq!(value["step"], 1);
    assert_eq!(value["path"].as_array().unwrap().len(), 2);

    let config: OptimizerConfig<f64> =
        serde_json::from_value(serde_json::to_value(opt.config()).unwrap()).unwrap();
    assert_eq!(&config, opt.config());
}
