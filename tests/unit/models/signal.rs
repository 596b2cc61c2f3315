//! Unit tests for signal threshold validation

use stock_pulse::models::{SignalThresholds, ThresholdError};

#[test]
fn test_builtin_thresholds_are_valid() {
    assert!(SignalThresholds::window().validate().is_ok());
    assert!(SignalThresholds::daily().validate().is_ok());
    assert!(SignalThresholds::new(0.0, 0.0).validate().is_ok());
}

#[test]
fn test_inverted_thresholds_rejected() {
    let err = SignalThresholds::new(-10.0, 10.0).validate().unwrap_err();
    assert_eq!(
        err,
        ThresholdError::Inverted {
            buy_above: -10.0,
            sell_below: 10.0
        }
    );
}

#[test]
fn test_non_finite_thresholds_rejected() {
    assert_eq!(
        SignalThresholds::new(f64::NAN, -5.0).validate(),
        Err(ThresholdError::NotFinite)
    );
    assert_eq!(
        SignalThresholds::new(5.0, f64::NEG_INFINITY).validate(),
        Err(ThresholdError::NotFinite)
    );
}
