//! Unit tests for the volatility calculator

use chrono::{Duration, NaiveDate};
use stock_pulse::analysis::{classify_regime, compute_volatility};
use stock_pulse::models::{PricePoint, VolatilityRegime};

fn series(closes: &[f64]) -> Vec<PricePoint> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| PricePoint::new(start + Duration::days(i as i64), c))
        .collect()
}

#[test]
fn test_volatility_empty_series() {
    let result = compute_volatility(&[]);
    assert_eq!(result.volatility_percent, 0.0);
    assert_eq!(result.regime, VolatilityRegime::LowVolatility);
}

#[test]
fn test_volatility_single_point() {
    let result = compute_volatility(&series(&[250.0]));
    assert_eq!(result.volatility_percent, 0.0);
    assert_eq!(result.regime, VolatilityRegime::LowVolatility);
}

#[test]
fn test_volatility_divides_by_point_count() {
    // |+2%| + |-1.96%| over 3 points
    let result = compute_volatility(&series(&[100.0, 102.0, 100.0]));
    assert_eq!(result.volatility_percent, 1.32);
    assert_eq!(result.regime, VolatilityRegime::LowVolatility);
}

#[test]
fn test_volatility_high_regime() {
    let result = compute_volatility(&series(&[100.0, 106.0]));
    assert_eq!(result.volatility_percent, 3.0);
    assert_eq!(result.regime, VolatilityRegime::HighVolatility);
}

#[test]
fn test_regime_boundary_is_exclusive() {
    let at_threshold = compute_volatility(&series(&[100.0, 103.0]));
    assert_eq!(at_threshold.volatility_percent, 1.5);
    assert_eq!(at_threshold.regime, VolatilityRegime::LowVolatility);

    let above = compute_volatility(&series(&[100.0, 103.02]));
    assert_eq!(above.volatility_percent, 1.51);
    assert_eq!(above.regime, VolatilityRegime::HighVolatility);

    assert_eq!(classify_regime(1.5), VolatilityRegime::LowVolatility);
    assert_eq!(classify_regime(1.51), VolatilityRegime::HighVolatility);
}

#[test]
fn test_volatility_flat_series() {
    let result = compute_volatility(&series(&[50.0; 30]));
    assert_eq!(result.volatility_percent, 0.0);
    assert_eq!(result.regime, VolatilityRegime::LowVolatility);
}

#[test]
fn test_volatility_skips_zero_previous_close() {
    // First pair has a zero divisor and contributes nothing
    let result = compute_volatility(&series(&[0.0, 100.0, 101.0]));
    assert_eq!(result.volatility_percent, 0.33);
    assert!(result.volatility_percent.is_finite());
}

#[test]
fn test_volatility_ignores_forecast_rows() {
    let mut points = series(&[100.0, 110.0]);
    let last = points[1].date;
    points.push(PricePoint::forecast(last + Duration::days(1)));
    points.push(PricePoint::forecast(last + Duration::days(2)));

    let result = compute_volatility(&points);
    assert_eq!(result.volatility_percent, 5.0);
}

#[test]
fn test_volatility_does_not_mutate_input() {
    let points = series(&[100.0, 104.0, 99.0]);
    let before = points.clone();
    let _ = compute_volatility(&points);
    assert_eq!(points, before);
}
