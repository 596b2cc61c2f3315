//! Volatility index and regime classification

use crate::common::math;
use crate::models::{PricePoint, VolatilityRegime, VolatilityResult};

/// Volatility above this percentage is classified as high.
pub const HIGH_VOLATILITY_THRESHOLD: f64 = 1.5;

/// Calculate the volatility index of a price series
///
/// Volatility = sum(|(close[i] - close[i-1]) / close[i-1]|) / n * 100
///
/// `n` is the number of historical points, not the number of pairs. Rows
/// without a close are ignored, and a pair whose previous close is zero
/// contributes nothing.
pub fn compute_volatility(series: &[PricePoint]) -> VolatilityResult {
    let closes: Vec<f64> = series.iter().filter_map(PricePoint::historical_close).collect();
    if closes.len() < 2 {
        return VolatilityResult::default();
    }

    let sum_change: f64 = closes
        .windows(2)
        .filter_map(|pair| math::abs_return(pair[0], pair[1]))
        .sum();

    let volatility_percent = math::round_to(sum_change / closes.len() as f64 * 100.0, 2);

    VolatilityResult {
        volatility_percent,
        regime: classify_regime(volatility_percent),
    }
}

/// Map a volatility percentage to its regime (threshold is exclusive).
pub fn classify_regime(volatility_percent: f64) -> VolatilityRegime {
    if volatility_percent > HIGH_VOLATILITY_THRESHOLD {
        VolatilityRegime::HighVolatility
    } else {
        VolatilityRegime::LowVolatility
    }
}
