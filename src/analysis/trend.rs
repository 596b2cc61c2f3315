//! BUY/SELL/HOLD interpretation of price change

use crate::common::math;
use crate::models::{PricePoint, SignalAction, SignalThresholds, TrendSignal};

/// Calculate the trend signal over a window
///
/// Change = (last - first) / first * 100, rounded to 2 decimals, where
/// first and last are the outermost historical closes of the window.
pub fn compute_signal(series: &[PricePoint], thresholds: SignalThresholds) -> TrendSignal {
    let mut closes = series.iter().filter_map(PricePoint::historical_close);
    let first = closes.next();
    let last = closes.last();

    let (Some(first), Some(last)) = (first, last) else {
        return TrendSignal::default();
    };

    match math::percent_change(first, last) {
        Some(change) => signal_from_change(math::round_to(change, 2), thresholds),
        None => TrendSignal::default(),
    }
}

/// Trend signal for a single day-over-day fractional change (0.012 = +1.2%).
pub fn compute_daily_signal(fractional_change: f64, thresholds: SignalThresholds) -> TrendSignal {
    if !fractional_change.is_finite() {
        return TrendSignal::default();
    }
    signal_from_change(math::round_to(fractional_change * 100.0, 2), thresholds)
}

/// Apply exclusive thresholds to an already rounded percentage change.
pub fn signal_from_change(change_percent: f64, thresholds: SignalThresholds) -> TrendSignal {
    let action = if change_percent > thresholds.buy_above {
        SignalAction::Buy
    } else if change_percent < thresholds.sell_below {
        SignalAction::Sell
    } else {
        SignalAction::Hold
    };

    TrendSignal {
        action,
        change_percent,
        is_positive: change_percent >= 0.0,
    }
}
