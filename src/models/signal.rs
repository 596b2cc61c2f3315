//! Derived metric records produced by the analysis engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::news::Sentiment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolatilityRegime {
    LowVolatility,
    HighVolatility,
}

impl VolatilityRegime {
    pub fn label(&self) -> &'static str {
        match self {
            VolatilityRegime::LowVolatility => "Low Volatility",
            VolatilityRegime::HighVolatility => "High Volatility",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityResult {
    pub volatility_percent: f64,
    pub regime: VolatilityRegime,
}

impl Default for VolatilityResult {
    fn default() -> Self {
        Self {
            volatility_percent: 0.0,
            regime: VolatilityRegime::LowVolatility,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalAction {
    Buy,
    Sell,
    Hold,
}

impl SignalAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalAction::Buy => "BUY",
            SignalAction::Sell => "SELL",
            SignalAction::Hold => "HOLD",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SignalAction::Buy => "#34D399",
            SignalAction::Sell => "#F87171",
            SignalAction::Hold => "#FACC15",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSignal {
    pub action: SignalAction,
    pub change_percent: f64,
    pub is_positive: bool,
}

impl Default for TrendSignal {
    fn default() -> Self {
        Self {
            action: SignalAction::Hold,
            change_percent: 0.0,
            is_positive: true,
        }
    }
}

/// Exclusive percentage bounds turning a change into an action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalThresholds {
    pub buy_above: f64,
    pub sell_below: f64,
}

impl SignalThresholds {
    pub fn new(buy_above: f64, sell_below: f64) -> Self {
        Self {
            buy_above,
            sell_below,
        }
    }

    /// Bounds for a multi-day window (typically the trailing 30 points).
    pub fn window() -> Self {
        Self::new(5.0, -5.0)
    }

    /// Bounds for a single day-over-day change.
    pub fn daily() -> Self {
        Self::new(1.0, -1.0)
    }

    /// Both bounds must be finite and `sell_below` must not exceed
    /// `buy_above`, otherwise a change could be both a buy and a sell.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        if !self.buy_above.is_finite() || !self.sell_below.is_finite() {
            return Err(ThresholdError::NotFinite);
        }
        if self.sell_below > self.buy_above {
            return Err(ThresholdError::Inverted {
                buy_above: self.buy_above,
                sell_below: self.sell_below,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ThresholdError {
    #[error("signal thresholds must be finite numbers")]
    NotFinite,

    #[error("sell threshold {sell_below} exceeds buy threshold {buy_above}")]
    Inverted { buy_above: f64, sell_below: f64 },
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self::window()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentShare {
    pub label: &'static str,
    pub sentiment: Sentiment,
    pub percent: u32,
}

/// Percentage distribution of news across labels, always ordered
/// Pos, Neg, Neu. Empty when there is no news.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SentimentBreakdown {
    pub shares: Vec<SentimentShare>,
}

impl SentimentBreakdown {
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn percent_of(&self, sentiment: Sentiment) -> Option<u32> {
        self.shares
            .iter()
            .find(|s| s.sentiment == sentiment)
            .map(|s| s.percent)
    }
}
