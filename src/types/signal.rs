use serde::{Deserialize, Serialize};

/// Direction of a trading recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalDirection {
    Buy,
    Sell,
    Hold,
}

impl SignalDirection {
    /// Get display label for this direction.
    pub fn label(&self) -> &'static str {
        match self {
            SignalDirection::Buy => "Buy",
            SignalDirection::Sell => "Sell",
            SignalDirection::Hold => "Hold",
        }
    }
}

/// MACD values at the latest close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Macd {
    /// MACD line: EMA(12) - EMA(26).
    pub line: f64,
    /// Signal line: EMA(9) of the MACD line.
    pub signal: f64,
    /// MACD line minus signal line.
    pub histogram: f64,
}

/// Bollinger Band levels at the latest close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BollingerBands {
    /// Middle band plus two standard deviations.
    pub upper: f64,
    /// Middle band: SMA(20).
    pub middle: f64,
    /// Middle band minus two standard deviations.
    pub lower: f64,
}

/// Latest value of each indicator at evaluation time.
///
/// `None` means the series was too short for that indicator's window, or the
/// computation produced a non-finite value. An absent value is never
/// collapsed to zero, and absent fields are omitted from the serialized
/// form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    /// RSI(14), in [0, 100].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    /// MACD(12, 26, 9).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<Macd>,
    /// Bollinger Bands (20, 2.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerBands>,
    /// SMA(20).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma20: Option<f64>,
    /// EMA(12).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema12: Option<f64>,
}

/// A trading recommendation produced from one evaluation of a price series.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingSignal {
    /// Recommended direction.
    pub direction: SignalDirection,
    /// Certainty in the direction, 0-100.
    pub confidence: u8,
    /// Human-readable rationale for the direction.
    pub reason: String,
    /// Indicator values the recommendation was derived from.
    pub indicators: IndicatorSnapshot,
    /// Unix timestamp (milliseconds) when generated.
    pub timestamp: i64,
}

impl TradingSignal {
    /// Create a signal stamped with the current time.
    pub fn new(
        direction: SignalDirection,
        confidence: u8,
        reason: impl Into<String>,
        indicators: IndicatorSnapshot,
    ) -> Self {
        Self {
            direction,
            confidence,
            reason: reason.into(),
            indicators,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Neutral signal with every indicator absent.
    pub fn hold(confidence: u8, reason: impl Into<String>) -> Self {
        Self::new(
            SignalDirection::Hold,
            confidence,
            reason,
            IndicatorSnapshot::default(),
        )
    }
}
