use serde::{Deserialize, Serialize};

/// A single recorded price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    /// Observed price.
    pub price: f64,
    /// Trade volume for the period, if the feed reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    /// Unix timestamp (milliseconds) when observed.
    pub timestamp: i64,
}

/// An immutable copy of one symbol's recorded history, oldest first.
///
/// `volumes` is `Some` only when every recorded point carried a volume, so
/// the two sequences always align index for index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSnapshot {
    /// Symbol this history belongs to.
    pub symbol: String,
    /// Chronological prices, oldest first.
    pub prices: Vec<f64>,
    /// Chronological volumes aligned with `prices`, if fully covered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<f64>>,
    /// Unix timestamp (milliseconds) of the newest point.
    pub as_of: i64,
}

impl SeriesSnapshot {
    /// Number of recorded points.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// True when no points are recorded.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
