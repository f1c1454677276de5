//! Exponential Moving Average (EMA) indicator.

/// Period for the snapshot's EMA field.
const PERIOD: usize = 12;

/// Latest EMA(12) of the price series.
pub fn calculate(prices: &[f64]) -> Option<f64> {
    latest(prices, PERIOD)
}

/// Latest EMA of the series over an arbitrary period.
pub(crate) fn latest(values: &[f64], period: usize) -> Option<f64> {
    ema_series(values, period).last().copied()
}

/// Calculate the full EMA series for `values` over `period`.
///
/// The first element is the SMA of the seed window; each later element
/// applies the standard 2/(period+1) multiplier. Returns an empty vec when
/// there are fewer than `period` values.
pub(crate) fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut series = Vec::with_capacity(values.len() - period + 1);

    let mut current: f64 = values.iter().take(period).sum::<f64>() / period as f64;
    series.push(current);

    for value in values.iter().skip(period) {
        current = (value - current) * multiplier + current;
        series.push(current);
    }

    series
}
