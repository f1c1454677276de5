//! Simple Moving Average (SMA) indicator.

/// Period for the snapshot's SMA field.
const PERIOD: usize = 20;

/// Latest SMA(20) of the price series.
pub fn calculate(prices: &[f64]) -> Option<f64> {
    mean_of_last(prices, PERIOD)
}

/// Mean of the trailing `period` values.
pub(crate) fn mean_of_last(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}
