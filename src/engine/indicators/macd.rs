//! MACD (Moving Average Convergence Divergence) indicator.

use crate::types::Macd;

use super::ema;

const FAST_PERIOD: usize = 12;
const SLOW_PERIOD: usize = 26;
const SIGNAL_PERIOD: usize = 9;

/// Latest MACD(12, 26, 9) of the price series.
///
/// MACD line = EMA(12) - EMA(26), signal line = EMA(9) of the MACD line,
/// histogram = line - signal. Needs at least 35 prices so the signal line
/// has a full seed window.
pub fn calculate(prices: &[f64]) -> Option<Macd> {
    if prices.len() < SLOW_PERIOD + SIGNAL_PERIOD {
        return None;
    }

    let fast_ema = ema::ema_series(prices, FAST_PERIOD);
    let slow_ema = ema::ema_series(prices, SLOW_PERIOD);
    if fast_ema.is_empty() || slow_ema.is_empty() {
        return None;
    }

    // The fast EMA starts earlier; align both series on the slow start
    let offset = SLOW_PERIOD - FAST_PERIOD;
    let macd_line: Vec<f64> = fast_ema
        .iter()
        .skip(offset)
        .zip(slow_ema.iter())
        .map(|(fast, slow)| fast - slow)
        .collect();

    if macd_line.len() < SIGNAL_PERIOD {
        return None;
    }

    let signal_line = ema::ema_series(&macd_line, SIGNAL_PERIOD);

    let line = *macd_line.last()?;
    let signal = *signal_line.last()?;

    Some(Macd {
        line,
        signal,
        histogram: line - signal,
    })
}
