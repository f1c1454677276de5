//! Bollinger Bands indicator.

use crate::engine::population_std_dev;
use crate::types::BollingerBands;

use super::sma;

const PERIOD: usize = 20;
const BAND_WIDTH: f64 = 2.0;

/// Latest Bollinger Bands (20, 2.0) of the price series.
///
/// The middle band is the SMA(20); the outer bands sit two population
/// standard deviations either side of it. On a flat window all three bands
/// collapse onto the price.
pub fn calculate(prices: &[f64]) -> Option<BollingerBands> {
    if prices.len() < PERIOD {
        return None;
    }

    let middle = sma::mean_of_last(prices, PERIOD)?;
    let window = &prices[prices.len() - PERIOD..];
    let std_dev = population_std_dev(window);

    Some(BollingerBands {
        upper: middle + BAND_WIDTH * std_dev,
        middle,
        lower: middle - BAND_WIDTH * std_dev,
    })
}
