//! Relative Strength Index (RSI) indicator.

const PERIOD: usize = 14;

/// Latest RSI(14) of the price series, in [0, 100].
///
/// Wilder smoothing: the averages are seeded with the simple mean of the
/// first 14 gains/losses, then smoothed across every remaining change.
/// Needs at least 15 prices. A series with no movement in either direction
/// reads as a neutral 50 rather than a degenerate 100.
pub fn calculate(prices: &[f64]) -> Option<f64> {
    if prices.len() < PERIOD + 1 {
        return None;
    }

    let mut gains = Vec::with_capacity(prices.len() - 1);
    let mut losses = Vec::with_capacity(prices.len() - 1);

    for pair in prices.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(-change);
        }
    }

    // Seed with simple averages, then smooth across the rest
    let mut avg_gain: f64 = gains.iter().take(PERIOD).sum::<f64>() / PERIOD as f64;
    let mut avg_loss: f64 = losses.iter().take(PERIOD).sum::<f64>() / PERIOD as f64;

    for i in PERIOD..gains.len() {
        avg_gain = (avg_gain * (PERIOD - 1) as f64 + gains[i]) / PERIOD as f64;
        avg_loss = (avg_loss * (PERIOD - 1) as f64 + losses[i]) / PERIOD as f64;
    }

    if avg_gain == 0.0 && avg_loss == 0.0 {
        return Some(50.0);
    }
    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uptrend(count: usize) -> Vec<f64> {
        (0..count).map(|i| 100.0 + i as f64 * 1.5).collect()
    }

    fn downtrend(count: usize) -> Vec<f64> {
        (0..count).map(|i| 200.0 - i as f64 * 1.5).collect()
    }

    #[test]
    fn test_rsi_insufficient_data() {
        assert!(calculate(&uptrend(14)).is_none());
        assert!(calculate(&uptrend(15)).is_some());
    }

    #[test]
    fn test_rsi_pure_uptrend_maxes_out() {
        let rsi = calculate(&uptrend(50)).unwrap();
        assert_eq!(rsi, 100.0, "series with no losses should read 100");
    }

    #[test]
    fn test_rsi_pure_downtrend_bottoms_out() {
        let rsi = calculate(&downtrend(50)).unwrap();
        assert_eq!(rsi, 0.0, "series with no gains should read 0");
    }

    #[test]
    fn test_rsi_flat_series_is_neutral() {
        let rsi = calculate(&[42.0; 50]).unwrap();
        assert_eq!(rsi, 50.0);
    }

    #[test]
    fn test_rsi_value_range() {
        let mut prices = uptrend(30);
        prices.extend(downtrend(30));
        let rsi = calculate(&prices).unwrap();
        assert!((0.0..=100.0).contains(&rsi), "RSI out of range: {}", rsi);
    }

    #[test]
    fn test_rsi_mixed_series_between_extremes() {
        // Alternating up/down keeps gains and losses both non-zero
        let prices: Vec<f64> = (0..40)
            .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
            .collect();
        let rsi = calculate(&prices).unwrap();
        assert!(rsi > 0.0 && rsi < 100.0);
    }
}
