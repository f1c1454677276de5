//! Technical indicator implementations.
//!
//! Each module computes one indicator as a pure function of a chronological
//! price series (oldest first), returning `None` when the series is shorter
//! than the indicator's window. `compute` assembles the full snapshot and
//! degrades any non-finite result to absent instead of letting it poison
//! downstream scoring.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

use crate::types::IndicatorSnapshot;

/// Compute the latest value of every indicator for a price series.
///
/// Pure and total: a field an indicator cannot produce for this series is
/// `None`, and the call itself never fails.
pub fn compute(prices: &[f64]) -> IndicatorSnapshot {
    IndicatorSnapshot {
        rsi: rsi::calculate(prices).filter(|v| v.is_finite()),
        macd: macd::calculate(prices)
            .filter(|m| m.line.is_finite() && m.signal.is_finite() && m.histogram.is_finite()),
        bollinger: bollinger::calculate(prices)
            .filter(|b| b.upper.is_finite() && b.middle.is_finite() && b.lower.is_finite()),
        sma20: sma::calculate(prices).filter(|v| v.is_finite()),
        ema12: ema::calculate(prices).filter(|v| v.is_finite()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(count: usize) -> Vec<f64> {
        (1..=count).map(|i| i as f64).collect()
    }

    // ===== Snapshot Assembly Tests =====

    #[test]
    fn test_compute_empty_series_all_absent() {
        let snapshot = compute(&[]);
        assert_eq!(snapshot, IndicatorSnapshot::default());
    }

    #[test]
    fn test_compute_field_thresholds() {
        // Each indicator appears exactly when its window is covered
        let s12 = compute(&ramp(12));
        assert!(s12.ema12.is_some());
        assert!(s12.rsi.is_none());
        assert!(s12.sma20.is_none());
        assert!(s12.bollinger.is_none());
        assert!(s12.macd.is_none());

        let s15 = compute(&ramp(15));
        assert!(s15.rsi.is_some());

        let s20 = compute(&ramp(20));
        assert!(s20.sma20.is_some());
        assert!(s20.bollinger.is_some());
        assert!(s20.macd.is_none());

        let s34 = compute(&ramp(34));
        assert!(s34.macd.is_none());

        let s35 = compute(&ramp(35));
        assert!(s35.macd.is_some());
    }

    #[test]
    fn test_compute_is_deterministic() {
        let prices = ramp(60);
        assert_eq!(compute(&prices), compute(&prices));
    }

    #[test]
    fn test_compute_non_finite_input_degrades_to_absent() {
        let mut prices = ramp(60);
        prices[30] = f64::NAN;
        let snapshot = compute(&prices);
        // NaN propagates through every window that includes it
        assert!(snapshot.sma20.is_none() || snapshot.sma20.unwrap().is_finite());
        assert!(snapshot.rsi.is_none() || snapshot.rsi.unwrap().is_finite());
        if let Some(macd) = snapshot.macd {
            assert!(macd.line.is_finite());
        }
    }

    // ===== Numeric Relation Tests =====

    #[test]
    fn test_sma_exact_mean_of_window() {
        // Trailing 20 of 1..=60 is 41..=60, mean 50.5
        let sma = sma::calculate(&ramp(60)).unwrap();
        assert_eq!(sma, 50.5);
    }

    #[test]
    fn test_ema_tracks_last_values_closer_than_sma() {
        let prices = ramp(60);
        let ema = ema::calculate(&prices).unwrap();
        let sma = sma::calculate(&prices).unwrap();
        assert!(ema > sma, "EMA(12) should sit above SMA(20) on a rising ramp");
    }

    #[test]
    fn test_ema_series_seeded_with_sma() {
        let series = ema::ema_series(&[2.0, 4.0, 6.0, 8.0], 3);
        assert_eq!(series[0], 4.0);
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_macd_histogram_is_line_minus_signal() {
        let macd = macd::calculate(&ramp(60)).unwrap();
        assert_eq!(macd.histogram, macd.line - macd.signal);
    }

    #[test]
    fn test_macd_positive_on_rising_series() {
        let macd = macd::calculate(&ramp(60)).unwrap();
        assert!(macd.line > 0.0);
        assert!(macd.histogram > 0.0);
    }

    #[test]
    fn test_bollinger_band_ordering() {
        let bands = bollinger::calculate(&ramp(60)).unwrap();
        assert!(bands.lower < bands.middle);
        assert!(bands.middle < bands.upper);
        assert_eq!(bands.middle, 50.5);
    }

    #[test]
    fn test_bollinger_flat_window_collapses() {
        let bands = bollinger::calculate(&[10.0; 25]).unwrap();
        assert_eq!(bands.upper, 10.0);
        assert_eq!(bands.middle, 10.0);
        assert_eq!(bands.lower, 10.0);
    }
}
