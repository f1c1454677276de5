//! Volatility-based risk assessment.
//!
//! Risk is the population standard deviation of the series' period returns,
//! expressed as a percentage and bucketed into an ordered tier. A signal the
//! generator was not confident in escalates the tier by one, since acting
//! on a shaky signal is riskier than the raw volatility suggests.

use tracing::warn;

use crate::engine::population_std_dev;
use crate::error::{EngineError, Result};
use crate::types::{RiskAssessment, RiskLevel, TradingSignal};

/// Signal confidence below this escalates the tier by one.
const LOW_CONFIDENCE_THRESHOLD: u8 = 60;

/// Tier boundaries, in percent volatility.
const MEDIUM_VOLATILITY_PCT: f64 = 2.0;
const HIGH_VOLATILITY_PCT: f64 = 5.0;

/// Assess the risk of acting on `signal` given the price series it was
/// generated from.
///
/// Total over all inputs: a series that cannot be assessed (fewer than two
/// prices, or returns that degenerate to non-finite values) yields the
/// maximum-caution fallback instead of an error.
pub fn assess(prices: &[f64], signal: &TradingSignal) -> RiskAssessment {
    match evaluate(prices, signal) {
        Ok(assessment) => assessment,
        Err(e) => {
            warn!("risk assessment failed, returning maximum caution: {}", e);
            RiskAssessment::fallback()
        }
    }
}

fn evaluate(prices: &[f64], signal: &TradingSignal) -> Result<RiskAssessment> {
    if prices.len() < 2 {
        return Err(EngineError::InsufficientData {
            need: 2,
            have: prices.len(),
        });
    }

    let returns: Vec<f64> = prices
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) / pair[0])
        .collect();

    let volatility = 100.0 * population_std_dev(&returns);
    if !volatility.is_finite() {
        return Err(EngineError::ComputationFault(format!(
            "non-finite volatility from {} returns",
            returns.len()
        )));
    }

    let base = if volatility < MEDIUM_VOLATILITY_PCT {
        RiskLevel::Low
    } else if volatility < HIGH_VOLATILITY_PCT {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };

    let escalated = signal.confidence < LOW_CONFIDENCE_THRESHOLD;
    let risk_level = if escalated { base.escalate() } else { base };

    let mut recommendation = tier_guidance(risk_level).to_string();
    if escalated {
        recommendation.push_str("; signal confidence is low, treat with extra caution");
    }

    Ok(RiskAssessment {
        risk_level,
        volatility,
        recommendation,
    })
}

/// Boilerplate guidance for a tier.
fn tier_guidance(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "Low volatility environment, suitable for standard position sizing",
        RiskLevel::Medium => "Moderate volatility, size positions carefully and use stop losses",
        RiskLevel::High => "High volatility detected, reduce exposure and expect sharp swings",
    }
}
