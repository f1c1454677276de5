//! Trading signal generation via weighted indicator voting.
//!
//! Every indicator contributes at most one vote per side; RSI extremes count
//! double. The side that wins by at least two total votes becomes the
//! direction, anything else is a hold. A volume surge can only reinforce a
//! side that is already ahead.

use tracing::warn;

use crate::error::{EngineError, Result};
use crate::types::{IndicatorSnapshot, SignalDirection, TradingSignal};

use super::indicators;

/// Minimum series length for a full evaluation; shorter series yield a
/// neutral hold without any scoring.
pub const MIN_HISTORY: usize = 50;

/// Confidence cap, even for a unanimous vote.
const MAX_CONFIDENCE: f64 = 90.0;

/// Trailing window for the volume confirmation vote.
const VOLUME_WINDOW: usize = 20;

/// Current volume must exceed this multiple of the window average to count
/// as a surge.
const VOLUME_SPIKE_RATIO: f64 = 1.5;

/// Generate a trading signal from a chronological price series and an
/// optional aligned volume series.
///
/// Total over all inputs: series under [`MIN_HISTORY`] points return a
/// neutral hold, and an internal fault is replaced by the same neutral
/// shape with an error reason instead of propagating.
pub fn generate(prices: &[f64], volumes: Option<&[f64]>) -> TradingSignal {
    if prices.len() < MIN_HISTORY {
        return TradingSignal::hold(0, "insufficient data");
    }

    match evaluate(prices, volumes) {
        Ok(signal) => signal,
        Err(e) => {
            warn!("signal generation failed, returning neutral hold: {}", e);
            TradingSignal::hold(0, "error computing signal")
        }
    }
}

/// Fallible inner evaluation; `generate` maps errors to the neutral
/// fallback.
fn evaluate(prices: &[f64], volumes: Option<&[f64]>) -> Result<TradingSignal> {
    let current_price = *prices
        .last()
        .ok_or_else(|| EngineError::ComputationFault("empty series".to_string()))?;
    if !current_price.is_finite() {
        return Err(EngineError::ComputationFault(format!(
            "non-finite current price: {}",
            current_price
        )));
    }

    let snapshot = indicators::compute(prices);
    let votes = tally(&snapshot, current_price, volumes);
    Ok(decide(votes, snapshot))
}

/// Accumulated buy/sell votes with the rule labels that produced them.
#[derive(Debug, Default, PartialEq, Eq)]
struct Votes {
    buy: u32,
    sell: u32,
    buy_reasons: Vec<&'static str>,
    sell_reasons: Vec<&'static str>,
}

impl Votes {
    fn vote_buy(&mut self, weight: u32, reason: &'static str) {
        self.buy += weight;
        self.buy_reasons.push(reason);
    }

    fn vote_sell(&mut self, weight: u32, reason: &'static str) {
        self.sell += weight;
        self.sell_reasons.push(reason);
    }
}

/// Apply the voting rules to an indicator snapshot.
///
/// Rules run in a fixed order and absent indicators simply do not vote.
/// The volume check runs last because it only reinforces whichever side
/// already leads; it never breaks a tie or creates a new leader.
fn tally(snapshot: &IndicatorSnapshot, current_price: f64, volumes: Option<&[f64]>) -> Votes {
    let mut votes = Votes::default();

    // RSI extremes carry double weight
    if let Some(rsi) = snapshot.rsi {
        if rsi < 30.0 {
            votes.vote_buy(2, "oversold");
        } else if rsi > 70.0 {
            votes.vote_sell(2, "overbought");
        }
    }

    if let Some(macd) = snapshot.macd {
        if macd.line > macd.signal && macd.histogram > 0.0 {
            votes.vote_buy(1, "bullish crossover");
        } else if macd.line < macd.signal && macd.histogram < 0.0 {
            votes.vote_sell(1, "bearish crossover");
        }
    }

    // On a zero-width band both touches fire, which nets out to a tie
    if let Some(bands) = snapshot.bollinger {
        if current_price <= bands.lower {
            votes.vote_buy(1, "price at lower band");
        }
        if current_price >= bands.upper {
            votes.vote_sell(1, "price at upper band");
        }
    }

    if let (Some(sma20), Some(ema12)) = (snapshot.sma20, snapshot.ema12) {
        if current_price > sma20 && ema12 > sma20 {
            votes.vote_buy(1, "bullish trend");
        } else if current_price < sma20 && ema12 < sma20 {
            votes.vote_sell(1, "bearish trend");
        }
    }

    if let Some(volumes) = volumes {
        apply_volume_confirmation(&mut votes, volumes);
    }

    votes
}

/// Add one vote to the leading side when the current volume exceeds 1.5x
/// its trailing 20-point average. Ties stay ties.
fn apply_volume_confirmation(votes: &mut Votes, volumes: &[f64]) {
    if volumes.len() < VOLUME_WINDOW {
        return;
    }

    let window = &volumes[volumes.len() - VOLUME_WINDOW..];
    let average = window.iter().sum::<f64>() / VOLUME_WINDOW as f64;
    let current = window[VOLUME_WINDOW - 1];

    if current > VOLUME_SPIKE_RATIO * average {
        if votes.buy > votes.sell {
            votes.vote_buy(1, "volume surge");
        } else if votes.sell > votes.buy {
            votes.vote_sell(1, "volume surge");
        }
    }
}

/// Turn a vote tally into a directional signal.
///
/// A direction needs a strict majority and at least two votes of its own;
/// everything else is a hold at even confidence.
fn decide(votes: Votes, indicators: IndicatorSnapshot) -> TradingSignal {
    let total = votes.buy + votes.sell;

    if votes.buy > votes.sell && votes.buy >= 2 {
        TradingSignal::new(
            SignalDirection::Buy,
            scaled_confidence(votes.buy, total),
            votes.buy_reasons.join(", "),
            indicators,
        )
    } else if votes.sell > votes.buy && votes.sell >= 2 {
        TradingSignal::new(
            SignalDirection::Sell,
            scaled_confidence(votes.sell, total),
            votes.sell_reasons.join(", "),
            indicators,
        )
    } else {
        TradingSignal::new(SignalDirection::Hold, 50, "mixed signals", indicators)
    }
}

/// Winning share of the vote as a 0-100 confidence, capped at 90.
fn scaled_confidence(winner: u32, total: u32) -> u8 {
    let share = winner as f64 / total as f64 * 100.0;
    share.min(MAX_CONFIDENCE).round() as u8
}
