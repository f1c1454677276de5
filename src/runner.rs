//! Periodic evaluation of every tracked symbol.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio::time::interval;
use tracing::{debug, info};

use crate::engine::{generator, risk};
use crate::store::SeriesStore;
use crate::types::{RiskAssessment, TradingSignal};

/// One completed pipeline run for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Symbol this evaluation is for.
    pub symbol: String,
    /// Trading recommendation.
    pub signal: TradingSignal,
    /// Risk classification for acting on it.
    pub risk: RiskAssessment,
}

/// Runs the signal pipeline for every tracked symbol on a fixed cadence.
///
/// Each tick re-evaluates from scratch and the fresh evaluation overwrites
/// the cached one, so a consumer never reads a result older than the last
/// completed tick.
pub struct SignalRunner {
    store: Arc<SeriesStore>,
    latest: DashMap<String, Evaluation>,
    tick_interval: Duration,
    /// Shutdown signal sender
    shutdown_tx: broadcast::Sender<()>,
    /// Whether the evaluation loop is active
    running: RwLock<bool>,
}

impl SignalRunner {
    /// Create a new runner over a series store.
    pub fn new(store: Arc<SeriesStore>, tick_interval: Duration) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            store,
            latest: DashMap::new(),
            tick_interval,
            shutdown_tx,
            running: RwLock::new(false),
        }
    }

    /// Run the evaluation loop until `stop` is called. Returns immediately
    /// if the loop is already active.
    pub async fn start(&self) {
        if *self.running.read().unwrap() {
            return;
        }

        *self.running.write().unwrap() = true;
        info!("Signal runner started (tick every {:?})", self.tick_interval);

        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let mut ticker = interval(self.tick_interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick();
                }
                _ = shutdown_rx.recv() => {
                    info!("Signal runner received shutdown signal");
                    break;
                }
            }
        }
    }

    /// Stop the evaluation loop. Safe to call when not running.
    pub fn stop(&self) {
        if !*self.running.read().unwrap() {
            return;
        }

        *self.running.write().unwrap() = false;
        let _ = self.shutdown_tx.send(());
        info!("Signal runner stopped");
    }

    /// Whether the evaluation loop is active.
    pub fn is_running(&self) -> bool {
        *self.running.read().unwrap()
    }

    /// Evaluate every tracked symbol once.
    ///
    /// Also usable on demand without the loop; each symbol's evaluation is
    /// independent, so a symbol that fails to snapshot never blocks the
    /// others.
    pub fn tick(&self) {
        for symbol in self.store.symbols() {
            if let Some(evaluation) = self.evaluate_symbol(&symbol) {
                self.latest.insert(symbol, evaluation);
            }
        }
    }

    /// Latest cached evaluation for a symbol, if it has been evaluated.
    pub fn latest(&self, symbol: &str) -> Option<Evaluation> {
        self.latest
            .get(&symbol.to_lowercase())
            .map(|entry| entry.clone())
    }

    fn evaluate_symbol(&self, symbol: &str) -> Option<Evaluation> {
        let series = self.store.snapshot(symbol)?;

        let signal = generator::generate(&series.prices, series.volumes.as_deref());
        let assessment = risk::assess(&series.prices, &signal);

        debug!(
            "{}: {} ({}% confidence), {} risk at {:.2}% volatility",
            symbol,
            signal.direction.label(),
            signal.confidence,
            assessment.risk_level.label(),
            assessment.volatility
        );

        // Promote direction changes to info
        if let Some(previous) = self.latest.get(symbol) {
            if previous.signal.direction != signal.direction {
                info!(
                    "{}: signal changed {} -> {}",
                    symbol,
                    previous.signal.direction.label(),
                    signal.direction.label()
                );
            }
        }

        Some(Evaluation {
            symbol: symbol.to_string(),
            signal,
            risk: assessment,
        })
    }
}
