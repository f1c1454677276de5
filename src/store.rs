//! Bounded in-memory price history per symbol.

use std::collections::VecDeque;

use dashmap::DashMap;
use tracing::debug;

use crate::types::{PricePoint, SeriesSnapshot};

/// Default per-symbol history bound.
pub const DEFAULT_CAPACITY: usize = 500;

/// Per-symbol ring of recorded points. Oldest points fall off the front
/// once the bound is reached.
#[derive(Debug)]
struct SeriesBuffer {
    points: VecDeque<PricePoint>,
    max_points: usize,
}

impl SeriesBuffer {
    fn new(max_points: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(max_points),
            max_points,
        }
    }

    fn push(&mut self, point: PricePoint) {
        self.points.push_back(point);
        while self.points.len() > self.max_points {
            self.points.pop_front();
        }
    }
}

/// Thread-safe store of bounded, chronological price series.
///
/// Whatever feeds it (a poller, a websocket, a test fixture) lives outside
/// the engine. The store guarantees that every snapshot handed out is an
/// immutable oldest-first copy, and that a volume series is only present
/// when it aligns with the prices index for index.
pub struct SeriesStore {
    data: DashMap<String, SeriesBuffer>,
    capacity: usize,
}

impl SeriesStore {
    /// Create a store with the default per-symbol capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a store bounding each symbol to `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: DashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record one observation for a symbol.
    ///
    /// Non-finite or non-positive prices are dropped so the series only
    /// holds values the indicator math is defined over. A negative or
    /// non-finite volume is recorded as no volume.
    pub fn record(&self, symbol: &str, price: f64, volume: Option<f64>, timestamp: i64) {
        if !price.is_finite() || price <= 0.0 {
            debug!("dropping invalid price {} for {}", price, symbol);
            return;
        }

        let point = PricePoint {
            price,
            volume: volume.filter(|v| v.is_finite() && *v >= 0.0),
            timestamp,
        };

        self.data
            .entry(symbol.to_lowercase())
            .or_insert_with(|| SeriesBuffer::new(self.capacity))
            .push(point);
    }

    /// Copy out a symbol's history, oldest first. `None` for an unknown or
    /// empty symbol.
    pub fn snapshot(&self, symbol: &str) -> Option<SeriesSnapshot> {
        let entry = self.data.get(&symbol.to_lowercase())?;
        let buffer = entry.value();
        let last = buffer.points.back()?;

        let prices: Vec<f64> = buffer.points.iter().map(|p| p.price).collect();
        let volumes: Option<Vec<f64>> = buffer.points.iter().map(|p| p.volume).collect();

        Some(SeriesSnapshot {
            symbol: entry.key().clone(),
            prices,
            volumes,
            as_of: last.timestamp,
        })
    }

    /// Number of points currently held for a symbol.
    pub fn len(&self, symbol: &str) -> usize {
        self.data
            .get(&symbol.to_lowercase())
            .map(|entry| entry.points.len())
            .unwrap_or(0)
    }

    /// All tracked symbols.
    pub fn symbols(&self) -> Vec<String> {
        self.data.iter().map(|entry| entry.key().clone()).collect()
    }
}

impl Default for SeriesStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_snapshot() {
        let store = SeriesStore::new();
        store.record("BTC", 100.0, Some(1_000.0), 1);
        store.record("btc", 101.0, Some(1_100.0), 2);

        let snap = store.snapshot("btc").expect("snapshot for recorded symbol");
        assert_eq!(snap.symbol, "btc");
        assert_eq!(snap.prices, vec![100.0, 101.0]);
        assert_eq!(snap.volumes, Some(vec![1_000.0, 1_100.0]));
        assert_eq!(snap.as_of, 2);
    }

    #[test]
    fn test_snapshot_unknown_symbol() {
        let store = SeriesStore::new();
        assert!(store.snapshot("eth").is_none());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let store = SeriesStore::with_capacity(3);
        for i in 0..5 {
            store.record("btc", 100.0 + i as f64, None, i);
        }

        let snap = store.snapshot("btc").unwrap();
        assert_eq!(snap.prices, vec![102.0, 103.0, 104.0]);
        assert_eq!(store.len("btc"), 3);
        assert_eq!(snap.as_of, 4);
    }

    #[test]
    fn test_invalid_prices_dropped() {
        let store = SeriesStore::new();
        store.record("btc", 0.0, None, 1);
        store.record("btc", -5.0, None, 2);
        store.record("btc", f64::NAN, None, 3);
        store.record("btc", f64::INFINITY, None, 4);
        assert_eq!(store.len("btc"), 0);

        store.record("btc", 50.0, None, 5);
        assert_eq!(store.len("btc"), 1);
    }

    #[test]
    fn test_partial_volume_disables_volume_series() {
        let store = SeriesStore::new();
        store.record("btc", 100.0, Some(1_000.0), 1);
        store.record("btc", 101.0, None, 2);

        let snap = store.snapshot("btc").unwrap();
        assert_eq!(snap.prices.len(), 2);
        assert_eq!(snap.volumes, None);
    }

    #[test]
    fn test_invalid_volume_recorded_as_none() {
        let store = SeriesStore::new();
        store.record("btc", 100.0, Some(f64::NAN), 1);
        store.record("btc", 101.0, Some(-10.0), 2);

        let snap = store.snapshot("btc").unwrap();
        assert_eq!(snap.prices.len(), 2);
        assert_eq!(snap.volumes, None);
    }

    #[test]
    fn test_symbols_lists_tracked() {
        let store = SeriesStore::new();
        store.record("btc", 100.0, None, 1);
        store.record("ETH", 200.0, None, 1);

        let mut symbols = store.symbols();
        symbols.sort();
        assert_eq!(symbols, vec!["btc", "eth"]);
    }
}
