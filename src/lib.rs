//! Augur - deterministic technical-signal engine
//!
//! Computes classical technical indicators over a chronological price
//! series, fuses them into a buy/sell/hold recommendation through weighted
//! voting, and classifies the volatility of acting on it into an ordered
//! risk tier. The engine itself performs no I/O; [`store::SeriesStore`] and
//! [`runner::SignalRunner`] are the thin plumbing that feed it and cache
//! its output.

pub mod config;
pub mod engine;
pub mod error;
pub mod runner;
pub mod store;
pub mod types;

// Re-export commonly used items
pub use config::Config;
pub use error::{EngineError, Result};
pub use runner::{Evaluation, SignalRunner};
pub use store::SeriesStore;
pub use types::*;
