//! Signal engine: indicator computation, signal generation, risk assessment.
//!
//! Three stateless components wired in a fixed pipeline. A chronological
//! price series feeds [`indicators::compute`], the resulting snapshot feeds
//! [`generator::generate`], and the signal plus the same series feed
//! [`risk::assess`]. None of them perform I/O or keep state between calls,
//! so evaluations of independent series can run concurrently.

pub mod generator;
pub mod indicators;
pub mod risk;

/// Population standard deviation of `values`; 0.0 for an empty slice.
pub(crate) fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
