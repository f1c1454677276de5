use thiserror::Error;

/// Internal engine failure modes.
///
/// Neither variant crosses the public API: signal generation and risk
/// assessment catch these at the component boundary, log them, and
/// substitute their safe fallback results.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("insufficient data: need {need} points, have {have}")]
    InsufficientData { need: usize, have: usize },

    #[error("computation fault: {0}")]
    ComputationFault(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
