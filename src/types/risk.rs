use serde::{Deserialize, Serialize};

/// Risk tier for acting on a trading signal.
///
/// Tiers are totally ordered (`Low < Medium < High`) so escalation logic can
/// compare them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bump one tier up; `High` stays `High`.
    pub fn escalate(self) -> Self {
        match self {
            RiskLevel::Low => RiskLevel::Medium,
            RiskLevel::Medium | RiskLevel::High => RiskLevel::High,
        }
    }

    /// Get display label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Volatility-based risk classification for a price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Overall risk tier.
    pub risk_level: RiskLevel,
    /// Population standard deviation of period returns, as a percentage.
    pub volatility: f64,
    /// Tier-specific guidance text.
    pub recommendation: String,
}

impl RiskAssessment {
    /// Safe fallback when a series cannot be assessed at all.
    pub fn fallback() -> Self {
        Self {
            risk_level: RiskLevel::High,
            volatility: 0.0,
            recommendation: "Unable to assess, exercise maximum caution".to_string(),
        }
    }
}
