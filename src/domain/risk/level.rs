//! Risk level classification bands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal risk band derived from the 0-100 risk percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
    Critical,
}

impl RiskLevel {
    /// Classifies a risk percentage. Band upper bounds are inclusive.
    pub fn from_percentage(risk: f64) -> Self {
        if risk <= 15.0 {
            RiskLevel::VeryLow
        } else if risk <= 25.0 {
            RiskLevel::Low
        } else if risk <= 40.0 {
            RiskLevel::Medium
        } else if risk <= 60.0 {
            RiskLevel::High
        } else if risk <= 80.0 {
            RiskLevel::VeryHigh
        } else {
            RiskLevel::Critical
        }
    }

    /// Approval is recommended up to and including MEDIUM.
    pub fn recommends_approval(&self) -> bool {
        matches!(self, RiskLevel::VeryLow | RiskLevel::Low | RiskLevel::Medium)
    }

    /// Share of the requested amount that may be lent at this level.
    pub fn amount_multiplier(&self) -> f64 {
        match self {
            RiskLevel::VeryLow => 1.0,
            RiskLevel::Low => 0.9,
            RiskLevel::Medium => 0.7,
            RiskLevel::High => 0.5,
            RiskLevel::VeryHigh | RiskLevel::Critical => 0.2,
        }
    }

    /// Base annual rate in percent before the risk premium.
    pub fn base_rate(&self) -> f64 {
        match self {
            RiskLevel::VeryLow => 12.0,
            RiskLevel::Low => 15.0,
            RiskLevel::Medium => 18.0,
            RiskLevel::High => 22.0,
            RiskLevel::VeryHigh => 28.0,
            RiskLevel::Critical => 35.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "VERY_LOW",
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::VeryHigh => "VERY_HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
