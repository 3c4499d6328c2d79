//! Output of a risk assessment.

use serde::{Deserialize, Serialize};

use super::level::RiskLevel;

/// Fixed factor weights in percent. They sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorWeights {
    pub credit_history: u32,
    pub payment_capacity: u32,
    pub debt_burden: u32,
    pub agricultural_profile: u32,
    pub demographics: u32,
    pub collateral: u32,
    pub loan_characteristics: u32,
}

impl FactorWeights {
    pub const STANDARD: FactorWeights = FactorWeights {
        credit_history: 25,
        payment_capacity: 20,
        debt_burden: 15,
        agricultural_profile: 12,
        demographics: 8,
        collateral: 10,
        loan_characteristics: 10,
    };

    pub fn total(&self) -> u32 {
        self.credit_history
            + self.payment_capacity
            + self.debt_burden
            + self.agricultural_profile
            + self.demographics
            + self.collateral
            + self.loan_characteristics
    }

    /// Weighted sum of the positive factor scores, 0 to 100.
    ///
    /// Each term is `score * weight / 100`, summed in factor order.
    pub fn weighted_total(&self, scores: &FactorScores) -> f64 {
        let pairs = [
            (scores.credit_history, self.credit_history),
            (scores.payment_capacity, self.payment_capacity),
            (scores.debt_burden, self.debt_burden),
            (scores.agricultural_profile, self.agricultural_profile),
            (scores.demographics, self.demographics),
            (scores.collateral, self.collateral),
            (scores.loan_characteristics, self.loan_characteristics),
        ];
        pairs
            .iter()
            .map(|(score, weight)| score * *weight as f64 / 100.0)
            .sum()
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Positive score (higher is safer) for each factor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FactorScores {
    pub credit_history: f64,
    pub payment_capacity: f64,
    pub debt_burden: f64,
    pub agricultural_profile: f64,
    pub demographics: f64,
    pub collateral: f64,
    pub loan_characteristics: f64,
}

/// Intermediate values kept on the request as the scoring snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub scores_by_category: FactorScores,
    pub weights_applied: FactorWeights,
    pub age_calculated: i32,
    pub monthly_payment: f64,
    /// Yearly payments over annual income.
    pub payment_to_income_ratio: f64,
    pub total_positive_score: f64,
    pub final_risk_score: f64,
}

/// Result of scoring one applicant against one set of loan terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// 0 is no risk, 100 is maximum risk.
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    /// Same value as `risk_score`.
    pub risk_percentage: f64,
    pub approval_recommendation: bool,
    pub maximum_recommended_amount: f64,
    pub recommended_interest_rate: f64,
    pub detailed_analysis: DetailedAnalysis,
    pub warning_flags: Vec<String>,
}
