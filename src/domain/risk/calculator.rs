//! Risk Calculator - Weighted multi-factor credit scoring.
//!
//! Pure and synchronous. The same inputs always yield the same assessment,
//! so the calculator can be shared freely between tasks.

use chrono::{Datelike, NaiveDate};

use super::assessment::{DetailedAnalysis, FactorScores, FactorWeights, RiskAssessment};
use super::factors::{self, FactorAssessment};
use super::level::RiskLevel;
use super::profile::{ApplicantProfile, LoanTerms};

/// Ceiling for the recommended annual rate, in percent.
pub const MAX_RECOMMENDED_RATE: f64 = 40.0;

/// Recommended amount never exceeds this many years of income.
pub const INCOME_MULTIPLE_CAP: f64 = 3.0;

/// Points added to the base rate per point of risk.
const RATE_PREMIUM_PER_RISK_POINT: f64 = 0.1;

/// Calculator for credit risk assessments.
pub struct RiskCalculator;

impl RiskCalculator {
    /// Whole years between `birth` and `today`, counting the birthday only
    /// once it has been reached this year.
    pub fn age(birth: NaiveDate, today: NaiveDate) -> i32 {
        let mut years = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }
        years
    }

    /// Fixed installment of a fully amortising loan.
    ///
    /// Returns 0 when the rate is not positive or there are no months.
    pub fn monthly_payment(principal: f64, annual_rate_percent: f64, months: u32) -> f64 {
        if annual_rate_percent <= 0.0 || months == 0 {
            return 0.0;
        }
        let monthly_rate = annual_rate_percent / 100.0 / 12.0;
        let growth = (1.0 + monthly_rate).powf(months as f64);
        principal * monthly_rate * growth / (growth - 1.0)
    }

    /// Scores an applicant against a set of loan terms as of `today`.
    pub fn assess(profile: &ApplicantProfile, terms: &LoanTerms, today: NaiveDate) -> RiskAssessment {
        let age = Self::age(profile.date_of_birth, today);
        let monthly_payment = Self::monthly_payment(
            terms.requested_amount,
            terms.annual_interest_rate,
            terms.term_months,
        );

        let assessments: [FactorAssessment; 7] = [
            factors::credit_history(profile.internal_credit_history_score, terms.previous_defaults),
            factors::payment_capacity(
                profile.annual_income,
                terms.other_income_sources,
                monthly_payment,
                terms.number_of_dependents,
            ),
            factors::debt_burden(profile.current_debt_to_income_ratio),
            factors::agricultural_profile(
                profile.years_of_agricultural_experience,
                profile.farm_size_hectares,
                profile.has_agricultural_insurance,
                profile.annual_income,
            ),
            factors::demographics(age),
            factors::collateral(terms.collateral_value, terms.requested_amount),
            factors::loan_characteristics(
                terms.requested_amount,
                terms.term_months,
                profile.annual_income,
                terms.applicant_contribution_amount,
            ),
        ];

        let scores = FactorScores {
            credit_history: assessments[0].score,
            payment_capacity: assessments[1].score,
            debt_burden: assessments[2].score,
            agricultural_profile: assessments[3].score,
            demographics: assessments[4].score,
            collateral: assessments[5].score,
            loan_characteristics: assessments[6].score,
        };
        let warning_flags: Vec<String> = assessments
            .iter()
            .flat_map(|a| a.warnings.iter().map(|w| w.to_string()))
            .collect();

        let weights = FactorWeights::STANDARD;
        let total_positive_score = weights.weighted_total(&scores);
        let risk = (100.0 - total_positive_score).clamp(0.0, 100.0);
        let level = RiskLevel::from_percentage(risk);

        let maximum_recommended_amount = (terms.requested_amount * level.amount_multiplier())
            .min(profile.annual_income * INCOME_MULTIPLE_CAP);
        let recommended_interest_rate =
            (level.base_rate() + risk * RATE_PREMIUM_PER_RISK_POINT).min(MAX_RECOMMENDED_RATE);

        let payment_to_income_ratio = if profile.annual_income > 0.0 {
            monthly_payment * 12.0 / profile.annual_income
        } else {
            0.0
        };

        RiskAssessment {
            risk_score: risk,
            risk_level: level,
            risk_percentage: risk,
            approval_recommendation: level.recommends_approval(),
            maximum_recommended_amount,
            recommended_interest_rate,
            detailed_analysis: DetailedAnalysis {
                scores_by_category: scores,
                weights_applied: weights,
                age_calculated: age,
                monthly_payment,
                payment_to_income_ratio,
                total_positive_score,
                final_risk_score: risk,
            },
            warning_flags,
        }
    }
}
