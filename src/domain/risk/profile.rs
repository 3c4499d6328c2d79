//! Applicant profile and loan terms, the two inputs of a risk assessment.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Highest internal credit bureau score.
pub const MAX_CREDIT_SCORE: u32 = 1000;

/// Longest loan term accepted, in months.
pub const MAX_TERM_MONTHS: u32 = 360;

/// Highest annual interest rate accepted, in percent.
pub const MAX_ANNUAL_RATE: f64 = 50.0;

/// Longest agricultural career accepted, in years.
pub const MAX_EXPERIENCE_YEARS: u32 = 60;

/// Scoring inputs stored on the client's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub date_of_birth: NaiveDate,
    pub annual_income: f64,
    pub years_of_agricultural_experience: u32,
    pub has_agricultural_insurance: bool,
    pub internal_credit_history_score: u32,
    /// Existing debt over income, 0.0 to 1.0.
    pub current_debt_to_income_ratio: f64,
    pub farm_size_hectares: f64,
}

impl ApplicantProfile {
    /// Checks every field against its accepted range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.annual_income > 0.0) || !self.annual_income.is_finite() {
            return Err(ValidationError::out_of_range(
                "annual_income",
                0.0,
                f64::MAX,
                self.annual_income,
            ));
        }
        if self.years_of_agricultural_experience > MAX_EXPERIENCE_YEARS {
            return Err(ValidationError::out_of_range(
                "years_of_agricultural_experience",
                0.0,
                MAX_EXPERIENCE_YEARS as f64,
                self.years_of_agricultural_experience as f64,
            ));
        }
        if self.internal_credit_history_score > MAX_CREDIT_SCORE {
            return Err(ValidationError::out_of_range(
                "internal_credit_history_score",
                0.0,
                MAX_CREDIT_SCORE as f64,
                self.internal_credit_history_score as f64,
            ));
        }
        if !(0.0..=1.0).contains(&self.current_debt_to_income_ratio) {
            return Err(ValidationError::out_of_range(
                "current_debt_to_income_ratio",
                0.0,
                1.0,
                self.current_debt_to_income_ratio,
            ));
        }
        if !(self.farm_size_hectares > 0.0) || !self.farm_size_hectares.is_finite() {
            return Err(ValidationError::out_of_range(
                "farm_size_hectares",
                0.0,
                f64::MAX,
                self.farm_size_hectares,
            ));
        }
        Ok(())
    }
}

/// Scoring inputs carried by the credit request itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub requested_amount: f64,
    pub term_months: u32,
    /// Annual rate in percent, e.g. `12.5`.
    pub annual_interest_rate: f64,
    pub applicant_contribution_amount: f64,
    /// `None` when the applicant offers no collateral.
    pub collateral_value: Option<f64>,
    pub number_of_dependents: u32,
    pub other_income_sources: f64,
    pub previous_defaults: u32,
}

impl LoanTerms {
    /// Checks every field against its accepted range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.requested_amount > 0.0) || !self.requested_amount.is_finite() {
            return Err(ValidationError::out_of_range(
                "requested_amount",
                0.0,
                f64::MAX,
                self.requested_amount,
            ));
        }
        if self.term_months == 0 || self.term_months > MAX_TERM_MONTHS {
            return Err(ValidationError::out_of_range(
                "term_months",
                1.0,
                MAX_TERM_MONTHS as f64,
                self.term_months as f64,
            ));
        }
        if !(0.0..=MAX_ANNUAL_RATE).contains(&self.annual_interest_rate) {
            return Err(ValidationError::out_of_range(
                "annual_interest_rate",
                0.0,
                MAX_ANNUAL_RATE,
                self.annual_interest_rate,
            ));
        }
        non_negative("applicant_contribution_amount", self.applicant_contribution_amount)?;
        non_negative("other_income_sources", self.other_income_sources)?;
        if let Some(value) = self.collateral_value {
            non_negative("collateral_value", value)?;
        }
        Ok(())
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(field, 0.0, f64::MAX, value))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn strong_profile() -> ApplicantProfile {
        ApplicantProfile {
            date_of_birth: NaiveDate::from_ymd_opt(1984, 1, 1).unwrap(),
            annual_income: 120_000_000.0,
            years_of_agricultural_experience: 20,
            has_agricultural_insurance: true,
            internal_credit_history_score: 800,
            current_debt_to_income_ratio: 0.1,
            farm_size_hectares: 20.0,
        }
    }

    pub fn strong_terms() -> LoanTerms {
        LoanTerms {
            requested_amount: 50_000_000.0,
            term_months: 36,
            annual_interest_rate: 12.0,
            applicant_contribution_amount: 20_000_000.0,
            collateral_value: Some(100_000_000.0),
            number_of_dependents: 0,
            other_income_sources: 0.0,
            previous_defaults: 0,
        }
    }

    pub fn weak_profile() -> ApplicantProfile {
        ApplicantProfile {
            date_of_birth: NaiveDate::from_ymd_opt(2004, 1, 1).unwrap(),
            annual_income: 12_000_000.0,
            years_of_agricultural_experience: 1,
            has_agricultural_insurance: false,
            internal_credit_history_score: 500,
            current_debt_to_income_ratio: 0.6,
            farm_size_hectares: 10.0,
        }
    }

    pub fn weak_terms() -> LoanTerms {
        LoanTerms {
            requested_amount: 100_000_000.0,
            term_months: 12,
            annual_interest_rate: 30.0,
            applicant_contribution_amount: 0.0,
            collateral_value: None,
            number_of_dependents: 5,
            other_income_sources: 0.0,
            previous_defaults: 2,
        }
    }
}
