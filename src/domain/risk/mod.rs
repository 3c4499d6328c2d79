//! Credit risk scoring.
//!
//! `RiskCalculator::assess` turns an `ApplicantProfile` and `LoanTerms` into a
//! `RiskAssessment` through seven weighted factor assessments.

mod assessment;
mod calculator;
pub mod factors;
mod level;
mod profile;

pub use assessment::{DetailedAnalysis, FactorScores, FactorWeights, RiskAssessment};
pub use calculator::{RiskCalculator, INCOME_MULTIPLE_CAP, MAX_RECOMMENDED_RATE};
pub use factors::FactorAssessment;
pub use level::RiskLevel;
pub use profile::{ApplicantProfile, LoanTerms, MAX_CREDIT_SCORE, MAX_TERM_MONTHS};

#[cfg(test)]
pub(crate) use profile::fixtures;
