//! Inputs that create or modify a credit request.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::foundation::{CreditTypeId, StatusId, UserId};
use crate::domain::risk::LoanTerms;

/// A client's submission of a new credit request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSubmission {
    pub client_id: UserId,
    pub credit_type_id: CreditTypeId,
    pub status_id: StatusId,
    pub terms: LoanTerms,
    pub purpose_description: Option<String>,
    pub collateral_description: Option<String>,
}

/// Partial update. Only the fields that are `Some` are applied.
///
/// Nullable fields are doubly optional: `Some(None)` clears the value,
/// an absent field leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestChanges {
    pub requested_amount: Option<f64>,
    pub term_months: Option<u32>,
    pub annual_interest_rate: Option<f64>,
    pub applicant_contribution_amount: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    pub collateral_value: Option<Option<f64>>,
    pub number_of_dependents: Option<u32>,
    pub other_income_sources: Option<f64>,
    pub previous_defaults: Option<u32>,
    pub credit_type_id: Option<CreditTypeId>,
    pub status_id: Option<StatusId>,
    #[serde(default, deserialize_with = "present")]
    pub purpose_description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub collateral_description: Option<Option<String>>,
    pub approved_amount: Option<f64>,
    pub analyst_id: Option<UserId>,
    pub rejection_reason: Option<String>,
}

impl RequestChanges {
    pub fn is_empty(&self) -> bool {
        *self == RequestChanges::default()
    }

    /// Merges these changes over existing terms.
    pub fn merged_terms(&self, current: &LoanTerms) -> LoanTerms {
        LoanTerms {
            requested_amount: self.requested_amount.unwrap_or(current.requested_amount),
            term_months: self.term_months.unwrap_or(current.term_months),
            annual_interest_rate: self
                .annual_interest_rate
                .unwrap_or(current.annual_interest_rate),
            applicant_contribution_amount: self
                .applicant_contribution_amount
                .unwrap_or(current.applicant_contribution_amount),
            collateral_value: self.collateral_value.unwrap_or(current.collateral_value),
            number_of_dependents: self
                .number_of_dependents
                .unwrap_or(current.number_of_dependents),
            other_income_sources: self
                .other_income_sources
                .unwrap_or(current.other_income_sources),
            previous_defaults: self.previous_defaults.unwrap_or(current.previous_defaults),
        }
    }
}

impl From<&RequestSubmission> for RequestChanges {
    /// A resubmission overwrites every field the client can submit.
    fn from(submission: &RequestSubmission) -> Self {
        let terms = &submission.terms;
        Self {
            requested_amount: Some(terms.requested_amount),
            term_months: Some(terms.term_months),
            annual_interest_rate: Some(terms.annual_interest_rate),
            applicant_contribution_amount: Some(terms.applicant_contribution_amount),
            collateral_value: Some(terms.collateral_value),
            number_of_dependents: Some(terms.number_of_dependents),
            other_income_sources: Some(terms.other_income_sources),
            previous_defaults: Some(terms.previous_defaults),
            credit_type_id: Some(submission.credit_type_id),
            status_id: Some(submission.status_id),
            purpose_description: Some(submission.purpose_description.clone()),
            collateral_description: Some(submission.collateral_description.clone()),
            approved_amount: None,
            analyst_id: None,
            rejection_reason: None,
        }
    }
}

/// A field that is present maps to `Some`, even when it is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
