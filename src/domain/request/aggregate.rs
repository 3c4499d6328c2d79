//! Credit request aggregate.
//!
//! A request is created in the status passed by the caller (normally
//! PENDING), rescored on every update, and closed by an analyst through
//! approve or reject. `change_status` can reopen it and clears the
//! approval metadata.
//!
//! # Invariants
//!
//! - `terms` always pass `LoanTerms::validate`
//! - `approved_at` is `None` after a rejection or a status change
//! - `risk_score` is the 0-100 risk percentage of the last assessment

use serde::{Deserialize, Serialize};

use super::changes::RequestChanges;
use crate::domain::foundation::{
    CreditTypeId, RequestId, StatusId, Timestamp, UserId, ValidationError,
};
use crate::domain::risk::{DetailedAnalysis, LoanTerms, RiskAssessment};

/// Maximum length for purpose and collateral descriptions.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Maximum length for a rejection reason.
pub const MAX_REJECTION_REASON_LENGTH: usize = 500;

/// Credit request aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditRequest {
    id: RequestId,
    client_id: UserId,
    credit_type_id: CreditTypeId,
    status_id: StatusId,
    terms: LoanTerms,
    purpose_description: Option<String>,
    collateral_description: Option<String>,
    approved_amount: Option<f64>,
    approved_at: Option<Timestamp>,
    analyst_id: Option<UserId>,
    rejection_reason: Option<String>,
    risk_score: Option<f64>,
    risk_assessment_details: Option<DetailedAnalysis>,
    warning_flags: Vec<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl CreditRequest {
    /// Creates an unscored request.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if the terms or descriptions are out of range
    pub fn new(
        id: RequestId,
        client_id: UserId,
        credit_type_id: CreditTypeId,
        status_id: StatusId,
        terms: LoanTerms,
        purpose_description: Option<String>,
        collateral_description: Option<String>,
    ) -> Result<Self, ValidationError> {
        terms.validate()?;
        validate_text("purpose_description", purpose_description.as_deref(), MAX_DESCRIPTION_LENGTH)?;
        validate_text(
            "collateral_description",
            collateral_description.as_deref(),
            MAX_DESCRIPTION_LENGTH,
        )?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            client_id,
            credit_type_id,
            status_id,
            terms,
            purpose_description,
            collateral_description,
            approved_amount: None,
            approved_at: None,
            analyst_id: None,
            rejection_reason: None,
            risk_score: None,
            risk_assessment_details: None,
            warning_flags: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &RequestId {
        &self.id
    }

    pub fn client_id(&self) -> &UserId {
        &self.client_id
    }

    pub fn credit_type_id(&self) -> &CreditTypeId {
        &self.credit_type_id
    }

    pub fn status_id(&self) -> &StatusId {
        &self.status_id
    }

    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    pub fn purpose_description(&self) -> Option<&str> {
        self.purpose_description.as_deref()
    }

    pub fn collateral_description(&self) -> Option<&str> {
        self.collateral_description.as_deref()
    }

    pub fn approved_amount(&self) -> Option<f64> {
        self.approved_amount
    }

    pub fn approved_at(&self) -> Option<&Timestamp> {
        self.approved_at.as_ref()
    }

    pub fn analyst_id(&self) -> Option<&UserId> {
        self.analyst_id.as_ref()
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason.as_deref()
    }

    pub fn risk_score(&self) -> Option<f64> {
        self.risk_score
    }

    pub fn risk_assessment_details(&self) -> Option<&DetailedAnalysis> {
        self.risk_assessment_details.as_ref()
    }

    pub fn warning_flags(&self) -> &[String] {
        &self.warning_flags
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a partial update.
    ///
    /// Stamps `approved_at` when the update moves the request into
    /// `approved_status`. Nothing is applied if any field is invalid.
    pub fn apply_changes(
        &mut self,
        changes: &RequestChanges,
        approved_status: Option<&StatusId>,
    ) -> Result<(), ValidationError> {
        let terms = changes.merged_terms(&self.terms);
        terms.validate()?;
        validate_text(
            "purpose_description",
            changes.purpose_description.as_ref().and_then(Option::as_deref),
            MAX_DESCRIPTION_LENGTH,
        )?;
        validate_text(
            "collateral_description",
            changes.collateral_description.as_ref().and_then(Option::as_deref),
            MAX_DESCRIPTION_LENGTH,
        )?;
        validate_text(
            "rejection_reason",
            changes.rejection_reason.as_deref(),
            MAX_REJECTION_REASON_LENGTH,
        )?;
        if let Some(amount) = changes.approved_amount {
            validate_amount("approved_amount", amount)?;
        }

        self.terms = terms;
        if let Some(id) = changes.credit_type_id {
            self.credit_type_id = id;
        }
        if let Some(id) = changes.status_id {
            self.status_id = id;
        }
        if let Some(text) = &changes.purpose_description {
            self.purpose_description = text.clone();
        }
        if let Some(text) = &changes.collateral_description {
            self.collateral_description = text.clone();
        }
        if let Some(amount) = changes.approved_amount {
            self.approved_amount = Some(amount);
        }
        if let Some(analyst) = changes.analyst_id {
            self.analyst_id = Some(analyst);
        }
        if let Some(reason) = &changes.rejection_reason {
            self.rejection_reason = Some(reason.clone());
        }

        let now = Timestamp::now();
        self.updated_at = now;
        if changes.status_id.is_some() && changes.status_id.as_ref() == approved_status {
            self.approved_at = Some(now);
        }
        Ok(())
    }

    /// Stores the scoring snapshot of an assessment.
    pub fn record_assessment(&mut self, assessment: &RiskAssessment) {
        self.risk_score = Some(assessment.risk_percentage);
        self.risk_assessment_details = Some(assessment.detailed_analysis.clone());
        self.warning_flags = assessment.warning_flags.clone();
    }

    /// Moves the request to the approved status.
    ///
    /// A missing or zero `amount` keeps the previously approved amount.
    pub fn approve(
        &mut self,
        approved_status: StatusId,
        analyst: UserId,
        amount: Option<f64>,
    ) -> Result<(), ValidationError> {
        if let Some(amount) = amount {
            validate_amount("approved_amount", amount)?;
        }

        self.status_id = approved_status;
        if let Some(amount) = amount.filter(|a| *a > 0.0) {
            self.approved_amount = Some(amount);
        }
        let now = Timestamp::now();
        self.updated_at = now;
        self.approved_at = Some(now);
        self.analyst_id = Some(analyst);
        Ok(())
    }

    /// Moves the request to the rejected status and clears the approval.
    ///
    /// An empty `reason` keeps the previous rejection reason.
    pub fn reject(
        &mut self,
        rejected_status: StatusId,
        analyst: UserId,
        reason: Option<String>,
    ) -> Result<(), ValidationError> {
        validate_text("rejection_reason", reason.as_deref(), MAX_REJECTION_REASON_LENGTH)?;

        self.status_id = rejected_status;
        if let Some(reason) = reason.filter(|r| !r.trim().is_empty()) {
            self.rejection_reason = Some(reason);
        }
        self.approved_amount = Some(0.0);
        self.approved_at = None;
        self.analyst_id = Some(analyst);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Sets a new status and resets all approval and rejection metadata.
    pub fn change_status(&mut self, status: StatusId) {
        self.status_id = status;
        self.approved_amount = Some(0.0);
        self.approved_at = None;
        self.rejection_reason = None;
        self.updated_at = Timestamp::now();
    }

    /// Amount the installment shown to the client is based on.
    pub fn effective_amount(&self) -> f64 {
        self.approved_amount
            .filter(|a| *a > 0.0)
            .unwrap_or(self.terms.requested_amount)
    }
}

fn validate_text(field: &str, text: Option<&str>, max: usize) -> Result<(), ValidationError> {
    match text {
        Some(t) if t.chars().count() > max => Err(ValidationError::out_of_range(
            field,
            0.0,
            max as f64,
            t.chars().count() as f64,
        )),
        _ => Ok(()),
    }
}

fn validate_amount(field: &str, amount: f64) -> Result<(), ValidationError> {
    if amount >= 0.0 && amount.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(field, 0.0, f64::MAX, amount))
    }
}
