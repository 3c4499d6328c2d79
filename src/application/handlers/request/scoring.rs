//! Risk scoring of a stored request against its client's current profile.

use std::sync::Arc;

use crate::domain::client::ClientProfile;
use crate::domain::foundation::Timestamp;
use crate::domain::request::{CreditRequest, RequestError};
use crate::domain::risk::{RiskAssessment, RiskCalculator};
use crate::ports::ClientProfileReader;

/// Re-runs the risk calculator and records the snapshot on the request.
#[derive(Clone)]
pub(crate) struct RequestScorer {
    profiles: Arc<dyn ClientProfileReader>,
}

impl RequestScorer {
    pub(crate) fn new(profiles: Arc<dyn ClientProfileReader>) -> Self {
        Self { profiles }
    }

    /// Looks up the client's profile and scores the request.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the client has no profile
    pub(crate) async fn score(&self, request: &mut CreditRequest) -> Result<RiskAssessment, RequestError> {
        let profile = self
            .profiles
            .get_profile(request.client_id())
            .await?
            .ok_or_else(|| RequestError::not_found("client profile", request.client_id()))?;

        Ok(Self::score_with(&profile, request))
    }

    /// Scores the request with an already loaded profile.
    pub(crate) fn score_with(profile: &ClientProfile, request: &mut CreditRequest) -> RiskAssessment {
        let today = Timestamp::now().date();
        let assessment = RiskCalculator::assess(profile.applicant_profile(), request.terms(), today);
        request.record_assessment(&assessment);

        tracing::debug!(
            request_id = %request.id(),
            risk_percentage = assessment.risk_percentage,
            risk_level = %assessment.risk_level,
            warnings = assessment.warning_flags.len(),
            "Credit request scored"
        );
        assessment
    }
}
