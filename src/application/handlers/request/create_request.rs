//! CreateRequestHandler - Command handler for submitting credit requests.
//!
//! A client holds at most one request. Submitting again routes the
//! submission through the update path and reports `created = false`.

use std::sync::Arc;

use crate::domain::foundation::RequestId;
use crate::domain::notification::LifecycleEvent;
use crate::domain::request::{
    status_codes, CreditRequest, RequestChanges, RequestError, RequestSubmission,
};
use crate::ports::{ClientProfileReader, ReferenceDataReader, RequestRepository};

use super::notifier::LifecycleNotifier;
use super::references::ReferenceResolver;
use super::scoring::RequestScorer;
use super::update_request::{UpdateRequestCommand, UpdateRequestHandler};

/// Command to submit a credit request.
#[derive(Debug, Clone)]
pub struct CreateRequestCommand {
    pub submission: RequestSubmission,
}

/// Result of a submission.
#[derive(Debug, Clone)]
pub struct CreateRequestResult {
    pub request: CreditRequest,
    /// `false` when an existing request of the client was updated instead.
    pub created: bool,
}

/// Handler for credit request submission.
pub struct CreateRequestHandler {
    requests: Arc<dyn RequestRepository>,
    profiles: Arc<dyn ClientProfileReader>,
    references: ReferenceResolver,
    updater: UpdateRequestHandler,
    notifier: LifecycleNotifier,
}

impl CreateRequestHandler {
    pub fn new(
        requests: Arc<dyn RequestRepository>,
        reference: Arc<dyn ReferenceDataReader>,
        profiles: Arc<dyn ClientProfileReader>,
        notifier: LifecycleNotifier,
    ) -> Self {
        Self {
            updater: UpdateRequestHandler::new(requests.clone(), reference.clone(), profiles.clone()),
            requests,
            profiles,
            references: ReferenceResolver::new(reference),
            notifier,
        }
    }

    pub async fn handle(&self, cmd: CreateRequestCommand) -> Result<CreateRequestResult, RequestError> {
        let submission = cmd.submission;

        // 1. Resolve the applicant
        let profile = self
            .profiles
            .get_profile(&submission.client_id)
            .await?
            .ok_or_else(|| RequestError::not_found("client profile", submission.client_id))?;

        // 2. Validate references and seed data
        self.references.require_credit_type(&submission.credit_type_id).await?;
        self.references.require_status(&submission.status_id).await?;
        // Checked before the existing-request branch; a resubmission needs it in update anyway.
        self.references.canonical_status(status_codes::APPROVED).await?;

        // 3. One request per client
        if let Some(existing) = self.requests.find_by_client(&submission.client_id).await? {
            tracing::debug!(
                request_id = %existing.id(),
                user_id = %submission.client_id,
                "Client already has a request, updating it"
            );
            let request = self
                .updater
                .handle(UpdateRequestCommand {
                    request_id: *existing.id(),
                    changes: RequestChanges::from(&submission),
                })
                .await?;
            return Ok(CreateRequestResult {
                request,
                created: false,
            });
        }

        // 4. Build, score and persist
        let mut request = CreditRequest::new(
            RequestId::new(),
            submission.client_id,
            submission.credit_type_id,
            submission.status_id,
            submission.terms,
            submission.purpose_description,
            submission.collateral_description,
        )?;
        RequestScorer::score_with(&profile, &mut request);
        self.requests.save(&request).await?;

        tracing::info!(
            request_id = %request.id(),
            user_id = %request.client_id(),
            risk_score = request.risk_score(),
            "Credit request created"
        );

        // 5. Side effects
        self.notifier.notify(&request, LifecycleEvent::Created, None).await?;

        Ok(CreateRequestResult {
            request,
            created: true,
        })
    }
}
