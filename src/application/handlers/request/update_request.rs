//! UpdateRequestHandler - Command handler for partial request updates.

use std::sync::Arc;

use crate::domain::foundation::RequestId;
use crate::domain::request::{status_codes, CreditRequest, RequestChanges, RequestError};
use crate::ports::{ClientProfileReader, ReferenceDataReader, RequestRepository};

use super::references::ReferenceResolver;
use super::scoring::RequestScorer;

/// Command to update a request.
#[derive(Debug, Clone)]
pub struct UpdateRequestCommand {
    pub request_id: RequestId,
    pub changes: RequestChanges,
}

/// Handler for request updates. Every update rescores the request.
#[derive(Clone)]
pub struct UpdateRequestHandler {
    requests: Arc<dyn RequestRepository>,
    references: ReferenceResolver,
    scorer: RequestScorer,
}

impl UpdateRequestHandler {
    pub fn new(
        requests: Arc<dyn RequestRepository>,
        reference: Arc<dyn ReferenceDataReader>,
        profiles: Arc<dyn ClientProfileReader>,
    ) -> Self {
        Self {
            requests,
            references: ReferenceResolver::new(reference),
            scorer: RequestScorer::new(profiles),
        }
    }

    pub async fn handle(&self, cmd: UpdateRequestCommand) -> Result<CreditRequest, RequestError> {
        // 1. Load request
        let mut request = self
            .requests
            .find_by_id(&cmd.request_id)
            .await?
            .ok_or_else(|| RequestError::not_found("request", cmd.request_id))?;

        // 2. Validate changed references
        if let Some(credit_type_id) = &cmd.changes.credit_type_id {
            if credit_type_id != request.credit_type_id() {
                self.references.require_credit_type(credit_type_id).await?;
            }
        }
        let approved_status = match &cmd.changes.status_id {
            Some(status_id) => {
                if status_id != request.status_id() {
                    self.references.require_status(status_id).await?;
                }
                Some(self.references.canonical_status(status_codes::APPROVED).await?.id)
            }
            None => None,
        };

        // 3. Apply and rescore
        request.apply_changes(&cmd.changes, approved_status.as_ref())?;
        self.scorer.score(&mut request).await?;

        // 4. Persist
        self.requests.update(&request).await?;

        tracing::info!(
            request_id = %request.id(),
            risk_score = request.risk_score(),
            "Credit request updated"
        );
        Ok(request)
    }
}
