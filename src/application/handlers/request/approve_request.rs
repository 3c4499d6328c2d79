//! ApproveRequestHandler - Command handler for analyst approval.

use std::sync::Arc;

use crate::domain::foundation::{RequestId, UserId};
use crate::domain::notification::LifecycleEvent;
use crate::domain::request::{status_codes, CreditRequest, RequestError};
use crate::ports::{ReferenceDataReader, RequestRepository};

use super::notifier::LifecycleNotifier;
use super::references::ReferenceResolver;

/// Command to approve a request.
#[derive(Debug, Clone)]
pub struct ApproveRequestCommand {
    pub request_id: RequestId,
    pub analyst_id: UserId,
    /// Overrides the approved amount when present and positive.
    pub approved_amount: Option<f64>,
}

/// Handler for request approval. The risk score is not recomputed.
pub struct ApproveRequestHandler {
    requests: Arc<dyn RequestRepository>,
    references: ReferenceResolver,
    notifier: LifecycleNotifier,
}

impl ApproveRequestHandler {
    pub fn new(
        requests: Arc<dyn RequestRepository>,
        reference: Arc<dyn ReferenceDataReader>,
        notifier: LifecycleNotifier,
    ) -> Self {
        Self {
            requests,
            references: ReferenceResolver::new(reference),
            notifier,
        }
    }

    pub async fn handle(&self, cmd: ApproveRequestCommand) -> Result<CreditRequest, RequestError> {
        let mut request = self
            .requests
            .find_by_id(&cmd.request_id)
            .await?
            .ok_or_else(|| RequestError::not_found("request", cmd.request_id))?;

        let approved = self.references.canonical_status(status_codes::APPROVED).await?;
        request.approve(approved.id, cmd.analyst_id, cmd.approved_amount)?;
        self.requests.update(&request).await?;

        tracing::info!(
            request_id = %request.id(),
            analyst_id = %cmd.analyst_id,
            approved_amount = request.approved_amount(),
            "Credit request approved"
        );

        self.notifier.notify(&request, LifecycleEvent::Approved, None).await?;
        Ok(request)
    }
}
