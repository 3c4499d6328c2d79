//! ChangeRequestStatusHandler - Command handler for free status changes.

use std::sync::Arc;

use crate::domain::foundation::{RequestId, StatusId};
use crate::domain::request::{CreditRequest, RequestError};
use crate::ports::{ReferenceDataReader, RequestRepository};

use super::references::ReferenceResolver;

/// Command to move a request to any status.
#[derive(Debug, Clone)]
pub struct ChangeRequestStatusCommand {
    pub request_id: RequestId,
    pub status_id: StatusId,
}

/// Handler for status changes.
///
/// Resets the approved amount, approval time and rejection reason. Sends
/// no notification.
pub struct ChangeRequestStatusHandler {
    requests: Arc<dyn RequestRepository>,
    references: ReferenceResolver,
}

impl ChangeRequestStatusHandler {
    pub fn new(requests: Arc<dyn RequestRepository>, reference: Arc<dyn ReferenceDataReader>) -> Self {
        Self {
            requests,
            references: ReferenceResolver::new(reference),
        }
    }

    pub async fn handle(&self, cmd: ChangeRequestStatusCommand) -> Result<CreditRequest, RequestError> {
        let mut request = self
            .requests
            .find_by_id(&cmd.request_id)
            .await?
            .ok_or_else(|| RequestError::not_found("request", cmd.request_id))?;

        self.references.require_status(&cmd.status_id).await?;

        request.change_status(cmd.status_id);
        self.requests.update(&request).await?;

        tracing::info!(
            request_id = %request.id(),
            status_id = %cmd.status_id,
            "Credit request status changed"
        );
        Ok(request)
    }
}
