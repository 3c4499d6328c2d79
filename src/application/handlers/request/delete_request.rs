//! DeleteRequestHandler - Command handler for removing requests.

use std::sync::Arc;

use crate::domain::foundation::RequestId;
use crate::domain::request::RequestError;
use crate::ports::RequestRepository;

/// Command to delete a request.
#[derive(Debug, Clone)]
pub struct DeleteRequestCommand {
    pub request_id: RequestId,
}

pub struct DeleteRequestHandler {
    requests: Arc<dyn RequestRepository>,
}

impl DeleteRequestHandler {
    pub fn new(requests: Arc<dyn RequestRepository>) -> Self {
        Self { requests }
    }

    pub async fn handle(&self, cmd: DeleteRequestCommand) -> Result<(), RequestError> {
        if self.requests.find_by_id(&cmd.request_id).await?.is_none() {
            return Err(RequestError::not_found("request", cmd.request_id));
        }
        self.requests.delete(&cmd.request_id).await?;

        tracing::info!(request_id = %cmd.request_id, "Credit request deleted");
        Ok(())
    }
}
