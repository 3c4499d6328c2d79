//! Reference-data checks shared by the lifecycle handlers.

use std::sync::Arc;

use crate::domain::foundation::{CreditTypeId, StatusId};
use crate::domain::request::{CreditType, RequestError, RequestStatus};
use crate::ports::ReferenceDataReader;

#[derive(Clone)]
pub(crate) struct ReferenceResolver {
    reference: Arc<dyn ReferenceDataReader>,
}

impl ReferenceResolver {
    pub(crate) fn new(reference: Arc<dyn ReferenceDataReader>) -> Self {
        Self { reference }
    }

    /// Status row carrying a fixed business code.
    ///
    /// # Errors
    ///
    /// - `Configuration` if the status table was not seeded with `code`
    pub(crate) async fn canonical_status(&self, code: &str) -> Result<RequestStatus, RequestError> {
        self.reference.get_status_by_code(code).await?.ok_or_else(|| {
            RequestError::configuration(format!("Status '{}' is not configured in the status table", code))
        })
    }

    pub(crate) async fn require_credit_type(&self, id: &CreditTypeId) -> Result<CreditType, RequestError> {
        self.reference
            .get_credit_type(id)
            .await?
            .ok_or_else(|| RequestError::invalid_reference("credit_type_id", id))
    }

    pub(crate) async fn require_status(&self, id: &StatusId) -> Result<RequestStatus, RequestError> {
        self.reference
            .get_status(id)
            .await?
            .ok_or_else(|| RequestError::invalid_reference("status_id", id))
    }
}
