//! Reference data reader port (credit types and request statuses).

use async_trait::async_trait;

use crate::domain::foundation::{CreditTypeId, DomainError, StatusId};
use crate::domain::request::{CreditType, RequestStatus};

/// Read access to the seeded reference tables.
///
/// Lookups return `None` for unknown ids; the caller decides whether that
/// is a missing entity or an invalid reference.
#[async_trait]
pub trait ReferenceDataReader: Send + Sync {
    async fn get_credit_type(&self, id: &CreditTypeId) -> Result<Option<CreditType>, DomainError>;

    async fn get_status(&self, id: &StatusId) -> Result<Option<RequestStatus>, DomainError>;

    /// Finds a status by business code, e.g. `APPROVED`.
    async fn get_status_by_code(&self, code: &str) -> Result<Option<RequestStatus>, DomainError>;

    async fn list_credit_types(&self) -> Result<Vec<CreditType>, DomainError>;

    async fn list_statuses(&self) -> Result<Vec<RequestStatus>, DomainError>;
}
