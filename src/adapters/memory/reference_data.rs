//! In-memory reference tables, seeded with the canonical statuses.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{CreditTypeId, DomainError, StatusId};
use crate::domain::request::{status_codes, CreditType, RequestStatus};
use crate::ports::ReferenceDataReader;

#[derive(Default)]
pub struct InMemoryReferenceData {
    credit_types: RwLock<Vec<CreditType>>,
    statuses: RwLock<Vec<RequestStatus>>,
}

impl InMemoryReferenceData {
    /// Empty tables. Lifecycle operations fail until statuses are added.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Tables holding the canonical statuses and the standard credit types.
    pub fn seeded() -> Self {
        Self {
            credit_types: RwLock::new(vec![
                CreditType::new("WORKING_CAPITAL", "Working capital"),
                CreditType::new("MACHINERY", "Machinery and equipment"),
                CreditType::new("LIVESTOCK", "Livestock"),
            ]),
            statuses: RwLock::new(vec![
                RequestStatus::new(status_codes::PENDING, "Pending"),
                RequestStatus::new("IN_REVIEW", "In review"),
                RequestStatus::new(status_codes::APPROVED, "Approved"),
                RequestStatus::new(status_codes::REJECTED, "Rejected"),
            ]),
        }
    }

    pub async fn add_credit_type(&self, credit_type: CreditType) {
        self.credit_types.write().await.push(credit_type);
    }

    pub async fn add_status(&self, status: RequestStatus) {
        self.statuses.write().await.push(status);
    }
}

#[async_trait]
impl ReferenceDataReader for InMemoryReferenceData {
    async fn get_credit_type(&self, id: &CreditTypeId) -> Result<Option<CreditType>, DomainError> {
        Ok(self.credit_types.read().await.iter().find(|c| &c.id == id).cloned())
    }

    async fn get_status(&self, id: &StatusId) -> Result<Option<RequestStatus>, DomainError> {
        Ok(self.statuses.read().await.iter().find(|s| &s.id == id).cloned())
    }

    async fn get_status_by_code(&self, code: &str) -> Result<Option<RequestStatus>, DomainError> {
        Ok(self.statuses.read().await.iter().find(|s| s.has_code(code)).cloned())
    }

    async fn list_credit_types(&self) -> Result<Vec<CreditType>, DomainError> {
        Ok(self.credit_types.read().await.clone())
    }

    async fn list_statuses(&self) -> Result<Vec<RequestStatus>, DomainError> {
        Ok(self.statuses.read().await.clone())
    }
}
