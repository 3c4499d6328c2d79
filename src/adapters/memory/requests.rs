//! In-memory credit request repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, RequestId, UserId};
use crate::domain::request::{CreditRequest, RequestQuery};
use crate::ports::RequestRepository;

#[derive(Default)]
pub struct InMemoryRequestRepository {
    requests: RwLock<HashMap<RequestId, CreditRequest>>,
}

impl InMemoryRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.requests.read().await.len()
    }
}

fn not_found(id: &RequestId) -> DomainError {
    DomainError::new(ErrorCode::RequestNotFound, "Request not found")
        .with_detail("request_id", id.to_string())
}

#[async_trait]
impl RequestRepository for InMemoryRequestRepository {
    async fn save(&self, request: &CreditRequest) -> Result<(), DomainError> {
        self.requests.write().await.insert(*request.id(), request.clone());
        Ok(())
    }

    async fn update(&self, request: &CreditRequest) -> Result<(), DomainError> {
        let mut requests = self.requests.write().await;
        match requests.get_mut(request.id()) {
            Some(stored) => {
                *stored = request.clone();
                Ok(())
            }
            None => Err(not_found(request.id())),
        }
    }

    async fn find_by_id(&self, id: &RequestId) -> Result<Option<CreditRequest>, DomainError> {
        Ok(self.requests.read().await.get(id).cloned())
    }

    async fn find_by_client(&self, client_id: &UserId) -> Result<Option<CreditRequest>, DomainError> {
        Ok(self
            .requests
            .read()
            .await
            .values()
            .filter(|r| r.client_id() == client_id)
            .min_by_key(|r| *r.created_at())
            .cloned())
    }

    async fn delete(&self, id: &RequestId) -> Result<(), DomainError> {
        match self.requests.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(not_found(id)),
        }
    }

    async fn list(&self, query: &RequestQuery) -> Result<(Vec<CreditRequest>, u64), DomainError> {
        let requests = self.requests.read().await;
        let mut matching: Vec<&CreditRequest> =
            requests.values().filter(|r| query.filter.matches(r)).collect();
        let total = matching.len() as u64;

        matching.sort_by(|a, b| {
            query
                .order_by
                .compare(a, b, query.sort_order)
                .then_with(|| a.id().cmp(b.id()))
        });

        let items = matching
            .into_iter()
            .skip(query.page.offset())
            .take(query.page.per_page() as usize)
            .cloned()
            .collect();
        Ok((items, total))
    }
}
