//! Request read handlers.

use std::sync::Arc;

use crate::domain::foundation::{RequestId, UserId};
use crate::domain::request::{CreditRequest, RequestError};
use crate::ports::RequestRepository;

/// Query for one request by id.
#[derive(Debug, Clone)]
pub struct GetRequestQuery {
    pub request_id: RequestId,
}

pub struct GetRequestHandler {
    requests: Arc<dyn RequestRepository>,
}

impl GetRequestHandler {
    pub fn new(requests: Arc<dyn RequestRepository>) -> Self {
        Self { requests }
    }

    pub async fn handle(&self, query: GetRequestQuery) -> Result<CreditRequest, RequestError> {
        self.requests
            .find_by_id(&query.request_id)
            .await?
            .ok_or_else(|| RequestError::not_found("request", query.request_id))
    }
}

/// Query for the request of a client.
#[derive(Debug, Clone)]
pub struct FindClientRequestQuery {
    pub client_id: UserId,
}

pub struct FindClientRequestHandler {
    requests: Arc<dyn RequestRepository>,
}

impl FindClientRequestHandler {
    pub fn new(requests: Arc<dyn RequestRepository>) -> Self {
        Self { requests }
    }

    /// `None` when the client has not submitted a request yet.
    pub async fn handle(&self, query: FindClientRequestQuery) -> Result<Option<CreditRequest>, RequestError> {
        Ok(self.requests.find_by_client(&query.client_id).await?)
    }
}
