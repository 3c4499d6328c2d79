//! Credit request repository port.
//!
//! Defines the contract for persisting and querying `CreditRequest`
//! aggregates. Concurrent updates to the same id are last-write-wins.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RequestId, UserId};
use crate::domain::request::{CreditRequest, RequestQuery};

/// Repository port for credit requests.
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Save a new request.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, request: &CreditRequest) -> Result<(), DomainError>;

    /// Replace a stored request.
    ///
    /// # Errors
    ///
    /// - `RequestNotFound` if the request doesn't exist
    async fn update(&self, request: &CreditRequest) -> Result<(), DomainError>;

    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &RequestId) -> Result<Option<CreditRequest>, DomainError>;

    /// Returns the client's request, if any. A client holds at most one.
    async fn find_by_client(&self, client_id: &UserId) -> Result<Option<CreditRequest>, DomainError>;

    /// # Errors
    ///
    /// - `RequestNotFound` if the request doesn't exist
    async fn delete(&self, id: &RequestId) -> Result<(), DomainError>;

    /// Returns one page of matching requests and the total match count.
    async fn list(&self, query: &RequestQuery) -> Result<(Vec<CreditRequest>, u64), DomainError>;
}
