//! ListRequestsHandler - Paginated, filtered and sorted request listing.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::foundation::{CreditTypeId, StatusId, UserId};
use crate::domain::request::{
    CreditRequest, Page, PageRequest, RequestError, RequestFilter, RequestQuery, SortField,
    SortOrder, DEFAULT_PER_PAGE,
};
use crate::ports::{ReferenceDataReader, RequestRepository};

/// Listing parameters as received from the caller.
///
/// `order_by` and `sort_order` are free text and checked against the
/// allowed values before any lookup happens.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRequestsQuery {
    pub client_id: Option<UserId>,
    pub status_id: Option<StatusId>,
    pub credit_type_id: Option<CreditTypeId>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub order_by: Option<String>,
    pub sort_order: Option<String>,
}

pub struct ListRequestsHandler {
    requests: Arc<dyn RequestRepository>,
    reference: Arc<dyn ReferenceDataReader>,
}

impl ListRequestsHandler {
    pub fn new(requests: Arc<dyn RequestRepository>, reference: Arc<dyn ReferenceDataReader>) -> Self {
        Self { requests, reference }
    }

    /// # Errors
    ///
    /// - `Validation` for a sort field or order outside the allow-list, or a bad page window
    /// - `NotFound` if the status or credit type filter does not resolve
    pub async fn handle(&self, query: ListRequestsQuery) -> Result<Page<CreditRequest>, RequestError> {
        let order_by = query
            .order_by
            .as_deref()
            .map(str::parse::<SortField>)
            .transpose()?
            .unwrap_or_default();
        let sort_order = query
            .sort_order
            .as_deref()
            .map(str::parse::<SortOrder>)
            .transpose()?
            .unwrap_or_default();
        let page = PageRequest::new(
            query.page.unwrap_or(1),
            query.per_page.unwrap_or(DEFAULT_PER_PAGE),
        )?;

        let status_id = match query.status_id {
            Some(id) => Some(
                self.reference
                    .get_status(&id)
                    .await?
                    .ok_or_else(|| RequestError::not_found("request status", id))?
                    .id,
            ),
            None => None,
        };
        let credit_type_id = match query.credit_type_id {
            Some(id) => Some(
                self.reference
                    .get_credit_type(&id)
                    .await?
                    .ok_or_else(|| RequestError::not_found("credit type", id))?
                    .id,
            ),
            None => None,
        };

        let request_query = RequestQuery {
            filter: RequestFilter {
                client_id: query.client_id,
                status_id,
                credit_type_id,
            },
            page,
            order_by,
            sort_order,
        };
        let (items, total) = self.requests.list(&request_query).await?;

        tracing::debug!(
            total,
            page = page.page(),
            order_by = %order_by,
            "Listed credit requests"
        );
        Ok(Page::new(items, total, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::request::test_support::TestContext;
    use crate::domain::foundation::RequestId;
    use crate::domain::request::status_codes;
    use crate::domain::risk::fixtures;

    async fn seed(ctx: &TestContext, amounts: &[f64]) -> Vec<CreditRequest> {
        let pending = ctx.status_id(status_codes::PENDING).await;
        let credit_type = ctx.credit_type_id().await;
        let mut stored = Vec::new();
        for amount in amounts {
            let mut terms = fixtures::strong_terms();
            terms.requested_amount = *amount;
            let request = CreditRequest::new(
                RequestId::new(),
                UserId::new(),
                credit_type,
                pending,
                terms,
                None,
                None,
            )
            .unwrap();
            ctx.requests.save(&request).await.unwrap();
            stored.push(request);
        }
        stored
    }

    fn handler(ctx: &TestContext) -> ListRequestsHandler {
        ListRequestsHandler::new(ctx.requests.clone(), ctx.reference.clone())
    }

    #[tokio::test]
    async fn pages_sorted_results_with_totals() {
        let ctx = TestContext::new().await;
        seed(&ctx, &[30.0e6, 10.0e6, 50.0e6, 20.0e6, 40.0e6]).await;

        let page = handler(&ctx)
            .handle(ListRequestsQuery {
                page: Some(2),
                per_page: Some(2),
                order_by: Some("requested_amount".to_string()),
                sort_order: Some("desc".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 2);
        let amounts: Vec<f64> = page.items.iter().map(|r| r.terms().requested_amount).collect();
        assert_eq!(amounts, vec![30.0e6, 20.0e6]);
    }

    #[tokio::test]
    async fn filters_by_client() {
        let ctx = TestContext::new().await;
        seed(&ctx, &[10.0e6, 20.0e6]).await;
        let own = ctx.stored_request().await;

        let page = handler(&ctx)
            .handle(ListRequestsQuery {
                client_id: Some(ctx.client_id),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id(), own.id());
    }

    #[tokio::test]
    async fn filters_by_resolved_status() {
        let ctx = TestContext::new().await;
        seed(&ctx, &[10.0e6, 20.0e6]).await;

        let approved = handler(&ctx)
            .handle(ListRequestsQuery {
                status_id: Some(ctx.status_id(status_codes::APPROVED).await),
                ..Default::default()
            })
            .await
            .unwrap();
        let pending = handler(&ctx)
            .handle(ListRequestsQuery {
                status_id: Some(ctx.status_id(status_codes::PENDING).await),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(approved.total, 0);
        assert_eq!(pending.total, 2);
    }

    #[tokio::test]
    async fn unresolved_filters_are_not_found() {
        let ctx = TestContext::new().await;

        let status = handler(&ctx)
            .handle(ListRequestsQuery {
                status_id: Some(StatusId::new()),
                ..Default::default()
            })
            .await;
        let credit_type = handler(&ctx)
            .handle(ListRequestsQuery {
                credit_type_id: Some(CreditTypeId::new()),
                ..Default::default()
            })
            .await;

        assert!(matches!(status, Err(RequestError::NotFound { entity: "request status", .. })));
        assert!(matches!(credit_type, Err(RequestError::NotFound { entity: "credit type", .. })));
    }

    #[tokio::test]
    async fn disallowed_sort_parameters_are_validation_errors() {
        let ctx = TestContext::new().await;

        let by = handler(&ctx)
            .handle(ListRequestsQuery {
                order_by: Some("client_id; DROP TABLE".to_string()),
                ..Default::default()
            })
            .await;
        let order = handler(&ctx)
            .handle(ListRequestsQuery {
                sort_order: Some("sideways".to_string()),
                ..Default::default()
            })
            .await;

        match by {
            Err(RequestError::Validation(e)) => assert_eq!(e.field(), "order_by"),
            other => panic!("expected validation error, got {:?}", other),
        }
        match order {
            Err(RequestError::Validation(e)) => assert_eq!(e.field(), "sort_order"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_store_has_zero_pages() {
        let ctx = TestContext::new().await;

        let page = handler(&ctx).handle(ListRequestsQuery::default()).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.per_page, DEFAULT_PER_PAGE);
    }
}
