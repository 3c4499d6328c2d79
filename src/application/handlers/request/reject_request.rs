//! RejectRequestHandler - Command handler for analyst rejection.

use std::sync::Arc;

use crate::domain::foundation::{RequestId, UserId};
use crate::domain::notification::LifecycleEvent;
use crate::domain::request::{status_codes, CreditRequest, RequestError};
use crate::ports::{ReferenceDataReader, RequestRepository};

use super::notifier::LifecycleNotifier;
use super::references::ReferenceResolver;

/// Command to reject a request.
#[derive(Debug, Clone)]
pub struct RejectRequestCommand {
    pub request_id: RequestId,
    pub analyst_id: UserId,
    pub reason: Option<String>,
}

/// Handler for request rejection.
///
/// The rejection mail lists the warning flags of the last scoring; the
/// request is not rescored here.
pub struct RejectRequestHandler {
    requests: Arc<dyn RequestRepository>,
    references: ReferenceResolver,
    notifier: LifecycleNotifier,
}

impl RejectRequestHandler {
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

    pub async fn handle(&self, cmd: RejectRequestCommand) -> Result<CreditRequest, RequestError> {
        let mut request = self
            .requests
            .find_by_id(&cmd.request_id)
            .await?
            .ok_or_else(|| RequestError::not_found("request", cmd.request_id))?;

        let rejected = self.references.canonical_status(status_codes::REJECTED).await?;
        request.reject(rejected.id, cmd.analyst_id, cmd.reason.clone())?;
        self.requests.update(&request).await?;

        tracing::info!(
            request_id = %request.id(),
            analyst_id = %cmd.analyst_id,
            "Credit request rejected"
        );

        self.notifier
            .notify(&request, LifecycleEvent::Rejected, cmd.reason.as_deref())
            .await?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::request::test_support::TestContext;
    use crate::application::handlers::request::{UpdateRequestCommand, UpdateRequestHandler};
    use crate::domain::request::RequestChanges;

    fn handler(ctx: &TestContext) -> RejectRequestHandler {
        RejectRequestHandler::new(ctx.requests.clone(), ctx.reference.clone(), ctx.notifier())
    }

    #[tokio::test]
    async fn rejects_and_clears_approval() {
        let ctx = TestContext::new().await;
        let request = ctx.stored_request().await;

        let rejected = handler(&ctx)
            .handle(RejectRequestCommand {
                request_id: *request.id(),
                analyst_id: UserId::new(),
                reason: Some("Insufficient repayment capacity".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(*rejected.status_id(), ctx.status_id(status_codes::REJECTED).await);
        assert_eq!(rejected.approved_amount(), Some(0.0));
        assert!(rejected.approved_at().is_none());
        assert_eq!(rejected.rejection_reason(), Some("Insufficient repayment capacity"));

        let events = ctx.push.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].1["status"], "rejected");
    }

    #[tokio::test]
    async fn rejection_mail_lists_last_warning_flags() {
        let ctx = TestContext::new().await;
        let request = ctx.stored_request().await;
        UpdateRequestHandler::new(ctx.requests.clone(), ctx.reference.clone(), ctx.profiles.clone())
            .handle(UpdateRequestCommand {
                request_id: *request.id(),
                changes: RequestChanges {
                    collateral_value: Some(Some(0.0)),
                    previous_defaults: Some(2),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        let rejected = handler(&ctx)
            .handle(RejectRequestCommand {
                request_id: *request.id(),
                analyst_id: UserId::new(),
                reason: None,
            })
            .await
            .unwrap();

        assert!(!rejected.warning_flags().is_empty());
        let mail = &ctx.mailer.sent()[0];
        assert_eq!(mail.subject, "Credit request rejected");
        assert!(mail.html_body.contains("Does not meet current evaluation criteria"));
    }

    #[tokio::test]
    async fn unknown_request_is_not_found() {
        let ctx = TestContext::new().await;

        let result = handler(&ctx)
            .handle(RejectRequestCommand {
                request_id: RequestId::new(),
                analyst_id: UserId::new(),
                reason: None,
            })
            .await;

        assert!(matches!(result, Err(RequestError::NotFound { .. })));
        assert!(ctx.mailer.sent().is_empty());
    }
}
