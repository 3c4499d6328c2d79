//! LifecycleNotifier - Side effects of create, approve and reject.
//!
//! Runs after the request mutation is persisted, in a fixed order:
//! notification record, then push, then mail. Only the notification record
//! is a persistence write; push and mail failures are logged and swallowed.

use std::sync::Arc;

use crate::application::handlers::notification::NotificationDispatcher;
use crate::domain::notification::{LifecycleEvent, LifecycleTemplates, NotificationPushEvent, NotificationView};
use crate::domain::request::{CreditRequest, RequestError};
use crate::ports::{
    ClientProfileReader, Mailer, NotificationRepository, OutboundEmail, PushChannel,
    RequestMailRenderer,
};

/// Sends the notification, push event and mail of a lifecycle step.
#[derive(Clone)]
pub struct LifecycleNotifier {
    dispatcher: NotificationDispatcher,
    templates: LifecycleTemplates,
    push: Arc<dyn PushChannel>,
    mailer: Arc<dyn Mailer>,
    renderer: Arc<dyn RequestMailRenderer>,
    profiles: Arc<dyn ClientProfileReader>,
}

impl LifecycleNotifier {
    pub fn new(
        notifications: Arc<dyn NotificationRepository>,
        templates: LifecycleTemplates,
        push: Arc<dyn PushChannel>,
        mailer: Arc<dyn Mailer>,
        renderer: Arc<dyn RequestMailRenderer>,
        profiles: Arc<dyn ClientProfileReader>,
    ) -> Self {
        Self {
            dispatcher: NotificationDispatcher::new(notifications),
            templates,
            push,
            mailer,
            renderer,
            profiles,
        }
    }

    /// # Errors
    ///
    /// - `Repository` if the notification record cannot be stored
    pub async fn notify(
        &self,
        request: &CreditRequest,
        event: LifecycleEvent,
        rejection_reason: Option<&str>,
    ) -> Result<(), RequestError> {
        let template = self.templates.for_event(event);
        let view = self.dispatcher.dispatch(*request.client_id(), template).await?;

        if let Some(view) = view {
            self.push(request, &view, event).await;
        }
        self.mail(request, event, rejection_reason).await;
        Ok(())
    }

    async fn push(&self, request: &CreditRequest, view: &NotificationView, event: LifecycleEvent) {
        let payload = match serde_json::to_value(NotificationPushEvent::new(view, request.id(), event)) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(
                    request_id = %request.id(),
                    user_id = %request.client_id(),
                    error = %e,
                    "Failed to encode push event"
                );
                return;
            }
        };

        if let Err(e) = self.push.send_event(request.client_id(), payload).await {
            tracing::warn!(
                request_id = %request.id(),
                user_id = %request.client_id(),
                error = %e,
                "Push delivery failed"
            );
        }
    }

    async fn mail(&self, request: &CreditRequest, event: LifecycleEvent, rejection_reason: Option<&str>) {
        let recipient = match self.profiles.get_profile(request.client_id()).await {
            Ok(Some(profile)) => profile.email,
            Ok(None) => {
                tracing::warn!(
                    request_id = %request.id(),
                    user_id = %request.client_id(),
                    "Client profile missing, mail skipped"
                );
                return;
            }
            Err(e) => {
                tracing::warn!(
                    request_id = %request.id(),
                    user_id = %request.client_id(),
                    error = %e,
                    "Client profile lookup failed, mail skipped"
                );
                return;
            }
        };

        let rendered = match event {
            LifecycleEvent::Created => self.renderer.request_submitted(request),
            LifecycleEvent::Approved => self.renderer.request_approved(request),
            LifecycleEvent::Rejected => self.renderer.request_rejected(request, rejection_reason),
        };

        let email = OutboundEmail {
            to: recipient,
            subject: rendered.subject,
            html_body: rendered.html_body,
        };
        if let Err(e) = self.mailer.send(email).await {
            tracing::warn!(
                request_id = %request.id(),
                user_id = %request.client_id(),
                error = %e,
                retryable = e.is_retryable(),
                "Mail delivery failed"
            );
        }
    }
}
