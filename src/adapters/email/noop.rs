//! No-op mailer.

use async_trait::async_trait;

use crate::ports::{DeliveryError, Mailer, OutboundEmail};

/// Mailer that drops every mail.
///
/// Substituted when the `email` configuration section is absent so the
/// lifecycle handlers never branch on a missing channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), DeliveryError> {
        tracing::debug!(to = %email.to, subject = %email.subject, "Mail channel not configured, skipping");
        Ok(())
    }
}
