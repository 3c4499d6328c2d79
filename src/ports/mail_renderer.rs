//! Mail renderer port - turns lifecycle events into subject and HTML body.

use crate::domain::request::CreditRequest;

/// A rendered mail without recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMail {
    pub subject: String,
    pub html_body: String,
}

/// Renders the mails sent by the request lifecycle.
pub trait RequestMailRenderer: Send + Sync {
    fn request_submitted(&self, request: &CreditRequest) -> RenderedMail;

    /// Shows the monthly installment of the approved amount.
    fn request_approved(&self, request: &CreditRequest) -> RenderedMail;

    /// Lists the reason and the warning flags of the last scoring.
    fn request_rejected(&self, request: &CreditRequest, reason: Option<&str>) -> RenderedMail;
}
