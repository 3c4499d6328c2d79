//! Mail adapters.
//!
//! - [`ResendMailer`] - Sends through the Resend HTTP API
//! - [`NoopMailer`] - Stand-in when no mail provider is configured
//! - [`HtmlMailRenderer`] - Subject and HTML body of lifecycle mails

mod noop;
mod resend;
mod templates;

pub use noop::NoopMailer;
pub use resend::{ResendConfig, ResendMailer, RESEND_API_BASE_URL};
pub use templates::{HtmlMailRenderer, DEFAULT_REJECTION_REASON};
