//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `email` - Resend mailer, no-op mailer and HTML mail templates
//! - `memory` - In-process stores for profiles, reference data, requests and notifications
//! - `websocket` - Push connection registry and the `/ws/:user_id` endpoint

pub mod email;
pub mod memory;
pub mod websocket;

pub use email::{HtmlMailRenderer, NoopMailer, ResendConfig, ResendMailer};
pub use memory::{
    InMemoryClientProfiles, InMemoryNotificationRepository, InMemoryReferenceData,
    InMemoryRequestRepository,
};
pub use websocket::{NoopPushChannel, PushConnectionRegistry};
