//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ClientProfileReader` - Client profile lookup
//! - `ReferenceDataReader` - Credit types and request statuses
//! - `RequestRepository` - Credit request persistence and listing
//! - `NotificationRepository` - Notification templates and deliveries
//!
//! ## Delivery Ports
//!
//! - `Mailer` / `RequestMailRenderer` - Lifecycle mails
//! - `PushChannel` - Realtime push to connected users

mod client_profile_reader;
mod delivery;
mod mail_renderer;
mod notification_repository;
mod reference_data_reader;
mod request_repository;

pub use client_profile_reader::ClientProfileReader;
pub use delivery::{DeliveryError, Mailer, OutboundEmail, PushChannel};
pub use mail_renderer::{RenderedMail, RequestMailRenderer};
pub use notification_repository::NotificationRepository;
pub use reference_data_reader::ReferenceDataReader;
pub use request_repository::RequestRepository;
