//! In-process adapters for the persistence ports.
//!
//! Backed by `tokio::sync::RwLock` maps. Used by the binary until a
//! database adapter exists, and by the integration tests.

mod client_profiles;
mod notifications;
mod reference_data;
mod requests;

pub use client_profiles::InMemoryClientProfiles;
pub use notifications::{default_templates, InMemoryNotificationRepository};
pub use reference_data::InMemoryReferenceData;
pub use requests::InMemoryRequestRepository;
