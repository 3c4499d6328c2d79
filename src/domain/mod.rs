//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `risk` - Pure credit risk scoring
//! - `client` - Client profile record
//! - `request` - Credit request aggregate, reference data and listing queries
//! - `notification` - Notification templates, deliveries and push payloads

pub mod client;
pub mod foundation;
pub mod notification;
pub mod request;
pub mod risk;
