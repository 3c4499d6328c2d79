//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate requests and trigger notifications; query
//! handlers only read.

pub mod handlers;

pub use handlers::*;
