//! Agri Credit - Agricultural loan origination backend
//!
//! This crate scores agricultural credit requests, drives them through
//! their review lifecycle (submit, update, approve, reject) and notifies
//! the applicant through stored notifications, realtime push and mail.

pub mod adapters;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
