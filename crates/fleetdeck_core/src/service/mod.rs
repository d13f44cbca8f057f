//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into page-level use-case APIs.
//! - Keep presentation layers decoupled from storage details.
//!
//! # Invariants
//! - Every service call is one full load-then-compute pass; nothing is
//!   cached between calls, so staleness between views is accepted.

pub mod calendar_service;
pub mod dashboard_service;
pub mod fleet_service;
