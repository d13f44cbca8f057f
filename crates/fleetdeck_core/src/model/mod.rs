//! Domain model for ships, installed components, and maintenance jobs.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one flat record shape per collection, matching the persisted
//!   camelCase layout.
//!
//! # Invariants
//! - Every record is identified by a stable UUID.
//! - Cross-collection references (`ship_id`, `component_id`) are soft:
//!   they are never enforced at load time.
//! - Staleness ("overdue") is derived from dates, never stored.

pub mod component;
pub mod job;
pub mod ship;
pub mod user;
