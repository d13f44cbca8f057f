//! Core domain logic for Fleetdeck ship maintenance tracking.
//! This crate is the single source of truth for business invariants.

pub mod auth;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;
pub mod store;

pub use auth::validate_credentials;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::component::{Component, ComponentId};
pub use model::job::{Job, JobId};
pub use model::ship::{Ship, ShipId};
pub use model::user::{Role, User};
pub use repo::{
    ComponentRepository, JobRepository, KvComponentRepository, KvJobRepository, KvShipRepository,
    RepoError, RepoResult, ShipRepository,
};
pub use service::calendar_service::{CalendarService, Schedule};
pub use service::dashboard_service::{
    DashboardService, DashboardSnapshot, DashboardStats, ShipJobCount,
};
pub use service::fleet_service::{FleetResult, FleetService, FleetServiceError, NewJob, NewShip};
pub use session::SessionContext;
pub use store::kv::KvStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
