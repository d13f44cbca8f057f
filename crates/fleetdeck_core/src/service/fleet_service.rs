//! Fleet mutation use-case service.
//!
//! # Responsibility
//! - Validate and append new ship/job records above the repository
//!   layer ("Add New Ship" / "Create Maintenance Job" quick actions).
//! - Install deterministic demo data on first run.
//!
//! # Invariants
//! - Appends never disturb existing records: the stored collection is
//!   loaded, extended, and written back wholesale.
//! - A new job must reference an existing ship; load-time soft
//!   references stay unvalidated, creation does not.
//! - Display names must not be blank after trim.

use crate::model::component::Component;
use crate::model::job::{Job, JobId, STATUS_COMPLETED, STATUS_IN_PROGRESS, STATUS_OPEN};
use crate::model::ship::{Ship, ShipId};
use crate::repo::{ComponentRepository, JobRepository, RepoError, ShipRepository};
use chrono::{Months, NaiveDate};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Result type used by fleet mutation operations.
pub type FleetResult<T> = Result<T, FleetServiceError>;

/// Errors from fleet mutation operations.
#[derive(Debug)]
pub enum FleetServiceError {
    /// Display name is blank after trim.
    InvalidDisplayName,
    /// New job references a ship that is not in the fleet collection.
    UnknownShip(ShipId),
    /// Repository-level failure.
    Repo(RepoError),
}

impl Display for FleetServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDisplayName => write!(f, "display name must not be blank"),
            Self::UnknownShip(id) => write!(f, "ship not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FleetServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::InvalidDisplayName | Self::UnknownShip(_) => None,
        }
    }
}

impl From<RepoError> for FleetServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Request model for registering a ship.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewShip {
    pub name: String,
    pub imo: Option<String>,
    pub flag: Option<String>,
}

/// Request model for creating a maintenance job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub ship_id: ShipId,
    pub component_id: Option<Uuid>,
    pub job_type: Option<String>,
    pub priority: Option<String>,
    /// Defaults to "Open" when `None`. Free string, not validated.
    pub status: Option<String>,
    pub scheduled_date: Option<NaiveDate>,
}

/// Use-case service for fleet mutations and demo seeding.
pub struct FleetService<S, C, J>
where
    S: ShipRepository,
    C: ComponentRepository,
    J: JobRepository,
{
    ships: S,
    components: C,
    jobs: J,
}

impl<S, C, J> FleetService<S, C, J>
where
    S: ShipRepository,
    C: ComponentRepository,
    J: JobRepository,
{
    /// Creates a service over the provided repository implementations.
    pub fn new(ships: S, components: C, jobs: J) -> Self {
        Self {
            ships,
            components,
            jobs,
        }
    }

    /// Lists all ships in collection order.
    pub fn ships(&self) -> FleetResult<Vec<Ship>> {
        Ok(self.ships.load_all()?)
    }

    /// Lists all jobs in collection order.
    pub fn jobs(&self) -> FleetResult<Vec<Job>> {
        Ok(self.jobs.load_all()?)
    }

    /// Appends a new ship and returns its generated id.
    ///
    /// # Contract
    /// - `name` must not be blank after trim.
    /// - Existing records are preserved byte-for-byte in order.
    pub fn add_ship(&self, request: NewShip) -> FleetResult<ShipId> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(FleetServiceError::InvalidDisplayName);
        }

        let mut ships = self.ships.load_all()?;
        let mut ship = Ship::new(name);
        ship.imo = request.imo;
        ship.flag = request.flag;
        let id = ship.id;
        ships.push(ship);
        self.ships.save_all(&ships)?;

        info!("event=ship_added module=service status=ok ship_id={id}");
        Ok(id)
    }

    /// Appends a new job and returns its generated id.
    ///
    /// # Contract
    /// - `ship_id` must name a ship currently in the fleet collection.
    /// - `status` defaults to "Open"; any provided string is stored
    ///   verbatim (open status set).
    pub fn add_job(&self, request: NewJob) -> FleetResult<JobId> {
        let ships = self.ships.load_all()?;
        if !ships.iter().any(|ship| ship.id == request.ship_id) {
            return Err(FleetServiceError::UnknownShip(request.ship_id));
        }

        let mut jobs = self.jobs.load_all()?;
        let mut job = Job::new(request.ship_id);
        job.component_id = request.component_id;
        job.job_type = request.job_type;
        job.priority = request.priority;
        if let Some(status) = request.status {
            job.status = status;
        }
        job.scheduled_date = request.scheduled_date;
        let id = job.id;
        jobs.push(job);
        self.jobs.save_all(&jobs)?;

        info!("event=job_added module=service status=ok job_id={id}");
        Ok(id)
    }

    /// Installs a small demo fleet when the store is empty.
    ///
    /// Returns `true` when data was written, `false` when any of the
    /// three collections already holds records (nothing is touched in
    /// that case, since seeding overwrites all three wholesale).
    pub fn seed_demo_data(&self, today: NaiveDate) -> FleetResult<bool> {
        let store_in_use = !self.ships.load_all()?.is_empty()
            || !self.components.load_all()?.is_empty()
            || !self.jobs.load_all()?.is_empty();
        if store_in_use {
            info!("event=seed_skipped module=service status=ok reason=store_in_use");
            return Ok(false);
        }

        let mut aurora = Ship::new("MV Aurora");
        aurora.imo = Some("9321483".to_string());
        aurora.flag = Some("Panama".to_string());
        aurora.status = Some("Active".to_string());

        let mut meridian = Ship::new("SS Meridian");
        meridian.imo = Some("9176187".to_string());
        meridian.flag = Some("Liberia".to_string());
        meridian.status = Some("Under Maintenance".to_string());

        let mut engine = Component::new(aurora.id, "Main Engine");
        engine.serial_number = Some("ME-1024".to_string());
        // Serviced well past the three-month cutoff: shows up as overdue.
        engine.last_maintenance_date = today.checked_sub_months(Months::new(5));

        let mut radar = Component::new(meridian.id, "Radar Array");
        radar.serial_number = Some("RA-2201".to_string());
        radar.last_maintenance_date = today.checked_sub_months(Months::new(1));

        let mut overhaul = Job::new(aurora.id);
        overhaul.component_id = Some(engine.id);
        overhaul.job_type = Some("Overhaul".to_string());
        overhaul.priority = Some("High".to_string());
        overhaul.status = STATUS_IN_PROGRESS.to_string();
        overhaul.scheduled_date = today.checked_sub_months(Months::new(1));

        let mut inspection = Job::new(meridian.id);
        inspection.component_id = Some(radar.id);
        inspection.job_type = Some("Inspection".to_string());
        inspection.priority = Some("Medium".to_string());
        inspection.status = STATUS_COMPLETED.to_string();
        inspection.scheduled_date = today.checked_sub_months(Months::new(2));

        let mut survey = Job::new(aurora.id);
        survey.job_type = Some("Hull Survey".to_string());
        survey.priority = Some("Low".to_string());
        survey.status = STATUS_OPEN.to_string();
        survey.scheduled_date = today.checked_add_months(Months::new(1));

        self.ships.save_all(&[aurora, meridian])?;
        self.components.save_all(&[engine, radar])?;
        self.jobs.save_all(&[overhaul, inspection, survey])?;

        info!("event=seed_installed module=service status=ok ships=2 components=2 jobs=3");
        Ok(true)
    }
}
