//! Dashboard aggregation use-case service.
//!
//! # Responsibility
//! - Load ships/components/jobs wholesale and compute the KPI summary,
//!   the recent-jobs slice, and the per-ship job breakdown in one pass.
//!
//! # Invariants
//! - Aggregation is pure over the loaded snapshot and an injected
//!   reference date; re-invocation over the same store yields the same
//!   result.
//! - Empty collections aggregate to all-zero stats, never an error.
//! - Status bucketing uses exact string equality; anything that is not
//!   exactly "In Progress" or "Completed" lands in neither bucket.

use crate::model::component::Component;
use crate::model::job::Job;
use crate::model::ship::{Ship, ShipId};
use crate::repo::{ComponentRepository, JobRepository, RepoResult, ShipRepository};
use chrono::NaiveDate;
use log::info;

/// Maximum number of rows in the recent-jobs slice.
const RECENT_JOBS_LIMIT: usize = 5;

/// KPI summary values rendered as dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// Number of ships in the fleet collection.
    pub total_ships: usize,
    /// Components past their maintenance cutoff as of the reference date.
    pub overdue_components: usize,
    /// Jobs with status exactly "In Progress".
    pub jobs_in_progress: usize,
    /// Jobs with status exactly "Completed".
    pub completed_jobs: usize,
}

/// Per-ship job count for the charts collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipJobCount {
    pub ship_id: ShipId,
    pub ship_name: String,
    pub job_count: usize,
}

/// Everything one dashboard render needs, computed in a single pass.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    /// Up to five jobs with the latest scheduled dates, descending.
    pub recent_jobs: Vec<Job>,
    /// Job counts per ship, in fleet collection order.
    pub jobs_per_ship: Vec<ShipJobCount>,
}

/// Use-case service aggregating the three collections for one page view.
pub struct DashboardService<S, C, J>
where
    S: ShipRepository,
    C: ComponentRepository,
    J: JobRepository,
{
    ships: S,
    components: C,
    jobs: J,
}

impl<S, C, J> DashboardService<S, C, J>
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

    /// Loads all three collections and aggregates them as of `today`.
    ///
    /// # Contract
    /// - One wholesale load per collection; mutations made elsewhere
    ///   after this call are invisible until the next call.
    /// - Never fails on empty or missing collections.
    pub fn load_snapshot(&self, today: NaiveDate) -> RepoResult<DashboardSnapshot> {
        let ships = self.ships.load_all()?;
        let components = self.components.load_all()?;
        let jobs = self.jobs.load_all()?;

        let stats = DashboardStats {
            total_ships: ships.len(),
            overdue_components: count_overdue(&components, today),
            jobs_in_progress: jobs.iter().filter(|job| job.is_in_progress()).count(),
            completed_jobs: jobs.iter().filter(|job| job.is_completed()).count(),
        };

        info!(
            "event=dashboard_aggregate module=service status=ok ships={} components={} jobs={} overdue={}",
            stats.total_ships,
            components.len(),
            jobs.len(),
            stats.overdue_components
        );

        Ok(DashboardSnapshot {
            stats,
            recent_jobs: recent_jobs(&jobs),
            jobs_per_ship: jobs_per_ship(&ships, &jobs),
        })
    }
}

/// Counts components overdue for maintenance as of `today`.
pub fn count_overdue(components: &[Component], today: NaiveDate) -> usize {
    components
        .iter()
        .filter(|component| component.is_overdue(today))
        .count()
}

/// Returns up to five jobs with the latest scheduled dates, descending.
///
/// # Contract
/// - Sort is stable: jobs sharing a scheduled date keep collection
///   order, so the result is deterministic and idempotent.
/// - Jobs without a scheduled date sort after every dated job.
pub fn recent_jobs(jobs: &[Job]) -> Vec<Job> {
    let mut sorted = jobs.to_vec();
    // Option<NaiveDate> orders None first, so comparing b to a both
    // descends by date and pushes dateless jobs to the tail.
    sorted.sort_by(|a, b| b.scheduled_date.cmp(&a.scheduled_date));
    sorted.truncate(RECENT_JOBS_LIMIT);
    sorted
}

/// Counts jobs per ship, in fleet collection order.
///
/// Ships without jobs appear with a zero count; jobs referencing an
/// unknown ship are skipped (soft references are never validated).
pub fn jobs_per_ship(ships: &[Ship], jobs: &[Job]) -> Vec<ShipJobCount> {
    ships
        .iter()
        .map(|ship| ShipJobCount {
            ship_id: ship.id,
            ship_name: ship.name.clone(),
            job_count: jobs.iter().filter(|job| job.ship_id == ship.id).count(),
        })
        .collect()
}
