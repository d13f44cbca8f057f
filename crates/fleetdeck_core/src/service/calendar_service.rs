//! Calendar schedule use-case service.
//!
//! # Responsibility
//! - Load jobs wholesale and group them by scheduled date for the
//!   calendar renderer.
//!
//! # Invariants
//! - The default scope is fleet-wide; per-ship scoping is an explicit
//!   opt-in filter.
//! - Jobs without a scheduled date are dropped: they cannot be placed
//!   on a date grid.
//! - Window/date navigation is the renderer's concern, not ours.

use crate::model::job::Job;
use crate::model::ship::ShipId;
use crate::repo::{JobRepository, RepoResult};
use chrono::NaiveDate;
use log::info;
use std::collections::BTreeMap;

/// Jobs grouped by scheduled date, ordered chronologically. Within one
/// date, jobs keep collection order.
pub type Schedule = BTreeMap<NaiveDate, Vec<Job>>;

/// Use-case service feeding the calendar grid.
pub struct CalendarService<J: JobRepository> {
    jobs: J,
}

impl<J: JobRepository> CalendarService<J> {
    /// Creates a service over the provided job repository.
    pub fn new(jobs: J) -> Self {
        Self { jobs }
    }

    /// Loads all jobs and groups them by scheduled date.
    ///
    /// `ship` narrows the schedule to one ship; `None` keeps the
    /// fleet-wide view.
    pub fn load_schedule(&self, ship: Option<ShipId>) -> RepoResult<Schedule> {
        let jobs = self.jobs.load_all()?;
        let total = jobs.len();

        let mut schedule = Schedule::new();
        for job in jobs {
            if let Some(ship_id) = ship {
                if job.ship_id != ship_id {
                    continue;
                }
            }
            let Some(date) = job.scheduled_date else {
                continue;
            };
            schedule.entry(date).or_default().push(job);
        }

        info!(
            "event=calendar_load module=service status=ok jobs={} dates={} scoped={}",
            total,
            schedule.len(),
            ship.is_some()
        );

        Ok(schedule)
    }
}
