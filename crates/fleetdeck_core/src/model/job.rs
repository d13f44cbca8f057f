//! Maintenance-job domain model.
//!
//! # Responsibility
//! - Define the job record carried in the `jobs` collection.
//! - Provide exact-match helpers for the two tracked status strings.
//!
//! # Invariants
//! - `status` is an open string set: well-known values exist as
//!   constants, but nothing constrains writes and no state machine
//!   governs transitions.
//! - Status matching is exact and case-sensitive; unrecognized values
//!   are silently excluded from every tracked bucket.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a maintenance job.
pub type JobId = Uuid;

/// Well-known job status values. Not a closed set.
pub const STATUS_OPEN: &str = "Open";
pub const STATUS_IN_PROGRESS: &str = "In Progress";
pub const STATUS_COMPLETED: &str = "Completed";
pub const STATUS_CANCELLED: &str = "Cancelled";

/// One scheduled or historical maintenance job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Stable global ID.
    pub id: JobId,
    /// Ship this job applies to (soft reference).
    pub ship_id: Uuid,
    /// Component this job applies to, when scoped below ship level.
    #[serde(default)]
    pub component_id: Option<Uuid>,
    /// Free-form job category, e.g. "Inspection", "Repair".
    #[serde(default)]
    pub job_type: Option<String>,
    /// Free-form priority label, e.g. "High".
    #[serde(default)]
    pub priority: Option<String>,
    /// Open string status; see the `STATUS_*` constants.
    #[serde(default)]
    pub status: String,
    /// Calendar date the job is planned for. Jobs without one cannot be
    /// placed on the calendar.
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
}

impl Job {
    /// Creates a job for `ship_id` with status [`STATUS_OPEN`].
    pub fn new(ship_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            ship_id,
            component_id: None,
            job_type: None,
            priority: None,
            status: STATUS_OPEN.to_string(),
            scheduled_date: None,
        }
    }

    /// Exact-match check against [`STATUS_IN_PROGRESS`].
    pub fn is_in_progress(&self) -> bool {
        self.status == STATUS_IN_PROGRESS
    }

    /// Exact-match check against [`STATUS_COMPLETED`].
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }
}
