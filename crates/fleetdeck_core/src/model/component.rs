//! Installed-component domain model and staleness derivation.
//!
//! # Responsibility
//! - Define the component record carried in the `components` collection.
//! - Derive overdue state from `last_maintenance_date` on demand.
//!
//! # Invariants
//! - `ship_id` is a soft reference; no foreign-key check exists.
//! - Overdue is computed against a caller-supplied reference date so
//!   aggregation stays deterministic under test.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an installed component.
pub type ComponentId = Uuid;

/// Maintenance interval after which a component counts as overdue.
const OVERDUE_AFTER_MONTHS: u32 = 3;

/// One piece of equipment installed on a ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Stable global ID.
    pub id: ComponentId,
    /// Owning ship (soft reference, never validated on load).
    pub ship_id: Uuid,
    /// Display name, e.g. "Main Engine".
    #[serde(default)]
    pub name: String,
    /// Manufacturer serial number, when recorded.
    #[serde(default)]
    pub serial_number: Option<String>,
    /// Date the component was first installed.
    #[serde(default)]
    pub installation_date: Option<NaiveDate>,
    /// Date of the most recent completed maintenance.
    ///
    /// Absent for components that have never been serviced; such
    /// components are never counted as overdue.
    #[serde(default)]
    pub last_maintenance_date: Option<NaiveDate>,
}

impl Component {
    /// Creates a component installed on `ship_id` with a generated ID.
    pub fn new(ship_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            ship_id,
            name: name.into(),
            serial_number: None,
            installation_date: None,
            last_maintenance_date: None,
        }
    }

    /// Returns whether this component is overdue for maintenance as of
    /// `today`.
    ///
    /// # Contract
    /// - Overdue iff `last_maintenance_date` is strictly before `today`
    ///   rolled back three calendar months.
    /// - The rollback clamps to the last valid day of the target month
    ///   (May 31 minus 3 months is Feb 28, or Feb 29 in a leap year).
    /// - The boundary is exclusive: a component serviced exactly on the
    ///   rolled-back date is NOT overdue.
    /// - A component with no recorded maintenance date is never overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        let Some(last_maintenance) = self.last_maintenance_date else {
            return false;
        };
        match overdue_cutoff(today) {
            Some(cutoff) => last_maintenance < cutoff,
            None => false,
        }
    }
}

/// Returns the maintenance cutoff date: `today` rolled back three
/// calendar months, clamped to a valid day.
///
/// `None` only near the representable date minimum.
pub fn overdue_cutoff(today: NaiveDate) -> Option<NaiveDate> {
    today.checked_sub_months(Months::new(OVERDUE_AFTER_MONTHS))
}
