//! Ship domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a ship record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ShipId = Uuid;

/// One vessel in the tracked fleet.
///
/// Only `id` uniqueness is assumed; a collection may legitimately
/// contain ships with duplicate names. Optional fields default to
/// `None` so partially filled records from older store layouts still
/// deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    /// Stable global ID used for soft references from components/jobs.
    pub id: ShipId,
    /// Display name shown in fleet listings.
    #[serde(default)]
    pub name: String,
    /// IMO registration number, when known.
    #[serde(default)]
    pub imo: Option<String>,
    /// Flag state, when known.
    #[serde(default)]
    pub flag: Option<String>,
    /// Free-form operational status label ("Active", "Under Maintenance", ...).
    #[serde(default)]
    pub status: Option<String>,
}

impl Ship {
    /// Creates a ship with a generated stable ID and no metadata.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            imo: None,
            flag: None,
            status: None,
        }
    }
}
