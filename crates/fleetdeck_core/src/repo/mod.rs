//! Collection repository contracts and KV-backed implementations.
//!
//! # Responsibility
//! - Define typed load/save contracts per collection so callers never
//!   parse raw text.
//! - Own the silent-to-empty decode policy for collection bodies.
//!
//! # Invariants
//! - An absent or unparseable collection body loads as an empty vec,
//!   never as an error; the parse failure is logged at warn.
//! - An individual record that fails to decode is skipped with a warn
//!   log; well-formed sibling records survive.
//! - Storage transport failures DO propagate as `RepoError::Db`.
//! - `save_all` replaces the full collection body; there are no
//!   incremental writes.

use crate::db::DbError;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod component_repo;
pub mod job_repo;
pub mod ship_repo;

pub use component_repo::{ComponentRepository, KvComponentRepository};
pub use job_repo::{JobRepository, KvJobRepository};
pub use ship_repo::{KvShipRepository, ShipRepository};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for collection persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite/bootstrap failure.
    Db(DbError),
    /// A record slice could not be serialized for storage.
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode collection body: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Decodes a collection body into typed records.
///
/// Absent (`None`) and malformed bodies both decode to an empty vec so
/// downstream aggregation degrades to zeros instead of failing. The
/// malformed case is logged; legitimate emptiness is not.
///
/// Decoding is per record: one record with a bad field value is
/// skipped (warn-logged) without discarding its well-formed siblings.
pub(crate) fn decode_collection<T: DeserializeOwned>(name: &str, body: Option<&str>) -> Vec<T> {
    let Some(body) = body else {
        return Vec::new();
    };

    let raw = match serde_json::from_str::<Vec<serde_json::Value>>(body) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(
                "event=collection_decode module=repo status=degraded collection={} error={} fallback=empty",
                name, err
            );
            return Vec::new();
        }
    };

    let mut records = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<T>(value) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(
                    "event=record_decode module=repo status=degraded collection={} index={} error={} fallback=skip",
                    name, index, err
                );
            }
        }
    }

    records
}

/// Encodes typed records into a collection body.
pub(crate) fn encode_collection<T: Serialize>(records: &[T]) -> RepoResult<String> {
    serde_json::to_string(records).map_err(RepoError::Encode)
}
