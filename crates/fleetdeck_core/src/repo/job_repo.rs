//! Job collection repository.

use crate::model::job::Job;
use crate::repo::{decode_collection, encode_collection, RepoResult};
use crate::store::kv::KvStore;
use rusqlite::Connection;

/// Collection key holding the serialized job records.
pub const JOBS_COLLECTION: &str = "jobs";

/// Repository interface for the `jobs` collection.
pub trait JobRepository {
    /// Loads every stored job in collection order.
    fn load_all(&self) -> RepoResult<Vec<Job>>;
    /// Replaces the whole stored collection with `jobs`.
    fn save_all(&self, jobs: &[Job]) -> RepoResult<()>;
}

/// KV-backed job repository.
pub struct KvJobRepository<'conn> {
    store: KvStore<'conn>,
}

impl<'conn> KvJobRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            store: KvStore::new(conn),
        }
    }
}

impl JobRepository for KvJobRepository<'_> {
    fn load_all(&self) -> RepoResult<Vec<Job>> {
        let body = self.store.get_text(JOBS_COLLECTION)?;
        Ok(decode_collection(JOBS_COLLECTION, body.as_deref()))
    }

    fn save_all(&self, jobs: &[Job]) -> RepoResult<()> {
        let body = encode_collection(jobs)?;
        self.store.put_text(JOBS_COLLECTION, &body)?;
        Ok(())
    }
}
