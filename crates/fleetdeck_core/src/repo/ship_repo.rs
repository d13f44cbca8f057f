//! Ship collection repository.

use crate::model::ship::Ship;
use crate::repo::{decode_collection, encode_collection, RepoResult};
use crate::store::kv::KvStore;
use rusqlite::Connection;

/// Collection key holding the serialized ship records.
pub const SHIPS_COLLECTION: &str = "ships";

/// Repository interface for the `ships` collection.
pub trait ShipRepository {
    /// Loads every stored ship in collection order.
    fn load_all(&self) -> RepoResult<Vec<Ship>>;
    /// Replaces the whole stored collection with `ships`.
    fn save_all(&self, ships: &[Ship]) -> RepoResult<()>;
}

/// KV-backed ship repository.
pub struct KvShipRepository<'conn> {
    store: KvStore<'conn>,
}

impl<'conn> KvShipRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            store: KvStore::new(conn),
        }
    }
}

impl ShipRepository for KvShipRepository<'_> {
    fn load_all(&self) -> RepoResult<Vec<Ship>> {
        let body = self.store.get_text(SHIPS_COLLECTION)?;
        Ok(decode_collection(SHIPS_COLLECTION, body.as_deref()))
    }

    fn save_all(&self, ships: &[Ship]) -> RepoResult<()> {
        let body = encode_collection(ships)?;
        self.store.put_text(SHIPS_COLLECTION, &body)?;
        Ok(())
    }
}
