//! Component collection repository.

use crate::model::component::Component;
use crate::repo::{decode_collection, encode_collection, RepoResult};
use crate::store::kv::KvStore;
use rusqlite::Connection;

/// Collection key holding the serialized component records.
pub const COMPONENTS_COLLECTION: &str = "components";

/// Repository interface for the `components` collection.
pub trait ComponentRepository {
    /// Loads every stored component in collection order.
    fn load_all(&self) -> RepoResult<Vec<Component>>;
    /// Replaces the whole stored collection with `components`.
    fn save_all(&self, components: &[Component]) -> RepoResult<()>;
}

/// KV-backed component repository.
pub struct KvComponentRepository<'conn> {
    store: KvStore<'conn>,
}

impl<'conn> KvComponentRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            store: KvStore::new(conn),
        }
    }
}

impl ComponentRepository for KvComponentRepository<'_> {
    fn load_all(&self) -> RepoResult<Vec<Component>> {
        let body = self.store.get_text(COMPONENTS_COLLECTION)?;
        Ok(decode_collection(COMPONENTS_COLLECTION, body.as_deref()))
    }

    fn save_all(&self, components: &[Component]) -> RepoResult<()> {
        let body = encode_collection(components)?;
        self.store.put_text(COMPONENTS_COLLECTION, &body)?;
        Ok(())
    }
}
