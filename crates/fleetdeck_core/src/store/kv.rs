//! Key-value accessor over the `collections` table.
//!
//! # Responsibility
//! - Provide `get_text`/`put_text` primitives for named collections.
//! - Own upsert semantics for collection bodies.
//!
//! # Invariants
//! - `put_text` replaces the full body atomically (single statement).
//! - Absent keys read as `None`, never as an error.

use crate::db::DbResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Thin accessor over one migrated connection.
pub struct KvStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> KvStore<'conn> {
    /// Constructs an accessor from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Reads the raw body stored under `name`.
    ///
    /// Returns `None` when the collection has never been written.
    pub fn get_text(&self, name: &str) -> DbResult<Option<String>> {
        let body = self
            .conn
            .query_row(
                "SELECT body FROM collections WHERE name = ?1;",
                params![name],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(body)
    }

    /// Writes `body` under `name`, replacing any previous value.
    pub fn put_text(&self, name: &str, body: &str) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO collections (name, body, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(name) DO UPDATE SET
                body = excluded.body,
                updated_at = excluded.updated_at;",
            params![name, body],
        )?;
        Ok(())
    }

    /// Deletes the collection stored under `name`, if present.
    pub fn remove(&self, name: &str) -> DbResult<()> {
        self.conn
            .execute("DELETE FROM collections WHERE name = ?1;", params![name])?;
        Ok(())
    }
}
