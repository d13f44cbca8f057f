//! Local key-value store accessor.
//!
//! # Responsibility
//! - Read and write named collection bodies as raw text.
//! - Keep SQL details of the `collections` table in one place.
//!
//! # Invariants
//! - A collection body is always written wholesale (last write wins).
//! - Callers above this layer never touch raw SQL.

pub mod kv;

pub use kv::KvStore;
